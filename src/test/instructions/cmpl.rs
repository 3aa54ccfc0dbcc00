use super::*;

#[test]
fn sets_the_flag_negative() {
    let processor = program_halts! {
        [(MOVL A INT 3), (CMPL A INT 5)],
        [A = 3]
    };

    assert_eq!(processor.flag(), -2);
}

#[test]
fn sets_the_flag_zero() {
    let processor = program_halts! {
        [(MOVL A INT 5), (CMPL A INT 5)],
        []
    };

    assert_eq!(processor.flag(), 0);
}

#[test]
fn sets_the_flag_positive() {
    let processor = program_halts! {
        [(MOVL A INT 9), (CMPL A INT 5)],
        []
    };

    assert_eq!(processor.flag(), 4);
}

#[test]
fn two_complement_wrap_in_comparison() {
    // 0x8000_0000 - 1 wraps to the most positive word
    let processor = program_halts! {
        [(MOVL A INT 0x80000000u32 as i64), (CMPL A INT 1)],
        []
    };

    assert_eq!(processor.flag(), 0x7FFF_FFFF);
}
