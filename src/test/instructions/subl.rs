use super::*;

#[test]
fn immediate() {
    program_halts! {
        [(MOVL A INT 42), (SUBL A INT 2)],
        [A = 40]
    };
}

#[test]
fn wraps_below_zero() {
    program_halts! {
        [(SUBL A INT 1)],
        [A = 0xFFFF_FFFFu32]
    };
}
