use super::*;

#[test]
fn immediate() {
    program_halts! {
        [(MOVL A INT 6), (IMUL A INT 7)],
        [A = 42]
    };
}

#[test]
fn negative_factor() {
    program_halts! {
        [(MOVL A INT 3), (IMUL A INT -2)],
        [A = -6i32]
    };
}
