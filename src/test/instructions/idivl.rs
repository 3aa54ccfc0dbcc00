use super::*;

#[test]
fn immediate() {
    program_halts! {
        [(MOVL A INT 42), (IDIVL A INT 6)],
        [A = 7]
    };
}

#[test]
fn signed_quotient() {
    program_halts! {
        [(MOVL A INT -7), (IDIVL A INT 2)],
        [A = -3i32]
    };
}

#[test]
fn division_by_zero_faults_and_keeps_register() {
    program_halts! {
        [(MOVL A INT 42), (IDIVL A INT 0)],
        [A = 42, ERR = enum_to_word(Opcode::IDIVL)]
    };
}
