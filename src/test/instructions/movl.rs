use super::*;

#[test]
fn immediate() {
    program_halts! {
        [(MOVL A INT 65)],
        [A = 65]
    };
}

#[test]
fn register_type_is_additive() {
    program_halts! {
        [(MOVL A INT 5), (MOVL B A 3)],
        [A = 5, B = 8]
    };
}

#[test]
fn nop_type_moves_zero() {
    program_halts! {
        [(MOVL A INT 65), (MOVL A NOP 123)],
        [A = 0]
    };
}

#[test]
fn write_to_nop_register_is_discarded() {
    program_halts! {
        [(MOVL NOP INT 9)],
        [NOP = 0]
    };
}

#[test]
fn clears_a_fault_code() {
    program_halts! {
        [(IDIVL A INT 0), (MOVL ERR INT 0)],
        [ERR = 0]
    };
}
