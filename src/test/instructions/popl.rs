use super::*;

#[test]
fn pops_into_the_register() {
    let processor = program_halts! {
        [(MOVL A INT 42), (PUSHL NOP A 0), (MOVL A INT 0), (POPL A NOP 0)],
        [A = 42, ERR = 0]
    };

    assert_eq!(processor.aux_counter(), -1);
}

#[test]
fn pop_order_is_last_in_first_out() {
    program_halts! {
        [
            (PUSHL NOP INT 1),
            (PUSHL NOP INT 2),
            (POPL A NOP 0),
            (POPL B NOP 0)
        ],
        [A = 2, B = 1]
    };
}

#[test]
fn underflow_faults_and_keeps_the_register() {
    let processor = program_halts! {
        [(MOVL A INT 5), (POPL A NOP 0)],
        [A = 5, ERR = enum_to_word(Opcode::POPL)]
    };

    assert_eq!(processor.aux_counter(), -1);
}
