use super::*;

#[test]
fn stores_register_into_ram() {
    let processor = program_halts! {
        [(MOVL A INT 77), (STMOVL A INT 100)],
        [A = 77, ERR = 0]
    };

    assert_eq!(processor.ram()[100], 77);
}

#[test]
fn last_cell_is_in_range() {
    let processor = program_halts! {
        [(MOVL A INT 1), (STMOVL A INT 255)],
        [ERR = 0]
    };

    assert_eq!(processor.ram()[255], 1);
}

#[test]
fn store_past_the_end_faults() {
    program_halts! {
        [(MOVL A INT 1), (STMOVL A INT 256)],
        [ERR = enum_to_word(Opcode::STMOVL)]
    };
}

#[test]
fn large_memory_preset() {
    let (processor, _, exit_code) = run_records_m(
        constants::SIXTEEN_BIT_MAX_MEM,
        &records![
            (MOVL A INT 1),
            (STMOVL A INT 65534),
            (INTL NOP INT 2)
        ],
    );

    assert_eq!(exit_code, ExitCode::Halted);
    assert_eq!(processor.register(RegisterId::ERR), 0);
    assert_eq!(processor.ram()[65534], 1);
}

#[test]
fn base_relative_store() {
    let processor = program_halts! {
        [(MOVL BASE INT 40), (MOVL A INT 9), (STMOVL A BASE 2)],
        [ERR = 0]
    };

    assert_eq!(processor.ram()[42], 9);
}
