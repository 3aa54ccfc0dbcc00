use super::*;
use crate::record;

#[test]
fn unknown_opcode_faults_and_continues() {
    let program = [
        Record::new(0xFFFF, 0, 0, 0),
        record!(MOVL, A, INT, 7),
        record!(INTL, NOP, INT, 2),
    ];

    let (processor, _, exit_code) = run_records(&program[..]);

    assert_eq!(exit_code, ExitCode::Halted);
    assert_eq!(
        processor.register(RegisterId::ERR),
        constants::SEGMENTATION_FAULT
    );
    assert_eq!(processor.register(RegisterId::A), 7);
}

#[test]
fn unknown_register_faults_and_discards_the_write() {
    let program = [
        Record::new(
            enum_to_word(Opcode::MOVL),
            0xBEEF,
            enum_to_word(OperandType::INT),
            5,
        ),
        record!(INTL, NOP, INT, 2),
    ];

    let (processor, _, exit_code) = run_records(&program[..]);

    assert_eq!(exit_code, ExitCode::Halted);
    assert_eq!(
        processor.register(RegisterId::ERR),
        constants::SEGMENTATION_FAULT
    );
    for &id in &[RegisterId::A, RegisterId::B, RegisterId::C, RegisterId::D] {
        assert_eq!(processor.register(id), 0);
    }
}

#[test]
fn unknown_type_resolves_to_the_fault_code() {
    let program = [
        Record::new(enum_to_word(Opcode::MOVL), enum_to_word(RegisterId::A), 0x99, 0),
        record!(INTL, NOP, INT, 2),
    ];

    let (processor, _, _) = run_records(&program[..]);

    assert_eq!(
        processor.register(RegisterId::ERR),
        constants::SEGMENTATION_FAULT
    );
    assert_eq!(
        processor.register(RegisterId::A),
        constants::SEGMENTATION_FAULT
    );
}
