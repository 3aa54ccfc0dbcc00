use super::*;

#[test]
fn sys_exit_halts() {
    let (_, output, exit_code) = run_records(&records![(INTL NOP INT 2)]);

    assert_eq!(exit_code, ExitCode::Halted);
    assert!(output.is_empty());
}

#[test]
fn stdout_writes_ram_bytes() {
    let (_, output, exit_code) = run_records(&records![
        (MOVL A INT 72),
        (STMOVL A INT 100),
        (MOVL A INT 105),
        (STMOVL A INT 101),
        (MOVL A INT 100),
        (MOVL B INT 2),
        (INTL NOP INT 1),
        (INTL NOP INT 2)
    ]);

    assert_eq!(exit_code, ExitCode::Halted);
    assert_eq!(output, b"Hi");
}

#[test]
fn stdout_takes_the_low_byte_only() {
    let (_, output, _) = run_records(&records![
        (MOVL A INT 0x141),
        (STMOVL A INT 100),
        (MOVL A INT 100),
        (MOVL B INT 1),
        (INTL NOP INT 1),
        (INTL NOP INT 2)
    ]);

    assert_eq!(output, b"A");
}

#[test]
fn stdout_past_ram_faults_and_stops_emitting() {
    let (processor, output, exit_code) = run_records(&records![
        (MOVL A INT 255),
        (MOVL B INT 5),
        (INTL NOP INT 1),
        (INTL NOP INT 2)
    ]);

    assert_eq!(exit_code, ExitCode::Halted);
    assert_eq!(
        processor.register(RegisterId::ERR),
        enum_to_word(Opcode::INTL)
    );
    // Only the one in-range cell was emitted
    assert_eq!(output, [0u8]);
}

#[test]
fn unknown_code_faults() {
    program_halts! {
        [(INTL NOP INT 9)],
        [ERR = enum_to_word(Opcode::INTL)]
    };
}
