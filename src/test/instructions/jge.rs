use super::*;

#[test]
fn taken_on_equal() {
    let (processor, _, exit_code) = run_records(&records![
        (MOVL A INT 5),
        (CMPL A INT 5),
        (JGE NOP INT 5),
        (MOVL B INT 99),
        (INTL NOP INT 2)
    ]);

    assert_eq!(exit_code, ExitCode::Halted);
    assert_eq!(processor.register(RegisterId::B), 0);
}

#[test]
fn untaken_on_less() {
    let (processor, _, exit_code) = run_records(&records![
        (MOVL A INT 4),
        (CMPL A INT 5),
        (JGE NOP INT 5),
        (MOVL B INT 99),
        (INTL NOP INT 2)
    ]);

    assert_eq!(exit_code, ExitCode::Halted);
    assert_eq!(processor.register(RegisterId::B), 99);
}
