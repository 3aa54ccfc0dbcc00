use super::*;

#[test]
fn masks_bits() {
    program_halts! {
        [(MOVL A INT 0xFF), (ANDL A INT 0x0F)],
        [A = 0x0F]
    };
}
