//! IN/OUT — the two-byte port instructions that defer to the board's
//! [`IoHandler`] instead of touching `memory`.

use super::Cpu;

impl Cpu {
    pub(crate) fn op_in(&mut self, imm: u16) -> bool {
        let port = imm as u8;
        self.a = self.io.input(port);
        false
    }

    pub(crate) fn op_out(&mut self, imm: u16) -> bool {
        let port = imm as u8;
        self.io.output(port, self.a);
        false
    }
}
