//! NOP/HLT/EI/DI/CMA/STC/CMC/DAA and the control-flow family: JMP/Jcc,
//! CALL/Ccc, RET/Rcc, RST, PCHL.

use super::Cpu;
use crate::flags::{self, FLAG_ALL, FLAG_S, FLAG_Z};
use log::debug;

impl Cpu {
    pub(crate) fn op_nop(&mut self, _imm: u16) -> bool {
        false
    }

    pub(crate) fn op_hlt(&mut self, _imm: u16) -> bool {
        debug!("HLT at pc={:#06x} inte={}", self.pc, self.inte);
        self.stopped = true;
        false
    }

    pub(crate) fn op_ei(&mut self, _imm: u16) -> bool {
        self.inte = true;
        false
    }

    pub(crate) fn op_di(&mut self, _imm: u16) -> bool {
        self.inte = false;
        false
    }

    pub(crate) fn op_cma(&mut self, _imm: u16) -> bool {
        self.a = !self.a;
        false
    }

    pub(crate) fn op_stc(&mut self, _imm: u16) -> bool {
        self.apply_carry_only(true);
        false
    }

    pub(crate) fn op_cmc(&mut self, _imm: u16) -> bool {
        let c = self.flag_set(flags::FLAG_C);
        self.apply_carry_only(!c);
        false
    }

    /// Decimal-adjust: nibble-plus-carry correction of `A` after a
    /// BCD addition.
    fn do_daa(&mut self) {
        let low = self.a & 0x0F;
        let mut adj = 0u8;
        let mut final_c = self.flag_set(flags::FLAG_C);

        if low > 9 || self.flag_set(flags::FLAG_AC) {
            adj |= 0x06;
        }
        let low_adjusted = low + (adj & 0x0F);
        if ((self.a >> 4) + (low_adjusted >> 4)) > 9 || self.flag_set(flags::FLAG_C) {
            adj |= 0x60;
            final_c = true;
        }

        let before = self.a;
        let res = before.wrapping_add(adj);
        let aux_carry = flags::logical_aux_carry(before, adj, res);
        self.a = res;

        let mut bits = 0u8;
        if flags::sign(res) {
            bits |= FLAG_S;
        }
        if flags::zero(res) {
            bits |= FLAG_Z;
        }
        if flags::parity(res) {
            bits |= flags::FLAG_P;
        }
        if aux_carry {
            bits |= flags::FLAG_AC;
        }
        if final_c {
            bits |= flags::FLAG_C;
        }
        self.set_flags(FLAG_ALL, bits);
    }

    pub(crate) fn op_daa(&mut self, _imm: u16) -> bool {
        self.do_daa();
        false
    }

    // JMP / Jcc: unconditional charges 10 unconditionally; the
    // conditional variants charge 10 either way, so whether `jump_if`
    // reports a branch only affects `pc`, never the cycle count.
    fn jump_if(&mut self, condition: bool, target: u16) -> bool {
        if condition {
            self.pc = target;
        }
        condition
    }

    pub(crate) fn op_jmp(&mut self, imm: u16) -> bool {
        self.pc = imm;
        true
    }
    pub(crate) fn op_jnz(&mut self, imm: u16) -> bool {
        let c = !self.flag_set(FLAG_Z);
        self.jump_if(c, imm)
    }
    pub(crate) fn op_jz(&mut self, imm: u16) -> bool {
        let c = self.flag_set(FLAG_Z);
        self.jump_if(c, imm)
    }
    pub(crate) fn op_jnc(&mut self, imm: u16) -> bool {
        let c = !self.flag_set(flags::FLAG_C);
        self.jump_if(c, imm)
    }
    pub(crate) fn op_jc(&mut self, imm: u16) -> bool {
        let c = self.flag_set(flags::FLAG_C);
        self.jump_if(c, imm)
    }
    pub(crate) fn op_jpo(&mut self, imm: u16) -> bool {
        let c = !self.flag_set(flags::FLAG_P);
        self.jump_if(c, imm)
    }
    pub(crate) fn op_jpe(&mut self, imm: u16) -> bool {
        let c = self.flag_set(flags::FLAG_P);
        self.jump_if(c, imm)
    }
    pub(crate) fn op_jp(&mut self, imm: u16) -> bool {
        let c = !self.flag_set(FLAG_S);
        self.jump_if(c, imm)
    }
    pub(crate) fn op_jm(&mut self, imm: u16) -> bool {
        let c = self.flag_set(FLAG_S);
        self.jump_if(c, imm)
    }

    // CALL / Ccc
    fn call_if(&mut self, condition: bool, target: u16) -> bool {
        if condition {
            self.push16(self.pc);
            self.pc = target;
        }
        condition
    }

    pub(crate) fn op_call(&mut self, imm: u16) -> bool {
        self.push16(self.pc);
        self.pc = imm;
        true
    }
    pub(crate) fn op_cnz(&mut self, imm: u16) -> bool {
        let c = !self.flag_set(FLAG_Z);
        self.call_if(c, imm)
    }
    pub(crate) fn op_cz(&mut self, imm: u16) -> bool {
        let c = self.flag_set(FLAG_Z);
        self.call_if(c, imm)
    }
    pub(crate) fn op_cnc(&mut self, imm: u16) -> bool {
        let c = !self.flag_set(flags::FLAG_C);
        self.call_if(c, imm)
    }
    pub(crate) fn op_cc(&mut self, imm: u16) -> bool {
        let c = self.flag_set(flags::FLAG_C);
        self.call_if(c, imm)
    }
    pub(crate) fn op_cpo(&mut self, imm: u16) -> bool {
        let c = !self.flag_set(flags::FLAG_P);
        self.call_if(c, imm)
    }
    pub(crate) fn op_cpe(&mut self, imm: u16) -> bool {
        let c = self.flag_set(flags::FLAG_P);
        self.call_if(c, imm)
    }
    pub(crate) fn op_cp(&mut self, imm: u16) -> bool {
        let c = !self.flag_set(FLAG_S);
        self.call_if(c, imm)
    }
    pub(crate) fn op_cm(&mut self, imm: u16) -> bool {
        let c = self.flag_set(FLAG_S);
        self.call_if(c, imm)
    }

    // RET / Rcc
    fn ret_if(&mut self, condition: bool) -> bool {
        if condition {
            self.pc = self.pop16();
        }
        condition
    }

    pub(crate) fn op_ret(&mut self, _imm: u16) -> bool {
        self.pc = self.pop16();
        true
    }
    pub(crate) fn op_rnz(&mut self, _imm: u16) -> bool {
        let c = !self.flag_set(FLAG_Z);
        self.ret_if(c)
    }
    pub(crate) fn op_rz(&mut self, _imm: u16) -> bool {
        let c = self.flag_set(FLAG_Z);
        self.ret_if(c)
    }
    pub(crate) fn op_rnc(&mut self, _imm: u16) -> bool {
        let c = !self.flag_set(flags::FLAG_C);
        self.ret_if(c)
    }
    pub(crate) fn op_rc(&mut self, _imm: u16) -> bool {
        let c = self.flag_set(flags::FLAG_C);
        self.ret_if(c)
    }
    pub(crate) fn op_rpo(&mut self, _imm: u16) -> bool {
        let c = !self.flag_set(flags::FLAG_P);
        self.ret_if(c)
    }
    pub(crate) fn op_rpe(&mut self, _imm: u16) -> bool {
        let c = self.flag_set(flags::FLAG_P);
        self.ret_if(c)
    }
    pub(crate) fn op_rp(&mut self, _imm: u16) -> bool {
        let c = !self.flag_set(FLAG_S);
        self.ret_if(c)
    }
    pub(crate) fn op_rm(&mut self, _imm: u16) -> bool {
        let c = self.flag_set(FLAG_S);
        self.ret_if(c)
    }

    // RST n — equivalent to CALL (n*8).
    fn do_rst(&mut self, vector: u16) -> bool {
        self.push16(self.pc);
        self.pc = vector;
        true
    }
    pub(crate) fn op_rst0(&mut self, _imm: u16) -> bool {
        self.do_rst(0x00)
    }
    pub(crate) fn op_rst1(&mut self, _imm: u16) -> bool {
        self.do_rst(0x08)
    }
    pub(crate) fn op_rst2(&mut self, _imm: u16) -> bool {
        self.do_rst(0x10)
    }
    pub(crate) fn op_rst3(&mut self, _imm: u16) -> bool {
        self.do_rst(0x18)
    }
    pub(crate) fn op_rst4(&mut self, _imm: u16) -> bool {
        self.do_rst(0x20)
    }
    pub(crate) fn op_rst5(&mut self, _imm: u16) -> bool {
        self.do_rst(0x28)
    }
    pub(crate) fn op_rst6(&mut self, _imm: u16) -> bool {
        self.do_rst(0x30)
    }
    pub(crate) fn op_rst7(&mut self, _imm: u16) -> bool {
        self.do_rst(0x38)
    }

    pub(crate) fn op_pchl(&mut self, _imm: u16) -> bool {
        self.pc = self.hl();
        false
    }
}
