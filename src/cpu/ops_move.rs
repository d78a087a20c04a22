//! MOV/MVI/LXI, direct and indirect load/store, XCHG's data-move cousins.
//! None of these touch flags.

use super::Cpu;

impl Cpu {
    // MOV r, r' — all 49 register-to-register combinations. MOV M,M does not
    // exist at 0x76; that slot is HLT (see `ops_control`).
    op_mov!(op_mov_b_b, b, b);
    op_mov!(op_mov_b_c, b, c);
    op_mov!(op_mov_b_d, b, d);
    op_mov!(op_mov_b_e, b, e);
    op_mov!(op_mov_b_h, b, h);
    op_mov!(op_mov_b_l, b, l);
    op_mov!(op_mov_b_a, b, a);

    op_mov!(op_mov_c_b, c, b);
    op_mov!(op_mov_c_c, c, c);
    op_mov!(op_mov_c_d, c, d);
    op_mov!(op_mov_c_e, c, e);
    op_mov!(op_mov_c_h, c, h);
    op_mov!(op_mov_c_l, c, l);
    op_mov!(op_mov_c_a, c, a);

    op_mov!(op_mov_d_b, d, b);
    op_mov!(op_mov_d_c, d, c);
    op_mov!(op_mov_d_d, d, d);
    op_mov!(op_mov_d_e, d, e);
    op_mov!(op_mov_d_h, d, h);
    op_mov!(op_mov_d_l, d, l);
    op_mov!(op_mov_d_a, d, a);

    op_mov!(op_mov_e_b, e, b);
    op_mov!(op_mov_e_c, e, c);
    op_mov!(op_mov_e_d, e, d);
    op_mov!(op_mov_e_e, e, e);
    op_mov!(op_mov_e_h, e, h);
    op_mov!(op_mov_e_l, e, l);
    op_mov!(op_mov_e_a, e, a);

    op_mov!(op_mov_h_b, h, b);
    op_mov!(op_mov_h_c, h, c);
    op_mov!(op_mov_h_d, h, d);
    op_mov!(op_mov_h_e, h, e);
    op_mov!(op_mov_h_h, h, h);
    op_mov!(op_mov_h_l, h, l);
    op_mov!(op_mov_h_a, h, a);

    op_mov!(op_mov_l_b, l, b);
    op_mov!(op_mov_l_c, l, c);
    op_mov!(op_mov_l_d, l, d);
    op_mov!(op_mov_l_e, l, e);
    op_mov!(op_mov_l_h, l, h);
    op_mov!(op_mov_l_l, l, l);
    op_mov!(op_mov_l_a, l, a);

    op_mov!(op_mov_a_b, a, b);
    op_mov!(op_mov_a_c, a, c);
    op_mov!(op_mov_a_d, a, d);
    op_mov!(op_mov_a_e, a, e);
    op_mov!(op_mov_a_h, a, h);
    op_mov!(op_mov_a_l, a, l);
    op_mov!(op_mov_a_a, a, a);

    // MOV r, M / MOV M, r
    op_mov_from_m!(op_mov_b_m, b);
    op_mov_from_m!(op_mov_c_m, c);
    op_mov_from_m!(op_mov_d_m, d);
    op_mov_from_m!(op_mov_e_m, e);
    op_mov_from_m!(op_mov_h_m, h);
    op_mov_from_m!(op_mov_l_m, l);
    op_mov_from_m!(op_mov_a_m, a);

    op_mov_to_m!(op_mov_m_b, b);
    op_mov_to_m!(op_mov_m_c, c);
    op_mov_to_m!(op_mov_m_d, d);
    op_mov_to_m!(op_mov_m_e, e);
    op_mov_to_m!(op_mov_m_h, h);
    op_mov_to_m!(op_mov_m_l, l);
    op_mov_to_m!(op_mov_m_a, a);

    // MVI r, d8 / MVI M, d8
    op_mvi!(op_mvi_b, b);
    op_mvi!(op_mvi_c, c);
    op_mvi!(op_mvi_d, d);
    op_mvi!(op_mvi_e, e);
    op_mvi!(op_mvi_h, h);
    op_mvi!(op_mvi_l, l);
    op_mvi!(op_mvi_a, a);

    pub(crate) fn op_mvi_m(&mut self, imm: u16) -> bool {
        self.store8(self.hl(), imm as u8);
        false
    }

    // LXI rp, d16
    pub(crate) fn op_lxi_b(&mut self, imm: u16) -> bool {
        self.set_bc(imm);
        false
    }
    pub(crate) fn op_lxi_d(&mut self, imm: u16) -> bool {
        self.set_de(imm);
        false
    }
    pub(crate) fn op_lxi_h(&mut self, imm: u16) -> bool {
        self.set_hl(imm);
        false
    }
    pub(crate) fn op_lxi_sp(&mut self, imm: u16) -> bool {
        self.sp = imm;
        false
    }

    // STAX/LDAX — indirect through BC or DE only.
    pub(crate) fn op_stax_b(&mut self, _imm: u16) -> bool {
        self.store8(self.bc(), self.a);
        false
    }
    pub(crate) fn op_stax_d(&mut self, _imm: u16) -> bool {
        self.store8(self.de(), self.a);
        false
    }
    pub(crate) fn op_ldax_b(&mut self, _imm: u16) -> bool {
        self.a = self.load8(self.bc());
        false
    }
    pub(crate) fn op_ldax_d(&mut self, _imm: u16) -> bool {
        self.a = self.load8(self.de());
        false
    }

    // Direct addressing.
    pub(crate) fn op_sta(&mut self, imm: u16) -> bool {
        self.store8(imm, self.a);
        false
    }
    pub(crate) fn op_lda(&mut self, imm: u16) -> bool {
        self.a = self.load8(imm);
        false
    }
    pub(crate) fn op_shld(&mut self, imm: u16) -> bool {
        self.store16(imm, self.hl());
        false
    }
    pub(crate) fn op_lhld(&mut self, imm: u16) -> bool {
        self.set_hl(self.load16(imm));
        false
    }

    // 16-bit INX/DCX.
    op_inx!(op_inx_b, bc, set_bc);
    op_inx!(op_inx_d, de, set_de);
    op_inx!(op_inx_h, hl, set_hl);
    pub(crate) fn op_inx_sp(&mut self, _imm: u16) -> bool {
        self.sp = self.sp.wrapping_add(1);
        false
    }

    op_dcx!(op_dcx_b, bc, set_bc);
    op_dcx!(op_dcx_d, de, set_de);
    op_dcx!(op_dcx_h, hl, set_hl);
    pub(crate) fn op_dcx_sp(&mut self, _imm: u16) -> bool {
        self.sp = self.sp.wrapping_sub(1);
        false
    }

    // DAD — only the HL += rp addition with a carry update; see `ops_alu`
    // for the carry derivation helper shared with rotates.
    op_dad!(op_dad_b, bc);
    op_dad!(op_dad_d, de);
    op_dad!(op_dad_h, hl);
    pub(crate) fn op_dad_sp(&mut self, _imm: u16) -> bool {
        let hl = self.hl();
        let sp = self.sp;
        let carry = crate::flags::add16_carry(hl, sp);
        self.set_hl(hl.wrapping_add(sp));
        self.apply_carry_only(carry);
        false
    }
}
