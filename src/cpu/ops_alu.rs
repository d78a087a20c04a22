//! ADD/ADC/SUB/SBB/ANA/XRA/ORA/CMP and INR/DCR: the 8-bit ALU.

use super::Cpu;
use crate::flags::{self, AddResult8};

impl Cpu {
    fn do_add(&mut self, src: u8, with_carry: bool) {
        let r = if with_carry {
            flags::adc8(self.a, src, self.flag_set(flags::FLAG_C))
        } else {
            flags::add8(self.a, src)
        };
        self.a = r.result;
        self.apply_arith_flags(r);
    }

    fn do_sub(&mut self, src: u8, with_carry: bool) {
        let r = if with_carry {
            flags::sbb8(self.a, src, self.flag_set(flags::FLAG_C))
        } else {
            flags::sub8(self.a, src)
        };
        self.a = r.result;
        self.apply_arith_flags(r);
    }

    fn do_and(&mut self, src: u8) {
        let res = self.a & src;
        let ac = flags::logical_aux_carry(self.a, src, res);
        self.a = res;
        self.apply_arith_flags(AddResult8 {
            result: res,
            carry: false,
            aux_carry: ac,
        });
    }

    fn do_xor(&mut self, src: u8) {
        let res = self.a ^ src;
        self.a = res;
        self.apply_arith_flags(AddResult8 {
            result: res,
            carry: false,
            aux_carry: false,
        });
    }

    fn do_or(&mut self, src: u8) {
        let res = self.a | src;
        self.a = res;
        self.apply_arith_flags(AddResult8 {
            result: res,
            carry: false,
            aux_carry: false,
        });
    }

    /// CMP leaves `A` unchanged; only the flags from `A - src` are kept.
    fn do_cmp(&mut self, src: u8) {
        let r = flags::sub8(self.a, src);
        self.apply_arith_flags(r);
    }

    pub(crate) fn do_inr(&mut self, v: u8) -> u8 {
        let r = flags::add8(v, 1);
        self.apply_szap_flags(r);
        r.result
    }

    pub(crate) fn do_dcr(&mut self, v: u8) -> u8 {
        let r = flags::sub8(v, 1);
        self.apply_szap_flags(r);
        r.result
    }

    // ADD
    op_alu_c_reg!(op_add_b, do_add, b, false);
    op_alu_c_reg!(op_add_c, do_add, c, false);
    op_alu_c_reg!(op_add_d, do_add, d, false);
    op_alu_c_reg!(op_add_e, do_add, e, false);
    op_alu_c_reg!(op_add_h, do_add, h, false);
    op_alu_c_reg!(op_add_l, do_add, l, false);
    op_alu_c_reg!(op_add_a, do_add, a, false);
    op_alu_c_m!(op_add_m, do_add, false);
    op_alu_c_imm!(op_adi, do_add, false);

    // ADC
    op_alu_c_reg!(op_adc_b, do_add, b, true);
    op_alu_c_reg!(op_adc_c, do_add, c, true);
    op_alu_c_reg!(op_adc_d, do_add, d, true);
    op_alu_c_reg!(op_adc_e, do_add, e, true);
    op_alu_c_reg!(op_adc_h, do_add, h, true);
    op_alu_c_reg!(op_adc_l, do_add, l, true);
    op_alu_c_reg!(op_adc_a, do_add, a, true);
    op_alu_c_m!(op_adc_m, do_add, true);
    op_alu_c_imm!(op_aci, do_add, true);

    // SUB
    op_alu_c_reg!(op_sub_b, do_sub, b, false);
    op_alu_c_reg!(op_sub_c, do_sub, c, false);
    op_alu_c_reg!(op_sub_d, do_sub, d, false);
    op_alu_c_reg!(op_sub_e, do_sub, e, false);
    op_alu_c_reg!(op_sub_h, do_sub, h, false);
    op_alu_c_reg!(op_sub_l, do_sub, l, false);
    op_alu_c_reg!(op_sub_a, do_sub, a, false);
    op_alu_c_m!(op_sub_m, do_sub, false);
    op_alu_c_imm!(op_sui, do_sub, false);

    // SBB
    op_alu_c_reg!(op_sbb_b, do_sub, b, true);
    op_alu_c_reg!(op_sbb_c, do_sub, c, true);
    op_alu_c_reg!(op_sbb_d, do_sub, d, true);
    op_alu_c_reg!(op_sbb_e, do_sub, e, true);
    op_alu_c_reg!(op_sbb_h, do_sub, h, true);
    op_alu_c_reg!(op_sbb_l, do_sub, l, true);
    op_alu_c_reg!(op_sbb_a, do_sub, a, true);
    op_alu_c_m!(op_sbb_m, do_sub, true);
    op_alu_c_imm!(op_sbi, do_sub, true);

    // ANA
    op_alu_reg!(op_ana_b, do_and, b);
    op_alu_reg!(op_ana_c, do_and, c);
    op_alu_reg!(op_ana_d, do_and, d);
    op_alu_reg!(op_ana_e, do_and, e);
    op_alu_reg!(op_ana_h, do_and, h);
    op_alu_reg!(op_ana_l, do_and, l);
    op_alu_reg!(op_ana_a, do_and, a);
    op_alu_m!(op_ana_m, do_and);
    op_alu_imm!(op_ani, do_and);

    // XRA
    op_alu_reg!(op_xra_b, do_xor, b);
    op_alu_reg!(op_xra_c, do_xor, c);
    op_alu_reg!(op_xra_d, do_xor, d);
    op_alu_reg!(op_xra_e, do_xor, e);
    op_alu_reg!(op_xra_h, do_xor, h);
    op_alu_reg!(op_xra_l, do_xor, l);
    op_alu_reg!(op_xra_a, do_xor, a);
    op_alu_m!(op_xra_m, do_xor);
    op_alu_imm!(op_xri, do_xor);

    // ORA
    op_alu_reg!(op_ora_b, do_or, b);
    op_alu_reg!(op_ora_c, do_or, c);
    op_alu_reg!(op_ora_d, do_or, d);
    op_alu_reg!(op_ora_e, do_or, e);
    op_alu_reg!(op_ora_h, do_or, h);
    op_alu_reg!(op_ora_l, do_or, l);
    op_alu_reg!(op_ora_a, do_or, a);
    op_alu_m!(op_ora_m, do_or);
    op_alu_imm!(op_ori, do_or);

    // CMP
    op_alu_reg!(op_cmp_b, do_cmp, b);
    op_alu_reg!(op_cmp_c, do_cmp, c);
    op_alu_reg!(op_cmp_d, do_cmp, d);
    op_alu_reg!(op_cmp_e, do_cmp, e);
    op_alu_reg!(op_cmp_h, do_cmp, h);
    op_alu_reg!(op_cmp_l, do_cmp, l);
    op_alu_reg!(op_cmp_a, do_cmp, a);
    op_alu_m!(op_cmp_m, do_cmp);
    op_alu_imm!(op_cpi, do_cmp);

    // INR
    op_inr_reg!(op_inr_b, b);
    op_inr_reg!(op_inr_c, c);
    op_inr_reg!(op_inr_d, d);
    op_inr_reg!(op_inr_e, e);
    op_inr_reg!(op_inr_h, h);
    op_inr_reg!(op_inr_l, l);
    op_inr_reg!(op_inr_a, a);
    pub(crate) fn op_inr_m(&mut self, _imm: u16) -> bool {
        let addr = self.hl();
        let v = self.load8(addr);
        let r = self.do_inr(v);
        self.store8(addr, r);
        false
    }

    // DCR
    op_dcr_reg!(op_dcr_b, b);
    op_dcr_reg!(op_dcr_c, c);
    op_dcr_reg!(op_dcr_d, d);
    op_dcr_reg!(op_dcr_e, e);
    op_dcr_reg!(op_dcr_h, h);
    op_dcr_reg!(op_dcr_l, l);
    op_dcr_reg!(op_dcr_a, a);
    pub(crate) fn op_dcr_m(&mut self, _imm: u16) -> bool {
        let addr = self.hl();
        let v = self.load8(addr);
        let r = self.do_dcr(v);
        self.store8(addr, r);
        false
    }
}
