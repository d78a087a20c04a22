//! The 256-entry opcode table: for every opcode byte, its mnemonic,
//! encoded length, cycle counts, and the [`Cpu`] method that executes it.
//! Built once via `lazy_static` rather than recomputed on every fetch.

use crate::cpu::Cpu;
use lazy_static::lazy_static;

/// One opcode's static metadata plus its handler.
///
/// `cycles` is the charge for an instruction that does not branch (or for
/// one that never branches at all); `cycles_taken` is the charge when a
/// conditional branch's condition holds. For unconditional control transfers
/// the two are equal to the single real cycle count. `execute` returns
/// whether a branch was taken, consulted only by [`Cpu::step`]'s cycle
/// accounting — it never affects correctness of non-branching ops.
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    pub length: u8,
    pub cycles: u8,
    pub cycles_taken: u8,
    pub execute: fn(&mut Cpu, u16) -> bool,
}

macro_rules! entry {
    ($mnemonic:expr, $length:expr, $cycles:expr, $fn:path) => {
        OpcodeInfo {
            mnemonic: $mnemonic,
            length: $length,
            cycles: $cycles,
            cycles_taken: $cycles,
            execute: $fn,
        }
    };
    ($mnemonic:expr, $length:expr, $cycles:expr, $cycles_taken:expr, $fn:path) => {
        OpcodeInfo {
            mnemonic: $mnemonic,
            length: $length,
            cycles: $cycles,
            cycles_taken: $cycles_taken,
            execute: $fn,
        }
    };
}

lazy_static! {
    static ref OPCODE_TABLE: [OpcodeInfo; 256] = [
        // 0x00
        entry!("NOP", 1, 4, Cpu::op_nop),
        entry!("LXI B,d16", 3, 10, Cpu::op_lxi_b),
        entry!("STAX B", 1, 7, Cpu::op_stax_b),
        entry!("INX B", 1, 5, Cpu::op_inx_b),
        entry!("INR B", 1, 5, Cpu::op_inr_b),
        entry!("DCR B", 1, 5, Cpu::op_dcr_b),
        entry!("MVI B,d8", 2, 7, Cpu::op_mvi_b),
        entry!("RLC", 1, 4, Cpu::op_rlc),
        entry!("NOP", 1, 4, Cpu::op_nop),
        entry!("DAD B", 1, 10, Cpu::op_dad_b),
        entry!("LDAX B", 1, 7, Cpu::op_ldax_b),
        entry!("DCX B", 1, 5, Cpu::op_dcx_b),
        entry!("INR C", 1, 5, Cpu::op_inr_c),
        entry!("DCR C", 1, 5, Cpu::op_dcr_c),
        entry!("MVI C,d8", 2, 7, Cpu::op_mvi_c),
        entry!("RRC", 1, 4, Cpu::op_rrc),
        // 0x10
        entry!("NOP", 1, 4, Cpu::op_nop),
        entry!("LXI D,d16", 3, 10, Cpu::op_lxi_d),
        entry!("STAX D", 1, 7, Cpu::op_stax_d),
        entry!("INX D", 1, 5, Cpu::op_inx_d),
        entry!("INR D", 1, 5, Cpu::op_inr_d),
        entry!("DCR D", 1, 5, Cpu::op_dcr_d),
        entry!("MVI D,d8", 2, 7, Cpu::op_mvi_d),
        entry!("RAL", 1, 4, Cpu::op_ral),
        entry!("NOP", 1, 4, Cpu::op_nop),
        entry!("DAD D", 1, 10, Cpu::op_dad_d),
        entry!("LDAX D", 1, 7, Cpu::op_ldax_d),
        entry!("DCX D", 1, 5, Cpu::op_dcx_d),
        entry!("INR E", 1, 5, Cpu::op_inr_e),
        entry!("DCR E", 1, 5, Cpu::op_dcr_e),
        entry!("MVI E,d8", 2, 7, Cpu::op_mvi_e),
        entry!("RAR", 1, 4, Cpu::op_rar),
        // 0x20
        entry!("NOP", 1, 4, Cpu::op_nop),
        entry!("LXI H,d16", 3, 10, Cpu::op_lxi_h),
        entry!("SHLD a16", 3, 16, Cpu::op_shld),
        entry!("INX H", 1, 5, Cpu::op_inx_h),
        entry!("INR H", 1, 5, Cpu::op_inr_h),
        entry!("DCR H", 1, 5, Cpu::op_dcr_h),
        entry!("MVI H,d8", 2, 7, Cpu::op_mvi_h),
        entry!("DAA", 1, 4, Cpu::op_daa),
        entry!("NOP", 1, 4, Cpu::op_nop),
        entry!("DAD H", 1, 10, Cpu::op_dad_h),
        entry!("LHLD a16", 3, 16, Cpu::op_lhld),
        entry!("DCX H", 1, 5, Cpu::op_dcx_h),
        entry!("INR L", 1, 5, Cpu::op_inr_l),
        entry!("DCR L", 1, 5, Cpu::op_dcr_l),
        entry!("MVI L,d8", 2, 7, Cpu::op_mvi_l),
        entry!("CMA", 1, 4, Cpu::op_cma),
        // 0x30
        entry!("NOP", 1, 4, Cpu::op_nop),
        entry!("LXI SP,d16", 3, 10, Cpu::op_lxi_sp),
        entry!("STA a16", 3, 13, Cpu::op_sta),
        entry!("INX SP", 1, 5, Cpu::op_inx_sp),
        entry!("INR M", 1, 10, Cpu::op_inr_m),
        entry!("DCR M", 1, 10, Cpu::op_dcr_m),
        entry!("MVI M,d8", 2, 10, Cpu::op_mvi_m),
        entry!("STC", 1, 4, Cpu::op_stc),
        entry!("NOP", 1, 4, Cpu::op_nop),
        entry!("DAD SP", 1, 10, Cpu::op_dad_sp),
        entry!("LDA a16", 3, 13, Cpu::op_lda),
        entry!("DCX SP", 1, 5, Cpu::op_dcx_sp),
        entry!("INR A", 1, 5, Cpu::op_inr_a),
        entry!("DCR A", 1, 5, Cpu::op_dcr_a),
        entry!("MVI A,d8", 2, 7, Cpu::op_mvi_a),
        entry!("CMC", 1, 4, Cpu::op_cmc),
        // 0x40
        entry!("MOV B,B", 1, 5, Cpu::op_mov_b_b),
        entry!("MOV B,C", 1, 5, Cpu::op_mov_b_c),
        entry!("MOV B,D", 1, 5, Cpu::op_mov_b_d),
        entry!("MOV B,E", 1, 5, Cpu::op_mov_b_e),
        entry!("MOV B,H", 1, 5, Cpu::op_mov_b_h),
        entry!("MOV B,L", 1, 5, Cpu::op_mov_b_l),
        entry!("MOV B,M", 1, 7, Cpu::op_mov_b_m),
        entry!("MOV B,A", 1, 5, Cpu::op_mov_b_a),
        entry!("MOV C,B", 1, 5, Cpu::op_mov_c_b),
        entry!("MOV C,C", 1, 5, Cpu::op_mov_c_c),
        entry!("MOV C,D", 1, 5, Cpu::op_mov_c_d),
        entry!("MOV C,E", 1, 5, Cpu::op_mov_c_e),
        entry!("MOV C,H", 1, 5, Cpu::op_mov_c_h),
        entry!("MOV C,L", 1, 5, Cpu::op_mov_c_l),
        entry!("MOV C,M", 1, 7, Cpu::op_mov_c_m),
        entry!("MOV C,A", 1, 5, Cpu::op_mov_c_a),
        // 0x50
        entry!("MOV D,B", 1, 5, Cpu::op_mov_d_b),
        entry!("MOV D,C", 1, 5, Cpu::op_mov_d_c),
        entry!("MOV D,D", 1, 5, Cpu::op_mov_d_d),
        entry!("MOV D,E", 1, 5, Cpu::op_mov_d_e),
        entry!("MOV D,H", 1, 5, Cpu::op_mov_d_h),
        entry!("MOV D,L", 1, 5, Cpu::op_mov_d_l),
        entry!("MOV D,M", 1, 7, Cpu::op_mov_d_m),
        entry!("MOV D,A", 1, 5, Cpu::op_mov_d_a),
        entry!("MOV E,B", 1, 5, Cpu::op_mov_e_b),
        entry!("MOV E,C", 1, 5, Cpu::op_mov_e_c),
        entry!("MOV E,D", 1, 5, Cpu::op_mov_e_d),
        entry!("MOV E,E", 1, 5, Cpu::op_mov_e_e),
        entry!("MOV E,H", 1, 5, Cpu::op_mov_e_h),
        entry!("MOV E,L", 1, 5, Cpu::op_mov_e_l),
        entry!("MOV E,M", 1, 7, Cpu::op_mov_e_m),
        entry!("MOV E,A", 1, 5, Cpu::op_mov_e_a),
        // 0x60
        entry!("MOV H,B", 1, 5, Cpu::op_mov_h_b),
        entry!("MOV H,C", 1, 5, Cpu::op_mov_h_c),
        entry!("MOV H,D", 1, 5, Cpu::op_mov_h_d),
        entry!("MOV H,E", 1, 5, Cpu::op_mov_h_e),
        entry!("MOV H,H", 1, 5, Cpu::op_mov_h_h),
        entry!("MOV H,L", 1, 5, Cpu::op_mov_h_l),
        entry!("MOV H,M", 1, 7, Cpu::op_mov_h_m),
        entry!("MOV H,A", 1, 5, Cpu::op_mov_h_a),
        entry!("MOV L,B", 1, 5, Cpu::op_mov_l_b),
        entry!("MOV L,C", 1, 5, Cpu::op_mov_l_c),
        entry!("MOV L,D", 1, 5, Cpu::op_mov_l_d),
        entry!("MOV L,E", 1, 5, Cpu::op_mov_l_e),
        entry!("MOV L,H", 1, 5, Cpu::op_mov_l_h),
        entry!("MOV L,L", 1, 5, Cpu::op_mov_l_l),
        entry!("MOV L,M", 1, 7, Cpu::op_mov_l_m),
        entry!("MOV L,A", 1, 5, Cpu::op_mov_l_a),
        // 0x70
        entry!("MOV M,B", 1, 7, Cpu::op_mov_m_b),
        entry!("MOV M,C", 1, 7, Cpu::op_mov_m_c),
        entry!("MOV M,D", 1, 7, Cpu::op_mov_m_d),
        entry!("MOV M,E", 1, 7, Cpu::op_mov_m_e),
        entry!("MOV M,H", 1, 7, Cpu::op_mov_m_h),
        entry!("MOV M,L", 1, 7, Cpu::op_mov_m_l),
        entry!("HLT", 1, 7, Cpu::op_hlt),
        entry!("MOV M,A", 1, 7, Cpu::op_mov_m_a),
        entry!("MOV A,B", 1, 5, Cpu::op_mov_a_b),
        entry!("MOV A,C", 1, 5, Cpu::op_mov_a_c),
        entry!("MOV A,D", 1, 5, Cpu::op_mov_a_d),
        entry!("MOV A,E", 1, 5, Cpu::op_mov_a_e),
        entry!("MOV A,H", 1, 5, Cpu::op_mov_a_h),
        entry!("MOV A,L", 1, 5, Cpu::op_mov_a_l),
        entry!("MOV A,M", 1, 7, Cpu::op_mov_a_m),
        entry!("MOV A,A", 1, 5, Cpu::op_mov_a_a),
        // 0x80
        entry!("ADD B", 1, 4, Cpu::op_add_b),
        entry!("ADD C", 1, 4, Cpu::op_add_c),
        entry!("ADD D", 1, 4, Cpu::op_add_d),
        entry!("ADD E", 1, 4, Cpu::op_add_e),
        entry!("ADD H", 1, 4, Cpu::op_add_h),
        entry!("ADD L", 1, 4, Cpu::op_add_l),
        entry!("ADD M", 1, 7, Cpu::op_add_m),
        entry!("ADD A", 1, 4, Cpu::op_add_a),
        entry!("ADC B", 1, 4, Cpu::op_adc_b),
        entry!("ADC C", 1, 4, Cpu::op_adc_c),
        entry!("ADC D", 1, 4, Cpu::op_adc_d),
        entry!("ADC E", 1, 4, Cpu::op_adc_e),
        entry!("ADC H", 1, 4, Cpu::op_adc_h),
        entry!("ADC L", 1, 4, Cpu::op_adc_l),
        entry!("ADC M", 1, 7, Cpu::op_adc_m),
        entry!("ADC A", 1, 4, Cpu::op_adc_a),
        // 0x90
        entry!("SUB B", 1, 4, Cpu::op_sub_b),
        entry!("SUB C", 1, 4, Cpu::op_sub_c),
        entry!("SUB D", 1, 4, Cpu::op_sub_d),
        entry!("SUB E", 1, 4, Cpu::op_sub_e),
        entry!("SUB H", 1, 4, Cpu::op_sub_h),
        entry!("SUB L", 1, 4, Cpu::op_sub_l),
        entry!("SUB M", 1, 7, Cpu::op_sub_m),
        entry!("SUB A", 1, 4, Cpu::op_sub_a),
        entry!("SBB B", 1, 4, Cpu::op_sbb_b),
        entry!("SBB C", 1, 4, Cpu::op_sbb_c),
        entry!("SBB D", 1, 4, Cpu::op_sbb_d),
        entry!("SBB E", 1, 4, Cpu::op_sbb_e),
        entry!("SBB H", 1, 4, Cpu::op_sbb_h),
        entry!("SBB L", 1, 4, Cpu::op_sbb_l),
        entry!("SBB M", 1, 7, Cpu::op_sbb_m),
        entry!("SBB A", 1, 4, Cpu::op_sbb_a),
        // 0xA0
        entry!("ANA B", 1, 4, Cpu::op_ana_b),
        entry!("ANA C", 1, 4, Cpu::op_ana_c),
        entry!("ANA D", 1, 4, Cpu::op_ana_d),
        entry!("ANA E", 1, 4, Cpu::op_ana_e),
        entry!("ANA H", 1, 4, Cpu::op_ana_h),
        entry!("ANA L", 1, 4, Cpu::op_ana_l),
        entry!("ANA M", 1, 7, Cpu::op_ana_m),
        entry!("ANA A", 1, 4, Cpu::op_ana_a),
        entry!("XRA B", 1, 4, Cpu::op_xra_b),
        entry!("XRA C", 1, 4, Cpu::op_xra_c),
        entry!("XRA D", 1, 4, Cpu::op_xra_d),
        entry!("XRA E", 1, 4, Cpu::op_xra_e),
        entry!("XRA H", 1, 4, Cpu::op_xra_h),
        entry!("XRA L", 1, 4, Cpu::op_xra_l),
        entry!("XRA M", 1, 7, Cpu::op_xra_m),
        entry!("XRA A", 1, 4, Cpu::op_xra_a),
        // 0xB0
        entry!("ORA B", 1, 4, Cpu::op_ora_b),
        entry!("ORA C", 1, 4, Cpu::op_ora_c),
        entry!("ORA D", 1, 4, Cpu::op_ora_d),
        entry!("ORA E", 1, 4, Cpu::op_ora_e),
        entry!("ORA H", 1, 4, Cpu::op_ora_h),
        entry!("ORA L", 1, 4, Cpu::op_ora_l),
        entry!("ORA M", 1, 7, Cpu::op_ora_m),
        entry!("ORA A", 1, 4, Cpu::op_ora_a),
        entry!("CMP B", 1, 4, Cpu::op_cmp_b),
        entry!("CMP C", 1, 4, Cpu::op_cmp_c),
        entry!("CMP D", 1, 4, Cpu::op_cmp_d),
        entry!("CMP E", 1, 4, Cpu::op_cmp_e),
        entry!("CMP H", 1, 4, Cpu::op_cmp_h),
        entry!("CMP L", 1, 4, Cpu::op_cmp_l),
        entry!("CMP M", 1, 7, Cpu::op_cmp_m),
        entry!("CMP A", 1, 4, Cpu::op_cmp_a),
        // 0xC0
        entry!("RNZ", 1, 5, 11, Cpu::op_rnz),
        entry!("POP B", 1, 10, Cpu::op_pop_b),
        entry!("JNZ a16", 3, 10, Cpu::op_jnz),
        entry!("JMP a16", 3, 10, Cpu::op_jmp),
        entry!("CNZ a16", 3, 11, 17, Cpu::op_cnz),
        entry!("PUSH B", 1, 11, Cpu::op_push_b),
        entry!("ADI d8", 2, 7, Cpu::op_adi),
        entry!("RST 0", 1, 11, Cpu::op_rst0),
        entry!("RZ", 1, 5, 11, Cpu::op_rz),
        entry!("RET", 1, 10, Cpu::op_ret),
        entry!("JZ a16", 3, 10, Cpu::op_jz),
        entry!("JMP a16", 3, 10, Cpu::op_jmp),
        entry!("CZ a16", 3, 11, 17, Cpu::op_cz),
        entry!("CALL a16", 3, 17, Cpu::op_call),
        entry!("ACI d8", 2, 7, Cpu::op_aci),
        entry!("RST 1", 1, 11, Cpu::op_rst1),
        // 0xD0
        entry!("RNC", 1, 5, 11, Cpu::op_rnc),
        entry!("POP D", 1, 10, Cpu::op_pop_d),
        entry!("JNC a16", 3, 10, Cpu::op_jnc),
        entry!("OUT d8", 2, 10, Cpu::op_out),
        entry!("CNC a16", 3, 11, 17, Cpu::op_cnc),
        entry!("PUSH D", 1, 11, Cpu::op_push_d),
        entry!("SUI d8", 2, 7, Cpu::op_sui),
        entry!("RST 2", 1, 11, Cpu::op_rst2),
        entry!("RC", 1, 5, 11, Cpu::op_rc),
        entry!("RET", 1, 10, Cpu::op_ret),
        entry!("JC a16", 3, 10, Cpu::op_jc),
        entry!("IN d8", 2, 10, Cpu::op_in),
        entry!("CC a16", 3, 11, 17, Cpu::op_cc),
        entry!("CALL a16", 3, 17, Cpu::op_call),
        entry!("SBI d8", 2, 7, Cpu::op_sbi),
        entry!("RST 3", 1, 11, Cpu::op_rst3),
        // 0xE0
        entry!("RPO", 1, 5, 11, Cpu::op_rpo),
        entry!("POP H", 1, 10, Cpu::op_pop_h),
        entry!("JPO a16", 3, 10, Cpu::op_jpo),
        entry!("XTHL", 1, 18, Cpu::op_xthl),
        entry!("CPO a16", 3, 11, 17, Cpu::op_cpo),
        entry!("PUSH H", 1, 11, Cpu::op_push_h),
        entry!("ANI d8", 2, 7, Cpu::op_ani),
        entry!("RST 4", 1, 11, Cpu::op_rst4),
        entry!("RPE", 1, 5, 11, Cpu::op_rpe),
        entry!("PCHL", 1, 5, Cpu::op_pchl),
        entry!("JPE a16", 3, 10, Cpu::op_jpe),
        entry!("XCHG", 1, 5, Cpu::op_xchg),
        entry!("CPE a16", 3, 11, 17, Cpu::op_cpe),
        entry!("CALL a16", 3, 17, Cpu::op_call),
        entry!("XRI d8", 2, 7, Cpu::op_xri),
        entry!("RST 5", 1, 11, Cpu::op_rst5),
        // 0xF0
        entry!("RP", 1, 5, 11, Cpu::op_rp),
        entry!("POP PSW", 1, 10, Cpu::op_pop_psw),
        entry!("JP a16", 3, 10, Cpu::op_jp),
        entry!("DI", 1, 4, Cpu::op_di),
        entry!("CP a16", 3, 11, 17, Cpu::op_cp),
        entry!("PUSH PSW", 1, 11, Cpu::op_push_psw),
        entry!("ORI d8", 2, 7, Cpu::op_ori),
        entry!("RST 6", 1, 11, Cpu::op_rst6),
        entry!("RM", 1, 5, 11, Cpu::op_rm),
        entry!("SPHL", 1, 5, Cpu::op_sphl),
        entry!("JM a16", 3, 10, Cpu::op_jm),
        entry!("EI", 1, 4, Cpu::op_ei),
        entry!("CM a16", 3, 11, 17, Cpu::op_cm),
        entry!("CALL a16", 3, 17, Cpu::op_call),
        entry!("CPI d8", 2, 7, Cpu::op_cpi),
        entry!("RST 7", 1, 11, Cpu::op_rst7),
    ];
}

/// Looks up `opcode`'s static metadata and handler. Total lookup, not
/// fallible: every one of the 256 byte values has an entry, including the
/// undocumented aliases.
#[inline(always)]
pub fn instruction_info(opcode: u8) -> &'static OpcodeInfo {
    &OPCODE_TABLE[opcode as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_all_256_opcodes() {
        assert_eq!(OPCODE_TABLE.len(), 256);
    }

    #[test]
    fn undocumented_nop_aliases_match_real_nop() {
        for op in [0x08u8, 0x10, 0x18, 0x20, 0x28, 0x30, 0x38] {
            let entry = instruction_info(op);
            assert_eq!(entry.mnemonic, "NOP");
            assert_eq!(entry.length, 1);
            assert_eq!(entry.cycles, 4);
        }
    }

    #[test]
    fn undocumented_cb_aliases_jmp() {
        let entry = instruction_info(0xCB);
        assert_eq!(entry.mnemonic, "JMP a16");
        assert_eq!(entry.length, 3);
    }

    #[test]
    fn undocumented_d9_aliases_ret() {
        let entry = instruction_info(0xD9);
        assert_eq!(entry.mnemonic, "RET");
    }

    #[test]
    fn undocumented_dd_ed_fd_alias_call() {
        for op in [0xDDu8, 0xED, 0xFD] {
            let entry = instruction_info(op);
            assert_eq!(entry.mnemonic, "CALL a16");
            assert_eq!(entry.length, 3);
            assert_eq!(entry.cycles, 17);
        }
    }

    #[test]
    fn conditional_branches_distinguish_taken_from_not_taken() {
        let entry = instruction_info(0xC4); // CNZ
        assert_eq!(entry.cycles, 11);
        assert_eq!(entry.cycles_taken, 17);
    }

    #[test]
    fn hlt_is_not_mov_m_m() {
        let entry = instruction_info(0x76);
        assert_eq!(entry.mnemonic, "HLT");
    }
}
