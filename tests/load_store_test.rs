use i8080::RomRegion;

mod common;
use common::new_cpu;

#[test]
fn mov_r_r_copies_without_touching_flags() {
    let mut cpu = new_cpu();
    cpu.set_psw(0xD7);
    cpu.set_c(0x5A);
    cpu.load(0x100, &[0x41]); // MOV B,C
    cpu.set_pc(0x100);
    cpu.step();
    assert_eq!(cpu.b(), 0x5A);
    assert_eq!(cpu.f(), 0xD7);
    assert_eq!(cpu.pc(), 0x101);
    assert_eq!(cpu.uptime_cycles(), 5);
}

#[test]
fn mov_through_memory_round_trips() {
    let mut cpu = new_cpu();
    cpu.set_hl(0x2000);
    cpu.set_a(0x77);
    cpu.load(0x100, &[0x77, 0x4E]); // MOV M,A ; MOV C,M
    cpu.set_pc(0x100);
    cpu.step();
    cpu.step();
    assert_eq!(cpu.load8(0x2000), 0x77);
    assert_eq!(cpu.c(), 0x77);
    assert_eq!(cpu.uptime_cycles(), 14);
}

#[test]
fn mvi_loads_immediate_into_register() {
    let mut cpu = new_cpu();
    cpu.load(0x100, &[0x06, 0x99]); // MVI B,0x99
    cpu.set_pc(0x100);
    cpu.step();
    assert_eq!(cpu.b(), 0x99);
    assert_eq!(cpu.pc(), 0x102);
    assert_eq!(cpu.uptime_cycles(), 7);
}

#[test]
fn mvi_m_writes_through_hl() {
    let mut cpu = new_cpu();
    cpu.set_hl(0x3000);
    cpu.load(0x100, &[0x36, 0x42]); // MVI M,0x42
    cpu.set_pc(0x100);
    cpu.step();
    assert_eq!(cpu.load8(0x3000), 0x42);
    assert_eq!(cpu.uptime_cycles(), 10);
}

#[test]
fn lxi_loads_register_pair() {
    let mut cpu = new_cpu();
    cpu.load(0x100, &[0x21, 0x34, 0x12]); // LXI H,0x1234
    cpu.set_pc(0x100);
    cpu.step();
    assert_eq!(cpu.hl(), 0x1234);
    assert_eq!(cpu.h(), 0x12);
    assert_eq!(cpu.l(), 0x34);
}

#[test]
fn stax_ldax_round_trip_through_bc() {
    let mut cpu = new_cpu();
    cpu.set_bc(0x4000);
    cpu.set_a(0xAB);
    cpu.load(0x100, &[0x02]); // STAX B
    cpu.set_pc(0x100);
    cpu.step();
    assert_eq!(cpu.load8(0x4000), 0xAB);

    cpu.set_a(0x00);
    cpu.load(0x101, &[0x0A]); // LDAX B
    cpu.step();
    assert_eq!(cpu.a(), 0xAB);
}

#[test]
fn sta_lda_use_direct_addressing() {
    let mut cpu = new_cpu();
    cpu.set_a(0x5C);
    cpu.load(0x100, &[0x32, 0x00, 0x50]); // STA 0x5000
    cpu.set_pc(0x100);
    cpu.step();
    assert_eq!(cpu.load8(0x5000), 0x5C);
    assert_eq!(cpu.uptime_cycles(), 13);

    cpu.set_a(0);
    cpu.load(0x103, &[0x3A, 0x00, 0x50]); // LDA 0x5000
    cpu.step();
    assert_eq!(cpu.a(), 0x5C);
}

#[test]
fn shld_lhld_round_trip_hl() {
    let mut cpu = new_cpu();
    cpu.set_hl(0xBEEF);
    cpu.load(0x100, &[0x22, 0x00, 0x60]); // SHLD 0x6000
    cpu.set_pc(0x100);
    cpu.step();
    assert_eq!(cpu.load16(0x6000), 0xBEEF);
    assert_eq!(cpu.uptime_cycles(), 16);

    cpu.set_hl(0);
    cpu.load(0x103, &[0x2A, 0x00, 0x60]); // LHLD 0x6000
    cpu.step();
    assert_eq!(cpu.hl(), 0xBEEF);
}

#[test]
fn inx_dcx_wrap_at_pair_boundaries() {
    let mut cpu = new_cpu();
    cpu.set_bc(0xFFFF);
    cpu.load(0x100, &[0x03]); // INX B
    cpu.set_pc(0x100);
    cpu.step();
    assert_eq!(cpu.bc(), 0x0000);

    cpu.load(0x101, &[0x0B]); // DCX B
    cpu.step();
    assert_eq!(cpu.bc(), 0xFFFF);
}

#[test]
fn inx_dcx_do_not_touch_flags() {
    let mut cpu = new_cpu();
    cpu.set_psw(0xD7);
    cpu.set_bc(0x00FF);
    cpu.load(0x100, &[0x03]); // INX B
    cpu.set_pc(0x100);
    cpu.step();
    assert_eq!(cpu.f(), 0xD7);
}

#[test]
fn dad_sets_carry_from_bit15_and_only_carry() {
    let mut cpu = new_cpu();
    cpu.set_psw(0x00);
    cpu.set_hl(0xFFFF);
    cpu.set_bc(0x0001);
    cpu.load(0x100, &[0x09]); // DAD B
    cpu.set_pc(0x100);
    cpu.step();
    assert_eq!(cpu.hl(), 0x0000);
    assert!(cpu.f() & 0x01 != 0, "DAD must set carry on bit-15 overflow");
    assert_eq!(cpu.uptime_cycles(), 10);
}

#[test]
fn register_pair_aliasing_is_mutually_visible() {
    let mut cpu = new_cpu();
    cpu.set_b(0x12);
    cpu.set_c(0x34);
    assert_eq!(cpu.bc(), 0x1234);

    cpu.set_bc(0xABCD);
    assert_eq!(cpu.b(), 0xAB);
    assert_eq!(cpu.c(), 0xCD);
}

#[test]
fn store_into_rom_region_is_silently_dropped() {
    let mut cpu = i8080::Cpu::with_rom_map(
        Box::new(common::TestIo::new()),
        vec![RomRegion::new(0x0000, 0x2000).unwrap()],
    )
    .unwrap();
    cpu.set_a(0x42);
    cpu.load(0x100, &[0x3E, 0x42, 0x32, 0x00, 0x00]); // MVI A,0x42 ; STA 0x0000
    cpu.set_pc(0x100);
    cpu.step();
    cpu.step();
    assert_eq!(cpu.load8(0x0000), 0x00);
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn invalid_rom_region_is_rejected() {
    let err = RomRegion::new(0x10, 0x05).unwrap_err();
    match err {
        i8080::CpuError::InvalidRomRegion { begin, end } => {
            assert_eq!(begin, 0x10);
            assert_eq!(end, 0x05);
        }
    }
}

#[test]
fn pc_wraps_past_0xffff() {
    let mut cpu = new_cpu();
    cpu.set_pc(0xFFFF);
    cpu.load(0xFFFF, &[0x00]); // NOP
    cpu.step();
    assert_eq!(cpu.pc(), 0x0000);
}
