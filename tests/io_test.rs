mod common;
use common::new_cpu;

#[test]
fn out_then_in_round_trips_through_the_same_port() {
    let mut cpu = new_cpu();
    cpu.set_a(0x5A);
    cpu.load(0x100, &[0xD3, 0x07]); // OUT 0x07
    cpu.set_pc(0x100);
    cpu.step();
    assert_eq!(cpu.uptime_cycles(), 10);

    cpu.set_a(0x00);
    cpu.load(0x102, &[0xDB, 0x07]); // IN 0x07
    cpu.step();
    assert_eq!(cpu.a(), 0x5A);
    assert_eq!(cpu.uptime_cycles(), 20);
}

#[test]
fn ports_are_independent() {
    let mut cpu = new_cpu();
    cpu.set_a(0x11);
    cpu.load(0x100, &[0xD3, 0x01]); // OUT 0x01
    cpu.set_pc(0x100);
    cpu.step();

    cpu.set_a(0x22);
    cpu.load(0x102, &[0xD3, 0x02]); // OUT 0x02
    cpu.step();

    cpu.set_a(0);
    cpu.load(0x104, &[0xDB, 0x01]); // IN 0x01
    cpu.step();
    assert_eq!(cpu.a(), 0x11);
}
