use i8080::IoHandler;

/// A 256-port I/O double: IN returns whatever was last written (by the test
/// or by a prior OUT), OUT just records the value.
pub struct TestIo {
    pub ports: [u8; 256],
}

impl TestIo {
    pub fn new() -> Self {
        TestIo { ports: [0; 256] }
    }
}

impl IoHandler for TestIo {
    fn input(&mut self, port: u8) -> u8 {
        self.ports[port as usize]
    }

    fn output(&mut self, port: u8, value: u8) {
        self.ports[port as usize] = value;
    }
}

pub fn new_cpu() -> i8080::Cpu {
    i8080::Cpu::new(Box::new(TestIo::new()))
}
