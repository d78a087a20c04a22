//! Declarative macros that generate the register-specialized instruction
//! handlers (MOV, MVI, ALU, INR/DCR, 16-bit arith, PUSH/POP) from a handful
//! of shared primitives, avoiding 49 near-identical MOV bodies and a dozen
//! near-identical ALU bodies per register.

macro_rules! op_mov {
    ($name:ident, $dst:ident, $src:ident) => {
        pub(crate) fn $name(&mut self, _imm: u16) -> bool {
            self.$dst = self.$src;
            false
        }
    };
}

macro_rules! op_mov_from_m {
    ($name:ident, $dst:ident) => {
        pub(crate) fn $name(&mut self, _imm: u16) -> bool {
            self.$dst = self.load8(self.hl());
            false
        }
    };
}

macro_rules! op_mov_to_m {
    ($name:ident, $src:ident) => {
        pub(crate) fn $name(&mut self, _imm: u16) -> bool {
            self.store8(self.hl(), self.$src);
            false
        }
    };
}

macro_rules! op_mvi {
    ($name:ident, $dst:ident) => {
        pub(crate) fn $name(&mut self, imm: u16) -> bool {
            self.$dst = imm as u8;
            false
        }
    };
}

macro_rules! op_alu_c_reg {
    ($name:ident, $do:ident, $reg:ident, $carry:expr) => {
        pub(crate) fn $name(&mut self, _imm: u16) -> bool {
            self.$do(self.$reg, $carry);
            false
        }
    };
}

macro_rules! op_alu_c_m {
    ($name:ident, $do:ident, $carry:expr) => {
        pub(crate) fn $name(&mut self, _imm: u16) -> bool {
            let v = self.load8(self.hl());
            self.$do(v, $carry);
            false
        }
    };
}

macro_rules! op_alu_c_imm {
    ($name:ident, $do:ident, $carry:expr) => {
        pub(crate) fn $name(&mut self, imm: u16) -> bool {
            self.$do(imm as u8, $carry);
            false
        }
    };
}

macro_rules! op_alu_reg {
    ($name:ident, $do:ident, $reg:ident) => {
        pub(crate) fn $name(&mut self, _imm: u16) -> bool {
            self.$do(self.$reg);
            false
        }
    };
}

macro_rules! op_alu_m {
    ($name:ident, $do:ident) => {
        pub(crate) fn $name(&mut self, _imm: u16) -> bool {
            let v = self.load8(self.hl());
            self.$do(v);
            false
        }
    };
}

macro_rules! op_alu_imm {
    ($name:ident, $do:ident) => {
        pub(crate) fn $name(&mut self, imm: u16) -> bool {
            self.$do(imm as u8);
            false
        }
    };
}

macro_rules! op_inr_reg {
    ($name:ident, $reg:ident) => {
        pub(crate) fn $name(&mut self, _imm: u16) -> bool {
            self.$reg = self.do_inr(self.$reg);
            false
        }
    };
}

macro_rules! op_dcr_reg {
    ($name:ident, $reg:ident) => {
        pub(crate) fn $name(&mut self, _imm: u16) -> bool {
            self.$reg = self.do_dcr(self.$reg);
            false
        }
    };
}

macro_rules! op_inx {
    ($name:ident, $getter:ident, $setter:ident) => {
        pub(crate) fn $name(&mut self, _imm: u16) -> bool {
            self.$setter(self.$getter().wrapping_add(1));
            false
        }
    };
}

macro_rules! op_dcx {
    ($name:ident, $getter:ident, $setter:ident) => {
        pub(crate) fn $name(&mut self, _imm: u16) -> bool {
            self.$setter(self.$getter().wrapping_sub(1));
            false
        }
    };
}

macro_rules! op_dad {
    ($name:ident, $getter:ident) => {
        pub(crate) fn $name(&mut self, _imm: u16) -> bool {
            let hl = self.hl();
            let rhs = self.$getter();
            let carry = crate::flags::add16_carry(hl, rhs);
            self.set_hl(hl.wrapping_add(rhs));
            self.apply_carry_only(carry);
            false
        }
    };
}

macro_rules! op_push {
    ($name:ident, $getter:ident) => {
        pub(crate) fn $name(&mut self, _imm: u16) -> bool {
            let v = self.$getter();
            self.push16(v);
            false
        }
    };
}

macro_rules! op_pop {
    ($name:ident, $setter:ident) => {
        pub(crate) fn $name(&mut self, _imm: u16) -> bool {
            let v = self.pop16();
            self.$setter(v);
            false
        }
    };
}
