//! A cycle-accurate Intel 8080 core: registers, flags, a flat 64 KiB address
//! space, and the fetch/decode/execute engine driven by a 256-entry opcode
//! table. Boards (CP/M shims, arcade cabinets, disassemblers) sit outside
//! this crate and drive it through [`Cpu`] and [`IoHandler`].

pub mod error;
pub mod flags;
pub mod instruction;

mod cpu;

pub use cpu::{Cpu, IoHandler, NullIo, RomRegion};
pub use error::CpuError;
pub use instruction::{OpcodeInfo, instruction_info};
