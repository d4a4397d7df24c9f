#[macro_use]
extern crate quick_error;
extern crate simple_error;

#[cfg(test)]
extern crate pretty_assertions;

pub mod bios;
pub mod error;
pub mod host;
pub mod mode;
pub mod mode_switch;
pub mod planemem;
pub mod regs;
pub mod scanout;
pub mod vga;
pub mod xlate;

pub use bios::{Bios, StandardBios};
pub use error::VgaError;
pub use host::{CellValue, GraphicsSurface, HostDisplay, Rect, TextSurface};
pub use vga::VgaCore;
