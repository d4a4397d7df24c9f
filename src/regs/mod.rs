//! The register file: five indexed banks plus the scalar Misc Output
//! register, DAC direction/index state and the Attribute Controller latch.
//!
//! `RegFile` enforces per-bank index bounds (out-of-range index writes are
//! dropped) and reports which display-side flag a data write should set, via
//! `RegEffect`, so the caller (`VgaCore::write_port`) can apply it to
//! `DisplayState` without `RegFile` needing to know that type exists.

pub mod consts;
pub mod sequencer;
pub mod graphics_controller;
pub mod crtc;
pub mod attribute_controller;
pub mod dac;

pub use self::sequencer::Sequencer;
pub use self::graphics_controller::GraphicsController;
pub use self::crtc::Crtc;
pub use self::attribute_controller::AttributeController;
pub use self::dac::Dac;

use self::consts::*;

/// Side effect a register-bank data write has on display-side state.
/// At most one applies per write.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegEffect {
    None,
    ModeChanged,
    CursorMoved,
}

#[derive(Clone)]
pub struct RegFile {
    pub misc_output: u8,
    pub seq: Sequencer,
    pub gc: GraphicsController,
    pub crtc: Crtc,
    pub ac: AttributeController,
    pub dac: Dac,
}

impl Default for RegFile {
    fn default() -> Self {
        RegFile {
            misc_output: 0,
            seq: Sequencer::default(),
            gc: GraphicsController::default(),
            crtc: Crtc::default(),
            ac: AttributeController::default(),
            dac: Dac::default(),
        }
    }
}

impl RegFile {
    pub fn ram_enabled(&self) -> bool {
        self.misc_output & MISC_RAM_ENABLED != 0
    }

    /// `GC_DATA` write: stores the byte and reports `ModeChanged` when the
    /// Misc register (index 6) was touched, since it selects text-vs-graphics
    /// and the aperture.
    pub fn write_gc_data(&mut self, data: u8) -> RegEffect {
        let index = self.gc.index();
        self.gc.write_current(data);
        if index == GC_MISC_REG {
            RegEffect::ModeChanged
        } else {
            RegEffect::None
        }
    }

    /// `CRTC_DATA` write: stores the byte and reports `ModeChanged` or
    /// `CursorMoved` depending on which index was touched.
    pub fn write_crtc_data(&mut self, data: u8) -> RegEffect {
        let index = self.crtc.index();
        self.crtc.write_current(data);
        match index {
            CRTC_END_HORZ_DISP_REG | CRTC_VERT_DISP_END_REG | CRTC_OVERFLOW_REG => {
                RegEffect::ModeChanged
            }
            CRTC_CURSOR_LOC_LOW_REG
            | CRTC_CURSOR_LOC_HIGH_REG
            | CRTC_CURSOR_START_REG
            | CRTC_CURSOR_END_REG => RegEffect::CursorMoved,
            _ => RegEffect::None,
        }
    }
}
