//! Address translation: pure functions of register state and an input
//! address, with no access to `PlaneMemory` itself, so they can be
//! property-tested in isolation.

use regs::{Crtc, GraphicsController, Sequencer};

/// The addressing granularity implied by the CRTC's Underline/ModeControl
/// bits. Always one of 1 (byte), 2 (word) or 4 (doubleword).
pub fn address_size(crtc: &Crtc) -> u32 {
    if crtc.underline().dword() {
        4
    } else if crtc.mode_control().byte() {
        1
    } else {
        2
    }
}

/// `VgaTranslateReadAddress`: returns `(plane, offset_within_plane)`.
pub fn translate_read(
    addr: u32,
    base: u32,
    seq: &Sequencer,
    gc: &GraphicsController,
    crtc: &Crtc,
) -> (u8, u32) {
    let offset = addr.wrapping_sub(base);

    let (plane, mut offset) = if seq.memory_mode().chain4() {
        ((offset & 3) as u8, offset >> 2)
    } else if gc.mode().odd_even() {
        ((offset & 1) as u8, offset >> 1)
    } else {
        (gc.read_map_select(), offset)
    };

    offset *= address_size(crtc);
    (plane, offset)
}

/// `VgaTranslateWriteAddress`: returns the plane-0-relative offset; plane
/// selection for writes is handled by the per-plane broadcast gate in
/// `planemem`, not here.
pub fn translate_write(addr: u32, base: u32, seq: &Sequencer, gc: &GraphicsController, crtc: &Crtc) -> u32 {
    let offset = addr.wrapping_sub(base);

    let mut offset = if seq.memory_mode().chain4() {
        offset >> 2
    } else if gc.mode().odd_even() {
        offset >> 1
    } else {
        offset
    };

    offset *= address_size(crtc);
    offset
}

#[cfg(test)]
#[path = "./xlate_test.rs"]
mod xlate_test;
