//! Mode decoding: derives aperture, resolution and the text/graphics
//! selector from register state. Pure functions, like `xlate`.

use regs::consts::*;
use regs::{AttributeController, Crtc, GraphicsController, Sequencer};

pub fn is_text_mode(gc: &GraphicsController) -> bool {
    !gc.misc().noalpha()
}

/// `(base, limit)` of the active aperture, selected by `GC.Misc` bits 2..3.
pub fn aperture(gc: &GraphicsController) -> (u32, u32) {
    APERTURES[gc.misc().aperture_select() as usize]
}

/// Display resolution in pixels (graphics mode) or characters (text mode).
///
/// The vertical field gets the documented 2-bit overflow extension
/// (`CRTC.Overflow` bits `VDE8`/`VDE9`); the horizontal field does not, by
/// design: the 8-bit `END_HORZ_DISP` caps X at 256 and there is no
/// corresponding 9th bit wired up anywhere in this core. Do not "fix" this
/// by inventing one; some
/// high-resolution text modes genuinely need a 9th horizontal bit that this
/// model cannot represent.
pub fn resolution(crtc: &Crtc, gc: &GraphicsController, seq: &Sequencer, ac: &AttributeController) -> (u32, u32) {
    let overflow = crtc.overflow();
    let mut y = u32::from(crtc.vert_disp_end());
    if overflow.vde8() {
        y |= 1 << 8;
    }
    if overflow.vde9() {
        y |= 1 << 9;
    }
    y += 1;

    let mut x = u32::from(crtc.end_horz_disp());
    x += 1;

    if gc.misc().noalpha() {
        x *= if seq.clocking_mode().eight_dot() { 8 } else { 9 };
        if ac.control().eight_bit() {
            x /= 2;
        }
    }

    y /= u32::from(crtc.max_scan_line()) + 1;

    (x, y)
}

#[cfg(test)]
#[path = "./mode_test.rs"]
mod mode_test;
