//! BIOS collaborator. `VgaCore::init` calls `Bios::program_default_mode`
//! exactly once, mirroring `dustbox::bios::BIOS` being handed to
//! `GPU::set_mode` at reset.

use regs::consts::*;
use regs::RegFile;

pub trait Bios {
    fn program_default_mode(&self, regs: &mut RegFile);
}

/// Programs mode 3: 80x25, 16-color text. This is the only mode this crate's
/// integration tests exercise; a host embedding this core in a fuller DOS
/// machine would supply its own `Bios` that knows the whole INT 10h mode
/// table.
pub struct StandardBios;

impl Bios for StandardBios {
    fn program_default_mode(&self, regs: &mut RegFile) {
        regs.misc_output = MISC_RAM_ENABLED;

        regs.seq.set_index(SEQ_CLOCK_REG);
        regs.seq.write_current(SEQ_CLOCK_98DM);
        regs.seq.set_index(SEQ_MASK_REG);
        regs.seq.write_current(0x03);
        regs.seq.set_index(SEQ_MEM_REG);
        regs.seq.write_current(0x00);

        regs.gc.set_index(GC_MISC_REG);
        regs.gc.write_current(0x00);
        regs.gc.set_index(GC_MODE_REG);
        regs.gc.write_current(0x00);
        regs.gc.set_index(GC_READ_MAP_SEL_REG);
        regs.gc.write_current(0x00);

        regs.crtc.set_index(CRTC_END_HORZ_DISP_REG);
        regs.crtc.write_current(79);
        regs.crtc.set_index(CRTC_VERT_DISP_END_REG);
        regs.crtc.write_current(24);
        regs.crtc.set_index(CRTC_OVERFLOW_REG);
        regs.crtc.write_current(0x00);
        regs.crtc.set_index(CRTC_MAX_SCAN_LINE_REG);
        regs.crtc.write_current(0x00);
        regs.crtc.set_index(CRTC_OFFSET_REG);
        regs.crtc.write_current(40);
        regs.crtc.set_index(CRTC_UNDERLINE_REG);
        regs.crtc.write_current(0x00);
        regs.crtc.set_index(CRTC_MODE_CONTROL_REG);
        regs.crtc.write_current(0x00);
        regs.crtc.set_index(CRTC_START_ADDR_HIGH_REG);
        regs.crtc.write_current(0x00);
        regs.crtc.set_index(CRTC_START_ADDR_LOW_REG);
        regs.crtc.write_current(0x00);
        regs.crtc.set_index(CRTC_CURSOR_START_REG);
        regs.crtc.write_current(0x0D);
        regs.crtc.set_index(CRTC_CURSOR_END_REG);
        regs.crtc.write_current(0x0E);
        regs.crtc.set_index(CRTC_CURSOR_LOC_HIGH_REG);
        regs.crtc.write_current(0x00);
        regs.crtc.set_index(CRTC_CURSOR_LOC_LOW_REG);
        regs.crtc.write_current(0x00);

        regs.ac.write_index_port(AC_CONTROL_REG);
        regs.ac.write_index_port(0x00);
        regs.ac.reset_latch();
    }
}

#[cfg(test)]
#[path = "./bios_test.rs"]
mod bios_test;
