//! Register bank sizes, port addresses and bit layouts.
//!
//! Values for the aperture table and the default index registers are taken
//! verbatim from the VGA hardware model this crate reimplements; everything
//! else is an internally-consistent bit assignment documented here rather
//! than scattered as magic numbers through `xlate`/`mode`/`scanout`.

pub const NUM_BANKS: usize = 4;
pub const BANK_SIZE: usize = 0x1_0000;

pub const MAX_SEQ: u8 = 5;
pub const MAX_GC: u8 = 9;
pub const MAX_CRTC: u8 = 0x19;
pub const MAX_AC: u8 = 0x15;
pub const PALETTE_SIZE: usize = 256;

// Default index each bank's index register resets to.
pub const SEQ_RESET_REG: u8 = 0x00;
pub const GC_RESET_REG: u8 = 0x00;
pub const CRTC_HORZ_TOTAL_REG: u8 = 0x00;
pub const AC_PAL_0_REG: u8 = 0x00;

// Sequencer register indices.
pub const SEQ_CLOCK_REG: u8 = 0x01;
pub const SEQ_MASK_REG: u8 = 0x02;
pub const SEQ_MEM_REG: u8 = 0x04;

// Sequencer bit fields.
pub const SEQ_CLOCK_98DM: u8 = 0x01; // 1 = 8 dots/char, 0 = 9 dots/char
pub const SEQ_MEM_C4: u8 = 0x04; // chain-4 addressing

// Graphics Controller register indices.
pub const GC_READ_MAP_SEL_REG: u8 = 0x04;
pub const GC_MODE_REG: u8 = 0x05;
pub const GC_MISC_REG: u8 = 0x06;

// Graphics Controller bit fields.
pub const GC_MODE_OE: u8 = 0x10; // odd-even addressing
pub const GC_MODE_SHIFTREG: u8 = 0x20; // interleaved shift (unimplemented)
pub const GC_MODE_SHIFT256: u8 = 0x40; // chain-4 style pixel shift
pub const GC_MISC_NOALPHA: u8 = 0x01; // 1 = graphics mode, 0 = text mode

// CRTC register indices.
pub const CRTC_END_HORZ_DISP_REG: u8 = 0x01;
pub const CRTC_OVERFLOW_REG: u8 = 0x07;
pub const CRTC_MAX_SCAN_LINE_REG: u8 = 0x09;
pub const CRTC_CURSOR_START_REG: u8 = 0x0A;
pub const CRTC_CURSOR_END_REG: u8 = 0x0B;
pub const CRTC_START_ADDR_HIGH_REG: u8 = 0x0C;
pub const CRTC_START_ADDR_LOW_REG: u8 = 0x0D;
pub const CRTC_CURSOR_LOC_HIGH_REG: u8 = 0x0E;
pub const CRTC_CURSOR_LOC_LOW_REG: u8 = 0x0F;
pub const CRTC_VERT_DISP_END_REG: u8 = 0x12;
pub const CRTC_OFFSET_REG: u8 = 0x13;
pub const CRTC_UNDERLINE_REG: u8 = 0x14;
pub const CRTC_MODE_CONTROL_REG: u8 = 0x17;

// CRTC bit fields.
pub const CRTC_OVERFLOW_VDE8: u8 = 0x02;
pub const CRTC_OVERFLOW_VDE9: u8 = 0x40;
pub const CRTC_UNDERLINE_DWORD: u8 = 0x40;
pub const CRTC_MODE_CONTROL_BYTE: u8 = 0x40;

// Attribute Controller register indices.
pub const AC_CONTROL_REG: u8 = 0x10;

// Attribute Controller bit fields.
pub const AC_CONTROL_8BIT: u8 = 0x40;

// Misc Output Register (standalone, not part of any bank).
pub const MISC_RAM_ENABLED: u8 = 0x01;

// Status register bit fields.
pub const STAT_DD: u8 = 0x01;
pub const STAT_VRETRACE: u8 = 0x08;

// I/O port addresses.
pub const PORT_MISC_WRITE: u16 = 0x3C2;
pub const PORT_MISC_READ: u16 = 0x3CC;
pub const PORT_SEQ_INDEX: u16 = 0x3C4;
pub const PORT_SEQ_DATA: u16 = 0x3C5;
pub const PORT_GC_INDEX: u16 = 0x3CE;
pub const PORT_GC_DATA: u16 = 0x3CF;
pub const PORT_CRTC_INDEX: u16 = 0x3D4;
pub const PORT_CRTC_DATA: u16 = 0x3D5;
pub const PORT_AC_INDEX: u16 = 0x3C0;
pub const PORT_AC_READ: u16 = 0x3C1;
pub const PORT_DAC_READ_INDEX: u16 = 0x3C7;
pub const PORT_DAC_WRITE_INDEX: u16 = 0x3C8;
pub const PORT_DAC_DATA: u16 = 0x3C9;
pub const PORT_STAT_MONO: u16 = 0x3BA;
pub const PORT_STAT_COLOR: u16 = 0x3DA;

/// Aperture base/limit table, indexed by `(gc_misc >> 2) & 3`.
/// Taken verbatim from the VGA hardware model (`MemoryBase`/`MemoryLimit`).
pub const APERTURES: [(u32, u32); 4] = [
    (0xA_0000, 0xA_FFFF),
    (0xA_0000, 0xA_FFFF),
    (0xB_0000, 0xB_7FFF),
    (0xB_8000, 0xB_FFFF),
];
