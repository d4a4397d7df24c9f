//! Scan-out: walks the active display window once per refresh,
//! reconstructs pixel or character-cell values from planar memory, and
//! accumulates a dirty rectangle for the host surface.

use std::cell::Cell;

use host::{CellValue, GraphicsSurface, HostDisplay, Rect, TextSurface};
use mode_switch::{switch_mode, ActiveSurface};
use planemem::PlaneMemory;
use regs::RegFile;
use error::VgaError;

/// The three shift-mode pixel reconstructions, computed once per refresh
/// rather than re-testing the Mode register's bits per pixel.
#[derive(Clone, Copy)]
pub(crate) enum ShiftMode {
    Chain4 { eight_bit: bool },
    Interleaved,
    Planar { eight_bit: bool },
}

fn shift_mode(regs: &RegFile) -> ShiftMode {
    let gc_mode = regs.gc.mode();
    let eight_bit = regs.ac.control().eight_bit();
    if gc_mode.shift256() {
        ShiftMode::Chain4 { eight_bit }
    } else if gc_mode.shift_interleaved() {
        ShiftMode::Interleaved
    } else {
        ShiftMode::Planar { eight_bit }
    }
}

pub(crate) fn graphics_pixel(mem: &PlaneMemory, mode: ShiftMode, start: u32, addr_size: u32, j: u32) -> u8 {
    match mode {
        ShiftMode::Chain4 { eight_bit } => {
            let plane = (j % 4) as u8;
            if eight_bit {
                mem.read_plane_byte(plane, (start + j / 4) * addr_size)
            } else {
                let byte = mem.read_plane_byte(plane, (start + j / 8) * addr_size);
                if (j / 4) % 2 == 0 {
                    byte >> 4
                } else {
                    byte & 0x0F
                }
            }
        }
        ShiftMode::Interleaved => 0,
        ShiftMode::Planar { eight_bit } => {
            let mut out = 0u8;
            if eight_bit {
                for k in 0..4u32 {
                    let byte = mem.read_plane_byte(k as u8, (start + j / 4) * addr_size);
                    let pos = 3 - (j % 4);
                    let pair = (byte >> (pos * 2)) & 0x03;
                    out |= ((pair >> 1) & 1) << k;
                    out |= (pair & 1) << (k + 4);
                }
            } else {
                for k in 0..4u32 {
                    let byte = mem.read_plane_byte(k as u8, (start + j / 8) * addr_size);
                    let bit = (byte >> (7 - (j % 8))) & 1;
                    out |= bit << k;
                }
            }
            out
        }
    }
}

fn text_cell(mem: &PlaneMemory, start: u32, addr_size: u32, j: u32) -> CellValue {
    let addr = (((start + j) * addr_size) & 0xFFFF) as u32;
    CellValue {
        ch: mem.read_plane_byte(0, addr),
        attr: mem.read_plane_byte(1, addr),
    }
}

/// `(visible, size_percent, col, row)`, including the skew term folded into
/// `location` and the `start < end` visibility test.
pub fn cursor_geometry(regs: &RegFile, scanline_size: u32) -> (bool, u32, u32, u32) {
    let start = regs.crtc.cursor_start();
    let end = regs.crtc.cursor_end();
    let text_size = u32::from(regs.crtc.max_scan_line()) + 1;
    let visible = start < end;
    let size_percent = if visible {
        100 * u32::from(end - start) / text_size
    } else {
        0
    };
    let location = u32::from(regs.crtc.cursor_location());
    let (col, row) = if scanline_size == 0 {
        (0, 0)
    } else {
        (location % scanline_size, location / scanline_size)
    };
    (visible, size_percent, col, row)
}

/// Display-side scan-out state. Owned by `VgaCore`; `refresh` both reads
/// and mutates it.
pub struct DisplayState {
    pub mode_changed: bool,
    pub cursor_moved: bool,
    pub needs_update: bool,
    pub update_rect: Rect,
    pub in_vertical_retrace: bool,
    pub in_horizontal_retrace: bool,
    pub surface: ActiveSurface,
    pub text_cache: Vec<CellValue>,
    warned_interleaved: Cell<bool>,
}

impl Default for DisplayState {
    fn default() -> Self {
        DisplayState {
            mode_changed: true,
            cursor_moved: true,
            needs_update: false,
            update_rect: Rect::begin_mark(),
            in_vertical_retrace: false,
            in_horizontal_retrace: false,
            surface: ActiveSurface::None,
            text_cache: Vec::new(),
            warned_interleaved: Cell::new(false),
        }
    }
}


/// Runs the five-step refresh sequence: mode switch, cursor move, pixel or
/// text-cell reconstruction, dirty-rect accumulation, retrace flag.
pub fn refresh(regs: &RegFile, mem: &PlaneMemory, display: &mut DisplayState, host: &mut dyn HostDisplay) -> Result<(), VgaError> {
    if display.mode_changed {
        switch_mode(&mut display.surface, host, regs)?;
        display.mode_changed = false;
    }

    let scanline_size = u32::from(regs.crtc.offset()) * 2;

    if display.cursor_moved {
        let (visible, size_percent, col, row) = cursor_geometry(regs, scanline_size);
        if let ActiveSurface::Text(ref mut text) = display.surface {
            text.set_cursor(visible, size_percent, col, row);
        }
        display.cursor_moved = false;
    }

    let addr_size = ::xlate::address_size(&regs.crtc);
    let mut start = regs.crtc.start_address();

    // Dirty tracking is accumulated into locals while `display.surface` is
    // mutably borrowed by the match below, then folded back into `display`
    // afterward. A whole-`&mut self` method can't be called while a field
    // of the same struct is already borrowed.
    let mut dirty = false;
    let mut rect = Rect::begin_mark();

    match display.surface {
        ActiveSurface::Graphics(ref mut gfx) => {
            let (width, height) = gfx.dims();
            let mode = shift_mode(regs);
            if let ShiftMode::Interleaved = mode {
                display.warned_interleaved.set(true);
            }

            let fb = gfx.framebuffer();
            {
                let mut buf = fb.lock().unwrap();
                for i in 0..height {
                    for j in 0..width {
                        let value = graphics_pixel(mem, mode, start, addr_size, j);
                        let idx = (i * width + j) as usize;
                        if idx < buf.len() && buf[idx] != value {
                            buf[idx] = value;
                            if !dirty {
                                rect = Rect::begin_mark();
                            }
                            rect.expand(j as i32, i as i32);
                            dirty = true;
                        }
                    }
                    start += scanline_size;
                }
            }

            if dirty {
                gfx.invalidate_region(rect);
            }
        }
        ActiveSurface::Text(ref mut text) => {
            let (cols, rows) = text.dims();
            if display.text_cache.len() != (cols * rows) as usize {
                display.text_cache = vec![CellValue::default(); (cols * rows) as usize];
            }
            for i in 0..rows {
                for j in 0..cols {
                    let cell = text_cell(mem, start, addr_size, j);
                    let idx = (i * cols + j) as usize;
                    if display.text_cache[idx] != cell {
                        display.text_cache[idx] = cell;
                        if !dirty {
                            rect = Rect::begin_mark();
                        }
                        rect.expand(j as i32, i as i32);
                        dirty = true;
                    }
                }
                start += scanline_size;
            }
            if dirty {
                text.blit(rect, &display.text_cache);
            }
        }
        ActiveSurface::None => {}
    }

    display.update_rect = rect;
    display.needs_update = false;
    display.in_vertical_retrace = true;

    Ok(())
}

#[cfg(test)]
#[path = "./scanout_test.rs"]
mod scanout_test;
