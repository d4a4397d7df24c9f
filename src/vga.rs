//! `VgaCore`: the single owned structure threading register state, planar
//! memory and display state through the port and memory entry points,
//! replacing global mutable state with one owned object.

use bios::Bios;
use error::VgaError;
use host::HostDisplay;
use mode_switch::ActiveSurface;
use planemem::PlaneMemory;
use regs::consts::*;
use regs::{RegEffect, RegFile};
use scanout::{self, DisplayState};

const DEBUG_PORTS: bool = false;

pub struct VgaCore {
    regs: RegFile,
    mem: PlaneMemory,
    display: DisplayState,
    host: Box<dyn HostDisplay>,
    bios: Box<dyn Bios>,
}

impl VgaCore {
    pub fn new(host: Box<dyn HostDisplay>, bios: Box<dyn Bios>) -> VgaCore {
        VgaCore {
            regs: RegFile::default(),
            mem: PlaneMemory::default(),
            display: DisplayState::default(),
            host,
            bios,
        }
    }

    fn apply_effect(&mut self, effect: RegEffect) {
        match effect {
            RegEffect::ModeChanged => self.display.mode_changed = true,
            RegEffect::CursorMoved => self.display.cursor_moved = true,
            RegEffect::None => {}
        }
    }

    /// Dispatches a write to whichever register bank owns this port.
    pub fn write_port(&mut self, port: u16, data: u8) {
        if DEBUG_PORTS {
            println!("vga: write_port({:#06X}, {:#04X})", port, data);
        }
        match port {
            PORT_AC_INDEX => self.regs.ac.write_index_port(data),
            PORT_SEQ_INDEX => self.regs.seq.set_index(data),
            PORT_SEQ_DATA => self.regs.seq.write_current(data),
            PORT_GC_INDEX => self.regs.gc.set_index(data),
            PORT_GC_DATA => {
                let effect = self.regs.write_gc_data(data);
                self.apply_effect(effect);
            }
            PORT_CRTC_INDEX => self.regs.crtc.set_index(data),
            PORT_CRTC_DATA => {
                let effect = self.regs.write_crtc_data(data);
                self.apply_effect(effect);
            }
            PORT_DAC_READ_INDEX => self.regs.dac.set_read_index(data),
            PORT_DAC_WRITE_INDEX => self.regs.dac.set_write_index(data),
            PORT_DAC_DATA => self.regs.dac.write_data(data & 0x3F),
            PORT_MISC_WRITE => self.regs.misc_output = data,
            _ => {}
        }
    }

    /// Dispatches a read to whichever register bank owns this port.
    pub fn read_port(&mut self, port: u16) -> u8 {
        match port {
            PORT_AC_INDEX => self.regs.ac.index(),
            PORT_AC_READ => self.regs.ac.read_data(),
            PORT_SEQ_INDEX => self.regs.seq.index(),
            PORT_SEQ_DATA => self.regs.seq.read_current(),
            PORT_GC_INDEX => self.regs.gc.index(),
            PORT_GC_DATA => self.regs.gc.read_current(),
            PORT_CRTC_INDEX => self.regs.crtc.index(),
            PORT_CRTC_DATA => self.regs.crtc.read_current(),
            PORT_DAC_READ_INDEX => {
                if self.regs.dac.is_read_mode() {
                    0
                } else {
                    3
                }
            }
            PORT_DAC_WRITE_INDEX => self.regs.dac.index(),
            PORT_DAC_DATA => self.regs.dac.read_data(),
            PORT_STAT_MONO | PORT_STAT_COLOR => {
                self.regs.ac.reset_latch();
                let mut value = 0u8;
                if self.display.in_vertical_retrace || self.display.in_horizontal_retrace {
                    value |= STAT_DD;
                }
                if self.display.in_vertical_retrace {
                    value |= STAT_VRETRACE;
                }
                self.display.in_vertical_retrace = false;
                self.display.in_horizontal_retrace = false;
                value
            }
            _ => 0,
        }
    }

    /// Sets the horizontal-retrace flag, consumed by the next status-register read.
    pub fn horizontal_retrace(&mut self) {
        self.display.in_horizontal_retrace = true;
    }

    fn aperture(&self) -> (u32, u32) {
        ::mode::aperture(&self.regs.gc)
    }

    /// Silently a no-op when RAM is disabled.
    pub fn read_memory(&self, addr: u32, buf: &mut [u8]) {
        if !self.regs.ram_enabled() {
            return;
        }
        let (base, _limit) = self.aperture();
        for (i, slot) in buf.iter_mut().enumerate() {
            *slot = self.mem.read_gated(addr + i as u32, base, &self.regs);
        }
    }

    /// Silently a no-op when RAM is disabled or the plane mask is entirely
    /// zero.
    pub fn write_memory(&mut self, addr: u32, buf: &[u8]) {
        if !self.regs.ram_enabled() || self.regs.seq.plane_mask() == 0 {
            return;
        }
        let (base, _limit) = self.aperture();
        for (i, byte) in buf.iter().enumerate() {
            self.mem.write_gated(addr + i as u32, base, &self.regs, *byte);
        }
    }

    /// Runs `scanout::refresh`'s five-step sequence.
    pub fn refresh(&mut self) -> Result<(), VgaError> {
        scanout::refresh(&self.regs, &self.mem, &mut self.display, &mut *self.host)
    }

    /// Zeroes planar memory, programs the default mode, runs the mode
    /// switcher once, then snapshots the host's existing text buffer into
    /// planes 0 and 1 so the emulated display starts consistent with
    /// whatever the host terminal already shows. Reads the host's actual
    /// dimensions rather than assuming 80x25.
    pub fn init(&mut self) -> Result<(), VgaError> {
        self.mem = PlaneMemory::default();
        self.bios.program_default_mode(&mut self.regs);
        self.display.mode_changed = true;
        self.refresh()?;

        if let ActiveSurface::Text(ref text) = self.display.surface {
            let (cols, rows) = text.dims();
            let snapshot = text.snapshot();
            for (idx, cell) in snapshot.iter().enumerate() {
                if idx as u32 >= cols * rows {
                    break;
                }
                self.mem.write_plane_byte(0, idx as u32, cell.ch);
                self.mem.write_plane_byte(1, idx as u32, cell.attr);
            }
        }
        Ok(())
    }

    pub fn regs(&self) -> &RegFile {
        &self.regs
    }

    pub fn regs_mut(&mut self) -> &mut RegFile {
        &mut self.regs
    }

    pub fn mem(&self) -> &PlaneMemory {
        &self.mem
    }
}

#[cfg(test)]
#[path = "./vga_test.rs"]
mod vga_test;
