//! Planar video RAM: four independently addressable 64 KiB banks, written
//! through a write-plane-mask/mode gate and read one plane at a time.

use regs::consts::{BANK_SIZE, NUM_BANKS};
use regs::{GraphicsController, RegFile, Sequencer};

pub struct PlaneMemory {
    banks: [Vec<u8>; NUM_BANKS],
}

impl Default for PlaneMemory {
    fn default() -> Self {
        PlaneMemory {
            banks: [
                vec![0u8; BANK_SIZE],
                vec![0u8; BANK_SIZE],
                vec![0u8; BANK_SIZE],
                vec![0u8; BANK_SIZE],
            ],
        }
    }
}

/// Which planes a single write touches, combining the Sequencer's
/// plane-mask with the Chain-4/Odd-Even filters. C4 and OE are mutually
/// exclusive in hardware, but if both bits happen to be set both filters
/// apply: a conservative AND, not an else-if.
fn write_planes(seq: &Sequencer, gc: &GraphicsController, addr_offset: u32) -> [bool; NUM_BANKS] {
    let mask = seq.plane_mask();
    let mut enabled = [false; NUM_BANKS];
    for p in 0..NUM_BANKS {
        enabled[p] = mask & (1 << p) != 0;
    }

    if seq.memory_mode().chain4() {
        let sel = (addr_offset & 3) as usize;
        for p in 0..NUM_BANKS {
            if p != sel {
                enabled[p] = false;
            }
        }
    }
    if gc.mode().odd_even() {
        let parity = (addr_offset & 1) as usize;
        for p in 0..NUM_BANKS {
            if p % 2 != parity {
                enabled[p] = false;
            }
        }
    }

    enabled
}

impl PlaneMemory {
    pub fn bank(&self, plane: u8) -> &[u8] {
        &self.banks[plane as usize]
    }

    /// Raw single-plane read, bypassing any gating. Used for DMA-style
    /// bulk host access (e.g. snapshotting a text page into planes 0/1).
    pub fn read_plane_byte(&self, plane: u8, offset: u32) -> u8 {
        self.banks[plane as usize][offset as usize % BANK_SIZE]
    }

    pub fn write_plane_byte(&mut self, plane: u8, offset: u32, value: u8) {
        let len = self.banks[plane as usize].len();
        self.banks[plane as usize][offset as usize % len] = value;
    }

    /// `VgaTranslateReadAddress` applied: returns the byte visible to the
    /// CPU at `addr` given the current addressing mode.
    pub fn read_gated(&self, addr: u32, base: u32, regs: &RegFile) -> u8 {
        let (plane, offset) = ::xlate::translate_read(addr, base, &regs.seq, &regs.gc, &regs.crtc);
        self.read_plane_byte(plane, offset)
    }

    /// `VgaTranslateWriteAddress` applied across every plane the write-mask
    /// and addressing mode allow. A write with every plane masked off is a
    /// no-op.
    pub fn write_gated(&mut self, addr: u32, base: u32, regs: &RegFile, value: u8) {
        let offset = ::xlate::translate_write(addr, base, &regs.seq, &regs.gc, &regs.crtc);
        let enabled = write_planes(&regs.seq, &regs.gc, addr.wrapping_sub(base));
        for plane in 0..NUM_BANKS {
            if enabled[plane] {
                self.write_plane_byte(plane as u8, offset, value);
            }
        }
    }
}

#[cfg(test)]
#[path = "./planemem_test.rs"]
mod planemem_test;
