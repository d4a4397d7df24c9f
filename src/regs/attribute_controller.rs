use regs::consts::*;

#[derive(Clone, Copy)]
pub struct AcControl(pub u8);

impl AcControl {
    /// `true` = 8 bits/pixel (256-color), `false` = 4 bits/pixel (16-color).
    pub fn eight_bit(&self) -> bool {
        self.0 & AC_CONTROL_8BIT != 0
    }
}

/// The Attribute Controller shares a single port (`PORT_AC_INDEX`) between
/// setting the index and writing data to it; `latch` tracks which
/// interpretation the next write should use. Reading either status register
/// resets the latch (see `VgaCore::read_port`).
#[derive(Clone)]
pub struct AttributeController {
    index: u8,
    latch: bool,
    regs: [u8; MAX_AC as usize],
}

impl Default for AttributeController {
    fn default() -> Self {
        AttributeController {
            index: AC_PAL_0_REG,
            latch: false,
            regs: [0u8; MAX_AC as usize],
        }
    }
}

impl AttributeController {
    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn latch(&self) -> bool {
        self.latch
    }

    pub fn reset_latch(&mut self) {
        self.latch = false;
    }

    /// Implements the `AC_INDEX` port write: alternates between "set index"
    /// and "write data" depending on the latch, and toggles the latch.
    pub fn write_index_port(&mut self, data: u8) {
        if !self.latch {
            if data < MAX_AC {
                self.index = data;
            }
        } else {
            self.regs[self.index as usize] = data;
        }
        self.latch = !self.latch;
    }

    pub fn read_data(&self) -> u8 {
        self.regs[self.index as usize]
    }

    pub fn reg(&self, index: u8) -> u8 {
        self.regs[index as usize]
    }

    pub fn control(&self) -> AcControl {
        AcControl(self.regs[AC_CONTROL_REG as usize])
    }
}
