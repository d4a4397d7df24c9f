use regs::consts::PALETTE_SIZE;

#[derive(Clone, Copy, PartialEq)]
enum Direction {
    Read,
    Write,
}

/// The 256-entry DAC palette bank.
///
/// Each entry is a single byte (masked to 6 bits on write by the port
/// table), addressed by `VgaDacIndex`-equivalent auto-increment. This
/// mirrors the VGA hardware model's own simplification: the index wraps
/// every `PALETTE_SIZE` accesses regardless of how the guest is using the
/// byte (as a raw index, or one component of an R/G/B triplet it assembles
/// across three successive writes). This core stores what it's given and
/// leaves palette-to-color interpretation to the host framebuffer, which is
/// wired up with its own identity palette at mode-switch time.
#[derive(Clone)]
pub struct Dac {
    index: u8,
    direction: Direction,
    regs: [u8; PALETTE_SIZE],
}

impl Default for Dac {
    fn default() -> Self {
        Dac {
            index: 0,
            direction: Direction::Write,
            regs: [0u8; PALETTE_SIZE],
        }
    }
}

impl Dac {
    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn is_read_mode(&self) -> bool {
        self.direction == Direction::Read
    }

    pub fn set_read_index(&mut self, data: u8) {
        self.direction = Direction::Read;
        self.index = data; // a u8 is already < PALETTE_SIZE
    }

    pub fn set_write_index(&mut self, data: u8) {
        self.direction = Direction::Write;
        self.index = data; // a u8 is already < PALETTE_SIZE
    }

    fn advance(&mut self) {
        self.index = ((u16::from(self.index) + 1) % PALETTE_SIZE as u16) as u8;
    }

    /// `DAC_DATA` read in read mode: returns the byte at the current index
    /// and auto-increments.
    pub fn read_data(&mut self) -> u8 {
        let value = self.regs[self.index as usize];
        self.advance();
        value
    }

    /// `DAC_DATA` write in write mode: `data` must already be masked to 6
    /// bits by the caller (the port table masks with `& 0x3F`).
    pub fn write_data(&mut self, data: u8) {
        self.regs[self.index as usize] = data;
        self.advance();
    }

    pub fn reg(&self, index: u8) -> u8 {
        self.regs[index as usize]
    }
}
