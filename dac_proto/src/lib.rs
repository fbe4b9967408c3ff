//! Wire format of the dual serial DAC driving the oscilloscope
//!
//! Every command is a single 16-bit word. The top bits select the port and
//! mode, the 10-bit coordinate sits in D2..D11.

use thiserror::Error;

/// Largest value the 10-bit DAC can output
pub const FULL_SCALE: u16 = 1023;

/// Mask of the control bits in a command word
pub const CONTROL_MASK: u16 = 0xF000;

/// Selects the internal 2.048 V reference; sent once before the first frame
pub const REFERENCE_2V048: u16 = 0xD002;

// ============================================================================
// Ports
// ============================================================================

/// Output port of the DAC. The scope's X input is wired to B, Y to A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DacPort {
    A,
    B,
}

impl DacPort {
    pub const fn control_bits(self) -> u16 {
        match self {
            DacPort::A => 0xC000,
            DacPort::B => 0x4000,
        }
    }

    pub const fn from_control_bits(bits: u16) -> Option<Self> {
        match bits {
            0xC000 => Some(DacPort::A),
            0x4000 => Some(DacPort::B),
            _ => None,
        }
    }
}

// ============================================================================
// Words
// ============================================================================

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("word {word:#06x} has control bits {control:#06x}, not a coordinate port")]
    UnknownControl { word: u16, control: u16 },
}

/// One 16-bit command word as clocked out on the serial line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DacWord(pub u16);

impl DacWord {
    /// Load `value` into `port`, saturating at full scale
    pub const fn coordinate(port: DacPort, value: u16) -> Self {
        let value = if value > FULL_SCALE { FULL_SCALE } else { value };
        DacWord((value << 2) + port.control_bits())
    }

    pub const fn setup() -> Self {
        DacWord(REFERENCE_2V048)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub fn is_setup(self) -> bool {
        self.0 == REFERENCE_2V048
    }

    /// Split a coordinate word back into its port and value
    pub fn decode(self) -> Result<(DacPort, u16), DecodeError> {
        let control = self.0 & CONTROL_MASK;
        let port = DacPort::from_control_bits(control).ok_or(DecodeError::UnknownControl {
            word: self.0,
            control,
        })?;
        Ok((port, (self.0 >> 2) & FULL_SCALE))
    }
}

impl From<DacWord> for u16 {
    fn from(word: DacWord) -> Self {
        word.0
    }
}

/// The two words that place the beam at `(x, y)`, in transmission order
pub const fn encode_point(x: u16, y: u16) -> [DacWord; 2] {
    [
        DacWord::coordinate(DacPort::B, x),
        DacWord::coordinate(DacPort::A, y),
    ]
}
