//! Emulated serial link to the DAC and the oscilloscope behind it

use dac_proto::{encode_point, DacPort, DacWord};
use game_core::PointPlotter;

/// What one frame put on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub points: usize,
    pub words: usize,
    pub saturated: usize,
    pub rejected: usize,
    /// Lowest and highest beam position, once anything was drawn
    pub bounds: Option<((u16, u16), (u16, u16))>,
}

impl FrameStats {
    fn record(&mut self, beam: (u16, u16)) {
        self.points += 1;
        self.bounds = Some(match self.bounds {
            None => (beam, beam),
            Some((lo, hi)) => (
                (lo.0.min(beam.0), lo.1.min(beam.1)),
                (hi.0.max(beam.0), hi.1.max(beam.1)),
            ),
        });
    }
}

/// A `PointPlotter` that clocks every point out as DAC words and reads them
/// back the way the scope sees them
#[derive(Debug, Default)]
pub struct ScopeBus {
    beam: (u16, u16),
    frame: FrameStats,
    total_words: u64,
    configured: bool,
}

impl ScopeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send the reference setup word; required once before drawing
    pub fn send_setup(&mut self) {
        self.transmit(DacWord::setup());
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Where the beam currently rests
    pub fn beam(&self) -> (u16, u16) {
        self.beam
    }

    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    /// Stats so far for the frame in progress
    #[cfg(test)]
    pub fn current(&self) -> &FrameStats {
        &self.frame
    }

    /// Close the frame and start counting the next one
    pub fn end_frame(&mut self) -> FrameStats {
        std::mem::take(&mut self.frame)
    }

    fn transmit(&mut self, word: DacWord) {
        self.total_words += 1;
        self.frame.words += 1;

        if word.is_setup() {
            self.configured = true;
            return;
        }

        match word.decode() {
            Ok((DacPort::B, x)) => self.beam.0 = x,
            Ok((DacPort::A, y)) => self.beam.1 = y,
            Err(err) => {
                self.frame.rejected += 1;
                log::warn!("DAC rejected word: {err}");
            }
        }
    }
}

impl PointPlotter for ScopeBus {
    fn plot(&mut self, x: u16, y: u16) {
        if !self.configured {
            log::warn!("Plotting ({x}, {y}) before the DAC reference was set up");
        }

        for word in encode_point(x, y) {
            self.transmit(word);
        }

        if self.beam != (x, y) {
            self.frame.saturated += 1;
        }
        self.frame.record(self.beam);
    }
}
