/// Counts host frames and says on which of them a simulation step is due.
///
/// The counter runs `0, 1, ..., period - 1` and wraps. A step is due whenever it reads `0`, so
/// the first frame is always due and then every `period`th frame after it. This is a frame
/// count, not a clock: if the host runs slower, so does the simulation.
#[derive(Debug, Clone)]
pub struct Cadence {
    frame: u32,
    period: u32,
}

impl Cadence {
    /// `period` is clamped to at least one frame
    pub fn new(period: u32) -> Self {
        Self {
            frame: 0,
            period: period.max(1),
        }
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    /// Current position of the counter
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Whether a step is due on the current frame
    pub fn is_due(&self) -> bool {
        self.frame == 0
    }

    /// Move on to the next frame
    pub fn tick(&mut self) {
        self.frame += 1;

        if self.frame >= self.period {
            self.frame = 0;
        }
    }
}
