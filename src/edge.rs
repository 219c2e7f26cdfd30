/// A transition of a sampled button or key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Up last sample, down now
    Pressed,

    /// Down last sample, up now
    Released,
}

/// Turns a per-frame "is it down?" sample into discrete press and release events.
///
/// Holding a key produces a single [`Edge::Pressed`] followed, once it is let go, by a single
/// [`Edge::Released`], however many frames it was held for.
#[derive(Debug, Default, Clone)]
pub struct EdgeDetector {
    was_down: bool,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's sample
    pub fn sample(&mut self, down: bool) -> Option<Edge> {
        let edge = match (self.was_down, down) {
            (false, true) => Some(Edge::Pressed),
            (true, false) => Some(Edge::Released),
            _ => None,
        };

        self.was_down = down;
        edge
    }

    /// Whether the last sample was down
    pub fn is_down(&self) -> bool {
        self.was_down
    }
}
