/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// Birth and survival neighbour counts of a Life-like rule.
///
/// Bit `n` of the upper half is set when a dead cell with `n` live neighbours is born, bit `n`
/// of the lower half when a live one with `n` survives. Life, `B3S23`, is `0x0008_000C`.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// Whether a cell is alive in the next generation, given whether it is alive now and how
    /// many of its eight neighbours are.
    pub fn next_state(&self, alive: bool, neighbours: u8) -> bool {
        if neighbours > 8 {
            return false;
        }

        let mask = 1 << neighbours;
        let set = if alive {
            self.survivals()
        } else {
            self.births()
        };

        set & mask == mask
    }
}
