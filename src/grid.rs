use crate::CellCoord;
use crate::GridSize;
use crate::rule_set::RuleSet;

/// Names one of the two generation buffers of a [`Grid`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenId {
    #[default]
    A,
    B,
}

impl GenId {
    /// The buffer that is not `self`
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// One full snapshot of the grid, one bit per cell.
///
/// Cell `(x, y)` lives at bit index `n = y * width + x`, which is bit `n % 8` (least significant
/// first) of byte `n / 8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    bits: Vec<u8>,
    width: GridSize,
    height: GridSize,
}

impl Generation {
    /// Create an all-dead generation
    pub fn new(width: GridSize, height: GridSize) -> Self {
        let cells = width as usize * height as usize;

        Self {
            bits: vec![0; cells.div_ceil(8)],
            width,
            height,
        }
    }

    pub fn width(&self) -> GridSize {
        self.width
    }

    pub fn height(&self) -> GridSize {
        self.height
    }

    /// The packed bytes backing this generation
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Whether the cell at `(x, y)` is alive. Anything off the grid is dead.
    pub fn get(&self, x: CellCoord, y: CellCoord) -> bool {
        let Some(n) = self.bit_index(x, y) else {
            return false;
        };

        self.bits[n / 8] & (1 << (n % 8)) != 0
    }

    /// Set the cell at `(x, y)`. Writes off the grid are dropped.
    pub fn set(&mut self, x: CellCoord, y: CellCoord, value: bool) {
        let Some(n) = self.bit_index(x, y) else {
            return;
        };

        if value {
            self.bits[n / 8] |= 1 << (n % 8);
        } else {
            self.bits[n / 8] &= !(1 << (n % 8));
        }
    }

    /// Number of live cells in the Moore neighbourhood of `(x, y)`.
    ///
    /// The grid is a finite universe: neighbours past the edge count as dead, there is no
    /// wraparound.
    pub fn neighbour_count(&self, x: CellCoord, y: CellCoord) -> u8 {
        let mut n = 0;

        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                // A neighbour past the end of the coordinate range is off the grid too
                let (Some(nx), Some(ny)) = (x.checked_add(dx), y.checked_add(dy)) else {
                    continue;
                };

                if self.get(nx, ny) {
                    n += 1;
                }
            }
        }

        n
    }

    /// Kill every cell
    pub fn reset(&mut self) {
        self.bits.fill(0);
    }

    /// Number of live cells
    pub fn population(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Coordinates of every live cell, row by row
    pub fn live_cells(&self) -> impl Iterator<Item = (CellCoord, CellCoord)> + '_ {
        let (w, h) = (self.width as CellCoord, self.height as CellCoord);

        (0..h)
            .flat_map(move |y| (0..w).map(move |x| (x, y)))
            .filter(|&(x, y)| self.get(x, y))
    }

    fn bit_index(&self, x: CellCoord, y: CellCoord) -> Option<usize> {
        let (w, h) = (self.width as CellCoord, self.height as CellCoord);

        if x < 0 || x >= w || y < 0 || y >= h {
            return None;
        }

        Some(y as usize * self.width as usize + x as usize)
    }
}

/// A double buffered Life grid.
///
/// Exactly two [`Generation`]s exist for the lifetime of the grid. Callers keep track of which
/// one is current; [`Grid::advance`] writes the next generation into the other buffer and hands
/// back its [`GenId`].
pub struct Grid {
    gens: [Generation; 2],
    rules: RuleSet,
}

impl Grid {
    pub fn new(width: GridSize, height: GridSize, rules: RuleSet) -> Self {
        Self {
            gens: [
                Generation::new(width, height),
                Generation::new(width, height),
            ],
            rules,
        }
    }

    pub fn width(&self) -> GridSize {
        self.gens[0].width
    }

    pub fn height(&self) -> GridSize {
        self.gens[0].height
    }

    pub fn generation(&self, which: GenId) -> &Generation {
        &self.gens[which.index()]
    }

    pub fn get(&self, which: GenId, x: CellCoord, y: CellCoord) -> bool {
        self.generation(which).get(x, y)
    }

    pub fn set(&mut self, which: GenId, x: CellCoord, y: CellCoord, value: bool) {
        self.gens[which.index()].set(x, y, value);
    }

    pub fn neighbour_count(&self, which: GenId, x: CellCoord, y: CellCoord) -> u8 {
        self.generation(which).neighbour_count(x, y)
    }

    pub fn reset(&mut self, which: GenId) {
        self.gens[which.index()].reset();
    }

    /// Compute the generation after `current` into the other buffer, and return that buffer.
    ///
    /// Only `current` is read and only the other buffer is written. The destination is cleared
    /// first, since dead cells are just missing bits and stale bits must not survive.
    pub fn advance(&mut self, current: GenId) -> GenId {
        let next = current.other();
        let rules = self.rules;

        let [a, b] = &mut self.gens;
        let (src, dst) = match current {
            GenId::A => (&*a, b),
            GenId::B => (&*b, a),
        };

        dst.reset();

        let (w, h) = (src.width as CellCoord, src.height as CellCoord);
        for y in 0..h {
            for x in 0..w {
                let n = src.neighbour_count(x, y);

                if rules.next_state(src.get(x, y), n) {
                    dst.set(x, y, true);
                }
            }
        }

        next
    }
}
