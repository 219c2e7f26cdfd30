pub mod cadence;
pub mod config;
pub mod edge;
pub mod events;
pub mod game;
pub mod grid;
pub mod rule_set;
pub mod shell;
pub mod surface;

/// Signed so that pointer positions left of or above the grid stay representable.
pub type CellCoord = i32;
pub type GridSize = u16;
