mod cell;
mod grid;
mod rule;
pub mod presets;

pub use cell::Cell;
pub use grid::{Grid, GridConfig, InitialState, next_row};
pub use presets::RulePreset;
pub use rule::{PATTERN_COUNT, Rule, TransitionTable};
