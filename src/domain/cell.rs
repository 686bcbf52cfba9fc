/// Cell is a single site of an elementary automaton row.
/// Each cell is either Dead (0) or Alive (1).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Build a cell from the lowest bit of `bit`
    pub const fn from_bit(bit: u8) -> Self {
        if bit & 1 == 1 {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    /// Binary value of the cell (0 or 1)
    pub const fn bit(self) -> u8 {
        match self {
            Cell::Dead => 0,
            Cell::Alive => 1,
        }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
