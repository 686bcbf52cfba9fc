use log::debug;
use rand::Rng;

use super::{Cell, Rule, TransitionTable};

/// How generation 0 is seeded
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InitialState {
    /// One live cell at `width / 2`, everything else dead
    #[default]
    Single,
    /// Every cell independently alive with probability 0.5
    Random,
}

impl InitialState {
    pub fn all() -> [InitialState; 2] {
        [InitialState::Single, InitialState::Random]
    }

    pub fn name(&self) -> &'static str {
        match self {
            InitialState::Single => "Single",
            InitialState::Random => "Random",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            InitialState::Single => InitialState::Random,
            InitialState::Random => InitialState::Single,
        }
    }

    /// Build row 0. Only `Random` draws from `rng`.
    pub fn initial_row<R: Rng + ?Sized>(self, width: usize, rng: &mut R) -> Vec<Cell> {
        match self {
            InitialState::Single => {
                let mut row = vec![Cell::Dead; width];
                row[width / 2] = Cell::Alive;
                row
            }
            InitialState::Random => (0..width).map(|_| Cell::from(rng.random_bool(0.5))).collect(),
        }
    }
}

/// Everything that determines a grid, apart from the randomness source
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub rule: Rule,
    pub width: usize,
    pub generations: usize,
    pub initial_state: InitialState,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rule: Rule::default(),
            width: 201,
            generations: 150,
            initial_state: InitialState::Single,
        }
    }
}

/// Compute one generation from the previous one.
/// Edges wrap around: column 0 and column `width - 1` are neighbours.
pub fn next_row(prev: &[Cell], table: &TransitionTable, out: &mut [Cell]) {
    let width = prev.len();
    debug_assert_eq!(width, out.len());

    for (i, cell) in out.iter_mut().enumerate() {
        let left = prev[(i + width - 1) % width];
        let center = prev[i];
        let right = prev[(i + 1) % width];
        *cell = table.next(left, center, right);
    }
}

/// Full history of an elementary automaton run.
/// Row `g` is generation `g`; storage is a flat row-major `Vec<Cell>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    generations: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Run the automaton described by `config`.
    ///
    /// # Panics
    /// If `config.width` or `config.generations` is zero.
    pub fn generate<R: Rng + ?Sized>(config: &GridConfig, rng: &mut R) -> Self {
        let GridConfig {
            rule,
            width,
            generations,
            initial_state,
        } = *config;

        assert!(width >= 1, "width must be at least 1");
        assert!(generations >= 1, "generations must be at least 1");

        debug!(
            "generating {rule}: {width}x{generations}, initial state {}",
            initial_state.name()
        );

        let table = rule.transition_table();
        let mut cells = Vec::with_capacity(width * generations);
        cells.extend(initial_state.initial_row(width, rng));
        cells.resize(width * generations, Cell::Dead);

        for g in 1..generations {
            let (done, rest) = cells.split_at_mut(g * width);
            let prev = &done[(g - 1) * width..];
            next_row(prev, &table, &mut rest[..width]);
        }

        Self {
            width,
            generations,
            cells,
        }
    }

    /// Build a grid from explicit rows, all of the same non-zero length
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let generations = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        assert!(generations >= 1 && width >= 1, "grid must not be empty");
        assert!(rows.iter().all(|row| row.len() == width), "rows must share one width");

        Self {
            width,
            generations,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Get grid dimensions as (width, generations)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.generations)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows (generations) held
    pub const fn generations(&self) -> usize {
        self.generations
    }

    /// Generation `g`, if present
    pub fn row(&self, g: usize) -> Option<&[Cell]> {
        (g < self.generations).then(|| &self.cells[g * self.width..(g + 1) * self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Get cell at column `x` of generation `g` (with bounds checking)
    pub fn get(&self, x: usize, g: usize) -> Option<Cell> {
        (x < self.width && g < self.generations).then(|| self.cells[g * self.width + x])
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}
