use std::time::Duration;

use log::{debug, info};
use macroquad::color::Color;
use macroquad::texture::Image;
use rand::Rng;
use rand::rngs::ThreadRng;

use super::animation::{Animation, AnimationState, Speed, Step};
use crate::config::clamp_cell_size;
use crate::domain::{Grid, GridConfig, InitialState, Rule};
use crate::rendering::{fits, render_rows, surface_for};

/// Colors used for live and dead cells
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub alive: Color,
    pub dead: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Color::from_rgba(0xff, 0xff, 0xff, 0xff),
            dead: Color::from_rgba(0x0a, 0x0a, 0x0a, 0xff),
        }
    }
}

/// Everything needed to start a session
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub grid: GridConfig,
    pub palette: Palette,
    pub cell_size: usize,
    pub speed: Speed,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            palette: Palette::default(),
            cell_size: 3,
            speed: Speed::default(),
        }
    }
}

/// Session orchestrates one automaton: it owns the configuration, the
/// computed grid, the animation timer and the pixel surface, and calls
/// generation and rendering in a fixed order.
///
/// Any change to the grid parameters cancels a running animation before the
/// grid is regenerated, so a tick can never draw a stale grid.
pub struct Session<R: Rng = ThreadRng> {
    config: GridConfig,
    palette: Palette,
    cell_size: usize,
    speed: Speed,
    grid: Grid,
    animation: Animation,
    surface: Image,
    visible_rows: usize,
    /// Bumped on every render so the UI knows to re-upload the surface
    frame: u64,
    rng: R,
}

impl Session<ThreadRng> {
    /// Create a session backed by the thread-local random generator
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, rand::rng())
    }
}

impl<R: Rng> Session<R> {
    /// Create a session with an explicit randomness source
    pub fn with_rng(settings: Settings, mut rng: R) -> Self {
        let Settings {
            grid: config,
            palette,
            cell_size,
            speed,
        } = settings;
        let config = GridConfig {
            width: config.width.max(1),
            generations: config.generations.max(1),
            ..config
        };
        let cell_size = clamp_cell_size(cell_size);

        let grid = Grid::generate(&config, &mut rng);
        let surface = surface_for(config.width, config.generations, cell_size, palette.dead);

        let mut session = Self {
            config,
            palette,
            cell_size,
            speed,
            grid,
            animation: Animation::new(),
            surface,
            visible_rows: 0,
            frame: 0,
            rng,
        };
        session.render(session.config.generations);
        session
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn surface(&self) -> &Image {
        &self.surface
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Rows shown by the most recent render
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    pub fn state(&self) -> AnimationState {
        self.animation.state()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    pub fn has_pending_tick(&self) -> bool {
        self.animation.has_pending_tick()
    }

    /// Replace all grid parameters at once. No-op when nothing changed.
    pub fn set_config(&mut self, config: GridConfig) {
        if config == self.config {
            return;
        }

        self.config = config;
        self.regenerate();
    }

    pub fn set_rule(&mut self, rule: Rule) {
        self.set_config(GridConfig { rule, ..self.config });
    }

    pub fn set_width(&mut self, width: usize) {
        self.set_config(GridConfig {
            width: width.max(1),
            ..self.config
        });
    }

    pub fn set_generations(&mut self, generations: usize) {
        self.set_config(GridConfig {
            generations: generations.max(1),
            ..self.config
        });
    }

    pub fn set_initial_state(&mut self, initial_state: InitialState) {
        self.set_config(GridConfig {
            initial_state,
            ..self.config
        });
    }

    /// Stop any animation, compute a fresh grid and show all of it.
    /// In Random mode this draws a new initial row.
    pub fn regenerate(&mut self) {
        self.animation.cancel();
        self.rebuild_grid();
        self.render(self.config.generations);
    }

    /// Change the pixel size of a cell, clamped to
    /// [`CELL_SIZE_RANGE`](crate::config::CELL_SIZE_RANGE). The grid is kept as is.
    pub fn set_cell_size(&mut self, cell_size: usize) {
        let cell_size = clamp_cell_size(cell_size);
        if cell_size == self.cell_size {
            return;
        }

        self.cell_size = cell_size;
        self.render(self.visible_rows);
    }

    /// New colors show up immediately when idle. While animating the next
    /// tick picks them up.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        if !self.is_animating() {
            self.render(self.config.generations);
        }
    }

    pub fn set_alive_color(&mut self, alive: Color) {
        self.set_palette(Palette {
            alive,
            ..self.palette
        });
    }

    pub fn set_dead_color(&mut self, dead: Color) {
        self.set_palette(Palette { dead, ..self.palette });
    }

    /// Takes effect when the next tick is scheduled
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Idle -> Animating. The grid is regenerated, the first rows are
    /// revealed straight away and the next tick is scheduled.
    pub fn play(&mut self) {
        self.animation.cancel();
        self.rebuild_grid();
        self.animation.start();
        info!(
            "animating {} over {} generations",
            self.config.rule, self.config.generations
        );
        self.run_tick();
    }

    /// Animating -> Idle. The pending tick is cancelled and the full grid
    /// is drawn, so a manual stop never leaves a partial reveal.
    pub fn stop(&mut self) {
        if self.is_animating() {
            info!("animation stopped at row {}", self.visible_rows);
        }

        self.animation.cancel();
        if self.visible_rows != self.config.generations {
            self.render(self.config.generations);
        }
    }

    /// Play when idle, stop when animating
    pub fn toggle(&mut self) {
        if self.is_animating() {
            self.stop();
        } else {
            self.play();
        }
    }

    /// Let `dt` of wall time pass, firing every tick that falls due
    pub fn advance(&mut self, dt: Duration) {
        let mut budget = dt;
        while let Some(left) = self.animation.advance(budget) {
            self.run_tick();
            budget = left;
        }
    }

    /// Fire the pending tick now. Returns false when there is none.
    pub fn tick(&mut self) -> bool {
        if !self.animation.take_tick() {
            return false;
        }

        self.run_tick();
        true
    }

    fn run_tick(&mut self) {
        match self.animation.step(self.config.generations) {
            Step::Continue { rows } => {
                debug!("revealing {rows}/{} rows", self.config.generations);
                self.render(rows);
                self.animation.schedule(self.speed.delay());
            }
            step @ Step::Finished { .. } => {
                info!("animation finished");
                self.render(step.rows());
            }
        }
    }

    fn rebuild_grid(&mut self) {
        self.grid = Grid::generate(&self.config, &mut self.rng);
    }

    fn render(&mut self, rows: usize) {
        let GridConfig {
            width, generations, ..
        } = self.config;

        if !fits(&self.surface, width, generations, self.cell_size) {
            debug!("resizing surface for {width}x{generations} cells of {}px", self.cell_size);
            self.surface = surface_for(width, generations, self.cell_size, self.palette.dead);
        }

        render_rows(
            Some(&mut self.surface),
            rows,
            &self.grid,
            self.cell_size,
            self.palette.alive,
            self.palette.dead,
        );
        self.visible_rows = rows.min(self.grid.generations());
        self.frame += 1;
    }
}
