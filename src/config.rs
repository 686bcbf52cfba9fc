//! Command-line configuration and the bounds the controls enforce.
//!
//! The simulation core accepts any width or generation count of at least
//! one; the narrower ranges here are a property of the interactive UI.

use std::ops::RangeInclusive;

use clap::Parser;
use macroquad::color::Color;
use thiserror::Error;

use crate::application::{Palette, Settings, Speed};
use crate::domain::{GridConfig, InitialState, Rule};

pub const WIDTH_RANGE: RangeInclusive<usize> = 51..=401;
pub const WIDTH_STEP: usize = 2;
pub const GENERATIONS_RANGE: RangeInclusive<usize> = 50..=300;
/// Pixel size of one cell; at most 3208x2400 surface pixels with the other bounds
pub const CELL_SIZE_RANGE: RangeInclusive<usize> = 1..=8;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Color \"{0}\" should look like #rrggbb")]
    ColorFormat(String),

    #[error("Color \"{0}\" contains non-hex digits")]
    ColorDigits(String),

    #[error("Cell size must be at least 1 pixel")]
    ZeroCellSize,
}

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Explore the 256 elementary cellular automata")]
pub struct Args {
    /// Rule number, clamped to 0-255
    #[arg(short, long, default_value_t = 30, allow_negative_numbers = true)]
    pub rule: i64,

    /// Cells per row, snapped to an odd value in 51-401
    #[arg(short, long, default_value_t = 201)]
    pub width: usize,

    /// Number of generations (rows), clamped to 50-300
    #[arg(short, long, default_value_t = 150)]
    pub generations: usize,

    /// Seed generation 0 randomly instead of with a single live cell
    #[arg(long)]
    pub random: bool,

    /// Animation speed, 1-100
    #[arg(short, long, default_value_t = 50, allow_negative_numbers = true)]
    pub speed: i64,

    /// Pixel size of one cell, clamped to 1-8
    #[arg(long, default_value_t = 3)]
    pub cell_size: usize,

    /// Color of live cells
    #[arg(long, default_value = "#ffffff")]
    pub alive: String,

    /// Color of dead cells
    #[arg(long, default_value = "#0a0a0a")]
    pub dead: String,

    /// Start animating immediately
    #[arg(long)]
    pub play: bool,
}

impl Args {
    /// Apply the UI bounds and parse colors
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        let initial_state = if self.random {
            InitialState::Random
        } else {
            InitialState::Single
        };

        Ok(Settings {
            grid: GridConfig {
                rule: Rule::clamped(self.rule),
                width: clamp_width(self.width),
                generations: clamp_generations(self.generations),
                initial_state,
            },
            palette: Palette {
                alive: parse_hex_color(&self.alive)?,
                dead: parse_hex_color(&self.dead)?,
            },
            cell_size: clamp_cell_size(self.cell_size),
            speed: Speed::new(self.speed),
        })
    }
}

/// Clamp into [`WIDTH_RANGE`], keeping to the slider's odd steps
pub fn clamp_width(width: usize) -> usize {
    let (min, max) = (*WIDTH_RANGE.start(), *WIDTH_RANGE.end());
    let width = width.clamp(min, max);
    width - (width - min) % WIDTH_STEP
}

pub fn clamp_generations(generations: usize) -> usize {
    generations.clamp(*GENERATIONS_RANGE.start(), *GENERATIONS_RANGE.end())
}

pub fn clamp_cell_size(cell_size: usize) -> usize {
    cell_size.clamp(*CELL_SIZE_RANGE.start(), *CELL_SIZE_RANGE.end())
}

/// Parse `#rrggbb` (the leading `#` is optional) into an opaque color
pub fn parse_hex_color(text: &str) -> Result<Color, ConfigError> {
    let hex = text.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return Err(ConfigError::ColorFormat(text.to_string()));
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ConfigError::ColorDigits(text.to_string()));
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    match (channel(0), channel(2), channel(4)) {
        (Ok(r), Ok(g), Ok(b)) => Ok(Color::from_rgba(r, g, b, 255)),
        _ => Err(ConfigError::ColorDigits(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_snaps_to_odd_steps() {
        assert_eq!(clamp_width(10), 51);
        assert_eq!(clamp_width(51), 51);
        assert_eq!(clamp_width(52), 51);
        assert_eq!(clamp_width(201), 201);
        assert_eq!(clamp_width(202), 201);
        assert_eq!(clamp_width(10_000), 401);
    }

    #[test]
    fn test_generations_clamped() {
        assert_eq!(clamp_generations(1), 50);
        assert_eq!(clamp_generations(150), 150);
        assert_eq!(clamp_generations(301), 300);
    }

    #[test]
    fn test_cell_size_clamped() {
        assert_eq!(clamp_cell_size(0), 1);
        assert_eq!(clamp_cell_size(3), 3);
        assert_eq!(clamp_cell_size(200), 8);

        let args = Args::parse_from(["elementary_ca", "--cell-size", "200"]);
        assert_eq!(args.settings().unwrap().cell_size, 8);
    }

    #[test]
    fn test_parse_hex_color() {
        let color = parse_hex_color("#0a0a0a").unwrap();
        assert_eq!(<[u8; 4]>::from(color), [10, 10, 10, 255]);

        let color = parse_hex_color("FF8000").unwrap();
        assert_eq!(<[u8; 4]>::from(color), [255, 128, 0, 255]);
    }

    #[test]
    fn test_parse_hex_color_errors() {
        assert_eq!(parse_hex_color("#fff"), Err(ConfigError::ColorFormat("#fff".into())));
        assert_eq!(parse_hex_color("#ggg000"), Err(ConfigError::ColorDigits("#ggg000".into())));
        assert_eq!(parse_hex_color("+fffff"), Err(ConfigError::ColorDigits("+fffff".into())));
    }

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["elementary_ca"]);
        let settings = args.settings().unwrap();

        assert_eq!(settings.grid, GridConfig::default());
        assert_eq!(settings.cell_size, 3);
        assert_eq!(settings.speed, Speed::default());
        assert!(!args.play);
    }

    #[test]
    fn test_args_are_bounded() {
        let args = Args::parse_from([
            "elementary_ca",
            "--rule",
            "300",
            "--width",
            "1000",
            "--generations",
            "5",
            "--speed",
            "-3",
            "--random",
        ]);
        let settings = args.settings().unwrap();

        assert_eq!(settings.grid.rule.number(), 255);
        assert_eq!(settings.grid.width, 401);
        assert_eq!(settings.grid.generations, 50);
        assert_eq!(settings.grid.initial_state, InitialState::Random);
        assert_eq!(settings.speed, Speed::MIN);
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        let args = Args::parse_from(["elementary_ca", "--cell-size", "0"]);
        assert_eq!(args.settings().unwrap_err(), ConfigError::ZeroCellSize);
    }
}
