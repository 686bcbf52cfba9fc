// Domain layer - Rules, rows and the generated grid
pub mod domain;

// Application layer - Animation timing and session coordination
pub mod application;

// Infrastructure layer - Config, UI, rendering, input
pub mod config;
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{AnimationState, Camera, Palette, Session, Settings, Speed};
pub use config::{Args, ConfigError};
pub use domain::{Cell, Grid, GridConfig, InitialState, Rule, presets};
