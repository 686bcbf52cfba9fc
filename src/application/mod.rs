mod animation;
mod camera;
mod session;

pub use animation::{Animation, AnimationState, Speed, Step, rows_per_tick};
pub use camera::Camera;
pub use session::{Palette, Session, Settings};
