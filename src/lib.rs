pub mod cli;
pub mod config;
pub mod core;
pub mod math;
pub mod traits;
pub mod types;

pub use config::{TrackballConfig, DEFAULT_RADIUS};
pub use self::core::{replay, DragMode, PointerEvent, TrackballController};
pub use traits::{Button, CameraController};
pub use types::{TrackballUniform, ViewState};
