pub mod controller;
pub mod input_adapter;

pub use controller::{DragMode, TrackballController};
pub use input_adapter::{replay, PointerEvent};
