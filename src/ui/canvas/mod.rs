mod canvas;
mod widget_impl;

pub use canvas::{Canvas, FrameStats, ViewSettings};
