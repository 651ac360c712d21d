/// Rendering: dataset → equal-aspect scatter `Canvas` → PNG on disk.

pub mod canvas;
pub mod scatter;
pub mod style;
pub mod viewport;
