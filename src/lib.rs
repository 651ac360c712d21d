//! Render a table of 2D points as an equal-aspect scatter plot image.
//!
//! ```text
//!  input/points.csv ─load─▶ PointDataset ─render─▶ Canvas ─save─▶ output/points.png
//! ```

pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod render;

use std::io::Write;
use std::path::Path;

use log::debug;

pub use config::PlotConfig;
pub use data::loader::load_file;
pub use data::model::{Point, PointDataset};
pub use error::{PlotError, Result};
pub use render::canvas::Canvas;
pub use render::scatter::render;

/// Run the whole pipeline, reporting `Data size <N>` on stdout.
/// Returns the number of points plotted.
pub fn run(config: &PlotConfig) -> Result<usize> {
    let mut stdout = std::io::stdout().lock();
    run_with_report(config, &mut stdout)
}

/// [`run`] with the report line written to `out`.
pub fn run_with_report(config: &PlotConfig, out: &mut impl Write) -> Result<usize> {
    debug!("reading {}", config.input.display());
    let dataset = load_file(&config.input)?;
    writeln!(out, "Data size {}", dataset.len())
        .map_err(|e| PlotError::io(Path::new("<stdout>"), e))?;

    let canvas = render(&dataset);
    canvas.save(&config.output)?;
    Ok(dataset.len())
}
