use std::path::{Path, PathBuf};

/// Input table, relative to the base directory.
pub const INPUT_FILE: &str = "input/points.csv";
/// Output image, relative to the base directory.
pub const OUTPUT_FILE: &str = "output/points.png";

// ---------------------------------------------------------------------------
// PlotConfig
// ---------------------------------------------------------------------------

/// Where to read points from and where to write the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for PlotConfig {
    /// Fixed paths, resolved against the process's working directory.
    fn default() -> Self {
        Self {
            input: PathBuf::from(INPUT_FILE),
            output: PathBuf::from(OUTPUT_FILE),
        }
    }
}

impl PlotConfig {
    /// The fixed paths, resolved against `base` instead of the working directory.
    pub fn with_base_dir(base: &Path) -> Self {
        Self {
            input: base.join(INPUT_FILE),
            output: base.join(OUTPUT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_are_relative() {
        let cfg = PlotConfig::default();
        assert_eq!(cfg.input, Path::new("input/points.csv"));
        assert_eq!(cfg.output, Path::new("output/points.png"));
        assert!(cfg.input.is_relative());
    }

    #[test]
    fn base_dir_prefixes_both_paths() {
        let cfg = PlotConfig::with_base_dir(Path::new("/srv/plots"));
        assert_eq!(cfg.input, Path::new("/srv/plots/input/points.csv"));
        assert_eq!(cfg.output, Path::new("/srv/plots/output/points.png"));
    }
}
