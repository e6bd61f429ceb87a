//! Shield icon generator
//!
//! Procedurally draws the blue shield-with-checkmark badge used as a browser
//! extension icon and writes it as RGB PNG files at 16, 48 and 128 pixels.
//!
//! # Layers
//!
//! Each icon is painted back to front onto a black canvas: a dark blue outer
//! shield, a light gray rim, a two-tone blue body split at the centerline, and
//! a white checkmark with rounded joints. All geometry is proportional to the
//! requested size, so output is deterministic.
//!
//! # Example
//!
//! ```no_run
//! use shield_icons::{generate_all, IconConfig};
//!
//! let config = IconConfig::default();
//! for outcome in generate_all(&config) {
//!     match outcome.result {
//!         Ok(icon) => println!("{} -> {} bytes", outcome.path.display(), icon.png_data.len()),
//!         Err(e) => eprintln!("{}: {}", outcome.spec.filename, e),
//!     }
//! }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod generator;
pub mod logging;
pub mod rendering;

pub use generator::{generate_all, generate_all_with, manifest_icons, render, IconOutcome, ManifestIcons};
pub use rendering::raster::rasterize;
pub use rendering::RenderedIcon;

/// Smallest canvas edge accepted by the renderer; below this the shield
/// touches the canvas corner.
pub const MIN_ICON_SIZE: u32 = 4;

/// Largest canvas edge accepted by the renderer.
pub const MAX_ICON_SIZE: u32 = 4096;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// Sizes and filenames generated by a plain run.
pub const DEFAULT_ICONS: [(u32, &str); 3] = [
    (16, "icon16.png"),
    (48, "icon48.png"),
    (128, "icon128.png"),
];

/// One icon to produce: canvas edge and the filename inside the output dir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub filename: String,
}

impl IconSpec {
    pub fn new(size: u32, filename: impl Into<String>) -> Self {
        Self {
            size,
            filename: filename.into(),
        }
    }
}

/// Configuration for a generation run
///
/// The icon artwork itself is fixed; only where the files go and how a
/// failing icon affects the rest of the batch can be changed.
///
/// # Examples
///
/// ```
/// let cfg = shield_icons::IconConfig::default();
/// assert_eq!(cfg.icons.len(), 3);
/// assert!(!cfg.fail_fast);
/// ```
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Directory the PNG files are written into (created if absent)
    pub output_dir: PathBuf,
    /// Icons to generate, in order
    pub icons: Vec<IconSpec>,
    /// Stop at the first failing icon instead of attempting the rest
    pub fail_fast: bool,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            icons: DEFAULT_ICONS
                .iter()
                .map(|&(size, name)| IconSpec::new(size, name))
                .collect(),
            fail_fast: false,
        }
    }
}

impl IconConfig {
    /// Full output path for one icon.
    pub fn path_for(&self, spec: &IconSpec) -> PathBuf {
        self.output_dir.join(&spec.filename)
    }
}
