//! Writing icons to disk, one file per requested size.

use crate::rendering::raster::rasterize;
use crate::rendering::RenderedIcon;
use crate::{Error, IconConfig, IconSpec, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Render one icon and write it to `output_path`, creating the parent
/// directory if needed. An existing file is overwritten.
pub fn render(size: u32, output_path: impl AsRef<Path>) -> Result<RenderedIcon> {
    let path = output_path.as_ref();
    let icon = rasterize(size)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    fs::write(path, &icon.png_data).map_err(|e| Error::io(path, e))?;

    log::info!(
        "wrote {} ({}x{}, {} bytes, sha256 {})",
        path.display(),
        size,
        size,
        icon.png_data.len(),
        icon.digest()
    );
    Ok(icon)
}

/// Result of one entry of a batch.
#[derive(Debug)]
pub struct IconOutcome {
    pub spec: IconSpec,
    pub path: PathBuf,
    pub result: Result<RenderedIcon>,
}

impl IconOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Generate every icon in `config`, in order.
pub fn generate_all(config: &IconConfig) -> Vec<IconOutcome> {
    generate_all_with(config, |_| {})
}

/// Like [`generate_all`], calling `on_icon` after each attempt so callers can
/// report progress in invocation order.
///
/// A failure is logged and the next icon is still attempted, unless
/// `config.fail_fast` is set.
pub fn generate_all_with<F>(config: &IconConfig, mut on_icon: F) -> Vec<IconOutcome>
where
    F: FnMut(&IconOutcome),
{
    let mut outcomes = Vec::with_capacity(config.icons.len());
    for spec in &config.icons {
        let path = config.path_for(spec);
        let result = render(spec.size, &path);
        if let Err(e) = &result {
            log::error!("failed to create {}: {}", spec.filename, e);
        }
        let outcome = IconOutcome {
            spec: spec.clone(),
            path,
            result,
        };
        on_icon(&outcome);
        let failed = !outcome.is_ok();
        outcomes.push(outcome);
        if failed && config.fail_fast {
            log::warn!("fail-fast set; skipping remaining icons");
            break;
        }
    }
    outcomes
}

/// The `icons` object of a browser extension manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestIcons {
    pub icons: BTreeMap<u32, String>,
}

impl ManifestIcons {
    pub fn to_json_pretty(&self) -> String {
        // string keys and values only; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Map each size to its output path, using `/` separators as manifests expect.
pub fn manifest_icons(config: &IconConfig) -> ManifestIcons {
    let icons = config
        .icons
        .iter()
        .map(|spec| {
            let path = config.path_for(spec).to_string_lossy().replace('\\', "/");
            (spec.size, path)
        })
        .collect();
    ManifestIcons { icons }
}
