use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{error::IcongenResult, logo::render_logo, png::encode_png};

/// One entry of the fixed icon manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconFile {
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
}

/// The three icons every run produces, in write order.
pub const ICON_SET: [IconFile; 3] = [
    IconFile {
        file_name: "pwa-192x192.png",
        width: 192,
        height: 192,
    },
    IconFile {
        file_name: "pwa-512x512.png",
        width: 512,
        height: 512,
    },
    IconFile {
        file_name: "apple-touch-icon.png",
        width: 180,
        height: 180,
    },
];

/// Output directory of the `icongen` binary, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "public";

/// Render and write every icon in [`ICON_SET`] into `out_dir`, creating the
/// directory if needed and overwriting existing files unconditionally.
///
/// The three writes are independent; a failure leaves earlier files in place.
/// Returns the written paths in manifest order.
#[tracing::instrument]
pub fn generate_icons(out_dir: &Path) -> IcongenResult<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory '{}'", out_dir.display()))?;

    let mut written = Vec::with_capacity(ICON_SET.len());
    for icon in ICON_SET {
        let bitmap = render_logo(icon.width, icon.height)?;
        let png = encode_png(&bitmap)?;

        let path = out_dir.join(icon.file_name);
        fs::write(&path, &png)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::debug!(file = icon.file_name, bytes = png.len(), "wrote icon");

        written.push(path);
    }
    Ok(written)
}
