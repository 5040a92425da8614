use std::path::Path;

use anyhow::Context as _;

fn main() -> anyhow::Result<()> {
    let out_dir = Path::new(icongen::DEFAULT_OUT_DIR);
    let written = icongen::generate_icons(out_dir)
        .with_context(|| format!("generate PWA icons into '{}'", out_dir.display()))?;

    for path in written {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
