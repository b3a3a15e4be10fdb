//! Build script for the Last.fm scrobble submission CLI.
//!
//! Copies the configuration template from the project source to the user's
//! configuration directory during compilation, so a ready-to-edit example
//! sits next to the location where the application looks for its `config`
//! file after installation.

use std::{env, fs, path::PathBuf};

/// Copies `config.example` from the crate root into the platform-specific
/// configuration directory (`~/.config/scroblcli` on Linux).
///
/// A missing template only produces a cargo warning; directory creation or
/// copy failures abort the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=config.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template_path = manifest_dir.join("config.example");

    // Compute target dir (the user's config dir) and ensure it exists
    let mut out_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("scroblcli");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if template_path.is_file() {
        let contents = fs::read_to_string(&template_path)?;
        fs::write(out_dir.join("config.example"), contents)?;
    } else {
        println!(
            "cargo:warning=config.example not found at {}",
            template_path.display()
        );
    }

    Ok(())
}
