//! Places the workspace `config.toml` next to the backend binary, where
//! `shared::config::load_config` looks for it.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=data/medical_records.json");

    let source = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config.toml");
    if !source.exists() {
        println!("cargo:warning=config.toml not found at {:?}, binary uses embedded defaults", source);
        return;
    }

    let Some(target_dir) = profile_dir() else {
        println!("cargo:warning=could not locate target profile directory, config.toml not copied");
        return;
    };

    let dest = target_dir.join("config.toml");
    if let Err(e) = fs::copy(&source, &dest) {
        println!("cargo:warning=failed to copy config.toml to {:?}: {}", dest, e);
    }
}

/// OUT_DIR is target/<profile>/build/backend-xxx/out; walk up to target/<profile>
fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").ok()?);
    let profile = env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}
