// src/config/settings.rs
//
// Persisted options (`<store>/settings.toml`). Missing keys fall back to
// defaults field by field, so older files keep loading.

use std::fs;
use std::path::{Path, PathBuf};

use super::consts::SETTINGS_FILE;
use super::options::AppOptions;
use crate::error::Result;

pub fn settings_path(store_dir: &Path) -> PathBuf {
    store_dir.join(SETTINGS_FILE)
}

/// Strict load: a missing file is `Ok(default)`, a broken one is an error.
pub fn load(path: &Path) -> Result<AppOptions> {
    if !path.exists() {
        return Ok(AppOptions::default());
    }
    let text = fs::read_to_string(path)?;
    let opts: AppOptions = toml::from_str(&text)?;
    Ok(opts)
}

/// Forgiving load for startup: never fails, logs what went wrong.
pub fn load_or_default(path: &Path) -> AppOptions {
    match load(path) {
        Ok(opts) => {
            logd!("Settings: loaded {}", path.display());
            opts
        }
        Err(e) => {
            loge!("Settings: {} unreadable, using defaults ({e})", path.display());
            AppOptions::default()
        }
    }
}

pub fn save(path: &Path, opts: &AppOptions) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let text = toml::to_string_pretty(opts)?;
    fs::write(path, text)?;
    logf!("Settings: saved {}", path.display());
    Ok(())
}
