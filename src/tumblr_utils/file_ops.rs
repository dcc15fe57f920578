use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the home directory.
pub fn resolve_output_path(path: &str) -> Result<PathBuf> {
    let path = path.trim();
    if path == "~" || path.starts_with("~/") {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory for '{}'", path))?;
        let rest = path.trim_start_matches('~').trim_start_matches('/');
        let resolved = if rest.is_empty() { home } else { home.join(rest) };
        debug!("Resolved output path '{}' to {:?}", path, resolved);
        Ok(resolved)
    } else {
        Ok(PathBuf::from(path))
    }
}

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.is_dir() {
        debug!("Directory {:?} does not exist, creating...", path);
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
    }
    Ok(())
}

/// Write `content` to `output`, or to stdout when `output` is empty.
pub fn write_output(output: &str, content: &str) -> Result<()> {
    if output.trim().is_empty() {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(content.as_bytes())?;
        handle.write_all(b"\n")?;
        return Ok(());
    }

    let path = resolve_output_path(output)?;
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }

    debug!("Writing {} bytes to file: {:?}", content.len(), path);
    fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))?;
    info!("Output written to {}", path.display());
    Ok(())
}
