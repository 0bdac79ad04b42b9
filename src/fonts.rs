//! Process-wide registry of extra font files.
//!
//! Fonts are looked up one level below the font directory: each family sits
//! in its own sub-folder, which is searched recursively. Registration is
//! cumulative for the life of the process.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex};

use log::{debug, warn};

use crate::plotting::error::PlotResult;

/// File extensions treated as fonts.
pub const FONT_EXTENSIONS: [&str; 5] = ["ttf", "otf", "ttc", "woff", "woff2"];

static REGISTRY: LazyLock<Mutex<Vec<PathBuf>>> = LazyLock::new(|| Mutex::new(Vec::new()));

/// Font directory shipped with the crate.
pub fn bundled_fonts_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fonts")
}

/// Register the fonts of the bundled font directory.
pub fn add_fonts() -> PlotResult<usize> {
    add_fonts_from(bundled_fonts_dir())
}

/// Register every font found in the sub-folders of `dir`.
///
/// Returns how many new files were registered; files already known are
/// skipped. A missing `dir` registers nothing.
pub fn add_fonts_from(dir: impl AsRef<Path>) -> PlotResult<usize> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        debug!("Font directory {} does not exist", dir.display());
        return Ok(0);
    }

    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_fonts(&path, &mut found)?;
        } else if is_font_file(&path) {
            warn!(
                "Ignoring {}: fonts must be placed in a sub-folder",
                path.display()
            );
        }
    }
    found.sort();

    let mut registry = REGISTRY.lock().unwrap_or_else(|e| e.into_inner());
    let mut added = 0;
    for font in found {
        if !registry.contains(&font) {
            debug!("Registered font {}", font.display());
            registry.push(font);
            added += 1;
        }
    }
    Ok(added)
}

/// Snapshot of all registered font files in registration order.
pub fn registered_fonts() -> Vec<PathBuf> {
    REGISTRY
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
}

fn collect_fonts(dir: &Path, found: &mut Vec<PathBuf>) -> PlotResult<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_fonts(&path, found)?;
        } else if is_font_file(&path) {
            found.push(path);
        }
    }
    Ok(())
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("sciplots-fonts-{}", std::process::id()))
            .join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_only_subfolders_are_scanned() {
        let dir = scratch_dir("scan");
        fs::create_dir_all(dir.join("Inter/static")).unwrap();
        fs::write(dir.join("Inter/Inter.ttf"), b"").unwrap();
        fs::write(dir.join("Inter/static/Inter-Bold.OTF"), b"").unwrap();
        fs::write(dir.join("Inter/LICENSE.txt"), b"").unwrap();
        fs::write(dir.join("Loose.ttf"), b"").unwrap();

        assert_eq!(add_fonts_from(&dir).unwrap(), 2);
        let registered = registered_fonts();
        assert!(registered.contains(&dir.join("Inter/Inter.ttf")));
        assert!(registered.contains(&dir.join("Inter/static/Inter-Bold.OTF")));
        assert!(!registered.contains(&dir.join("Loose.ttf")));

        // Registering the same directory again adds nothing
        assert_eq!(add_fonts_from(&dir).unwrap(), 0);
    }

    #[test]
    fn test_missing_directory_registers_nothing() {
        let dir = std::env::temp_dir().join("sciplots-no-such-font-dir");
        assert_eq!(add_fonts_from(dir).unwrap(), 0);
    }

    #[test]
    fn test_font_extensions() {
        assert!(is_font_file(Path::new("a/b.woff2")));
        assert!(is_font_file(Path::new("a/b.TTC")));
        assert!(!is_font_file(Path::new("a/b.afm")));
        assert!(!is_font_file(Path::new("a/ttf")));
    }
}
