//! Scene definition and instrument file loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use oxie_scene::{InstrumentDef, SceneDef};

/// Reads and parses a scene definition file.
pub(crate) fn load_scene_def(path: &Path) -> Result<SceneDef> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid scene definition in {}", path.display()))
}

/// Resolves an instrument definition reference.
///
/// Search order: the scene file's directory, the current directory, then
/// `./scenes/`. Returns `None` when the reference resolves nowhere; the
/// caller degrades to compiling without metadata.
pub(crate) fn resolve_instrument_path(reference: &str, base: &Path) -> Option<PathBuf> {
    let candidates = [
        base.join(reference),
        PathBuf::from(reference),
        Path::new("scenes").join(reference),
    ];
    candidates.into_iter().find(|p| p.exists())
}

/// Reads and parses an `.oxiindef` instrument definition file.
pub(crate) fn load_instrument_def(path: &Path) -> Result<InstrumentDef> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid instrument definition in {}", path.display()))
}
