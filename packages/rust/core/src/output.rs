//! Payload rendering and delivery.

use std::path::Path;

use tracing::info;

use gander_shared::{GanderError, OutputPayload, Result};

/// Render the payload as pretty JSON (2-space indent).
pub fn render(payload: &OutputPayload) -> Result<String> {
    payload.to_json_pretty()
}

/// Write an already rendered payload to `path` in one shot.
pub fn write_to_file(path: &Path, blob: &str) -> Result<()> {
    std::fs::write(path, blob).map_err(|e| GanderError::io(path, e))?;
    info!(path = %path.display(), bytes = blob.len(), "payload written");
    Ok(())
}
