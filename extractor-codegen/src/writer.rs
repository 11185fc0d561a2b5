//! Writing generated output to disk.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CodegenError, CodegenResult};
use crate::generators::Emission;

/// File name of the metadata document, written next to the output file.
pub const METADATA_FILE_NAME: &str = "metadata.json";

/// Paths written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenOutputs {
    /// The generated TypeScript file.
    pub source: PathBuf,
    /// The metadata document, when requested.
    pub metadata: Option<PathBuf>,
}

/// Write an emission to `output_path`, creating its directory.
///
/// When `write_metadata` is set, `metadata.json` is written to the same
/// directory first. The two writes are independent; a failure on the
/// second leaves the first in place.
pub fn write_outputs(
    emission: &Emission<'_>,
    output_path: &Path,
    write_metadata: bool,
) -> CodegenResult<WrittenOutputs> {
    let dir = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    std::fs::create_dir_all(dir).map_err(|e| CodegenError::output_write(dir, e))?;

    let metadata = if write_metadata {
        let path = dir.join(METADATA_FILE_NAME);
        let mut json = emission.metadata_json()?;
        json.push('\n');
        std::fs::write(&path, json).map_err(|e| CodegenError::output_write(&path, e))?;
        debug!(path = %path.display(), "wrote metadata document");
        Some(path)
    } else {
        None
    };

    std::fs::write(output_path, &emission.source)
        .map_err(|e| CodegenError::output_write(output_path, e))?;
    debug!(path = %output_path.display(), "wrote declarations");

    Ok(WrittenOutputs {
        source: output_path.to_path_buf(),
        metadata,
    })
}
