use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::RenameError;
use crate::rename::snake_document;

/// Suffix appended verbatim to the input path.
pub const OUTPUT_SUFFIX: &str = ".hpp";

/// `<input>.hpp`, appended to the full path rather than replacing an extension.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Rewrite `input` into `<input>.hpp` and return the path written.
///
/// The converted text is built in memory before the output is opened, so a
/// read or decode failure never truncates an existing output file.
pub fn convert_file(input: &Path) -> Result<PathBuf, RenameError> {
    let bytes = std::fs::read(input).map_err(|source| RenameError::FileAccess {
        path: input.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| RenameError::Decoding {
        path: input.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        "Read {} bytes, {} lines from {}",
        text.len(),
        text.lines().count(),
        input.display()
    );

    let converted = snake_document(&text);

    let output = output_path(input);
    std::fs::write(&output, converted).map_err(|source| RenameError::FileAccess {
        path: output.clone(),
        source,
    })?;
    tracing::debug!("Wrote {}", output.display());

    Ok(output)
}
