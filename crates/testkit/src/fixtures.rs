use std::fmt::Display;
use std::io::Write;
use tempfile::NamedTempFile;
use tracing::error;

/// Fixture setup failed: log it and abort the test.
#[track_caller]
pub(crate) fn fatal(operation: &str, err: impl Display) -> ! {
    error!(operation, error = %err, "Test fixture setup failed");
    panic!("test fixture setup failed ({}): {}", operation, err)
}

/// Creates a temp file holding `data`.
///
/// The handle stays open, positioned after the data. The file is removed when
/// the handle is dropped.
pub fn temp_file(data: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("ferrous-dns-")
        .tempfile()
        .unwrap_or_else(|e| fatal("create temp file", e));

    file.write_all(data.as_bytes())
        .and_then(|_| file.flush())
        .unwrap_or_else(|e| fatal("write temp file", e));

    file
}
