//! YAML input loading for the command-line front end.
//!
//! This module reads document text from files or stdin, transparently
//! decompressing gzip input. It does not parse anything: the text is handed
//! to the query functions as-is.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Loads a YAML document from the filesystem.
///
/// Files ending in `.gz` are decompressed first.
///
/// # Examples
///
/// ```no_run
/// use yamlpick::file::loader::load_yaml_file;
///
/// let text = load_yaml_file("config.yaml", 1 << 20).unwrap();
/// let port = yamlpick::get(&text, "database.port").int();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip
/// - The contents are not valid UTF-8
/// - The contents are larger than `max_size` bytes
pub fn load_yaml_file<P: AsRef<Path>>(path: P, max_size: usize) -> Result<String> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref, max_size)?
    } else {
        let file = fs::File::open(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?;
        let bytes = read_limited(file, max_size)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?;
        into_text(bytes, max_size)?
    };

    tracing::debug!(path = %path_ref.display(), bytes = content.len(), gzip = is_gzipped, "loaded document");
    Ok(content)
}

/// Loads a YAML document from standard input.
///
/// Input starting with the gzip magic bytes (0x1f 0x8b) is decompressed.
///
/// # Errors
///
/// Returns an error if stdin cannot be read, is not valid gzip/UTF-8, or is
/// larger than `max_size` bytes.
pub fn load_yaml_from_stdin(max_size: usize) -> Result<String> {
    let buffer = read_limited(std::io::stdin().lock(), max_size)
        .context("Failed to read from stdin")?;
    decode_input(buffer, max_size)
}

/// Turns raw input bytes into document text.
///
/// Gzip input is decompressed only up to `max_size` bytes.
pub fn decode_input(buffer: Vec<u8>, max_size: usize) -> Result<String> {
    if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer, max_size)
    } else {
        into_text(buffer, max_size)
    }
}

/// Reads at most one byte past `max_size`, so oversized input is detected
/// without buffering all of it.
fn read_limited<R: Read>(reader: R, max_size: usize) -> std::io::Result<Vec<u8>> {
    let limit = u64::try_from(max_size).unwrap_or(u64::MAX).saturating_add(1);
    let mut buffer = Vec::new();
    reader.take(limit).read_to_end(&mut buffer)?;
    Ok(buffer)
}

fn into_text(buffer: Vec<u8>, max_size: usize) -> Result<String> {
    if buffer.len() > max_size {
        anyhow::bail!("Document is larger than the {} byte limit", max_size);
    }
    String::from_utf8(buffer).context("Invalid UTF-8 in input")
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P, max_size: usize) -> Result<String> {
    use flate2::read::GzDecoder;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let bytes = read_limited(GzDecoder::new(file), max_size)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    into_text(bytes, max_size)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8], max_size: usize) -> Result<String> {
    use flate2::read::GzDecoder;

    let decompressed = read_limited(GzDecoder::new(bytes), max_size)
        .context("Failed to decompress gzipped input")?;
    into_text(decompressed, max_size)
}
