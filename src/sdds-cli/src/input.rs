//! Input loading
//!
//! Reads a file or stdin and inflates gzip-compressed input, so the decoder
//! always sees a plain SDDS buffer.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Check if data starts with the gzip magic
pub fn is_gzip(data: &[u8]) -> bool {
    data.starts_with(&GZIP_MAGIC)
}

/// Read `path` ("-" for stdin), decompressing gzip input
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    let data = if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
    };

    tracing::debug!(path = %path.display(), bytes = data.len(), "read input");
    decompress(data)
}

/// Inflate gzip data, passing anything else through unchanged
pub fn decompress(data: Vec<u8>) -> Result<Vec<u8>> {
    if !is_gzip(&data) {
        return Ok(data);
    }

    let mut decoder = GzDecoder::new(&data[..]);
    let mut buf = Vec::new();
    decoder
        .read_to_end(&mut buf)
        .context("Failed to decompress gzip input")?;

    tracing::debug!(compressed = data.len(), bytes = buf.len(), "inflated gzip input");
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_plain_passthrough() {
        let data = b"SDDS1\n&data mode=binary\n".to_vec();
        assert!(!is_gzip(&data));
        assert_eq!(decompress(data.clone()).unwrap(), data);
    }

    #[test]
    fn test_gzip_inflated() {
        let plain = crate::testing::status_file();
        let compressed = gzip(&plain);
        assert!(is_gzip(&compressed));
        assert_eq!(decompress(compressed).unwrap(), plain);
    }

    #[test]
    fn test_corrupt_gzip() {
        assert!(decompress(vec![0x1f, 0x8b, 0x00, 0x01]).is_err());
    }

    #[test]
    fn test_read_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.sdds.gz");
        fs::write(&path, gzip(&crate::testing::status_file())).unwrap();

        let data = read_input(&path).unwrap();
        assert!(sdds::is_sdds(&data));
    }

    #[test]
    fn test_read_input_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(&dir.path().join("missing.sdds")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
