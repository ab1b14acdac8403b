//! SDDS header tokenizing
//!
//! Splits the leading ASCII region into lines up to and including the `&data`
//! sentinel, and records where the binary body starts. Uses memchr for the
//! line scan.

use memchr::memchr;
use serde::Serialize;

use crate::attr::attribute;
use crate::{Error, Result};

/// Directive ending the header
pub const DATA_SENTINEL: &str = "&data";

const VERSION_PREFIX: &str = "SDDS";
const BIG_ENDIAN_MARKER: &str = "!# big-endian";

/// Byte order of the binary body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    #[default]
    Little,
    Big,
}

/// Tokenized SDDS header
#[derive(Debug, Clone)]
pub struct Header {
    /// Version from an `SDDS<n>` first line
    pub version: Option<u32>,
    /// Header lines in file order, the `&data` line last
    pub lines: Vec<String>,
    /// Offset of the first byte after the `&data` line
    pub body_offset: usize,
    /// Body byte order (`!# big-endian` marker, little-endian otherwise)
    pub endian: Endian,
}

impl Header {
    /// Tokenize the header at the start of `data`
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut lines = Vec::new();
        let mut offset = 0;

        loop {
            if offset >= data.len() {
                return Err(Error::MalformedHeader(format!(
                    "no {} directive in {} header lines",
                    DATA_SENTINEL,
                    lines.len()
                )));
            }

            let newline = memchr(b'\n', &data[offset..]).ok_or_else(|| {
                Error::MalformedHeader(format!("unterminated header line at offset {}", offset))
            })?;

            let line = decode_line(&data[offset..offset + newline]);
            offset += newline + 1;

            let is_sentinel = is_directive(&line, DATA_SENTINEL);
            lines.push(line);
            if is_sentinel {
                break;
            }
        }

        let version = lines.first().and_then(|line| parse_version(line));
        let endian = if lines
            .iter()
            .any(|line| line.trim().eq_ignore_ascii_case(BIG_ENDIAN_MARKER))
        {
            Endian::Big
        } else {
            Endian::Little
        };

        tracing::trace!(
            lines = lines.len(),
            body_offset = offset,
            ?endian,
            "tokenized header"
        );

        Ok(Self {
            version,
            lines,
            body_offset: offset,
            endian,
        })
    }

    /// The `&data` sentinel line
    pub fn data_line(&self) -> &str {
        self.lines.last().map(String::as_str).unwrap_or_default()
    }

    /// Lowercased `mode` attribute of the `&data` line
    pub fn data_mode(&self) -> Option<String> {
        attribute(self.data_line(), "mode").map(|mode| mode.to_ascii_lowercase())
    }
}

/// Decode one raw line, dropping a trailing CR
///
/// Invalid UTF-8 yields an empty line rather than failing the header.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    std::str::from_utf8(raw).map(str::to_string).unwrap_or_default()
}

fn parse_version(line: &str) -> Option<u32> {
    let line = line.trim();
    let prefix = line.get(..VERSION_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(VERSION_PREFIX) {
        return None;
    }
    line[VERSION_PREFIX.len()..].trim().parse().ok()
}

/// Whether a line's trimmed content starts with `prefix`, ignoring ASCII case
pub(crate) fn is_directive(line: &str, prefix: &str) -> bool {
    line.trim_start()
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|start| start.eq_ignore_ascii_case(prefix.as_bytes()))
}
