//! Marker block detection and splicing
//!
//! A target file carries the base fragment between two comment lines:
//!
//! ```text
//! # Begining of base.toml
//! <base contents>
//! # End of base.toml
//! ```
//!
//! The spelling "Begining" is the on-disk format; existing target files
//! depend on it, so it must not be corrected.

use std::path::Path;

use thiserror::Error;

/// Prefix of the line that opens a marker block
pub const BEGIN_PREFIX: &str = "# Begining of ";

/// Prefix of the line that closes a marker block
pub const END_PREFIX: &str = "# End of ";

/// Why a target's markers could not be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("begin marker without end marker")]
    MissingEnd,

    #[error("end marker without begin marker")]
    MissingBegin,

    #[error("begin marker appears {0} times")]
    DuplicateBegin(usize),

    #[error("end marker appears {0} times")]
    DuplicateEnd(usize),

    #[error("end marker precedes begin marker")]
    EndBeforeBegin,
}

/// Byte range strictly between the begin and end markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    /// First byte after the begin marker
    pub inner_start: usize,
    /// First byte of the end marker
    pub inner_end: usize,
}

/// The begin/end marker lines derived from a base file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
    begin: String,
    end: String,
}

impl MarkerPair {
    /// Markers for a base file called `name`
    pub fn for_base(name: &str) -> Self {
        Self {
            begin: format!("{BEGIN_PREFIX}{name}"),
            end: format!("{END_PREFIX}{name}"),
        }
    }

    /// Markers for a base file path; only the file name is used
    pub fn for_base_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::for_base(&name)
    }

    pub fn begin(&self) -> &str {
        &self.begin
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Find the marker block in `content`.
    ///
    /// Returns `Ok(None)` when neither marker is present. A lone marker, a
    /// repeated marker or an end marker ahead of the begin marker is an error:
    /// splicing into such a file would leave it with extra markers.
    pub fn locate(&self, content: impl AsRef<[u8]>) -> Result<Option<BlockSpan>, MarkerError> {
        let content = content.as_ref();
        let begin = self.begin.as_bytes();
        let end = self.end.as_bytes();

        match (count(content, begin), count(content, end)) {
            (0, 0) => return Ok(None),
            (_, 0) => return Err(MarkerError::MissingEnd),
            (0, _) => return Err(MarkerError::MissingBegin),
            (b, _) if b > 1 => return Err(MarkerError::DuplicateBegin(b)),
            (_, e) if e > 1 => return Err(MarkerError::DuplicateEnd(e)),
            _ => {}
        }

        let (Some(begin_at), Some(end_at)) = (find(content, begin), find(content, end)) else {
            return Ok(None);
        };

        let inner_start = begin_at + begin.len();
        if end_at < inner_start {
            return Err(MarkerError::EndBeforeBegin);
        }

        Ok(Some(BlockSpan {
            inner_start,
            inner_end: end_at,
        }))
    }
}

/// Byte offset of the first occurrence of `needle`
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Non-overlapping occurrences of `needle`, like `str::matches`
fn count(haystack: &[u8], needle: &[u8]) -> usize {
    let mut n = 0;
    let mut rest = haystack;
    while let Some(at) = find(rest, needle) {
        n += 1;
        rest = &rest[at + needle.len().max(1)..];
    }
    n
}

/// What a splice did to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpliceAction {
    /// An existing block had its contents replaced
    Replaced,
    /// A new block was added at the end of the file
    Appended,
}

/// Result of splicing the base into one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub content: Vec<u8>,
    pub action: SpliceAction,
}

/// Insert or replace the marker block in `target` with `base`.
///
/// Works on raw bytes; neither file has to be valid UTF-8.
pub fn splice(
    target: impl AsRef<[u8]>,
    base: impl AsRef<[u8]>,
    markers: &MarkerPair,
) -> Result<Splice, MarkerError> {
    let (target, base) = (target.as_ref(), base.as_ref());

    match markers.locate(target)? {
        Some(span) => {
            let mut content = Vec::with_capacity(target.len() + base.len() + 2);
            content.extend_from_slice(&target[..span.inner_start]);
            content.push(b'\n');
            content.extend_from_slice(base);
            content.push(b'\n');
            content.extend_from_slice(&target[span.inner_end..]);
            Ok(Splice {
                content,
                action: SpliceAction::Replaced,
            })
        }
        None => {
            let mut content = Vec::with_capacity(
                target.len() + base.len() + markers.begin.len() + markers.end.len() + 3,
            );
            content.extend_from_slice(target);
            content.push(b'\n');
            content.extend_from_slice(markers.begin.as_bytes());
            content.push(b'\n');
            content.extend_from_slice(base);
            content.push(b'\n');
            content.extend_from_slice(markers.end.as_bytes());
            Ok(Splice {
                content,
                action: SpliceAction::Appended,
            })
        }
    }
}
