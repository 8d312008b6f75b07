//! Fenced code block tracking.
//!
//! Source preparation and TOC collection must ignore lines that belong to
//! fenced code blocks. The tracker follows CommonMark rules: a fence is a
//! run of three or more backticks or tildes with at most three columns of
//! indentation, and a closer must use the same marker with a run at least
//! as long as the opener's and carry no info string.

/// Tracks fenced code block state across the lines of a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct FenceTracker {
    open: Option<(char, usize)>,
}

impl FenceTracker {
    /// Creates a tracker outside any fence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line and returns whether it belongs to a code fence
    /// (opener, contents, or closer).
    pub fn observe(&mut self, line: &str) -> bool {
        let (columns, offset) = leading_columns(line);
        let rest = &line[offset..];

        match self.open {
            Some((marker, length)) => {
                if columns <= 3 && closes_fence(rest, marker, length) {
                    self.open = None;
                }
                true
            }
            None => {
                if columns <= 3 {
                    if let Some(run) = fence_run(rest) {
                        self.open = Some(run);
                        return true;
                    }
                }
                false
            }
        }
    }

    /// Whether the tracker is currently inside an open fence.
    pub fn in_fence(&self) -> bool {
        self.open.is_some()
    }
}

/// Returns true for indented code block lines (4+ columns of leading
/// whitespace, tabs expanding to 4-column boundaries).
pub fn is_indented_code(line: &str) -> bool {
    leading_columns(line).0 >= 4
}

/// Returns (visual columns, byte offset) of the leading whitespace.
fn leading_columns(line: &str) -> (usize, usize) {
    let mut columns = 0;
    let mut bytes = 0;
    for b in line.bytes() {
        match b {
            b' ' => {
                columns += 1;
                bytes += 1;
            }
            b'\t' => {
                columns += 4 - columns % 4;
                bytes += 1;
            }
            _ => break,
        }
    }
    (columns, bytes)
}

fn fence_run(text: &str) -> Option<(char, usize)> {
    let marker = text.chars().next()?;
    if marker != '`' && marker != '~' {
        return None;
    }
    let length = text.chars().take_while(|c| *c == marker).count();
    (length >= 3).then_some((marker, length))
}

/// A closer matches the opening marker, runs at least as long, and has
/// nothing but whitespace after the run.
fn closes_fence(text: &str, marker: char, open_length: usize) -> bool {
    match fence_run(text) {
        Some((m, length)) if m == marker && length >= open_length => {
            text[length..].chars().all(char::is_whitespace)
        }
        _ => false,
    }
}
