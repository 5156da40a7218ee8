//! Line index over a file's trimmed lines.

use std::collections::HashMap;

use super::result::LineRange;

/// Maps each trimmed line to the 1-based numbers of the lines producing it.
///
/// Numbers are pushed in file order, so every list is ascending and matching
/// tries candidates top to bottom.
#[derive(Debug)]
pub struct LineIndex<'a> {
    lines: Vec<&'a str>,
    positions: HashMap<&'a str, Vec<usize>>,
}

impl<'a> LineIndex<'a> {
    /// Split `content` on `\n` and index every trimmed line.
    ///
    /// Carriage returns are left in place and disappear with the trim.
    pub fn build(content: &'a str) -> Self {
        let lines: Vec<&'a str> = content.split('\n').map(str::trim).collect();
        let mut positions: HashMap<&'a str, Vec<usize>> = HashMap::new();
        for (i, line) in lines.iter().enumerate() {
            positions.entry(*line).or_default().push(i + 1);
        }
        Self { lines, positions }
    }

    /// Number of lines in the indexed content.
    pub(crate) fn len(&self) -> usize {
        self.lines.len()
    }

    /// Trimmed content of line `number` (1-based).
    pub fn line(&self, number: usize) -> Option<&'a str> {
        number.checked_sub(1).and_then(|i| self.lines.get(i)).copied()
    }

    /// Line numbers whose trimmed content equals `trimmed`, ascending.
    pub fn candidates(&self, trimmed: &str) -> &[usize] {
        self.positions
            .get(trimmed)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First range whose trimmed lines equal `snippet_lines`, in order.
    ///
    /// The first snippet line is the anchor; each of its occurrences is
    /// verified against the remaining lines and the earliest full match
    /// wins. Returns `None` for an empty slice.
    pub fn find(&self, snippet_lines: &[&str]) -> Option<LineRange> {
        let (anchor, rest) = snippet_lines.split_first()?;
        let count = snippet_lines.len();

        self.candidates(anchor.trim())
            .iter()
            .copied()
            .find(|&start| {
                rest.iter()
                    .enumerate()
                    .all(|(j, expected)| self.line(start + j + 1) == Some(expected.trim()))
            })
            .map(|start| LineRange::new(start, start + count - 1))
    }
}
