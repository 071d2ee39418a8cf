use crate::types::Line;

/// Ordered sequence of non-blank script lines with per-line word counts.
///
/// Derived from the raw script on every change; the sum of the per-line
/// counts is the total the mapper uses as its timing denominator.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LineSet {
    lines: Vec<Line>,
}

impl LineSet {
    /// Split `script` on newlines, discard blank and whitespace-only lines,
    /// and count whitespace-delimited tokens per line. Punctuation is kept.
    pub fn parse(script: &str) -> Self {
        let lines = script
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| Line {
                text: line.to_string(),
                word_count: line.split_whitespace().count(),
            })
            .collect();

        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn total_words(&self) -> usize {
        self.lines.iter().map(|line| line.word_count).sum()
    }
}
