use crate::lines::LineSet;

/// Estimate which line is currently being narrated.
///
/// The provider gives no per-word timestamps, so the only available timing
/// model is uniform words-per-second: the estimated word index is
/// `floor((current_time / duration) * total_words)`, and the current line is
/// the first whose cumulative word count exceeds it.
///
/// Deterministic pure function of its inputs. When the estimate reaches total
/// coverage (end of clip), the index clamps to the last line, which keeps the
/// result non-decreasing over forward playback.
pub fn current_line_index(current_time: f64, duration: f64, lines: &LineSet) -> usize {
    if lines.is_empty() {
        return 0;
    }

    let total_words = lines.total_words();
    if duration <= 0.0 || total_words == 0 {
        return 0;
    }

    let ratio = (current_time / duration).clamp(0.0, 1.0);
    let estimated_word_index = (ratio * total_words as f64).floor() as usize;

    let mut cumulative = 0;
    for (index, line) in lines.iter().enumerate() {
        cumulative += line.word_count;
        if estimated_word_index < cumulative {
            return index;
        }
    }

    lines.len() - 1
}
