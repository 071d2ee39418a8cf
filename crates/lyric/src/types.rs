/// One non-blank line of the script, with its whitespace-delimited word count.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Line {
    pub text: String,
    pub word_count: usize,
}

/// Playback sample reported by the audio element on its native cadence.
///
/// `duration` may be 0 before the clip's metadata has loaded; the mapper
/// treats that as "no progress yet".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaybackState {
    pub current_time: f64,
    pub duration: f64,
}

/// Complete snapshot of lyric state at a point in time.
///
/// This is the rendering contract: everything a UI layer needs to draw one
/// frame of the highlight display. Produced by
/// [`crate::session::LyricSession::frame`].
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct LyricFrame {
    pub lines: Vec<Line>,
    pub current_line_index: usize,
    /// Playback progress in `[0, 1]`; 0 while duration is unknown.
    pub progress: f64,
}
