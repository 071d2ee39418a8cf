use crate::clip::AudioClip;
use crate::lines::LineSet;
use crate::mapper::current_line_index;
use crate::types::{LyricFrame, PlaybackState};

/// Request to smooth-scroll the display so `line_index` is centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollCommand {
    pub line_index: usize,
}

/// Stateful driver for one script/clip pair.
///
/// Feeds every playback sample through the mapper and emits a
/// [`ScrollCommand`] only when the computed line index *increases*.
/// The highlight follows backward seeks, but scrolling is forward-only.
///
/// The mapper itself is a pure function; the session only tracks the
/// previously seen index and the not-yet-performed scroll, so each
/// recomputation is an independent, idempotent read.
#[derive(Debug, Default)]
pub struct LyricSession {
    lines: LineSet,
    clip: Option<AudioClip>,
    current_index: usize,
    pending_scroll: Option<ScrollCommand>,
}

impl LyricSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a new script/clip pair, replacing any previous one.
    ///
    /// The previous clip is dropped here, the line index resets to 0, and
    /// any pending scroll is cancelled.
    pub fn load(&mut self, script: &str, clip: AudioClip) {
        self.lines = LineSet::parse(script);
        self.clip = Some(clip);
        self.current_index = 0;
        self.pending_scroll = None;
    }

    /// Tear down the session, releasing the clip and cancelling any pending
    /// scroll.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    pub fn clip(&self) -> Option<&AudioClip> {
        self.clip.as_ref()
    }

    pub fn current_line_index(&self) -> usize {
        self.current_index
    }

    /// Process one playback sample.
    ///
    /// Returns the scroll command when the line advanced; the same command
    /// stays retrievable via [`Self::take_pending_scroll`] for UIs that
    /// animate on their own schedule.
    pub fn on_time_update(&mut self, sample: PlaybackState) -> Option<ScrollCommand> {
        let index = current_line_index(sample.current_time, sample.duration, &self.lines);
        let previous = self.current_index;
        self.current_index = index;

        if index > previous {
            let command = ScrollCommand { line_index: index };
            self.pending_scroll = Some(command);
            Some(command)
        } else {
            None
        }
    }

    /// Consume the pending scroll, if any. Returns `None` after
    /// [`Self::load`] or [`Self::clear`] cancelled it.
    pub fn take_pending_scroll(&mut self) -> Option<ScrollCommand> {
        self.pending_scroll.take()
    }

    /// Snapshot everything a renderer needs for one frame.
    pub fn frame(&self, sample: PlaybackState) -> LyricFrame {
        let progress = if sample.duration > 0.0 {
            (sample.current_time / sample.duration).clamp(0.0, 1.0)
        } else {
            0.0
        };

        LyricFrame {
            lines: self.lines.lines().to_vec(),
            current_line_index: current_line_index(
                sample.current_time,
                sample.duration,
                &self.lines,
            ),
            progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::DEFAULT_CONTENT_TYPE;

    fn clip() -> AudioClip {
        AudioClip::from_base64("AQID", DEFAULT_CONTENT_TYPE).unwrap()
    }

    fn sample(current_time: f64) -> PlaybackState {
        PlaybackState {
            current_time,
            duration: 10.0,
        }
    }

    #[test]
    fn scroll_fires_only_when_line_advances() {
        let mut session = LyricSession::new();
        session.load("Hello world\nGoodbye now", clip());

        assert_eq!(session.on_time_update(sample(0.0)), None);
        assert_eq!(
            session.on_time_update(sample(7.5)),
            Some(ScrollCommand { line_index: 1 })
        );
        // same line again: no new scroll
        assert_eq!(session.on_time_update(sample(8.0)), None);
    }

    #[test]
    fn backward_seek_moves_highlight_but_not_scroll() {
        let mut session = LyricSession::new();
        session.load("Hello world\nGoodbye now", clip());

        session.on_time_update(sample(7.5));
        assert_eq!(session.current_line_index(), 1);

        assert_eq!(session.on_time_update(sample(1.0)), None);
        assert_eq!(session.current_line_index(), 0);
    }

    #[test]
    fn load_resets_index_and_cancels_pending_scroll() {
        let mut session = LyricSession::new();
        session.load("Hello world\nGoodbye now", clip());
        session.on_time_update(sample(7.5));
        assert!(session.take_pending_scroll().is_some());

        session.on_time_update(sample(9.0));
        session.load("new script here", clip());
        assert_eq!(session.current_line_index(), 0);
        assert_eq!(session.take_pending_scroll(), None);
    }

    #[test]
    fn clear_releases_clip() {
        let mut session = LyricSession::new();
        session.load("Hello world", clip());
        assert!(session.clip().is_some());

        session.clear();
        assert!(session.clip().is_none());
        assert!(session.lines().is_empty());
        assert_eq!(session.take_pending_scroll(), None);
    }

    #[test]
    fn frame_is_a_complete_render_snapshot() {
        let mut session = LyricSession::new();
        session.load("Hello world\nGoodbye now", clip());

        let frame = session.frame(sample(7.5));
        assert_eq!(frame.lines.len(), 2);
        assert_eq!(frame.current_line_index, 1);
        assert!((frame.progress - 0.75).abs() < f64::EPSILON);

        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["current_line_index"], 1);
    }

    #[test]
    fn frame_before_metadata_loads_shows_no_progress() {
        let mut session = LyricSession::new();
        session.load("Hello world", clip());

        let frame = session.frame(PlaybackState {
            current_time: 3.0,
            duration: 0.0,
        });
        assert_eq!(frame.current_line_index, 0);
        assert_eq!(frame.progress, 0.0);
    }
}
