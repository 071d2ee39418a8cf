pub mod clip;
pub mod lines;
pub mod mapper;
pub mod scroll;
pub mod session;
pub mod types;

pub use clip::{AudioClip, ClipError};
pub use lines::LineSet;
pub use mapper::current_line_index;
pub use scroll::{LineGeometry, scroll_target};
pub use session::{LyricSession, ScrollCommand};
pub use types::{Line, LyricFrame, PlaybackState};
