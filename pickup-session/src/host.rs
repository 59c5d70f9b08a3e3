//! Host session control surface
//!
//! The engine drives the player through this trait: playlist replacement
//! during priming, the corrective index jump, and fine-grained playback
//! property application. A production adapter binds these calls to a
//! concrete player; tests use a recording fake.
//!
//! None of these calls block the event loop; mutating calls that have an
//! asynchronous effect on the host (notably `select_playlist_index`) are
//! confirmed through later session events.

/// Which stream a track selector addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Video,
    Audio,
    Subtitle,
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackKind::Video => write!(f, "video"),
            TrackKind::Audio => write!(f, "audio"),
            TrackKind::Subtitle => write!(f, "subtitle"),
        }
    }
}

/// Control operations the engine needs from the player
pub trait PlayerControl {
    /// Remove every entry from the host playlist
    fn clear_playlist(&mut self);

    /// Append one file path / URI to the host playlist
    fn append_to_playlist(&mut self, item: &str);

    /// Ask the host to switch the active playlist entry.
    ///
    /// The switch is asynchronous: the host confirms it with a later
    /// file-activation event. Out-of-range indices are passed through
    /// unchanged; bounds handling is the host's problem.
    fn select_playlist_index(&mut self, index: usize);

    /// Seek to an absolute position in seconds
    fn set_time_pos(&mut self, secs: f64);

    /// Select a track stream
    fn set_track(&mut self, kind: TrackKind, id: i64);

    /// Set the audio offset in seconds
    fn set_audio_delay(&mut self, secs: f64);
}
