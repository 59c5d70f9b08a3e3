//! Event vocabulary for the session engine
//!
//! The host adapter translates player callbacks into `SessionEvent`s and
//! pushes them onto an `EventQueue`; a single consumer (the lifecycle
//! controller) drains the queue one event at a time, which is what keeps
//! all session-model mutation strictly serialized.
//!
//! The set of mirrored properties is fixed and small, so `PropertyChange`
//! is a closed enum rather than an open name-to-value map. Host properties
//! outside this set never enter the engine; the adapter drops them at the
//! boundary.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// One entry of a live playlist notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaylistEntry {
    /// File path or URI of the entry
    pub item: String,
    /// Whether the host marks this entry as currently active
    pub current: bool,
}

impl PlaylistEntry {
    pub fn new(item: impl Into<String>, current: bool) -> Self {
        Self {
            item: item.into(),
            current,
        }
    }
}

/// Why the session ended.
///
/// Recorded verbatim in the snapshot and otherwise passed through
/// opaquely; only `Eof` is interpreted (end-of-stream position override
/// at finalization).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EndReason {
    Quit,
    Eof,
    Error,
    #[serde(untagged)]
    Other(String),
}

impl EndReason {
    pub fn as_str(&self) -> &str {
        match self {
            EndReason::Quit => "quit",
            EndReason::Eof => "eof",
            EndReason::Error => "error",
            EndReason::Other(s) => s,
        }
    }
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live property changes the engine mirrors into the session model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum PropertyChange {
    /// Playlist contents (and current-entry marker) changed
    Playlist { entries: Vec<PlaylistEntry> },

    /// Playback position changed (seconds)
    TimePos { secs: f64 },

    /// Duration of the active file became known or changed (seconds)
    Duration { secs: f64 },

    /// Selected video stream changed
    VideoTrack { id: i64 },

    /// Selected audio stream changed
    AudioTrack { id: i64 },

    /// Selected subtitle stream changed
    SubtitleTrack { id: i64 },

    /// Audio offset changed (seconds)
    AudioDelay { secs: f64 },
}

/// Host-delivered session events
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// The host switched the actively playing playlist entry.
    ///
    /// Fired once per activation, including the forced activation of the
    /// first entry of a freshly loaded playlist.
    FileActivated,

    /// A mirrored property changed
    Property { change: PropertyChange },

    /// Playback of the whole session stopped
    Ending { reason: EndReason },
}

impl SessionEvent {
    /// Get event type as string for filtering and logging
    pub fn event_type(&self) -> &str {
        match self {
            SessionEvent::FileActivated => "FileActivated",
            SessionEvent::Property { .. } => "Property",
            SessionEvent::Ending { .. } => "Ending",
        }
    }
}

/// Receiving half of the session event stream
pub type SessionEventRx = mpsc::UnboundedReceiver<SessionEvent>;

/// Sending half of the session event stream.
///
/// Host adapters push events here. The channel is unbounded and has a
/// single consumer; delivery order is the order of emission.
#[derive(Debug, Clone)]
pub struct EventQueue {
    tx: mpsc::UnboundedSender<SessionEvent>,
}

impl EventQueue {
    /// Create a queue and its single consumer endpoint
    pub fn channel() -> (Self, SessionEventRx) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Push an event onto the queue.
    ///
    /// Send errors are ignored: a closed channel means the session
    /// consumer is already gone.
    pub fn emit(&self, event: SessionEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("Session event dropped: consumer gone");
        }
    }
}
