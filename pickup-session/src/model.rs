//! Snapshot and session model types
//!
//! `Snapshot` is the persisted unit; `SessionModel` is its live mirror for
//! the current session, extended with fields that never reach disk.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Per-session bookkeeping carried inside the snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Statistics {
    /// Unix seconds at process start; stamped exactly once per session,
    /// independent of whether restoration occurs
    pub start_time: f64,

    /// Unix seconds when the session ended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_time: Option<f64>,

    /// Position (seconds) at which playback actually began. Best-effort:
    /// may differ from the restored target due to host seek behavior.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_position: Option<f64>,
}

/// The persisted record of playback state.
///
/// Serialized as a single JSON document with kebab-case keys
/// (`playlist-pos`, `time-pos`, `audio-delay`, ...). Every key is
/// optional except `statistics`, which is always present once any
/// session has run. Track selectors absent means "leave as session
/// default".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Snapshot {
    /// Ordered file paths / URIs; order-significant, omitted when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub playlist: Vec<String>,

    /// Zero-based index into `playlist`; absent defaults to 0.
    /// Not validated against playlist length anywhere in this crate:
    /// out-of-range values are forwarded to the host, which may clamp,
    /// ignore, or error on them independently.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist_pos: Option<usize>,

    /// Playback position in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_pos: Option<f64>,

    /// Selected video stream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vid: Option<i64>,

    /// Selected audio stream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aid: Option<i64>,

    /// Selected subtitle stream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<i64>,

    /// Audio offset in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_delay: Option<f64>,

    /// Why the previous session ended; absent on first run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default)]
    pub statistics: Statistics,
}

/// Live mirror of the snapshot for the current session.
///
/// Exclusively owned by the lifecycle controller; mutated only by the
/// restore sequencer and the change observer, one event at a time, and
/// handed read-only to the snapshot store at termination.
#[derive(Debug, Clone)]
pub struct SessionModel {
    pub snapshot: Snapshot,

    /// Total length of the active file in seconds. Ephemeral: never
    /// persisted directly, used only as the end-of-stream fallback for
    /// `time-pos` at finalization.
    pub duration: Option<f64>,

    /// The saved playlist position has been applied (or needed no jump)
    pub playlist_restored: bool,

    /// Playback properties have been applied; guards re-application
    pub playback_restored: bool,
}

impl SessionModel {
    /// Create the model for a fresh session, stamping `start-time` now
    pub fn new() -> Self {
        let mut snapshot = Snapshot::default();
        snapshot.statistics.start_time = unix_now();
        Self {
            snapshot,
            duration: None,
            playlist_restored: false,
            playback_restored: false,
        }
    }

    /// Seed playlist, position and track fields from a prior snapshot.
    ///
    /// The prior session's `reason` and `statistics` are not carried
    /// over; they described that session, not this one.
    pub fn seed(&mut self, prior: &Snapshot) {
        self.snapshot.playlist = prior.playlist.clone();
        self.snapshot.playlist_pos = prior.playlist_pos;
        self.snapshot.time_pos = prior.time_pos;
        self.snapshot.vid = prior.vid;
        self.snapshot.aid = prior.aid;
        self.snapshot.sid = prior.sid;
        self.snapshot.audio_delay = prior.audio_delay;
    }
}

impl Default for SessionModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Current wall-clock time as fractional unix seconds
pub fn unix_now() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}
