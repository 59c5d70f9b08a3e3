//! Restore sequencer
//!
//! A host session always activates the first playlist entry on its own
//! before any external code can intervene. The sequencer cannot prevent
//! that forced activation, so it detects whether it already satisfies the
//! saved playlist position and, if not, issues exactly one corrective jump
//! and waits for its confirmation before applying fine-grained playback
//! properties. Setting a time position on the wrong file is meaningless.
//!
//! Transition table, driven by file-activation events:
//!
//! | Phase             | target == 0            | target > 0           |
//! |-------------------|------------------------|----------------------|
//! | `Idle`            | apply -> `PlaybackApplied` | jump -> `PlaylistPending` |
//! | `PlaylistPending` | apply -> `PlaybackApplied` | apply -> `PlaybackApplied` |
//! | `PlaylistApplied` | ignored                | ignored              |
//! | `PlaybackApplied` | ignored                | ignored              |

use crate::host::{PlayerControl, TrackKind};
use crate::model::{SessionModel, Snapshot};
use tracing::{debug, info};

/// Restore progress.
///
/// `PlaybackApplied` is terminal: any activation after it is ordinary
/// mid-session navigation, not initial restoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestorePhase {
    /// No activation seen yet
    Idle,
    /// Jump issued, waiting for the host to confirm the file switch
    PlaylistPending,
    /// Saved playlist position reached, playback properties not yet applied
    PlaylistApplied,
    /// Playback properties applied (terminal)
    PlaybackApplied,
}

/// Restore targets captured from the loaded snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestoreTarget {
    pub playlist: Vec<String>,
    pub playlist_pos: Option<usize>,
    pub time_pos: Option<f64>,
    pub vid: Option<i64>,
    pub aid: Option<i64>,
    pub sid: Option<i64>,
    pub audio_delay: Option<f64>,
}

impl RestoreTarget {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            playlist: snapshot.playlist.clone(),
            playlist_pos: snapshot.playlist_pos,
            time_pos: snapshot.time_pos,
            vid: snapshot.vid,
            aid: snapshot.aid,
            sid: snapshot.sid,
            audio_delay: snapshot.audio_delay,
        }
    }
}

/// Multi-step restoration of playlist position, then playback properties
pub struct RestoreSequencer {
    target: RestoreTarget,
    phase: RestorePhase,
}

impl RestoreSequencer {
    pub fn new(target: RestoreTarget) -> Self {
        Self {
            target,
            phase: RestorePhase::Idle,
        }
    }

    /// Sequencer with nothing to restore (first run, no prior snapshot)
    pub fn inert() -> Self {
        Self::new(RestoreTarget::default())
    }

    pub fn phase(&self) -> RestorePhase {
        self.phase
    }

    /// Replay the saved playlist into the host.
    ///
    /// Called once at session start. The host then activates entry 0 on
    /// its own and fires the first file-activation event; the state
    /// machine below compensates when the saved position differs.
    pub fn prime(&self, host: &mut dyn PlayerControl) {
        if self.target.playlist.is_empty() {
            return;
        }
        host.clear_playlist();
        for item in &self.target.playlist {
            host.append_to_playlist(item);
        }
        info!(
            "Primed host playlist with {} entries",
            self.target.playlist.len()
        );
    }

    /// Advance the state machine on a file-activation event
    pub fn on_file_activated(&mut self, model: &mut SessionModel, host: &mut dyn PlayerControl) {
        match self.phase {
            RestorePhase::Idle => {
                // Absent target means index 0, which the host has already
                // forced; an empty snapshot restores playback immediately.
                let target_pos = self.target.playlist_pos.unwrap_or(0);
                if target_pos == 0 {
                    debug!("First activation already matches target index 0");
                    model.playlist_restored = true;
                    self.phase = RestorePhase::PlaylistApplied;
                    self.apply_playback(model, host);
                } else {
                    debug!("Requesting jump to playlist index {}", target_pos);
                    host.select_playlist_index(target_pos);
                    self.phase = RestorePhase::PlaylistPending;
                }
            }
            RestorePhase::PlaylistPending => {
                debug!("Host confirmed playlist jump");
                model.playlist_restored = true;
                self.phase = RestorePhase::PlaylistApplied;
                self.apply_playback(model, host);
            }
            RestorePhase::PlaylistApplied | RestorePhase::PlaybackApplied => {
                debug!("Ignoring file activation after restore completed");
            }
        }
    }

    /// Apply time position, track selectors and audio delay; only the
    /// fields present in the target are touched. Guarded by the model's
    /// `playback_restored` flag so it runs at most once per session.
    fn apply_playback(&mut self, model: &mut SessionModel, host: &mut dyn PlayerControl) {
        if model.playback_restored {
            self.phase = RestorePhase::PlaybackApplied;
            return;
        }

        if let Some(secs) = self.target.time_pos {
            host.set_time_pos(secs);
        }
        if let Some(id) = self.target.vid {
            host.set_track(TrackKind::Video, id);
        }
        if let Some(id) = self.target.aid {
            host.set_track(TrackKind::Audio, id);
        }
        if let Some(id) = self.target.sid {
            host.set_track(TrackKind::Subtitle, id);
        }
        if let Some(secs) = self.target.audio_delay {
            host.set_audio_delay(secs);
        }

        model.playback_restored = true;
        self.phase = RestorePhase::PlaybackApplied;
        info!("Playback properties restored");
    }
}
