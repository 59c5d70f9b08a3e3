//! Change observer
//!
//! Folds live property-change notifications into the session model so the
//! persisted state always tracks the running session, even when the user
//! navigates manually after restoration. All folds are last-write-wins;
//! no range validation, no cross-field consistency checks.

use crate::model::SessionModel;
use pickup_common::events::{PlaylistEntry, PropertyChange};
use tracing::debug;

/// Mirrors host property changes into the session model
#[derive(Debug, Default)]
pub struct ChangeObserver {
    saw_first_position: bool,
}

impl ChangeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one property change into the model
    pub fn apply(&mut self, model: &mut SessionModel, change: PropertyChange) {
        match change {
            PropertyChange::Playlist { entries } => self.apply_playlist(model, &entries),
            PropertyChange::TimePos { secs } => {
                if !self.saw_first_position {
                    // Where playback actually began; may differ from the
                    // restored target due to host seek behavior. Never
                    // overwritten within the same session.
                    model.snapshot.statistics.start_position = Some(secs);
                    self.saw_first_position = true;
                    debug!("Playback started at position {:.3}s", secs);
                }
                model.snapshot.time_pos = Some(secs);
            }
            PropertyChange::Duration { secs } => {
                model.duration = Some(secs);
            }
            PropertyChange::VideoTrack { id } => {
                model.snapshot.vid = Some(id);
            }
            PropertyChange::AudioTrack { id } => {
                model.snapshot.aid = Some(id);
            }
            PropertyChange::SubtitleTrack { id } => {
                model.snapshot.sid = Some(id);
            }
            PropertyChange::AudioDelay { secs } => {
                model.snapshot.audio_delay = Some(secs);
            }
        }
    }

    /// Rebuild the mirrored playlist and record which entry the host
    /// currently marks active
    fn apply_playlist(&mut self, model: &mut SessionModel, entries: &[PlaylistEntry]) {
        model.snapshot.playlist = entries.iter().map(|e| e.item.clone()).collect();

        if let Some(current) = entries.iter().position(|e| e.current) {
            model.snapshot.playlist_pos = Some(current);
        }
        debug!(
            "Playlist mirrored: {} entries, current {:?}",
            model.snapshot.playlist.len(),
            model.snapshot.playlist_pos
        );
    }
}
