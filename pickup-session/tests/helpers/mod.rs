//! Shared test helpers
//!
//! `RecordingPlayer` is a fake host control surface that records every
//! call, letting tests assert exactly which operations the engine issued
//! and in what order.

use pickup_session::host::{PlayerControl, TrackKind};

/// One recorded host operation
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    ClearPlaylist,
    Append(String),
    SelectIndex(usize),
    SetTimePos(f64),
    SetTrack(TrackKind, i64),
    SetAudioDelay(f64),
}

/// Fake player that records control calls instead of acting on them
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    pub calls: Vec<HostCall>,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded since the last `drain`
    pub fn drain(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    /// Whether any playback property (seek, track, delay) was set
    pub fn touched_playback(&self) -> bool {
        self.calls.iter().any(|c| {
            matches!(
                c,
                HostCall::SetTimePos(_) | HostCall::SetTrack(..) | HostCall::SetAudioDelay(_)
            )
        })
    }
}

impl PlayerControl for RecordingPlayer {
    fn clear_playlist(&mut self) {
        self.calls.push(HostCall::ClearPlaylist);
    }

    fn append_to_playlist(&mut self, item: &str) {
        self.calls.push(HostCall::Append(item.to_string()));
    }

    fn select_playlist_index(&mut self, index: usize) {
        self.calls.push(HostCall::SelectIndex(index));
    }

    fn set_time_pos(&mut self, secs: f64) {
        self.calls.push(HostCall::SetTimePos(secs));
    }

    fn set_track(&mut self, kind: TrackKind, id: i64) {
        self.calls.push(HostCall::SetTrack(kind, id));
    }

    fn set_audio_delay(&mut self, secs: f64) {
        self.calls.push(HostCall::SetAudioDelay(secs));
    }
}
