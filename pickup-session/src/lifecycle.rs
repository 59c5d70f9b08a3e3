//! Session lifecycle controller
//!
//! Wires the restore sequencer and change observer to the host event
//! stream, finalizes statistics when the session ends, and triggers the
//! snapshot write. All session-model mutation happens here, one event at
//! a time; the only blocking I/O is the initial load and the final save.

use crate::host::PlayerControl;
use crate::model::{unix_now, SessionModel};
use crate::observer::ChangeObserver;
use crate::sequencer::{RestoreSequencer, RestoreTarget};
use crate::store::SnapshotStore;
use pickup_common::events::{EndReason, SessionEvent, SessionEventRx};
use pickup_common::Result;
use tracing::{error, info};

/// Owns the session model for the lifetime of one player session
pub struct SessionController {
    model: SessionModel,
    sequencer: RestoreSequencer,
    observer: ChangeObserver,
    store: SnapshotStore,
}

impl SessionController {
    /// Start a session: load the prior snapshot, seed the model, prime
    /// the sequencer and replay the saved playlist into the host.
    ///
    /// A missing snapshot is a normal first run and yields an inert
    /// sequencer. A corrupt snapshot is surfaced as an error so the
    /// caller can skip restoration instead of guessing defaults.
    pub fn start(store: SnapshotStore, host: &mut dyn PlayerControl) -> Result<Self> {
        let mut model = SessionModel::new();

        let sequencer = match store.load()? {
            Some(prior) => {
                model.seed(&prior);
                RestoreSequencer::new(RestoreTarget::from_snapshot(&prior))
            }
            None => RestoreSequencer::inert(),
        };
        sequencer.prime(host);

        Ok(Self {
            model,
            sequencer,
            observer: ChangeObserver::new(),
            store,
        })
    }

    /// Handle one host event.
    ///
    /// Returns `true` once the session has ended and the snapshot has
    /// been flushed; no further events should be delivered after that.
    pub fn handle_event(&mut self, host: &mut dyn PlayerControl, event: SessionEvent) -> bool {
        match event {
            SessionEvent::FileActivated => {
                self.sequencer.on_file_activated(&mut self.model, host);
                false
            }
            SessionEvent::Property { change } => {
                self.observer.apply(&mut self.model, change);
                false
            }
            SessionEvent::Ending { reason } => {
                self.finalize(reason);
                true
            }
        }
    }

    /// Drain the event queue until the session ends.
    pub async fn run(mut self, host: &mut dyn PlayerControl, mut rx: SessionEventRx) {
        while let Some(event) = rx.recv().await {
            if self.handle_event(host, event) {
                return;
            }
        }
        // Sender dropped without an Ending event: the host went away
        // before a clean shutdown. Nothing is written; the previous
        // fully completed session remains on disk.
        info!("Event stream closed without session end; snapshot not written");
    }

    /// Stamp final statistics, record the termination reason and persist
    /// the snapshot.
    ///
    /// When the session reached end of stream, the last observed
    /// duration replaces `time-pos`: position tracking may lag or stop
    /// short of the true end.
    fn finalize(&mut self, reason: EndReason) {
        self.model.snapshot.statistics.stop_time = Some(unix_now());

        if reason == EndReason::Eof {
            if let Some(duration) = self.model.duration {
                self.model.snapshot.time_pos = Some(duration);
            }
        }
        self.model.snapshot.reason = Some(reason.as_str().to_string());

        info!("Session ended ({})", reason);
        if let Err(e) = self.store.save(&self.model.snapshot) {
            // Persistence failure must not take the host down with it;
            // the session itself still shuts down normally.
            error!("Failed to save snapshot: {}", e);
        }
    }

    /// Read-only view of the live session model
    pub fn model(&self) -> &SessionModel {
        &self.model
    }

    /// Current restore phase, for diagnostics
    pub fn restore_phase(&self) -> crate::sequencer::RestorePhase {
        self.sequencer.phase()
    }
}
