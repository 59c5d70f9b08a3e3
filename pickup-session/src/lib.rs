//! Session persistence engine for pickup
//!
//! Restores a media player session from the saved snapshot at startup,
//! mirrors live property changes into an in-memory model while the
//! session runs, and writes the snapshot back when the session ends.
//!
//! # Architecture
//!
//! - [`store`]: reads/writes the snapshot document on disk
//! - [`model`]: the snapshot and its live in-session mirror
//! - [`sequencer`]: multi-step restoration of playlist position then
//!   playback properties, driven by file-activation events
//! - [`observer`]: folds live property-change notifications into the model
//! - [`lifecycle`]: wires everything to session start and session end
//! - [`host`]: the control surface a player adapter implements

pub mod host;
pub mod lifecycle;
pub mod model;
pub mod observer;
pub mod sequencer;
pub mod store;

pub use lifecycle::SessionController;
pub use model::{SessionModel, Snapshot, Statistics};
pub use store::SnapshotStore;
