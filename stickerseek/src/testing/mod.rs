//! Test support: scripted fetchers, recording observers, and payload
//! fixtures for exercising search sessions without a network.

mod mocks;
mod payloads;

pub use mocks::{transport_error, RecordingObserver, ScriptedFetcher};
pub use payloads::{empty_payload, sticker_payload};
