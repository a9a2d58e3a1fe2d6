//! Final game report and per-round records.

pub mod report;

pub use report::{GameReport, ResultsRecorder, RoundRecord, TeamProfiles, TurnRecord};
