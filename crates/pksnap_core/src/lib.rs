//! Save snapshot extraction library.
//!
//! Turns the per-field output of an external save-file-decoding oracle
//! into one persistence-ready snapshot of a player's progress, tolerating
//! missing or error-shaped fields where the save's generation does not
//! support them.
//!
//! The oracle boundary lives in [`oracle`]; [`pipeline::Extractor`] is the
//! single entry point: raw save bytes in, [`pipeline::Snapshot`] out.

pub mod gender;
pub mod oracle;
pub mod pipeline;
