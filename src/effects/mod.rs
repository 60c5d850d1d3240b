//! Time-boxed area effects

pub mod ecm;

pub use ecm::{FieldTracker, TemporaryEcmField};
