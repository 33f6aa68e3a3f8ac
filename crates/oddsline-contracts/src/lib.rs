// Public contracts for the Oddsline API
// This crate defines the Event DTOs, the outcome status enumeration,
// and the wire formats (deadline strings, odds constraints) shared by
// the storage and HTTP layers.

pub mod event;

pub use event::*;
