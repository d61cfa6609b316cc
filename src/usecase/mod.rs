//! Usecase layer: application workflows + events.

pub mod event;
pub mod pipeline;
pub mod sort;
pub mod stats;
pub mod verify;
