//! Retailer sorter: CSV report in, tier-ordered JSON out.
//!
//! The crate is split into Clean Architecture layers:
//! - domain: pure, synchronous ordering rules
//! - usecase: pipeline workflows + progress events
//! - infrastructure: serde + file IO + implementations of ports
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
