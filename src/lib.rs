//! Weekly marching band score report pipeline.
//!
//! Scrapes the events index for recent competitions in the target
//! states, pulls each event's schedule and score tables, reconciles
//! school locations, ranks within divisions, and maintains one CSV
//! report per week.

pub mod events;
pub mod fetch;
pub mod locations;
pub mod notify;
pub mod ranking;
pub mod roster;
pub mod scores;
pub mod storage;
pub mod types;
pub mod window;

pub use types::*;
