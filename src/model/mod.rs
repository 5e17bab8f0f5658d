//! Entity collections produced by the loaders
//!
//! Each collection owns its entities outright and hands out borrowed views;
//! nothing is mutated after construction.

pub mod streets;
pub mod transit;

pub use streets::{Node, StreetMap, Way};
pub use transit::{BusSystem, Route, Stop};
