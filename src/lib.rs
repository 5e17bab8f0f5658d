//! In-memory data access for multimodal routing
//!
//! Parses two flat textual sources, a delimiter-separated transit schedule
//! and an OpenStreetMap-style markup extract, into queryable entity
//! collections: a [`BusSystem`] of stops and routes, and a [`StreetMap`] of
//! nodes and ways. Both are built in a single streaming pass, indexed by
//! ordinal position and by identifier, and never mutated afterward, so a
//! loaded collection can be shared freely across threads.
//!
//! Routing, geocoding and rendering live in the layers above; this crate
//! owns parsing and indexing only.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod source;

pub use error::Error;
pub use model::{BusSystem, Node, Route, Stop, StreetMap, Way};

/// Identifier of a transit stop
pub type StopId = u64;
/// Identifier of a street-graph node
pub type NodeId = u64;
/// Identifier of a street-graph way
pub type WayId = u64;

/// Sentinel returned by [`Route::stop_id_at`] for out-of-range positions
pub const INVALID_STOP_ID: StopId = StopId::MAX;
/// Sentinel returned by [`Way::node_id_at`] for out-of-range positions
pub const INVALID_NODE_ID: NodeId = NodeId::MAX;
