// Re-export key components
pub use crate::loading::{bus_system_from_paths, bus_system_from_records, street_map_from_tags};
pub use crate::model::{BusSystem, Node, Route, Stop, StreetMap, Way};
pub use crate::source::{DsvSource, RecordSource, TagEvent, TagSource};

// Core identifier types and sentinels
pub use crate::{INVALID_NODE_ID, INVALID_STOP_ID};
pub use crate::{NodeId, StopId, WayId};
