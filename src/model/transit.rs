//! Transit schedule entities and their indexed owner

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{INVALID_STOP_ID, NodeId, StopId};

/// A transit boarding point, attached to a street-graph node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    /// Stop identifier from the schedule
    pub id: StopId,
    /// Street-graph node this stop is attached to
    pub node_id: NodeId,
}

/// An ordered, named sequence of stops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    /// Route name, case-sensitive
    pub name: String,
    /// Stop identifiers in traversal order; repeats are allowed and the ids
    /// are not checked against the stop collection
    pub stop_ids: Vec<StopId>,
}

impl Route {
    /// Number of stops on the route, repeats included.
    pub fn stop_count(&self) -> usize {
        self.stop_ids.len()
    }

    /// Stop identifier at `index` in traversal order, or
    /// [`INVALID_STOP_ID`] past the end.
    pub fn stop_id_at(&self, index: usize) -> StopId {
        self.stop_ids.get(index).copied().unwrap_or(INVALID_STOP_ID)
    }
}

/// All stops and routes of one loaded schedule.
///
/// Ordinal positions follow input arrival order (first-seen order for
/// routes). Lookups never fail hard: a miss is `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusSystem {
    pub(crate) stops: Vec<Stop>,
    pub(crate) routes: Vec<Route>,
    pub(crate) stop_index: HashMap<StopId, usize>,
    pub(crate) route_index: HashMap<String, usize>,
}

impl BusSystem {
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Stop at ordinal `index`, or `None` past the end.
    pub fn stop_by_index(&self, index: usize) -> Option<&Stop> {
        self.stops.get(index)
    }

    /// Stop with the given identifier, or `None` if absent.
    pub fn stop_by_id(&self, id: StopId) -> Option<&Stop> {
        self.stop_index.get(&id).map(|&idx| &self.stops[idx])
    }

    /// Route at ordinal `index`, or `None` past the end.
    pub fn route_by_index(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    /// Route registered under `name`, or `None` if absent.
    ///
    /// When the input carried the same name in non-contiguous row blocks,
    /// the most recently created route holds the name; earlier ones remain
    /// reachable by ordinal position.
    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.route_index.get(name).map(|&idx| &self.routes[idx])
    }

    /// All stops in arrival order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All routes in first-seen order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}
