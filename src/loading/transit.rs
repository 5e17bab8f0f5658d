//! Streaming construction of a [`BusSystem`] from schedule records

use std::path::Path;

use hashbrown::HashMap;
use log::{debug, info};

use super::parse_number;
use crate::Error;
use crate::model::{BusSystem, Route, Stop};
use crate::source::{DsvSource, RecordSource};

/// Build a [`BusSystem`] from a stop record stream and a route record
/// stream.
///
/// The first record of each stream is a header and is discarded. Records
/// with fewer than two fields are skipped. Route rows sharing a name are
/// grouped into one route while they stay contiguous; a name change starts
/// a new route.
///
/// # Errors
///
/// Returns an error if a stream fails or a numeric field cannot be parsed.
/// On error no partial system is observable.
pub fn bus_system_from_records(
    mut stops: impl RecordSource,
    mut routes: impl RecordSource,
) -> Result<BusSystem, Error> {
    let mut system = BusSystem {
        stops: Vec::new(),
        routes: Vec::new(),
        stop_index: HashMap::new(),
        route_index: HashMap::new(),
    };

    // Header row
    stops.next_record()?;

    while let Some(record) = stops.next_record()? {
        if record.len() < 2 {
            debug!("Skipping short stop record: {record:?}");
            continue;
        }
        let stop = Stop {
            id: parse_number("stop id", &record[0])?,
            node_id: parse_number("node id", &record[1])?,
        };
        system.stop_index.insert(stop.id, system.stops.len());
        system.stops.push(stop);
    }

    // Header row
    routes.next_record()?;

    let mut current: Option<usize> = None;
    while let Some(record) = routes.next_record()? {
        if record.len() < 2 {
            debug!("Skipping short route record: {record:?}");
            continue;
        }
        let name = &record[0];
        let stop_id = parse_number("stop id", &record[1])?;

        let route_idx = match current {
            Some(idx) if system.routes[idx].name == *name => idx,
            _ => {
                let idx = system.routes.len();
                system.routes.push(Route {
                    name: name.clone(),
                    stop_ids: Vec::new(),
                });
                // Re-registering an already-seen name points it at the
                // newer route; the older one stays ordinally reachable.
                system.route_index.insert(name.clone(), idx);
                current = Some(idx);
                idx
            }
        };
        system.routes[route_idx].stop_ids.push(stop_id);
    }

    info!(
        "Loaded {} stops and {} routes",
        system.stop_count(),
        system.route_count()
    );
    Ok(system)
}

/// Load a [`BusSystem`] from comma-separated stop and route files.
///
/// # Errors
///
/// Returns an error if either file cannot be opened or parsed.
pub fn bus_system_from_paths(stops_path: &Path, routes_path: &Path) -> Result<BusSystem, Error> {
    info!(
        "Loading transit schedule: stops {}, routes {}",
        stops_path.display(),
        routes_path.display()
    );

    let stops = DsvSource::from_path(stops_path)?;
    let routes = DsvSource::from_path(routes_path)?;
    bus_system_from_records(stops, routes)
}
