//! Streaming construction of a [`StreetMap`] from markup tag events

use geo::Point;
use hashbrown::HashMap;
use log::{debug, info};

use super::parse_number;
use crate::Error;
use crate::model::{Node, StreetMap, Way};
use crate::source::{TagEvent, TagSource};

fn required<'a>(event: &'a TagEvent, element: &str, key: &str) -> Result<&'a str, Error> {
    event
        .attribute(key)
        .ok_or_else(|| Error::MissingAttribute(format!("'{key}' on <{element}>")))
}

/// Build a [`StreetMap`] from a stream of markup tag events.
///
/// Only `node`, `way`, `nd` and `tag` elements carry meaning; every other
/// element name is ignored. A `nd` outside an open way and a `tag` outside
/// an open node or way are dropped. When a node and a way are both open,
/// the node receives the tag.
///
/// # Errors
///
/// Returns an error if the stream fails, or a meaningful element is missing
/// a required attribute (`id`, `lat`, `lon`, `ref`) or carries a
/// non-numeric one. On error no partial map is observable.
pub fn street_map_from_tags(mut src: impl TagSource) -> Result<StreetMap, Error> {
    let mut map = StreetMap {
        nodes: Vec::new(),
        ways: Vec::new(),
        node_index: HashMap::new(),
        way_index: HashMap::new(),
    };

    // Cursors into the vectors, live until the matching end element
    let mut current_node: Option<usize> = None;
    let mut current_way: Option<usize> = None;

    while let Some(event) = src.next_event()? {
        match &event {
            TagEvent::Start { name, .. } => match name.as_str() {
                "node" => {
                    let id = parse_number("node id", required(&event, "node", "id")?)?;
                    let lat: f64 = parse_number("node lat", required(&event, "node", "lat")?)?;
                    let lon: f64 = parse_number("node lon", required(&event, "node", "lon")?)?;
                    let idx = map.nodes.len();
                    map.node_index.insert(id, idx);
                    map.nodes.push(Node {
                        id,
                        geometry: Point::new(lon, lat),
                        attributes: HashMap::new(),
                    });
                    current_node = Some(idx);
                }
                "way" => {
                    let id = parse_number("way id", required(&event, "way", "id")?)?;
                    let idx = map.ways.len();
                    map.way_index.insert(id, idx);
                    map.ways.push(Way {
                        id,
                        node_ids: Vec::new(),
                        attributes: HashMap::new(),
                    });
                    current_way = Some(idx);
                }
                "nd" => {
                    if let Some(idx) = current_way {
                        let node_ref = parse_number("nd ref", required(&event, "nd", "ref")?)?;
                        map.ways[idx].node_ids.push(node_ref);
                    } else {
                        debug!("Ignoring <nd> outside a way");
                    }
                }
                "tag" => {
                    let key = event.attribute("k").unwrap_or_default().to_owned();
                    let value = event.attribute("v").unwrap_or_default().to_owned();
                    if let Some(idx) = current_node {
                        map.nodes[idx].attributes.insert(key, value);
                    } else if let Some(idx) = current_way {
                        map.ways[idx].attributes.insert(key, value);
                    } else {
                        debug!("Ignoring <tag> {key}={value} outside a node or way");
                    }
                }
                _ => {}
            },
            TagEvent::End { name } => match name.as_str() {
                "node" => current_node = None,
                "way" => current_way = None,
                _ => {}
            },
        }
    }

    info!(
        "Loaded {} nodes and {} ways",
        map.node_count(),
        map.way_count()
    );
    Ok(map)
}
