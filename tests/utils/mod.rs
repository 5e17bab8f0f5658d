//! In-memory record and tag-event sources for loader tests
#![allow(dead_code)]

use viabus_data::Error;
use viabus_data::source::{RecordSource, TagEvent, TagSource};

/// Record stream over a fixed set of rows.
pub struct VecRecords(std::vec::IntoIter<Vec<String>>);

impl VecRecords {
    pub fn new(rows: &[&[&str]]) -> Self {
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|field| (*field).to_owned()).collect())
            .collect();
        Self(rows.into_iter())
    }
}

impl RecordSource for VecRecords {
    fn next_record(&mut self) -> Result<Option<Vec<String>>, Error> {
        Ok(self.0.next())
    }
}

/// Tag-event stream over a fixed set of events.
pub struct VecTags(std::vec::IntoIter<TagEvent>);

impl VecTags {
    pub fn new(events: Vec<TagEvent>) -> Self {
        Self(events.into_iter())
    }
}

impl TagSource for VecTags {
    fn next_event(&mut self) -> Result<Option<TagEvent>, Error> {
        Ok(self.0.next())
    }
}

/// Start element with attributes.
pub fn start(name: &str, attrs: &[(&str, &str)]) -> TagEvent {
    TagEvent::Start {
        name: name.to_owned(),
        attributes: attrs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect(),
    }
}

/// Matching end element.
pub fn end(name: &str) -> TagEvent {
    TagEvent::End {
        name: name.to_owned(),
    }
}
