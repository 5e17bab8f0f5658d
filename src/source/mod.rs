//! Input stream abstractions consumed by the loaders
//!
//! The record and tag-event readers are external collaborators: the loaders
//! only require something that yields parsed rows or markup events one call
//! at a time. [`DsvSource`] is the shipped record reader; markup readers are
//! supplied by the caller.

mod dsv;

pub use dsv::DsvSource;

use hashbrown::HashMap;

use crate::Error;

/// Yields one record of delimited text fields per call.
///
/// A source is consumed exactly once and is not rewound; construction of a
/// collection takes it by value.
pub trait RecordSource {
    /// Next record, or `Ok(None)` at end of stream.
    fn next_record(&mut self) -> Result<Option<Vec<String>>, Error>;
}

/// One structured event from a markup document.
#[derive(Debug, Clone, PartialEq)]
pub enum TagEvent {
    /// Opening element with its attributes
    Start {
        name: String,
        attributes: HashMap<String, String>,
    },
    /// Closing element
    End { name: String },
}

impl TagEvent {
    /// Attribute value on a start element; `None` on end elements or when
    /// the attribute is absent.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        match self {
            TagEvent::Start { attributes, .. } => attributes.get(key).map(String::as_str),
            TagEvent::End { .. } => None,
        }
    }
}

/// Yields one [`TagEvent`] per call.
pub trait TagSource {
    /// Next event, or `Ok(None)` at end of stream.
    fn next_event(&mut self) -> Result<Option<TagEvent>, Error>;
}
