//! Utilities to notify a presentation layer that a view model has changed

use std::fmt::{Display, Error, Formatter};

use crate::item::ItemId;

/// A change that happened to a collection
#[derive(Clone, Debug, PartialEq)]
pub enum Change {
    /// Nothing happened since the collection has been built
    Seeded,
    FilterChanged,
    SearchChanged,
    /// A record has been mutated in place
    RecordUpdated(ItemId),
    SelectionChanged,
    Created(ItemId),
    Removed(ItemId),
    /// A bulk action has been applied on the selection (which is now empty)
    BulkApplied{ count: usize },
}

impl Display for Change {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Change::Seeded => write!(f, "Seeded"),
            Change::FilterChanged => write!(f, "Filter changed"),
            Change::SearchChanged => write!(f, "Search changed"),
            Change::RecordUpdated(id) => write!(f, "Record {} updated", id),
            Change::SelectionChanged => write!(f, "Selection changed"),
            Change::Created(id) => write!(f, "Record {} created", id),
            Change::Removed(id) => write!(f, "Record {} removed", id),
            Change::BulkApplied{count} => write!(f, "Bulk action applied on {} record(s)", count),
        }
    }
}

impl Default for Change {
    fn default() -> Self {
        Self::Seeded
    }
}



/// See [`change_channel`]
pub type ChangeSender = tokio::sync::watch::Sender<Change>;
/// See [`change_channel`]
pub type ChangeReceiver = tokio::sync::watch::Receiver<Change>;

/// Create a feedback channel, that the presentation layer can watch to know when to re-render
pub fn change_channel() -> (ChangeSender, ChangeReceiver) {
    tokio::sync::watch::channel(Change::default())
}
