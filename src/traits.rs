use std::fmt::Debug;

use crate::collection::Schema;
use crate::error::ValidationError;
use crate::item::{Flags, ItemId};

/// A record that can be displayed, filtered and mutated by a [`Collection`](crate::collection::Collection)
pub trait Record {
    /// The closed set of statuses this kind of record can be in.
    /// Use [`NoStatus`](crate::item::NoStatus) for records that have no status.
    type Status: Copy + PartialEq + Debug;

    /// The per-type configuration (required fields, named filters)
    fn schema() -> Schema<Self::Status>;

    fn id(&self) -> ItemId;
    /// The display name, which is what searches are matched against
    fn name(&self) -> &str;

    fn flags(&self) -> Flags {
        Flags::empty()
    }
    /// Records that have no flags ignore this
    fn set_flags(&mut self, _flags: Flags) {}

    fn status(&self) -> Option<Self::Status> {
        None
    }
    /// Records that have no status ignore this
    fn set_status(&mut self, _new_status: Self::Status) {}
}

/// The content of a creation form, before it becomes a record
pub trait Draft {
    type Record: Record;

    /// Returns the raw value of a form field, if this draft has such a field
    fn field(&self, name: &str) -> Option<&str>;

    /// Build the record.
    /// This is only called once every required field is known to be non-blank. It may still reject malformed values.
    fn into_record(self, id: ItemId) -> Result<Self::Record, ValidationError>;
}

/// An external confirmation step (e.g. a "are you sure?" dialog)
pub trait Confirm<R> {
    fn confirm(&mut self, record: &R) -> bool;
}

impl<R, F> Confirm<R> for F
where
    F: FnMut(&R) -> bool,
{
    fn confirm(&mut self, record: &R) -> bool {
        self(record)
    }
}
