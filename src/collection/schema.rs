use crate::collection::filter::CategoricalFilter;
use crate::item::Flags;

/// The name of the filter that lets every record through
pub const ALL_FILTER: &str = "all";

/// Per-record-type configuration of a collection
#[derive(Clone, Debug)]
pub struct Schema<S> {
    required_fields: Vec<&'static str>,
    /// The flags records of this type can carry
    flags: Flags,
    filters: Vec<(&'static str, CategoricalFilter<S>)>,
}

impl<S: Copy> Schema<S> {
    /// A schema with no required fields and no flags, that only knows the `all` filter
    pub fn new() -> Self {
        Self {
            required_fields: Vec::new(),
            flags: Flags::empty(),
            filters: vec![(ALL_FILTER, CategoricalFilter::All)],
        }
    }

    /// Require a field to be non-blank when creating a record
    pub fn require(mut self, field: &'static str) -> Self {
        self.required_fields.push(field);
        self
    }

    /// Declare flags that records of this type support. Toggling any other flag is a no-op.
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags |= flags;
        self
    }

    /// Register a named categorical filter
    pub fn filter(mut self, key: &'static str, filter: CategoricalFilter<S>) -> Self {
        match self.filters.iter().position(|(k, _)| *k == key) {
            Some(pos) => self.filters[pos].1 = filter,
            None => self.filters.push((key, filter)),
        }
        self
    }

    pub fn required_fields(&self) -> &[&'static str] {
        &self.required_fields
    }

    pub fn supported_flags(&self) -> Flags {
        self.flags
    }

    /// The filter keys, in registration order
    pub fn filter_keys(&self) -> Vec<&'static str> {
        self.filters.iter().map(|(k, _)| *k).collect()
    }

    /// Returns the filter registered under `key`, if any
    pub fn lookup_filter(&self, key: &str) -> Option<CategoricalFilter<S>> {
        self.filters.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, f)| *f)
    }

    /// Returns the key under which this filter is registered, if any
    pub fn key_of(&self, filter: &CategoricalFilter<S>) -> Option<&'static str>
    where
        S: PartialEq,
    {
        self.filters.iter()
            .find(|(_, f)| f == filter)
            .map(|(k, _)| *k)
    }
}

impl<S: Copy> Default for Schema<S> {
    fn default() -> Self {
        Self::new()
    }
}
