//! Categorical filters, and the filtered view of a collection

use std::slice;

use crate::item::Flags;
use crate::traits::Record;


/// Tells which records should be displayed when no search is active
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CategoricalFilter<S> {
    /// Return all records
    All,
    /// Return only records that have all these flags set
    With(Flags),
    /// Return only records that have none of these flags set
    Without(Flags),
    /// Return only records in this status
    Status(S),
}

impl<S> Default for CategoricalFilter<S> {
    fn default() -> Self {
        CategoricalFilter::All
    }
}

impl<S: Copy + PartialEq> CategoricalFilter<S> {
    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Record<Status = S>,
    {
        match self {
            CategoricalFilter::All => true,
            CategoricalFilter::With(flags) => record.flags().contains(*flags),
            CategoricalFilter::Without(flags) => (record.flags() & *flags).is_empty(),
            CategoricalFilter::Status(status) => record.status() == Some(*status),
        }
    }
}


enum Criterion<S> {
    /// Lowercased search term
    Search(String),
    Category(CategoricalFilter<S>),
}

impl<S: Copy> Clone for Criterion<S> {
    fn clone(&self) -> Self {
        match self {
            Criterion::Search(needle) => Criterion::Search(needle.clone()),
            Criterion::Category(filter) => Criterion::Category(*filter),
        }
    }
}


/// A lazy iterator over the records of a collection that are currently visible.
///
/// Records come in the order of the underlying collection. This can be cloned to restart the iteration.
pub struct FilteredView<'a, R: Record> {
    items: slice::Iter<'a, R>,
    criterion: Criterion<R::Status>,
}

impl<'a, R: Record> FilteredView<'a, R> {
    /// A non-empty `search_term` takes precedence over `filter`
    pub(crate) fn new(items: &'a [R], search_term: &str, filter: CategoricalFilter<R::Status>) -> Self {
        let criterion = if search_term.is_empty() {
            Criterion::Category(filter)
        } else {
            Criterion::Search(search_term.to_lowercase())
        };
        Self { items: items.iter(), criterion }
    }

    fn is_visible(&self, record: &R) -> bool {
        match &self.criterion {
            Criterion::Search(needle) => record.name().to_lowercase().contains(needle.as_str()),
            Criterion::Category(filter) => filter.matches(record),
        }
    }
}

impl<'a, R: Record> Clone for FilteredView<'a, R> {
    fn clone(&self) -> Self {
        Self { items: self.items.clone(), criterion: self.criterion.clone() }
    }
}

impl<'a, R: Record> Iterator for FilteredView<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<&'a R> {
        while let Some(record) = self.items.next() {
            if self.is_visible(record) {
                return Some(record);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}
