//! A filterable, selectable list of records
//!
//! A [`Collection`] is the view model behind every list or grid of the dashboard.
//! It owns the records (in display order), the active [`CategoricalFilter`], the search term and the selection set,
//! and exposes narrow mutation operations for the presentation layer to call in response to user input.
//!
//! Operations that reference an identifier that is not in the collection are silent no-ops.
//! Only [`Collection::create`] can fail.

pub mod feedback;
pub mod filter;
mod schema;

use std::collections::HashSet;

pub use feedback::{change_channel, Change, ChangeReceiver, ChangeSender};
pub use filter::{CategoricalFilter, FilteredView};
pub use schema::{Schema, ALL_FILTER};

use crate::error::ValidationError;
use crate::item::{Flags, ItemId};
use crate::traits::{Confirm, Draft, Record};


/// The view model of a list of records
pub struct Collection<R: Record> {
    schema: Schema<R::Status>,
    items: Vec<R>,

    filter: CategoricalFilter<R::Status>,
    search_term: String,
    selection: HashSet<ItemId>,

    /// The next identifier to hand out. This only ever grows.
    /// `None` once every identifier has been used.
    next_id: Option<u64>,
    feedback_channel: Option<ChangeSender>,
}

impl<R: Record> Collection<R> {
    /// Create a collection that uses the default schema of its record type
    pub fn new(items: Vec<R>) -> Self {
        Self::with_schema(R::schema(), items)
    }

    /// Create a collection with a custom schema.
    ///
    /// In case several records share an identifier, only the first one is kept.
    pub fn with_schema(schema: Schema<R::Status>, mut items: Vec<R>) -> Self {
        let mut seen = HashSet::new();
        items.retain(|item| {
            let is_new = seen.insert(item.id());
            if is_new == false {
                log::warn!("Duplicate record {} in seed data. Ignoring it", item.id());
            }
            is_new
        });

        let next_id = match items.iter().map(|item| item.id().as_u64()).max() {
            None => Some(1),
            Some(max) => max.checked_add(1),
        };
        if next_id.is_none() {
            log::warn!("Seed data uses the last possible identifier. No record can be created");
        }

        Self {
            schema,
            items,
            filter: CategoricalFilter::All,
            search_term: String::new(),
            selection: HashSet::new(),
            next_id,
            feedback_channel: None,
        }
    }

    /// Every change will be sent to this channel from now on
    pub fn set_feedback_channel(&mut self, channel: ChangeSender) {
        self.feedback_channel = Some(channel);
    }

    fn feedback(&self, change: Change) {
        log::debug!("{}", change);
        self.feedback_channel
            .as_ref()
            .map(|sender| {
                sender.send(change)
            });
    }


    pub fn schema(&self) -> &Schema<R::Status> { &self.schema }
    /// All records, in display order, regardless of the current filter
    pub fn items(&self) -> &[R]                { &self.items }
    pub fn len(&self) -> usize                 { self.items.len() }
    pub fn is_empty(&self) -> bool             { self.items.is_empty() }
    pub fn filter(&self) -> CategoricalFilter<R::Status> { self.filter }
    pub fn search_term(&self) -> &str          { &self.search_term }

    pub fn get(&self, id: ItemId) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn get_mut(&mut self, id: ItemId) -> Option<&mut R> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }


    /// Select the categorical filter registered under `key` in the schema.
    /// Unknown keys select `all`.
    pub fn set_filter(&mut self, key: &str) {
        let filter = match self.schema.lookup_filter(key) {
            Some(f) => f,
            None => {
                log::warn!("Unknown filter {:?}, showing all records", key);
                CategoricalFilter::All
            },
        };
        self.set_categorical_filter(filter);
    }

    pub fn set_categorical_filter(&mut self, filter: CategoricalFilter<R::Status>) {
        if self.filter != filter {
            self.filter = filter;
            self.feedback(Change::FilterChanged);
        }
    }

    /// The key of the current filter, if it is registered in the schema
    pub fn filter_key(&self) -> Option<&'static str> {
        self.schema.key_of(&self.filter)
    }

    /// Set the search term. A non-empty term overrides the categorical filter.
    pub fn search<S: Into<String>>(&mut self, term: S) {
        let term = term.into();
        if self.search_term != term {
            self.search_term = term;
            self.feedback(Change::SearchChanged);
        }
    }

    /// The records that should currently be displayed
    pub fn filtered_view(&self) -> FilteredView<'_, R> {
        FilteredView::new(&self.items, &self.search_term, self.filter)
    }


    /// Invert one (or several) flags of a record.
    /// Flags the schema does not declare are left untouched.
    ///
    /// Returns `false` in case there is no such record, or nothing has changed
    pub fn toggle_flag(&mut self, id: ItemId, flag: Flags) -> bool {
        let supported = self.schema.supported_flags();
        if supported.contains(flag) == false {
            log::trace!("Flags {:?} are not supported, only {:?} are", flag, supported);
        }

        match self.get_mut(id) {
            None => {
                log::trace!("Cannot toggle flags {:?}: no record {}", flag, id);
                false
            },
            Some(record) => {
                let before = record.flags();
                record.set_flags(before ^ (flag & supported));
                if record.flags() == before {
                    return false;
                }
                self.feedback(Change::RecordUpdated(id));
                true
            }
        }
    }

    /// Overwrite the status of a record. Any status can move to any other status.
    /// Returns `false` in case there is no such record
    pub fn set_status(&mut self, id: ItemId, new_status: R::Status) -> bool {
        match self.get_mut(id) {
            None => {
                log::trace!("Cannot set status {:?}: no record {}", new_status, id);
                false
            },
            Some(record) => {
                record.set_status(new_status);
                self.feedback(Change::RecordUpdated(id));
                true
            }
        }
    }

    /// Apply an arbitrary in-place change to a record.
    /// `change` must not alter the identifier of the record.
    ///
    /// Returns `false` in case there is no such record
    pub fn update<F>(&mut self, id: ItemId, change: F) -> bool
    where
        F: FnOnce(&mut R),
    {
        match self.get_mut(id) {
            None => {
                log::trace!("Cannot update: no record {}", id);
                false
            },
            Some(record) => {
                change(record);
                let new_id = record.id();
                if new_id != id {
                    self.identifier_changed(id, new_id);
                }
                self.feedback(Change::RecordUpdated(new_id));
                true
            }
        }
    }


    /// The selected identifiers, in display order
    pub fn selection(&self) -> Vec<ItemId> {
        self.items.iter()
            .map(|item| item.id())
            .filter(|id| self.selection.contains(id))
            .collect()
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selection.contains(&id)
    }

    /// Add a record to the selection, or remove it if it was selected already.
    /// Identifiers that are not in the collection are ignored.
    pub fn toggle_selection(&mut self, id: ItemId) -> bool {
        if self.contains(id) == false {
            log::trace!("Cannot select {}: no such record", id);
            return false;
        }

        if self.selection.remove(&id) == false {
            self.selection.insert(id);
        }
        self.feedback(Change::SelectionChanged);
        true
    }

    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() == false {
            self.selection.clear();
            self.feedback(Change::SelectionChanged);
        }
    }

    /// Apply `operation` on every selected record, then clear the selection.
    /// Like in [`Self::update`], `operation` must not alter identifiers.
    ///
    /// Returns the number of records the operation has been applied on.
    pub fn bulk_apply<F>(&mut self, mut operation: F) -> usize
    where
        F: FnMut(&mut R),
    {
        let mut count = 0;
        let mut changed_ids = Vec::new();
        for item in self.items.iter_mut() {
            let id = item.id();
            if self.selection.contains(&id) {
                operation(item);
                count += 1;
                if item.id() != id {
                    changed_ids.push((id, item.id()));
                }
            }
        }
        self.selection.clear();
        for (old_id, new_id) in changed_ids {
            self.identifier_changed(old_id, new_id);
        }
        self.feedback(Change::BulkApplied{ count });
        count
    }


    /// Keeps the selection and the identifier counter consistent after a record has been given another identifier
    fn identifier_changed(&mut self, old_id: ItemId, new_id: ItemId) {
        log::warn!("Record {} has been given identifier {}. Identifiers are not supposed to change", old_id, new_id);
        if self.selection.remove(&old_id) {
            self.selection.insert(new_id);
        }
        if let Some(next) = self.next_id {
            if new_id.as_u64() >= next {
                self.next_id = new_id.as_u64().checked_add(1);
            }
        }
    }


    /// Create a new record from a form, and append it at the end of the collection.
    ///
    /// This fails (and nothing changes, not even the identifier counter) if a field required by the schema is blank,
    /// or if the draft rejects one of its values.
    pub fn create<D>(&mut self, draft: D) -> Result<&R, ValidationError>
    where
        D: Draft<Record = R>,
    {
        let missing: Vec<&'static str> = self.schema.required_fields().iter()
            .copied()
            .filter(|field| match draft.field(field) {
                None => true,
                Some(value) => value.trim().is_empty(),
            })
            .collect();
        if missing.is_empty() == false {
            log::debug!("Rejecting a new record: missing {:?}", missing);
            return Err(ValidationError::MissingFields(missing));
        }

        let id = match self.next_id {
            Some(next) => ItemId::from(next),
            None => {
                log::warn!("Rejecting a new record: every identifier has been used");
                return Err(ValidationError::IdentifiersExhausted);
            },
        };
        let record = draft.into_record(id)?;
        self.next_id = id.as_u64().checked_add(1);

        self.items.push(record);
        self.feedback(Change::Created(id));
        Ok(&self.items[self.items.len() - 1])
    }

    /// Remove a record, once `confirm` has agreed to it.
    /// The record is removed from the selection as well.
    ///
    /// Returns `true` in case a record has actually been removed
    pub fn remove<C>(&mut self, id: ItemId, mut confirm: C) -> bool
    where
        C: Confirm<R>,
    {
        let position = match self.items.iter().position(|item| item.id() == id) {
            None => {
                log::trace!("Cannot remove: no record {}", id);
                return false;
            },
            Some(pos) => pos,
        };

        if confirm.confirm(&self.items[position]) == false {
            log::debug!("Removal of {} has not been confirmed", id);
            return false;
        }

        self.items.remove(position);
        self.selection.remove(&id);
        self.feedback(Change::Removed(id));
        true
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Stage { Open, Closed }

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: ItemId,
        name: String,
        flags: Flags,
        stage: Stage,
    }

    fn note(id: u64, name: &str, flags: Flags) -> Note {
        Note { id: ItemId::from(id), name: name.to_string(), flags, stage: Stage::Open }
    }

    impl Record for Note {
        type Status = Stage;

        fn schema() -> Schema<Stage> {
            Schema::new()
                .require("name")
                .flags(Flags::READ | Flags::STARRED)
                .filter("unread", CategoricalFilter::Without(Flags::READ))
                .filter("starred", CategoricalFilter::With(Flags::STARRED))
                .filter("closed", CategoricalFilter::Status(Stage::Closed))
        }

        fn id(&self) -> ItemId { self.id }
        fn name(&self) -> &str { &self.name }
        fn flags(&self) -> Flags { self.flags }
        fn set_flags(&mut self, flags: Flags) { self.flags = flags }
        fn status(&self) -> Option<Stage> { Some(self.stage) }
        fn set_status(&mut self, new_status: Stage) { self.stage = new_status }
    }

    struct NoteDraft {
        name: String,
    }

    impl Draft for NoteDraft {
        type Record = Note;

        fn field(&self, name: &str) -> Option<&str> {
            match name {
                "name" => Some(&self.name),
                _ => None,
            }
        }

        fn into_record(self, id: ItemId) -> Result<Note, ValidationError> {
            if self.name == "forbidden" {
                return Err(ValidationError::invalid("name", "this name is forbidden"));
            }
            Ok(Note { id, name: self.name, flags: Flags::empty(), stage: Stage::Open })
        }
    }

    fn sample() -> Collection<Note> {
        Collection::new(vec![
            note(1, "Quarterly report", Flags::empty()),
            note(2, "Design review", Flags::READ),
            note(3, "Client feedback", Flags::READ | Flags::STARRED),
        ])
    }

    fn visible_ids(coll: &Collection<Note>) -> Vec<u64> {
        coll.filtered_view().map(|n| n.id().as_u64()).collect()
    }

    #[test]
    fn default_view_shows_everything_in_order() {
        let coll = sample();
        assert_eq!(visible_ids(&coll), vec![1, 2, 3]);
        assert_eq!(coll.filter_key(), Some(ALL_FILTER));
    }

    #[test]
    fn categorical_filters() {
        let mut coll = sample();
        coll.set_filter("unread");
        assert_eq!(visible_ids(&coll), vec![1]);

        coll.set_filter("starred");
        assert_eq!(visible_ids(&coll), vec![3]);

        coll.set_status(ItemId::from(2), Stage::Closed);
        coll.set_filter("closed");
        assert_eq!(visible_ids(&coll), vec![2]);

        coll.set_filter("does-not-exist");
        assert_eq!(coll.filter(), CategoricalFilter::All);
        assert_eq!(visible_ids(&coll), vec![1, 2, 3]);
    }

    #[test]
    fn search_takes_precedence() {
        let mut coll = sample();
        coll.set_filter("starred");
        coll.search("REVIEW");
        assert_eq!(visible_ids(&coll), vec![2]);

        coll.search("");
        assert_eq!(visible_ids(&coll), vec![3]);
    }

    #[test]
    fn filtered_view_is_restartable() {
        let mut coll = sample();
        coll.set_filter("unread");
        let view = coll.filtered_view();
        let first: Vec<_> = view.clone().collect();
        let second: Vec<_> = view.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn toggle_flag_is_an_involution() {
        let mut coll = sample();
        let id = ItemId::from(1);
        assert!(coll.toggle_flag(id, Flags::STARRED));
        assert!(coll.get(id).unwrap().flags().contains(Flags::STARRED));
        assert!(coll.toggle_flag(id, Flags::STARRED));
        assert_eq!(coll.get(id).unwrap(), &note(1, "Quarterly report", Flags::empty()));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut coll = sample();
        coll.toggle_selection(ItemId::from(1));
        let before: Vec<Note> = coll.items().to_vec();

        let unknown = ItemId::from(99);
        assert!(coll.toggle_flag(unknown, Flags::READ) == false);
        assert!(coll.set_status(unknown, Stage::Closed) == false);
        assert!(coll.toggle_selection(unknown) == false);
        assert!(coll.update(unknown, |n| n.name.clear()) == false);

        assert_eq!(coll.items(), before.as_slice());
        assert_eq!(coll.selection(), vec![ItemId::from(1)]);
    }

    #[test]
    fn selection() {
        let mut coll = sample();
        coll.toggle_selection(ItemId::from(3));
        coll.toggle_selection(ItemId::from(1));
        assert_eq!(coll.selection(), vec![ItemId::from(1), ItemId::from(3)]);

        coll.toggle_selection(ItemId::from(3));
        assert_eq!(coll.selection(), vec![ItemId::from(1)]);

        coll.clear_selection();
        assert!(coll.selection().is_empty());
    }

    #[test]
    fn bulk_apply_clears_selection() {
        let mut coll = sample();
        coll.toggle_selection(ItemId::from(1));
        coll.toggle_selection(ItemId::from(2));

        let count = coll.bulk_apply(|n| n.flags.insert(Flags::READ));
        assert_eq!(count, 2);
        assert!(coll.selection().is_empty());
        assert!(coll.items().iter().all(|n| n.flags().contains(Flags::READ)));

        assert_eq!(coll.bulk_apply(|n| n.flags.remove(Flags::READ)), 0);
        assert!(coll.items().iter().all(|n| n.flags().contains(Flags::READ)));
    }

    #[test]
    fn create() {
        let mut coll = sample();
        let created = coll.create(NoteDraft{ name: "Weekly sync".to_string() }).unwrap();
        assert_eq!(created.id(), ItemId::from(4));
        assert_eq!(coll.len(), 4);
        assert_eq!(coll.items().last().unwrap().name(), "Weekly sync");

        let err = coll.create(NoteDraft{ name: "   ".to_string() }).unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec!["name"]));
        assert_eq!(coll.len(), 4);

        assert!(coll.create(NoteDraft{ name: "forbidden".to_string() }).is_err());
        assert_eq!(coll.len(), 4);

        // Rejections do not consume identifiers
        let created = coll.create(NoteDraft{ name: "Retro".to_string() }).unwrap();
        assert_eq!(created.id(), ItemId::from(5));
    }

    #[test]
    fn remove_requires_confirmation_and_prunes_selection() {
        let mut coll = sample();
        let id = ItemId::from(3);
        coll.toggle_selection(id);

        assert!(coll.remove(id, |_: &Note| false) == false);
        assert_eq!(coll.len(), 3);
        assert!(coll.is_selected(id));

        assert!(coll.remove(id, |n: &Note| n.name() == "Client feedback"));
        assert_eq!(coll.len(), 2);
        assert!(coll.is_selected(id) == false);
        assert!(coll.selection().is_empty());

        // Identifiers are never reused
        let created = coll.create(NoteDraft{ name: "New".to_string() }).unwrap();
        assert_eq!(created.id(), ItemId::from(4));
        assert!(coll.remove(ItemId::from(4), |_: &Note| true));
        let created = coll.create(NoteDraft{ name: "Newer".to_string() }).unwrap();
        assert_eq!(created.id(), ItemId::from(5));
    }

    #[test]
    fn duplicate_seed_ids_are_dropped() {
        let coll = Collection::new(vec![
            note(7, "first", Flags::empty()),
            note(7, "second", Flags::empty()),
        ]);
        assert_eq!(coll.len(), 1);
        assert_eq!(coll.items()[0].name(), "first");
    }

    #[test]
    fn identifiers_do_not_overflow() {
        let mut coll = Collection::new(vec![
            note(u64::MAX - 1, "almost last", Flags::empty()),
        ]);
        let created = coll.create(NoteDraft{ name: "last".to_string() }).unwrap();
        assert_eq!(created.id(), ItemId::from(u64::MAX));

        let err = coll.create(NoteDraft{ name: "one too many".to_string() }).unwrap_err();
        assert_eq!(err, ValidationError::IdentifiersExhausted);
        assert_eq!(coll.len(), 2);

        let mut coll = Collection::new(vec![note(u64::MAX, "last", Flags::empty())]);
        assert!(coll.create(NoteDraft{ name: "New".to_string() }).is_err());
        assert_eq!(coll.len(), 1);
    }

    #[test]
    fn unsupported_flags_are_not_toggled() {
        let mut coll = sample();
        let (sender, receiver) = change_channel();
        coll.set_feedback_channel(sender);

        let id = ItemId::from(1);
        assert!(coll.toggle_flag(id, Flags::ALL_DAY) == false);
        assert_eq!(coll.get(id).unwrap().flags(), Flags::empty());
        assert_eq!(*receiver.borrow(), Change::Seeded);

        // Supported flags in the same toggle are still applied
        assert!(coll.toggle_flag(id, Flags::STARRED | Flags::ONLINE));
        assert_eq!(coll.get(id).unwrap().flags(), Flags::STARRED);
        assert_eq!(*receiver.borrow(), Change::RecordUpdated(id));
    }

    #[test]
    fn changed_identifiers_stay_consistent() {
        let mut coll = sample();
        coll.toggle_selection(ItemId::from(2));
        assert!(coll.update(ItemId::from(2), |n| n.id = ItemId::from(42)));
        assert_eq!(coll.selection(), vec![ItemId::from(42)]);

        coll.toggle_selection(ItemId::from(1));
        assert_eq!(coll.bulk_apply(|n| if n.id == ItemId::from(1) { n.id = ItemId::from(50) }), 2);

        let created = coll.create(NoteDraft{ name: "Weekly sync".to_string() }).unwrap();
        assert_eq!(created.id(), ItemId::from(51));
    }

    #[test]
    fn feedback_channel() {
        let mut coll = sample();
        let (sender, receiver) = change_channel();
        coll.set_feedback_channel(sender);
        assert_eq!(*receiver.borrow(), Change::Seeded);

        coll.toggle_flag(ItemId::from(2), Flags::STARRED);
        assert_eq!(*receiver.borrow(), Change::RecordUpdated(ItemId::from(2)));

        coll.toggle_selection(ItemId::from(2));
        coll.bulk_apply(|_| ());
        assert_eq!(*receiver.borrow(), Change::BulkApplied{ count: 1 });

        // No-ops do not notify
        coll.set_filter(ALL_FILTER);
        assert_eq!(*receiver.borrow(), Change::BulkApplied{ count: 1 });
    }
}
