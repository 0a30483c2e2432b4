//! Calendar events

use chrono::{Duration, NaiveDate, NaiveDateTime};
use csscolorparser::Color;
use serde::{Deserialize, Serialize};

use crate::collection::{CategoricalFilter, Collection, Schema};
use crate::error::ValidationError;
use crate::item::{Flags, ItemId, NoStatus};
use crate::traits::{Confirm, Draft, Record};
use crate::utils::rgb;

/// A calendar event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: ItemId,
    title: String,
    start: NaiveDateTime,
    /// For all-day events, this is exclusive (an event on March 22nd ends on March 23rd, 00:00)
    end: NaiveDateTime,
    color: Color,
    #[serde(default)]
    flags: Flags,
}

impl Event {
    pub fn title(&self) -> &str          { &self.title }
    pub fn start(&self) -> NaiveDateTime { self.start  }
    pub fn end(&self) -> NaiveDateTime   { self.end    }
    pub fn color(&self) -> &Color        { &self.color }
    pub fn is_all_day(&self) -> bool     { self.flags.contains(Flags::ALL_DAY) }

    /// The last day this event covers
    pub fn last_day(&self) -> NaiveDate {
        if self.is_all_day() && self.end > self.start {
            (self.end - Duration::seconds(1)).date()
        } else {
            self.end.date()
        }
    }

    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        self.start.date() <= day && day <= self.last_day()
    }
}

impl Record for Event {
    type Status = NoStatus;

    fn schema() -> Schema<NoStatus> {
        Schema::new()
            .require("title")
            .flags(Flags::ALL_DAY)
            .filter("all_day", CategoricalFilter::With(Flags::ALL_DAY))
    }

    fn id(&self) -> ItemId { self.id }
    fn name(&self) -> &str { &self.title }
    fn flags(&self) -> Flags { self.flags }
    fn set_flags(&mut self, flags: Flags) { self.flags = flags; }
}


/// The "Add Event" form
#[derive(Clone, Debug)]
pub struct EventDraft {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    pub color: Color,
}

impl EventDraft {
    /// The colour new events get unless the user picks another one
    pub fn default_color() -> Color {
        rgb(0xec, 0x48, 0x99)
    }
}

impl Draft for EventDraft {
    type Record = Event;

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            _ => None,
        }
    }

    fn into_record(self, id: ItemId) -> Result<Event, ValidationError> {
        if self.end < self.start {
            return Err(ValidationError::invalid("end", "an event cannot end before it starts"));
        }

        let flags = if self.all_day { Flags::ALL_DAY } else { Flags::empty() };
        Ok(Event {
            id,
            title: self.title,
            start: self.start,
            end: self.end,
            color: self.color,
            flags,
        })
    }
}


/// The view model of the calendar page
pub type Calendar = Collection<Event>;

impl Collection<Event> {
    /// Prepare the creation form after the user has selected a time range in the calendar grid.
    ///
    /// The grid reports an exclusive end, the form shows an inclusive one: one minute is taken off the end.
    pub fn draft_from_selection(start: NaiveDateTime, end: NaiveDateTime, all_day: bool) -> EventDraft {
        EventDraft {
            title: String::new(),
            start,
            end: end - Duration::minutes(1),
            all_day,
            color: EventDraft::default_color(),
        }
    }

    /// The events that cover (part of) a given day, in list order
    pub fn events_on(&self, day: NaiveDate) -> Vec<&Event> {
        self.items().iter()
            .filter(|event| event.occurs_on(day))
            .collect()
    }

    /// Delete an event, after the user has confirmed it
    pub fn delete_event<C>(&mut self, id: ItemId, confirm: C) -> bool
    where
        C: Confirm<Event>,
    {
        self.remove(id, confirm)
    }
}
