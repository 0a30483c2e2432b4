//! Inbox messages

use serde::{Deserialize, Serialize};

use crate::collection::{CategoricalFilter, Collection, Schema};
use crate::error::ValidationError;
use crate::item::{Flags, ItemId, NoStatus};
use crate::traits::{Draft, Record};
use crate::utils::initials;

/// A message in the inbox
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: ItemId,
    sender: String,
    /// Initials of the sender
    avatar: String,
    subject: String,
    preview: String,
    /// A display label, such as "10:30 AM" or "Yesterday"
    date: String,
    #[serde(default)]
    flags: Flags,
}

impl Message {
    pub fn sender(&self) -> &str  { &self.sender  }
    pub fn avatar(&self) -> &str  { &self.avatar  }
    pub fn subject(&self) -> &str { &self.subject }
    pub fn preview(&self) -> &str { &self.preview }
    pub fn date(&self) -> &str    { &self.date    }
    pub fn is_read(&self) -> bool    { self.flags.contains(Flags::READ)    }
    pub fn is_starred(&self) -> bool { self.flags.contains(Flags::STARRED) }
}

impl Record for Message {
    type Status = NoStatus;

    fn schema() -> Schema<NoStatus> {
        Schema::new()
            .require("sender")
            .require("subject")
            .flags(Flags::READ | Flags::STARRED)
            .filter("unread", CategoricalFilter::Without(Flags::READ))
            .filter("starred", CategoricalFilter::With(Flags::STARRED))
    }

    fn id(&self) -> ItemId { self.id }
    fn name(&self) -> &str { &self.subject }
    fn flags(&self) -> Flags { self.flags }
    fn set_flags(&mut self, flags: Flags) { self.flags = flags; }
}


/// The compose form of the inbox
#[derive(Clone, Debug, Default)]
pub struct MessageDraft {
    pub sender: String,
    pub subject: String,
    pub preview: String,
    pub date: String,
}

impl Draft for MessageDraft {
    type Record = Message;

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "sender" => Some(&self.sender),
            "subject" => Some(&self.subject),
            "preview" => Some(&self.preview),
            "date" => Some(&self.date),
            _ => None,
        }
    }

    fn into_record(self, id: ItemId) -> Result<Message, ValidationError> {
        let date = if self.date.is_empty() {
            chrono::Local::now().format("%I:%M %p").to_string()
        } else {
            self.date
        };

        Ok(Message {
            id,
            avatar: initials(&self.sender),
            sender: self.sender,
            subject: self.subject,
            preview: self.preview,
            date,
            flags: Flags::empty(),
        })
    }
}


/// The view model of the inbox page
pub type Inbox = Collection<Message>;

impl Collection<Message> {
    pub fn toggle_starred(&mut self, id: ItemId) -> bool {
        self.toggle_flag(id, Flags::STARRED)
    }

    /// Mark every selected message as read. This clears the selection.
    pub fn mark_selected_as_read(&mut self) -> usize {
        self.bulk_apply(|message| message.flags.insert(Flags::READ))
    }

    pub fn unread_count(&self) -> usize {
        self.items().iter().filter(|m| m.is_read() == false).count()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn inbox() -> Inbox {
        crate::data::inbox().unwrap()
    }

    #[test]
    fn unread_filter() {
        let mut inbox = inbox();
        inbox.set_filter("unread");
        let ids: Vec<u64> = inbox.filtered_view().map(|m| m.id().as_u64()).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(inbox.unread_count(), 2);
    }

    #[test]
    fn mark_selected_as_read() {
        let mut inbox = inbox();
        inbox.toggle_selection(ItemId::from(1));
        inbox.toggle_selection(ItemId::from(2));
        assert_eq!(inbox.mark_selected_as_read(), 2);

        assert!(inbox.selection().is_empty());
        assert!(inbox.get(ItemId::from(1)).unwrap().is_read());
        // Already read messages stay read
        assert!(inbox.get(ItemId::from(2)).unwrap().is_read());
        assert_eq!(inbox.unread_count(), 1);
    }

    #[test]
    fn starring_does_not_touch_selection() {
        let mut inbox = inbox();
        inbox.toggle_selection(ItemId::from(4));
        assert!(inbox.toggle_starred(ItemId::from(4)));
        assert!(inbox.get(ItemId::from(4)).unwrap().is_starred());
        assert_eq!(inbox.selection(), vec![ItemId::from(4)]);
    }

    #[test]
    fn calendar_flags_do_not_apply_to_messages() {
        let mut inbox = inbox();
        let id = ItemId::from(2);
        assert!(inbox.toggle_flag(id, Flags::ALL_DAY) == false);

        let json = serde_json::to_value(inbox.get(id).unwrap()).unwrap();
        assert_eq!(json["flags"], serde_json::json!(["read"]));
    }

    #[test]
    fn compose() {
        let mut inbox = inbox();
        let draft = MessageDraft {
            sender: "frank miller".to_string(),
            subject: "Budget".to_string(),
            date: "Mar 21".to_string(),
            ..MessageDraft::default()
        };
        let message = inbox.create(draft).unwrap();
        assert_eq!(message.id(), ItemId::from(6));
        assert_eq!(message.avatar(), "FM");
        assert!(message.is_read() == false);

        let err = inbox.create(MessageDraft::default()).unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec!["sender", "subject"]));
    }
}
