//! Chat contacts and conversations

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::collection::{CategoricalFilter, Collection, FilteredView, Schema};
use crate::error::ValidationError;
use crate::item::{Flags, ItemId, NoStatus};
use crate::traits::{Draft, Record};

/// Someone we can chat with
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    id: ItemId,
    name: String,
    avatar: String,
    last_message: String,
    /// A display label, such as "2m ago"
    timestamp: String,
    #[serde(default)]
    unread_count: u32,
    #[serde(default)]
    flags: Flags,
}

impl Contact {
    pub fn avatar(&self) -> &str       { &self.avatar       }
    pub fn last_message(&self) -> &str { &self.last_message }
    pub fn timestamp(&self) -> &str    { &self.timestamp    }
    pub fn unread_count(&self) -> u32  { self.unread_count  }
    pub fn is_online(&self) -> bool    { self.flags.contains(Flags::ONLINE) }
}

impl Record for Contact {
    type Status = NoStatus;

    fn schema() -> Schema<NoStatus> {
        Schema::new()
            .flags(Flags::ONLINE)
            .filter("online", CategoricalFilter::With(Flags::ONLINE))
    }

    fn id(&self) -> ItemId { self.id }
    fn name(&self) -> &str { &self.name }
    fn flags(&self) -> Flags { self.flags }
    fn set_flags(&mut self, flags: Flags) { self.flags = flags; }
}


/// Who wrote a message
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
}

/// A message of a conversation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: ItemId,
    content: String,
    timestamp: String,
    author: Author,
    /// Whether the current user wrote this message
    #[serde(default)]
    is_mine: bool,
}

impl ChatMessage {
    pub fn content(&self) -> &str   { &self.content   }
    pub fn timestamp(&self) -> &str { &self.timestamp }
    pub fn author(&self) -> &Author { &self.author    }
    pub fn is_mine(&self) -> bool   { self.is_mine    }
}

impl Record for ChatMessage {
    type Status = NoStatus;

    fn schema() -> Schema<NoStatus> {
        Schema::new().require("content")
    }

    fn id(&self) -> ItemId { self.id }
    fn name(&self) -> &str { &self.content }
}


/// The message box, signed by the current user on submission
#[derive(Clone, Debug, Default)]
pub struct ChatMessageDraft {
    pub content: String,
}

impl Draft for ChatMessageDraft {
    type Record = ChatMessage;

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "content" => Some(&self.content),
            _ => None,
        }
    }

    fn into_record(self, id: ItemId) -> Result<ChatMessage, ValidationError> {
        let (name, avatar) = crate::config::current_user();
        Ok(ChatMessage {
            id,
            content: self.content,
            timestamp: chrono::Local::now().format("%I:%M %p").to_string(),
            author: Author { name, avatar },
            is_mine: true,
        })
    }
}


/// The view model of the chat page: a list of contacts, and one conversation per contact
pub struct ChatPage {
    contacts: Collection<Contact>,
    conversations: HashMap<ItemId, Collection<ChatMessage>>,
    active: Option<ItemId>,
}

impl ChatPage {
    /// The first contact is active at first
    pub fn new(contacts: Collection<Contact>, conversations: HashMap<ItemId, Collection<ChatMessage>>) -> Self {
        let active = contacts.items().first().map(|c| c.id());
        Self { contacts, conversations, active }
    }

    pub fn contacts(&self) -> &Collection<Contact> {
        &self.contacts
    }

    /// The contacts that match the current contact search
    pub fn visible_contacts(&self) -> FilteredView<'_, Contact> {
        self.contacts.filtered_view()
    }

    pub fn search_contacts<S: Into<String>>(&mut self, term: S) {
        self.contacts.search(term);
    }

    pub fn active_contact(&self) -> Option<&Contact> {
        self.active.and_then(|id| self.contacts.get(id))
    }

    /// The conversation with the active contact
    pub fn messages(&self) -> &[ChatMessage] {
        self.active
            .and_then(|id| self.conversations.get(&id))
            .map(|conv| conv.items())
            .unwrap_or(&[])
    }

    /// Switch to the conversation with another contact.
    /// Returns `false` (and nothing changes) in case there is no such contact
    pub fn select_contact(&mut self, id: ItemId) -> bool {
        if self.contacts.contains(id) == false {
            log::trace!("Cannot open a conversation with unknown contact {}", id);
            return false;
        }
        self.active = Some(id);
        true
    }

    /// Send a message to the active contact
    pub fn send_message<S: Into<String>>(&mut self, text: S) -> Result<&ChatMessage, ValidationError> {
        let active = match self.active {
            Some(id) => id,
            None => return Err(ValidationError::invalid("contact", "no conversation is open")),
        };

        let conversation = self.conversations
            .entry(active)
            .or_insert_with(|| Collection::new(Vec::new()));
        let message = conversation.create(ChatMessageDraft{ content: text.into() })?;

        let last_message = message.content.clone();
        let timestamp = message.timestamp.clone();
        self.contacts.update(active, |contact| {
            contact.last_message = last_message;
            contact.timestamp = timestamp;
        });

        Ok(message)
    }
}
