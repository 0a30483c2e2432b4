//! This module is the data source of the dashboard pages
//!
//! Every page is seeded from mock data that is embedded in the binary. Nothing is ever written back.

use std::collections::HashMap;
use std::error::Error;

use serde::Deserialize;

use crate::chat::{ChatMessage, ChatPage, Contact};
use crate::collection::Collection;
use crate::dashboard::{AnalysisPoint, Dashboard, SalesPoint, StatCard};
use crate::event::Calendar;
use crate::file::FileManager;
use crate::inbox::Inbox;
use crate::item::ItemId;
use crate::task::TaskBoard;

static INBOX: &str = include_str!("inbox.json");
static TASKS: &str = include_str!("tasks.json");
static FILES: &str = include_str!("files.json");
static EVENTS: &str = include_str!("events.json");
static CONTACTS: &str = include_str!("contacts.json");
static CONVERSATIONS: &str = include_str!("conversations.json");
static DASHBOARD: &str = include_str!("dashboard.json");

fn parse<'a, T: Deserialize<'a>>(name: &str, source: &'a str) -> Result<T, Box<dyn Error>> {
    serde_json::from_str(source)
        .map_err(|err| format!("Invalid mock data for {}: {}", name, err).into())
}

pub fn inbox() -> Result<Inbox, Box<dyn Error>> {
    Ok(Collection::new(parse("inbox", INBOX)?))
}

pub fn tasks() -> Result<TaskBoard, Box<dyn Error>> {
    Ok(Collection::new(parse("tasks", TASKS)?))
}

pub fn files() -> Result<FileManager, Box<dyn Error>> {
    Ok(Collection::new(parse("files", FILES)?))
}

pub fn calendar() -> Result<Calendar, Box<dyn Error>> {
    Ok(Collection::new(parse("calendar", EVENTS)?))
}

pub fn chat() -> Result<ChatPage, Box<dyn Error>> {
    let contacts: Vec<Contact> = parse("chat contacts", CONTACTS)?;
    let conversations: HashMap<u64, Vec<ChatMessage>> = parse("chat conversations", CONVERSATIONS)?;

    let conversations = conversations.into_iter()
        .map(|(contact_id, messages)| (ItemId::from(contact_id), Collection::new(messages)))
        .collect();
    Ok(ChatPage::new(Collection::new(contacts), conversations))
}

#[derive(Deserialize)]
struct DashboardData {
    stats: Vec<StatCard>,
    sales: Vec<SalesPoint>,
    analysis: Vec<AnalysisPoint>,
}

pub fn dashboard() -> Result<Dashboard, Box<dyn Error>> {
    let data: DashboardData = parse("dashboard", DASHBOARD)?;
    Ok(Dashboard::new(Collection::new(data.stats), data.sales, data.analysis))
}
