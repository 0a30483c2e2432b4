//! Seeds every page of the dashboard, plays a short user session on them and prints the result.
//!
//! Set the RUST_LOG environment variable to see every change as it happens.

use std::error::Error;

use dashboard_views::collection::change_channel;
use dashboard_views::data;
use dashboard_views::file::FileDraft;
use dashboard_views::item::ItemId;
use dashboard_views::task::{TaskDraft, TaskStatus};
use dashboard_views::traits::Record;
use dashboard_views::utils::print_collection;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("Demo failed: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let dashboard = data::dashboard()?;
    println!("---- dashboard -----");
    for card in dashboard.stats().items() {
        println!("    {}\t{}\t{:+}% ({:?})", card.title(), card.value(), card.change(), card.trend());
    }
    let (sales, revenue) = dashboard.sales_totals();
    println!("    yearly sales {}, revenue {}", sales, revenue);

    println!("---- inbox -----");
    let mut inbox = data::inbox()?;
    let (sender, receiver) = change_channel();
    inbox.set_feedback_channel(sender);
    inbox.set_filter("unread");
    print_collection("Unread messages", &inbox);
    let unread: Vec<ItemId> = inbox.filtered_view().map(|m| m.id()).collect();
    for id in unread {
        inbox.toggle_selection(id);
    }
    let n_read = inbox.mark_selected_as_read();
    log::info!("{} message(s) marked as read. Last change: {}", n_read, *receiver.borrow());
    inbox.set_filter("all");
    print_collection("All messages", &inbox);

    println!("---- tasks -----");
    let mut board = data::tasks()?;
    board.set_status(ItemId::from(2), TaskStatus::InProgress);
    let draft = TaskDraft {
        title: "Prepare release notes".to_string(),
        due_date: "2024-04-02".to_string(),
        assignee: "Sarah Chen".to_string(),
        ..TaskDraft::default()
    };
    if let Err(err) = board.create(TaskDraft { title: String::new(), ..draft.clone() }) {
        log::info!("Rejected task: {}", err);
    }
    board.create(draft)?;
    board.set_filter(TaskStatus::InProgress.key());
    print_collection("Tasks in progress", &board);

    println!("---- files -----");
    let mut files = data::files()?;
    files.upload(FileDraft { name: "Budget 2024.xlsx".to_string(), size: 48_213 })?;
    files.toggle_starred(ItemId::from(5));
    files.search("budget");
    print_collection("Files", &files);

    println!("---- calendar -----");
    let mut calendar = data::calendar()?;
    calendar.delete_event(ItemId::from(2), |event: &dashboard_views::Event| {
        log::info!("Deleting {:?}", event.title());
        true
    });
    print_collection("Events", &calendar);

    println!("---- chat -----");
    let mut chat = data::chat()?;
    chat.select_contact(ItemId::from(2));
    chat.send_message("Thanks, looking at them now")?;
    if let Some(contact) = chat.active_contact() {
        println!("Conversation with {} ({})", contact.name(), contact.avatar());
    }
    for message in chat.messages() {
        println!("    {}\t{}: {}", message.timestamp(), message.author().name, message.content());
    }

    Ok(())
}
