//! Tasks of the task board

use chrono::NaiveDate;
use csscolorparser::Color;
use serde::{Deserialize, Serialize};

use crate::collection::{CategoricalFilter, Collection, Schema};
use crate::error::ValidationError;
use crate::item::{Flags, ItemId};
use crate::traits::{Draft, Record};
use crate::utils::{initials, rgb};

/// Where a task stands on the board.
///
/// Any status can move to any other status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    /// Every status, in board order
    pub const ALL: [TaskStatus; 4] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Review, TaskStatus::Done];

    /// The key used in forms and filters (e.g. `in_progress`)
    pub fn key(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Review => "review",
            TaskStatus::Done => "done",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Review => "Review",
            TaskStatus::Done => "Done",
        }
    }

    /// The accent colour of this status
    pub fn color(&self) -> Color {
        match self {
            TaskStatus::Todo => rgb(0x6b, 0x72, 0x80),
            TaskStatus::InProgress => rgb(0x25, 0x63, 0xeb),
            TaskStatus::Review => rgb(0xca, 0x8a, 0x04),
            TaskStatus::Done => rgb(0x16, 0xa3, 0x4a),
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}


/// A task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: ItemId,
    title: String,
    #[serde(default)]
    description: String,
    status: TaskStatus,
    priority: Priority,
    due_date: NaiveDate,
    assignee: String,
    /// Initials of the assignee
    assignee_avatar: String,
}

impl Task {
    pub fn title(&self) -> &str           { &self.title           }
    pub fn description(&self) -> &str     { &self.description     }
    pub fn status(&self) -> TaskStatus    { self.status           }
    pub fn priority(&self) -> Priority    { self.priority         }
    pub fn due_date(&self) -> NaiveDate   { self.due_date         }
    pub fn assignee(&self) -> &str        { &self.assignee        }
    pub fn assignee_avatar(&self) -> &str { &self.assignee_avatar }
    pub fn is_done(&self) -> bool         { self.status == TaskStatus::Done }
}

impl Record for Task {
    type Status = TaskStatus;

    fn schema() -> Schema<TaskStatus> {
        TaskStatus::ALL.iter().fold(
            Schema::new()
                .require("title")
                .require("due_date")
                .require("assignee"),
            |schema, status| schema.filter(status.key(), CategoricalFilter::Status(*status))
        )
    }

    fn id(&self) -> ItemId { self.id }
    fn name(&self) -> &str { &self.title }

    fn status(&self) -> Option<TaskStatus> {
        Some(self.status)
    }

    fn set_status(&mut self, new_status: TaskStatus) {
        self.status = new_status;
    }
}


/// The "Create Task" form
#[derive(Clone, Debug)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    /// As typed in a date input, i.e. `YYYY-MM-DD`
    pub due_date: String,
    pub assignee: String,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            due_date: String::new(),
            assignee: String::new(),
        }
    }
}

impl Draft for TaskDraft {
    type Record = Task;

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "description" => Some(&self.description),
            "status" => Some(self.status.key()),
            "due_date" => Some(&self.due_date),
            "assignee" => Some(&self.assignee),
            _ => None,
        }
    }

    fn into_record(self, id: ItemId) -> Result<Task, ValidationError> {
        let due_date = NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d")
            .map_err(|err| ValidationError::invalid("due_date", format!("expected YYYY-MM-DD ({})", err)))?;

        Ok(Task {
            id,
            assignee_avatar: initials(&self.assignee),
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            due_date,
            assignee: self.assignee,
        })
    }
}


/// The view model of the task board
pub type TaskBoard = Collection<Task>;

impl Collection<Task> {
    /// How many tasks are in each status, in board order
    pub fn count_by_status(&self) -> Vec<(TaskStatus, usize)> {
        TaskStatus::ALL.iter()
            .map(|status| {
                let n = self.items().iter().filter(|t| t.status == *status).count();
                (*status, n)
            })
            .collect()
    }

    /// Tasks that are not done and are due strictly before `today`
    pub fn overdue(&self, today: NaiveDate) -> Vec<&Task> {
        self.items().iter()
            .filter(|t| t.is_done() == false && t.due_date < today)
            .collect()
    }
}
