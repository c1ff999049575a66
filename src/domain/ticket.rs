use serde::{Deserialize, Serialize};

/// Workflow state of a ticket. Wire values match the remote payload,
/// including the lowercase "progress" in "In progress".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Backlog,
    Todo,
    #[serde(rename = "In progress")]
    InProgress,
    Done,
}

impl Status {
    /// Canonical left-to-right column order on the board.
    pub const ALL: [Status; 4] = [Status::Backlog, Status::Todo, Status::InProgress, Status::Done];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Backlog => "Backlog",
            Status::Todo => "Todo",
            Status::InProgress => "In progress",
            Status::Done => "Done",
        }
    }
}

/// Ticket priority, 0 through 4 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    NoPriority,
    Urgent,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Column order when grouping by priority: most urgent first,
    /// unprioritized work last.
    pub const BY_URGENCY: [Priority; 5] = [
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
        Priority::NoPriority,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::NoPriority => "No Priority",
            Priority::Urgent => "Urgent",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Rank used for ordering tickets within a column; lower sorts first.
    pub fn urgency_rank(&self) -> u8 {
        match self {
            Priority::Urgent => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
            Priority::NoPriority => 4,
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Priority::NoPriority),
            1 => Ok(Priority::Urgent),
            2 => Ok(Priority::High),
            3 => Ok(Priority::Medium),
            4 => Ok(Priority::Low),
            other => Err(format!("priority out of range: {other}")),
        }
    }
}

impl From<Priority> for u8 {
    fn from(value: Priority) -> Self {
        match value {
            Priority::NoPriority => 0,
            Priority::Urgent => 1,
            Priority::High => 2,
            Priority::Medium => 3,
            Priority::Low => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub status: Status,
    pub priority: Priority,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "tag", default)]
    pub tags: Vec<String>,
}

impl Ticket {
    /// First tag on the ticket, if any. Cards render it next to a marker dot.
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}
