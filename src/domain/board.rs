use std::collections::HashMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::ticket::{Priority, Status, Ticket};
use crate::domain::user::{User, UserDirectory};

/// The single response body the remote endpoint returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardPayload {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub users: Vec<User>,
}

/// Field used to bucket tickets into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupingOption {
    Status,
    User,
    Priority,
}

impl GroupingOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupingOption::Status => "status",
            GroupingOption::User => "user",
            GroupingOption::Priority => "priority",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "status" => Some(GroupingOption::Status),
            "user" => Some(GroupingOption::User),
            "priority" => Some(GroupingOption::Priority),
            _ => None,
        }
    }
}

/// Ordering applied to tickets within each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOption {
    Priority,
    Title,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Priority => "priority",
            SortOption::Title => "title",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "priority" => Some(SortOption::Priority),
            "title" => Some(SortOption::Title),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKey {
    Status(Status),
    User(String),
    Priority(Priority),
}

#[derive(Debug, Clone)]
pub struct Column {
    pub key: ColumnKey,
    pub tickets: Vec<Ticket>,
}

/// Buckets tickets into columns for the chosen grouping and orders each
/// column with the chosen sort. Column order is deterministic: statuses in
/// workflow order (all four present even when empty), priorities by urgency
/// (empty ones omitted), users alphabetically with unresolved ids last.
pub fn build_columns(
    tickets: &[Ticket],
    directory: &UserDirectory,
    grouping: GroupingOption,
    ordering: SortOption,
) -> Vec<Column> {
    let mut columns: Vec<Column> = match grouping {
        GroupingOption::Status => {
            Status::ALL
                .iter()
                .map(|status| Column {
                    key: ColumnKey::Status(*status),
                    tickets: tickets
                        .iter()
                        .filter(|ticket| ticket.status == *status)
                        .cloned()
                        .collect(),
                })
                .collect()
        }
        GroupingOption::Priority => {
            Priority::BY_URGENCY
                .iter()
                .filter_map(|priority| {
                    let bucket: Vec<Ticket> = tickets
                        .iter()
                        .filter(|ticket| ticket.priority == *priority)
                        .cloned()
                        .collect();
                    if bucket.is_empty() {
                        None
                    } else {
                        Some(Column {
                            key: ColumnKey::Priority(*priority),
                            tickets: bucket,
                        })
                    }
                })
                .collect()
        }
        GroupingOption::User => {
            let mut buckets: HashMap<&str, Vec<Ticket>> = HashMap::new();
            for ticket in tickets {
                buckets
                    .entry(ticket.user_id.as_str())
                    .or_default()
                    .push(ticket.clone());
            }
            let mut user_ids: Vec<String> = buckets.keys().map(|id| id.to_string()).collect();
            user_ids.sort_by_key(|id| {
                let known = directory.get(id).is_some();
                (
                    !known,
                    directory.display_name(id).to_lowercase(),
                    id.clone(),
                )
            });
            user_ids
                .into_iter()
                .map(|id| {
                    let tickets = buckets.remove(id.as_str()).unwrap_or_default();
                    Column {
                        key: ColumnKey::User(id),
                        tickets,
                    }
                })
                .collect()
        }
    };

    for column in &mut columns {
        sort_tickets(&mut column.tickets, ordering);
    }
    columns
}

fn sort_tickets(tickets: &mut [Ticket], ordering: SortOption) {
    match ordering {
        SortOption::Priority => {
            tickets.sort_by_key(|ticket| ticket.priority.urgency_rank());
        }
        SortOption::Title => {
            tickets.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::User;

    fn ticket(id: &str, title: &str, status: Status, priority: Priority, user_id: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: title.to_string(),
            status,
            priority,
            user_id: user_id.to_string(),
            tags: vec!["Feature Request".to_string()],
        }
    }

    fn sample_board() -> (Vec<Ticket>, Vec<User>) {
        let tickets = vec![
            ticket("CAM-1", "Update profile page", Status::Todo, Priority::Low, "usr-1"),
            ticket("CAM-2", "Add multi-language support", Status::InProgress, Priority::Urgent, "usr-2"),
            ticket("CAM-3", "Optimize database queries", Status::Todo, Priority::High, "usr-1"),
            ticket("CAM-4", "Fix payment gateway", Status::Done, Priority::Urgent, "usr-3"),
            ticket("CAM-5", "Create onboarding tutorial", Status::Backlog, Priority::NoPriority, "usr-9"),
        ];
        let users = vec![
            User { id: "usr-1".to_string(), name: "Anoop".to_string(), available: true },
            User { id: "usr-2".to_string(), name: "yogesh".to_string(), available: false },
            User { id: "usr-3".to_string(), name: "Brahm".to_string(), available: true },
        ];
        (tickets, users)
    }

    #[test]
    fn status_grouping_shows_all_columns_in_workflow_order() {
        let (tickets, users) = sample_board();
        let directory = UserDirectory::new(&users);
        let columns = build_columns(&tickets, &directory, GroupingOption::Status, SortOption::Priority);

        let keys: Vec<_> = columns.iter().map(|c| c.key.clone()).collect();
        assert_eq!(
            keys,
            vec![
                ColumnKey::Status(Status::Backlog),
                ColumnKey::Status(Status::Todo),
                ColumnKey::Status(Status::InProgress),
                ColumnKey::Status(Status::Done),
            ]
        );
        assert_eq!(columns[1].tickets.len(), 2);
    }

    #[test]
    fn status_grouping_keeps_empty_columns() {
        let (mut tickets, users) = sample_board();
        tickets.retain(|t| t.status == Status::Todo);
        let directory = UserDirectory::new(&users);
        let columns = build_columns(&tickets, &directory, GroupingOption::Status, SortOption::Priority);
        assert_eq!(columns.len(), 4);
        assert!(columns[0].tickets.is_empty());
        assert!(columns[3].tickets.is_empty());
    }

    #[test]
    fn priority_grouping_orders_by_urgency_and_omits_empty() {
        let (tickets, users) = sample_board();
        let directory = UserDirectory::new(&users);
        let columns = build_columns(&tickets, &directory, GroupingOption::Priority, SortOption::Title);

        let keys: Vec<_> = columns.iter().map(|c| c.key.clone()).collect();
        assert_eq!(
            keys,
            vec![
                ColumnKey::Priority(Priority::Urgent),
                ColumnKey::Priority(Priority::High),
                ColumnKey::Priority(Priority::Low),
                ColumnKey::Priority(Priority::NoPriority),
            ]
        );
        // No Medium tickets in the sample, so no Medium column.
        assert!(!keys.contains(&ColumnKey::Priority(Priority::Medium)));
    }

    #[test]
    fn user_grouping_sorts_names_alphabetically_with_unknown_last() {
        let (tickets, users) = sample_board();
        let directory = UserDirectory::new(&users);
        let columns = build_columns(&tickets, &directory, GroupingOption::User, SortOption::Priority);

        let keys: Vec<_> = columns.iter().map(|c| c.key.clone()).collect();
        assert_eq!(
            keys,
            vec![
                ColumnKey::User("usr-1".to_string()),
                ColumnKey::User("usr-3".to_string()),
                ColumnKey::User("usr-2".to_string()),
                ColumnKey::User("usr-9".to_string()),
            ]
        );
    }

    #[test]
    fn priority_ordering_puts_urgent_first_within_column() {
        let (tickets, users) = sample_board();
        let directory = UserDirectory::new(&users);
        let columns = build_columns(&tickets, &directory, GroupingOption::Status, SortOption::Priority);

        let todo = &columns[1];
        assert_eq!(todo.tickets[0].id, "CAM-3");
        assert_eq!(todo.tickets[1].id, "CAM-1");
    }

    #[test]
    fn title_ordering_is_case_insensitive() {
        let users = vec![];
        let directory = UserDirectory::new(&users);
        let tickets = vec![
            ticket("T-1", "zebra migration", Status::Todo, Priority::Low, "u"),
            ticket("T-2", "Add search", Status::Todo, Priority::Low, "u"),
            ticket("T-3", "build pipeline", Status::Todo, Priority::Low, "u"),
        ];
        let columns = build_columns(&tickets, &directory, GroupingOption::Status, SortOption::Title);
        let todo = &columns[1];
        let titles: Vec<_> = todo.tickets.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Add search", "build pipeline", "zebra migration"]);
    }

    #[test]
    fn priority_ordering_keeps_fetch_order_for_equal_priorities() {
        let directory = UserDirectory::new(&[]);
        let tickets = vec![
            ticket("T-1", "First in", Status::Todo, Priority::High, "u"),
            ticket("T-2", "Second in", Status::Todo, Priority::High, "u"),
            ticket("T-3", "Third in", Status::Todo, Priority::High, "u"),
        ];
        let columns = build_columns(&tickets, &directory, GroupingOption::Status, SortOption::Priority);
        let ids: Vec<_> = columns[1].tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["T-1", "T-2", "T-3"]);
    }

    #[test]
    fn title_ordering_keeps_fetch_order_for_equal_titles() {
        let directory = UserDirectory::new(&[]);
        let tickets = vec![
            ticket("T-1", "Fix Login", Status::Todo, Priority::Low, "u"),
            ticket("T-2", "fix login", Status::Todo, Priority::Urgent, "u"),
        ];
        let columns = build_columns(&tickets, &directory, GroupingOption::Status, SortOption::Title);
        let ids: Vec<_> = columns[1].tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["T-1", "T-2"]);
    }

    #[test]
    fn empty_ticket_list_renders_empty_board() {
        let directory = UserDirectory::new(&[]);
        let columns = build_columns(&[], &directory, GroupingOption::Priority, SortOption::Priority);
        assert!(columns.is_empty());
    }

    #[test]
    fn parses_grouping_and_sort_options() {
        assert_eq!(GroupingOption::from_str("Status"), Some(GroupingOption::Status));
        assert_eq!(GroupingOption::from_str("USER"), Some(GroupingOption::User));
        assert_eq!(GroupingOption::from_str("nope"), None);
        assert_eq!(SortOption::from_str("title"), Some(SortOption::Title));
        assert_eq!(SortOption::from_str(""), None);
    }

    #[test]
    fn payload_deserializes_full_response() {
        let json = r#"{
            "tickets": [
                {"id": "CAM-1", "title": "A", "tag": ["Feature Request"], "userId": "usr-1", "status": "Backlog", "priority": 2}
            ],
            "users": [
                {"id": "usr-1", "name": "Anoop sharma", "available": false}
            ]
        }"#;
        let payload: BoardPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.tickets.len(), 1);
        assert_eq!(payload.users.len(), 1);
        assert_eq!(payload.tickets[0].priority, Priority::High);
    }
}
