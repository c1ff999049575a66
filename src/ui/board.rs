use std::fmt::Write;

use console::style;

use crate::domain::board::{Column, ColumnKey, GroupingOption};
use crate::domain::ticket::Ticket;
use crate::domain::user::UserDirectory;
use crate::ui::icons;

/// Renders the grouped board as text, one column after another. Headings
/// carry the group icon, label, and ticket count; cards carry the ticket id,
/// owner avatar, title, and a detail line of indicators.
pub fn render_board(
    columns: &[Column],
    directory: &UserDirectory,
    grouping: GroupingOption,
) -> String {
    let mut out = String::new();
    for column in columns {
        let heading = column_heading(&column.key, column.tickets.len(), directory);
        let _ = writeln!(out, "{}", style(heading).bold());
        for ticket in &column.tickets {
            let _ = writeln!(
                out,
                "  {} {}",
                style(&ticket.id).dim(),
                avatar(directory, &ticket.user_id)
            );
            let _ = writeln!(out, "    {}", ticket.title);
            let _ = writeln!(out, "    {}", detail_line(ticket, grouping));
        }
        let _ = writeln!(out);
    }
    out
}

fn column_heading(key: &ColumnKey, count: usize, directory: &UserDirectory) -> String {
    match key {
        ColumnKey::Status(status) => {
            format!("{}{} ({count})", icons::status_icon(*status), status.label())
        }
        ColumnKey::User(user_id) => {
            format!(
                "{} {} ({count})",
                avatar(directory, user_id),
                directory.display_name(user_id)
            )
        }
        ColumnKey::Priority(priority) => {
            format!(
                "{}{} ({count})",
                icons::priority_icon(*priority),
                priority.label()
            )
        }
    }
}

fn detail_line(ticket: &Ticket, grouping: GroupingOption) -> String {
    let mut line = String::new();
    // Cards carry the status indicator only under status grouping.
    if grouping == GroupingOption::Status {
        let _ = write!(line, "{}", icons::status_icon(ticket.status));
    }
    let _ = write!(line, "{}", icons::priority_icon(ticket.priority));
    if let Some(tag) = ticket.primary_tag() {
        let _ = write!(line, "{}{tag}", icons::TAG_DOT);
    }
    line.trim_end().to_string()
}

/// Bracketed uppercase initial of the owner, `[?]` when the user id does not
/// resolve.
fn avatar(directory: &UserDirectory, user_id: &str) -> String {
    match directory.initial(user_id) {
        Some(initial) => format!("[{initial}]"),
        None => "[?]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::{SortOption, build_columns};
    use crate::domain::ticket::{Priority, Status, Ticket};
    use crate::domain::user::User;

    fn sample() -> (Vec<Ticket>, Vec<User>) {
        let tickets = vec![
            Ticket {
                id: "CAM-1".to_string(),
                title: "Update profile page".to_string(),
                status: Status::Todo,
                priority: Priority::High,
                user_id: "usr-1".to_string(),
                tags: vec!["Feature Request".to_string()],
            },
            Ticket {
                id: "CAM-2".to_string(),
                title: "Fix payment gateway".to_string(),
                status: Status::InProgress,
                priority: Priority::Urgent,
                user_id: "usr-404".to_string(),
                tags: vec![],
            },
        ];
        let users = vec![User {
            id: "usr-1".to_string(),
            name: "anoop sharma".to_string(),
            available: true,
        }];
        (tickets, users)
    }

    #[test]
    fn status_board_shows_headings_with_counts() {
        let (tickets, users) = sample();
        let directory = UserDirectory::new(&users);
        let columns = build_columns(&tickets, &directory, GroupingOption::Status, SortOption::Priority);
        let out = render_board(&columns, &directory, GroupingOption::Status);

        assert!(out.contains("Backlog (0)"));
        assert!(out.contains("Todo (1)"));
        assert!(out.contains("In progress (1)"));
        assert!(out.contains("Done (0)"));
        assert!(out.contains("Update profile page"));
        assert!(out.contains("Feature Request"));
    }

    #[test]
    fn user_board_uses_names_and_placeholder() {
        let (tickets, users) = sample();
        let directory = UserDirectory::new(&users);
        let columns = build_columns(&tickets, &directory, GroupingOption::User, SortOption::Priority);
        let out = render_board(&columns, &directory, GroupingOption::User);

        assert!(out.contains("anoop sharma (1)"));
        assert!(out.contains("Unknown User (1)"));
        assert!(out.contains("[A]"));
        assert!(out.contains("[?]"));
    }

    #[test]
    fn priority_board_labels_columns() {
        let (tickets, users) = sample();
        let directory = UserDirectory::new(&users);
        let columns = build_columns(&tickets, &directory, GroupingOption::Priority, SortOption::Title);
        let out = render_board(&columns, &directory, GroupingOption::Priority);

        assert!(out.contains("Urgent (1)"));
        assert!(out.contains("High (1)"));
        assert!(!out.contains("Medium"));
    }

    #[test]
    fn empty_board_renders_nothing_for_priority_grouping() {
        let directory = UserDirectory::new(&[]);
        let out = render_board(&[], &directory, GroupingOption::Priority);
        assert!(out.is_empty());
    }

    #[test]
    fn card_without_tag_has_no_marker_text() {
        let (tickets, users) = sample();
        let directory = UserDirectory::new(&users);
        let columns = build_columns(&tickets, &directory, GroupingOption::User, SortOption::Priority);
        let out = render_board(&columns, &directory, GroupingOption::User);

        // CAM-2 carries no tags; its detail line is just the priority icon.
        let cam2_details = out
            .lines()
            .skip_while(|line| !line.contains("CAM-2"))
            .nth(2)
            .unwrap();
        assert!(!cam2_details.contains("Feature Request"));
    }
}
