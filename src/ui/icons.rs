//! Board iconography with plain-text fallbacks for terminals without
//! emoji support.

use console::Emoji;

use crate::domain::ticket::{Priority, Status};

// Status indicators
pub static BACKLOG: Emoji<'_, '_> = Emoji("📥 ", "[B] ");
pub static TODO: Emoji<'_, '_> = Emoji("○ ", "[ ] ");
pub static IN_PROGRESS: Emoji<'_, '_> = Emoji("⌛ ", "[~] ");
pub static DONE: Emoji<'_, '_> = Emoji("✅ ", "[x] ");

// Priority indicators
pub static NO_PRIORITY: Emoji<'_, '_> = Emoji("--- ", "[--] ");
pub static URGENT: Emoji<'_, '_> = Emoji("🚨 ", "[P1] ");
pub static HIGH: Emoji<'_, '_> = Emoji("🔴 ", "[P2] ");
pub static MEDIUM: Emoji<'_, '_> = Emoji("🟡 ", "[P3] ");
pub static LOW: Emoji<'_, '_> = Emoji("🟢 ", "[P4] ");

// Tag marker
pub static TAG_DOT: Emoji<'_, '_> = Emoji("🔘 ", "* ");

pub fn status_icon(status: Status) -> Emoji<'static, 'static> {
    match status {
        Status::Backlog => BACKLOG,
        Status::Todo => TODO,
        Status::InProgress => IN_PROGRESS,
        Status::Done => DONE,
    }
}

pub fn priority_icon(priority: Priority) -> Emoji<'static, 'static> {
    match priority {
        Priority::NoPriority => NO_PRIORITY,
        Priority::Urgent => URGENT,
        Priority::High => HIGH,
        Priority::Medium => MEDIUM,
        Priority::Low => LOW,
    }
}
