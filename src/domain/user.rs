use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub available: bool,
}

/// Lookup of users by id. Tickets reference users by id only; a lookup
/// that misses degrades to a placeholder rather than failing the render.
pub struct UserDirectory {
    by_id: HashMap<String, User>,
}

impl UserDirectory {
    pub fn new(users: &[User]) -> Self {
        let by_id = users
            .iter()
            .map(|user| (user.id.clone(), user.clone()))
            .collect();
        Self { by_id }
    }

    pub fn get(&self, user_id: &str) -> Option<&User> {
        self.by_id.get(user_id)
    }

    pub fn display_name(&self, user_id: &str) -> &str {
        self.get(user_id).map_or("Unknown User", |user| &user.name)
    }

    /// Uppercased first character of the user's name, used as the avatar.
    pub fn initial(&self, user_id: &str) -> Option<char> {
        let user = self.get(user_id)?;
        let first = user.name.chars().next()?;
        first.to_uppercase().next()
    }
}
