//! User Directory
//!
//! Fixed in-memory user records acting as the origin behind the cache.

use std::sync::Arc;

use anyhow::anyhow;
use serde::Serialize;

/// A user record as served by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub company: String,
}

impl User {
    fn new(id: u32, name: &str, email: &str, company: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            company: company.to_string(),
        }
    }
}

// == User Directory ==
/// Read-only set of users, shared between request handlers.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Arc<Vec<User>>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(users),
        }
    }

    /// The four users the demo service ships with.
    pub fn seeded() -> Self {
        Self::new(vec![
            User::new(1, "Leanne Graham", "Sincere@april.biz", "Romaguera-Crona"),
            User::new(2, "Ervin Howell", "Shanna@melissa.tv", "Deckow-Crist"),
            User::new(3, "Clementine Bauch", "Nathan@yesenia.net", "Romaguera-Jacobson"),
            User::new(4, "Patricia Lebsack", "Julianne.OConner@kory.org", "Robel-Corkery"),
        ])
    }

    pub fn get(&self, id: u32) -> Option<User> {
        self.users.iter().find(|user| user.id == id).cloned()
    }

    /// Origin fetch for the cache: resolves the user or fails with "User not found".
    pub async fn fetch(self, id: u32) -> anyhow::Result<User> {
        self.get(id).ok_or_else(|| anyhow!("User not found"))
    }
}
