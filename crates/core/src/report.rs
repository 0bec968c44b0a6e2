//! Record handed to the embedding host when a game ends.

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: u32,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl ScoreReport {
    pub fn new(score: u32, timestamp: u64) -> Self {
        Self {
            score,
            timestamp,
            user_id: None,
            username: None,
        }
    }

    pub fn with_user(mut self, user_id: i64, username: impl Into<String>) -> Self {
        self.user_id = Some(user_id);
        self.username = Some(username.into());
        self
    }

    /// Message shown when no host is around to receive the report.
    pub fn summary(&self) -> String {
        format!("Game over! Your score: {} pancakes", self.score)
    }
}
