use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HabitContent {
    pub header: String,
    pub body: String,
}

/// A weekly behavioural goal the user can pick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HabitData {
    pub id: String,
    pub emoji: String,
    pub title: String,
    pub content: HabitContent,
}

impl HabitData {
    pub fn new(
        id: impl Into<String>,
        emoji: impl Into<String>,
        title: impl Into<String>,
        header: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            emoji: emoji.into(),
            title: title.into(),
            content: HabitContent {
                header: header.into(),
                body: body.into(),
            },
        }
    }
}

impl fmt::Display for HabitData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.emoji, self.title)?;
        writeln!(f, "  {}", self.content.header)?;
        write!(f, "  {}", self.content.body)
    }
}
