//! Chat rooms and their messages.

use crate::query::Queryable;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Wire format of chat timestamps
pub const CHAT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One message in a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub user: String,
    #[serde(with = "chat_date")]
    pub date: NaiveDateTime,
    pub message: String,
}

impl Chat {
    pub fn new(user: impl Into<String>, date: NaiveDateTime, message: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            date,
            message: message.into(),
        }
    }
}

/// Direct conversation or group room
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    Direct,
    Group,
}

/// A chat room as listed on the room list screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRoom {
    pub id: u32,
    pub name: String,
    /// Participants other than the local user
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub chats: Vec<Chat>,
}

impl ChatRoom {
    pub fn kind(&self) -> RoomKind {
        if self.members.len() > 1 {
            RoomKind::Group
        } else {
            RoomKind::Direct
        }
    }

    /// Latest message; on equal timestamps the later one in the list wins.
    pub fn last_chat(&self) -> Option<&Chat> {
        self.chats.iter().max_by_key(|c| c.date)
    }

    pub fn last_activity(&self) -> Option<NaiveDateTime> {
        self.last_chat().map(|c| c.date)
    }
}

impl Queryable for ChatRoom {
    type Category = RoomKind;
    // Rooms without messages sort after every room with one under recency.
    type Key = Option<NaiveDateTime>;

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> RoomKind {
        self.kind()
    }

    fn sort_key(&self) -> Option<NaiveDateTime> {
        self.last_activity()
    }
}

mod chat_date {
    use super::CHAT_DATE_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(CHAT_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, CHAT_DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
