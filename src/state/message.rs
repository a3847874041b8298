use std::sync::LazyLock;

use chrono::{DateTime, Utc};

use crate::state::{Media, QuickReply};

/// Empty message used when the caller supplies nothing.
///
/// Built once at module scope; callers receive clones, never a shared
/// mutable default.
pub static EMPTY_MESSAGE: LazyLock<Message> = LazyLock::new(Message::default);

/// A chat participant.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl User {
    /// Create a user from its identifier and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A chat message.
///
/// Owned by the caller and read-only to the bubble. Text and media are
/// independently optional; a message may carry both.
#[derive(Clone, Debug, Default)]
pub struct Message {
    /// Unique message identifier.
    pub id: String,
    /// Message author.
    pub user: User,
    /// Message text. Empty means no text block.
    pub text: String,
    /// Image attached to this message.
    pub image: Option<Media>,
    /// Video attached to this message.
    pub video: Option<Media>,
    /// Audio attached to this message.
    pub audio: Option<Media>,
    /// Preview of the message this one replies to.
    pub parent: Option<ParentPreview>,
    /// Whether the message reached the server.
    pub sent: bool,
    /// Whether the message reached the recipient.
    pub received: bool,
    /// Whether the message is still on its way out.
    pub pending: bool,
    /// Canned response options attached to this message.
    pub quick_replies: Option<Vec<QuickReply>>,
    /// When the message was sent/received.
    pub created_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Whether the message carries any text.
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Whether the author is the given user.
    pub fn is_from(&self, user: &User) -> bool {
        self.user.id == user.id
    }
}

/// Preview of a quoted/parent message, shown above the content.
#[derive(Clone, Debug, Default)]
pub struct ParentPreview {
    /// Display name of the quoted author.
    pub name: String,
    /// Quoted text.
    pub text: String,
}
