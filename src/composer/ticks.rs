use crate::state::{Message, User};

/// A delivery-status glyph shown beneath an outgoing message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mark {
    /// The message reached the server.
    Sent,
    /// The message reached the recipient.
    Received,
    /// The message is still on its way out.
    Pending,
}

impl Mark {
    /// Gets the glyph for this mark.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Sent | Self::Received => "✓",
            Self::Pending => "🕓",
        }
    }
}

/// Select the delivery marks to show for a message.
///
/// Marks only show on the viewer's own messages. The delivery flags are
/// not mutually exclusive, so several marks may show at once; that
/// mirrors the flags and is not collapsed here.
pub fn marks(message: &Message, viewer: &User) -> Vec<Mark> {
    if !message.is_from(viewer) {
        return Vec::new();
    }

    let mut marks = Vec::new();
    if message.sent {
        marks.push(Mark::Sent);
    }
    if message.received {
        marks.push(Mark::Received);
    }
    if message.pending {
        marks.push(Mark::Pending);
    }

    marks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer() -> User {
        User::new("me", "Me")
    }

    fn own_message(sent: bool, received: bool, pending: bool) -> Message {
        Message {
            id: "1".into(),
            user: viewer(),
            sent,
            received,
            pending,
            ..Message::default()
        }
    }

    #[test]
    fn no_flags_no_marks() {
        assert!(marks(&own_message(false, false, false), &viewer()).is_empty());
    }

    #[test]
    fn incoming_messages_show_no_marks() {
        let message = Message {
            id: "1".into(),
            user: User::new("u2", "Ana"),
            sent: true,
            received: true,
            ..Message::default()
        };

        assert!(marks(&message, &viewer()).is_empty());
    }

    #[test]
    fn one_mark_per_true_flag() {
        assert_eq!(marks(&own_message(true, false, false), &viewer()), [Mark::Sent]);
        assert_eq!(
            marks(&own_message(true, true, false), &viewer()),
            [Mark::Sent, Mark::Received]
        );
    }

    #[test]
    fn flags_may_coexist() {
        // Pending does not suppress sent/received.
        assert_eq!(
            marks(&own_message(true, true, true), &viewer()),
            [Mark::Sent, Mark::Received, Mark::Pending]
        );
    }

    #[test]
    fn glyphs() {
        assert_eq!(Mark::Sent.glyph(), "✓");
        assert_eq!(Mark::Received.glyph(), "✓");
        assert_eq!(Mark::Pending.glyph(), "🕓");
    }
}
