use chrono::Local;

use crate::state::Message;

/// Whether two messages share an author.
pub fn is_same_user(a: &Message, b: &Message) -> bool {
    a.user.id == b.user.id
}

/// Whether two messages fall on the same local calendar day.
///
/// Calendar-day comparison, not a rolling 24-hour window. A message
/// without a timestamp never matches.
pub fn is_same_day(a: &Message, b: &Message) -> bool {
    match (a.created_at, b.created_at) {
        (Some(a), Some(b)) => {
            a.with_timezone(&Local).date_naive() == b.with_timezone(&Local).date_naive()
        }
        _ => false,
    }
}

/// Whether two messages belong to the same unbroken run.
pub fn is_grouped(a: &Message, b: &Message) -> bool {
    is_same_user(a, b) && is_same_day(a, b)
}

/// Grouping of a message relative to its direct neighbors.
///
/// Derived per render, never stored; comparisons look exactly one
/// message away in either direction.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Adjacency {
    /// Grouped with the previous message. Suppresses the username header
    /// and rounds off the corner toward it.
    pub with_previous: bool,
    /// Grouped with the next message. Rounds off the corner toward it.
    pub with_next: bool,
}

impl Adjacency {
    /// Classify the current message against its neighbors.
    ///
    /// An absent neighbor never groups: full rounding, header shown.
    pub fn classify(
        current: &Message,
        previous: Option<&Message>,
        next: Option<&Message>,
    ) -> Self {
        Self {
            with_previous: previous.is_some_and(|p| is_grouped(current, p)),
            with_next: next.is_some_and(|n| is_grouped(current, n)),
        }
    }
}
