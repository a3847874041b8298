//! Bubble composition rules, free of GTK.
//!
//! Everything here is plain data and pure functions so the grouping,
//! ordering, styling and dispatch contracts are testable headless.

mod adjacency;
mod content;
mod interaction;
mod style;
mod ticks;

use strum::{AsRefStr, EnumString};

pub use adjacency::{Adjacency, is_grouped, is_same_day, is_same_user};
pub use content::{Block, select};
pub use interaction::{
    ActionHost, Callbacks, Dispatcher, Gesture, MessageHandler, PressHandler, QuickReplyHandler,
    default_option_titles,
};
pub use style::{
    Align, Color, LeftRight, Region, Style, StyleOverrides, resolve, resolve_wrapper,
};
pub use ticks::{Mark, marks};

/// Which side of the screen the bubble renders on.
///
/// Right conventionally holds the viewing user's own messages. The
/// lowercase string form doubles as the CSS class.
#[derive(AsRefStr, Clone, Copy, Debug, Default, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Position {
    /// Other participants' messages.
    #[default]
    Left,
    /// The viewing user's own messages.
    Right,
}
