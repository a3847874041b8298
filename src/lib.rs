#![deny(clippy::all)]
#![deny(clippy::cargo)]
#![deny(clippy::pedantic)]
// To keep consistency.
#![deny(clippy::use_self)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::equatable_if_let)]
#![deny(clippy::needless_collect)]
#![deny(clippy::option_if_let_else)]
#![deny(clippy::useless_let_if_seq)]
#![deny(clippy::non_zero_suggestions)]
#![deny(clippy::string_lit_chars_any)]
#![deny(clippy::branches_sharing_code)]
#![deny(clippy::if_then_some_else_none)]
#![deny(clippy::set_contains_or_insert)]
#![deny(clippy::semicolon_outside_block)]
#![deny(clippy::needless_pass_by_ref_mut)]
#![deny(clippy::separated_literal_suffix)]
#![deny(clippy::empty_structs_with_brackets)]
#![deny(clippy::significant_drop_in_scrutinee)]
#![deny(clippy::empty_enum_variants_with_brackets)]
// Use tracing crate.
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Expected
#![expect(clippy::multiple_crate_versions)]
// Not useful for a widget library.
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

//! Bolha - GTK message bubble widgets for chat apps.
//!
//! One widget, [`Bubble`], renders a single chat message: text, media,
//! quoted/parent message, timestamp, delivery ticks, username, quick
//! replies, and tap/long-press/swipe gesture routing. The composition
//! rules live in [`composer`] as plain data and functions; [`widgets`]
//! realizes them as GTK trees.

pub mod composer;
pub mod state;
pub mod utils;
pub mod widgets;

#[macro_export]
macro_rules! i18n {
    ($s:expr) => {
        gettextrs::gettext($s)
    };
}

#[macro_export]
macro_rules! i18n_f {
    ($s:expr, $($arg:tt)*) => {
        format!(gettextrs::gettext($s).as_str(), $($arg)*)
    };
}

pub use composer::{
    ActionHost, Adjacency, Align, Block, Callbacks, Color, Dispatcher, Gesture, LeftRight, Mark,
    Position, Region, Style, StyleOverrides,
};
pub use state::{Media, Message, ParentPreview, QuickReply, User};
pub use widgets::{BlockContext, Bubble, RenderOverrides};

/// Install the bubble stylesheet application-wide.
///
/// Call once after `adw::init()`; the demo does this right before
/// building its window.
pub fn load_css() {
    relm4::set_global_css(include_str!("../data/style.css"));
}
