//! GTK realization of the composer's output.

mod bubble;
mod parent_quote;
mod quick_replies;

use adw::{gtk, prelude::*};
use gtk::pango;

use crate::composer::{Align, Style};

pub use bubble::{BlockContext, Bubble, GtkActionHost, RenderFn, RenderOverrides, TicksFn};

/// Apply a resolved style's widget-level fields.
pub(crate) fn apply_style(widget: &impl IsA<gtk::Widget>, style: &Style) {
    for class in &style.css_classes {
        widget.add_css_class(class);
    }
    if let Some(margin) = style.margin_start {
        widget.set_margin_start(margin);
    }
    if let Some(margin) = style.margin_end {
        widget.set_margin_end(margin);
    }
    if let Some(margin) = style.margin_top {
        widget.set_margin_top(margin);
    }
    if let Some(margin) = style.margin_bottom {
        widget.set_margin_bottom(margin);
    }
    if let Some(height) = style.min_height {
        widget.set_size_request(-1, height);
    }
    if let Some(halign) = style.halign {
        widget.set_halign(to_gtk_align(halign));
    }
}

/// Pango attributes for a resolved style's text fields, if it has any.
pub(crate) fn label_attributes(style: &Style) -> Option<pango::AttrList> {
    if style.font_size.is_none() && style.color.is_none() {
        return None;
    }

    let attrs = pango::AttrList::new();
    if let Some(size) = style.font_size {
        attrs.insert(pango::AttrSize::new(size * pango::SCALE));
    }
    if let Some(color) = style.color {
        attrs.insert(pango::AttrColor::new_foreground(
            channel(color.r),
            channel(color.g),
            channel(color.b),
        ));
        if color.a != 0xff {
            attrs.insert(pango::AttrInt::new_foreground_alpha(channel(color.a)));
        }
    }

    Some(attrs)
}

fn to_gtk_align(align: Align) -> gtk::Align {
    match align {
        Align::Start => gtk::Align::Start,
        Align::Center => gtk::Align::Center,
        Align::End => gtk::Align::End,
        Align::Fill => gtk::Align::Fill,
    }
}

// 8-bit channel to pango's 16-bit scale.
fn channel(value: u8) -> u16 {
    u16::from(value) * 257
}
