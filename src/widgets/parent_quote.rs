use std::cell::Cell;
use std::rc::Rc;

use adw::{gtk, prelude::*};
use gtk::pango;

use crate::composer::{Position, Region, StyleOverrides, resolve};
use crate::i18n;
use crate::state::ParentPreview;
use crate::widgets::{apply_style, label_attributes};

/// Characters past which the quoted text gets a show more toggle.
const CLAMP_CHARS: usize = 240;
/// Lines shown while the quoted text is collapsed.
const CLAMP_LINES: i32 = 4;

/// Default parent-quote block: quoted author name and clamped quoted
/// text, with a show more/show less toggle when the text is long.
pub(super) fn build(
    preview: &ParentPreview,
    position: Position,
    styles: &StyleOverrides,
) -> gtk::Widget {
    let wrapper = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(2)
        .build();
    apply_style(&wrapper, &resolve(Region::ParentWrapper, position, styles));

    if !preview.name.is_empty() {
        let style = resolve(Region::ParentUsername, position, styles);
        let name = gtk::Label::builder()
            .label(preview.name.as_str())
            .halign(gtk::Align::Start)
            .xalign(0.0)
            .build();
        apply_style(&name, &style);
        if let Some(attrs) = label_attributes(&style) {
            name.set_attributes(Some(&attrs));
        }
        wrapper.append(&name);
    }

    let style = resolve(Region::ParentText, position, styles);
    let text = gtk::Label::builder()
        .label(preview.text.as_str())
        .halign(gtk::Align::Start)
        .xalign(0.0)
        .wrap(true)
        .wrap_mode(pango::WrapMode::WordChar)
        .lines(CLAMP_LINES)
        .ellipsize(pango::EllipsizeMode::End)
        .build();
    apply_style(&text, &style);
    if let Some(attrs) = label_attributes(&style) {
        text.set_attributes(Some(&attrs));
    }
    wrapper.append(&text);

    if needs_clamp(&preview.text) {
        let style = resolve(Region::ParentViewMore, position, styles);
        let toggle = gtk::Label::builder()
            .label(i18n!("show more").as_str())
            .halign(gtk::Align::Start)
            .build();
        apply_style(&toggle, &style);
        if let Some(attrs) = label_attributes(&style) {
            toggle.set_attributes(Some(&attrs));
        }

        let expanded = Rc::new(Cell::new(false));
        let tap = gtk::GestureClick::new();
        {
            let text = text.clone();
            let toggle = toggle.clone();
            tap.connect_released(move |gesture, _, _, _| {
                // Keep the toggle tap from doubling as a quote tap.
                gesture.set_state(gtk::EventSequenceState::Claimed);
                if expanded.get() {
                    text.set_lines(CLAMP_LINES);
                    text.set_ellipsize(pango::EllipsizeMode::End);
                    toggle.set_label(&i18n!("show more"));
                } else {
                    text.set_lines(-1);
                    text.set_ellipsize(pango::EllipsizeMode::None);
                    toggle.set_label(&i18n!("show less"));
                }
                expanded.set(!expanded.get());
            });
        }
        toggle.add_controller(tap);
        wrapper.append(&toggle);
    }

    wrapper.upcast()
}

fn needs_clamp(text: &str) -> bool {
    text.chars().count() > CLAMP_CHARS || text.lines().count() > 4
}
