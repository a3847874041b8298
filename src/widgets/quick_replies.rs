use std::rc::Rc;

use adw::{gtk, prelude::*};

use crate::composer::{Dispatcher, Style};
use crate::state::QuickReply;
use crate::widgets::apply_style;

/// Default quick replies row: one pill button per option, forwarded
/// through the dispatcher on click.
pub(super) fn build(
    replies: &[QuickReply],
    style: Option<&Style>,
    dispatcher: &Rc<Dispatcher>,
) -> gtk::Widget {
    let row = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(6)
        .css_classes(["quick-replies"])
        .build();
    if let Some(style) = style {
        apply_style(&row, style);
    }

    for reply in replies {
        let button = gtk::Button::builder()
            .label(reply.title.as_str())
            .css_classes(["pill"])
            .build();
        let dispatcher = Rc::clone(dispatcher);
        let reply = reply.clone();
        button.connect_clicked(move |_| dispatcher.quick_reply(std::slice::from_ref(&reply)));
        row.append(&button);
    }

    row.upcast()
}
