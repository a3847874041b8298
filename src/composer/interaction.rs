use std::rc::Rc;

use crate::i18n;
use crate::state::{Message, QuickReply};

/// Built-in long-press menu titles: copy, then cancel.
pub fn default_option_titles() -> Vec<String> {
    vec![i18n!("Copy Text"), i18n!("Cancel")]
}

/// A gesture reported by the bubble's controllers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Gesture {
    /// Tap anywhere on the bubble.
    Press,
    /// Long press anywhere on the bubble.
    LongPress,
    /// Tap on the parent-quote block.
    ParentPress,
    /// Swipe gesture ended; `activated` when it went past the threshold.
    Swipe {
        /// Whether the drag passed the activation threshold.
        activated: bool,
    },
}

/// Tap/long-press handler. The host is the ambient context: the same
/// menu/clipboard capability the built-in fallback uses.
pub type PressHandler = Box<dyn Fn(&dyn ActionHost, &Message)>;
/// Handler receiving only the current message.
pub type MessageHandler = Box<dyn Fn(&Message)>;
/// Quick-reply selection handler.
pub type QuickReplyHandler = Box<dyn Fn(&[QuickReply])>;

/// Caller-supplied gesture callbacks. All optional.
#[derive(Default)]
pub struct Callbacks {
    /// Tap handler.
    pub on_press: Option<PressHandler>,
    /// Long-press handler. When absent, text messages fall back to the
    /// built-in copy menu.
    pub on_long_press: Option<PressHandler>,
    /// Parent-quote tap handler.
    pub on_parent_message_press: Option<MessageHandler>,
    /// Swipe-to-reply handler.
    pub on_swipe: Option<MessageHandler>,
    /// Quick-reply selection handler.
    pub on_quick_reply: Option<QuickReplyHandler>,
}

/// Host abilities the dispatcher needs: presenting an action menu and
/// writing the clipboard.
///
/// The GTK implementation lives in `widgets`; tests inject a recording
/// fake. Both calls are fire-and-forget, per the host environment.
pub trait ActionHost {
    /// Present an action menu. `on_select` receives the chosen index;
    /// the option at `cancel_index` dismisses without action.
    fn present_menu(&self, options: &[String], cancel_index: usize, on_select: Box<dyn Fn(usize)>);

    /// Copy text to the system clipboard.
    fn copy_text(&self, text: &str);
}

/// Routes bubble gestures to the caller's callbacks.
///
/// Holds no state of its own; swipe progress and menu lifetime belong
/// to the host widgets.
pub struct Dispatcher {
    message: Message,
    option_titles: Vec<String>,
    callbacks: Callbacks,
}

impl Dispatcher {
    /// Bind a message and its callbacks for gesture routing.
    pub fn new(message: Message, option_titles: Vec<String>, callbacks: Callbacks) -> Self {
        Self {
            message,
            option_titles,
            callbacks,
        }
    }

    /// The message this dispatcher routes for.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Route one gesture. Side effects are exactly the callback
    /// invocations and, on the menu fallback, the clipboard write.
    pub fn dispatch(&self, host: &Rc<dyn ActionHost>, gesture: Gesture) {
        match gesture {
            Gesture::Press => {
                if let Some(on_press) = &self.callbacks.on_press {
                    on_press(host.as_ref(), &self.message);
                }
            }
            Gesture::LongPress => self.long_press(host),
            Gesture::ParentPress => {
                if let Some(on_parent) = &self.callbacks.on_parent_message_press {
                    on_parent(&self.message);
                }
            }
            Gesture::Swipe { activated: true } => {
                if let Some(on_swipe) = &self.callbacks.on_swipe {
                    on_swipe(&self.message);
                }
            }
            Gesture::Swipe { activated: false } => {}
        }
    }

    /// Forward a quick-reply selection from the quick replies row.
    pub fn quick_reply(&self, replies: &[QuickReply]) {
        if let Some(on_quick_reply) = &self.callbacks.on_quick_reply {
            on_quick_reply(replies);
        }
    }

    fn long_press(&self, host: &Rc<dyn ActionHost>) {
        if let Some(on_long_press) = &self.callbacks.on_long_press {
            on_long_press(host.as_ref(), &self.message);
            return;
        }

        // Built-in fallback: a copy menu, only for text messages.
        if !self.message.has_text() {
            return;
        }

        let options = if self.option_titles.len() >= 2 {
            self.option_titles[..2].to_vec()
        } else {
            tracing::debug!("Too few menu titles supplied, using the built-in pair");
            default_option_titles()
        };
        let cancel_index = options.len() - 1;

        let text = self.message.text.clone();
        let clipboard = Rc::clone(host);
        host.present_menu(
            &options,
            cancel_index,
            Box::new(move |index| {
                if index == 0 {
                    clipboard.copy_text(&text);
                }
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Records menu presentations and clipboard writes, and lets tests
    /// drive the selection callback.
    #[derive(Default)]
    struct RecordingHost {
        menus: RefCell<Vec<(Vec<String>, usize)>>,
        copied: RefCell<Vec<String>>,
        pending_select: RefCell<Option<Box<dyn Fn(usize)>>>,
    }

    impl RecordingHost {
        fn select(&self, index: usize) {
            let on_select = self.pending_select.borrow_mut().take().unwrap();
            on_select(index);
        }
    }

    impl ActionHost for RecordingHost {
        fn present_menu(
            &self,
            options: &[String],
            cancel_index: usize,
            on_select: Box<dyn Fn(usize)>,
        ) {
            self.menus.borrow_mut().push((options.to_vec(), cancel_index));
            *self.pending_select.borrow_mut() = Some(on_select);
        }

        fn copy_text(&self, text: &str) {
            self.copied.borrow_mut().push(text.to_string());
        }
    }

    fn host() -> (Rc<RecordingHost>, Rc<dyn ActionHost>) {
        let recording = Rc::new(RecordingHost::default());
        let host: Rc<dyn ActionHost> = recording.clone();
        (recording, host)
    }

    fn text_message(text: &str) -> Message {
        Message {
            id: "1".into(),
            text: text.into(),
            ..Message::default()
        }
    }

    #[test]
    fn press_without_callback_is_a_no_op() {
        let (recording, host) = host();
        let dispatcher = Dispatcher::new(text_message("hi"), Vec::new(), Callbacks::default());

        dispatcher.dispatch(&host, Gesture::Press);

        assert!(recording.menus.borrow().is_empty());
        assert!(recording.copied.borrow().is_empty());
    }

    #[test]
    fn press_invokes_callback_with_the_message() {
        let (_, host) = host();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_by_callback = Rc::clone(&seen);
        let callbacks = Callbacks {
            on_press: Some(Box::new(move |_, message| {
                seen_by_callback.borrow_mut().push(message.id.clone());
            })),
            ..Callbacks::default()
        };
        let dispatcher = Dispatcher::new(text_message("hi"), Vec::new(), callbacks);

        dispatcher.dispatch(&host, Gesture::Press);

        assert_eq!(*seen.borrow(), ["1"]);
    }

    #[test]
    fn long_press_callback_takes_precedence_over_the_menu() {
        let (recording, host) = host();
        let fired = Rc::new(RefCell::new(0));
        let fired_by_callback = Rc::clone(&fired);
        let callbacks = Callbacks {
            on_long_press: Some(Box::new(move |_, _| {
                *fired_by_callback.borrow_mut() += 1;
            })),
            ..Callbacks::default()
        };
        let dispatcher = Dispatcher::new(text_message("hi"), Vec::new(), callbacks);

        dispatcher.dispatch(&host, Gesture::LongPress);

        assert_eq!(*fired.borrow(), 1);
        assert!(recording.menus.borrow().is_empty());
    }

    #[test]
    fn long_press_on_empty_text_presents_nothing() {
        let (recording, host) = host();
        let dispatcher = Dispatcher::new(text_message(""), Vec::new(), Callbacks::default());

        dispatcher.dispatch(&host, Gesture::LongPress);

        assert!(recording.menus.borrow().is_empty());
    }

    #[test]
    fn long_press_copy_puts_exactly_the_text_on_the_clipboard() {
        let (recording, host) = host();
        let dispatcher = Dispatcher::new(
            text_message("hello there"),
            default_option_titles(),
            Callbacks::default(),
        );

        dispatcher.dispatch(&host, Gesture::LongPress);
        recording.select(0);

        assert_eq!(*recording.copied.borrow(), ["hello there"]);
    }

    #[test]
    fn empty_option_titles_fall_back_to_the_builtin_pair() {
        let (recording, host) = host();
        let dispatcher = Dispatcher::new(text_message("hi"), Vec::new(), Callbacks::default());

        dispatcher.dispatch(&host, Gesture::LongPress);

        let menus = recording.menus.borrow();
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].0, ["Copy Text", "Cancel"]);
        assert_eq!(menus[0].1, 1);
    }

    #[test]
    fn single_option_title_falls_back_to_the_builtin_pair() {
        let (recording, host) = host();
        let dispatcher = Dispatcher::new(
            text_message("hi"),
            vec!["Copy".to_string()],
            Callbacks::default(),
        );

        dispatcher.dispatch(&host, Gesture::LongPress);

        assert_eq!(recording.menus.borrow()[0].0, ["Copy Text", "Cancel"]);
    }

    #[test]
    fn extra_option_titles_are_clamped_to_two() {
        let (recording, host) = host();
        let titles = vec![
            "Copiar".to_string(),
            "Cancelar".to_string(),
            "Outro".to_string(),
        ];
        let dispatcher = Dispatcher::new(text_message("hi"), titles, Callbacks::default());

        dispatcher.dispatch(&host, Gesture::LongPress);

        let menus = recording.menus.borrow();
        assert_eq!(menus[0].0, ["Copiar", "Cancelar"]);
        assert_eq!(menus[0].1, 1);
    }

    #[test]
    fn selecting_cancel_copies_nothing() {
        let (recording, host) = host();
        let dispatcher = Dispatcher::new(
            text_message("hi"),
            default_option_titles(),
            Callbacks::default(),
        );

        dispatcher.dispatch(&host, Gesture::LongPress);
        recording.select(1);

        assert!(recording.copied.borrow().is_empty());
    }

    #[test]
    fn swipe_only_fires_when_activated() {
        let (_, host) = host();
        let swipes = Rc::new(RefCell::new(0));
        let swipes_by_callback = Rc::clone(&swipes);
        let callbacks = Callbacks {
            on_swipe: Some(Box::new(move |_| {
                *swipes_by_callback.borrow_mut() += 1;
            })),
            ..Callbacks::default()
        };
        let dispatcher = Dispatcher::new(text_message("hi"), Vec::new(), callbacks);

        dispatcher.dispatch(&host, Gesture::Swipe { activated: false });
        assert_eq!(*swipes.borrow(), 0);

        dispatcher.dispatch(&host, Gesture::Swipe { activated: true });
        assert_eq!(*swipes.borrow(), 1);
    }

    #[test]
    fn quick_reply_forwards_the_selection() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_by_callback = Rc::clone(&seen);
        let callbacks = Callbacks {
            on_quick_reply: Some(Box::new(move |replies: &[QuickReply]| {
                seen_by_callback
                    .borrow_mut()
                    .extend(replies.iter().map(|r| r.value.clone()));
            })),
            ..Callbacks::default()
        };
        let dispatcher = Dispatcher::new(text_message("hi"), Vec::new(), callbacks);

        dispatcher.quick_reply(&[QuickReply::new("Yes", "yes")]);

        assert_eq!(*seen.borrow(), ["yes"]);
    }
}
