//! Gallery demo: a scripted conversation exercising the bubble surface.
//!
//! Run with `cargo run --example gallery`. Gesture callbacks log what
//! they receive; try tapping, long-pressing and swiping the bubbles.

use adw::prelude::*;
use chrono::{Duration, Utc};
use relm4::{RelmApp, gtk, prelude::*};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use bolha::{Bubble, Callbacks, Message, ParentPreview, Position, QuickReply, User};

struct Gallery {
    /// List holding one bubble per scripted message.
    list: gtk::ListBox,
}

#[relm4::component]
impl SimpleComponent for Gallery {
    type Init = ();
    type Input = ();
    type Output = ();

    view! {
        adw::ApplicationWindow {
            set_title: Some("Bolha gallery"),
            set_default_width: 480,
            set_default_height: 720,

            adw::ToolbarView {
                add_top_bar = &adw::HeaderBar {},

                #[wrap(Some)]
                set_content = &gtk::ScrolledWindow {
                    set_hscrollbar_policy: gtk::PolicyType::Never,
                    set_vexpand: true,

                    #[local_ref]
                    list -> gtk::ListBox {
                        set_selection_mode: gtk::SelectionMode::None,
                        set_css_classes: &["chat-history"],
                        set_margin_all: 12,
                    }
                }
            }
        }
    }

    fn init(
        _init: Self::Init,
        root: Self::Root,
        _sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = Self {
            list: gtk::ListBox::new(),
        };

        populate(&model.list);

        let list = &model.list;
        let widgets = view_output!();

        ComponentParts { model, widgets }
    }

    fn update(&mut self, _message: Self::Input, _sender: ComponentSender<Self>) {}
}

/// Build the scripted conversation and append one bubble per message.
fn populate(list: &gtk::ListBox) {
    let viewer = User::new("u1", "You");
    let ana = User::new("u2", "Ana");
    let now = Utc::now();
    let minutes_ago = |minutes: i64| Some(now - Duration::minutes(minutes));

    let messages = vec![
        Message {
            id: "1".into(),
            user: ana.clone(),
            text: "Oi! Chegou bem?".into(),
            created_at: minutes_ago(35),
            ..Message::default()
        },
        Message {
            id: "2".into(),
            user: ana.clone(),
            text: "Manda uma foto quando puder".into(),
            created_at: minutes_ago(34),
            ..Message::default()
        },
        Message {
            id: "3".into(),
            user: viewer.clone(),
            text: "Cheguei sim, o lugar é lindo!".into(),
            created_at: minutes_ago(30),
            sent: true,
            received: true,
            ..Message::default()
        },
        Message {
            id: "4".into(),
            user: ana.clone(),
            text: "Que bom! Já estava preocupada, a estrada costuma lotar nessa \
                   época do ano e a previsão falava em chuva forte a tarde toda \
                   por aí."
                .into(),
            created_at: minutes_ago(25),
            ..Message::default()
        },
        Message {
            id: "5".into(),
            user: viewer.clone(),
            text: "Pegou um pouco de chuva na serra, mas nada demais".into(),
            parent: Some(ParentPreview {
                name: "Ana".into(),
                text: "Que bom! Já estava preocupada, a estrada costuma lotar \
                       nessa época do ano e a previsão falava em chuva forte a \
                       tarde toda por aí."
                    .into(),
            }),
            created_at: minutes_ago(20),
            sent: true,
            ..Message::default()
        },
        Message {
            id: "6".into(),
            user: viewer.clone(),
            text: "Te mando as fotos já".into(),
            created_at: minutes_ago(2),
            pending: true,
            ..Message::default()
        },
        Message {
            id: "7".into(),
            user: ana,
            text: "Vai ficar até domingo?".into(),
            quick_replies: Some(vec![
                QuickReply::new("Vou sim", "yes"),
                QuickReply::new("Ainda não sei", "maybe"),
            ]),
            created_at: minutes_ago(1),
            ..Message::default()
        },
    ];

    for (index, message) in messages.iter().enumerate() {
        let position = if message.is_from(&viewer) {
            Position::Right
        } else {
            Position::Left
        };

        let bubble = Bubble {
            viewer: viewer.clone(),
            position,
            current_message: message.clone(),
            previous_message: index.checked_sub(1).map(|i| messages[i].clone()),
            next_message: messages.get(index + 1).cloned(),
            render_username_on_message: position == Position::Left,
            callbacks: Callbacks {
                on_press: Some(Box::new(|_, message| {
                    tracing::info!("Pressed message {}", message.id);
                })),
                on_parent_message_press: Some(Box::new(|message| {
                    tracing::info!("Jump to the parent of message {}", message.id);
                })),
                on_swipe: Some(Box::new(|message| {
                    tracing::info!("Reply to message {}", message.id);
                })),
                on_quick_reply: Some(Box::new(|replies| {
                    for reply in replies {
                        tracing::info!("Quick reply selected: {}", reply.value);
                    }
                })),
                ..Callbacks::default()
            },
            ..Bubble::default()
        };

        list.append(&bubble.build());
    }
}

fn main() {
    // Default to the INFO level for this demo and WARN for everything
    // else; override with RUST_LOG.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bolha=info,warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_filter(env_filter))
        .init();

    adw::init().expect("Failed to init GTK/libadwaita");

    let app = RelmApp::new("dev.bolha.Gallery");
    bolha::load_css();
    app.run::<Gallery>(());
}
