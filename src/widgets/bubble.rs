use std::rc::Rc;

use adw::{gtk, prelude::*};
use gtk::{gdk, glib, pango};

use crate::composer::{
    ActionHost, Adjacency, Block, Callbacks, Dispatcher, Gesture, LeftRight, Position, Region,
    Style, StyleOverrides, default_option_titles, marks, resolve, resolve_wrapper, select,
};
use crate::i18n;
use crate::state::{EMPTY_MESSAGE, Media, Message, User};
use crate::utils::format_time;
use crate::widgets::{apply_style, label_attributes, parent_quote, quick_replies, to_gtk_align};

/// Drag distance, in pixels, past which a swipe counts as activated.
const SWIPE_ACTIVATION_DX: f64 = 20.0;

/// Largest requested edge, in pixels, for default media previews.
const MEDIA_MAX_EDGE: u32 = 240;

/// Inputs handed to render overrides: the bubble's prop surface minus
/// the container/wrapper style slots, which never propagate into
/// nested blocks.
pub struct BlockContext<'a> {
    /// The viewing user.
    pub viewer: &'a User,
    /// Which side the bubble renders on.
    pub position: Position,
    /// The message being rendered.
    pub current_message: &'a Message,
    /// Direct predecessor in the list, if any.
    pub previous_message: Option<&'a Message>,
    /// Direct successor in the list, if any.
    pub next_message: Option<&'a Message>,
    /// Grouping relative to the neighbors, already classified.
    pub adjacency: Adjacency,
    /// Whether the author name shows on ungrouped messages.
    pub render_username_on_message: bool,
    /// Whether the custom view renders after the text.
    pub is_custom_view_bottom: bool,
    /// Message-text style override.
    pub text_style: &'a LeftRight<Style>,
    /// Tick glyph style override.
    pub tick_style: Option<&'a Style>,
    /// Username style override.
    pub username_style: Option<&'a Style>,
    /// Parent-quote wrapper style override.
    pub parent_wrapper_style: &'a LeftRight<Style>,
    /// Quoted author name style override.
    pub parent_username_style: &'a LeftRight<Style>,
    /// Quoted text style override.
    pub parent_text_style: &'a LeftRight<Style>,
    /// Show more/show less label style override.
    pub parent_view_more_style: Option<&'a Style>,
    /// Quick replies style override.
    pub quick_reply_style: Option<&'a Style>,
}

/// Caller-drawn block renderer.
pub type RenderFn = Box<dyn Fn(&BlockContext<'_>) -> gtk::Widget>;
/// Caller-drawn ticks renderer; receives the current message and its
/// result is used verbatim.
pub type TicksFn = Box<dyn Fn(&Message) -> gtk::Widget>;

/// Capability table of caller-drawn blocks.
///
/// A present entry fully replaces the built-in default for that block;
/// the default never runs. The custom view has no default at all.
#[derive(Default)]
pub struct RenderOverrides {
    /// Replaces the username label in the header.
    pub username: Option<RenderFn>,
    /// Replaces the time label in the header.
    pub time: Option<RenderFn>,
    /// Replaces the message text block.
    pub message_text: Option<RenderFn>,
    /// Replaces the image block.
    pub message_image: Option<RenderFn>,
    /// Replaces the video block.
    pub message_video: Option<RenderFn>,
    /// Replaces the audio block.
    pub message_audio: Option<RenderFn>,
    /// Caller-drawn view; its presence alone puts the block in the
    /// content column.
    pub custom_view: Option<RenderFn>,
    /// Replaces the whole ticks block, viewer check included.
    pub ticks: Option<TicksFn>,
    /// Replaces the quick replies row.
    pub quick_replies: Option<RenderFn>,
}

/// One chat message bubble.
///
/// The full input surface of a render: the message, its neighbors for
/// grouping, the side, style and renderer overrides, and the gesture
/// callbacks. [`Bubble::build`] realizes it as a GTK tree; every call
/// recomputes from scratch.
pub struct Bubble {
    /// The viewing user; ticks only show on their own messages.
    pub viewer: User,
    /// Which side the bubble renders on.
    pub position: Position,
    /// The message being rendered.
    pub current_message: Message,
    /// Direct predecessor in the list, if any.
    pub previous_message: Option<Message>,
    /// Direct successor in the list, if any.
    pub next_message: Option<Message>,
    /// Titles for the long-press copy menu.
    pub option_titles: Vec<String>,
    /// Whether the custom view renders after the text instead of
    /// before the media run.
    pub is_custom_view_bottom: bool,
    /// Whether to show the author name on ungrouped messages.
    pub render_username_on_message: bool,
    /// Per-region style overrides.
    pub styles: StyleOverrides,
    /// Caller-drawn block overrides.
    pub renderers: RenderOverrides,
    /// Gesture callbacks.
    pub callbacks: Callbacks,
}

impl Default for Bubble {
    fn default() -> Self {
        Self {
            viewer: User::default(),
            position: Position::default(),
            current_message: EMPTY_MESSAGE.clone(),
            previous_message: None,
            next_message: None,
            option_titles: default_option_titles(),
            is_custom_view_bottom: false,
            render_username_on_message: false,
            styles: StyleOverrides::default(),
            renderers: RenderOverrides::default(),
            callbacks: Callbacks::default(),
        }
    }
}

impl Bubble {
    /// Compose the bubble into a GTK widget tree.
    ///
    /// The tree holds the gesture bindings; everything else is
    /// recomputed per call with no retained state.
    pub fn build(mut self) -> gtk::Widget {
        let callbacks = std::mem::take(&mut self.callbacks);
        let dispatcher = Rc::new(Dispatcher::new(
            self.current_message.clone(),
            self.option_titles.clone(),
            callbacks,
        ));

        let adjacency = Adjacency::classify(
            &self.current_message,
            self.previous_message.as_ref(),
            self.next_message.as_ref(),
        );
        let blocks = select(
            &self.current_message,
            adjacency,
            self.renderers.custom_view.is_some(),
            self.is_custom_view_bottom,
        );
        tracing::trace!(
            "Composing bubble for message {} ({} blocks)",
            self.current_message.id,
            blocks.len()
        );

        let container = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(4)
            .build();
        let container_style = resolve(Region::Container, self.position, &self.styles);
        apply_style(&container, &container_style);

        let wrapper = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(2)
            .build();
        apply_style(&wrapper, &resolve_wrapper(self.position, adjacency, &self.styles));
        if let Some(halign) = container_style.halign {
            wrapper.set_halign(to_gtk_align(halign));
        }

        let mut parent_block = None;
        let quick_replies_row;
        {
            let ctx = self.context(adjacency);
            for block in &blocks {
                if let Some(widget) = self.block_widget(*block, &ctx) {
                    if *block == Block::ParentQuote {
                        parent_block = Some(widget.clone());
                    }
                    wrapper.append(&widget);
                }
            }
            wrapper.append(&self.ticks_row());
            quick_replies_row = self.quick_replies_row(&ctx, &dispatcher);
        }

        let host: Rc<dyn ActionHost> = Rc::new(GtkActionHost::new(&wrapper));
        attach_gestures(&wrapper, parent_block.as_ref(), &dispatcher, &host);

        container.append(&wrapper);
        if let Some(row) = quick_replies_row {
            if let Some(halign) = container_style.halign {
                row.set_halign(to_gtk_align(halign));
            }
            container.append(&row);
        }

        container.upcast()
    }

    fn context(&self, adjacency: Adjacency) -> BlockContext<'_> {
        BlockContext {
            viewer: &self.viewer,
            position: self.position,
            current_message: &self.current_message,
            previous_message: self.previous_message.as_ref(),
            next_message: self.next_message.as_ref(),
            adjacency,
            render_username_on_message: self.render_username_on_message,
            is_custom_view_bottom: self.is_custom_view_bottom,
            text_style: &self.styles.text,
            tick_style: self.styles.tick.as_ref(),
            username_style: self.styles.username.as_ref(),
            parent_wrapper_style: &self.styles.parent_wrapper,
            parent_username_style: &self.styles.parent_username,
            parent_text_style: &self.styles.parent_text,
            parent_view_more_style: self.styles.parent_view_more.as_ref(),
            quick_reply_style: self.styles.quick_replies.as_ref(),
        }
    }

    fn block_widget(&self, block: Block, ctx: &BlockContext<'_>) -> Option<gtk::Widget> {
        match block {
            Block::Header => Some(self.header(ctx)),
            Block::ParentQuote => {
                let preview = self.current_message.parent.as_ref()?;
                Some(parent_quote::build(preview, self.position, &self.styles))
            }
            Block::CustomView => self.renderers.custom_view.as_ref().map(|render| render(ctx)),
            Block::Image => {
                let media = self.current_message.image.as_ref()?;
                Some(
                    self.renderers
                        .message_image
                        .as_ref()
                        .map_or_else(|| default_image(media), |render| render(ctx)),
                )
            }
            Block::Video => {
                let media = self.current_message.video.as_ref()?;
                Some(
                    self.renderers
                        .message_video
                        .as_ref()
                        .map_or_else(|| default_video(media), |render| render(ctx)),
                )
            }
            Block::Audio => {
                let media = self.current_message.audio.as_ref()?;
                Some(
                    self.renderers
                        .message_audio
                        .as_ref()
                        .map_or_else(|| default_audio(media), |render| render(ctx)),
                )
            }
            Block::Text => Some(
                self.renderers
                    .message_text
                    .as_ref()
                    .map_or_else(|| self.default_text(), |render| render(ctx)),
            ),
        }
    }

    /// Username and time, once per grouped run.
    fn header(&self, ctx: &BlockContext<'_>) -> gtk::Widget {
        let row = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .spacing(6)
            .css_classes(["bubble-header"])
            .build();

        if self.render_username_on_message {
            let username = self
                .renderers
                .username
                .as_ref()
                .map_or_else(|| self.default_username(), |render| render(ctx));
            row.append(&username);
        }
        if self.current_message.created_at.is_some() {
            let time = self
                .renderers
                .time
                .as_ref()
                .map_or_else(|| self.default_time(), |render| render(ctx));
            row.append(&time);
        }

        row.upcast()
    }

    fn default_username(&self) -> gtk::Widget {
        let style = resolve(Region::Username, self.position, &self.styles);
        let label = gtk::Label::builder()
            .label(self.current_message.user.name.as_str())
            .halign(gtk::Align::Start)
            .xalign(0.0)
            .build();
        apply_style(&label, &style);
        if let Some(attrs) = label_attributes(&style) {
            label.set_attributes(Some(&attrs));
        }
        label.upcast()
    }

    fn default_time(&self) -> gtk::Widget {
        let label = gtk::Label::builder()
            .halign(gtk::Align::End)
            .valign(gtk::Align::End)
            .css_classes(["caption", "dimmed", "numeric"])
            .build();
        if let Some(created_at) = self.current_message.created_at {
            label.set_label(&format_time(created_at));
        }
        label.upcast()
    }

    fn default_text(&self) -> gtk::Widget {
        let label = gtk::Label::builder()
            .label(self.current_message.text.as_str())
            .halign(gtk::Align::Start)
            .valign(gtk::Align::Start)
            .xalign(0.0)
            .selectable(true)
            .css_classes(["body"])
            .wrap(true)
            .wrap_mode(pango::WrapMode::WordChar)
            .build();
        if let Some(style) = self.styles.text.get(self.position) {
            apply_style(&label, style);
            if let Some(attrs) = label_attributes(style) {
                label.set_attributes(Some(&attrs));
            }
        }
        label.upcast()
    }

    /// The bottom row beneath the content column, holding the ticks.
    fn ticks_row(&self) -> gtk::Widget {
        let row = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .build();
        apply_style(&row, &resolve(Region::BottomRow, self.position, &self.styles));

        if let Some(render_ticks) = &self.renderers.ticks {
            row.append(&render_ticks(&self.current_message));
            return row.upcast();
        }

        let shown = marks(&self.current_message, &self.viewer);
        if !shown.is_empty() {
            let ticks = gtk::Box::builder()
                .orientation(gtk::Orientation::Horizontal)
                .spacing(2)
                .margin_end(10)
                .css_classes(["ticks"])
                .build();
            let style = resolve(Region::Tick, self.position, &self.styles);
            for mark in shown {
                let label = gtk::Label::new(Some(mark.glyph()));
                apply_style(&label, &style);
                if let Some(attrs) = label_attributes(&style) {
                    label.set_attributes(Some(&attrs));
                }
                ticks.append(&label);
            }
            row.append(&ticks);
        }

        row.upcast()
    }

    /// Sibling of the wrapper, never inside it.
    fn quick_replies_row(
        &self,
        ctx: &BlockContext<'_>,
        dispatcher: &Rc<Dispatcher>,
    ) -> Option<gtk::Widget> {
        let replies = self.current_message.quick_replies.as_ref()?;
        if let Some(render) = &self.renderers.quick_replies {
            return Some(render(ctx));
        }
        Some(quick_replies::build(
            replies,
            self.styles.quick_replies.as_ref(),
            dispatcher,
        ))
    }
}

/// Wire the gesture controllers to the dispatcher: tap, long press and
/// swipe on the wrapper, plus the parent-quote tap when that block is
/// present.
fn attach_gestures(
    wrapper: &gtk::Box,
    parent_block: Option<&gtk::Widget>,
    dispatcher: &Rc<Dispatcher>,
    host: &Rc<dyn ActionHost>,
) {
    let press = gtk::GestureClick::new();
    {
        let dispatcher = Rc::clone(dispatcher);
        let host = Rc::clone(host);
        press.connect_released(move |_, _, _, _| dispatcher.dispatch(&host, Gesture::Press));
    }
    wrapper.add_controller(press);

    let long_press = gtk::GestureLongPress::new();
    {
        let dispatcher = Rc::clone(dispatcher);
        let host = Rc::clone(host);
        long_press.connect_pressed(move |gesture, _, _| {
            gesture.set_state(gtk::EventSequenceState::Claimed);
            dispatcher.dispatch(&host, Gesture::LongPress);
        });
    }
    wrapper.add_controller(long_press);

    // Leftward reveal; the gesture owns and resets the drag state.
    let swipe = gtk::GestureDrag::new();
    {
        let dispatcher = Rc::clone(dispatcher);
        let host = Rc::clone(host);
        swipe.connect_drag_end(move |_, offset_x, _| {
            let activated = offset_x <= -SWIPE_ACTIVATION_DX;
            dispatcher.dispatch(&host, Gesture::Swipe { activated });
        });
    }
    wrapper.add_controller(swipe);

    if let Some(parent_widget) = parent_block {
        let tap = gtk::GestureClick::new();
        {
            let dispatcher = Rc::clone(dispatcher);
            let host = Rc::clone(host);
            tap.connect_released(move |gesture, _, _, _| {
                gesture.set_state(gtk::EventSequenceState::Claimed);
                dispatcher.dispatch(&host, Gesture::ParentPress);
            });
        }
        parent_widget.add_controller(tap);
    }
}

/// Default image block: the inline preview, with its caption beneath
/// when present.
fn default_image(media: &Media) -> gtk::Widget {
    let picture = media_picture(media);
    match &media.caption {
        Some(caption) => {
            let column = gtk::Box::builder()
                .orientation(gtk::Orientation::Vertical)
                .spacing(4)
                .build();
            column.append(&picture);
            let label = gtk::Label::builder()
                .label(caption.as_str())
                .halign(gtk::Align::Start)
                .xalign(0.0)
                .wrap(true)
                .wrap_mode(pango::WrapMode::WordChar)
                .css_classes(["body"])
                .build();
            column.append(&label);
            column.upcast()
        }
        None => picture,
    }
}

/// Default video block: preview when available, plus a play row with
/// the duration.
fn default_video(media: &Media) -> gtk::Widget {
    let column = gtk::Box::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(4)
        .css_classes(["media-video"])
        .build();
    if media.has_data() {
        column.append(&media_picture(media));
    }

    let row = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(6)
        .build();
    row.append(&gtk::Image::from_icon_name("media-playback-start-symbolic"));
    let label = media
        .duration_label()
        .unwrap_or_else(|| format!("🎥 {}", i18n!("Video")));
    row.append(
        &gtk::Label::builder()
            .label(label.as_str())
            .css_classes(["caption", "dimmed"])
            .build(),
    );
    column.append(&row);

    column.upcast()
}

/// Default audio block: a voice-message row with the duration.
fn default_audio(media: &Media) -> gtk::Widget {
    let row = gtk::Box::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(6)
        .css_classes(["media-audio"])
        .build();
    row.append(&gtk::Label::new(Some(&format!(
        "🎤 {}",
        i18n!("Voice message")
    ))));
    if let Some(duration) = media.duration_label() {
        row.append(
            &gtk::Label::builder()
                .label(duration.as_str())
                .css_classes(["caption", "dimmed", "numeric"])
                .build(),
        );
    }
    row.upcast()
}

fn media_picture(media: &Media) -> gtk::Widget {
    if media.has_data() {
        let bytes = glib::Bytes::from(&media.data[..]);
        match gdk::Texture::from_bytes(&bytes) {
            Ok(texture) => {
                let picture = gtk::Picture::for_paintable(&texture);
                picture.set_can_shrink(true);
                picture.add_css_class("media");
                if let (Some(width), Some(height)) = (media.width, media.height) {
                    let width = i32::try_from(width.min(MEDIA_MAX_EDGE)).unwrap_or_default();
                    let height = i32::try_from(height.min(MEDIA_MAX_EDGE)).unwrap_or_default();
                    picture.set_size_request(width, height);
                }
                return picture.upcast();
            }
            Err(err) => tracing::warn!("Failed to load inline media preview: {err}"),
        }
    }

    gtk::Image::builder()
        .icon_name("image-missing-symbolic")
        .pixel_size(48)
        .css_classes(["media-missing"])
        .build()
        .upcast()
}

/// GTK implementation of the dispatcher's host abilities: an alert
/// dialog for the action menu and the display clipboard for copies.
pub struct GtkActionHost {
    widget: gtk::Widget,
}

impl GtkActionHost {
    /// Host anchored on the widget used for dialog presentation and
    /// clipboard access.
    pub fn new(widget: &impl IsA<gtk::Widget>) -> Self {
        Self {
            widget: widget.clone().upcast(),
        }
    }
}

impl ActionHost for GtkActionHost {
    fn present_menu(&self, options: &[String], cancel_index: usize, on_select: Box<dyn Fn(usize)>) {
        let dialog = adw::AlertDialog::new(None, None);
        for (index, title) in options.iter().enumerate() {
            dialog.add_response(&index.to_string(), title);
        }
        dialog.set_close_response(&cancel_index.to_string());
        dialog.connect_response(None, move |_, response| {
            if let Ok(index) = response.parse::<usize>() {
                on_select(index);
            }
        });
        dialog.present(Some(&self.widget));
    }

    fn copy_text(&self, text: &str) {
        self.widget.display().clipboard().set_text(text);
        tracing::debug!("Copied message text to the clipboard");
    }
}
