use crate::composer::Adjacency;
use crate::state::Message;

/// A renderable sub-element of the bubble content column.
///
/// Ticks and quick replies are placed by the bubble itself and never
/// appear here: ticks go in the bottom row beneath the content column,
/// quick replies as a sibling after the wrapper.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Block {
    /// Username and time row, once per grouped run.
    Header,
    /// Quoted/parent message preview.
    ParentQuote,
    /// Caller-drawn view with no built-in default.
    CustomView,
    /// Image attachment.
    Image,
    /// Video attachment.
    Video,
    /// Audio attachment.
    Audio,
    /// Message text.
    Text,
}

/// Decide which blocks the bubble shows and in what order.
///
/// Each block is gated on presence in the message; two fixed orders
/// exist, and `custom_view_bottom` moves only the custom view from
/// before the media run to after the text.
pub fn select(
    message: &Message,
    adjacency: Adjacency,
    has_custom_view: bool,
    custom_view_bottom: bool,
) -> Vec<Block> {
    let mut blocks = Vec::new();

    if !adjacency.with_previous {
        blocks.push(Block::Header);
    }
    if message.parent.is_some() {
        blocks.push(Block::ParentQuote);
    }
    if has_custom_view && !custom_view_bottom {
        blocks.push(Block::CustomView);
    }
    if message.image.is_some() {
        blocks.push(Block::Image);
    }
    if message.video.is_some() {
        blocks.push(Block::Video);
    }
    if message.audio.is_some() {
        blocks.push(Block::Audio);
    }
    if message.has_text() {
        blocks.push(Block::Text);
    }
    if has_custom_view && custom_view_bottom {
        blocks.push(Block::CustomView);
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Media, ParentPreview};

    fn full_message() -> Message {
        Message {
            id: "1".into(),
            text: "hi".into(),
            image: Some(Media::default()),
            video: Some(Media::default()),
            audio: Some(Media::default()),
            parent: Some(ParentPreview::default()),
            ..Message::default()
        }
    }

    #[test]
    fn default_order_puts_custom_view_before_media() {
        let blocks = select(&full_message(), Adjacency::default(), true, false);

        assert_eq!(
            blocks,
            [
                Block::Header,
                Block::ParentQuote,
                Block::CustomView,
                Block::Image,
                Block::Video,
                Block::Audio,
                Block::Text,
            ]
        );
    }

    #[test]
    fn bottom_variant_moves_only_the_custom_view() {
        let message = full_message();
        let top = select(&message, Adjacency::default(), true, false);
        let bottom = select(&message, Adjacency::default(), true, true);

        let without_custom = |blocks: &[Block]| {
            blocks
                .iter()
                .copied()
                .filter(|b| *b != Block::CustomView)
                .collect::<Vec<_>>()
        };

        assert_eq!(without_custom(&top), without_custom(&bottom));
        assert_eq!(bottom.last(), Some(&Block::CustomView));
    }

    #[test]
    fn absent_content_emits_nothing() {
        let message = Message {
            id: "1".into(),
            text: "hi".into(),
            image: Some(Media::default()),
            ..Message::default()
        };

        let blocks = select(&message, Adjacency::default(), false, false);

        assert_eq!(blocks, [Block::Header, Block::Image, Block::Text]);
    }

    #[test]
    fn grouped_with_previous_suppresses_header() {
        let adjacency = Adjacency {
            with_previous: true,
            with_next: false,
        };

        let blocks = select(&full_message(), adjacency, false, false);

        assert!(!blocks.contains(&Block::Header));
    }

    #[test]
    fn ungrouped_always_shows_header() {
        // No previous message at all: header renders even for an
        // otherwise empty message.
        let blocks = select(&Message::default(), Adjacency::default(), false, false);

        assert_eq!(blocks, [Block::Header]);
    }

    #[test]
    fn grouped_empty_message_renders_empty_body() {
        let adjacency = Adjacency {
            with_previous: true,
            with_next: true,
        };

        let blocks = select(&Message::default(), adjacency, false, false);

        assert!(blocks.is_empty());
    }
}
