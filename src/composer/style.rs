use std::sync::LazyLock;

use crate::composer::{Adjacency, Position};

/// Horizontal placement of a region inside its parent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Align {
    /// Leading edge.
    Start,
    /// Centered.
    Center,
    /// Trailing edge.
    End,
    /// Full width.
    Fill,
}

/// RGBA color applied to text regions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component.
    pub a: u8,
}

impl Color {
    /// Tick glyph default.
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    /// Username/parent-username default.
    pub const GRAY: Self = Self::rgb(0xaa, 0xaa, 0xaa);

    /// Opaque color from components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }
}

/// One region's visual attributes.
///
/// `Option` fields merge last-wins; CSS classes accumulate in cascade
/// order, since CSS itself resolves their conflicts.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Style {
    /// CSS classes applied to the region's widget.
    pub css_classes: Vec<String>,
    /// Margin at the leading edge, in pixels.
    pub margin_start: Option<i32>,
    /// Margin at the trailing edge, in pixels.
    pub margin_end: Option<i32>,
    /// Margin above, in pixels.
    pub margin_top: Option<i32>,
    /// Margin below, in pixels.
    pub margin_bottom: Option<i32>,
    /// Minimum height, in pixels.
    pub min_height: Option<i32>,
    /// Horizontal placement.
    pub halign: Option<Align>,
    /// Font size in points, for text regions.
    pub font_size: Option<i32>,
    /// Text color, for text regions.
    pub color: Option<Color>,
}

impl Style {
    /// Style carrying only CSS classes.
    pub fn with_classes(classes: &[&str]) -> Self {
        Self {
            css_classes: classes.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    /// Overlay `other` on this style: its set fields win, its classes
    /// append after ours.
    pub fn merged_with(mut self, other: &Self) -> Self {
        self.css_classes
            .extend(other.css_classes.iter().cloned());
        if other.margin_start.is_some() {
            self.margin_start = other.margin_start;
        }
        if other.margin_end.is_some() {
            self.margin_end = other.margin_end;
        }
        if other.margin_top.is_some() {
            self.margin_top = other.margin_top;
        }
        if other.margin_bottom.is_some() {
            self.margin_bottom = other.margin_bottom;
        }
        if other.min_height.is_some() {
            self.min_height = other.min_height;
        }
        if other.halign.is_some() {
            self.halign = other.halign;
        }
        if other.font_size.is_some() {
            self.font_size = other.font_size;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
        self
    }
}

/// Position-keyed override pair.
///
/// A missing side contributes nothing for that position; the other
/// side's value never leaks across.
#[derive(Clone, Debug)]
pub struct LeftRight<T> {
    /// Value applied when rendering on the left.
    pub left: Option<T>,
    /// Value applied when rendering on the right.
    pub right: Option<T>,
}

impl<T> LeftRight<T> {
    /// The value for the active position, if any.
    pub fn get(&self, position: Position) -> Option<&T> {
        match position {
            Position::Left => self.left.as_ref(),
            Position::Right => self.right.as_ref(),
        }
    }
}

impl<T> Default for LeftRight<T> {
    fn default() -> Self {
        Self {
            left: None,
            right: None,
        }
    }
}

/// Visual regions whose styles the resolver produces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Region {
    /// Outermost row holding the bubble and its quick replies.
    Container,
    /// The bubble body.
    Wrapper,
    /// Corner rounding suppressed toward a grouped next message.
    CornerToNext,
    /// Corner rounding suppressed toward a grouped previous message.
    CornerToPrevious,
    /// Row beneath the content column holding the ticks.
    BottomRow,
    /// Tick glyphs.
    Tick,
    /// Username in the header.
    Username,
    /// Parent-quote wrapper.
    ParentWrapper,
    /// Quoted author name.
    ParentUsername,
    /// Quoted text.
    ParentText,
    /// The show more/show less toggle label.
    ParentViewMore,
}

/// Caller style overrides, one slot per region.
///
/// Tick, username and parent-view-more are position-independent;
/// everything else is keyed by side. `text` and `quick_replies` are
/// passed through to the respective sub-renderers rather than resolved
/// against a base.
#[derive(Clone, Debug, Default)]
pub struct StyleOverrides {
    /// Container region override.
    pub container: LeftRight<Style>,
    /// Wrapper (bubble body) override.
    pub wrapper: LeftRight<Style>,
    /// Corner-to-next override, applied only when grouped with next.
    pub corner_to_next: LeftRight<Style>,
    /// Corner-to-previous override, applied only when grouped with
    /// previous.
    pub corner_to_previous: LeftRight<Style>,
    /// Bottom-row override.
    pub bottom_row: LeftRight<Style>,
    /// Message-text override, forwarded to the text renderer.
    pub text: LeftRight<Style>,
    /// Parent-quote wrapper override.
    pub parent_wrapper: LeftRight<Style>,
    /// Quoted author name override.
    pub parent_username: LeftRight<Style>,
    /// Quoted text override.
    pub parent_text: LeftRight<Style>,
    /// Tick glyph override.
    pub tick: Option<Style>,
    /// Username override.
    pub username: Option<Style>,
    /// Show more/show less label override.
    pub parent_view_more: Option<Style>,
    /// Forwarded to the quick replies renderer.
    pub quick_replies: Option<Style>,
}

/// Per-position base styles for the position-dependent regions.
struct PositionStyles {
    container: Style,
    wrapper: Style,
    corner_to_next: Style,
    corner_to_previous: Style,
    bottom_row: Style,
}

impl PositionStyles {
    fn new(position: Position) -> Self {
        let side = position.as_ref();
        let (margin_start, margin_end, halign) = match position {
            // The off-side margin keeps bubbles from spanning the full
            // row width.
            Position::Left => (None, Some(60), Align::Start),
            Position::Right => (Some(60), None, Align::End),
        };

        Self {
            container: Style {
                halign: Some(halign),
                ..Style::with_classes(&["bubble-container", side])
            },
            wrapper: Style {
                margin_start,
                margin_end,
                min_height: Some(20),
                ..Style::with_classes(&["bubble", side])
            },
            corner_to_next: Style::with_classes(&["corner-to-next"]),
            corner_to_previous: Style::with_classes(&["corner-to-previous"]),
            bottom_row: Style {
                halign: Some(halign),
                ..Style::with_classes(&["bubble-bottom"])
            },
        }
    }
}

static LEFT: LazyLock<PositionStyles> = LazyLock::new(|| PositionStyles::new(Position::Left));
static RIGHT: LazyLock<PositionStyles> = LazyLock::new(|| PositionStyles::new(Position::Right));

static TICK: LazyLock<Style> = LazyLock::new(|| Style {
    font_size: Some(10),
    color: Some(Color::WHITE),
    ..Style::with_classes(&["tick"])
});

static USERNAME: LazyLock<Style> = LazyLock::new(|| Style {
    font_size: Some(12),
    color: Some(Color::GRAY),
    ..Style::with_classes(&["username"])
});

static PARENT_WRAPPER: LazyLock<Style> =
    LazyLock::new(|| Style::with_classes(&["parent-quote"]));

static PARENT_USERNAME: LazyLock<Style> = LazyLock::new(|| Style {
    font_size: Some(12),
    color: Some(Color::GRAY),
    ..Style::with_classes(&["parent-username"])
});

static PARENT_TEXT: LazyLock<Style> = LazyLock::new(|| Style {
    font_size: Some(14),
    ..Style::with_classes(&["parent-text"])
});

static PARENT_VIEW_MORE: LazyLock<Style> =
    LazyLock::new(|| Style::with_classes(&["view-more"]));

/// Base style for one region and position.
fn base(region: Region, position: Position) -> Style {
    let sided = match position {
        Position::Left => &*LEFT,
        Position::Right => &*RIGHT,
    };

    match region {
        Region::Container => sided.container.clone(),
        Region::Wrapper => sided.wrapper.clone(),
        Region::CornerToNext => sided.corner_to_next.clone(),
        Region::CornerToPrevious => sided.corner_to_previous.clone(),
        Region::BottomRow => sided.bottom_row.clone(),
        Region::Tick => TICK.clone(),
        Region::Username => USERNAME.clone(),
        Region::ParentWrapper => PARENT_WRAPPER.clone(),
        Region::ParentUsername => PARENT_USERNAME.clone(),
        Region::ParentText => PARENT_TEXT.clone(),
        Region::ParentViewMore => PARENT_VIEW_MORE.clone(),
    }
}

/// The caller override for one region and position, if any.
fn override_for(
    region: Region,
    position: Position,
    overrides: &StyleOverrides,
) -> Option<&Style> {
    match region {
        Region::Container => overrides.container.get(position),
        Region::Wrapper => overrides.wrapper.get(position),
        Region::CornerToNext => overrides.corner_to_next.get(position),
        Region::CornerToPrevious => overrides.corner_to_previous.get(position),
        Region::BottomRow => overrides.bottom_row.get(position),
        Region::ParentWrapper => overrides.parent_wrapper.get(position),
        Region::ParentUsername => overrides.parent_username.get(position),
        Region::ParentText => overrides.parent_text.get(position),
        Region::Tick => overrides.tick.as_ref(),
        Region::Username => overrides.username.as_ref(),
        Region::ParentViewMore => overrides.parent_view_more.as_ref(),
    }
}

/// Merged style for one region: base first, then the caller override.
///
/// Later entries win per field; an override lacking an entry for the
/// active position contributes nothing.
pub fn resolve(region: Region, position: Position, overrides: &StyleOverrides) -> Style {
    let mut style = base(region, position);
    if let Some(over) = override_for(region, position, overrides) {
        style = style.merged_with(over);
    }
    style
}

/// Wrapper style with its adjacency-conditional corner tiers.
///
/// Cascade order: wrapper base, then
/// each corner tier (its own base plus override) when grouped in that
/// direction, then the wrapper override.
pub fn resolve_wrapper(
    position: Position,
    adjacency: Adjacency,
    overrides: &StyleOverrides,
) -> Style {
    let mut style = base(Region::Wrapper, position);

    if adjacency.with_next {
        style = style.merged_with(&resolve(Region::CornerToNext, position, overrides));
    }
    if adjacency.with_previous {
        style = style.merged_with(&resolve(Region::CornerToPrevious, position, overrides));
    }
    if let Some(over) = overrides.wrapper.get(position) {
        style = style.merged_with(over);
    }

    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_entries_win_per_field() {
        let base = Style {
            margin_top: Some(2),
            margin_bottom: Some(2),
            font_size: Some(10),
            ..Style::default()
        };
        let over = Style {
            margin_top: Some(8),
            color: Some(Color::GRAY),
            ..Style::default()
        };

        let merged = base.merged_with(&over);

        assert_eq!(merged.margin_top, Some(8));
        assert_eq!(merged.margin_bottom, Some(2));
        assert_eq!(merged.font_size, Some(10));
        assert_eq!(merged.color, Some(Color::GRAY));
    }

    #[test]
    fn classes_accumulate_in_cascade_order() {
        let merged = Style::with_classes(&["bubble", "left"])
            .merged_with(&Style::with_classes(&["corner-to-next"]));

        assert_eq!(merged.css_classes, ["bubble", "left", "corner-to-next"]);
    }

    #[test]
    fn missing_position_falls_back_to_base_only() {
        let overrides = StyleOverrides {
            wrapper: LeftRight {
                left: Some(Style {
                    margin_top: Some(12),
                    ..Style::default()
                }),
                right: None,
            },
            ..StyleOverrides::default()
        };

        let resolved = resolve(Region::Wrapper, Position::Right, &overrides);

        // No cross-position leakage: the left override must not apply.
        assert_eq!(resolved, base(Region::Wrapper, Position::Right));
    }

    #[test]
    fn base_wrapper_margins_follow_the_position() {
        let left = resolve(Region::Wrapper, Position::Left, &StyleOverrides::default());
        let right = resolve(Region::Wrapper, Position::Right, &StyleOverrides::default());

        assert_eq!(left.margin_end, Some(60));
        assert_eq!(left.margin_start, None);
        assert_eq!(right.margin_start, Some(60));
        assert_eq!(right.margin_end, None);
        assert_eq!(left.min_height, Some(20));
    }

    #[test]
    fn ungrouped_wrapper_has_no_corner_classes() {
        let style = resolve_wrapper(
            Position::Left,
            Adjacency::default(),
            &StyleOverrides::default(),
        );

        assert!(!style.css_classes.iter().any(|c| c.starts_with("corner")));
    }

    #[test]
    fn grouped_with_previous_applies_the_corner_tier() {
        let adjacency = Adjacency {
            with_previous: true,
            with_next: false,
        };

        let style = resolve_wrapper(Position::Left, adjacency, &StyleOverrides::default());

        assert!(style.css_classes.contains(&"corner-to-previous".to_string()));
        assert!(!style.css_classes.contains(&"corner-to-next".to_string()));
    }

    #[test]
    fn wrapper_override_wins_over_corner_tier() {
        let adjacency = Adjacency {
            with_previous: true,
            with_next: false,
        };
        let overrides = StyleOverrides {
            corner_to_previous: LeftRight {
                left: Some(Style {
                    margin_top: Some(3),
                    ..Style::default()
                }),
                right: None,
            },
            wrapper: LeftRight {
                left: Some(Style {
                    margin_top: Some(9),
                    ..Style::default()
                }),
                right: None,
            },
            ..StyleOverrides::default()
        };

        let style = resolve_wrapper(Position::Left, adjacency, &overrides);

        assert_eq!(style.margin_top, Some(9));
    }

    #[test]
    fn corner_override_rides_its_tier() {
        let overrides = StyleOverrides {
            corner_to_next: LeftRight {
                left: Some(Style::with_classes(&["my-corner"])),
                right: None,
            },
            ..StyleOverrides::default()
        };

        let grouped = Adjacency {
            with_previous: false,
            with_next: true,
        };
        let style = resolve_wrapper(Position::Left, grouped, &overrides);
        assert!(style.css_classes.contains(&"my-corner".to_string()));

        // Not grouped toward next: the whole tier, override included,
        // stays out.
        let style = resolve_wrapper(Position::Left, Adjacency::default(), &overrides);
        assert!(!style.css_classes.contains(&"my-corner".to_string()));
    }

    #[test]
    fn position_independent_overrides_apply_on_both_sides() {
        let overrides = StyleOverrides {
            tick: Some(Style {
                color: Some(Color::rgb(0, 0, 0)),
                ..Style::default()
            }),
            ..StyleOverrides::default()
        };

        for position in [Position::Left, Position::Right] {
            let resolved = resolve(Region::Tick, position, &overrides);
            assert_eq!(resolved.color, Some(Color::rgb(0, 0, 0)));
            assert_eq!(resolved.font_size, Some(10));
        }
    }
}
