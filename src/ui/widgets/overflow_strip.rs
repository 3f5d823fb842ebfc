// SPDX-License-Identifier: MPL-2.0
//! A single-row strip that shows its content shifted left by a fixed offset.
//!
//! The content is laid out at its natural width, moved by `-offset` and
//! clipped to the strip bounds. Wheel and touch scrolling are swallowed so
//! the offset only changes through the owner's state. Whenever the visible
//! width or the content width changes, the strip publishes both through
//! `on_measure`, which is how the owner learns about resizes.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{window, Element, Event, Length, Point, Rectangle, Size};

/// Widths observed during the last notification.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct State {
    last_measure: Option<(f32, f32)>,
}

/// Horizontally offset, clipped, wheel-inert container.
pub struct OverflowStrip<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    offset: f32,
    on_measure: Option<Box<dyn Fn(f32, f32) -> Message + 'a>>,
}

impl<'a, Message, Theme, Renderer> OverflowStrip<'a, Message, Theme, Renderer> {
    /// Creates a strip showing `content` from its leading edge.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            offset: 0.0,
            on_measure: None,
        }
    }

    /// Shifts the content left by `offset` pixels.
    #[must_use]
    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset.max(0.0);
        self
    }

    /// Sets the message produced with `(client_width, scroll_width)` when
    /// either width changes.
    #[must_use]
    pub fn on_measure(mut self, f: impl Fn(f32, f32) -> Message + 'a) -> Self {
        self.on_measure = Some(Box::new(f));
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for OverflowStrip<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Shrink)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let content_limits =
            layout::Limits::new(Size::ZERO, Size::new(f32::INFINITY, limits.max().height));
        let content = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &content_limits);

        let size = limits.resolve(Length::Fill, Length::Shrink, content.size());
        layout::Node::with_children(size, vec![content.move_to(Point::new(-self.offset, 0.0))])
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let Some(visible) = bounds.intersection(viewport) else {
            return;
        };
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        renderer.with_layer(visible, |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                content_layout,
                clip_cursor(cursor, bounds),
                &visible,
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        if let Event::Window(window::Event::RedrawRequested(_)) = event {
            let measure = (bounds.width, content_layout.bounds().width);
            let state = tree.state.downcast_mut::<State>();
            if state.last_measure != Some(measure) {
                state.last_measure = Some(measure);
                if let Some(on_measure) = &self.on_measure {
                    shell.publish(on_measure(measure.0, measure.1));
                }
            }
        }

        if is_scroll_event(event) {
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            content_layout,
            clip_cursor(cursor, bounds),
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let Some(content_layout) = layout.children().next() else {
            return mouse::Interaction::default();
        };
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            content_layout,
            clip_cursor(cursor, layout.bounds()),
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget_mut().operate(
                &mut tree.children[0],
                content_layout,
                renderer,
                operation,
            );
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let content_layout = layout.children().next()?;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            content_layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<OverflowStrip<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(strip: OverflowStrip<'a, Message, Theme, Renderer>) -> Self {
        Self::new(strip)
    }
}

/// Helper function to create an overflow strip.
pub fn overflow_strip<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> OverflowStrip<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    OverflowStrip::new(content)
}

/// Content scrolled out of view must not react to the pointer.
fn clip_cursor(cursor: mouse::Cursor, bounds: Rectangle) -> mouse::Cursor {
    if cursor.is_over(bounds) {
        cursor
    } else {
        mouse::Cursor::Unavailable
    }
}

fn is_scroll_event(event: &Event) -> bool {
    matches!(
        event,
        Event::Mouse(mouse::Event::WheelScrolled { .. })
            | Event::Touch(iced::touch::Event::FingerMoved { .. })
    )
}
