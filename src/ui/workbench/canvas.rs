// SPDX-License-Identifier: MPL-2.0
//! Canvas drawing the tree image under the current pan and zoom.

use super::component::Message;
use crate::build::TreeImage;
use crate::ui::state::Transform;
use iced::widget::canvas::{self, Action, Event};
use iced::{mouse, Rectangle, Theme};

/// Draws `image` centered in the canvas, scaled and shifted by `transform`.
///
/// A left press inside the drawn image starts a drag; presses on the empty
/// margin around it are ignored.
#[derive(Debug, Clone, Copy)]
pub struct TreeCanvas<'a> {
    image: &'a TreeImage,
    transform: Transform,
    dragging: bool,
}

impl<'a> TreeCanvas<'a> {
    #[must_use]
    pub fn new(image: &'a TreeImage, transform: Transform, dragging: bool) -> Self {
        Self {
            image,
            transform,
            dragging,
        }
    }

    fn image_bounds(&self, bounds: Rectangle) -> Rectangle {
        self.transform.image_rect(bounds.size(), self.image.size())
    }

    /// Whether `cursor` is over the drawn image, not just the canvas.
    fn is_over_image(&self, bounds: Rectangle, cursor: mouse::Cursor) -> bool {
        cursor
            .position_in(bounds)
            .is_some_and(|position| self.image_bounds(bounds).contains(position))
    }
}

impl canvas::Program<Message> for TreeCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
                if self.is_over_image(bounds, cursor) =>
            {
                let position = cursor.position()?;
                Some(Action::publish(Message::ImagePressed(position)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.draw_image(self.image_bounds(bounds), self.image.handle());
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging {
            mouse::Interaction::Grabbing
        } else if self.is_over_image(bounds, cursor) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::tiny_png_base64;
    use canvas::Program;
    use iced::Point;

    const BOUNDS: Rectangle = Rectangle {
        x: 100.0,
        y: 50.0,
        width: 800.0,
        height: 600.0,
    };

    fn image() -> TreeImage {
        TreeImage::from_base64(&tiny_png_base64()).expect("valid png")
    }

    fn press(program: &TreeCanvas<'_>, at: Point) -> Option<Message> {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        program
            .update(&mut (), &event, BOUNDS, mouse::Cursor::Available(at))
            .and_then(|action| action.into_inner().0)
    }

    fn identity() -> Transform {
        Transform {
            translate: iced::Vector::ZERO,
            scale: 1.0,
        }
    }

    #[test]
    fn press_on_image_publishes_window_position() {
        let image = image();
        let program = TreeCanvas::new(&image, identity(), false);
        let center = Point::new(BOUNDS.x + 400.2, BOUNDS.y + 300.2);

        assert!(matches!(
            press(&program, center),
            Some(Message::ImagePressed(p)) if p == center
        ));
    }

    #[test]
    fn press_in_margin_is_ignored() {
        let image = image();
        let program = TreeCanvas::new(&image, identity(), false);

        assert!(press(&program, Point::new(BOUNDS.x + 5.0, BOUNDS.y + 5.0)).is_none());
    }

    #[test]
    fn press_follows_the_panned_image() {
        let image = image();
        let program = TreeCanvas::new(
            &image,
            Transform {
                translate: iced::Vector::new(-395.0, -295.0),
                scale: 1.0,
            },
            false,
        );

        assert!(press(&program, Point::new(BOUNDS.x + 5.2, BOUNDS.y + 5.2)).is_some());
        assert!(press(&program, Point::new(BOUNDS.x + 400.2, BOUNDS.y + 300.2)).is_none());
    }

    #[test]
    fn press_outside_canvas_is_ignored() {
        let image = image();
        let program = TreeCanvas::new(&image, identity(), false);

        assert!(press(&program, Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn other_buttons_are_ignored() {
        let image = image();
        let program = TreeCanvas::new(&image, identity(), false);
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        let center = Point::new(BOUNDS.x + 400.2, BOUNDS.y + 300.2);

        assert!(program
            .update(&mut (), &event, BOUNDS, mouse::Cursor::Available(center))
            .is_none());
    }
}
