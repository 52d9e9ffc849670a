// SPDX-License-Identifier: MPL-2.0
//! Soft glowing orb drifting on a slow sine path. Purely decorative.

use crate::ui::design_tokens::palette;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};

/// Decorative drifting orb.
pub struct FloatingOrb {
    size: f32,
    /// Seconds since the decorative animation epoch.
    elapsed: f32,
    /// Phase offset so multiple orbs drift independently.
    phase: f32,
    color: Color,
}

impl FloatingOrb {
    #[must_use]
    pub fn new(size: f32, elapsed: f32) -> Self {
        Self {
            size,
            elapsed,
            phase: 0.0,
            color: palette::NEON_PURPLE,
        }
    }

    #[must_use]
    pub fn phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for FloatingOrb {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let t = self.elapsed * 0.3 + self.phase;

        // Drift inside the widget bounds
        let drift = frame.width() * 0.08;
        let center = Point::new(
            frame.center().x + drift * t.sin(),
            frame.center().y + drift * (t * 0.7).cos(),
        );

        // Three concentric fills approximate a radial glow
        let base_radius = frame.width() * 0.32;
        let breath = 1.0 + 0.08 * (t * 1.3).sin();
        for (factor, alpha) in [(1.4, 0.06), (1.15, 0.10), (1.0, 0.18)] {
            frame.fill(
                &Path::circle(center, base_radius * factor * breath),
                Color {
                    a: alpha,
                    ..self.color
                },
            );
        }

        vec![frame.into_geometry()]
    }
}
