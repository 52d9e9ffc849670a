// SPDX-License-Identifier: MPL-2.0
//! Canvas-drawn tarot card back: rounded frame, a pulsing 3x3 dot grid,
//! and a rotating four-pointed sparkle in the center.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Animated card back.
pub struct CardBack {
    width: f32,
    height: f32,
    /// Seconds since the decorative animation epoch.
    elapsed: f32,
    /// Agitated cards (mid-shuffle) pulse harder and spin faster.
    agitated: bool,
    /// Per-card phase offset so fanned cards do not pulse in lockstep.
    phase: f32,
}

impl CardBack {
    #[must_use]
    pub fn new(width: f32, height: f32, elapsed: f32) -> Self {
        Self {
            width,
            height,
            elapsed,
            agitated: false,
            phase: 0.0,
        }
    }

    #[must_use]
    pub fn agitated(mut self, agitated: bool) -> Self {
        self.agitated = agitated;
        self
    }

    #[must_use]
    pub fn phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let (width, height) = (self.width, self.height);
        Canvas::new(self)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into()
    }
}

impl<Message> canvas::Program<Message> for CardBack {
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
        let t = self.elapsed + self.phase;

        // Card body
        let body = Path::rounded_rectangle(
            Point::ORIGIN,
            frame.size(),
            radius::LG.into(),
        );
        frame.fill(&body, palette::DEEP_BLUE_LIGHT);
        frame.stroke(
            &body,
            Stroke::default().with_width(2.0).with_color(Color {
                a: 0.3 + 0.2 * (t * 0.8).sin().abs(),
                ..palette::GOLD
            }),
        );

        let center = frame.center();

        // 3x3 dot grid, each dot pulsing on its own delay
        let pulse_speed = if self.agitated { 4.0 } else { 1.5 };
        let grid_gap = frame.width() * 0.12;
        for row in 0..3 {
            for col in 0..3 {
                let index = (row * 3 + col) as f32;
                let alpha =
                    0.25 + 0.35 * ((t * pulse_speed + index * 0.4).sin() * 0.5 + 0.5);
                let dot = Point::new(
                    center.x + (col as f32 - 1.0) * grid_gap,
                    center.y + frame.height() * 0.18 + (row as f32 - 1.0) * grid_gap,
                );
                frame.fill(
                    &Path::circle(dot, frame.width() * 0.02),
                    Color {
                        a: alpha,
                        ..palette::GOLD
                    },
                );
            }
        }

        // Rotating four-pointed sparkle above the grid
        let spin_speed = if self.agitated { 2.4 } else { 0.4 };
        let angle = t * spin_speed * PI;
        let sparkle_center = Point::new(center.x, center.y - frame.height() * 0.18);
        let arm = frame.width() * 0.12;
        let mut sparkle = canvas::path::Builder::new();
        for i in 0..4 {
            let theta = angle + (i as f32) * PI / 2.0;
            let tip = Point::new(
                sparkle_center.x + arm * theta.cos(),
                sparkle_center.y + arm * theta.sin(),
            );
            sparkle.move_to(sparkle_center);
            sparkle.line_to(tip);
        }
        frame.stroke(
            &sparkle.build(),
            Stroke::default()
                .with_width(2.0)
                .with_color(Color {
                    a: 0.8,
                    ..palette::GOLD
                })
                .with_line_cap(canvas::LineCap::Round),
        );

        // Energy ripple while agitated
        if self.agitated {
            let ripple = (t * 1.2).fract();
            let ripple_radius = frame.width() * (0.3 + 0.5 * ripple);
            frame.stroke(
                &Path::circle(center, ripple_radius),
                Stroke::default().with_width(1.5).with_color(Color {
                    a: 0.5 * (1.0 - ripple),
                    ..palette::GOLD
                }),
            );
        }

        vec![frame.into_geometry()]
    }
}
