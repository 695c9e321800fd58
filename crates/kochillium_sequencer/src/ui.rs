// SPDX-License-Identifier: MIT OR Apache-2.0
//! Loading screen rendering.
//!
//! Features:
//! - Hourglass with draining sand during the intro
//! - Bordered logo box that fades in
//! - Typewriter text with a blinking caret
//! - Subtitle, divider and accent words
//! - Click anywhere to skip

use crate::clock::Clock;
use crate::phase::Phase;
use crate::sequencer::PhaseSequencer;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};
use std::f32::consts::TAU;

const HOURGLASS_WIDTH: f32 = 48.0;
const HOURGLASS_HEIGHT: f32 = 96.0;
const NECK_WIDTH: f32 = 6.0;
const LOGO_FONT_SIZE: f32 = 56.0;
const SUBTITLE_FONT_SIZE: f32 = 18.0;
const WORDS_FONT_SIZE: f32 = 12.0;
const LOGO_PADDING: Vec2 = Vec2::new(48.0, 32.0);
const CARET_BLINK_HZ: f32 = 2.0;

/// Colors used by the loading screen
#[derive(Debug, Clone, Copy)]
pub struct LoadingStyle {
    /// Screen background
    pub background: Color32,
    /// Text and outlines
    pub ink: Color32,
    /// Sand fill
    pub sand: Color32,
}

impl Default for LoadingStyle {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(250, 247, 240),
            ink: Color32::from_rgb(54, 54, 54),
            sand: Color32::from_rgb(253, 230, 138),
        }
    }
}

/// What the user did on the loading screen this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadingResponse {
    /// The screen was clicked
    pub skip_requested: bool,
}

/// Stateless renderer for a [`PhaseSequencer`]
pub struct LoadingScreen;

impl LoadingScreen {
    /// Draw as a full-window panel
    pub fn show<C: Clock>(
        ctx: &egui::Context,
        sequencer: &PhaseSequencer<C>,
        style: &LoadingStyle,
    ) -> LoadingResponse {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(style.background))
            .show(ctx, |ui| Self::ui(ui, sequencer, style))
            .inner
    }

    /// Draw into the remaining space of `ui`
    pub fn ui<C: Clock>(
        ui: &mut egui::Ui,
        sequencer: &PhaseSequencer<C>,
        style: &LoadingStyle,
    ) -> LoadingResponse {
        let rect = ui.max_rect();
        let response = ui.interact(rect, ui.id().with("loading_screen"), Sense::click());
        let painter = ui.painter_at(rect);
        let time = ui.input(|i| i.time) as f32;

        painter.rect_filled(rect, 0.0, style.background);

        if sequencer.phase() == Phase::Intro {
            Self::draw_hourglass(&painter, rect.center(), sequencer.intro_progress(), style);
            let pulse = 0.45 + 0.15 * (time * TAU * 0.5).sin();
            painter.text(
                rect.center() + Vec2::new(0.0, HOURGLASS_HEIGHT * 0.5 + 32.0),
                Align2::CENTER_CENTER,
                &sequencer.config().intro.caption,
                FontId::proportional(13.0),
                style.ink.gamma_multiply(pulse),
            );
        } else {
            Self::draw_logo(&painter, rect.center(), sequencer, style, time);
        }

        ui.ctx().request_repaint();

        LoadingResponse {
            skip_requested: response.clicked(),
        }
    }

    fn draw_hourglass(painter: &egui::Painter, center: Pos2, progress: f32, style: &LoadingStyle) {
        let half_w = HOURGLASS_WIDTH * 0.5;
        let half_h = HOURGLASS_HEIGHT * 0.5;
        let neck = NECK_WIDTH * 0.5;
        let stroke = Stroke::new(2.0, style.ink);

        // Sand: top bulb drains into the bottom bulb
        let top_level = 1.0 - progress.clamp(0.0, 1.0);
        let bottom_level = progress.clamp(0.0, 1.0);

        if top_level > 0.0 {
            let surface_y = center.y - half_h * top_level;
            let surface_half = neck + (half_w - neck) * top_level;
            painter.add(Shape::convex_polygon(
                vec![
                    Pos2::new(center.x - surface_half, surface_y),
                    Pos2::new(center.x + surface_half, surface_y),
                    Pos2::new(center.x + neck, center.y),
                    Pos2::new(center.x - neck, center.y),
                ],
                style.sand,
                Stroke::NONE,
            ));
        }

        if bottom_level > 0.0 {
            let surface_y = center.y + half_h - half_h * bottom_level;
            let surface_half = half_w - (half_w - neck) * bottom_level;
            painter.add(Shape::convex_polygon(
                vec![
                    Pos2::new(center.x - surface_half, surface_y),
                    Pos2::new(center.x + surface_half, surface_y),
                    Pos2::new(center.x + half_w, center.y + half_h),
                    Pos2::new(center.x - half_w, center.y + half_h),
                ],
                style.sand,
                Stroke::NONE,
            ));
            // Falling stream
            painter.line_segment(
                [center, Pos2::new(center.x, surface_y)],
                Stroke::new(1.0, style.sand),
            );
        }

        // Glass outline
        let outline = vec![
            Pos2::new(center.x - half_w, center.y - half_h),
            Pos2::new(center.x + half_w, center.y - half_h),
            Pos2::new(center.x + neck, center.y),
            Pos2::new(center.x + half_w, center.y + half_h),
            Pos2::new(center.x - half_w, center.y + half_h),
            Pos2::new(center.x - neck, center.y),
        ];
        painter.add(Shape::closed_line(outline, stroke));
    }

    fn draw_logo<C: Clock>(
        painter: &egui::Painter,
        center: Pos2,
        sequencer: &PhaseSequencer<C>,
        style: &LoadingStyle,
        time: f32,
    ) {
        let opacity = sequencer.logo_opacity();
        let logo_font = FontId::proportional(LOGO_FONT_SIZE);

        // Size the box for the full text so it does not grow while typing
        let full = painter.layout_no_wrap(
            sequencer.primary_full_text().to_string(),
            logo_font.clone(),
            style.ink,
        );
        let box_size = full.size() + LOGO_PADDING * 2.0;
        // Slides up into place as it fades in
        let box_center = center + Vec2::new(0.0, 16.0 * (1.0 - opacity) - 40.0);
        let box_rect = Rect::from_center_size(box_center, box_size);

        painter.rect_filled(box_rect, 16.0, style.background.gamma_multiply(0.9 * opacity));
        painter.rect_stroke(
            box_rect,
            16.0,
            Stroke::new(1.0, style.ink.gamma_multiply(0.1 * opacity)),
        );

        let text_origin = box_rect.left_top() + LOGO_PADDING;
        let typed = painter.layout_no_wrap(
            sequencer.primary_text().to_string(),
            logo_font,
            style.ink.gamma_multiply(opacity),
        );
        let typed_width = typed.size().x;
        painter.galley(text_origin, typed, style.ink);

        let typing = sequencer.phase() == Phase::PrimaryTextReveal
            && sequencer.primary_text().len() < sequencer.primary_full_text().len();
        if typing && (time * CARET_BLINK_HZ).fract() < 0.5 {
            let x = text_origin.x + typed_width + 4.0;
            painter.line_segment(
                [
                    Pos2::new(x, text_origin.y + 4.0),
                    Pos2::new(x, text_origin.y + full.size().y - 4.0),
                ],
                Stroke::new(2.0, style.ink),
            );
        }

        let mut y = box_rect.bottom() + 28.0;
        if !sequencer.secondary_text().is_empty() {
            painter.text(
                Pos2::new(center.x, y),
                Align2::CENTER_CENTER,
                sequencer.secondary_text(),
                FontId::proportional(SUBTITLE_FONT_SIZE),
                style.ink.gamma_multiply(0.7),
            );
        }
        y += 32.0;

        let words = sequencer.words();
        let any_visible = words.iter().any(|word| word.opacity > 0.0);
        if any_visible {
            painter.line_segment(
                [Pos2::new(center.x - 48.0, y), Pos2::new(center.x + 48.0, y)],
                Stroke::new(2.0, style.ink.gamma_multiply(0.15)),
            );
        }
        y += 24.0;

        // Words laid out on one line, separated by bullets
        let font = FontId::proportional(WORDS_FONT_SIZE);
        let gap = 24.0;
        let galleys: Vec<_> = words
            .iter()
            .map(|word| {
                let color = style.ink.gamma_multiply(0.5 * word.opacity / 100.0);
                painter.layout_no_wrap(word.word.clone(), font.clone(), color)
            })
            .collect();
        let total: f32 = galleys.iter().map(|g| g.size().x).sum::<f32>()
            + gap * galleys.len().saturating_sub(1) as f32;

        let mut x = center.x - total * 0.5;
        for (index, galley) in galleys.into_iter().enumerate() {
            let width = galley.size().x;
            if index > 0 {
                let dot_opacity = words[index].opacity / 100.0;
                painter.circle_filled(
                    Pos2::new(x - gap * 0.5, y + galley.size().y * 0.5),
                    1.5,
                    style.ink.gamma_multiply(0.5 * dot_opacity),
                );
            }
            painter.galley(Pos2::new(x, y), galley, style.ink);
            x += width + gap;
        }
    }
}
