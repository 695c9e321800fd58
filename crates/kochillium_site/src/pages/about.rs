// SPDX-License-Identifier: MIT OR Apache-2.0
//! About page: profile, career, achievements, skills and philosophy.

use super::{card, section_label, section_title};
use crate::content::profile;
use crate::theme::SiteTheme;
use egui::RichText;

/// About page
pub struct AboutPage;

impl AboutPage {
    /// Draw the page
    pub fn ui(ui: &mut egui::Ui, theme: &SiteTheme) {
        ui.add_space(48.0);
        section_label(ui, theme, "ABOUT");
        section_title(ui, "About Me");
        ui.add_space(24.0);

        card(theme).show(ui, |ui| {
            ui.label(RichText::new(profile::PEN_NAME).size(28.0).italics());
            ui.add_space(8.0);
            ui.label(profile::BIO);
        });
        ui.add_space(24.0);

        ui.columns(profile::ACHIEVEMENTS.len(), |columns| {
            for (column, achievement) in columns.iter_mut().zip(profile::ACHIEVEMENTS) {
                card(theme).show(column, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(achievement.value).size(32.0).strong());
                        ui.label(RichText::new(achievement.label).color(theme.colors.muted));
                    });
                });
            }
        });
        ui.add_space(32.0);

        section_label(ui, theme, "CAREER");
        for entry in profile::CAREER {
            ui.label(*entry);
        }
        ui.add_space(32.0);

        section_label(ui, theme, "SKILLS");
        ui.horizontal_wrapped(|ui| {
            for skill in profile::SKILLS {
                egui::Frame::none()
                    .fill(theme.colors.accent.gamma_multiply(0.5))
                    .rounding(egui::Rounding::same(12.0))
                    .inner_margin(egui::Margin::symmetric(12.0, 4.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(*skill).size(13.0));
                    });
            }
        });
        ui.add_space(32.0);

        section_label(ui, theme, "PHILOSOPHY");
        card(theme).show(ui, |ui| {
            ui.label(RichText::new(profile::PHILOSOPHY).italics());
        });
    }
}
