// SPDX-License-Identifier: MIT OR Apache-2.0
//! Landing hero.

use crate::content::BRAND;
use crate::page::Page;
use crate::theme::SiteTheme;
use egui::RichText;

/// Home page hero
pub struct HeroPage;

impl HeroPage {
    /// Draw the hero. Returns the page picked this frame.
    pub fn ui(ui: &mut egui::Ui, theme: &SiteTheme) -> Option<Page> {
        let mut picked = None;
        let height = ui.available_height().max(480.0);

        ui.allocate_ui_with_layout(
            egui::vec2(ui.available_width(), height),
            egui::Layout::top_down(egui::Align::Center),
            |ui| {
                ui.add_space(height * 0.25);
                ui.label(RichText::new(BRAND).size(72.0).strong());
                ui.add_space(12.0);
                ui.label(
                    RichText::new("Web Writer. Content Strategist.")
                        .size(20.0)
                        .color(theme.colors.muted),
                );
                ui.add_space(8.0);
                ui.label(RichText::new("高知の魅力をあなたに").size(16.0));
                ui.add_space(32.0);

                if ui.button(RichText::new("詳しく見る").size(15.0)).clicked() {
                    picked = Some(Page::About);
                }
            },
        );

        picked
    }
}
