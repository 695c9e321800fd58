// SPDX-License-Identifier: MIT OR Apache-2.0
//! Header with brand and navigation.

use crate::content::BRAND;
use crate::page::Page;
use crate::theme::SiteTheme;
use egui::{RichText, Stroke};

/// Below this width the navigation collapses into a menu
const COLLAPSE_WIDTH: f32 = 720.0;

/// Site header
#[derive(Debug, Default)]
pub struct Header {
    menu_open: bool,
}

impl Header {
    /// Create a header with the menu closed
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the header. Returns the page picked this frame.
    pub fn ui(&mut self, ui: &mut egui::Ui, current: Page, theme: &SiteTheme) -> Option<Page> {
        let mut picked = None;
        let collapsed = ui.available_width() < COLLAPSE_WIDTH;
        if !collapsed {
            self.menu_open = false;
        }

        ui.horizontal(|ui| {
            if ui
                .add(egui::Label::new(RichText::new(BRAND).size(22.0).strong()).sense(egui::Sense::click()))
                .clicked()
            {
                picked = Some(Page::Home);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if collapsed {
                    let label = if self.menu_open { "CLOSE" } else { "MENU" };
                    if ui.button(label).clicked() {
                        self.menu_open = !self.menu_open;
                    }
                } else {
                    for page in Page::all().iter().rev() {
                        if nav_link(ui, *page, current, theme) {
                            picked = Some(*page);
                        }
                    }
                }
            });
        });

        if collapsed && self.menu_open {
            ui.separator();
            ui.vertical_centered(|ui| {
                for page in Page::all() {
                    if nav_link(ui, *page, current, theme) {
                        picked = Some(*page);
                    }
                }
            });
        }

        if picked.is_some() {
            self.menu_open = false;
        }
        picked
    }
}

/// Navigation link with an underline on the active page
fn nav_link(ui: &mut egui::Ui, page: Page, current: Page, theme: &SiteTheme) -> bool {
    let active = page == current;
    let color = if active { theme.colors.charcoal } else { theme.colors.muted };
    let response = ui.add(
        egui::Label::new(
            RichText::new(page.nav_label())
                .size(13.0)
                .extra_letter_spacing(2.0)
                .color(color),
        )
        .sense(egui::Sense::click()),
    );

    if active || response.hovered() {
        let rect = response.rect;
        let y = rect.bottom() + 2.0;
        ui.painter().line_segment(
            [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
            Stroke::new(1.0, theme.colors.charcoal),
        );
    }

    response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked()
}
