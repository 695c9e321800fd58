// SPDX-License-Identifier: MIT OR Apache-2.0
//! Site footer.

use crate::content::{BRAND, CONTACT_EMAIL};
use crate::page::Page;
use crate::theme::SiteTheme;
use egui::RichText;

/// Site footer
pub struct Footer;

impl Footer {
    /// Draw the footer. Returns the page picked this frame.
    pub fn ui(ui: &mut egui::Ui, theme: &SiteTheme) -> Option<Page> {
        let mut picked = None;
        let muted = theme.colors.muted;

        ui.add_space(48.0);
        ui.separator();
        ui.add_space(24.0);

        ui.columns(3, |columns| {
            columns[0].label(RichText::new(BRAND).size(20.0).strong());
            columns[0].label(RichText::new("戦略的なコンテンツ制作で").color(muted));
            columns[0].label(RichText::new("ビジネスの成長をサポートします").color(muted));

            columns[1].label(RichText::new("NAVIGATION").size(12.0).extra_letter_spacing(2.0));
            for page in Page::all() {
                if columns[1].link(RichText::new(page.nav_label()).color(muted)).clicked() {
                    picked = Some(*page);
                }
            }

            columns[2].label(RichText::new("CONNECT").size(12.0).extra_letter_spacing(2.0));
            columns[2].label(RichText::new(CONTACT_EMAIL).color(muted));
        });

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("© 2024 Ko-ChilLium. ALL RIGHTS RESERVED.")
                    .size(11.0)
                    .extra_letter_spacing(1.5)
                    .color(muted),
            );
        });
        ui.add_space(16.0);

        picked
    }
}
