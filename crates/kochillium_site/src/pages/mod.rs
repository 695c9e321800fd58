// SPDX-License-Identifier: MIT OR Apache-2.0
//! Site page and chrome implementations.

mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod works;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use footer::Footer;
pub use header::Header;
pub use hero::HeroPage;
pub use works::WorksPage;

use crate::theme::SiteTheme;
use egui::RichText;

/// Maximum width of the content column
pub const CONTENT_WIDTH: f32 = 960.0;

/// Small spaced-out caps heading used above sections
pub(crate) fn section_label(ui: &mut egui::Ui, theme: &SiteTheme, text: &str) {
    ui.label(
        RichText::new(text)
            .size(12.0)
            .extra_letter_spacing(3.0)
            .color(theme.colors.muted),
    );
}

/// Large section title
pub(crate) fn section_title(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(36.0).strong());
}

/// Card frame around a block of content
pub(crate) fn card(theme: &SiteTheme) -> egui::Frame {
    egui::Frame::none()
        .fill(theme.colors.paper)
        .stroke(egui::Stroke::new(1.0, theme.colors.border))
        .rounding(egui::Rounding::same(theme.rounding * 2.0))
        .inner_margin(egui::Margin::same(20.0))
}
