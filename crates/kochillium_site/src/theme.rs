// SPDX-License-Identifier: MIT OR Apache-2.0
//! Site look: a warm cream and charcoal palette with soft rounding.

use egui::{Color32, FontData, FontDefinitions, FontFamily, Rounding, Stroke, Style, Visuals};
use kochillium_sequencer::LoadingStyle;
use std::path::Path;

const CJK_FONT_NAME: &str = "cjk";

/// Site color palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteColors {
    /// Page background
    pub cream: Color32,
    /// Cards and panels
    pub paper: Color32,
    /// Body text
    pub charcoal: Color32,
    /// Secondary text
    pub muted: Color32,
    /// Hairlines and borders
    pub border: Color32,
    /// Highlight (sand)
    pub accent: Color32,
    /// Validation errors
    pub error: Color32,
    /// Successful send
    pub success: Color32,
}

impl Default for SiteColors {
    fn default() -> Self {
        Self {
            cream: Color32::from_rgb(250, 247, 240),
            paper: Color32::from_rgb(255, 253, 248),
            charcoal: Color32::from_rgb(54, 54, 54),
            muted: Color32::from_rgb(120, 116, 110),
            border: Color32::from_rgb(226, 220, 208),
            accent: Color32::from_rgb(253, 230, 138),
            error: Color32::from_rgb(190, 60, 50),
            success: Color32::from_rgb(70, 130, 80),
        }
    }
}

/// Complete site theme
#[derive(Debug, Clone, PartialEq)]
pub struct SiteTheme {
    /// Palette
    pub colors: SiteColors,
    /// Widget corner radius
    pub rounding: f32,
    /// Spacing between items
    pub item_spacing: f32,
}

impl Default for SiteTheme {
    fn default() -> Self {
        Self {
            colors: SiteColors::default(),
            rounding: 6.0,
            item_spacing: 8.0,
        }
    }
}

impl SiteTheme {
    /// Convert to egui Style
    pub fn to_egui_style(&self) -> Style {
        let mut style = Style::default();
        style.visuals = self.to_egui_visuals();
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(14.0, 6.0);
        style
    }

    /// Convert to egui Visuals
    pub fn to_egui_visuals(&self) -> Visuals {
        let colors = &self.colors;
        let rounding = Rounding::same(self.rounding);
        let mut visuals = Visuals::light();

        visuals.panel_fill = colors.cream;
        visuals.window_fill = colors.paper;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.window_rounding = rounding;

        visuals.widgets.noninteractive.bg_fill = colors.paper;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.charcoal);
        visuals.widgets.noninteractive.rounding = rounding;

        visuals.widgets.inactive.bg_fill = colors.paper;
        visuals.widgets.inactive.weak_bg_fill = colors.paper;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors.charcoal);
        visuals.widgets.inactive.rounding = rounding;

        visuals.widgets.hovered.bg_fill = colors.accent.gamma_multiply(0.6);
        visuals.widgets.hovered.weak_bg_fill = colors.accent.gamma_multiply(0.6);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.charcoal);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors.charcoal);
        visuals.widgets.hovered.rounding = rounding;

        visuals.widgets.active.bg_fill = colors.charcoal;
        visuals.widgets.active.weak_bg_fill = colors.charcoal;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, colors.charcoal);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors.cream);
        visuals.widgets.active.rounding = rounding;

        visuals.selection.bg_fill = colors.accent;
        visuals.selection.stroke = Stroke::new(1.0, colors.charcoal);

        visuals.override_text_color = Some(colors.charcoal);
        visuals.hyperlink_color = colors.charcoal;
        visuals.extreme_bg_color = colors.paper;
        visuals.faint_bg_color = colors.cream;

        visuals
    }

    /// Colors for the loading screen
    pub fn loading_style(&self) -> LoadingStyle {
        LoadingStyle {
            background: self.colors.cream,
            ink: self.colors.charcoal,
            sand: self.colors.accent,
        }
    }

    /// Apply this theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style(self.to_egui_style());
    }
}

/// Add a font with Japanese glyphs as a fallback for both families.
///
/// Without one, Japanese copy renders as replacement boxes, so a missing
/// or unreadable file is logged and otherwise ignored.
pub fn install_fonts(ctx: &egui::Context, cjk_font: Option<&Path>) {
    let Some(path) = cjk_font else {
        tracing::debug!("No CJK font configured");
        return;
    };

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Could not read font {}: {}", path.display(), e);
            return;
        }
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(CJK_FONT_NAME.to_string(), FontData::from_owned(bytes).into());
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_string());
    }
    ctx.set_fonts(fonts);
    tracing::info!("Installed CJK font from {}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visuals_use_palette() {
        let theme = SiteTheme::default();
        let visuals = theme.to_egui_visuals();
        assert_eq!(visuals.panel_fill, theme.colors.cream);
        assert_eq!(visuals.override_text_color, Some(theme.colors.charcoal));
        assert!(!visuals.dark_mode);
    }

    #[test]
    fn test_loading_style_matches_palette() {
        let theme = SiteTheme::default();
        let style = theme.loading_style();
        assert_eq!(style.background, theme.colors.cream);
        assert_eq!(style.sand, theme.colors.accent);
    }
}
