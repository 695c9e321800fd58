// SPDX-License-Identifier: MIT OR Apache-2.0
//! Works page: filterable portfolio gallery.

use super::{card, section_label, section_title};
use crate::content::{filtered_works, works, CategoryFilter, Work};
use crate::theme::SiteTheme;
use egui::RichText;

/// Cards per row on wide windows
const WIDE_COLUMNS: usize = 2;

/// Works page state
pub struct WorksPage {
    catalog: Vec<Work>,
    filter: CategoryFilter,
}

impl Default for WorksPage {
    fn default() -> Self {
        Self::new()
    }
}

impl WorksPage {
    /// Page over the built-in catalog
    pub fn new() -> Self {
        Self {
            catalog: works(),
            filter: CategoryFilter::All,
        }
    }

    /// Active filter
    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Change the filter
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        if self.filter != filter {
            tracing::debug!("Works filter: {}", filter.label());
            self.filter = filter;
        }
    }

    /// Works passing the active filter
    pub fn visible(&self) -> Vec<&Work> {
        filtered_works(&self.catalog, self.filter)
    }

    /// Draw the page
    pub fn ui(&mut self, ui: &mut egui::Ui, theme: &SiteTheme) {
        ui.add_space(48.0);
        section_label(ui, theme, "PORTFOLIO");
        section_title(ui, "Works");
        ui.add_space(16.0);

        ui.horizontal_wrapped(|ui| {
            for option in CategoryFilter::options() {
                if ui.selectable_label(self.filter() == option, option.label()).clicked() {
                    self.set_filter(option);
                }
            }
        });
        ui.add_space(24.0);

        let columns = if ui.available_width() < 640.0 { 1 } else { WIDE_COLUMNS };
        let visible = self.visible();
        for row in visible.chunks(columns) {
            ui.columns(columns, |cols| {
                for (col, work) in cols.iter_mut().zip(row) {
                    work_card(col, work, theme);
                }
            });
            ui.add_space(16.0);
        }
    }
}

fn work_card(ui: &mut egui::Ui, work: &Work, theme: &SiteTheme) {
    card(theme).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(work.category.label())
                    .size(11.0)
                    .extra_letter_spacing(2.0)
                    .color(theme.colors.muted),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(work.year.to_string()).size(11.0).color(theme.colors.muted));
            });
        });
        ui.label(RichText::new(&work.title).size(20.0).strong());
        ui.label(RichText::new(&work.client).color(theme.colors.muted));
        ui.add_space(6.0);
        ui.label(&work.description);
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            for tag in &work.tags {
                ui.label(RichText::new(format!("#{tag}")).size(12.0).color(theme.colors.muted));
            }
        });
        ui.label(RichText::new(&work.metrics).strong().background_color(theme.colors.accent));
        ui.hyperlink_to(RichText::new("View cover").size(12.0), &work.image);
    });
}
