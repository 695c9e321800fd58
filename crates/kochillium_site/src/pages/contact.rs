// SPDX-License-Identifier: MIT OR Apache-2.0
//! Contact page: enquiry form and service list.

use super::{card, section_label, section_title};
use crate::contact::{send, Budget, ContactForm, ContactSubmitter, Field, FormStatus, ProjectType};
use crate::content::{profile, CONTACT_EMAIL};
use crate::theme::SiteTheme;
use egui::RichText;

/// Contact page state
pub struct ContactPage {
    form: ContactForm,
    status: FormStatus,
    submitter: Box<dyn ContactSubmitter>,
}

impl ContactPage {
    /// Page delivering through `submitter`
    pub fn new(submitter: Box<dyn ContactSubmitter>) -> Self {
        Self {
            form: ContactForm::default(),
            status: FormStatus::Idle,
            submitter,
        }
    }

    /// Outcome of the last send
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Current form values
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Mutable form values
    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    /// Validate and deliver the form
    pub fn submit(&mut self) {
        self.status = send(&mut self.form, self.submitter.as_ref());
    }

    fn field_error(&self, field: Field) -> Option<&'static str> {
        match &self.status {
            FormStatus::Invalid(errors) => errors
                .iter()
                .find(|error| error.field() == field)
                .map(|error| error.message()),
            _ => None,
        }
    }

    /// Draw the page
    pub fn ui(&mut self, ui: &mut egui::Ui, theme: &SiteTheme) {
        ui.add_space(48.0);
        section_label(ui, theme, "CONTACT");
        section_title(ui, "Let's Work Together");
        ui.add_space(24.0);

        ui.columns(2, |columns| {
            self.form_ui(&mut columns[0], theme);
            Self::services_ui(&mut columns[1], theme);
        });
    }

    fn form_ui(&mut self, ui: &mut egui::Ui, theme: &SiteTheme) {
        card(theme).show(ui, |ui| {
            text_field(ui, "お名前 *", &mut self.form.name, false);
            self.error_line(ui, theme, Field::Name);

            text_field(ui, "メールアドレス *", &mut self.form.email, false);
            self.error_line(ui, theme, Field::Email);

            text_field(ui, "会社名", &mut self.form.company, false);

            ui.label("ご依頼内容");
            egui::ComboBox::from_id_salt("contact_project_type")
                .selected_text(self.form.project_type.map_or("選択してください", |p| p.label()))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.form.project_type, None, "選択してください");
                    for option in ProjectType::all() {
                        ui.selectable_value(&mut self.form.project_type, Some(*option), option.label());
                    }
                });

            ui.label("ご予算");
            egui::ComboBox::from_id_salt("contact_budget")
                .selected_text(self.form.budget.map_or("選択してください", |b| b.label()))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.form.budget, None, "選択してください");
                    for option in Budget::all() {
                        ui.selectable_value(&mut self.form.budget, Some(*option), option.label());
                    }
                });

            text_field(ui, "メッセージ *", &mut self.form.message, true);
            self.error_line(ui, theme, Field::Message);

            ui.add_space(12.0);
            if ui.button(RichText::new("送信する").size(15.0)).clicked() {
                self.submit();
            }

            match &self.status {
                FormStatus::Sent(id) => {
                    ui.label(
                        RichText::new(format!("送信しました。受付番号: {id}"))
                            .color(theme.colors.success),
                    );
                }
                FormStatus::Failed(reason) => {
                    ui.label(
                        RichText::new(format!("送信に失敗しました: {reason}"))
                            .color(theme.colors.error),
                    );
                }
                FormStatus::Idle | FormStatus::Invalid(_) => {}
            }
        });
    }

    fn error_line(&self, ui: &mut egui::Ui, theme: &SiteTheme, field: Field) {
        if let Some(message) = self.field_error(field) {
            ui.label(RichText::new(message).size(12.0).color(theme.colors.error));
        }
    }

    fn services_ui(ui: &mut egui::Ui, theme: &SiteTheme) {
        section_label(ui, theme, "SERVICES");
        for service in profile::SERVICES {
            ui.label(format!("• {service}"));
        }
        ui.add_space(24.0);
        section_label(ui, theme, "EMAIL");
        ui.label(RichText::new(CONTACT_EMAIL).strong());
    }
}

fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String, multiline: bool) {
    ui.label(label);
    let edit = if multiline {
        egui::TextEdit::multiline(value).desired_rows(6)
    } else {
        egui::TextEdit::singleline(value)
    };
    ui.add(edit.desired_width(f32::INFINITY));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::LogSubmitter;

    #[test]
    fn test_field_errors_surface_per_field() {
        let mut page = ContactPage::new(Box::new(LogSubmitter::new()));
        page.form_mut().email = "broken".to_string();
        page.submit();

        assert!(matches!(page.status(), FormStatus::Invalid(_)));
        assert!(page.field_error(Field::Name).is_some());
        assert_eq!(
            page.field_error(Field::Email),
            Some("メールアドレスの形式が正しくありません")
        );
    }

    #[test]
    fn test_successful_submit_clears_form() {
        let mut page = ContactPage::new(Box::new(LogSubmitter::new()));
        let form = page.form_mut();
        form.name = "Hanako".to_string();
        form.email = "hanako@example.jp".to_string();
        form.message = "Hello".to_string();
        page.submit();

        assert!(matches!(page.status(), FormStatus::Sent(_)));
        assert_eq!(page.form(), &ContactForm::default());
        assert!(page.field_error(Field::Name).is_none());
    }
}
