// SPDX-License-Identifier: MIT OR Apache-2.0
//! Contact form model, validation and submission.
//!
//! The form is flattened into a name→value mapping before it is handed to a
//! [`ContactSubmitter`]. Submitters decide what delivery means: logging it,
//! or dropping a JSON file into an outbox directory.

use indexmap::IndexMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

/// Contact errors
#[derive(Debug, Error)]
pub enum ContactError {
    /// The form did not pass validation
    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),

    /// IO error while writing the outbox
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for contact operations
pub type Result<T> = std::result::Result<T, ContactError>;

/// Kind of work being enquired about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    /// Blog posts and columns
    Blog,
    /// SEO articles
    Seo,
    /// Copywriting
    Copy,
    /// Content strategy
    Strategy,
    /// Anything else
    Other,
}

impl ProjectType {
    /// Options in display order
    pub fn all() -> &'static [ProjectType] {
        &[
            ProjectType::Blog,
            ProjectType::Seo,
            ProjectType::Copy,
            ProjectType::Strategy,
            ProjectType::Other,
        ]
    }

    /// Submitted value
    pub fn value(&self) -> &'static str {
        match self {
            ProjectType::Blog => "blog",
            ProjectType::Seo => "seo",
            ProjectType::Copy => "copy",
            ProjectType::Strategy => "strategy",
            ProjectType::Other => "other",
        }
    }

    /// Label shown in the picker
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Blog => "ブログ記事",
            ProjectType::Seo => "SEO記事",
            ProjectType::Copy => "コピーライティング",
            ProjectType::Strategy => "コンテンツ戦略",
            ProjectType::Other => "その他",
        }
    }
}

/// Budget bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Budget {
    /// Up to 50,000 yen
    Under50k,
    /// 50,000 to 100,000 yen
    From50kTo100k,
    /// 100,000 to 300,000 yen
    From100kTo300k,
    /// 300,000 to 500,000 yen
    From300kTo500k,
    /// 500,000 yen or more
    Over500k,
}

impl Budget {
    /// Options in display order
    pub fn all() -> &'static [Budget] {
        &[
            Budget::Under50k,
            Budget::From50kTo100k,
            Budget::From100kTo300k,
            Budget::From300kTo500k,
            Budget::Over500k,
        ]
    }

    /// Submitted value
    pub fn value(&self) -> &'static str {
        match self {
            Budget::Under50k => "50k",
            Budget::From50kTo100k => "100k",
            Budget::From100kTo300k => "300k",
            Budget::From300kTo500k => "500k",
            Budget::Over500k => "more",
        }
    }

    /// Label shown in the picker
    pub fn label(&self) -> &'static str {
        match self {
            Budget::Under50k => "〜5万円",
            Budget::From50kTo100k => "5万円〜10万円",
            Budget::From100kTo300k => "10万円〜30万円",
            Budget::From300kTo500k => "30万円〜50万円",
            Budget::Over500k => "50万円以上",
        }
    }
}

/// Form fields that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Sender name
    Name,
    /// Reply address
    Email,
    /// Enquiry body
    Message,
}

impl Field {
    /// Key in the flattened mapping
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required field is blank
    #[error("{} is required", .0.key())]
    Required(Field),
    /// The email address is not `local@domain.tld`
    #[error("email address is malformed")]
    MalformedEmail,
}

impl FieldError {
    /// Field the error belongs to
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) => *field,
            FieldError::MalformedEmail => Field::Email,
        }
    }

    /// Message shown under the input
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required(_) => "必須項目です",
            FieldError::MalformedEmail => "メールアドレスの形式が正しくありません",
        }
    }
}

/// Editable form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name (required)
    pub name: String,
    /// Reply address (required)
    pub email: String,
    /// Company name
    pub company: String,
    /// Kind of work
    pub project_type: Option<ProjectType>,
    /// Budget bracket
    pub budget: Option<Budget>,
    /// Enquiry body (required)
    pub message: String,
}

impl ContactForm {
    /// Flat name→value mapping in form order. Unset options map to "".
    pub fn fields(&self) -> IndexMap<String, String> {
        let mut fields = IndexMap::new();
        fields.insert("name".to_string(), self.name.trim().to_string());
        fields.insert("email".to_string(), self.email.trim().to_string());
        fields.insert("company".to_string(), self.company.trim().to_string());
        fields.insert(
            "projectType".to_string(),
            self.project_type.map(|p| p.value()).unwrap_or_default().to_string(),
        );
        fields.insert(
            "budget".to_string(),
            self.budget.map(|b| b.value()).unwrap_or_default().to_string(),
        );
        fields.insert("message".to_string(), self.message.trim().to_string());
        fields
    }

    /// Every validation failure, in form order
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::Required(Field::Name));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::Required(Field::Email));
        } else if !is_valid_email(email) {
            errors.push(FieldError::MalformedEmail);
        }

        if self.message.trim().is_empty() {
            errors.push(FieldError::Required(Field::Message));
        }

        errors
    }

    /// Validate and package for submission
    pub fn to_submission(&self) -> Result<ContactSubmission> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(ContactError::Invalid(errors));
        }
        Ok(ContactSubmission::new(self.fields()))
    }

    /// Reset every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// A validated enquiry ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Unique id, also used as the outbox file name
    pub id: Uuid,
    /// Seconds since the Unix epoch
    pub submitted_at: u64,
    /// Flattened form fields
    pub fields: IndexMap<String, String>,
}

impl ContactSubmission {
    /// Stamp a new submission
    pub fn new(fields: IndexMap<String, String>) -> Self {
        let submitted_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self {
            id: Uuid::new_v4(),
            submitted_at,
            fields,
        }
    }
}

/// Proof of delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Id of the delivered submission
    pub id: Uuid,
    /// Where it went, if it was written somewhere
    pub location: Option<PathBuf>,
}

/// Delivers contact submissions
pub trait ContactSubmitter: Send + Sync {
    /// Deliver one submission
    fn submit(&self, submission: &ContactSubmission) -> Result<SubmissionReceipt>;
}

/// Logs submissions and keeps them in memory
#[derive(Debug, Default)]
pub struct LogSubmitter {
    sent: Mutex<Vec<ContactSubmission>>,
}

impl LogSubmitter {
    /// Create an empty submitter
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything submitted so far
    pub fn sent(&self) -> Vec<ContactSubmission> {
        self.sent.lock().clone()
    }
}

impl ContactSubmitter for LogSubmitter {
    fn submit(&self, submission: &ContactSubmission) -> Result<SubmissionReceipt> {
        tracing::info!(
            id = %submission.id,
            fields = ?submission.fields,
            "Contact form submitted"
        );
        self.sent.lock().push(submission.clone());
        Ok(SubmissionReceipt {
            id: submission.id,
            location: None,
        })
    }
}

/// Writes each submission as `<id>.json` into a directory
#[derive(Debug, Clone)]
pub struct OutboxSubmitter {
    dir: PathBuf,
}

impl OutboxSubmitter {
    /// Outbox rooted at `dir`; created on first submission
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ContactSubmitter for OutboxSubmitter {
    fn submit(&self, submission: &ContactSubmission) -> Result<SubmissionReceipt> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{}.json", submission.id));
        let content = serde_json::to_string_pretty(submission)?;
        std::fs::write(&path, content)?;
        tracing::info!(id = %submission.id, path = %path.display(), "Contact submission written to outbox");
        Ok(SubmissionReceipt {
            id: submission.id,
            location: Some(path),
        })
    }
}

/// Outcome of the last send attempt, shown above the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    /// Nothing sent yet
    #[default]
    Idle,
    /// Validation failed
    Invalid(Vec<FieldError>),
    /// Delivered
    Sent(Uuid),
    /// Delivery failed
    Failed(String),
}

/// Validate, deliver, and clear the form on success.
///
/// On any failure the form keeps its values.
pub fn send(form: &mut ContactForm, submitter: &dyn ContactSubmitter) -> FormStatus {
    let submission = match form.to_submission() {
        Ok(submission) => submission,
        Err(ContactError::Invalid(errors)) => return FormStatus::Invalid(errors),
        Err(e) => return FormStatus::Failed(e.to_string()),
    };

    match submitter.submit(&submission) {
        Ok(receipt) => {
            form.clear();
            FormStatus::Sent(receipt.id)
        }
        Err(e) => {
            tracing::error!("Contact submission failed: {}", e);
            FormStatus::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn filled() -> ContactForm {
        ContactForm {
            name: "山田 太郎".to_string(),
            email: "taro@example.com".to_string(),
            company: "".to_string(),
            project_type: Some(ProjectType::Seo),
            budget: Some(Budget::From100kTo300k),
            message: "SEO記事の制作をお願いしたいです。".to_string(),
        }
    }

    struct FailingSubmitter;

    impl ContactSubmitter for FailingSubmitter {
        fn submit(&self, _submission: &ContactSubmission) -> Result<SubmissionReceipt> {
            Err(ContactError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "outbox is read-only",
            )))
        }
    }

    #[test]
    fn test_fields_mapping() {
        let fields = filled().fields();
        let keys: Vec<_> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "email", "company", "projectType", "budget", "message"]);
        assert_eq!(fields["projectType"], "seo");
        assert_eq!(fields["budget"], "300k");
        assert_eq!(fields["company"], "");
    }

    #[test]
    fn test_validate_reports_every_error() {
        let form = ContactForm {
            email: "not-an-email".to_string(),
            ..Default::default()
        };
        let errors = form.validate();
        assert_eq!(
            errors,
            vec![
                FieldError::Required(Field::Name),
                FieldError::MalformedEmail,
                FieldError::Required(Field::Message),
            ]
        );
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("hello@kochillium.writer"));
        assert!(!is_valid_email("hello@localhost"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("a@.com"));
    }

    #[test]
    fn test_log_submitter_clears_form() {
        let submitter = LogSubmitter::new();
        let mut form = filled();

        let status = send(&mut form, &submitter);
        let sent = submitter.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(status, FormStatus::Sent(sent[0].id));
        assert_eq!(sent[0].fields["name"], "山田 太郎");
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_invalid_form_is_not_sent() {
        let submitter = LogSubmitter::new();
        let mut form = filled();
        form.message.clear();

        let status = send(&mut form, &submitter);
        assert_eq!(status, FormStatus::Invalid(vec![FieldError::Required(Field::Message)]));
        assert!(submitter.sent().is_empty());
        assert_eq!(form.name, "山田 太郎");
    }

    #[test]
    fn test_failure_keeps_values() {
        let mut form = filled();
        let status = send(&mut form, &FailingSubmitter);
        assert!(matches!(status, FormStatus::Failed(_)));
        assert_eq!(form, filled());
    }

    #[test]
    fn test_outbox_writes_json() {
        let temp = TempDir::new().unwrap();
        let submitter = OutboxSubmitter::new(temp.path().join("outbox"));
        let submission = filled().to_submission().unwrap();

        let receipt = submitter.submit(&submission).unwrap();
        let path = receipt.location.unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), format!("{}.json", submission.id));

        let content = std::fs::read_to_string(path).unwrap();
        let loaded: ContactSubmission = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded, submission);
    }
}
