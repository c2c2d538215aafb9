//! Registration form model and field validation
//!
//! Pure data and transition logic: no egui types here, so everything is
//! testable without a rendering surface. The render loop in `main.rs` feeds
//! blur/edit events into `FormField` and reads back the inline errors.

use serde::Serialize;

/// Input type of a form field (text / email / tel), selecting which
/// format rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
}

/// Result of validating a single field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl FieldValidationResult {
    fn ok() -> Self {
        Self { valid: true, message: None }
    }

    fn invalid(message: &str) -> Self {
        Self { valid: false, message: Some(message.to_string()) }
    }
}

/// Validate a raw field value against its kind.
///
/// Required fields must be non-empty after trimming. Email and phone rules
/// only apply to non-empty values, so an optional phone left blank is valid.
pub fn validate_value(kind: FieldKind, required: bool, value: &str) -> FieldValidationResult {
    let value = value.trim();

    if required && value.is_empty() {
        return FieldValidationResult::invalid("This field is required");
    }

    match kind {
        FieldKind::Email if !value.is_empty() && !is_valid_email(value) => {
            FieldValidationResult::invalid("Please enter a valid email address")
        }
        FieldKind::Phone if !value.is_empty() && !is_valid_phone(value) => {
            FieldValidationResult::invalid("Please enter a valid phone number")
        }
        _ => FieldValidationResult::ok(),
    }
}

/// `local@domain.tld` shape: exactly one `@`, no whitespace, non-empty local
/// part, and a domain with an interior dot.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    // At least one dot that is neither the first nor the last domain char.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

/// Digits, spaces, hyphens, parentheses and plus only; at least 10 chars.
pub fn is_valid_phone(value: &str) -> bool {
    value.len() >= 10
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'))
}

/// One input field of the registration form, owning its value and inline
/// error state.
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub hint: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub error: Option<String>,
}

impl FormField {
    fn new(
        label: &'static str,
        hint: &'static str,
        kind: FieldKind,
        required: bool,
    ) -> Self {
        Self {
            label,
            hint,
            kind,
            required,
            value: String::new(),
            error: None,
        }
    }

    /// Validate the current value, recording the inline error. Returns
    /// whether the field is valid.
    pub fn validate(&mut self) -> bool {
        let result = validate_value(self.kind, self.required, &self.value);
        self.error = result.message;
        result.valid
    }

    /// Clear the inline error (called while the user edits the field).
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// The five registration fields, owned by the app for the window's lifetime.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub company: FormField,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::new("First Name", "Jane", FieldKind::Text, true),
            last_name: FormField::new("Last Name", "Doe", FieldKind::Text, true),
            email: FormField::new("Email", "jane@example.com", FieldKind::Email, true),
            phone: FormField::new("Phone", "(555) 123-4567", FieldKind::Phone, true),
            company: FormField::new("Company", "Acme Inc.", FieldKind::Text, false),
        }
    }

    pub fn fields_mut(&mut self) -> [&mut FormField; 5] {
        [
            &mut self.first_name,
            &mut self.last_name,
            &mut self.email,
            &mut self.phone,
            &mut self.company,
        ]
    }

    /// Validate every field, recording inline errors on all of them.
    /// Returns true iff the whole form is valid. Deliberately does not
    /// short-circuit so each invalid field gets its error.
    pub fn validate_all(&mut self) -> bool {
        let mut valid = true;
        for field in self.fields_mut() {
            if !field.validate() {
                valid = false;
            }
        }
        valid
    }

    /// Snapshot the trimmed values for submission.
    pub fn input(&self) -> RegistrationInput {
        RegistrationInput {
            first_name: self.first_name.value.trim().to_string(),
            last_name: self.last_name.value.trim().to_string(),
            email: self.email.value.trim().to_string(),
            phone: self.phone.value.trim().to_string(),
            company: self.company.value.trim().to_string(),
        }
    }

    /// Clear all values and errors after a successful registration.
    pub fn reset(&mut self) {
        for field in self.fields_mut() {
            field.value.clear();
            field.error = None;
        }
    }
}

/// Registration payload. Serialized as camelCase JSON when posted to a real
/// endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

/// Submit affordance state. The button is disabled and relabeled while
/// `Submitting`; any terminal outcome returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Submitting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field_empty() {
        for kind in [FieldKind::Text, FieldKind::Email, FieldKind::Phone] {
            let result = validate_value(kind, true, "");
            assert!(!result.valid);
            assert_eq!(result.message.as_deref(), Some("This field is required"));
        }
        // Whitespace-only counts as empty
        let result = validate_value(FieldKind::Text, true, "   ");
        assert!(!result.valid);
    }

    #[test]
    fn test_optional_field_empty_is_valid() {
        let result = validate_value(FieldKind::Text, false, "");
        assert!(result.valid);
        assert!(result.message.is_none());

        let result = validate_value(FieldKind::Phone, false, "");
        assert!(result.valid);
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.com"));

        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("has space@example.com"));
    }

    #[test]
    fn test_email_validation_message() {
        let result = validate_value(FieldKind::Email, true, "not-an-email");
        assert!(!result.valid);
        assert_eq!(
            result.message.as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_phone_shapes() {
        assert!(is_valid_phone("5551234567"));
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("+1 555 123 4567"));

        // Too short
        assert!(!is_valid_phone("555-1234"));
        // Disallowed characters
        assert!(!is_valid_phone("555.123.4567"));
        assert!(!is_valid_phone("call me maybe"));
    }

    #[test]
    fn test_phone_validation_message() {
        let result = validate_value(FieldKind::Phone, true, "123");
        assert!(!result.valid);
        assert_eq!(
            result.message.as_deref(),
            Some("Please enter a valid phone number")
        );
    }

    #[test]
    fn test_validate_all_is_conjunction() {
        let mut form = RegistrationForm::new();
        form.first_name.value = "A".into();
        form.last_name.value = "B".into();
        form.email.value = "a@b.co".into();
        form.phone.value = "5551234567".into();
        assert!(form.validate_all());

        form.email.value = "bad".into();
        assert!(!form.validate_all());
        assert!(form.email.error.is_some());
        // Other fields are still error-free
        assert!(form.first_name.error.is_none());
    }

    #[test]
    fn test_validate_all_marks_every_invalid_field() {
        let mut form = RegistrationForm::new();
        assert!(!form.validate_all());
        assert!(form.first_name.error.is_some());
        assert!(form.last_name.error.is_some());
        assert!(form.email.error.is_some());
        assert!(form.phone.error.is_some());
        // Optional field stays clean
        assert!(form.company.error.is_none());
    }

    #[test]
    fn test_reset_clears_values_and_errors() {
        let mut form = RegistrationForm::new();
        form.first_name.value = "A".into();
        form.email.value = "bad".into();
        form.validate_all();
        form.reset();
        assert!(form.first_name.value.is_empty());
        assert!(form.email.value.is_empty());
        assert!(form.email.error.is_none());
    }

    #[test]
    fn test_input_trims_values() {
        let mut form = RegistrationForm::new();
        form.first_name.value = "  A  ".into();
        form.email.value = " a@b.co ".into();
        let input = form.input();
        assert_eq!(input.first_name, "A");
        assert_eq!(input.email, "a@b.co");
    }

    #[test]
    fn test_clear_error_on_edit() {
        let mut field = FormField::new("Email", "", FieldKind::Email, true);
        field.value = "bad".into();
        assert!(!field.validate());
        assert!(field.error.is_some());
        field.clear_error();
        assert!(field.error.is_none());
    }
}
