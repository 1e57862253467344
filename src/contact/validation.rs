/// The inquiry form's fields, identified for error annotation and for
/// scrolling attention to the first invalid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    ProjectType,
    Budget,
    Message,
}

impl Field {
    /// DOM id of the corresponding input element.
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::ProjectType => "project-type",
            Field::Budget => "budget",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Raw string values of the contact form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub budget: String,
    pub message: String,
}

/// Evaluates every rule without short-circuiting, so the caller gets the
/// complete set of violations in field order. An empty vec means valid.
pub fn validate(fields: &ContactFields) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if fields.name.trim().is_empty() {
        errors.push(FieldError {
            field: Field::Name,
            message: "Name is required",
        });
    }

    let email = fields.email.trim();
    if email.is_empty() {
        errors.push(FieldError {
            field: Field::Email,
            message: "Email is required",
        });
    } else if !is_valid_email(email) {
        errors.push(FieldError {
            field: Field::Email,
            message: "Please enter a valid email address",
        });
    }

    if fields.project_type.is_empty() {
        errors.push(FieldError {
            field: Field::ProjectType,
            message: "Please select a project type",
        });
    }

    if fields.budget.is_empty() {
        errors.push(FieldError {
            field: Field::Budget,
            message: "Please select a budget range",
        });
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.push(FieldError {
            field: Field::Message,
            message: "Message is required",
        });
    } else if message.chars().count() < 10 {
        errors.push(FieldError {
            field: Field::Message,
            message: "Message must be at least 10 characters long",
        });
    }

    errors
}

pub fn error_for(errors: &[FieldError], field: Field) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

/// Accepts `localpart@domain.tld`: no whitespace, exactly one `@` with a
/// non-empty local part, and at least one `.` after the `@` with characters
/// on both sides of it.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            project_type: "Commercial".into(),
            budget: "$500 - $1,000".into(),
            message: "I have a 60s spot that needs a final cut.".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate(&ContactFields::default());
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::Email,
                Field::ProjectType,
                Field::Budget,
                Field::Message
            ]
        );
        assert_eq!(error_for(&errors, Field::Name), Some("Name is required"));
        assert_eq!(error_for(&errors, Field::Email), Some("Email is required"));
        assert_eq!(
            error_for(&errors, Field::ProjectType),
            Some("Please select a project type")
        );
        assert_eq!(
            error_for(&errors, Field::Budget),
            Some("Please select a budget range")
        );
        assert_eq!(error_for(&errors, Field::Message), Some("Message is required"));
    }

    #[test]
    fn validation_does_not_stop_at_first_failure() {
        let mut fields = filled();
        fields.name.clear();
        fields.budget.clear();
        let errors = validate(&fields);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, Field::Name);
        assert_eq!(errors[1].field, Field::Budget);
    }

    #[test]
    fn fixing_one_field_reports_only_the_remaining_violation() {
        let mut fields = filled();
        fields.name.clear();
        fields.email = "not-an-email".into();
        assert_eq!(validate(&fields).len(), 2);

        fields.name = "Sam".into();
        let errors = validate(&fields);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Email);
        assert_eq!(errors[0].message, "Please enter a valid email address");
    }

    #[test]
    fn whitespace_only_values_count_as_empty() {
        let mut fields = filled();
        fields.name = "   ".into();
        fields.message = " \t\n ".into();
        let errors = validate(&fields);
        assert_eq!(error_for(&errors, Field::Name), Some("Name is required"));
        assert_eq!(error_for(&errors, Field::Message), Some("Message is required"));
    }

    #[test]
    fn email_pattern_corpus() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@studio.example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.com"));
        assert!(!is_valid_email("a @b.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_before_email_check() {
        let mut fields = filled();
        fields.email = "  sam@example.com  ".into();
        assert!(validate(&fields).is_empty());
    }

    #[test]
    fn message_length_boundary() {
        let mut fields = filled();
        fields.message = "exactly 10".into();
        assert_eq!(fields.message.len(), 10);
        assert!(validate(&fields).is_empty());

        fields.message = " 123456789 ".into();
        let errors = validate(&fields);
        assert_eq!(
            error_for(&errors, Field::Message),
            Some("Message must be at least 10 characters long")
        );
    }
}
