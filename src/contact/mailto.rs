use urlencoding::encode;

use super::validation::ContactFields;
use crate::config;

/// A pre-composed email opened in the visitor's mail client; nothing is
/// sent by the site itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub recipient: &'static str,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    /// Builds the inquiry draft from an already-validated form.
    pub fn project_inquiry(fields: &ContactFields) -> Self {
        let subject = format!("New Project Inquiry - {}", fields.project_type);
        let body = format!(
            "Hi {studio},\n\n\
             Name: {name}\n\
             Email: {email}\n\
             Project Type: {project_type}\n\
             Budget Range: {budget}\n\n\
             Message:\n{message}\n\n\
             Best regards,\n{name}",
            studio = config::STUDIO_NAME,
            name = fields.name,
            email = fields.email,
            project_type = fields.project_type,
            budget = fields.budget,
            message = fields.message,
        );
        MailDraft {
            recipient: config::contact_email(),
            subject,
            body,
        }
    }

    pub fn to_mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode(&self.subject),
            encode(&self.body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ContactFields {
        ContactFields {
            name: "Sam Doe".into(),
            email: "sam@example.com".into(),
            project_type: "Color Grading".into(),
            budget: "$1,000 - $2,500".into(),
            message: "Feature-length grade needed.".into(),
        }
    }

    #[test]
    fn subject_interpolates_project_type() {
        let draft = MailDraft::project_inquiry(&fields());
        assert_eq!(draft.subject, "New Project Inquiry - Color Grading");
    }

    #[test]
    fn body_follows_the_fixed_template() {
        let draft = MailDraft::project_inquiry(&fields());
        assert_eq!(
            draft.body,
            "Hi SS Edit Studio,\n\n\
             Name: Sam Doe\n\
             Email: sam@example.com\n\
             Project Type: Color Grading\n\
             Budget Range: $1,000 - $2,500\n\n\
             Message:\nFeature-length grade needed.\n\n\
             Best regards,\nSam Doe"
        );
    }

    #[test]
    fn mailto_url_is_percent_encoded() {
        let draft = MailDraft::project_inquiry(&fields());
        let url = draft.to_mailto_url();
        assert!(url.starts_with("mailto:editswithssedits@gmail.com?subject="));
        assert!(url.contains("New%20Project%20Inquiry%20-%20Color%20Grading"));
        // Newlines and ampersand-sensitive characters never appear raw.
        assert!(!url.contains('\n'));
        assert!(!url.contains(' '));
        assert!(url.contains("%0A"));
    }
}
