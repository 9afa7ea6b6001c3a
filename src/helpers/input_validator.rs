use reqwest::Url;
use crate::errors::{AuditError, AuditResult};

pub struct InputValidator;

impl InputValidator {
    /// Accepts absolute http(s) URLs only and returns the trimmed input unchanged.
    pub fn validate_url(input: &str) -> AuditResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AuditError::validation_error(
                "url",
                input,
                "required",
                Some("Enter the address of the site to audit, e.g. https://example.com"),
            ));
        }

        let parsed = Url::parse(trimmed).map_err(|e| {
            AuditError::validation_error("url", trimmed, &format!("must be an absolute URL ({})", e), Some("Include the scheme, e.g. https://"))
        })?;

        match parsed.scheme() {
            "http" | "https" if parsed.host_str().is_some() => Ok(trimmed.to_string()),
            _ => Err(AuditError::validation_error(
                "url",
                trimmed,
                "scheme must be http or https with a host",
                None,
            )),
        }
    }

    pub fn validate_email(input: &str) -> AuditResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AuditError::validation_error("email", input, "required", Some("Enter your work email")));
        }

        let valid = match trimmed.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && !trimmed.chars().any(char::is_whitespace)
                    && domain.split('.').count() >= 2
                    && domain.split('.').all(|label| !label.is_empty())
            }
            None => false,
        };

        if valid {
            Ok(trimmed.to_string())
        } else {
            Err(AuditError::validation_error("email", trimmed, "must be an email address", Some("Use the form name@company.com")))
        }
    }
}
