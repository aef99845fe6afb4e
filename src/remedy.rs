//! Maps classified upstream errors to user-facing remediation results.

use crate::api::classify::{ClassifiedError, ErrorOutcome, MalformedReason};

pub const ERROR_DOCS_URL: &str = "https://api.ynab.com/#errors";
pub const RATE_LIMIT_DOCS_URL: &str = "https://api.ynab.com/#rate-limiting";
pub const NEW_BUDGET_URL: &str = "https://app.ynab.com/new-budget";

const CODE_UNAUTHORIZED: f64 = 401.0;
const CODE_RESOURCE_NOT_FOUND: f64 = 404.2;
const CODE_RATE_LIMITED: f64 = 429.0;

/// Follow-up the launcher performs when the user picks a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenSettings,
    OpenUrl(String),
    SelectBudget(String),
}

/// A user-facing remediation for a failed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remediation {
    pub title: String,
    pub subtitle: String,
    pub action: Option<Action>,
}

/// Dispatches a classified error to its remediation. Codes are compared as
/// numbers, so `404.2` and `404` take different branches. Pure.
pub fn remediation_for(error: &ClassifiedError) -> Remediation {
    match &error.outcome {
        ErrorOutcome::Malformed { reason } => Remediation {
            title: malformed_title(*reason).to_string(),
            subtitle: error.raw_message.clone(),
            action: None,
        },
        ErrorOutcome::Parsed { code, name, detail } => parsed_remediation(*code, name, detail),
    }
}

fn parsed_remediation(code: f64, name: &str, detail: &str) -> Remediation {
    if code == CODE_UNAUTHORIZED {
        return Remediation {
            title: "Your YNAB personal access token is invalid".to_string(),
            subtitle: format!("Error code: {}. Error message: {}", code, detail),
            action: Some(Action::OpenSettings),
        };
    }

    if code == CODE_RESOURCE_NOT_FOUND {
        return Remediation {
            title: "The requested resource does not exist".to_string(),
            subtitle: format!("Error code: {}. Error message: {}", code, detail),
            action: Some(Action::OpenUrl(ERROR_DOCS_URL.to_string())),
        };
    }

    if code == CODE_RATE_LIMITED {
        return Remediation {
            title: "You have made too many requests. Please wait and try again".to_string(),
            subtitle: format!("Error code: {}. Error message: {}", code, detail),
            action: Some(Action::OpenUrl(RATE_LIMIT_DOCS_URL.to_string())),
        };
    }

    Remediation {
        title: "An error occurred while accessing the YNAB API".to_string(),
        subtitle: format!(
            "Error code: {}. Error name: {}. Error message: {}",
            code, name, detail
        ),
        action: Some(Action::OpenUrl(ERROR_DOCS_URL.to_string())),
    }
}

fn malformed_title(reason: MalformedReason) -> &'static str {
    match reason {
        MalformedReason::Structure => "Unexpected YNAB API error structure",
        MalformedReason::CodeFormat => "Unexpected YNAB API error code format",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::classify::{classify, Classification};

    fn classified(message: &str) -> ClassifiedError {
        match classify(message) {
            Classification::Classified(error) => error,
            Classification::Unrecognized => panic!("message should classify: {}", message),
        }
    }

    #[test]
    fn unauthorized_points_at_settings() {
        let remedy = remediation_for(&classified("api error:401-unauthorized-token expired"));
        assert_eq!(remedy.action, Some(Action::OpenSettings));
        assert!(remedy.subtitle.contains("401"));
        assert!(remedy.subtitle.contains("token expired"));
    }

    #[test]
    fn missing_resource_links_error_docs() {
        let remedy = remediation_for(&classified("api error:404.2-not_found-no such budget"));
        assert_eq!(
            remedy.action,
            Some(Action::OpenUrl(ERROR_DOCS_URL.to_string()))
        );
        assert!(remedy.subtitle.contains("404.2"));
    }

    #[test]
    fn plain_404_is_not_the_missing_resource_branch() {
        let remedy = remediation_for(&classified("api error:404-not_found-bad route"));
        assert_eq!(remedy.title, "An error occurred while accessing the YNAB API");
    }

    #[test]
    fn rate_limit_links_rate_limit_docs() {
        let remedy = remediation_for(&classified("api error:429-too_many_requests-slow down"));
        assert_eq!(
            remedy.action,
            Some(Action::OpenUrl(RATE_LIMIT_DOCS_URL.to_string()))
        );
    }

    #[test]
    fn unknown_code_gets_generic_branch_with_all_fields() {
        let remedy = remediation_for(&classified("api error:500-internal-server exploded"));
        assert_eq!(remedy.title, "An error occurred while accessing the YNAB API");
        assert!(remedy.subtitle.contains("500"));
        assert!(remedy.subtitle.contains("internal"));
        assert!(remedy.subtitle.contains("server exploded"));
        assert_eq!(
            remedy.action,
            Some(Action::OpenUrl(ERROR_DOCS_URL.to_string()))
        );
    }

    #[test]
    fn malformed_error_carries_raw_message_and_no_action() {
        let remedy = remediation_for(&classified("api error:401-unauthorized"));
        assert_eq!(remedy.title, "Unexpected YNAB API error structure");
        assert_eq!(remedy.subtitle, "api error:401-unauthorized");
        assert_eq!(remedy.action, None);
    }
}
