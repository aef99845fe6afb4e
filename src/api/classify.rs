//! Parser for the upstream error-string mini-format.
//!
//! The YNAB client stringifies request failures as
//! `api error:<code>-<name>-<detail>`. The detail may itself contain dashes,
//! so the split is limited to three segments. Classification never re-raises;
//! the caller decides what to do with an [`Classification::Unrecognized`].

/// Literal prefix every classifiable upstream error starts with.
pub const API_ERROR_PREFIX: &str = "api error:";

/// Outcome of attempting to classify a raw failure message.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// The message matched the mini-format prefix (parsing may still have
    /// failed; see [`ErrorOutcome::Malformed`]).
    Classified(ClassifiedError),
    /// Not an upstream API error at all; propagate the original failure.
    Unrecognized,
}

/// A prefixed upstream error, parsed as far as the format allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedError {
    pub raw_message: String,
    pub outcome: ErrorOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorOutcome {
    /// Code is kept as a real number: `404.2` and `404` are distinct errors.
    Parsed {
        code: f64,
        name: String,
        detail: String,
    },
    Malformed { reason: MalformedReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// Fewer than three dash-delimited segments after the prefix.
    Structure,
    /// The code segment parsed as neither integer nor float.
    CodeFormat,
}

/// Classifies a raw upstream failure message. Pure; performs no I/O.
pub fn classify(message: &str) -> Classification {
    let Some(rest) = message.strip_prefix(API_ERROR_PREFIX) else {
        return Classification::Unrecognized;
    };

    let segments: Vec<&str> = rest.splitn(3, '-').collect();
    if segments.len() < 3 {
        return classified(message, ErrorOutcome::Malformed {
            reason: MalformedReason::Structure,
        });
    }

    let code_text = segments[0].trim();
    let code = match code_text.parse::<i64>() {
        Ok(integer) => integer as f64,
        Err(_) => match code_text.parse::<f64>() {
            Ok(float) => float,
            Err(_) => {
                return classified(message, ErrorOutcome::Malformed {
                    reason: MalformedReason::CodeFormat,
                });
            }
        },
    };

    classified(
        message,
        ErrorOutcome::Parsed {
            code,
            name: segments[1].trim().to_string(),
            detail: segments[2].trim().to_string(),
        },
    )
}

fn classified(message: &str, outcome: ErrorOutcome) -> Classification {
    Classification::Classified(ClassifiedError {
        raw_message: message.to_string(),
        outcome,
    })
}
