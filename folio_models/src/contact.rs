use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::macros::nutype_string;

/// Deliberately permissive `local@domain.tld` shape, not RFC 5322.
pub static SUBMISSION_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

nutype_string!(SubmissionName(validate(not_empty, len_char_max = 100)));
nutype_string!(SubmissionEmail(validate(
    not_empty,
    len_char_max = 100,
    regex = SUBMISSION_EMAIL_REGEX
)));
nutype_string!(SubmissionMessage(validate(not_empty, len_char_max = 5000)));

/// A validated contact form submission. Constructing one is the only way to
/// get past the request validator, so downstream code never sees unchecked
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: SubmissionName,
    pub email: SubmissionEmail,
    pub message: SubmissionMessage,
}

impl ContactSubmission {
    /// Validate a raw submission.
    ///
    /// The reported rejection follows a fixed precedence: presence of all
    /// fields, then length bounds, then address shape. Resubmitting the same
    /// payload therefore always yields the same rejection.
    pub fn try_new(
        name: String,
        email: String,
        message: String,
    ) -> Result<Self, ContactSubmissionRejection> {
        let name = SubmissionName::try_new(name);
        let email = SubmissionEmail::try_new(email);
        let message = SubmissionMessage::try_new(message);

        match (name, email, message) {
            (Ok(name), Ok(email), Ok(message)) => Ok(Self {
                name,
                email,
                message,
            }),
            (name, email, message) => {
                // At least one conversion failed in this arm, so `min` always
                // finds a rejection.
                let rejection = name
                    .map_err(ContactSubmissionRejection::from)
                    .err()
                    .into_iter()
                    .chain(email.map_err(ContactSubmissionRejection::from).err())
                    .chain(message.map_err(ContactSubmissionRejection::from).err())
                    .min()
                    .unwrap_or(ContactSubmissionRejection::MissingFields);
                Err(rejection)
            }
        }
    }
}

/// Why a submission was rejected. The `Display` strings are the exact error
/// messages returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Error)]
pub enum ContactSubmissionRejection {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Input too long")]
    TooLong,
    #[error("Invalid email format")]
    InvalidEmail,
}

impl From<SubmissionNameError> for ContactSubmissionRejection {
    fn from(err: SubmissionNameError) -> Self {
        match err {
            SubmissionNameError::NotEmptyViolated => Self::MissingFields,
            SubmissionNameError::LenCharMaxViolated => Self::TooLong,
        }
    }
}

impl From<SubmissionEmailError> for ContactSubmissionRejection {
    fn from(err: SubmissionEmailError) -> Self {
        match err {
            SubmissionEmailError::NotEmptyViolated => Self::MissingFields,
            SubmissionEmailError::LenCharMaxViolated => Self::TooLong,
            SubmissionEmailError::RegexViolated => Self::InvalidEmail,
        }
    }
}

impl From<SubmissionMessageError> for ContactSubmissionRejection {
    fn from(err: SubmissionMessageError) -> Self {
        match err {
            SubmissionMessageError::NotEmptyViolated => Self::MissingFields,
            SubmissionMessageError::LenCharMaxViolated => Self::TooLong,
        }
    }
}

/// One independent notification path a submission can be delivered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationChannel {
    Telegram,
    Email,
}

impl std::fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Telegram => "telegram",
            Self::Email => "email",
        })
    }
}

/// Per-channel delivery verdict, only alive for the duration of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelResult {
    pub channel: NotificationChannel,
    pub success: bool,
}
