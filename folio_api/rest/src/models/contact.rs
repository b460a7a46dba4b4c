use serde::{Deserialize, Serialize};

/// Raw form fields as submitted by the website, not yet validated. Absent
/// and `null` fields deserialize to `None` so they are rejected with the
/// proper "Missing required fields" error instead of a serde rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiContactSubmitResponse {
    pub success: bool,
    pub message: &'static str,
}
