use serde::{Deserialize, Serialize};

/// The `info` block every MapQuest response carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseInfo {
    /// `0` on success, anything else is an API error
    #[serde(rename = "statuscode")]
    pub status_code: i64,

    /// Messages explaining a failure, usually empty on success
    #[serde(default)]
    pub messages: Vec<String>,

    /// Attribution to display alongside the results
    #[serde(default)]
    pub copyright: Option<Copyright>,
}

impl ResponseInfo {
    /// Whether the API reported success
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code == 0
    }
}

/// MapQuest attribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Copyright {
    /// Attribution text
    #[serde(default)]
    pub text: Option<String>,

    /// Logo URL
    #[serde(default)]
    pub image_url: Option<String>,

    /// Alt text for the logo
    #[serde(default)]
    pub image_alt_text: Option<String>,
}
