use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Extension given to every persisted sample file.
pub const SAMPLE_EXT: &str = "java";

/// Identifier of one logical code sample, taken from the `sample_id`
/// manifest column. Names the output file, so path separators are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleId(String);

impl SampleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SampleId {
    type Err = FetchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_string();
        let is_valid = !normalized.is_empty()
            && !normalized.contains('/')
            && !normalized.contains('\\')
            && normalized != "."
            && normalized != "..";
        if !is_valid {
            return Err(FetchError::InvalidSampleId(value.to_string()));
        }
        Ok(Self(normalized))
    }
}

/// The four components of a GitHub blob-view URL: owner, repository,
/// commit hash or branch name, and the in-repo file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlobRef {
    pub owner: String,
    pub repo: String,
    pub reference: String,
    pub path: String,
}

impl BlobRef {
    /// Derived raw-content URL serving the literal file bytes.
    pub fn raw_url(&self) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}/{}",
            self.owner, self.repo, self.reference, self.path
        )
    }
}

/// Terminal state reached by one manifest row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Fail { status: u16 },
    InvalidUrl,
    Skipped,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success => "SUCCESS",
            Outcome::Fail { .. } => "FAIL",
            Outcome::InvalidUrl => "INVALID_URL",
            Outcome::Skipped => "SKIPPED",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
