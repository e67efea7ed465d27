//! Batch-job run records listed by `GET /api/admin/runs`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One batch-job run as stored by the document pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunRecord {
    /// Job identifier assigned when the batch was queued
    pub job_id: String,

    /// Who submitted the document (admin name or WhatsApp sender)
    pub sender_id: String,

    /// Server-side status, free-form (see [`RunStatus`])
    pub status: String,

    /// When processing started
    #[serde(with = "iso_datetime")]
    pub started_at: DateTime<Utc>,

    /// Original filename of the uploaded document
    pub doc_filename: String,
}

impl RunRecord {
    /// Classified status for display purposes.
    pub fn run_status(&self) -> RunStatus {
        RunStatus::from(self.status.as_str())
    }
}

/// Known batch-job states. Anything else maps to `Unknown`; the raw string
/// stays available on [`RunRecord::status`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RunStatus {
    Pending,
    InProgress,
    Retry,
    Success,
    Failure,
    #[default]
    Unknown,
}

impl RunStatus {
    /// Whether the run has reached a final state
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in progress"),
            Self::Retry => write!(f, "retrying"),
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl From<&str> for RunStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_uppercase().replace('_', "-").as_str() {
            "PENDING" => Self::Pending,
            "IN-PROGRESS" | "STARTED" | "PROGRESS" => Self::InProgress,
            "RETRY" => Self::Retry,
            "SUCCESS" | "DONE" | "COMPLETED" => Self::Success,
            "FAILURE" | "FAILED" | "ERROR" => Self::Failure,
            _ => Self::Unknown,
        }
    }
}

/// Parse an ISO-8601 timestamp. Values carrying an offset are converted to
/// UTC; naive values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc()))
}

mod iso_datetime {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
