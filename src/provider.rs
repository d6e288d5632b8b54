//! Interfaces to remote password assistants.
//!
//! No implementation ships with the crate. Hosts wire in their own client; the
//! rest of the library never calls these traits.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Opaque handle to a chat conversation, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatSession {
    id: String,
}

impl ChatSession {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Conversational password generation assistant.
pub trait ChatProvider {
    fn start_session(&self) -> Result<ChatSession>;

    /// Send `text` within `session` and return the assistant's reply.
    fn send_message(&self, session: &ChatSession, text: &str) -> Result<String>;
}

/// Structured feedback from a remote strength analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub feedback: String,
    pub crack_time_estimate: String,
    #[serde(default)]
    pub vulnerabilities: Vec<String>,
}

impl AnalysisReport {
    /// Verdict substituted when the remote analysis could not be obtained.
    pub fn unavailable() -> Self {
        Self {
            feedback: "AI analysis unavailable. Relying on local metrics.".into(),
            crack_time_estimate: "Unknown".into(),
            vulnerabilities: vec!["Could not connect to AI service".into()],
        }
    }

    /// Parse the JSON body returned by an analysis service.
    pub fn from_json(body: &str) -> Result<Self> {
        if body.trim().is_empty() {
            return Err(Error::Provider("empty analysis response".into()));
        }
        serde_json::from_str(body)
            .map_err(|e| Error::Provider(format!("invalid analysis response: {e}")))
    }
}

pub trait AnalysisProvider {
    fn analyze(&self, password: &str) -> Result<AnalysisReport>;
}

/// Run `provider`, substituting [`AnalysisReport::unavailable`] on failure.
pub fn analyze_or_fallback<A: AnalysisProvider + ?Sized>(
    provider: &A,
    password: &str,
) -> AnalysisReport {
    match provider.analyze(password) {
        Ok(report) => report,
        Err(e) => {
            warn!("password analysis failed: {e}");
            AnalysisReport::unavailable()
        }
    }
}
