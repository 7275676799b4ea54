use crate::fitness::{ActivityLevel, AgeGroup, Goal};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// Backend wire payloads.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodChatRequest {
    pub mood: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodChatResponse {
    pub reply: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessPlanRequest {
    pub goal: Goal,
    pub activity_level: ActivityLevel,
    pub age_group: AgeGroup,
}

/// Both lists are optional on the wire and default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FitnessPlanResponse {
    #[serde(default)]
    pub plan: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatboxRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatboxResponse {
    pub reply: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportAnalysis {
    pub file_name: String,
    pub summary: String,
    #[serde(default)]
    pub general_advice: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

// Form posts from the rendered page.

#[derive(Debug, Deserialize)]
pub struct MoodForm {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct FitnessForm {
    pub goal: String,
    pub activity_level: String,
    pub age_group: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: String,
}

// Session-local entities.

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatExchange {
    pub id: u64,
    pub mood: String,
    pub user_text: String,
    pub reply: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    #[serde(rename = "You")]
    You,
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "AI (Report Analysis)")]
    ReportAnalysis,
}

impl Sender {
    pub fn label(self) -> &'static str {
        match self {
            Sender::You => "You",
            Sender::Ai => "AI",
            Sender::ReportAnalysis => "AI (Report Analysis)",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FitnessPlanResult {
    pub plan: Vec<String>,
    pub tips: Vec<String>,
}

impl From<FitnessPlanResponse> for FitnessPlanResult {
    fn from(response: FitnessPlanResponse) -> Self {
        Self {
            plan: response.plan,
            tips: response.tips,
        }
    }
}

/// A file picked for report analysis. Consumed by the upload.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}
