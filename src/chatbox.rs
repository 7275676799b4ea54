use crate::inflight::{Generation, Pending, Ticket};
use crate::models::{
    ChatMessage, ChatboxRequest, ChatboxResponse, ReportAnalysis, Sender, UploadedFile,
};
use crate::transport::{BackendClient, TransportError};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub const TEXT_ERROR: &str = "Error contacting the wellness assistant.";
pub const REPORT_ERROR: &str = "Sorry, I could not analyze this report due to a server error.";

/// Which operation, if any, currently owns the chatbox.
///
/// Text chat and report analysis are mutually exclusive: starting either one
/// requires `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatboxState {
    Idle,
    SendingText,
    AnalyzingReport,
}

#[derive(Debug, Serialize)]
pub struct Chatbox {
    input: String,
    #[serde(serialize_with = "file_name")]
    selected_file: Option<UploadedFile>,
    state: ChatboxState,
    messages: Vec<ChatMessage>,
    #[serde(skip)]
    generation: Generation,
}

fn file_name<S: serde::Serializer>(
    file: &Option<UploadedFile>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    file.as_ref().map(|file| file.name.as_str()).serialize(serializer)
}

impl Default for Chatbox {
    fn default() -> Self {
        Self {
            input: String::new(),
            selected_file: None,
            state: ChatboxState::Idle,
            messages: Vec::new(),
            generation: Generation::default(),
        }
    }
}

impl Chatbox {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> ChatboxState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state != ChatboxState::Idle
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn selected_file(&self) -> Option<&UploadedFile> {
        self.selected_file.as_ref()
    }

    pub fn select_file(&mut self, file: Option<UploadedFile>) {
        self.selected_file = file;
    }

    pub fn begin_send_text(&mut self, message: &str) -> Option<Pending<ChatboxRequest>> {
        if self.is_busy() {
            debug!(state = ?self.state, "chatbox busy, ignoring message");
            return None;
        }
        if message.trim().is_empty() {
            return None;
        }

        self.input = message.to_string();
        self.messages.push(ChatMessage::new(Sender::You, message));
        self.state = ChatboxState::SendingText;
        Some(Pending {
            ticket: self.generation.issue(),
            request: ChatboxRequest {
                message: message.to_string(),
            },
        })
    }

    pub fn finish_send_text(
        &mut self,
        ticket: Ticket,
        outcome: Result<ChatboxResponse, TransportError>,
    ) -> bool {
        if !self.generation.is_current(ticket) {
            debug!("discarding stale chatbox reply");
            return false;
        }

        let text = match outcome {
            Ok(response) => response.reply,
            Err(err) => {
                warn!("chatbox message failed: {err}");
                TEXT_ERROR.to_string()
            }
        };
        self.messages.push(ChatMessage::new(Sender::Ai, text));
        self.input.clear();
        self.state = ChatboxState::Idle;
        true
    }

    /// Takes the selected file for upload. `None` when busy or nothing is selected.
    pub fn begin_analyze_report(&mut self) -> Option<Pending<UploadedFile>> {
        if self.is_busy() {
            debug!(state = ?self.state, "chatbox busy, ignoring report");
            return None;
        }
        let file = self.selected_file.take()?;

        self.messages.push(ChatMessage::new(
            Sender::You,
            format!("Uploaded report: {}", file.name),
        ));
        self.state = ChatboxState::AnalyzingReport;
        Some(Pending {
            ticket: self.generation.issue(),
            request: file,
        })
    }

    /// Selects `file` and starts its analysis in one step. A busy chatbox
    /// rejects the upload and keeps nothing.
    pub fn begin_upload(&mut self, file: UploadedFile) -> Option<Pending<UploadedFile>> {
        if self.is_busy() {
            debug!(state = ?self.state, file = %file.name, "chatbox busy, rejecting upload");
            return None;
        }
        self.selected_file = Some(file);
        self.begin_analyze_report()
    }

    pub fn finish_analyze_report(
        &mut self,
        ticket: Ticket,
        outcome: Result<ReportAnalysis, TransportError>,
    ) -> bool {
        if !self.generation.is_current(ticket) {
            debug!("discarding stale report analysis");
            return false;
        }

        let text = match outcome {
            Ok(analysis) => format_report(&analysis),
            Err(err) => {
                warn!("report analysis failed: {err}");
                REPORT_ERROR.to_string()
            }
        };
        self.messages.push(ChatMessage::new(Sender::ReportAnalysis, text));
        self.selected_file = None;
        self.state = ChatboxState::Idle;
        true
    }

    pub fn reset(&mut self) {
        self.generation.advance();
        self.messages.clear();
        self.input.clear();
        self.selected_file = None;
        self.state = ChatboxState::Idle;
    }
}

pub fn format_report(analysis: &ReportAnalysis) -> String {
    let advice = analysis
        .general_advice
        .iter()
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Here is a non-medical summary of your report \"{}\":\n\n{}\n\nGeneral guidance:\n{}",
        analysis.file_name, analysis.summary, advice
    )
}

pub async fn send_text(panel: &Mutex<Chatbox>, client: &BackendClient, message: &str) -> bool {
    let Some(pending) = panel.lock().await.begin_send_text(message) else {
        return false;
    };
    let outcome = client.chatbox_message(&pending.request).await;
    panel.lock().await.finish_send_text(pending.ticket, outcome)
}

/// Uploads whatever file is currently selected.
pub async fn analyze_report(panel: &Mutex<Chatbox>, client: &BackendClient) -> bool {
    let Some(Pending { ticket, request }) = panel.lock().await.begin_analyze_report() else {
        return false;
    };
    let outcome = client.analyze_report(request).await;
    panel.lock().await.finish_analyze_report(ticket, outcome)
}

/// Analyzes a freshly uploaded file. Returns `false` and drops the file when busy.
pub async fn upload_report(
    panel: &Mutex<Chatbox>,
    client: &BackendClient,
    file: UploadedFile,
) -> bool {
    let Some(Pending { ticket, request }) = panel.lock().await.begin_upload(file) else {
        return false;
    };
    let outcome = client.analyze_report(request).await;
    panel.lock().await.finish_analyze_report(ticket, outcome)
}
