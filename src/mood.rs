use crate::inflight::{Generation, Pending};
use crate::models::{ChatExchange, MoodChatRequest, MoodChatResponse};
use crate::transport::{BackendClient, TransportError};
use chrono::Utc;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub const MOOD_OPTIONS: [&str; 10] = [
    "Happy",
    "Neutral",
    "Stressed",
    "Anxious",
    "Sad",
    "Lonely",
    "Angry",
    "Tired / Burned Out",
    "Overwhelmed",
    "Unmotivated / Low Energy",
];

pub const DEFAULT_MOOD: &str = "Stressed";
pub const FALLBACK_REPLY: &str = "Something went wrong while contacting the assistant.";
pub const MOOD_ONLY_TEXT: &str = "(No extra description, only mood selected.)";
pub const UNSENT_TEXT: &str = "(message failed to send)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodChatState {
    Idle,
    Sending,
}

/// Mood-chat panel: a mood selector, a free-text message and the trail of exchanges.
#[derive(Debug, Serialize)]
pub struct MoodChat {
    mood: String,
    message: String,
    state: MoodChatState,
    exchanges: Vec<ChatExchange>,
    #[serde(skip)]
    next_id: u64,
    #[serde(skip)]
    generation: Generation,
}

impl Default for MoodChat {
    fn default() -> Self {
        Self {
            mood: DEFAULT_MOOD.to_string(),
            message: String::new(),
            state: MoodChatState::Idle,
            exchanges: Vec::new(),
            next_id: 1,
            generation: Generation::default(),
        }
    }
}

impl MoodChat {
    pub fn mood(&self) -> &str {
        &self.mood
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn state(&self) -> MoodChatState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == MoodChatState::Sending
    }

    pub fn exchanges(&self) -> &[ChatExchange] {
        &self.exchanges
    }

    /// Starts a send. Returns `None` when busy, or when there is neither a mood nor any text.
    pub fn begin_submit(&mut self, mood: &str, message: &str) -> Option<Pending<MoodChatRequest>> {
        if self.is_busy() {
            debug!("mood chat already sending, ignoring submit");
            return None;
        }
        if mood.is_empty() && message.trim().is_empty() {
            return None;
        }

        self.mood = mood.to_string();
        self.message = message.to_string();
        self.state = MoodChatState::Sending;

        Some(Pending {
            ticket: self.generation.issue(),
            request: MoodChatRequest {
                mood: mood.to_string(),
                message: message.to_string(),
            },
        })
    }

    /// Records the outcome as a new exchange. Returns `false` if the request was stale.
    pub fn finish_submit(
        &mut self,
        pending: Pending<MoodChatRequest>,
        outcome: Result<MoodChatResponse, TransportError>,
    ) -> bool {
        if !self.generation.is_current(pending.ticket) {
            debug!("discarding stale mood chat reply");
            return false;
        }

        let MoodChatRequest { mood, message } = pending.request;
        let (user_text, reply) = match outcome {
            Ok(response) => {
                let text = if message.trim().is_empty() {
                    MOOD_ONLY_TEXT.to_string()
                } else {
                    message
                };
                (text, response.reply)
            }
            Err(err) => {
                warn!("mood chat failed: {err}");
                let text = if message.is_empty() {
                    UNSENT_TEXT.to_string()
                } else {
                    message
                };
                (text, FALLBACK_REPLY.to_string())
            }
        };

        let id = self.next_id;
        self.next_id += 1;
        self.exchanges.push(ChatExchange {
            id,
            mood,
            user_text,
            reply,
            created_at: Utc::now(),
        });
        self.message.clear();
        self.state = MoodChatState::Idle;
        true
    }

    /// Clears the trail. Replies still in flight will be dropped.
    pub fn reset(&mut self) {
        self.generation.advance();
        self.exchanges.clear();
        self.message.clear();
        self.state = MoodChatState::Idle;
    }
}

pub async fn submit(
    panel: &Mutex<MoodChat>,
    client: &BackendClient,
    mood: &str,
    message: &str,
) -> bool {
    let Some(pending) = panel.lock().await.begin_submit(mood, message) else {
        return false;
    };
    let outcome = client.mood_chat(&pending.request).await;
    panel.lock().await.finish_submit(pending, outcome)
}
