use crate::chatbox::Chatbox;
use crate::fitness::FitnessPlanner;
use crate::mood::MoodChat;
use crate::nav::Navigation;
use crate::transport::BackendClient;
use std::sync::Arc;
use tokio::sync::Mutex;

/// One in-memory session. Each panel is locked independently.
#[derive(Clone)]
pub struct AppState {
    pub client: BackendClient,
    pub nav: Arc<Mutex<Navigation>>,
    pub mood: Arc<Mutex<MoodChat>>,
    pub fitness: Arc<Mutex<FitnessPlanner>>,
    pub chatbox: Arc<Mutex<Chatbox>>,
}

impl AppState {
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            nav: Arc::default(),
            mood: Arc::default(),
            fitness: Arc::default(),
            chatbox: Arc::default(),
        }
    }
}
