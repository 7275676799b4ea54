use crate::chatbox;
use crate::errors::AppError;
use crate::fitness::{self, ActivityLevel, AgeGroup, Goal};
use crate::models::{BackendStatus, ChatForm, FitnessForm, MoodForm, UploadedFile};
use crate::mood;
use crate::nav::Page;
use crate::state::AppState;
use crate::ui;
use axum::{
    extract::{Multipart, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let page = state.nav.lock().await.page();
    let body = match page {
        Page::Home => {
            let mood = state.mood.lock().await;
            let fitness = state.fitness.lock().await;
            ui::render_home(&mood, &fitness)
        }
        Page::About => ui::render_about(),
        Page::Chat => ui::render_chat(&*state.chatbox.lock().await),
    };
    Html(ui::render_shell(page, &body))
}

pub async fn navigate(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<Redirect, AppError> {
    let page = page.parse::<Page>().map_err(AppError::bad_request)?;
    state.nav.lock().await.select(page);
    Ok(Redirect::to("/"))
}

pub async fn mood_submit(
    State(state): State<AppState>,
    Form(form): Form<MoodForm>,
) -> Redirect {
    mood::submit(&state.mood, &state.client, &form.mood, &form.message).await;
    Redirect::to("/")
}

pub async fn mood_clear(State(state): State<AppState>) -> Redirect {
    state.mood.lock().await.reset();
    Redirect::to("/")
}

pub async fn fitness_generate(
    State(state): State<AppState>,
    Form(form): Form<FitnessForm>,
) -> Result<Redirect, AppError> {
    let goal = form.goal.parse::<Goal>()?;
    let activity_level = form.activity_level.parse::<ActivityLevel>()?;
    let age_group = form.age_group.parse::<AgeGroup>()?;

    fitness::generate(&state.fitness, &state.client, goal, activity_level, age_group).await;
    Ok(Redirect::to("/"))
}

pub async fn fitness_clear(State(state): State<AppState>) -> Redirect {
    state.fitness.lock().await.reset();
    Redirect::to("/")
}

pub async fn chat_message(
    State(state): State<AppState>,
    Form(form): Form<ChatForm>,
) -> Redirect {
    chatbox::send_text(&state.chatbox, &state.client, &form.message).await;
    Redirect::to("/")
}

pub async fn chat_report(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        // Browsers send an empty, unnamed part when no file was picked.
        if !name.is_empty() {
            upload = Some(UploadedFile::new(name, bytes.to_vec()));
        }
    }

    if let Some(file) = upload {
        info!(file = %file.name, bytes = file.bytes.len(), "report uploaded");
        chatbox::upload_report(&state.chatbox, &state.client, file).await;
    }
    Ok(Redirect::to("/"))
}

pub async fn chat_clear(State(state): State<AppState>) -> Redirect {
    state.chatbox.lock().await.reset();
    Redirect::to("/")
}

pub async fn get_page(State(state): State<AppState>) -> Response {
    let nav = state.nav.lock().await;
    Json(&*nav).into_response()
}

pub async fn get_mood(State(state): State<AppState>) -> Response {
    let panel = state.mood.lock().await;
    Json(&*panel).into_response()
}

pub async fn get_fitness(State(state): State<AppState>) -> Response {
    let panel = state.fitness.lock().await;
    Json(&*panel).into_response()
}

pub async fn get_chat(State(state): State<AppState>) -> Response {
    let panel = state.chatbox.lock().await;
    Json(&*panel).into_response()
}

pub async fn backend_status(
    State(state): State<AppState>,
) -> Result<Json<BackendStatus>, AppError> {
    Ok(Json(state.client.status().await?))
}
