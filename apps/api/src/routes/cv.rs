//! CV download: gathers the content documents, renders the PDF on the
//! blocking pool and serves it as an attachment.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::models::content::{Contact, ExperienceEntry, Profile, ProjectEntry, SkillsDocument};
use crate::resume::{render_resume, ResumeInput};
use crate::routes::content::{ABOUT_ME, CONTACT, EXPERIENCE, PROFILE, PROJECTS, SKILLS};
use crate::state::AppState;

/// Loads the six CV inputs and adapts them into a renderer input.
pub async fn load_resume_input(state: &AppState) -> Result<ResumeInput, AppError> {
    let store = &state.content;
    let (profile, about, skills, experience, projects, contact) = tokio::try_join!(
        store.load_json::<Profile>(PROFILE),
        store.load_markdown_raw(ABOUT_ME),
        store.load_json::<SkillsDocument>(SKILLS),
        store.load_json::<Vec<ExperienceEntry>>(EXPERIENCE),
        store.load_json::<Vec<ProjectEntry>>(PROJECTS),
        store.load_json::<Contact>(CONTACT),
    )?;

    Ok(ResumeInput {
        profile,
        about,
        skills: skills.skill_levels(),
        experience,
        projects,
        contact,
        branding: state.config.branding(),
    })
}

/// GET /api/download-cv
pub async fn handle_download_cv(State(state): State<AppState>) -> Result<Response, AppError> {
    let input = load_resume_input(&state).await?;

    // Layout and serialisation are CPU-bound; keep them off the async executor.
    let pdf = tokio::task::spawn_blocking(move || render_resume(&input))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in CV render: {e}")))??;

    info!(bytes = pdf.len(), "CV generated");

    let disposition = format!("attachment; filename=\"{}\"", state.config.cv_filename);
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}
