//! Read-only JSON endpoints, one per content document.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::content::{
    AboutResponse, Contact, ExperienceEntry, MetricItem, Profile, ProjectEntry, ServiceItem,
    SkillsDocument, TechStack,
};
use crate::state::AppState;

pub const PROFILE: &str = "profile.json";
pub const CONTACT: &str = "contact.json";
pub const EXPERIENCE: &str = "experience.json";
pub const SKILLS: &str = "skills.json";
pub const PROJECTS: &str = "projects.json";
pub const METRICS: &str = "metrics.json";
pub const SERVICES: &str = "services.json";
pub const TECH_STACK: &str = "tech_stack.json";
pub const ABOUT_ME: &str = "about_me.md";
pub const ABOUT_LOGO: &str = "about_freelanxur.md";

/// GET /api/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    Ok(Json(state.content.load_json(PROFILE).await?))
}

/// GET /api/contact
pub async fn handle_get_contact(State(state): State<AppState>) -> Result<Json<Contact>, AppError> {
    Ok(Json(state.content.load_json(CONTACT).await?))
}

/// GET /api/experience
pub async fn handle_get_experience(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExperienceEntry>>, AppError> {
    Ok(Json(state.content.load_json(EXPERIENCE).await?))
}

/// GET /api/skills
pub async fn handle_get_skills(
    State(state): State<AppState>,
) -> Result<Json<SkillsDocument>, AppError> {
    Ok(Json(state.content.load_json(SKILLS).await?))
}

/// GET /api/projects
pub async fn handle_get_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectEntry>>, AppError> {
    Ok(Json(state.content.load_json(PROJECTS).await?))
}

/// GET /api/metrics
pub async fn handle_get_metrics(
    State(state): State<AppState>,
) -> Result<Json<Vec<MetricItem>>, AppError> {
    Ok(Json(state.content.load_json(METRICS).await?))
}

/// GET /api/services
pub async fn handle_get_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceItem>>, AppError> {
    Ok(Json(state.content.load_json(SERVICES).await?))
}

/// GET /api/tech-stack
pub async fn handle_get_tech_stack(
    State(state): State<AppState>,
) -> Result<Json<TechStack>, AppError> {
    Ok(Json(state.content.load_json(TECH_STACK).await?))
}

/// GET /api/about
/// Both about documents rendered from Markdown to HTML.
pub async fn handle_get_about(State(state): State<AppState>) -> Result<Json<AboutResponse>, AppError> {
    Ok(Json(AboutResponse {
        about_me: state.content.load_markdown_html(ABOUT_ME).await?,
        about_logo: state.content.load_markdown_html(ABOUT_LOGO).await?,
    }))
}
