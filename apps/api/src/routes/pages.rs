//! Server-rendered page shell. The page body is filled in client-side from the
//! JSON endpoints; the server only supplies the profile's static strings.

use askama::Template;
use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::models::content::Profile;
use crate::routes::content::PROFILE;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub page_title: String,
    pub site_name: String,
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub footer: String,
}

impl IndexPage {
    pub fn new(profile: &Profile, site_name: &str) -> Self {
        let name = profile.full_name();
        let page_title = if profile.page_title.trim().is_empty() {
            site_name.to_string()
        } else {
            profile.page_title.clone()
        };
        Self {
            page_title,
            site_name: site_name.to_string(),
            name,
            title: profile.title.clone(),
            tagline: profile.tagline.clone(),
            footer: profile.footer.clone(),
        }
    }
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let profile: Profile = state.content.load_json(PROFILE).await?;
    let page = IndexPage::new(&profile, &state.config.site_name);
    Ok(Html(page.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title_falls_back_to_site_name() {
        let profile = Profile {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Profile::default()
        };
        let page = IndexPage::new(&profile, "freelanxur");
        assert_eq!(page.page_title, "freelanxur");
        assert_eq!(page.name, "Ada Lovelace");
    }

    #[test]
    fn test_render_escapes_profile_strings() {
        let profile = Profile {
            first_name: "<Ada>".to_string(),
            page_title: "Portfolio".to_string(),
            ..Profile::default()
        };
        let html = IndexPage::new(&profile, "freelanxur").render().unwrap();
        assert!(html.contains("<title>Portfolio</title>"));
        assert!(html.contains("&#60;Ada&#62;"));
        assert!(!html.contains("<Ada>"));
        assert!(html.contains("id=\"projects-content\""));
    }
}
