pub mod content;
pub mod cv;
pub mod health;
pub mod pages;

use axum::{http::Uri, routing::get, Router};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::state::AppState;

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_handler))
        // Content API
        .route("/api/profile", get(content::handle_get_profile))
        .route("/api/contact", get(content::handle_get_contact))
        .route("/api/experience", get(content::handle_get_experience))
        .route("/api/skills", get(content::handle_get_skills))
        .route("/api/projects", get(content::handle_get_projects))
        .route("/api/metrics", get(content::handle_get_metrics))
        .route("/api/services", get(content::handle_get_services))
        .route("/api/tech-stack", get(content::handle_get_tech_stack))
        .route("/api/about", get(content::handle_get_about))
        // CV
        .route("/api/download-cv", get(cv::handle_download_cv))
        // Page shell
        .route("/", get(pages::handle_index));

    let static_dir = &state.config.static_dir;
    if static_dir.is_dir() {
        info!("Serving static files from {}", static_dir.display());
        router = router.nest_service("/static", ServeDir::new(static_dir));
    } else {
        warn!("Static directory {} not found; /static is disabled", static_dir.display());
    }

    router.fallback(handle_not_found).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;

    const FILES: &[(&str, &str)] = &[
        (
            "profile.json",
            r#"{"first_name": "Rayleigh", "last_name": "Xu", "title": "Software Engineer",
                "tagline": "Building things", "page_title": "Rayleigh Xu | Portfolio",
                "footer": "Made with care"}"#,
        ),
        (
            "contact.json",
            r#"{"email": "ray@example.com", "github": "github.com/ray", "linkedin": "linkedin.com/in/ray"}"#,
        ),
        (
            "experience.json",
            r#"[{"title": "Engineer", "company": "Acme", "start_date": "2021", "end_date": "Present",
                 "cv_bullets": ["Shipped the thing"]}]"#,
        ),
        (
            "skills.json",
            r#"{"skills": [{"name": "Rust", "percentage": 90}, {"name": "Go", "percentage": 140}]}"#,
        ),
        (
            "projects.json",
            r#"[{"title": "Folio", "description": "This site", "link": "https://example.com"},
                {"title": "Secret", "description": "Client work", "nda": true}]"#,
        ),
        ("metrics.json", r#"[{"value": "5+", "label": "Years"}]"#),
        ("services.json", r#"[{"title": "APIs", "description": "Backends", "icon": "server"}]"#),
        ("tech_stack.json", r#"{"categories": [{"name": "Languages", "tags": ["Rust"]}]}"#),
        ("about_me.md", "I build **reliable** systems.\n"),
        ("about_freelanxur.md", "# freelanxur\n"),
    ];

    fn test_state(files: &[(&str, &str)]) -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            std::fs::write(dir.path().join(name), body).unwrap();
        }
        let config = Config {
            content_dir: dir.path().to_path_buf(),
            static_dir: dir.path().join("static"),
            ..Config::default()
        };
        (dir, AppState::new(config))
    }

    async fn get(state: AppState, uri: &str) -> Response {
        build_router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> bytes::Bytes {
        to_bytes(response.into_body(), usize::MAX).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (_dir, state) = test_state(&[]);
        let response = get(state, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "folio-api");
    }

    #[tokio::test]
    async fn test_content_endpoints_return_documents() {
        let (_dir, state) = test_state(FILES);

        let profile = body_json(get(state.clone(), "/api/profile").await).await;
        assert_eq!(profile["first_name"], "Rayleigh");

        let projects = body_json(get(state.clone(), "/api/projects").await).await;
        assert_eq!(projects.as_array().unwrap().len(), 2);
        assert_eq!(projects[1]["nda"], true);

        let tech = body_json(get(state.clone(), "/api/tech-stack").await).await;
        assert_eq!(tech["categories"][0]["tags"][0], "Rust");

        let metrics = body_json(get(state, "/api/metrics").await).await;
        assert_eq!(metrics[0]["value"], "5+");
    }

    #[tokio::test]
    async fn test_skills_endpoint_serves_raw_document() {
        let (_dir, state) = test_state(FILES);
        let skills = body_json(get(state, "/api/skills").await).await;
        // Clamping applies to the CV only.
        assert_eq!(skills["skills"][1]["percentage"], 140);
    }

    #[tokio::test]
    async fn test_about_renders_markdown() {
        let (_dir, state) = test_state(FILES);
        let about = body_json(get(state, "/api/about").await).await;
        assert!(about["about_me"].as_str().unwrap().contains("<strong>reliable</strong>"));
        assert!(about["about_logo"].as_str().unwrap().contains("<h1>freelanxur</h1>"));
    }

    #[tokio::test]
    async fn test_download_cv_returns_pdf_attachment() {
        let (_dir, state) = test_state(FILES);
        let response = get(state, "/api/download-cv").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Rayleigh_Xu_CV.pdf\""
        );

        let bytes = body_bytes(response).await;
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[tokio::test]
    async fn test_download_cv_missing_document_is_404() {
        let without_skills: Vec<(&str, &str)> = FILES
            .iter()
            .copied()
            .filter(|(name, _)| *name != "skills.json")
            .collect();
        let (_dir, state) = test_state(&without_skills);
        let response = get(state, "/api/download-cv").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_malformed_document_is_500() {
        let (_dir, state) = test_state(&[("contact.json", "[1, 2")]);
        let response = get(state, "/api/contact").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "CONTENT_ERROR");
    }

    #[tokio::test]
    async fn test_index_page_renders_profile() {
        let (_dir, state) = test_state(FILES);
        let response = get(state, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = String::from_utf8(body_bytes(response).await.to_vec()).unwrap();
        assert!(html.contains("<title>Rayleigh Xu | Portfolio</title>"));
        assert!(html.contains("Made with care"));
    }

    #[tokio::test]
    async fn test_static_files_served_when_directory_exists() {
        let (dir, state) = test_state(&[]);
        std::fs::create_dir_all(dir.path().join("static/js")).unwrap();
        std::fs::write(dir.path().join("static/js/main.js"), "console.log('hi');").unwrap();

        let response = get(state, "/static/js/main.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(&body_bytes(response).await[..], b"console.log('hi');");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (_dir, state) = test_state(&[]);
        let response = get(state, "/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }
}
