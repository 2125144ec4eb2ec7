pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::editor::handlers as editor;
use crate::export::handlers as export;
use crate::state::AppState;
use crate::suggest::handlers as suggest;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/catalog", get(editor::handle_catalog))
        // Session lifecycle
        .route("/api/v1/sessions", post(editor::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(editor::handle_get_document).delete(editor::handle_delete_session),
        )
        // Field updates
        .route(
            "/api/v1/sessions/:id/personal",
            patch(editor::handle_update_personal),
        )
        .route(
            "/api/v1/sessions/:id/config",
            patch(editor::handle_update_config),
        )
        .route(
            "/api/v1/sessions/:id/objective",
            put(editor::handle_set_objective),
        )
        .route("/api/v1/sessions/:id/skills", put(editor::handle_set_skills))
        .route("/api/v1/sessions/:id/reset", post(editor::handle_reset))
        .route(
            "/api/v1/sessions/:id/photo",
            post(editor::handle_attach_photo).delete(editor::handle_clear_photo),
        )
        // Experience list
        .route(
            "/api/v1/sessions/:id/experience",
            post(editor::handle_add_experience),
        )
        .route(
            "/api/v1/sessions/:id/experience/sort",
            post(editor::handle_sort_experience),
        )
        .route(
            "/api/v1/sessions/:id/experience/:entry_id",
            patch(editor::handle_update_experience).delete(editor::handle_remove_experience),
        )
        // Education list
        .route(
            "/api/v1/sessions/:id/education",
            post(editor::handle_add_education),
        )
        .route(
            "/api/v1/sessions/:id/education/sort",
            post(editor::handle_sort_education),
        )
        .route(
            "/api/v1/sessions/:id/education/:entry_id",
            patch(editor::handle_update_education).delete(editor::handle_remove_education),
        )
        // Preview and collaborators
        .route("/api/v1/sessions/:id/preview", get(editor::handle_preview))
        .route(
            "/api/v1/sessions/:id/suggest-objective",
            post(suggest::handle_suggest_objective),
        )
        .route(
            "/api/v1/sessions/:id/payment",
            get(export::handle_payment_info),
        )
        .route(
            "/api/v1/sessions/:id/payment/confirm",
            post(export::handle_confirm_payment),
        )
        .route("/api/v1/sessions/:id/export", post(export::handle_export))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::export::HttpExportService;
    use crate::payment::SimulatedPixGate;
    use crate::render::TemplateRenderer;
    use crate::session::SessionStore;
    use crate::suggest::SuggestClient;

    fn test_state() -> AppState {
        AppState {
            sessions: SessionStore::new(),
            suggest: SuggestClient::new("test-key".to_string()),
            export: Arc::new(HttpExportService::new("http://127.0.0.1:0".to_string())),
            payment: Arc::new(SimulatedPixGate::new(std::time::Duration::from_millis(0))),
            renderer: Arc::new(TemplateRenderer::new()),
            config: Config {
                gemini_api_key: "test-key".to_string(),
                export_service_url: "http://127.0.0.1:0".to_string(),
                port: 8080,
                rust_log: "info".to_string(),
                payment_delay_ms: 0,
            },
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_route() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_session_edit_and_preview_flow() {
        let state = test_state();

        let response = build_router(state.clone())
            .oneshot(Request::post("/api/v1/sessions").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        let id = created["session_id"].as_str().unwrap().to_string();
        assert_eq!(created["document"]["personal_info"]["full_name"], "");

        let response = build_router(state.clone())
            .oneshot(
                Request::patch(format!("/api/v1/sessions/{id}/personal"))
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"field": "full_name", "value": "Ana Silva"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["document"]["personal_info"]["full_name"], "Ana Silva");

        let response = build_router(state.clone())
            .oneshot(
                Request::get(format!("/api/v1/sessions/{id}/preview"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Ana Silva"));
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::get(format!("/api/v1/sessions/{}", uuid::Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_unpaid_export_is_402() {
        let state = test_state();
        let session = state.sessions.create().await;
        let response = build_router(state)
            .oneshot(
                Request::post(format!("/api/v1/sessions/{}/export", session.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    }

    #[tokio::test]
    async fn test_reset_without_confirmation_is_rejected() {
        let state = test_state();
        let session = state.sessions.create().await;
        let response = build_router(state)
            .oneshot(
                Request::post(format!("/api/v1/sessions/{}/reset", session.id))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"target": "example"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_catalog_route_lists_templates_and_palette() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::get("/api/v1/catalog").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["templates"].as_array().unwrap().len(), 3);
        assert_eq!(json["colors"].as_array().unwrap().len(), 5);
    }
}
