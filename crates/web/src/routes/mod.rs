use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::features::{leaderboard, results, teams};
use crate::middleware::auth::ApiKeys;
use crate::state::AppState;

pub fn app(state: AppState, api_keys: ApiKeys) -> Router {
    let api = Router::new()
        .nest("/leaderboard", leaderboard::routes::routes())
        .nest("/teams", teams::routes::routes(api_keys.clone()))
        .nest("/results", results::routes::routes(api_keys));

    Router::new()
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header},
        response::Response,
    };
    use scoring::{CompetitionStore, models::Snapshot};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const KEY: &str = "test-key";

    fn test_app() -> (Router, AppState) {
        let seed: Snapshot = serde_json::from_value(json!({
            "teams": [
                {"id": "x", "category": "men", "athlete1": "Xav", "athlete2": "Xeno"},
                {"id": "y", "category": "men", "athlete1": "Yan", "athlete2": "Yves"},
                {"id": "w", "category": "women", "athlete1": "Wen", "athlete2": "Wilma"}
            ],
            "results": [
                {"teamId": "x", "snatchAthlete1": 100, "snatchAthlete2": 90,
                 "cleanAthlete1": 80, "cleanAthlete2": 70, "wodTime": "4:00"},
                {"teamId": "y", "snatchAthlete1": 95, "snatchAthlete2": 95,
                 "cleanAthlete1": 85, "cleanAthlete2": 75, "wodTime": "3:30"}
            ]
        }))
        .unwrap();

        let state = AppState::new(CompetitionStore::with_snapshot(seed));
        let app = app(state.clone(), ApiKeys::from_comma_separated(KEY));
        (app, state)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>, key: Option<&str>) -> Response {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(key) = key {
            request = request.header(header::AUTHORIZATION, format!("Bearer {key}"));
        }
        let body = match body {
            Some(value) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        app.clone().oneshot(request.body(body).unwrap()).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_leaderboard() {
        let (app, _) = test_app();

        let response = send(&app, Method::GET, "/api/leaderboard", None, None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let men = &body["categories"][0];
        assert_eq!(men["category"], "men");
        assert_eq!(men["label"], "Men + Men");
        assert_eq!(men["entries"][0]["teamId"], "y");
        assert_eq!(men["entries"][0]["wodTime"], "3:30");
        assert_eq!(men["entries"][1]["teamId"], "x");

        let women = &body["categories"][1];
        assert_eq!(women["entries"][0]["teamId"], "w");
        assert_eq!(women["entries"][0]["wodSeconds"], Value::Null);
        assert_eq!(women["entries"][0]["wodTime"], Value::Null);
    }

    #[tokio::test]
    async fn test_get_category_leaderboard() {
        let (app, _) = test_app();

        let response = send(&app, Method::GET, "/api/leaderboard/women", None, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["entries"].as_array().unwrap().len(), 1);

        let response = send(&app, Method::GET, "/api/leaderboard/mixed", None, None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_compute_posted_snapshot() {
        let (app, _) = test_app();
        let snapshot = json!({
            "teams": [
                {"id": "a", "category": "women", "athlete1": "Ana", "athlete2": "Bea"},
                {"id": "b", "category": "women", "athlete1": "Cat", "athlete2": "Dee"}
            ],
            "results": [{"teamId": "b", "snatchAthlete1": 40, "wodTime": "10:00"}]
        });

        let response = send(&app, Method::POST, "/api/leaderboard/compute", Some(snapshot), None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let women = &body["categories"][1]["entries"];
        assert_eq!(women[0]["teamId"], "b");
        assert_eq!(women[0]["rank"], 1);
        assert_eq!(women[1]["teamId"], "a");
        assert_eq!(women[1]["rank"], 2);
        assert!(body["categories"][0]["entries"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_writes_require_api_key() {
        let (app, _) = test_app();
        let payload = json!({"category": "men", "athlete1": "Zed", "athlete2": "Zack"});

        let response = send(&app, Method::POST, "/api/teams", Some(payload.clone()), None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = send(&app, Method::POST, "/api/teams", Some(payload), Some("wrong")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = send(&app, Method::GET, "/api/teams", None, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_team_crud() {
        let (app, _) = test_app();

        let payload = json!({"category": "women", "athlete1": "Una", "athlete2": "Vera"});
        let response = send(&app, Method::POST, "/api/teams", Some(payload), Some(KEY)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;
        let id = created["id"].as_str().unwrap().to_string();

        let patch = json!({"athlete2": "Vicky"});
        let response = send(&app, Method::PATCH, &format!("/api/teams/{id}"), Some(patch), Some(KEY)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["athlete2"], "Vicky");

        let response = send(&app, Method::DELETE, &format!("/api/teams/{id}"), None, Some(KEY)).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, Method::GET, &format!("/api/teams/{id}"), None, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_payloads_are_rejected() {
        let (app, _) = test_app();

        let empty_name = json!({"category": "men", "athlete1": "", "athlete2": "B"});
        let response = send(&app, Method::POST, "/api/teams", Some(empty_name), Some(KEY)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Validation failed");

        let bad_time = json!({"wodTime": "DNF"});
        let response = send(&app, Method::PATCH, "/api/results/x", Some(bad_time), Some(KEY)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_result_update_reaches_leaderboard() {
        let (app, state) = test_app();

        let faster = json!({"wodTime": "2:59"});
        let response = send(&app, Method::PATCH, "/api/results/w", Some(faster), Some(KEY)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["teamId"], "w");

        state.standings.wait_for_version(1).await.unwrap();

        let response = send(&app, Method::GET, "/api/leaderboard", None, None).await;
        let body = json_body(response).await;
        assert_eq!(body["version"], 1);
        assert_eq!(body["categories"][1]["entries"][0]["wodTime"], "2:59");
    }
}
