use axum::{
    Router,
    routing::{get, post},
};

use crate::api::context::AppState;

pub(in crate::api) mod create_pet;
pub(in crate::api) mod get_pet;
pub(in crate::api) mod get_pets;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_pets::handler))
        .route("/", post(create_pet::handler))
        .route("/:id", get(get_pet::handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use uuid::Uuid;

    fn test_api_router() -> Router {
        Router::new()
            .nest("/pets", router())
            .with_state(AppState::new_testing())
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let response = test_api_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_create_pet_with_invalid_species_is_400() {
        let (status, body) = post_json(
            "/pets",
            json!({
                "name": "Mittens",
                "gender": "F",
                "species": "hamster",
                "breed": "Siamese",
                "owner": Uuid::new_v4().to_string()
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["species"],
            json!(["\"hamster\" is not a valid choice. Valid choices: d, c."])
        );
    }

    #[tokio::test]
    async fn test_create_pet_with_malformed_owner_is_400() {
        let (status, body) = post_json(
            "/pets",
            json!({
                "name": "Mittens",
                "gender": "F",
                "species": "c",
                "breed": "Siamese",
                "owner": "not-a-uuid"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["owner"],
            json!(["Invalid pk \"not-a-uuid\" - object does not exist."])
        );
    }

    #[tokio::test]
    async fn test_get_pet_with_malformed_id_is_404() {
        let response = test_api_router()
            .oneshot(
                Request::builder()
                    .uri("/pets/definitely-not-a-pet")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
