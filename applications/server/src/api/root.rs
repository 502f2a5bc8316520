/// Root API route
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: String,
}

/// GET / - Static greeting
pub async fn greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: "hola mundo".to_string(),
    })
}
