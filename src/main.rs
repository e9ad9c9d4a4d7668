use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use notification_listener::challenge;
use notification_listener::config::Config;
use notification_listener::{SignatureVerifier, VerifyError};

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub verifier: SignatureVerifier,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load()?;
    let verifier = SignatureVerifier::new(
        &config.notification_secret,
        &config.service_tag,
        config.backdate_window_ms,
    );

    let state = AppState {
        config: config.clone(),
        verifier,
    };

    let app = Router::new()
        .route("/", get(handle_challenge))
        .route("/health", get(health_check))
        .with_state(Arc::new(state))
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("Listener starting on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Debug, Deserialize)]
struct ChallengeParams {
    crc: String,
    hmac: String,
}

async fn handle_challenge(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChallengeParams>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if let Err(e) = state.verifier.verify(&params.hmac) {
        warn!("Challenge verification failed: {}", e);
        return Err(status_for(&e));
    }

    let response_hash =
        challenge::response_hash(&state.config.notification_secret, &params.crc);

    Ok(Json(serde_json::json!({ "responseHash": response_hash })))
}

fn status_for(err: &VerifyError) -> StatusCode {
    match err {
        VerifyError::MissingSignature
        | VerifyError::InvalidTokenFormat
        | VerifyError::InvalidTokenEncoding
        | VerifyError::MalformedPayload => StatusCode::BAD_REQUEST,
        VerifyError::SignatureExpired | VerifyError::InvalidSignature => StatusCode::UNAUTHORIZED,
        VerifyError::MissingSecret | VerifyError::SignatureDerivation(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now()
    }))
}
