use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Json};
use axum::{Router, routing::get};
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::api::PollenApiClient;
use crate::models::{Location, PollenReading};
use crate::pipeline;
use crate::presenter::{self, PresentError};
use crate::render::HtmlPage;

#[derive(Clone)]
struct AppState {
    client: Arc<PollenApiClient>,
    location: Location,
}

pub fn router(client: PollenApiClient, location: Location) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/api/pollen", get(pollen_readings))
        .with_state(AppState {
            client: Arc::new(client),
            location,
        })
        .layer(cors)
}

pub async fn run(client: PollenApiClient, location: Location, port: u16) {
    let app = router(client, location);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Pollen dashboard running at http://localhost:{}", port);
    axum::serve(listener, app).await.unwrap();
}

/// One pipeline pass per page view, no caching between reloads.
async fn index(State(state): State<AppState>) -> Html<String> {
    let mut page = HtmlPage::default();
    pipeline::run_once(&state.client, &state.location, Utc::now(), &mut page).await;
    Html(page.into_html())
}

#[derive(Serialize)]
struct ApiReport {
    location: String,
    hour: NaiveDateTime,
    readings: Vec<PollenReading>,
}

async fn pollen_readings(State(state): State<AppState>) -> Result<Json<ApiReport>, StatusCode> {
    let response = state
        .client
        .fetch_pollen_data(&state.location)
        .await
        .map_err(|_| StatusCode::BAD_GATEWAY)?;

    let presentation = presenter::present(&response.hourly, Utc::now()).map_err(|err| match err {
        PresentError::HourNotCovered(_) => StatusCode::NOT_FOUND,
        PresentError::SeriesLengthMismatch(_) => StatusCode::BAD_GATEWAY,
    })?;

    Ok(Json(ApiReport {
        location: state.location.name.clone(),
        hour: presentation.hour,
        readings: presentation.readings,
    }))
}
