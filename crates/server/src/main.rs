// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use taikan_api::{
    ApiError, CalendarResponse, GymDetailResponse, ReferenceData, SearchRequest, SearchResponse,
    get_calendar, get_gym_detail, get_reference, search_gyms,
};
use taikan_catalog::{Catalog, CatalogStore, InMemoryStore, UnavailableStore};
use time::macros::offset;
use time::{Date, OffsetDateTime};
use tracing::{info, warn};

/// Taikan Server - HTTP server for the Taikan gym search
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON catalog file. If not provided, uses the built-in demo catalog.
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Treat the catalog store as unreachable and serve the fallback dataset
    #[arg(long)]
    offline: bool,
}

/// Application state shared across handlers.
///
/// The catalog is read-only, so no lock is needed.
struct AppState<S> {
    /// The catalog searched by every request.
    catalog: Arc<Catalog<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<S: CatalogStore> AppState<S> {
    fn new(store: S) -> Self {
        Self {
            catalog: Arc::new(Catalog::new(store)),
        }
    }
}

/// Query parameters for the calendar endpoint.
#[derive(Debug, Deserialize)]
struct CalendarQuery {
    /// The current day (`YYYY-MM-DD`). Defaults to the server's date.
    today: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
        }
    }
}

/// Returns the current date in Japan.
fn clock_today() -> Date {
    OffsetDateTime::now_utc().to_offset(offset!(+9)).date()
}

/// Handler for POST `/search` endpoint.
///
/// Searches the catalog with the requested facets.
async fn handle_search<S: CatalogStore + 'static>(
    AxumState(app_state): AxumState<AppState<S>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, HttpError> {
    info!(
        areas = ?request.selection.areas,
        sports = ?request.selection.sports,
        dates = request.selection.dates.len(),
        "Handling search request"
    );

    let response: SearchResponse =
        search_gyms(&app_state.catalog, &request, clock_today()).await?;

    Ok(Json(response))
}

/// Handler for GET `/gyms/{id}` endpoint.
///
/// Retrieves one facility.
async fn handle_get_gym<S: CatalogStore + 'static>(
    AxumState(app_state): AxumState<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Json<GymDetailResponse>, HttpError> {
    info!(id, "Handling get_gym request");

    let response: GymDetailResponse = get_gym_detail(&app_state.catalog, id).await?;

    Ok(Json(response))
}

/// Handler for GET `/reference` endpoint.
///
/// Lists areas, stations, sports and time options.
async fn handle_get_reference() -> Json<ReferenceData> {
    info!("Handling get_reference request");
    Json(get_reference())
}

/// Handler for GET `/calendar` endpoint.
///
/// Computes the two months of the date picker.
async fn handle_get_calendar(
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, HttpError> {
    info!(today = ?query.today, "Handling get_calendar request");

    let response: CalendarResponse = get_calendar(query.today.as_deref(), clock_today())?;

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router<S: CatalogStore + 'static>(app_state: AppState<S>) -> Router {
    Router::new()
        .route("/search", post(handle_search::<S>))
        .route("/gyms/{id}", get(handle_get_gym::<S>))
        .route("/reference", get(handle_get_reference))
        .route("/calendar", get(handle_get_calendar))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Taikan Server");

    // Choose the catalog store
    let app: Router = if args.offline {
        warn!("Offline mode: every search is served from the fallback dataset");
        build_router(AppState::new(UnavailableStore::new("offline mode")))
    } else if let Some(path) = &args.catalog {
        info!(path = %path.display(), "Using catalog file");
        build_router(AppState::new(InMemoryStore::from_json_file(path)?))
    } else {
        info!("Using built-in demo catalog");
        build_router(AppState::new(InMemoryStore::demo()?))
    };

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use taikan_domain::GymDetail;
    use tower::ServiceExt;

    /// Helper to create a router over the demo catalog.
    fn create_test_app() -> Router {
        build_router(AppState::new(
            InMemoryStore::demo().expect("Failed to load demo catalog"),
        ))
    }

    /// Helper to create a router whose store always fails.
    fn create_test_offline_app() -> Router {
        build_router(AppState::new(UnavailableStore::new("test")))
    }

    fn create_test_search_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/search")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn create_test_get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_search_by_sport() {
        let app: Router = create_test_app();

        let response = app
            .oneshot(create_test_search_request(
                r#"{"today":"2024-06-15","sports":["卓球"]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: SearchResponse = read_json(response).await;
        assert_eq!(body.total, 3);
        assert!(!body.fallback);
        assert!(body.items.iter().all(|gym| gym.has_tag("卓球")));
        assert_eq!(body.conditions.badges, ["卓球"]);
    }

    #[tokio::test]
    async fn test_search_with_empty_body_returns_everything() {
        let app: Router = create_test_app();

        let response = app
            .oneshot(create_test_search_request("{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: SearchResponse = read_json(response).await;
        assert_eq!(body.total, 7);
    }

    #[tokio::test]
    async fn test_search_offline_serves_fallback() {
        let app: Router = create_test_offline_app();

        let response = app
            .oneshot(create_test_search_request(r#"{"areas":["港区"]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: SearchResponse = read_json(response).await;
        assert!(body.fallback);
        assert_eq!(body.total, 3);
    }

    #[tokio::test]
    async fn test_search_with_unknown_city_is_bad_request() {
        let app: Router = create_test_app();

        let response = app
            .oneshot(create_test_search_request(r#"{"areas":["大阪市"]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        let body: ErrorResponse = read_json(response).await;
        assert!(body.error);
        assert_eq!(
            body.message,
            "Invalid input for field 'areas': Unknown city: 大阪市"
        );
    }

    #[tokio::test]
    async fn test_get_gym() {
        let app: Router = create_test_app();

        let response = app
            .oneshot(create_test_get_request("/gyms/2"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: GymDetail = read_json(response).await;
        assert_eq!(body.name, "新宿コズミックセンター");
        assert_eq!(body.courts.get("badminton"), Some(&8));
    }

    #[tokio::test]
    async fn test_get_unknown_gym_is_not_found() {
        let app: Router = create_test_app();

        let response = app
            .oneshot(create_test_get_request("/gyms/999"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_reference() {
        let app: Router = create_test_app();

        let response = app
            .oneshot(create_test_get_request("/reference"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: ReferenceData = read_json(response).await;
        assert_eq!(body.stations.len(), 16);
    }

    #[tokio::test]
    async fn test_get_calendar() {
        let app: Router = create_test_app();

        let response = app
            .oneshot(create_test_get_request("/calendar?today=2024-06-15"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: CalendarResponse = read_json(response).await;
        assert_eq!(body.months[0].title, "2024年 6月");
        assert_eq!(body.months[0].days.first().map(|d| d.day), Some(9));
        assert_eq!(body.months[1].title, "2024年 7月");
    }

    #[tokio::test]
    async fn test_get_calendar_with_bad_date_is_bad_request() {
        let app: Router = create_test_app();

        let response = app
            .oneshot(create_test_get_request("/calendar?today=yesterday"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }
}
