//! Animal HTTP Routes
//!
//! - `GET  /animals`     list, filtered by query parameters
//! - `GET  /animals/:id` single record by id
//! - `POST /animals`     validate and append a record

use std::sync::Arc;

use axum::{
    extract::{FromRequest, Path, Query, Request, State},
    http::{header, HeaderMap},
    routing::get,
    Form, Json, Router,
};
use serde_json::Value;

use crate::observability::{log_event_with_fields, Event};
use crate::query::{filter_by_query, find_by_id, QueryParams};
use crate::schema::{Schema, SchemaValidator};
use crate::store::{Animal, AnimalStore};

use super::errors::{ApiError, ApiResult};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// ==================
// Shared State
// ==================

/// State shared across animal handlers
pub struct AnimalState {
    pub store: Arc<AnimalStore>,
    pub schema: Schema,
}

impl AnimalState {
    pub fn new(store: Arc<AnimalStore>) -> Self {
        Self {
            store,
            schema: Schema::animal(),
        }
    }
}

// ==================
// Routes
// ==================

/// Create animal routes
pub fn animal_routes(state: Arc<AnimalState>) -> Router {
    Router::new()
        .route("/animals", get(list_animals).post(create_animal))
        .route("/animals/:id", get(get_animal))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// List animals matching every supplied filter. Always 200.
async fn list_animals(
    State(state): State<Arc<AnimalState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Animal>>> {
    log::debug!("query: {:?}", pairs);
    let params = QueryParams::from_pairs(pairs);

    let results = state.store.read(|animals| filter_by_query(&params, animals))?;

    log_event_with_fields(
        Event::QueryExecuted,
        &[("results", results.len().to_string().as_str())],
    );
    Ok(Json(results))
}

/// Fetch one animal; 404 with an empty body if absent.
async fn get_animal(
    State(state): State<Arc<AnimalState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Animal>> {
    let found = state
        .store
        .read(|animals| find_by_id(&id, animals).cloned())?;

    match found {
        Some(animal) => Ok(Json(animal)),
        None => {
            log_event_with_fields(Event::AnimalNotFound, &[("id", id.as_str())]);
            Err(ApiError::NotFound)
        }
    }
}

/// Validate the body and append it; responds with the stored record.
async fn create_animal(
    State(state): State<Arc<AnimalState>>,
    request: Request,
) -> ApiResult<Json<Animal>> {
    let body = read_payload(request).await?;
    log::debug!("create payload: {}", body);

    if let Err(reason) = SchemaValidator::new(&state.schema).validate(&body) {
        log_event_with_fields(
            Event::AnimalRejected,
            &[("reason", reason.to_string().as_str())],
        );
        return Err(ApiError::InvalidAnimal(reason));
    }

    // The append rewrites the data file while holding the store lock.
    let store = Arc::clone(&state.store);
    let animal = tokio::task::spawn_blocking(move || store.append(body)).await??;
    Ok(Json(animal))
}

/// Decode a create body as a JSON value.
///
/// Form bodies use the same key rules as query strings, so
/// `personalityTraits[]=Loyal` yields an array.
async fn read_payload(request: Request) -> ApiResult<Value> {
    if is_form(request.headers()) {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(request, &()).await?;
        Ok(QueryParams::from_pairs(pairs).to_json())
    } else {
        let Json(body) = Json::<Value>::from_request(request, &()).await?;
        Ok(body)
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map_or(false, |ct| ct.starts_with(FORM_CONTENT_TYPE))
}
