use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::{error, instrument, warn};

use super::{
    dto::{ExceptionResponse, NameQuery},
    error::ServiceError,
    repo_types::Person,
};
use crate::state::AppState;

pub fn person_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/person",
            get(list_people).post(create_person).put(update_person),
        )
        .route("/person/search", get(find_person_by_name))
        .route("/person/:id", get(get_person).delete(delete_person))
}

#[instrument(skip(state))]
pub async fn list_people(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<Vec<Person>>, Response> {
    let people = state
        .people
        .find_all()
        .await
        .map_err(|e| error_response(e, &uri))?;
    Ok(Json(people))
}

#[instrument(skip(state))]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    uri: Uri,
) -> Result<Json<Person>, Response> {
    let person = state
        .people
        .find_by_id(id)
        .await
        .map_err(|e| error_response(e, &uri))?;
    Ok(Json(person))
}

#[instrument(skip(state))]
pub async fn find_person_by_name(
    State(state): State<AppState>,
    Query(q): Query<NameQuery>,
    uri: Uri,
) -> Result<Json<Person>, Response> {
    let person = state
        .people
        .find_by_name(&q.first_name, &q.last_name)
        .await
        .map_err(|e| error_response(e, &uri))?;
    Ok(Json(person))
}

#[instrument(skip(state, payload))]
pub async fn create_person(
    State(state): State<AppState>,
    uri: Uri,
    Json(payload): Json<Person>,
) -> Result<Response, Response> {
    let person = state
        .people
        .create(payload)
        .await
        .map_err(|e| error_response(e, &uri))?;

    let location = person
        .id
        .map(|id| format!("/person/{}", id))
        .unwrap_or_default();
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(person),
    )
        .into_response())
}

#[instrument(skip(state, payload))]
pub async fn update_person(
    State(state): State<AppState>,
    uri: Uri,
    Json(payload): Json<Person>,
) -> Result<Json<Person>, Response> {
    let person = state
        .people
        .update(payload)
        .await
        .map_err(|e| error_response(e, &uri))?;
    Ok(Json(person))
}

#[instrument(skip(state))]
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    uri: Uri,
) -> Result<StatusCode, Response> {
    state
        .people
        .delete(id)
        .await
        .map_err(|e| error_response(e, &uri))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lookup misses become a bare 404; conflicts and failures carry an `ExceptionResponse`.
fn error_response(err: ServiceError, uri: &Uri) -> Response {
    match err {
        ServiceError::NotFound(_)
        | ServiceError::MissingId
        | ServiceError::NotFoundByName { .. } => {
            warn!(error = %err, "not found");
            StatusCode::NOT_FOUND.into_response()
        }
        ServiceError::Conflict(msg) => {
            warn!(error = %msg, "conflict");
            (
                StatusCode::CONFLICT,
                Json(ExceptionResponse::new(msg, uri.path())),
            )
                .into_response()
        }
        ServiceError::Internal(e) => {
            error!(error = %e, "internal error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ExceptionResponse::new(e.to_string(), uri.path())),
            )
                .into_response()
        }
    }
}
