//! Film API handlers.
//!
//! ```text
//! GET  /films
//! POST /films {"name":"...","description":"...","releaseDate":"1896-01-06","duration":50}
//! PUT  /films {"id":1,...}
//! ```

use actix_web::{get, post, put, web};
use tracing::info;

use crate::domain::{Error, Film, FilmPayload};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// List every stored film.
#[utoipa::path(
    get,
    path = "/films",
    responses(
        (status = 200, description = "All stored films, order unspecified", body = [Film])
    ),
    tags = ["films"],
    operation_id = "listFilms"
)]
#[get("/films")]
pub async fn list_films(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Film>>> {
    Ok(web::Json(state.films.list().await))
}

/// Add a new film. The identifier is assigned by the service unless the
/// payload carries a free positive one.
#[utoipa::path(
    post,
    path = "/films",
    request_body = FilmPayload,
    responses(
        (status = 200, description = "Stored film with its identifier", body = Film),
        (status = 400, description = "Validation failure or identifier conflict", body = Error)
    ),
    tags = ["films"],
    operation_id = "createFilm"
)]
#[post("/films")]
pub async fn create_film(
    state: web::Data<HttpState>,
    payload: web::Json<FilmPayload>,
) -> ApiResult<web::Json<Film>> {
    let draft = payload.into_inner().validate()?;
    let film = state.films.create(draft).await?;
    info!(id = film.id(), name = film.name(), "film created");
    Ok(web::Json(film))
}

/// Fully replace an existing film.
#[utoipa::path(
    put,
    path = "/films",
    request_body = FilmPayload,
    responses(
        (status = 200, description = "Stored film after replacement", body = Film),
        (status = 400, description = "Validation failure", body = Error),
        (status = 500, description = "Identifier not found", body = Error)
    ),
    tags = ["films"],
    operation_id = "updateFilm"
)]
#[put("/films")]
pub async fn update_film(
    state: web::Data<HttpState>,
    payload: web::Json<FilmPayload>,
) -> ApiResult<web::Json<Film>> {
    let film = payload.into_inner().validate()?.into_update()?;
    let film = state.films.replace(film).await?;
    info!(id = film.id(), name = film.name(), "film updated");
    Ok(web::Json(film))
}
