//! User API handlers.
//!
//! ```text
//! GET  /users
//! POST /users {"email":"a@b.co","login":"bob1","name":null,"birthday":"1990-01-01"}
//! PUT  /users {"id":1,...}
//! ```

use actix_web::{get, post, put, web};
use tracing::info;

use crate::domain::{Error, User, UserPayload};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// List every stored user.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All stored users, order unspecified", body = [User])
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    Ok(web::Json(state.users.list().await))
}

/// Add a new user. A missing or blank display name is derived from the
/// login before the record is stored.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "Stored user with its identifier", body = User),
        (status = 400, description = "Validation failure or identifier conflict", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<User>> {
    let draft = payload.into_inner().validate(state.today())?;
    let user = state.users.create(draft).await?;
    info!(id = user.id(), login = user.login(), "user created");
    Ok(web::Json(user))
}

/// Fully replace an existing user.
#[utoipa::path(
    put,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "Stored user after replacement", body = User),
        (status = 400, description = "Validation failure", body = Error),
        (status = 500, description = "Identifier not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users")]
pub async fn update_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<User>> {
    let user = payload.into_inner().validate(state.today())?.into_update()?;
    let user = state.users.replace(user).await?;
    info!(id = user.id(), login = user.login(), "user updated");
    Ok(web::Json(user))
}
