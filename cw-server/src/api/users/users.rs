//! User REST API handlers
//!
//! Handlers translate HTTP to service calls. Admin-only routes take the
//! `AdminClaims` extractor, which authenticates before it authorizes.

use crate::{
    AdminClaims, ApiResult, AppState, AuthResponse, ListUsersQuery, LoginRequest, SignupRequest,
    UpdateUserRequest, UserDto, UserService,
};

use cw_db::UserRepository;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

fn user_service(state: &AppState) -> UserService {
    UserService::new(
        UserRepository::new(state.pool.clone()),
        state.token_service.clone(),
        state.credential_hasher.clone(),
    )
}

/// POST /users
///
/// Register a new user
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let response = user_service(&state).signup(input).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /login
///
/// Authenticate and issue a token
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response = user_service(&state).login(input).await?;

    Ok(Json(response))
}

/// GET /users/{id}
///
/// Get a single user by ID (admin only)
pub async fn get_user(
    State(state): State<AppState>,
    AdminClaims(_claims): AdminClaims,
    Path(id): Path<String>,
) -> ApiResult<Json<UserDto>> {
    let user_id = Uuid::parse_str(&id)?;

    let user = user_service(&state).get_by_id(user_id).await?;

    Ok(Json(user))
}

/// GET /users?q=
///
/// List users, optionally filtered (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    AdminClaims(claims): AdminClaims,
    Query(query): Query<ListUsersQuery>,
) -> ApiResult<Json<Vec<UserDto>>> {
    let users = user_service(&state)
        .get_all(query.q.as_deref(), &claims)
        .await?;

    Ok(Json(users))
}

/// PUT /users/{id}
///
/// Partially update a user (admin only)
pub async fn update_user(
    State(state): State<AppState>,
    AdminClaims(_claims): AdminClaims,
    Path(id): Path<String>,
    Json(input): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserDto>> {
    let user_id = Uuid::parse_str(&id)?;

    let user = user_service(&state).update(user_id, input).await?;

    Ok(Json(user))
}

/// DELETE /users/{id}
///
/// Delete a user (admin only; admin accounts are protected)
pub async fn delete_user(
    State(state): State<AppState>,
    AdminClaims(_claims): AdminClaims,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let user_id = Uuid::parse_str(&id)?;

    user_service(&state).delete(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
