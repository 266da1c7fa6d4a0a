//! HTTP routes for the daily boss battle.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use yokai_domain::{experience_to_next_level, Boss, GameDay, Player};
use yokai_shared::{
    BattleResponse, BossView, CharacterResponse, CreateCharacterRequest, ErrorBody, ErrorCode,
    HealthResponse, LeaderboardEntryView, LeaderboardQuery, LeaderboardResponse, PlayerView,
    ResetResponse, SubmitBattleRequest, TodayResponse,
};

use super::identity::Identity;
use crate::app::App;
use crate::infrastructure::ports::RepoError;
use crate::use_cases::{BattleError, BossError, CharacterError};

/// Player-facing routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/character", post(create_character))
        .route("/api/battle", post(submit_battle))
        .route("/api/today", get(get_today))
        .route("/api/leaderboard", get(get_leaderboard))
}

/// Test-only routes. Mount only when `ENABLE_ADMIN_ROUTES` is set.
pub fn admin_routes() -> Router<Arc<App>> {
    Router::new().route("/api/admin/reset", post(reset_player_data))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn create_character(
    State(app): State<Arc<App>>,
    identity: Identity,
    body: Result<Json<CreateCharacterRequest>, JsonRejection>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let player = app
        .use_cases
        .create_character
        .execute(&identity.user_id, &req.name, &req.class)
        .await?;

    let day = app.use_cases.bosses.today();
    Ok(Json(CharacterResponse {
        player: player_view(&player, day),
    }))
}

async fn submit_battle(
    State(app): State<Arc<App>>,
    identity: Identity,
    body: Result<Json<SubmitBattleRequest>, JsonRejection>,
) -> Result<Json<BattleResponse>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let outcome = app
        .use_cases
        .submit_battle
        .execute(&identity.user_id, &identity.display_name, &req.actions)
        .await?;

    Ok(Json(BattleResponse {
        player: player_view(&outcome.player, outcome.boss.day()),
        boss: boss_view(&outcome.boss),
        result: outcome.result,
    }))
}

async fn get_today(
    State(app): State<Arc<App>>,
    identity: Identity,
) -> Result<Json<TodayResponse>, ApiError> {
    let snapshot = app.use_cases.get_today.execute(&identity.user_id).await?;

    Ok(Json(TodayResponse {
        player: snapshot
            .player
            .as_ref()
            .map(|p| player_view(p, snapshot.day)),
        boss: boss_view(&snapshot.boss),
        username: identity.display_name,
        remaining_attempts: snapshot.remaining_attempts,
    }))
}

async fn get_leaderboard(
    State(app): State<Arc<App>>,
    query: Result<Query<LeaderboardQuery>, QueryRejection>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let board = app.use_cases.get_leaderboard.execute(query.limit).await?;

    Ok(Json(LeaderboardResponse {
        day: board.day.to_string(),
        leaderboard: board
            .entries
            .into_iter()
            .map(|e| LeaderboardEntryView {
                user_id: e.user_id.as_str().to_string(),
                username: e.name,
                damage: e.damage,
                rank: e.rank,
            })
            .collect(),
    }))
}

async fn reset_player_data(
    State(app): State<Arc<App>>,
    identity: Identity,
) -> Result<Json<ResetResponse>, ApiError> {
    app.use_cases
        .reset_player_data
        .execute(&identity.user_id)
        .await?;

    Ok(Json(ResetResponse {
        success: true,
        message: "Data cleared".to_string(),
    }))
}

// =============================================================================
// Views
// =============================================================================

fn player_view(player: &Player, day: GameDay) -> PlayerView {
    PlayerView {
        user_id: player.user_id().as_str().to_string(),
        name: player.name().as_str().to_string(),
        class: player.class(),
        level: player.level(),
        xp: player.experience(),
        xp_to_next_level: experience_to_next_level(player.experience()),
        max_hp: player.max_hp(),
        attack: player.attack(),
        defense: player.defense(),
        weapon: player.weapon().to_string(),
        armor: player.armor().to_string(),
        attempts_today: player.attempts_used_on(day),
    }
}

fn boss_view(boss: &Boss) -> BossView {
    let content = boss.content();
    BossView {
        kind: content.content_id().to_string(),
        day: boss.day().to_string(),
        name: content.name().to_string(),
        name_jp: content.name_jp().to_string(),
        description: content.description().to_string(),
        backstory: content.backstory().map(str::to_string),
        image_url: content.image_url().map(str::to_string),
        current_hp: boss.current_hp(),
        max_hp: boss.max_hp(),
        defense: boss.defense(),
        attack_pattern: boss.attack_pattern().to_vec(),
        total_participants: boss.participant_count(),
        defeated_at: boss.defeated_at().map(|t| t.to_rfc3339()),
    }
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    AttemptsExhausted(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::new(ErrorCode::Unauthorized, "Not authenticated"),
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(ErrorCode::BadRequest, msg),
            ),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody::new(ErrorCode::NotFound, msg),
            ),
            ApiError::Conflict(msg) => (
                StatusCode::CONFLICT,
                ErrorBody::new(ErrorCode::Conflict, msg),
            ),
            ApiError::AttemptsExhausted(msg) => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorBody::new(ErrorCode::AttemptsExhausted, msg),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(ErrorCode::InternalError, "Internal error"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<BossError> for ApiError {
    fn from(e: BossError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<CharacterError> for ApiError {
    fn from(e: CharacterError) -> Self {
        match e {
            CharacterError::AlreadyExists => ApiError::Conflict(e.to_string()),
            CharacterError::Validation(inner) => ApiError::BadRequest(inner.to_string()),
            CharacterError::Repo(inner) => inner.into(),
        }
    }
}

impl From<BattleError> for ApiError {
    fn from(e: BattleError) -> Self {
        match e {
            BattleError::PlayerNotFound => ApiError::NotFound(e.to_string()),
            BattleError::AttemptsExhausted { .. } => ApiError::AttemptsExhausted(e.to_string()),
            BattleError::InvalidInput(inner) => ApiError::BadRequest(inner.to_string()),
            BattleError::Boss(_) | BattleError::Repo(_) | BattleError::FanOut { .. } => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}
