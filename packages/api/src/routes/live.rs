//! The live-match wire contract used by the board page: turn queries, move
//! validation, resignation, the counter-based poll and the new-game reset.
//! Paths and field names are the Spanish ones the page already speaks.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::state::AppState;
use shared::models::live::requests::{MoveRequest, ResignRequest};
use shared::models::live::responses::{
    LastMoveResponse, MatchSnapshotResponse, MoveResponse, NewMatchResponse, ResignResponse,
    SyncResponse, TurnResponse,
};
use shared::services::match_service::{MoveRejection, MoveVerdict};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/turno-actual", get(turno_actual))
        .route("/estado-juego", get(estado_juego))
        .route("/rendirse", post(rendirse))
        .route("/validar-movimiento", post(validar_movimiento))
        .route("/ultimo-movimiento", get(ultimo_movimiento))
        .route(
            "/ultimo-movimiento/{contador_cliente}",
            get(ultimo_movimiento_desde),
        )
        .route("/nueva-partida", post(nueva_partida))
}

async fn turno_actual(State(state): State<AppState>) -> Json<TurnResponse> {
    Json(TurnResponse {
        turn: state.match_service.current_turn(),
    })
}

async fn estado_juego(State(state): State<AppState>) -> Json<MatchSnapshotResponse> {
    let snapshot = state.match_service.snapshot();
    Json(MatchSnapshotResponse {
        current_turn: snapshot.turn,
        board: snapshot.board,
        status: snapshot.status,
    })
}

async fn rendirse(
    State(state): State<AppState>,
    Json(payload): Json<ResignRequest>,
) -> (StatusCode, Json<ResignResponse>) {
    let Some(player) = payload.player.as_deref().filter(|p| !p.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ResignResponse {
                success: false,
                message: "El campo jugador es requerido".to_string(),
                winner: None,
                status: None,
            }),
        );
    };

    let outcome = state.match_service.resign(player);
    (
        StatusCode::OK,
        Json(ResignResponse {
            success: outcome.accepted,
            message: outcome.message,
            winner: outcome.winner.map(str::to_string),
            status: outcome.status,
        }),
    )
}

async fn validar_movimiento(
    State(state): State<AppState>,
    Json(payload): Json<MoveRequest>,
) -> (StatusCode, Json<MoveResponse>) {
    let outcome = state.match_service.validate_move(
        payload.piece.as_deref(),
        payload.color.as_deref(),
        payload.from.as_deref(),
        payload.to.as_deref(),
    );

    let (status, valid, message, movement) = match outcome.verdict {
        MoveVerdict::Accepted(record) => (
            StatusCode::OK,
            true,
            "Movimiento válido".to_string(),
            Some(record),
        ),
        MoveVerdict::Rejected(rejection) => {
            let status = if rejection == MoveRejection::IncompleteData {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::OK
            };
            (status, false, rejection.message(), None)
        }
    };

    (
        status,
        Json(MoveResponse {
            valid,
            message,
            new_turn: outcome.turn,
            movement,
            move_counter: outcome.move_counter,
        }),
    )
}

async fn ultimo_movimiento_desde(
    State(state): State<AppState>,
    Path(contador_cliente): Path<String>,
) -> Json<SyncResponse> {
    let client_counter = contador_cliente.parse().unwrap_or(0);
    let sync = state.match_service.sync_since(client_counter);
    Json(SyncResponse {
        has_new_move: sync.new_move.is_some(),
        movement: sync.new_move,
        current_turn: sync.turn,
        move_counter: sync.move_counter,
        status: sync.status,
    })
}

async fn ultimo_movimiento(State(state): State<AppState>) -> Json<LastMoveResponse> {
    let last = state.match_service.last_move();
    Json(LastMoveResponse {
        has_new_move: false,
        current_turn: last.turn,
        move_counter: last.move_counter,
        status: last.status,
        last_move: last.last_move,
    })
}

async fn nueva_partida(State(state): State<AppState>) -> Json<NewMatchResponse> {
    let summary = state.match_service.reset();
    Json(NewMatchResponse {
        success: true,
        message: "Nueva partida iniciada".to_string(),
        current_turn: summary.turn,
        status: summary.status,
        move_counter: summary.move_counter,
    })
}
