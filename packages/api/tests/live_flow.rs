//! Router-level tests of the live-match wire contract: move validation,
//! resignation, the counter-based poll and the new-game reset, all over the
//! exact JSON the board page speaks.

mod common;

use axum::http::StatusCode;
use common::{get, post_json, test_app};
use serde_json::json;

fn move_body(piece: &str, color: &str, from: &str, to: &str) -> serde_json::Value {
    json!({ "pieza": piece, "color": color, "inicial": from, "final": to })
}

#[tokio::test]
async fn test_turn_starts_with_white() {
    let app = test_app();
    let (status, body) = get(&app, "/turno-actual").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["turno"], "blanca");
}

#[tokio::test]
async fn test_match_snapshot_serves_initial_board() {
    let app = test_app();
    let (status, body) = get(&app, "/estado-juego").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["turnoActual"], "blanca");
    assert_eq!(body["estadoJuego"], "en-curso");

    let board = body["tablero"].as_array().expect("tablero is an array");
    assert_eq!(board.len(), 8);
    assert_eq!(board[0].as_array().unwrap().len(), 8);

    // Row 6 is the second rank: white pawns, e2 at column 4.
    let e2 = &board[6][4];
    assert_eq!(e2["pos"], "e2");
    assert_eq!(e2["pieza"]["tipo"], "peon");
    assert_eq!(e2["pieza"]["color"], "blanca");

    // Empty square in the middle.
    assert_eq!(board[4][4]["pieza"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_valid_move_flips_turn_and_returns_record() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/validar-movimiento",
        move_body("peon", "blanca", "e2", "e4"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valido"], true);
    assert_eq!(body["mensaje"], "Movimiento válido");
    assert_eq!(body["nuevoTurno"], "negra");
    assert_eq!(body["contadorMovimientos"], 1);
    assert_eq!(body["movimiento"]["id"], 1);
    assert_eq!(body["movimiento"]["pieza"], "peon");
    assert_eq!(body["movimiento"]["inicial"], "e2");
    assert_eq!(body["movimiento"]["final"], "e4");
    assert!(body["movimiento"]["timestamp"].is_i64());
}

#[tokio::test]
async fn test_geometrically_invalid_move_is_rejected_with_200() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/validar-movimiento",
        move_body("peon", "blanca", "e2", "d5"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valido"], false);
    assert_eq!(body["mensaje"], "Movimiento inválido");
    assert_eq!(body["nuevoTurno"], "blanca");
    assert_eq!(body["contadorMovimientos"], 0);
    assert_eq!(body["movimiento"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_incomplete_move_is_rejected_with_400() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/validar-movimiento",
        json!({ "pieza": "peon", "color": "blanca" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["valido"], false);
    assert_eq!(body["mensaje"], "Datos incompletos");
}

#[tokio::test]
async fn test_wrong_turn_is_rejected() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/validar-movimiento",
        move_body("peon", "negra", "e7", "e5"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valido"], false);
    assert_eq!(body["mensaje"], "No es tu turno. Turno actual: blanca");
    assert_eq!(body["nuevoTurno"], "blanca");
}

#[tokio::test]
async fn test_unknown_piece_type_is_rejected() {
    let app = test_app();
    let (_, body) = post_json(
        &app,
        "/validar-movimiento",
        move_body("dama", "blanca", "d1", "d4"),
    )
    .await;
    assert_eq!(body["valido"], false);
    assert_eq!(body["mensaje"], "Tipo de pieza no válido");
}

#[tokio::test]
async fn test_poll_returns_single_latest_move() {
    let app = test_app();
    for (piece, color, from, to) in [
        ("peon", "blanca", "e2", "e4"),
        ("peon", "negra", "e7", "e5"),
    ] {
        let (_, body) = post_json(
            &app,
            "/validar-movimiento",
            move_body(piece, color, from, to),
        )
        .await;
        assert_eq!(body["valido"], true);
    }

    // A client still at counter 0 only receives the latest move; the
    // intermediate one is skipped and the counter jumps to the server's.
    let (status, body) = get(&app, "/ultimo-movimiento/0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hayNuevoMovimiento"], true);
    assert_eq!(body["contadorMovimientos"], 2);
    assert_eq!(body["movimiento"]["id"], 2);
    assert_eq!(body["movimiento"]["inicial"], "e7");
    assert_eq!(body["turnoActual"], "blanca");
    assert_eq!(body["estadoJuego"], "en-curso");
}

#[tokio::test]
async fn test_poll_when_caught_up_has_no_move() {
    let app = test_app();
    let (_, body) = get(&app, "/ultimo-movimiento/0").await;
    assert_eq!(body["hayNuevoMovimiento"], false);
    assert!(body.get("movimiento").is_none());
    assert_eq!(body["contadorMovimientos"], 0);
}

#[tokio::test]
async fn test_poll_with_garbage_counter_defaults_to_zero() {
    let app = test_app();
    post_json(
        &app,
        "/validar-movimiento",
        move_body("peon", "blanca", "e2", "e4"),
    )
    .await;

    let (_, body) = get(&app, "/ultimo-movimiento/abc").await;
    assert_eq!(body["hayNuevoMovimiento"], true);
    assert_eq!(body["movimiento"]["id"], 1);
}

#[tokio::test]
async fn test_parameterless_last_move_endpoint() {
    let app = test_app();
    let (_, body) = get(&app, "/ultimo-movimiento").await;
    assert_eq!(body["hayNuevoMovimiento"], false);
    assert_eq!(body["ultimoMovimiento"], serde_json::Value::Null);

    post_json(
        &app,
        "/validar-movimiento",
        move_body("peon", "blanca", "e2", "e4"),
    )
    .await;

    let (_, body) = get(&app, "/ultimo-movimiento").await;
    assert_eq!(body["hayNuevoMovimiento"], false);
    assert_eq!(body["ultimoMovimiento"]["id"], 1);
    assert_eq!(body["contadorMovimientos"], 1);
}

#[tokio::test]
async fn test_resign_requires_player_field() {
    let app = test_app();
    let (status, body) = post_json(&app, "/rendirse", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["mensaje"], "El campo jugador es requerido");
}

#[tokio::test]
async fn test_resign_flow_ends_the_match() {
    let app = test_app();

    // Black cannot resign on white's turn.
    let (status, body) = post_json(&app, "/rendirse", json!({ "jugador": "negra" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["mensaje"], "Solo puedes rendirte en tu turno");

    // White resigns; black wins.
    let (_, body) = post_json(&app, "/rendirse", json!({ "jugador": "blanca" })).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["ganador"], "negras");
    assert_eq!(body["estadoJuego"], "negras-ganan");
    assert_eq!(body["mensaje"], "Blancas se han rendido");

    // No moves are accepted once the match is over.
    let (status, body) = post_json(
        &app,
        "/validar-movimiento",
        move_body("peon", "blanca", "e2", "e4"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valido"], false);
    assert_eq!(body["mensaje"], "La partida ya ha terminado");

    // A second resignation is refused too.
    let (_, body) = post_json(&app, "/rendirse", json!({ "jugador": "blanca" })).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["mensaje"], "La partida ya ha terminado");

    // The poll reports the finished state to the other client.
    let (_, body) = get(&app, "/ultimo-movimiento/0").await;
    assert_eq!(body["estadoJuego"], "negras-ganan");
}

#[tokio::test]
async fn test_new_match_resets_everything() {
    let app = test_app();
    post_json(
        &app,
        "/validar-movimiento",
        move_body("peon", "blanca", "e2", "e4"),
    )
    .await;
    post_json(&app, "/rendirse", json!({ "jugador": "negra" })).await;

    let (status, body) = post_json(&app, "/nueva-partida", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["mensaje"], "Nueva partida iniciada");
    assert_eq!(body["turnoActual"], "blanca");
    assert_eq!(body["estadoJuego"], "en-curso");
    assert_eq!(body["contadorMovimientos"], 0);

    let (_, body) = get(&app, "/turno-actual").await;
    assert_eq!(body["turno"], "blanca");

    let (_, body) = get(&app, "/ultimo-movimiento/0").await;
    assert_eq!(body["hayNuevoMovimiento"], false);
    assert_eq!(body["contadorMovimientos"], 0);
}
