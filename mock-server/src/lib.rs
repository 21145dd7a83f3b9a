use std::{
    collections::HashMap,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// The one API key this server accepts.
pub const VALID_KEY: &str = "cb-test-key";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardFile {
    pub name: String,
    pub language: String,
    pub value: String,
}

#[derive(Deserialize)]
pub struct SaveBody {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub files: Vec<BoardFile>,
}

#[derive(Serialize)]
pub struct KeyStatus {
    pub valid: bool,
}

#[derive(Serialize)]
pub struct SaveDoc {
    pub message: String,
    pub board: String,
    pub status: u16,
    pub created: bool,
}

#[derive(Clone, Serialize)]
pub struct Fork {
    pub status: bool,
    pub key: String,
    pub name: String,
}

/// The board object served by `/api/fetch`, shaped like the production
/// service's document (camelCase wire names, HTTP status echoed inside).
#[derive(Serialize)]
pub struct FetchDoc {
    pub name: String,
    pub description: String,
    pub files: Vec<BoardFile>,
    pub key: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    pub encrypted: bool,
    #[serde(rename = "autoVanish")]
    pub auto_vanish: bool,
    pub fork: Fork,
    pub author: Option<String>,
    pub bot: bool,
    pub status: u16,
}

#[derive(Serialize)]
pub struct ErrorDoc {
    pub message: String,
    pub status: u16,
}

#[derive(Clone)]
pub struct Board {
    pub name: String,
    pub description: String,
    pub files: Vec<BoardFile>,
    pub created_at: i64,
}

#[derive(Deserialize)]
struct FetchQuery {
    id: String,
}

pub type Db = Arc<RwLock<HashMap<String, Board>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/api/validate", get(validate))
        .route("/api/ping", get(ping))
        .route("/api/teapot", get(teapot))
        .route("/api/fetch", get(fetch_board))
        .route("/api/save", post(save_board))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(VALID_KEY)
}

fn epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

async fn validate(headers: HeaderMap) -> (StatusCode, Json<KeyStatus>) {
    if authorized(&headers) {
        (StatusCode::OK, Json(KeyStatus { valid: true }))
    } else {
        (StatusCode::UNAUTHORIZED, Json(KeyStatus { valid: false }))
    }
}

async fn ping() -> StatusCode {
    StatusCode::OK
}

async fn teapot() -> (StatusCode, &'static str) {
    (StatusCode::IM_A_TEAPOT, "Im a teapot")
}

/// Without a valid key the board is still served, but with file contents
/// scrambled and the `encrypted` flag raised, mimicking the production
/// service's degraded output.
async fn fetch_board(
    State(db): State<Db>,
    Query(params): Query<FetchQuery>,
    headers: HeaderMap,
) -> Result<Json<FetchDoc>, (StatusCode, Json<ErrorDoc>)> {
    let boards = db.read().await;
    let board = boards.get(&params.id).ok_or((
        StatusCode::NOT_FOUND,
        Json(ErrorDoc {
            message: "Board not found !".to_string(),
            status: 404,
        }),
    ))?;

    let plain = authorized(&headers);
    let files = board
        .files
        .iter()
        .map(|f| BoardFile {
            name: f.name.clone(),
            language: f.language.clone(),
            value: if plain {
                f.value.clone()
            } else {
                f.value.chars().rev().collect()
            },
        })
        .collect();

    Ok(Json(FetchDoc {
        name: board.name.clone(),
        description: board.description.clone(),
        files,
        key: params.id.clone(),
        created_at: board.created_at,
        encrypted: !plain,
        auto_vanish: false,
        fork: Fork {
            status: false,
            key: String::new(),
            name: String::new(),
        },
        author: None,
        bot: false,
        status: 200,
    }))
}

async fn save_board(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<SaveBody>,
) -> Result<(StatusCode, Json<SaveDoc>), (StatusCode, Json<ErrorDoc>)> {
    if !authorized(&headers) {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorDoc {
                message: "Invalid API Key !".to_string(),
                status: 401,
            }),
        ));
    }

    let description = input.description.unwrap_or_default();
    let body_ok = !input.name.is_empty()
        && !description.is_empty()
        && !input.files.is_empty()
        && input
            .files
            .iter()
            .all(|f| !f.name.is_empty() && !f.language.is_empty() && !f.value.is_empty());
    if !body_ok {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorDoc {
                message: "Invalid body !".to_string(),
                status: 400,
            }),
        ));
    }

    let key: String = Uuid::new_v4().simple().to_string().chars().take(8).collect();
    db.write().await.insert(
        key.clone(),
        Board {
            name: input.name,
            description,
            files: input.files,
            created_at: epoch_millis(),
        },
    );

    Ok((
        StatusCode::CREATED,
        Json(SaveDoc {
            message: "Board created !".to_string(),
            board: format!("/bin/{key}"),
            status: 201,
            created: true,
        }),
    ))
}
