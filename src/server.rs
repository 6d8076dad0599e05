//! Static host for the trunk build output. Serves `dist/` with an SPA
//! fallback to `index.html` so section deep links survive a reload, plus a
//! health endpoint for deploy probes.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::{
    cmp::Ordering,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PORT_BOUNDS: (u16, u16) = (1, 65_535);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

#[derive(Clone)]
struct ServerRuntimeConfig {
    port: u16,
    static_dir: PathBuf,
    log_level: LogLevel,
}

impl ServerRuntimeConfig {
    fn from_env() -> Self {
        let port = parse_u16_with_bounds(std::env::var("PORT").ok(), DEFAULT_PORT, PORT_BOUNDS);
        let static_dir = parse_non_empty(std::env::var("STATIC_DIR").ok())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let log_level = parse_non_empty(std::env::var("LOG_LEVEL").ok())
            .and_then(|raw| LogLevel::parse(&raw))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            static_dir,
            log_level,
        }
    }
}

fn parse_non_empty(raw: Option<String>) -> Option<String> {
    let value = raw?.trim().to_string();

    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn parse_u16_with_bounds(raw: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    let (min, max) = bounds;

    match raw.and_then(|value| value.trim().parse::<u16>().ok()) {
        Some(value) => value.clamp(min, max),
        None => default,
    }
}

fn log_event(config: &ServerRuntimeConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[derive(Serialize)]
struct HealthPayload {
    ok: bool,
    ts: u64,
}

async fn get_health() -> Json<HealthPayload> {
    Json(HealthPayload {
        ok: true,
        ts: now_unix_seconds(),
    })
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerRuntimeConfig::from_env();

    log_event(
        &config,
        LogLevel::Debug,
        "config_resolved",
        serde_json::json!({
            "port": config.port,
            "static_dir": config.static_dir.display().to_string(),
            "log_level": config.log_level.as_str(),
        }),
    );

    let index_path = config.static_dir.join("index.html");
    let static_service =
        ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(get_health))
        .fallback_service(static_service);

    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    log_event(
        &config,
        LogLevel::Info,
        "server_started",
        serde_json::json!({
            "bind_address": bind_address,
            "static_dir": config.static_dir.display().to_string(),
        }),
    );

    axum::serve(listener, app).await?;
    Ok(())
}
