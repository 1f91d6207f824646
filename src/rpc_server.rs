//! Saved.io RPC Server: JSON-RPC over stdin/stdout for a UI shell.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"bookmark.add", "params":{"url":"...","list":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use savedio::app::App;
use savedio::logging;
use savedio::platform;
use savedio::rpc_handler::handle_method;

use serde_json::{json, Value};
use tracing::{error, info};

/// Database location: `$SAVEDIO_DATA_DIR/savedio.db`, else the platform data dir.
fn db_path() -> PathBuf {
    let dir = std::env::var("SAVEDIO_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| platform::get_data_dir());
    dir.join("savedio.db")
}

fn respond(out: &mut impl Write, response: &Value) -> io::Result<()> {
    writeln!(out, "{}", response)?;
    out.flush()
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = db_path();
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let app = Mutex::new(App::new(&db_path.to_string_lossy(), None)?);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    respond(&mut out, &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}))?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                respond(&mut out, &json!({"id": null, "error": format!("parse error: {}", e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(&app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        respond(&mut out, &response)?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = logging::init_logging() {
        eprintln!("savedio: failed to initialize logging: {}", e);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "savedio-rpc failed");
            eprintln!("savedio-rpc error: {}", e);
            ExitCode::FAILURE
        }
    }
}
