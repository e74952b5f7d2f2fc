//! Calgroups RPC Server — JSON-RPC over stdin/stdout for host integration.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"getCalendars", "params":{"forceRefresh":false}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! This binary runs the engine against a simulated page, which is useful for
//! protocol development and end-to-end testing. Set `CALGROUPS_PAGE_FIXTURE`
//! to a JSON fixture file to script the page layout; otherwise a built-in
//! sample pane is used. Production hosts embed the library with their own
//! `PageAdapter`.

use std::sync::Mutex;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use calgroups::app::App;
use calgroups::page::{PageFixture, SimulatedPage};
use calgroups::rpc_handler::handle_method;

use serde_json::{json, Value};

/// Simple rate limiter: max requests per second.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        let elapsed = self.window_start.elapsed();
        if elapsed.as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn load_page() -> SimulatedPage {
    if let Ok(path) = std::env::var("CALGROUPS_PAGE_FIXTURE") {
        let raw = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read page fixture {}: {}", path, e));
        let fixture: PageFixture = serde_json::from_str(&raw)
            .unwrap_or_else(|e| panic!("Failed to parse page fixture {}: {}", path, e));
        SimulatedPage::from_fixture(fixture)
    } else {
        SimulatedPage::sample()
    }
}

fn main() {
    // Absolute path for the DB — prefer CALGROUPS_DATA_DIR, fallback to exe directory
    let db_path = if let Ok(dir) = std::env::var("CALGROUPS_DATA_DIR") {
        std::path::PathBuf::from(dir).join("calgroups.db")
    } else if let Ok(exe) = std::env::current_exe() {
        exe.parent().unwrap_or(std::path::Path::new(".")).join("calgroups.db")
    } else {
        std::path::PathBuf::from("calgroups.db")
    };
    let page = load_page();
    let app = Mutex::new(
        App::new(db_path.to_str().unwrap_or("calgroups.db"), page)
            .expect("Failed to initialize calgroups"),
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("Failed to build runtime");

    // Signal ready
    let ready = json!({"event":"ready","version":env!("CARGO_PKG_VERSION")});
    println!("{}", ready);
    io::stdout().flush().unwrap();

    // Rate limiting — max 200 RPC requests per second
    let mut rate_limiter = RateLimiter::new(200);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() { continue; }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let err = json!({"id":null,"error":format!("parse error: {}",e)});
                println!("{}", err);
                io::stdout().flush().unwrap();
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);

        if !rate_limiter.check() {
            let response = json!({"id": id, "error": "rate limit exceeded"});
            println!("{}", response);
            io::stdout().flush().unwrap();
            continue;
        }

        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        // One request at a time: scans manipulate page scroll state, so
        // requests must not interleave.
        let result = runtime.block_on(handle_method(&app, method, &params));

        let response = match result {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        println!("{}", response);
        io::stdout().flush().unwrap();
    }
}
