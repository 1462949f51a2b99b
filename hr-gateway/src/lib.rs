//! HR Gateway - static front end server and backend reverse proxy
//!
//! # Overview
//!
//! Serves the built portal from `STATIC_DIR` and forwards API traffic to
//! the HR backend:
//!
//! - **Proxy** (`proxy`): `/api/*`, `/auth/*` and `/health` replayed
//!   against `BACKEND_URL`, with the `/api/login` → `/auth/login` rewrite
//! - **Static assets**: any other path, falling back to `index.html` so
//!   client-side routes survive a reload
//! - **Logging** (`middleware`, `utils`): per-request tracing with request
//!   ids, optional daily rolling log files
//!
//! # Module layout
//!
//! ```text
//! hr-gateway/src/
//! ├── core/          # config, errors, server
//! ├── proxy/         # upstream forwarding
//! ├── middleware/    # request logging
//! └── utils/         # logger
//! ```

pub mod core;
pub mod middleware;
pub mod proxy;
pub mod utils;

pub use core::{Config, GatewayError, Result, Server, build_router};
pub use proxy::{ProxyState, upstream_path};
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and install the logger
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
    __  ______     ______      __
   / / / / __ \   / ____/___ _/ /____ _      ______ ___  __
  / /_/ / /_/ /  / / __/ __ `/ __/ _ \ | /| / / __ `/ / / /
 / __  / _, _/  / /_/ / /_/ / /_/  __/ |/ |/ / /_/ / /_/ /
/_/ /_/_/ |_|   \____/\__,_/\__/\___/|__/|__/\__,_/\__, /
                                                  /____/
"#
    );
}
