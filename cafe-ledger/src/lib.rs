//! Café Ledger - table, order and billing state for a small café
//!
//! # Overview
//!
//! - **Table registry**: occupancy, capacity, merge/split of tables
//! - **Order book**: pending orders waiting for the kitchen
//! - **Billing ledger**: running totals and the itemized history per table
//!
//! Every change goes through a `LedgerCommand`, is validated by an action,
//! and lands as `LedgerEvent`s applied to the session state.
//!
//! # Module layout
//!
//! ```text
//! cafe-ledger/src/
//! ├── core/          # configuration
//! ├── ledger/        # session, actions, appliers, verifier
//! ├── utils/         # logging
//! └── console.rs     # JSON-lines front end
//! ```

pub mod console;
pub mod core;
pub mod ledger;
pub mod utils;

// Re-export public types
pub use console::{ConsoleSummary, run_console};
pub use core::{Config, ConfigFallback};
pub use ledger::{CafeLedger, InvariantViolation, LedgerError, LedgerResult, SharedLedger};
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and start logging from it
///
/// Config fallbacks are logged once the subscriber is installed.
pub fn setup_environment() -> Config {
    let dotenv_error = dotenv::dotenv().err().filter(|e| !e.not_found());

    let config = Config::from_env();
    init_logger(&config);

    if let Some(e) = dotenv_error {
        tracing::warn!(error = %e, "Failed to load .env");
    }
    config.warn_fallbacks();
    config
}

pub fn print_banner() {
    eprintln!(
        r#"
   ______        ____     __             __
  / ____/___ _  / __/__  / /   ___  ____/ /___ ____  _____
 / /   / __ `/ / /_/ _ \/ /   / _ \/ __  / __ `/ _ \/ ___/
/ /___/ /_/ / / __/  __/ /___/  __/ /_/ / /_/ /  __/ /
\____/\__,_/ /_/  \___/_____/\___/\__,_/\__, /\___/_/
                                       /____/
    "#
    );
}
