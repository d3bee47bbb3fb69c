//! multiserv
//!
//! Starts `n` HTTP servers on `localhost:1024` .. `localhost:1024+n-1`.
//! Server `i` answers every request with `hello from handler <i>`.
//!
//! ```text
//!   argv ──▶ config (count)
//!                 │
//!                 ▼
//!           Bootstrapper ──spawn──▶ listener 0 ─▶ HttpServer (router 0)
//!                 │        ──spawn──▶ listener 1 ─▶ HttpServer (router 1)
//!                 │        ──spawn──▶ ...
//!                 ▼
//!           join all ──▶ exit 1
//! ```
//!
//! Exit codes:
//! - 0: `n <= 0`, nothing started
//! - 1: not exactly one integer argument, or every server has stopped

use std::process::ExitCode;

use multiserv::observability::logging;
use multiserv::{Bootstrapper, Cli, MultiservConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let count = match Cli::try_from_args(std::env::args_os()).and_then(|cli| cli.server_count()) {
        Ok(count) => count,
        Err(e) => {
            eprintln!("multiserv: {e}");
            return ExitCode::FAILURE;
        }
    };

    if count.is_noop() {
        return ExitCode::SUCCESS;
    }

    logging::init();

    let outcomes = Bootstrapper::new(MultiservConfig::default(), count).run().await;
    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    tracing::debug!(stopped = outcomes.len(), failed, "All HTTP servers stopped");

    // Serving forever is the only success; getting here means every server died.
    ExitCode::FAILURE
}
