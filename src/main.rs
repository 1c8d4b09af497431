use ledger_chess::utils::console::{run_stdio_loop, ConsoleConfig};
use ledger_chess::utils::diagnostics;

fn main() -> Result<(), String> {
    let config = ConsoleConfig::from_args(std::env::args().skip(1))?;
    diagnostics::init(config.verbose).map_err(|err| err.to_string())?;
    log::info!("game documents in {}", config.store_dir.display());
    run_stdio_loop(&config)
}
