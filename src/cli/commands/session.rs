use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::store::CsvStore;
use crate::utils::date;
use std::io;

/// Default command: the interactive journal session on stdin.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let store = CsvStore::new(cfg.data_path());
    let stdin = io::stdin();
    let today = cli.today.unwrap_or_else(date::today);

    Session::new(cfg, stdin.lock(), today).run(store)
}
