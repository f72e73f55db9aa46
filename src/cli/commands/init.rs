use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{CsvStore, RecordStore, oplog};
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (if missing, skipped in test mode)
///  - an empty data file holding only the header
///
/// `cfg` already carries the existing config file and any `--data`
/// override; an existing config file is left as it is.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let store = CsvStore::new(cfg.data_path());

    println!("⚙️  Initializing moodtrack…");
    if cfg.init_all(cli.test)? {
        success(format!("Config file created at {}", Config::config_file().display()));
    } else if Config::config_file().exists() {
        info("Config file already exists, left untouched.");
    }
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Data file   : {}", store.path().display());

    if store.path().exists() {
        info("Data file already exists, left untouched.");
    } else {
        store.save(&[])?;
        success(format!("Data file created at {}", store.path().display()));
    }

    if let Err(e) = oplog::ttlog(
        &cfg.log_path(),
        "init",
        &store.path().to_string_lossy(),
        "Journal initialized",
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    println!("🎉 moodtrack initialization completed!");
    Ok(())
}
