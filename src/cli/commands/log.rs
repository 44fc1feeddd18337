use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::documents::DocStore;
use crate::errors::AppResult;

/// Print the internal audit log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let store = DocStore::open(&cfg.database)?;
        LogLogic::print_log(&store, cfg)?;
    }

    Ok(())
}
