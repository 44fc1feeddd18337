use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::documents::DocStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Export presence data to CSV or JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        member,
        force,
    } = cmd
    {
        let mut store = DocStore::open(&cfg.database)?;

        ExportLogic::export(&mut store, format.clone(), file, range, member, *force)?;
    }

    Ok(())
}
