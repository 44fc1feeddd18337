use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::prune::PruneLogic;
use crate::db::documents::DocStore;
use crate::db::migrate::run_pending_migrations;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
        prune,
    } = cmd
    {
        // Single shared instance
        let mut store: Option<DocStore> = None;

        fn get_store<'a>(
            store: &'a mut Option<DocStore>,
            db_path: &str,
        ) -> AppResult<&'a mut DocStore> {
            if store.is_none() {
                *store = Some(DocStore::open(db_path)?);
            }
            Ok(store.as_mut().unwrap())
        }

        //
        // 1) MIGRATE
        //
        if *migrate {
            let store = get_store(&mut store, &cfg.database)?;
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(&store.pool.conn)?;
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        //
        // 2) INFO
        //
        if *info {
            let store = get_store(&mut store, &cfg.database)?;
            stats::print_db_info(store, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            let store = get_store(&mut store, &cfg.database)?;

            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = store
                .pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            let store = get_store(&mut store, &cfg.database)?;
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);

            store.pool.conn.execute_batch("VACUUM;")?;

            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }

        //
        // 5) PRUNE
        //
        if *prune {
            let store = get_store(&mut store, &cfg.database)?;
            println!("{}▶ Pruning out-of-window records…{}", CYAN, RESET);

            let dropped = PruneLogic::prune_all(store, &today)?;

            println!(
                "{}✔ Prune completed:{} {} record(s) dropped.\n",
                GREEN, RESET, dropped
            );
        }
    }

    Ok(())
}
