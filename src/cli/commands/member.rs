use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::documents::DocStore;
use crate::db::log::ttlog;
use crate::db::presence::load_member;
use crate::errors::{AppError, AppResult};
use crate::models::member::{Dependent, MemberDoc};
use crate::ui::messages::{success, warning};
use crate::utils::formatting::truncate_width;
use crate::utils::table::{Column, Table};

/// Add members/dependents or list them.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Member {
        id,
        name,
        dependent_of,
        list,
    } = cmd
    {
        let mut store = DocStore::open(&cfg.database)?;

        //
        // 1. LIST
        //
        if *list {
            let members = store.list_members()?;

            if members.is_empty() {
                warning("No members yet. Create one with: gymattend member <id> --name <name>");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column {
                    header: "Id".to_string(),
                    width: 12,
                },
                Column {
                    header: "Name".to_string(),
                    width: 20,
                },
                Column {
                    header: "Dependents".to_string(),
                    width: 10,
                },
                Column {
                    header: "Records".to_string(),
                    width: 7,
                },
            ]);

            for m in &members {
                table.add_row(vec![
                    m.id.clone(),
                    truncate_width(&m.name, 20),
                    m.dependents.len().to_string(),
                    m.presence_history.len().to_string(),
                ]);
            }

            println!("👥 Members:\n\n{}", table.render());
            return Ok(());
        }

        //
        // 2. ADD (member or dependent)
        //
        let Some(new_id) = id else {
            return Err(AppError::Config(
                "member needs an id to create, or --list".to_string(),
            ));
        };

        let display_name = name.clone().unwrap_or_else(|| new_id.clone());

        match dependent_of {
            //
            // 2a. Dependent: rewrite the whole parent document
            //
            Some(parent_id) => {
                let mut doc = load_member(&store, parent_id)?;

                if doc.dependent(new_id).is_some() {
                    return Err(AppError::Other(format!(
                        "Dependent '{}' already exists in member '{}'",
                        new_id, parent_id
                    )));
                }

                doc.dependents.push(Dependent::new(new_id, &display_name));
                store.put_member(&doc)?;

                if let Err(e) = ttlog(
                    &store.pool.conn,
                    "member_add",
                    &format!("{}/{}", parent_id, new_id),
                    &format!("Added dependent '{}'", display_name),
                ) {
                    warning(format!("Failed to write internal log: {}", e));
                }

                success(format!(
                    "Added dependent {} ({}) to member {}.",
                    new_id, display_name, parent_id
                ));
            }

            //
            // 2b. Primary member
            //
            None => {
                if store.get_member(new_id)?.is_some() {
                    return Err(AppError::Other(format!(
                        "Member '{}' already exists",
                        new_id
                    )));
                }

                let doc = MemberDoc::new(new_id, &display_name);
                store.put_member(&doc)?;

                if let Err(e) = ttlog(
                    &store.pool.conn,
                    "member_add",
                    new_id,
                    &format!("Added member '{}'", display_name),
                ) {
                    warning(format!("Failed to write internal log: {}", e));
                }

                success(format!("Added member {} ({}).", new_id, display_name));
            }
        }
    }

    Ok(())
}
