use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::sqlite::SqliteStore;
use crate::db::{TaskStore, queries};
use crate::errors::AppResult;
use crate::models::role::Role;
use crate::ui::messages::success;

/// Create the config file, the database schema and the local user's role
/// row (parent by default, admin with --admin).
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { email, name, admin } = &cli.command {
        let mut cfg = Config::init_all(cli.db.clone(), email.clone(), name.clone(), cli.test)?;

        if let Some(custom_db) = &cli.db {
            cfg.database = custom_db.clone();
        }

        let mut store = SqliteStore::open(&cfg.database)?;

        // First sign-in bootstraps a parent row; --admin upgrades it.
        store.role_for(&cfg.user_id, &cfg.user_email)?;
        if *admin {
            queries::set_role(&store.pool.conn, &cfg.user_id, &cfg.user_email, Role::Admin)?;
            success(format!("{} registered as administrator", cfg.user_email));
        }
    }
    Ok(())
}
