use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{db_utils, migrate, stats};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate: run_migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *run_migrate {
            migrate::run_pending_migrations(&pool.conn)?;
            success("Migrations up to date.");
        }

        if *check {
            let result = db_utils::integrity_check(&mut pool)?;
            if result == "ok" {
                success("Database integrity OK");
            } else {
                warning(format!("Integrity check reported: {}", result));
            }
        }

        if *vacuum {
            db_utils::vacuum(&mut pool)?;
            success("Database optimized (VACUUM).");
        }

        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }
    }
    Ok(())
}
