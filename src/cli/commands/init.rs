use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ CONFIGURATION
    //
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = cfg.database_path().to_string_lossy().to_string();

    println!("⚙️  Initializing clocker…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2️⃣ DATABASE (opening creates the schema)
    //
    let pool = DbPool::new(&db_path)?;

    //
    // 3️⃣ INTERNAL LOG (non blocking)
    //
    ttlog_or_warn(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 clocker initialization completed!");
    Ok(())
}
