use clap::{Parser, ValueEnum};
use migration::{migrate, MigrationCommand};
use sea_orm::Database;

#[derive(Clone, ValueEnum)]
enum Env {
    Prod,
    Test,
}

#[derive(Clone, Copy, ValueEnum)]
enum Cmd {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Workdesk database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Cmd,

    /// Runtime environment
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,
}

/// Build the owner-level Postgres URL from environment variables.
///
/// Migrations run with owner credentials; the application user only gets
/// DML-level access.
fn owner_db_url(env: &Env) -> Result<String, String> {
    let must = |name: &str| {
        std::env::var(name).map_err(|_| format!("required environment variable '{name}' is not set"))
    };

    let host = std::env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = std::env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
    let db_name = match env {
        Env::Prod => must("PROD_DB")?,
        Env::Test => {
            let name = must("TEST_DB")?;
            if !name.ends_with("_test") {
                return Err(format!(
                    "test environment requires database name to end with '_test', got '{name}'"
                ));
            }
            name
        }
    };
    let username = must("WORKDESK_OWNER_USER")?;
    let password = must("WORKDESK_OWNER_PASSWORD")?;

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let url = match owner_db_url(&args.env) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let db = match Database::connect(&url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ failed to connect: {e}");
            std::process::exit(1);
        }
    };

    let command = match args.command {
        Cmd::Up => MigrationCommand::Up,
        Cmd::Down => MigrationCommand::Down,
        Cmd::Fresh => MigrationCommand::Fresh,
        Cmd::Reset => MigrationCommand::Reset,
        Cmd::Refresh => MigrationCommand::Refresh,
        Cmd::Status => MigrationCommand::Status,
    };

    if let Err(e) = migrate(&db, command).await {
        eprintln!("❌ migration failed: {e}");
        std::process::exit(1);
    }
}
