use anyhow::Result;

use clap::{Parser, Subcommand};

use gymdesk_db::{schema, Connection};

#[derive(Parser, Debug)]
#[clap(name = "gymdesk-setup")]
struct Cli {
    #[clap(env = "GYMDESK_DB", default_value = "gym.sqlite3")]
    pub db: String,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database and install the schema
    Init,
}

/// Initialize the database
async fn db_init(filename: &str) -> Result<()> {
    let db = Connection::create(filename).await?;
    schema::install(&db).await?;
    tracing::info!(filename, "schema installed");
    println!("Database {} ready", filename);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Init => db_init(&cli.db).await?,
    }
    Ok(())
}
