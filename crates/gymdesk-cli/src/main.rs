use anyhow::Result;

use gymdesk_cli::{cli::Cli, logging};
use gymdesk_db::Connection;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::init();
    logging::init(cli.verbose);
    tracing::debug!(db = %cli.db, "using database");

    let db = Connection::open(&cli.db).await?;
    cli.command.run(&db).await?;

    Ok(())
}
