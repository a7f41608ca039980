use anyhow::Result;
use clap::{Parser, Subcommand};

use gymdesk_db::Connection;

use crate::commands::{Attendance, Bookings, Members, Payments, ShowSummary, Trainers};

#[derive(Parser, Debug)]
#[clap(name = "gymdesk", version=env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Path of the gym database
    #[clap(long, env = "GYMDESK_DB", default_value = "gym.sqlite3")]
    pub db: String,

    /// Log more (-v info, -vv debug)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Member and trainer counts and the latest payments
    #[clap(name = "summary")]
    Summary(ShowSummary),
    #[clap(name = "members", subcommand)]
    Members(Members),
    #[clap(name = "trainers", subcommand)]
    Trainers(Trainers),
    #[clap(name = "payments", subcommand)]
    Payments(Payments),
    #[clap(name = "attendance", subcommand)]
    Attendance(Attendance),
    #[clap(name = "bookings", subcommand)]
    Bookings(Bookings),
}

impl Command {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Command::Summary(cmd) => cmd.run(db).await,
            Command::Members(cmd) => cmd.run(db).await,
            Command::Trainers(cmd) => cmd.run(db).await,
            Command::Payments(cmd) => cmd.run(db).await,
            Command::Attendance(cmd) => cmd.run(db).await,
            Command::Bookings(cmd) => cmd.run(db).await,
        }
    }
}
