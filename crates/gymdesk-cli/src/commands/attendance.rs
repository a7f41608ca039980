use std::fmt;

use anyhow::Result;
use clap::{Args, Subcommand};
use inquire::Select;

use gymdesk_db::Connection;
use gymdesk_domain::{datetime, Attend, AttendanceFilter, AttendanceRecord, Query, Retrieve};

use crate::{formatting::PrintFormatted, resolve};

#[derive(Subcommand, Debug)]
pub enum Attendance {
    /// Check a member in
    #[clap(name = "check-in")]
    CheckIn(CheckIn),
    /// Check a member out
    #[clap(name = "check-out")]
    CheckOut(CheckOut),
    /// List members currently on site
    #[clap(name = "open")]
    Open(ListOpen),
    /// List today's attendance
    #[clap(name = "today")]
    Today(ListToday),
}

impl Attendance {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Attendance::CheckIn(cmd) => cmd.run(db).await,
            Attendance::CheckOut(cmd) => cmd.run(db).await,
            Attendance::Open(cmd) => cmd.run(db).await,
            Attendance::Today(cmd) => cmd.run(db).await,
        }
    }
}

async fn open_records(db: &Connection) -> Result<Vec<AttendanceRecord>> {
    let filter = AttendanceFilter {
        open: Some(true),
        ..Default::default()
    };
    db.query(&filter).await
}

#[derive(Args, Debug)]
pub struct CheckIn {
    /// Member, by name or id
    #[clap(short, long)]
    pub member: String,
}

impl CheckIn {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let member = resolve::member(db, &self.member).await?;
        db.check_in(member.id).await?;
        println!("Checked in {}", member.name);
        Ok(())
    }
}

/// Choice in the check out prompt
struct OpenVisit(AttendanceRecord);

impl fmt::Display for OpenVisit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (since {})",
            self.0.member_name,
            self.0.check_in_time.format("%Y-%m-%d %H:%M")
        )
    }
}

#[derive(Args, Debug)]
pub struct CheckOut {
    /// Attendance record to close. Asks when not given.
    #[clap(short, long)]
    pub id: Option<u32>,
}

impl CheckOut {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let attendance_id = match self.id {
            Some(id) => id,
            None => {
                let open = open_records(db).await?;
                if open.is_empty() {
                    println!("No members currently checked in");
                    return Ok(());
                }
                let choices = open.into_iter().map(OpenVisit).collect();
                let OpenVisit(record) =
                    Select::new("Select member to check out", choices).prompt()?;
                record.id
            }
        };

        match close_visit(db, attendance_id).await? {
            CheckedOut::Now(record) => println!(
                "Checked out {} after {}",
                record.member_name,
                datetime::format_duration(record.duration())
            ),
            CheckedOut::Already(record) => println!(
                "{} was already checked out at {}",
                record.member_name,
                record
                    .check_out_time
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default()
            ),
        }
        Ok(())
    }
}

/// Outcome of closing a visit
#[derive(Debug)]
enum CheckedOut {
    Now(AttendanceRecord),
    Already(AttendanceRecord),
}

async fn close_visit(db: &Connection, attendance_id: u32) -> Result<CheckedOut> {
    let record: AttendanceRecord = db.retrieve(attendance_id).await?;
    if !record.is_open() {
        return Ok(CheckedOut::Already(record));
    }
    let record = db.check_out(attendance_id).await?;
    Ok(CheckedOut::Now(record))
}

#[derive(Args, Debug)]
pub struct ListOpen {
    #[clap(long)]
    pub json: bool,
}

impl ListOpen {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let records = open_records(db).await?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(());
        }
        if records.is_empty() {
            println!("No members currently checked in");
            return Ok(());
        }
        records.print_formatted();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListToday {
    #[clap(long)]
    pub json: bool,
}

impl ListToday {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let filter = AttendanceFilter {
            date: Some(datetime::today()),
            ..Default::default()
        };
        let records: Vec<AttendanceRecord> = db.query(&filter).await?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(());
        }
        if records.is_empty() {
            println!("No attendance records for today");
            return Ok(());
        }
        records.print_formatted();
        Ok(())
    }
}
