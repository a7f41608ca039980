use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Subcommand};

use gymdesk_db::Connection;
use gymdesk_domain::{datetime, Booking, BookingFilter, Insert, Query, Validate};

use super::confirm;
use crate::{formatting::PrintFormatted, resolve};

#[derive(Subcommand, Debug)]
pub enum Bookings {
    /// List upcoming class bookings, or the bookings of one day
    #[clap(name = "list")]
    List(ListBookings),
    /// Book a class
    #[clap(name = "add")]
    Add(AddBooking),
}

impl Bookings {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Bookings::List(cmd) => cmd.run(db).await,
            Bookings::Add(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct ListBookings {
    /// Only classes on this date
    #[clap(short, long)]
    pub date: Option<NaiveDate>,
    #[clap(long)]
    pub json: bool,
}

impl ListBookings {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let filter = match self.date {
            Some(date) => BookingFilter {
                date: Some(date),
                ..Default::default()
            },
            None => BookingFilter {
                from_date: Some(datetime::today()),
                ..Default::default()
            },
        };
        let bookings: Vec<Booking> = db.query(&filter).await?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&bookings)?);
            return Ok(());
        }
        if bookings.is_empty() {
            match self.date {
                Some(date) => println!("No class bookings for {}", date),
                None => println!("No upcoming class bookings"),
            }
            return Ok(());
        }
        bookings.print_formatted();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct AddBooking {
    /// Member, by name or id
    #[clap(short, long)]
    pub member: String,
    /// Trainer, by name or id
    #[clap(short, long)]
    pub trainer: String,
    #[clap(short, long)]
    pub date: NaiveDate,
    #[clap(short, long, value_parser = resolve::parse_time)]
    pub start: NaiveTime,
    #[clap(short, long, value_parser = resolve::parse_time)]
    pub end: NaiveTime,
    /// Do not ask for confirmation
    #[clap(short, long)]
    pub yes: bool,
}

impl AddBooking {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let member = resolve::member(db, &self.member).await?;
        let trainer = resolve::trainer(db, &self.trainer).await?;

        let booking = Booking {
            member_id: member.id,
            member_name: member.name,
            trainer_id: trainer.id,
            trainer_name: trainer.name,
            class_date: self.date,
            start_time: self.start,
            end_time: self.end,
            ..Default::default()
        };
        booking.validate()?;

        println!("");
        booking.print_formatted();
        println!("");

        if !confirm("Book class?", self.yes)? {
            return Ok(());
        }

        let booking = db.insert(booking).await?;
        println!("Class booked with id {}.", booking.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gymdesk_db::connection;
    use gymdesk_domain::{Member, Trainer, ValidationError};

    async fn setup(db: &Connection) {
        db.insert(Member {
            name: "Alice".to_string(),
            age: 30,
            ..Member::default()
        })
        .await
        .unwrap();
        db.insert(Trainer {
            name: "Bob".to_string(),
            ..Trainer::default()
        })
        .await
        .unwrap();
    }

    fn add(start: &str, end: &str) -> AddBooking {
        AddBooking {
            member: "Alice".to_string(),
            trainer: "Bob".to_string(),
            date: NaiveDate::from_ymd_opt(2030, 2, 3).unwrap(),
            start: resolve::parse_time(start).unwrap(),
            end: resolve::parse_time(end).unwrap(),
            yes: true,
        }
    }

    async fn count(db: &Connection) -> usize {
        let bookings: Vec<Booking> = db.query(&BookingFilter::default()).await.unwrap();
        bookings.len()
    }

    #[tokio::test]
    async fn test_add_booking() {
        let (_handle, db) = connection::open_test().await;
        setup(&db).await;

        add("09:00", "10:00").run(&db).await.unwrap();
        assert_eq!(count(&db).await, 1);
    }

    #[tokio::test]
    async fn test_add_booking_end_not_after_start() {
        let (_handle, db) = connection::open_test().await;
        setup(&db).await;

        let err = add("10:00", "09:00").run(&db).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ValidationError>(),
            Some(ValidationError::EndBeforeStart { .. })
        ));
        assert!(add("10:00", "10:00").run(&db).await.is_err());

        // Nothing was written
        assert_eq!(count(&db).await, 0);
    }

    #[tokio::test]
    async fn test_add_booking_unknown_member() {
        let (_handle, db) = connection::open_test().await;
        setup(&db).await;

        let cmd = AddBooking {
            member: "Mallory".to_string(),
            ..add("09:00", "10:00")
        };
        assert!(cmd.run(&db).await.is_err());
        assert_eq!(count(&db).await, 0);
    }
}
