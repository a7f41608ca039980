use anyhow::Result;
use clap::{Args, Subcommand};

use gymdesk_db::Connection;
use gymdesk_domain::{
    Insert, Payment, PaymentFilter, PaymentMethod, PaymentStatus, Query, ServiceType, Validate,
};

use super::confirm;
use crate::{formatting::PrintFormatted, resolve};

#[derive(Subcommand, Debug)]
pub enum Payments {
    /// List recent payments
    #[clap(name = "list")]
    List(ListPayments),
    /// Record a payment
    #[clap(name = "record")]
    Record(RecordPayment),
}

impl Payments {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Payments::List(cmd) => cmd.run(db).await,
            Payments::Record(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct ListPayments {
    #[clap(short, long)]
    pub status: Option<PaymentStatus>,
    /// Show at most this many payments. Defaults to 50
    /// unless a status is given.
    #[clap(short, long)]
    pub limit: Option<u32>,
    #[clap(long)]
    pub json: bool,
}

const DEFAULT_LIMIT: u32 = 50;

impl ListPayments {
    fn filter(&self) -> PaymentFilter {
        let limit = match (self.limit, self.status) {
            (Some(limit), _) => Some(limit),
            (None, None) => Some(DEFAULT_LIMIT),
            (None, Some(_)) => None,
        };
        PaymentFilter {
            status: self.status,
            limit,
            ..Default::default()
        }
    }

    pub async fn run(self, db: &Connection) -> Result<()> {
        let filter = self.filter();
        let payments: Vec<Payment> = db.query(&filter).await?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&payments)?);
            return Ok(());
        }
        println!("{} payments.", payments.len());
        payments.print_formatted();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct RecordPayment {
    /// Paying member, by name or id
    #[clap(short, long)]
    pub member: String,
    #[clap(short, long)]
    pub amount: f64,
    #[clap(long, default_value_t = PaymentMethod::Cash)]
    pub method: PaymentMethod,
    #[clap(long, default_value_t = PaymentStatus::Completed)]
    pub status: PaymentStatus,
    #[clap(long, default_value_t = ServiceType::Membership)]
    pub service: ServiceType,
    /// Do not ask for confirmation
    #[clap(short, long)]
    pub yes: bool,
}

impl RecordPayment {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let member = resolve::member(db, &self.member).await?;
        let payment = Payment {
            member_id: member.id,
            member_name: member.name,
            amount: self.amount,
            payment_method: self.method,
            status: self.status,
            service_type: self.service,
            ..Default::default()
        };
        payment.validate()?;

        println!("");
        payment.print_formatted();
        println!("");

        if !confirm("Record payment?", self.yes)? {
            return Ok(());
        }

        let payment = db.insert(payment).await?;
        println!("Payment recorded with id {}.", payment.id);
        Ok(())
    }
}
