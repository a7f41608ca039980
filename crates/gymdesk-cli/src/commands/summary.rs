use anyhow::Result;
use clap::Args;

use gymdesk_db::Connection;
use gymdesk_domain::{Payment, PaymentFilter, Query, Retrieve, Summary};

use crate::formatting::PrintFormatted;

const RECENT_PAYMENTS: u32 = 5;

#[derive(Args, Debug)]
pub struct ShowSummary {}

impl ShowSummary {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let summary: Summary = db.retrieve(()).await?;
        println!("");
        summary.print_formatted();
        println!("");

        let filter = PaymentFilter {
            limit: Some(RECENT_PAYMENTS),
            ..Default::default()
        };
        let payments: Vec<Payment> = db.query(&filter).await?;
        println!("Recent Payments");
        payments.print_formatted();
        Ok(())
    }
}
