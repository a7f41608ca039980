use anyhow::Result;
use clap::{Args, Subcommand};

use gymdesk_db::Connection;
use gymdesk_domain::{Gender, Insert, Query, Retrieve, Trainer, TrainerFilter, Validate};

use super::confirm;
use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Trainers {
    /// Show a trainer
    #[clap(name = "show")]
    Show(ShowTrainer),
    /// List trainers
    #[clap(name = "list")]
    List(ListTrainers),
    /// Add a trainer
    #[clap(name = "add")]
    Add(AddTrainer),
}

impl Trainers {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Trainers::Show(cmd) => cmd.run(db).await,
            Trainers::List(cmd) => cmd.run(db).await,
            Trainers::Add(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct ShowTrainer {
    #[clap(short, long)]
    pub id: u32,
}

impl ShowTrainer {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let trainer: Trainer = db.retrieve(self.id).await?;
        println!("");
        trainer.print_formatted();
        println!("");
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListTrainers {
    #[clap(long)]
    pub json: bool,
}

impl ListTrainers {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let trainers: Vec<Trainer> = db.query(&TrainerFilter::default()).await?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&trainers)?);
            return Ok(());
        }
        println!("{} trainers.", trainers.len());
        trainers.print_formatted();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct AddTrainer {
    #[clap(short, long)]
    pub name: String,
    /// Years of experience
    #[clap(short = 'x', long, default_value_t = 0)]
    pub experience: u32,
    #[clap(short, long)]
    pub specialization: String,
    #[clap(short, long, default_value_t = Gender::Male)]
    pub gender: Gender,
    #[clap(short, long)]
    pub phone: String,
    #[clap(long, default_value_t = 0.0)]
    pub salary: f64,
    /// Do not ask for confirmation
    #[clap(short, long)]
    pub yes: bool,
}

impl AddTrainer {
    /// Run the command and add a trainer to the database
    pub async fn run(self, db: &Connection) -> Result<()> {
        let trainer = Trainer {
            name: self.name,
            experience: self.experience,
            specialization: self.specialization,
            gender: self.gender,
            phone: self.phone,
            salary: self.salary,
            ..Default::default()
        };
        trainer.validate()?;

        println!("");
        trainer.print_formatted();
        println!("");

        if !confirm("Add trainer?", self.yes)? {
            return Ok(());
        }

        let trainer = db.insert(trainer).await?;
        println!("Trainer added with id {}.", trainer.id);
        Ok(())
    }
}
