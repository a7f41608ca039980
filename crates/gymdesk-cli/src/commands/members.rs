use anyhow::Result;
use clap::{Args, Subcommand};

use gymdesk_db::Connection;
use gymdesk_domain::{
    Gender, Insert, Member, MemberFilter, MembershipType, Query, Retrieve, Validate,
};

use super::confirm;
use crate::{formatting::PrintFormatted, resolve};

#[derive(Subcommand, Debug)]
pub enum Members {
    /// Show a member
    #[clap(name = "show")]
    Show(ShowMember),
    /// List or search members
    #[clap(name = "list")]
    List(ListMembers),
    /// Add a member
    #[clap(name = "add")]
    Add(AddMember),
}

impl Members {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Members::Show(cmd) => cmd.run(db).await,
            Members::List(cmd) => cmd.run(db).await,
            Members::Add(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct ShowMember {
    #[clap(short, long)]
    pub id: u32,
}

impl ShowMember {
    /// Run the command and show a member
    pub async fn run(self, db: &Connection) -> Result<()> {
        let member: Member = db.retrieve(self.id).await?;
        println!("");
        member.print_formatted();
        println!("");
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListMembers {
    /// Only members whose name contains this text
    #[clap(short, long)]
    pub name: Option<String>,
    #[clap(long)]
    pub json: bool,
}

impl ListMembers {
    /// Run the command and list members
    pub async fn run(self, db: &Connection) -> Result<()> {
        // An empty search lists everyone
        let name = self.name.filter(|n| !n.trim().is_empty());
        let searching = name.is_some();
        let filter = MemberFilter {
            name,
            ..Default::default()
        };

        let members: Vec<Member> = db.query(&filter).await?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&members)?);
            return Ok(());
        }
        if searching && members.is_empty() {
            println!("No members found matching your search.");
            return Ok(());
        }
        println!("{} members.", members.len());
        members.print_formatted();

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct AddMember {
    #[clap(short, long)]
    pub name: String,
    #[clap(short, long)]
    pub age: u8,
    #[clap(short, long, default_value_t = Gender::Male)]
    pub gender: Gender,
    #[clap(short, long)]
    pub phone: String,
    #[clap(short, long)]
    pub email: String,
    #[clap(long, default_value = "")]
    pub address: String,
    #[clap(short, long, default_value_t = MembershipType::Monthly)]
    pub membership_type: MembershipType,
    /// Assigned trainer, by name or id
    #[clap(short, long)]
    pub trainer: Option<String>,
    /// Do not ask for confirmation
    #[clap(short, long)]
    pub yes: bool,
}

impl AddMember {
    /// Run the command and add a member to the database
    pub async fn run(self, db: &Connection) -> Result<()> {
        let trainer = match &self.trainer {
            Some(selection) => Some(resolve::trainer(db, selection).await?),
            None => None,
        };

        let member = Member {
            name: self.name,
            age: self.age,
            gender: self.gender,
            phone: self.phone,
            email: self.email,
            address: self.address,
            membership_type: self.membership_type,
            trainer_id: trainer.as_ref().map(|t| t.id),
            trainer_name: trainer.map(|t| t.name),
            ..Default::default()
        };
        member.validate()?;

        println!("");
        member.print_formatted();
        println!("");

        // Confirm adding member
        if !confirm("Add member?", self.yes)? {
            return Ok(());
        }

        let member = db.insert(member).await?;
        println!("Member added with id {}.", member.id);

        Ok(())
    }
}
