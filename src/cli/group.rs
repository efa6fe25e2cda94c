use clap::{Args, Subcommand};
use feast::Config;
use feast_group::{Group, GroupInput};

use super::{Context, title_case};

#[derive(Args)]
pub struct GroupArgs {
    #[arg(long)]
    name: String,

    /// Number of guests
    #[arg(long)]
    size: u32,

    /// Dietary preference (repeatable); the first one steers plan generation
    #[arg(long = "diet")]
    diets: Vec<String>,

    /// Cuisine theme, e.g. Italian
    #[arg(long, default_value = "")]
    theme: String,

    #[arg(long, default_value = "")]
    notes: String,
}

impl From<GroupArgs> for GroupInput {
    fn from(args: GroupArgs) -> Self {
        Self {
            name: args.name,
            size: args.size,
            diets: args.diets,
            theme: args.theme,
            notes: args.notes,
        }
    }
}

#[derive(Subcommand)]
pub enum GroupCommand {
    /// Create a group
    Create(GroupArgs),
    /// Replace a group's details
    Update {
        id: String,

        #[command(flatten)]
        args: GroupArgs,
    },
    /// List groups in creation order
    List,
    /// Delete a group
    Delete { id: String },
}

pub async fn run(config: Config, command: GroupCommand) -> anyhow::Result<()> {
    let ctx = Context::open(config).await?;
    let groups = ctx.groups();

    match command {
        GroupCommand::Create(args) => {
            let group = groups.create(args.into()).await?;
            println!("Group \"{}\" created ({})", group.name, group.id);
        }
        GroupCommand::Update { id, args } => {
            let group = groups.update(&id, args.into()).await?;
            println!("Group \"{}\" updated", group.name);
        }
        GroupCommand::List => {
            let groups = groups.list().await?;
            if groups.is_empty() {
                println!("No groups yet. Create one to personalize your meal plans.");
            }

            for group in &groups {
                print_group(group);
            }
        }
        GroupCommand::Delete { id } => {
            groups.delete(&id).await?;
            println!("Group deleted.");
        }
    }

    Ok(())
}

fn print_group(group: &Group) {
    println!("{}  {} ({} guests)", group.id, group.name, group.size);

    if !group.diets.is_empty() {
        let diets: Vec<_> = group.diets.iter().map(|d| title_case(d)).collect();
        println!("  Diets: {}", diets.join(", "));
    }
    if let Some(theme) = group.theme() {
        println!("  Theme: {theme}");
    }
    if !group.notes.is_empty() {
        println!("  Notes: {}", group.notes);
    }
    println!("  Created {}", feast_shared::format_date(group.created_at));
}
