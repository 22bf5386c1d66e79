mod commands;
mod context;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use calgrid_core::Category;
use calgrid_core::timestamp::parse_date;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::context::Context;

#[derive(Parser)]
#[command(name = "calgrid")]
#[command(about = "Month and week calendar views with local event storage")]
struct Cli {
    /// Use this events file instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid
    Month {
        /// Any date in the month to show (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the events of one week, by start day
    Week {
        /// Any date in the week to show (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show every event touching one day
    Day {
        /// Day to show (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Create an event
    New {
        title: String,

        /// Start date/time (e.g. "2025-03-20T15:00")
        #[arg(short, long)]
        start: Option<String>,

        /// End date/time, defaults to one hour after start
        #[arg(short, long)]
        end: Option<String>,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Meeting, Work, Personal or Holiday
        #[arg(long)]
        category: Option<Category>,
    },
    /// Change fields of an existing event
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long)]
        end: Option<String>,

        #[arg(long)]
        color: Option<String>,

        /// New description; pass an empty string to remove it
        #[arg(long)]
        description: Option<String>,

        /// New category; pass "none" to remove it
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete an event
    Delete { id: String },
    /// Show event counts
    Stats,
    /// List the available event colors
    Colors,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Cli { file, command } = Cli::parse();

    match command {
        Commands::Month { date } => {
            commands::month::run(&Context::load(file)?, resolve_date(date.as_deref())?)
        }
        Commands::Week { date } => {
            commands::week::run(&Context::load(file)?, resolve_date(date.as_deref())?)
        }
        Commands::Day { date } => {
            commands::day::run(&Context::load(file)?, resolve_date(date.as_deref())?)
        }
        Commands::New {
            title,
            start,
            end,
            color,
            description,
            category,
        } => commands::new::run(
            Context::load(file)?,
            commands::new::NewArgs {
                title,
                start,
                end,
                color,
                description,
                category,
            },
        ),
        Commands::Edit {
            id,
            title,
            start,
            end,
            color,
            description,
            category,
        } => commands::edit::run(
            Context::load(file)?,
            &id,
            commands::edit::EditArgs {
                title,
                start,
                end,
                color,
                description,
                category,
            },
        ),
        Commands::Delete { id } => commands::delete::run(Context::load(file)?, &id),
        Commands::Stats => commands::stats::run(&Context::load(file)?),
        Commands::Colors => {
            commands::colors::run();
            Ok(())
        }
    }
}

fn resolve_date(date: Option<&str>) -> Result<Option<NaiveDate>> {
    Ok(date.map(parse_date).transpose()?)
}
