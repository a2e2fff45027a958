use std::path::PathBuf;

use clap::{Parser, Subcommand};
use homeplan::model::{Category, Frequency, Period};
use homeplan::output::Format;

#[derive(Parser)]
#[command(
    name = "homeplan",
    version,
    about = "Bi-monthly household maintenance planner"
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "json")]
    format: Format,
    /// Shorthand for --format pretty
    #[arg(long, global = true, hide = true)]
    pretty: bool,
    /// Data directory holding the persisted records
    #[arg(long, global = true, default_value = ".homeplan")]
    dir: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a maintenance task
    Add {
        /// Task name
        name: String,
        /// Estimated duration in minutes
        #[arg(long)]
        minutes: u32,
        /// Task category
        #[arg(long, value_enum)]
        category: Category,
        /// How often the task recurs
        #[arg(long, value_enum, default_value = "every-visit")]
        frequency: Frequency,
    },
    /// Edit a task's name, minutes, or frequency
    Edit {
        /// Task ID to edit
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New duration in minutes (ignored unless a positive integer)
        #[arg(long)]
        minutes: Option<String>,
        /// New frequency
        #[arg(long, value_enum)]
        frequency: Option<Frequency>,
    },
    /// Remove a task and clear it from the schedule
    Remove {
        /// Task ID to remove
        id: String,
    },
    /// List tasks, grouped by category in pretty output
    List {
        /// Filter by category
        #[arg(long, value_enum)]
        category: Option<Category>,
        /// Filter by frequency
        #[arg(long, value_enum)]
        frequency: Option<Frequency>,
    },
    /// Show or set the per-period minute budget
    Limit {
        /// New budget in minutes (omit to show the current value)
        minutes: Option<u32>,
    },
    /// Assign a task to a period
    Assign {
        /// Scheduling period
        #[arg(value_enum)]
        period: Period,
        /// Task ID to assign
        id: String,
    },
    /// Remove a task from a period
    Unassign {
        /// Scheduling period
        #[arg(value_enum)]
        period: Period,
        /// Task ID to unassign
        id: String,
    },
    /// Show the category x period schedule grid with budget totals
    Plan,
    /// Show the printable schedule, one section per non-empty period
    Print,
}

fn run(cli: Cli, format: Format) -> homeplan::error::Result<()> {
    let dir = cli.dir;
    match cli.command {
        Commands::Add {
            name,
            minutes,
            category,
            frequency,
        } => homeplan::commands::add::run(&dir, name, minutes, category, frequency, format),
        Commands::Edit {
            id,
            name,
            minutes,
            frequency,
        } => homeplan::commands::edit::run(&dir, id, name, minutes, frequency, format),
        Commands::Remove { id } => homeplan::commands::remove::run(&dir, id, format),
        Commands::List {
            category,
            frequency,
        } => homeplan::commands::list::run(&dir, category, frequency, format),
        Commands::Limit { minutes } => homeplan::commands::limit::run(&dir, minutes, format),
        Commands::Assign { period, id } => {
            homeplan::commands::assign::assign(&dir, period, id, format)
        }
        Commands::Unassign { period, id } => {
            homeplan::commands::assign::unassign(&dir, period, id, format)
        }
        Commands::Plan => homeplan::commands::plan::run(&dir, format),
        Commands::Print => homeplan::commands::print::run(&dir, format),
    }
}

fn main() {
    let cli = Cli::parse();
    let format = if cli.pretty {
        Format::Pretty
    } else {
        cli.format
    };
    if let Err(e) = run(cli, format) {
        match format {
            Format::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "error": e.code(),
                        "message": e.to_string()
                    })
                );
            }
            _ => eprintln!("error: {e}"),
        }
        std::process::exit(1);
    }
}
