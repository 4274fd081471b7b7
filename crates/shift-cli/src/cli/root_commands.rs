use clap::Subcommand;

use crate::cli::subcommands::{ScheduleCommands, TaskCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Agent availability windows.
    Schedule {
        #[command(subcommand)]
        action: ScheduleCommands,
    },
    /// Work and break slots inside a schedule.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
}
