use clap::Subcommand;

/// Task entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Create a task from a JSON body.
    Create {
        /// JSON object, or "-" to read it from stdin
        #[arg(long)]
        data: String,
    },
    /// List active tasks with their schedules.
    List {
        #[arg(long)]
        schedule_id: Option<String>,
    },
    /// Get an active task with its schedule.
    Get { id: String },
    /// Update fields of an active task.
    Update {
        id: String,
        /// JSON object, or "-" to read it from stdin
        #[arg(long)]
        data: String,
    },
    /// Soft-delete a task.
    Delete { id: String },
}
