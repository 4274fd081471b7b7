use clap::Subcommand;

/// Schedule entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ScheduleCommands {
    /// Create a schedule from a JSON body.
    Create {
        /// JSON object, or "-" to read it from stdin
        #[arg(long)]
        data: String,
    },
    /// List active schedules.
    List,
    /// Get an active schedule by ID.
    Get { id: String },
    /// Update fields of an active schedule.
    Update {
        id: String,
        /// JSON object, or "-" to read it from stdin
        #[arg(long)]
        data: String,
    },
    /// Soft-delete a schedule.
    Delete { id: String },
}
