use crate::cli::subcommands::ScheduleCommands;
use crate::commands::shared::body::read_body;
use crate::context::AppContext;
use crate::output::output;

/// Handle `shift schedule`.
pub async fn handle(action: &ScheduleCommands, ctx: &AppContext) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        ScheduleCommands::Create { data } => {
            let schedule = service.create_schedule(&read_body(data)?).await?;
            output(&schedule, ctx.format)
        }
        ScheduleCommands::List => output(&service.list_schedules().await?, ctx.format),
        ScheduleCommands::Get { id } => output(&service.get_schedule(id).await?, ctx.format),
        ScheduleCommands::Update { id, data } => {
            let schedule = service.update_schedule(id, &read_body(data)?).await?;
            output(&schedule, ctx.format)
        }
        ScheduleCommands::Delete { id } => output(&service.remove_schedule(id).await?, ctx.format),
    }
}
