use crate::cli::subcommands::TaskCommands;
use crate::commands::shared::body::read_body;
use crate::context::AppContext;
use crate::output::output;

/// Handle `shift task`.
pub async fn handle(action: &TaskCommands, ctx: &AppContext) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        TaskCommands::Create { data } => {
            let task = service.create_task(&read_body(data)?).await?;
            output(&task, ctx.format)
        }
        TaskCommands::List { schedule_id } => {
            let tasks = service.list_tasks(schedule_id.as_deref()).await?;
            output(&tasks, ctx.format)
        }
        TaskCommands::Get { id } => output(&service.get_task(id).await?, ctx.format),
        TaskCommands::Update { id, data } => {
            let task = service.update_task(id, &read_body(data)?).await?;
            output(&task, ctx.format)
        }
        TaskCommands::Delete { id } => output(&service.remove_task(id).await?, ctx.format),
    }
}
