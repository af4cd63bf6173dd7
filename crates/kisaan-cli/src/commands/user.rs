use anyhow::Context;
use kisaan_core::entities::{NewUser, User};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;
use crate::output::output;

/// `#id name` line above the field table, when the record has a name.
fn heading(user: &User) -> Option<String> {
    let name = user.name()?;
    Some(user.id().map_or_else(|| name.to_string(), |id| format!("#{id} {name}")))
}

/// Handle `kisaan user`.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::Create {
            name,
            email,
            phone,
            region,
        } => {
            let user = NewUser {
                name: name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                region: region.clone(),
                language: ctx.shell.language(),
            };
            let created = ctx
                .api
                .create_user(&user)
                .await
                .with_context(|| format!("failed to create user '{name}'"))?;
            tracing::debug!(id = created.id, "user created");
            output(&created, flags.format)
        }
        UserCommands::Get { id } => {
            let user = ctx
                .api
                .get_user(*id)
                .await
                .with_context(|| format!("failed to fetch user {id}"))?;
            if flags.format == OutputFormat::Table && !flags.quiet {
                if let Some(heading) = heading(&user) {
                    println!("{heading}\n");
                }
            }
            output(&user, flags.format)
        }
    }
}
