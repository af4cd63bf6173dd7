use anyhow::Context;
use kisaan_core::i18n;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AlertsCommands;
use crate::commands::shared::alerts::{pest_rows, weather_rows};
use crate::commands::shared::limit::{effective_limit, take_limited};
use crate::context::AppContext;
use crate::output::{output_empty, output_list};
use crate::progress::Progress;

/// Handle `kisaan alerts`: one raw alert list, errors surfaced.
pub async fn handle(
    action: &AlertsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let language = ctx.shell.language();
    let text = i18n::bot(language);
    let progress = Progress::spinner(text.loading);

    match action {
        AlertsCommands::Weather { region } => {
            let alerts = ctx.api.get_weather_alerts(region.as_deref(), language).await;
            progress.finish_clear();
            let alerts = alerts.context("failed to fetch weather alerts")?;
            if alerts.is_empty() {
                return output_empty(text.no_alerts, flags.format);
            }
            let alerts = take_limited(alerts, effective_limit(flags.limit, usize::MAX));
            output_list(&alerts, &weather_rows(&alerts), flags.format)
        }
        AlertsCommands::Pests { region } => {
            let alerts = ctx.api.get_pest_alerts(region.as_deref(), language).await;
            progress.finish_clear();
            let alerts = alerts.context("failed to fetch pest alerts")?;
            if alerts.is_empty() {
                return output_empty(text.no_alerts, flags.format);
            }
            let alerts = take_limited(alerts, effective_limit(flags.limit, usize::MAX));
            output_list(&alerts, &pest_rows(&alerts), flags.format)
        }
    }
}
