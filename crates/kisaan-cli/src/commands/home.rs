use kisaan_views::pages::HomeView;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::alerts::{BoardText, board_sections};
use crate::context::AppContext;
use crate::output::output_sections;
use crate::progress::Progress;

/// Handle `kisaan home`: the recent alerts board.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = HomeView::mount(ctx.session());
    let text = view.text();

    let progress = Progress::spinner(text.recent_alerts);
    let state = view.settle().await;
    progress.finish_clear();

    let board_text = BoardText {
        weather: text.weather,
        pests: text.pests,
        empty: text.no_alerts,
    };
    let sections = board_sections(state.loaded(), &board_text, flags.format)?;

    if flags.format == OutputFormat::Table && !flags.quiet {
        println!("{}\n{}\n", text.hero_title, text.recent_alerts);
    }
    output_sections(&sections, flags.format)
}
