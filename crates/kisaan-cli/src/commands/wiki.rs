use anyhow::Context;
use kisaan_core::entities::WikiArticle;
use kisaan_core::i18n;
use kisaan_views::pages::WikiView;
use kisaan_views::pages::wiki::PREVIEW_CHARS;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WikiCommands;
use crate::commands::shared::limit::{effective_limit, take_limited};
use crate::context::AppContext;
use crate::output::{output, output_empty, output_list};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ArticleRow<'a> {
    id: i64,
    title: &'a str,
    category: &'a str,
    tags: Vec<&'a str>,
    preview: String,
}

fn article_rows<'a>(articles: &[&'a WikiArticle]) -> Vec<ArticleRow<'a>> {
    articles
        .iter()
        .map(|article| ArticleRow {
            id: article.id,
            title: &article.title,
            category: &article.category,
            tags: article.tag_list(),
            preview: article.preview(PREVIEW_CHARS),
        })
        .collect()
}

/// Handle `kisaan wiki`.
pub async fn handle(
    action: &WikiCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        WikiCommands::List { category, search } => {
            list(category.as_deref(), search.as_deref(), ctx, flags).await
        }
        WikiCommands::Get { id } => get(*id, ctx, flags).await,
    }
}

async fn list(
    category: Option<&str>,
    search: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut view = WikiView::mount_with_category(ctx.session(), category);
    let text = view.text();

    let progress = Progress::spinner(text.loading);
    view.settle().await;
    progress.finish_clear();

    view.set_search(search.unwrap_or_default());
    let visible = view.visible();
    if visible.is_empty() {
        return output_empty(text.no_articles, flags.format);
    }

    let limit = effective_limit(flags.limit, visible.len());
    let visible = take_limited(visible, limit);
    output_list(&visible, &article_rows(&visible), flags.format)
}

async fn get(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let language = ctx.shell.language();
    let progress = Progress::spinner(i18n::wiki(language).loading);
    let article = ctx.api.get_wiki_article(id, language).await;
    progress.finish_clear();

    let article = article.with_context(|| format!("failed to fetch wiki article {id}"))?;
    output(&article, flags.format)
}
