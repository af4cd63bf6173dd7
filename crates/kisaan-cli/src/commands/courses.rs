use anyhow::Context;
use kisaan_core::entities::Course;
use kisaan_views::pages::LearningView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CoursesCommands;
use crate::commands::shared::limit::{effective_limit, take_limited};
use crate::context::AppContext;
use crate::output::{output, output_empty, output_list};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct CourseRow<'a> {
    id: i64,
    title: &'a str,
    category: &'a str,
    video: bool,
}

fn course_rows<'a>(courses: &[&'a Course]) -> Vec<CourseRow<'a>> {
    courses
        .iter()
        .map(|course| CourseRow {
            id: course.id,
            title: &course.title,
            category: &course.category,
            video: course.video_url.is_some(),
        })
        .collect()
}

/// Handle `kisaan courses`.
pub async fn handle(
    action: &CoursesCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CoursesCommands::List { category } => list(category.as_deref(), ctx, flags).await,
        CoursesCommands::Categories => categories(ctx, flags).await,
        CoursesCommands::Get { id } => get(*id, ctx, flags).await,
    }
}

#[derive(Debug, Serialize)]
struct CategoryRow<'a> {
    category: &'a str,
    courses: usize,
}

fn category_rows<'a>(categories: &[&'a str], courses: &[&Course]) -> Vec<CategoryRow<'a>> {
    categories
        .iter()
        .map(|&category| CategoryRow {
            category,
            courses: courses.iter().filter(|c| c.category == category).count(),
        })
        .collect()
}

async fn categories(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = LearningView::mount(ctx.session());
    let text = view.text();

    let progress = Progress::spinner(text.loading);
    view.settle().await;
    progress.finish_clear();

    let categories = view.categories();
    if categories.is_empty() {
        return output_empty(text.no_courses, flags.format);
    }
    let rows = category_rows(&categories, &view.visible());
    output_list(&categories, &rows, flags.format)
}

async fn list(category: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = LearningView::mount(ctx.session());
    let text = view.text();

    let progress = Progress::spinner(text.loading);
    view.settle().await;
    progress.finish_clear();

    view.set_category(category);
    let visible = view.visible();
    if visible.is_empty() {
        return output_empty(text.no_courses, flags.format);
    }

    let limit = effective_limit(flags.limit, visible.len());
    let visible = take_limited(visible, limit);
    output_list(&visible, &course_rows(&visible), flags.format)
}

async fn get(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let language = ctx.shell.language();
    let progress = Progress::spinner(kisaan_core::i18n::learning(language).loading);
    let course = ctx.api.get_course(id, language).await;
    progress.finish_clear();

    let course = course.with_context(|| format!("failed to fetch course {id}"))?;
    output(&course, flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn course(id: i64, category: &str) -> Course {
        Course {
            id,
            title: format!("course {id}"),
            description: String::new(),
            category: category.to_string(),
            content: String::new(),
            video_url: None,
            created_at: None,
        }
    }

    #[test]
    fn category_rows_count_courses_per_category() {
        let courses = [
            course(1, "sustainable_practices"),
            course(2, "waste_management"),
            course(3, "sustainable_practices"),
        ];
        let refs: Vec<&Course> = courses.iter().collect();
        let rows = category_rows(&["sustainable_practices", "waste_management"], &refs);

        let counts: Vec<(&str, usize)> = rows.iter().map(|r| (r.category, r.courses)).collect();
        assert_eq!(counts, vec![("sustainable_practices", 2), ("waste_management", 1)]);
    }
}
