use serde::Serialize;

use kisaan_core::enums::{Language, TextDirection};
use kisaan_core::i18n;
use kisaan_views::NavLink;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output_list;

#[derive(Debug, Serialize)]
struct NavResponse<'a> {
    language: Language,
    direction: TextDirection,
    languages: [Language; 2],
    links: &'a [NavLink],
}

/// Language toggle, current choice bracketed: `[اردو] English`.
fn switcher(current: Language) -> String {
    Language::ALL
        .iter()
        .map(|&language| {
            if language == current {
                format!("[{}]", language.native_name())
            } else {
                language.native_name().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Handle `kisaan nav`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let shell = &ctx.shell;
    let links = shell.nav_links();

    if flags.format == OutputFormat::Table && !flags.quiet {
        let language = shell.language();
        println!(
            "{} | {}: {} ({})\n",
            i18n::nav(language).brand,
            i18n::nav(language).language,
            switcher(language),
            shell.direction().as_str(),
        );
    }

    let response = NavResponse {
        language: shell.language(),
        direction: shell.direction(),
        languages: Language::ALL,
        links: &links,
    };
    output_list(&response, &links, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switcher_brackets_the_current_language() {
        assert_eq!(switcher(Language::Ur), "[اردو] English");
        assert_eq!(switcher(Language::En), "اردو [English]");
    }
}
