use anyhow::Context;
use kisaan_core::entities::MarketPrice;
use kisaan_core::i18n;
use kisaan_views::pages::{ChartPoint, MarketView};
use serde::Serialize;
use serde_json::json;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::MarketCommands;
use crate::commands::shared::limit::{effective_limit, take_limited};
use crate::context::AppContext;
use crate::output::{Section, output, output_empty, output_list, output_sections};
use crate::progress::Progress;

/// Width of the longest bar in the text chart.
const CHART_BAR_WIDTH: usize = 30;

#[derive(Debug, Serialize)]
struct PriceRow<'a> {
    crop: &'a str,
    region: &'a str,
    mandi: &'a str,
    price_per_kg: String,
    recorded_at: &'a str,
}

fn price_rows<'a>(prices: &[&'a MarketPrice]) -> Vec<PriceRow<'a>> {
    prices
        .iter()
        .map(|price| PriceRow {
            crop: &price.crop_name,
            region: &price.region,
            mandi: price.mandi_name.as_deref().unwrap_or("-"),
            price_per_kg: format!("{:.2}", price.price_per_kg),
            recorded_at: &price.recorded_at,
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct ChartRow<'a> {
    crop: &'a str,
    region: &'a str,
    price: String,
    bar: String,
}

fn chart_rows(points: &[ChartPoint]) -> Vec<ChartRow<'_>> {
    let max = points.iter().map(|point| point.price).fold(0.0_f64, f64::max);
    points
        .iter()
        .map(|point| ChartRow {
            crop: &point.crop,
            region: &point.region,
            price: format!("{:.2}", point.price),
            bar: "█".repeat(bar_length(point.price, max)),
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn bar_length(price: f64, max: f64) -> usize {
    if max <= 0.0 || price <= 0.0 {
        return 0;
    }
    ((price / max) * CHART_BAR_WIDTH as f64).round().max(1.0) as usize
}

/// Handle `kisaan market`.
pub async fn handle(
    action: &MarketCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MarketCommands::Prices { search, region } => {
            prices(search.as_deref(), region.as_deref(), ctx, flags).await
        }
        MarketCommands::Regions => regions(ctx, flags).await,
        MarketCommands::Chart { search, region } => {
            chart(search.as_deref(), region.as_deref(), ctx, flags).await
        }
        MarketCommands::Forecast { crop, region } => {
            forecast(crop, region.as_deref(), ctx, flags).await
        }
    }
}

/// Mount the market page and wait for its one price fetch.
async fn load(ctx: &AppContext) -> MarketView {
    let mut view = MarketView::mount(ctx.session());
    let progress = Progress::spinner(view.text().loading);
    view.settle().await;
    progress.finish_clear();
    view
}

fn apply_filters(view: &mut MarketView, search: Option<&str>, region: Option<&str>) {
    view.set_search(search.unwrap_or_default());
    view.set_region(region);
}

async fn prices(
    search: Option<&str>,
    region: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut view = load(ctx).await;
    apply_filters(&mut view, search, region);

    let rows = view.table_rows();
    if rows.is_empty() {
        return output_empty(view.text().no_data, flags.format);
    }
    let rows = take_limited(rows, effective_limit(flags.limit, ctx.config.general.table_rows));
    output_list(&rows, &price_rows(&rows), flags.format)
}

async fn regions(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = load(ctx).await;
    let text = view.text();
    let sections = [
        Section {
            key: "regions",
            title: text.region,
            value: json!(view.regions()),
            empty_text: text.no_data,
        },
        Section {
            key: "crops",
            title: text.crop,
            value: json!(view.crops()),
            empty_text: text.no_data,
        },
    ];
    output_sections(&sections, flags.format)
}

async fn chart(
    search: Option<&str>,
    region: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut view = load(ctx).await;
    apply_filters(&mut view, search, region);

    let points = view.chart_series();
    if points.is_empty() {
        return output_empty(view.text().no_data, flags.format);
    }
    output_list(&points, &chart_rows(&points), flags.format)
}

async fn forecast(
    crop: &str,
    region: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let text = i18n::market(ctx.shell.language());
    let progress = Progress::spinner(text.forecast);
    let forecast = ctx.api.get_price_forecast(crop, region).await;
    progress.finish_clear();

    let forecast =
        forecast.with_context(|| format!("failed to fetch price forecast for '{crop}'"))?;
    if flags.format == OutputFormat::Table && !flags.quiet {
        println!("{}: {crop}\n", text.forecast);
    }
    output(&forecast, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_the_highest_price() {
        assert_eq!(bar_length(200.0, 200.0), CHART_BAR_WIDTH);
        assert_eq!(bar_length(100.0, 200.0), CHART_BAR_WIDTH / 2);
        assert_eq!(bar_length(1.0, 10_000.0), 1);
        assert_eq!(bar_length(0.0, 200.0), 0);
    }

    #[test]
    fn chart_rows_format_prices() {
        let points = vec![ChartPoint {
            crop: "Wheat".into(),
            price: 80.0,
            region: "Punjab".into(),
        }];
        let rows = chart_rows(&points);
        assert_eq!(rows[0].price, "80.00");
        assert_eq!(rows[0].bar.chars().count(), CHART_BAR_WIDTH);
    }
}
