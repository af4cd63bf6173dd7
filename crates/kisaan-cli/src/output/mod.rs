use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print `full` for JSON formats and the compact `rows` for tables.
pub fn output_list<F: Serialize, R: Serialize>(
    full: &F,
    rows: &R,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => output(rows, format),
        OutputFormat::Json | OutputFormat::Raw => output(full, format),
    }
}

/// A titled part of a page, such as the weather half of the alert board.
pub struct Section<'a> {
    pub key: &'static str,
    pub title: &'a str,
    pub value: Value,
    /// Shown instead of a table when the section has no rows.
    pub empty_text: &'a str,
}

/// Render sections as one JSON object keyed by `key`, or as titled tables.
pub fn render_sections(sections: &[Section<'_>], format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        let object: Map<String, Value> = sections
            .iter()
            .map(|section| (section.key.to_string(), section.value.clone()))
            .collect();
        return render(&object, format);
    }

    let mut blocks = Vec::with_capacity(sections.len());
    for section in sections {
        let body = match &section.value {
            Value::Array(items) if items.is_empty() => section.empty_text.to_string(),
            value => render_table(value)?,
        };
        blocks.push(format!("{}\n{body}", section.title));
    }
    Ok(blocks.join("\n\n"))
}

pub fn output_sections(sections: &[Section<'_>], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_sections(sections, format)?);
    Ok(())
}

/// Print a "no data" line in table mode, or an empty list otherwise.
pub fn output_empty(text: &str, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{text}");
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&Vec::<Value>::new(), format),
    }
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, table_options()))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, table_options()))
        }
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, table_options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::{Section, render, render_sections};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct PriceRow {
        crop: &'static str,
        region: &'static str,
        price: String,
    }

    fn rows() -> Vec<PriceRow> {
        vec![
            PriceRow {
                crop: "Wheat",
                region: "Punjab",
                price: "80.00".into(),
            },
            PriceRow {
                crop: "Basmati Rice",
                region: "Sindh",
                price: "210.00".into(),
            },
        ]
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&rows(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed[1]["crop"], "Basmati Rice");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&rows(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_lists_each_row() {
        let out = render(&rows(), OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("crop") && lines[0].contains("price"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[3].contains("Basmati Rice"));
    }

    #[test]
    fn sections_render_as_object_in_json() {
        let sections = [
            Section {
                key: "weather",
                title: "Weather",
                value: json!([{"id": 1}]),
                empty_text: "none",
            },
            Section {
                key: "pests",
                title: "Pests",
                value: json!([]),
                empty_text: "none",
            },
        ];
        let out = render_sections(&sections, OutputFormat::Raw).unwrap();
        assert_eq!(out, r#"{"pests":[],"weather":[{"id":1}]}"#);
    }

    #[test]
    fn empty_sections_show_no_data_text_in_tables() {
        let sections = [Section {
            key: "pests",
            title: "Pest Alerts",
            value: json!([]),
            empty_text: "No alerts available",
        }];
        let out = render_sections(&sections, OutputFormat::Table).unwrap();
        assert_eq!(out, "Pest Alerts\nNo alerts available");
    }
}
