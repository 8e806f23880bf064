use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
///
/// Table mode lays out arrays as rows. A single document (a JSON Schema) has
/// no row shape and prints as pretty JSON.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => match serde_json::to_value(value)? {
            Value::Array(items) => Ok(render_rows(&items)),
            document => Ok(serde_json::to_string_pretty(&document)?),
        },
    }
}

/// Render a response, switching to flattened `rows` in table mode.
///
/// JSON and raw output keep the full document; the table shows one row per
/// category or plan item.
pub fn render_with_rows<T, R>(value: &T, rows: &[R], format: OutputFormat) -> anyhow::Result<String>
where
    T: Serialize,
    R: Serialize,
{
    match format {
        OutputFormat::Table => render(&rows, format),
        OutputFormat::Json | OutputFormat::Raw => render(value, format),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a response with a flattened table view. See [`render_with_rows`].
pub fn output_with_rows<T, R>(value: &T, rows: &[R], format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize,
    R: Serialize,
{
    let rendered = render_with_rows(value, rows, format)?;
    println!("{rendered}");
    Ok(())
}

/// Columns follow field declaration order of the first row that has them.
fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };

    let mut headers = Vec::<&str>::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
        if !headers.contains(&key.as_str()) {
            headers.push(key.as_str());
        }
    }

    if headers.is_empty() {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render(&["value"], &rows, options);
    }

    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| item.get(*header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render(&headers, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{render, render_with_rows};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Document {
        target: f64,
        label: &'static str,
    }

    #[derive(Serialize)]
    struct Row {
        category: &'static str,
        average: f64,
        severity: &'static str,
    }

    fn rows() -> [Row; 2] {
        [
            Row {
                category: "CO1",
                average: 70.0,
                severity: "no_gap",
            },
            Row {
                category: "CO2",
                average: 40.0,
                severity: "medium",
            },
        ]
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Document {
            target: 60.0,
            label: "x",
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["label"], "x");
        assert_eq!(parsed["target"], 60.0);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Document {
            target: 60.0,
            label: "x",
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(out.starts_with(r#"{"target":60.0"#));
    }

    #[test]
    fn rows_replace_document_only_in_table_mode() {
        let value = Document {
            target: 60.0,
            label: "x",
        };

        let table = render_with_rows(&value, &rows(), OutputFormat::Table).expect("table render");
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(!table.contains("target"));

        let json = render_with_rows(&value, &rows(), OutputFormat::Json).expect("json render");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("json should parse");
        assert_eq!(parsed["label"], "x");
    }

    #[test]
    fn table_columns_follow_field_order() {
        let table = render(&rows(), OutputFormat::Table).expect("table render");
        let header = table.lines().next().expect("header line");
        let positions = ["category", "average", "severity"].map(|name| header.find(name));
        assert_eq!(positions[0], Some(0));
        assert!(positions[0] < positions[1]);
        assert!(positions[1] < positions[2]);
    }

    #[test]
    fn scalar_lists_render_as_value_column() {
        let table = render(&["analysis_report", "marks_entries"], OutputFormat::Table)
            .expect("table render");
        assert!(table.starts_with("value"));
        assert!(table.contains("marks_entries"));
    }

    #[test]
    fn single_document_in_table_mode_prints_json() {
        let value = Document {
            target: 60.0,
            label: "x",
        };
        let out = render(&value, OutputFormat::Table).expect("table render");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["label"], "x");
    }

    #[test]
    fn empty_rows_render_placeholder() {
        let value = Document {
            target: 60.0,
            label: "x",
        };
        let rows: [Row; 0] = [];
        let out = render_with_rows(&value, &rows, OutputFormat::Table).expect("table render");
        assert_eq!(out, "(no rows)");
    }
}
