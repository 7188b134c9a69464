use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A console page: structured data for json/raw, human text for table.
pub trait Page: Serialize {
    fn text(&self) -> anyhow::Result<String>;
}

/// Render a page in the requested format.
pub fn render<P: Page>(page: &P, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(page)?),
        OutputFormat::Table => page.text(),
        OutputFormat::Raw => Ok(serde_json::to_string(page)?),
    }
}

/// Print a page in the requested format.
pub fn output<P: Page>(page: &P, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(page, format)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

/// Generic table text for any serializable value.
///
/// Arrays of objects become one row per item (columns in `columns` order);
/// objects become a sorted key/value table.
pub fn table_text<T: Serialize>(value: &T, columns: &[&str]) -> anyhow::Result<String> {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };

    match serde_json::to_value(value)? {
        Value::Array(items) if items.is_empty() => Ok(String::from("(no rows)")),
        Value::Array(items) => {
            let rows = items
                .iter()
                .map(|item| {
                    columns
                        .iter()
                        .map(|column| item.get(*column).map_or_else(|| "-".into(), value_to_cell))
                        .collect()
                })
                .collect::<Vec<Vec<String>>>();
            Ok(table::render_table(columns, &rows, options))
        }
        Value::Object(map) => {
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, options))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
