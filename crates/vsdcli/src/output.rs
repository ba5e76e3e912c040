//! Table rendering for command results.
//!
//! Resource objects are opaque JSON; list commands pick their columns with
//! [`cell`], show commands dump every field through [`print_object`].

use chrono::DateTime;
use prettytable::{row, Table};
use serde_json::Value;

/// Print an object as a two-column Field/Value table.
///
/// `only` short-circuits to printing a single field's value (the global
/// `--show-only` option); `exclude` drops noisy fields such as `APIKey` or
/// a metadata `blob`. `*Date`/`*Expiry` fields hold epoch milliseconds and
/// are rendered as UTC timestamps.
pub fn print_object(obj: &Value, only: Option<&str>, exclude: &[&str]) {
    if let Some(key) = only {
        match obj.get(key) {
            Some(value) => println!("{}", display(value)),
            None => println!("No such key : {key}"),
        }
        return;
    }

    let mut table = Table::new();
    table.set_titles(row!["Field", "Value"]);
    if let Some(map) = obj.as_object() {
        for (key, value) in map {
            if exclude.contains(&key.as_str()) {
                continue;
            }
            let rendered = if let Some(items) = value.as_array() {
                items.iter().map(display).collect::<Vec<_>>().join("\n")
            } else if (key.ends_with("Date") || key.ends_with("Expiry")) && !value.is_null() {
                format_epoch_ms(value)
            } else {
                display(value)
            };
            table.add_row(row![key, rendered]);
        }
    }
    table.printstd();
}

/// A table cell for one field of a list row. Missing keys and nulls render
/// as `None`, matching what operators expect from the original tool.
pub fn cell(obj: &Value, key: &str) -> String {
    match obj.get(key) {
        Some(value) => display(value),
        None => "None".to_string(),
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

fn format_epoch_ms(value: &Value) -> String {
    let millis = value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()));
    match millis.and_then(|ms| DateTime::from_timestamp(ms / 1000, 0)) {
        Some(timestamp) => timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => display(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cell_renders_strings_numbers_and_missing_keys() {
        let obj = json!({"name": "nulab-1", "count": 3, "gone": null});
        assert_eq!(cell(&obj, "name"), "nulab-1");
        assert_eq!(cell(&obj, "count"), "3");
        assert_eq!(cell(&obj, "gone"), "None");
        assert_eq!(cell(&obj, "absent"), "None");
    }

    #[test]
    fn date_fields_render_as_utc() {
        assert_eq!(
            format_epoch_ms(&json!(1469448000000_i64)),
            "2016-07-25 12:00:00 UTC"
        );
        // numeric strings come back from some VSD versions
        assert_eq!(
            format_epoch_ms(&json!("1469448000000")),
            "2016-07-25 12:00:00 UTC"
        );
        // anything unparsable is shown verbatim
        assert_eq!(format_epoch_ms(&json!("null")), "null");
    }
}
