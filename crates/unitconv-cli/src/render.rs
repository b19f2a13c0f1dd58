//! Text rendering of views for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use serde_json::Value;

use unitconv_text::Canonicalization;

use crate::views::{ConverterView, HomeView, NotFoundView, View, unit_label};

/// Render a view as human-readable text.
pub fn render_view(view: &View) -> String {
    match view {
        View::Home(home) => render_home(home),
        View::Converter(converter) => render_converter(converter),
        View::NotFound(not_found) => render_not_found(not_found),
    }
}

fn render_home(home: &HomeView) -> String {
    let Some(labels) = home.unit_labels() else {
        return format!("Units\n{}", pretty_json(&home.units));
    };
    if labels.is_empty() {
        return "No units available.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Unit")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (index, label) in labels.into_iter().enumerate() {
        table.add_row(vec![Cell::new(index + 1), Cell::new(label)]);
    }
    format!("Units\n{table}")
}

fn render_converter(converter: &ConverterView) -> String {
    let mut out = format!("Converter: {}\n", converter.unit_name);
    if let Some(input) = &converter.input {
        if input.raw == input.canonical {
            out.push_str(&format!("Value: {}\n", input.canonical));
        } else {
            out.push_str(&format!("Value: {} -> {}\n", input.raw, input.canonical));
        }
    }
    match &converter.detail {
        Value::Object(fields) if !fields.is_empty() => {
            let mut table = Table::new();
            table.set_header(vec![header_cell("Field"), header_cell("Value")]);
            apply_table_style(&mut table);
            for (key, value) in fields {
                table.add_row(vec![Cell::new(key), Cell::new(scalar_text(value))]);
            }
            out.push_str(&table.to_string());
        }
        other => out.push_str(&pretty_json(other)),
    }
    out
}

fn render_not_found(not_found: &NotFoundView) -> String {
    format!("Page not found: {}", not_found.path)
}

/// Render one `normalize` result, optionally with the intermediate stage.
pub fn render_canonicalization(stages: &Canonicalization, steps: bool) -> String {
    if steps {
        format!(
            "{:?} -> {:?} -> {:?}",
            stages.raw, stages.compact, stages.canonical
        )
    } else {
        stages.canonical.clone()
    }
}

/// Strings without quotes, everything else as compact JSON.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => {
            items.iter().map(unit_label).collect::<Vec<_>>().join(", ")
        }
        other => other.to_string(),
    }
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::views::InputValue;

    #[test]
    fn test_not_found_text() {
        let view = View::NotFound(NotFoundView {
            path: "/nope".to_string(),
        });
        insta::assert_snapshot!(render_view(&view), @"Page not found: /nope");
    }

    #[test]
    fn test_empty_home() {
        let view = View::Home(HomeView { units: json!([]) });
        assert_eq!(render_view(&view), "No units available.");
    }

    #[test]
    fn test_home_lists_units() {
        let view = View::Home(HomeView {
            units: json!([{"name": "length"}, "volume"]),
        });
        let text = render_view(&view);
        assert!(text.starts_with("Units\n"));
        assert!(text.contains("length"));
        assert!(text.contains("volume"));
    }

    #[test]
    fn test_home_non_list_payload() {
        let view = View::Home(HomeView {
            units: json!({"count": 0}),
        });
        assert_eq!(render_view(&view), "Units\n{\n  \"count\": 0\n}");
    }

    #[test]
    fn test_converter_shows_canonical_value() {
        let view = View::Converter(ConverterView {
            unit_name: "length".to_string(),
            detail: json!({"base": "metre", "units": ["metre", "foot"]}),
            input: Some(InputValue {
                raw: "1 000.50".to_string(),
                canonical: "1000.5".to_string(),
            }),
        });
        let text = render_view(&view);
        assert!(text.starts_with("Converter: length\nValue: 1 000.50 -> 1000.5\n"));
        assert!(text.contains("metre, foot"));
    }

    #[test]
    fn test_converter_scalar_detail() {
        let view = View::Converter(ConverterView {
            unit_name: "mass".to_string(),
            detail: json!("kilogram"),
            input: Some(InputValue {
                raw: "3".to_string(),
                canonical: "3".to_string(),
            }),
        });
        insta::assert_snapshot!(render_view(&view), @r#"
        Converter: mass
        Value: 3
        "kilogram"
        "#);
    }

    #[test]
    fn test_canonicalization_steps() {
        let stages = Canonicalization::of("1 000.000");
        assert_eq!(render_canonicalization(&stages, false), "1000");
        insta::assert_snapshot!(
            render_canonicalization(&stages, true),
            @r#""1 000.000" -> "1000.000" -> "1000""#
        );
    }
}
