//! CSV output formatting for subnet plans.

use super::PlanRow;

const CSV_HEADER: &str = r#""position","request","requested_hosts","subnet_cidr","host_range","broadcast","usable_hosts""#;

/// Quote a field when it holds a comma or double quote.
///
/// Double quotes inside the field are doubled. No spaces are added after the
/// separating commas, spreadsheets read those into the value.
fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        let escaped = input.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        input.to_string()
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Render rows as CSV with a header line.
pub fn render_csv(rows: &[PlanRow]) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    for row in rows {
        lines.push(
            [
                row.position.to_string(),
                optional(row.request),
                optional(row.requested_hosts),
                row.subnet_cidr.clone(),
                row.host_range.clone(),
                row.broadcast.clone(),
                row.usable_hosts.to_string(),
            ]
            .iter()
            .map(|field| escape_csv_field(field))
            .collect::<Vec<String>>()
            .join(","),
        );
    }
    lines.join("\n")
}
