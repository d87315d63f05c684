//! Terminal table output.

use super::PlanRow;
use colored::Colorize;

/// Format a value as a right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A right-aligned string, never truncated
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:>width$}")
    }
}

const HEADERS: [&str; 7] = [
    "#",
    "request",
    "subnet_cidr",
    "host_range",
    "broadcast",
    "hosts",
    "wanted",
];

fn row_cells(row: &PlanRow) -> [String; 7] {
    [
        row.position.to_string(),
        row.request.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()),
        row.subnet_cidr.clone(),
        row.host_range.clone(),
        row.broadcast.clone(),
        row.usable_hosts.to_string(),
        row.requested_hosts
            .map(|h| h.to_string())
            .unwrap_or_else(|| "-".to_string()),
    ]
}

/// Render rows as an aligned table with a highlighted header line.
///
/// The request columns are left out when no row carries a request (CIDR plans).
pub fn render_table(rows: &[PlanRow]) -> String {
    let with_requests = rows.iter().any(|row| row.request.is_some());
    let keep = |column: usize| with_requests || !matches!(column, 1 | 6);

    let cells: Vec<[String; 7]> = rows.iter().map(row_cells).collect();
    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let header = HEADERS
        .iter()
        .enumerate()
        .filter(|(column, _)| keep(*column))
        .map(|(column, name)| format_field(name, widths[column]))
        .collect::<Vec<String>>()
        .join("  ");

    let mut lines = vec![header.bold().underline().to_string()];
    for row in &cells {
        lines.push(
            row.iter()
                .enumerate()
                .filter(|(column, _)| keep(*column))
                .map(|(column, cell)| format_field(cell, widths[column]))
                .collect::<Vec<String>>()
                .join("  "),
        );
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(request: Option<usize>) -> PlanRow {
        PlanRow {
            position: 1,
            request,
            requested_hosts: request.map(|_| 60),
            subnet_cidr: "192.168.1.0/26".to_string(),
            host_range: "192.168.1.1 - 192.168.1.62".to_string(),
            broadcast: "192.168.1.63".to_string(),
            usable_hosts: 62,
        }
    }

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "      test");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 4), "test");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "long_value");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "    42");
    }

    #[test]
    fn test_render_table_cidr() {
        let table = render_table(&[row(None)]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("subnet_cidr"));
        assert!(!lines[0].contains("request"));
        assert_eq!(
            lines[1],
            "1  192.168.1.0/26  192.168.1.1 - 192.168.1.62  192.168.1.63     62"
        );
    }

    #[test]
    fn test_render_table_vlsm() {
        let table = render_table(&[row(Some(3))]);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].contains("request"));
        assert!(lines[0].contains("wanted"));
        assert!(lines[1].ends_with("62      60"));
    }

    #[test]
    fn test_render_table_without_color() {
        colored::control::set_override(false);
        let table = render_table(&[row(Some(1))]);
        colored::control::unset_override();
        assert!(!table.contains('\x1b'));
        assert!(table.starts_with("#  request"));
    }
}
