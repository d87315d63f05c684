//! Output formatting for subnet plans.
//!
//! This module handles formatting and outputting computed subnets:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - aligned table output with colors
//! - JSON output straight from [`PlanRow`] via serde

mod csv;
mod terminal;

pub use csv::render_csv;
pub use terminal::{format_field, render_table};

use crate::models::{SubnetDetails, VlsmAssignment};
use serde::Serialize;
use std::error::Error;
use std::io::{IsTerminal, Write};
use std::str::FromStr;

/// How a plan is written to stdout.
#[derive(clap::ValueEnum, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <OutputFormat as clap::ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| format!("unknown output format '{s}' (expected table, csv or json)"))
    }
}

/// One row of a rendered plan.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanRow {
    /// 1-based position in the plan.
    pub position: usize,
    /// 1-based position of the originating request (VLSM only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<usize>,
    /// Host count that was asked for (VLSM only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_hosts: Option<u64>,
    pub subnet_cidr: String,
    pub host_range: String,
    pub broadcast: String,
    pub usable_hosts: u64,
}

impl PlanRow {
    fn from_details(position: usize, details: &SubnetDetails) -> PlanRow {
        PlanRow {
            position,
            request: None,
            requested_hosts: None,
            subnet_cidr: details.cidr(),
            host_range: details.host_range_text(),
            broadcast: details.broadcast.to_string(),
            usable_hosts: details.usable_hosts,
        }
    }
}

/// Rows for a CIDR plan, in allocation order.
pub fn cidr_rows(subnets: &[SubnetDetails]) -> Vec<PlanRow> {
    subnets
        .iter()
        .enumerate()
        .map(|(i, details)| PlanRow::from_details(i + 1, details))
        .collect()
}

/// Rows for a VLSM plan, in allocation order, annotated with their request.
pub fn vlsm_rows(assignments: &[VlsmAssignment]) -> Vec<PlanRow> {
    assignments
        .iter()
        .enumerate()
        .map(|(i, assignment)| PlanRow {
            request: Some(assignment.request_index + 1),
            requested_hosts: Some(assignment.requested_hosts),
            ..PlanRow::from_details(i + 1, &assignment.details)
        })
        .collect()
}

/// Render rows as a pretty JSON array.
pub fn render_json(rows: &[PlanRow]) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Render rows in the requested format.
pub fn render(rows: &[PlanRow], format: OutputFormat) -> Result<String, Box<dyn Error>> {
    log::debug!("render {} rows as {format:?}", rows.len());
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Csv => Ok(render_csv(rows)),
        OutputFormat::Json => render_json(rows),
    }
}

/// Write rows to `out` in the requested format.
pub fn write_plan<W: Write>(
    out: &mut W,
    rows: &[PlanRow],
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    writeln!(out, "{}", render(rows, format)?)?;
    out.flush()?;
    Ok(())
}

/// Print rows to stdout in the requested format.
///
/// A closed stdout (e.g. piping into `head`) comes back as an error.
pub fn print_plan(rows: &[PlanRow], format: OutputFormat) -> Result<(), Box<dyn Error>> {
    write_plan(&mut std::io::stdout().lock(), rows, format)
}

/// Turn off `colored` styling when stdout is not a terminal.
pub fn disable_color_unless_terminal() {
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ipv4;
    use crate::processing::{allocate_cidr, allocate_vlsm};

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!(" json ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_cidr_rows() {
        let base = Ipv4::new("192.168.1.0/24").unwrap();
        let rows = cidr_rows(&allocate_cidr(&base, 2).unwrap());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].position, 2);
        assert_eq!(rows[1].subnet_cidr, "192.168.1.128/25");
        assert_eq!(rows[1].host_range, "192.168.1.129 - 192.168.1.254");
        assert_eq!(rows[1].broadcast, "192.168.1.255");
        assert_eq!(rows[1].usable_hosts, 126);
        assert_eq!(rows[1].request, None);
    }

    #[test]
    fn test_vlsm_rows() {
        let base = Ipv4::new("192.168.1.0/24").unwrap();
        let rows = vlsm_rows(&allocate_vlsm(&base, &[10, 60]).unwrap());
        assert_eq!(rows[0].request, Some(2));
        assert_eq!(rows[0].requested_hosts, Some(60));
        assert_eq!(rows[1].request, Some(1));
        assert_eq!(rows[1].subnet_cidr, "192.168.1.64/28");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_plan() {
        let base = Ipv4::new("10.0.0.0/24").unwrap();
        let rows = cidr_rows(&allocate_cidr(&base, 2).unwrap());
        let mut out = Vec::new();
        write_plan(&mut out, &rows, OutputFormat::Csv).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("10.0.0.128/25,10.0.0.129 - 10.0.0.254,10.0.0.255,126\n"));
    }

    #[test]
    fn test_write_plan_closed_pipe() {
        let base = Ipv4::new("10.0.0.0/24").unwrap();
        let rows = cidr_rows(&allocate_cidr(&base, 2).unwrap());
        let err = write_plan(&mut ClosedPipe, &rows, OutputFormat::Json).unwrap_err();
        let io_err = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io_err.kind(), std::io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_render_json() {
        let base = Ipv4::new("10.0.0.0/30").unwrap();
        let rows = cidr_rows(&allocate_cidr(&base, 1).unwrap());
        let json: serde_json::Value =
            serde_json::from_str(&render(&rows, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json[0]["subnet_cidr"], "10.0.0.0/30");
        assert_eq!(json[0]["host_range"], "10.0.0.1 - 10.0.0.2");
        assert_eq!(json[0]["usable_hosts"], 2);
        assert!(json[0].get("request").is_none());
    }
}
