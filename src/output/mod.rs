//! Output formats for the PodVolumeBackup report.
//!
//! Every formatter is a pure function of the already filtered and sorted rows
//! plus the resolved [`Theme`]. Only the `pretty` format looks at the theme.

mod csv;
mod json;
mod pretty;
mod table;
mod yaml;

pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use pretty::PrettyFormatter;
pub use table::TableFormatter;
pub use yaml::YamlFormatter;

use clap::ValueEnum;

use crate::error::RenderResult;
use crate::theme::Theme;
use crate::types::Row;

/// Column headers shared by the table and CSV formats.
pub const HEADERS: [&str; 5] = ["Pod name", "Pod namespace", "Volume", "Size", "Created"];

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    #[value(alias = "structured-text")]
    Yaml,
    #[value(alias = "delimited-text")]
    Csv,
    #[value(alias = "decorated-text")]
    Pretty,
}

pub trait OutputFormatter {
    fn format(rows: &[Row], theme: Theme) -> RenderResult<String>;
}

/// Encode rows in the requested format.
pub fn render(rows: &[Row], format: OutputFormat, theme: Theme) -> RenderResult<String> {
    match format {
        OutputFormat::Table => TableFormatter::format(rows, theme),
        OutputFormat::Json => JsonFormatter::format(rows, theme),
        OutputFormat::Yaml => YamlFormatter::format(rows, theme),
        OutputFormat::Csv => CsvFormatter::format(rows, theme),
        OutputFormat::Pretty => PrettyFormatter::format(rows, theme),
    }
}

fn table_cells(row: &Row) -> [&str; 5] {
    [
        row.pod_name.as_str(),
        row.pod_namespace.as_str(),
        row.volume.as_str(),
        row.size_display(),
        row.created_display(),
    ]
}
