use super::{HEADERS, OutputFormatter, table_cells};
use crate::error::{RenderError, RenderResult};
use crate::theme::Theme;
use crate::types::Row;

pub struct CsvFormatter;

impl OutputFormatter for CsvFormatter {
    fn format(rows: &[Row], _theme: Theme) -> RenderResult<String> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(HEADERS)?;
        for row in rows {
            writer.write_record(table_cells(row))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| RenderError::CsvFlush(e.to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }
}
