use super::OutputFormatter;
use crate::error::RenderResult;
use crate::theme::Theme;
use crate::types::Row;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(rows: &[Row], _theme: Theme) -> RenderResult<String> {
        let mut out = serde_json::to_string_pretty(rows)?;
        out.push('\n');
        Ok(out)
    }
}
