use super::OutputFormatter;
use crate::error::RenderResult;
use crate::theme::Theme;
use crate::types::Row;

pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(rows: &[Row], _theme: Theme) -> RenderResult<String> {
        Ok(serde_yaml::to_string(rows)?)
    }
}
