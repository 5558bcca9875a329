use std::io::IsTerminal;
use std::sync::{Mutex, MutexGuard};

use clap::ValueEnum;
use crossterm::style::{Color, Colored, Stylize, style};

/// Serializes access to crossterm's process-wide color switch.
static ANSI_COLORS: Mutex<()> = Mutex::new(());

fn ansi_colors_lock() -> MutexGuard<'static, ()> {
    ANSI_COLORS.lock().unwrap_or_else(|e| e.into_inner())
}

/// `--color` flag values.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolved styling decision for decorated output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Theme {
    styled: bool,
}

impl Theme {
    #[cfg(test)]
    pub fn plain() -> Self {
        Self { styled: false }
    }

    #[cfg(test)]
    pub fn styled() -> Self {
        Self { styled: true }
    }

    pub fn is_styled(&self) -> bool {
        self.styled
    }

    /// Decide from the mode and the ambient signals, without touching the environment.
    pub fn resolve(mode: ColorMode, no_color: bool, interactive: bool) -> Self {
        let styled = match mode {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => !no_color && interactive,
        };
        Self { styled }
    }

    /// Read `NO_COLOR` and the stdout terminal state once and resolve.
    pub fn detect(mode: ColorMode) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        let interactive = std::io::stdout().is_terminal();
        Self::resolve(mode, no_color, interactive)
    }

    fn paint(&self, s: &str, color: Option<Color>, bold: bool, dim: bool) -> String {
        if !self.styled || s.is_empty() {
            return s.to_string();
        }
        // crossterm drops colors when NO_COLOR is set. A styled theme already decided.
        let _guard = ansi_colors_lock();
        Colored::set_ansi_color_disabled(false);

        let mut styled = style(s);
        if let Some(color) = color {
            styled = styled.with(color);
        }
        if bold {
            styled = styled.bold();
        }
        if dim {
            styled = styled.dim();
        }
        styled.to_string()
    }

    pub fn title(&self, s: &str) -> String {
        self.paint(s, Some(Color::Blue), true, false)
    }

    pub fn label(&self, s: &str) -> String {
        self.paint(s, Some(Color::Cyan), false, false)
    }

    pub fn value(&self, s: &str) -> String {
        self.paint(s, Some(Color::White), false, false)
    }

    pub fn strong(&self, s: &str) -> String {
        self.paint(s, Some(Color::White), true, false)
    }

    pub fn secondary(&self, s: &str) -> String {
        self.paint(s, None, false, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_and_always_ignore_signals() {
        for no_color in [false, true] {
            for interactive in [false, true] {
                assert!(!Theme::resolve(ColorMode::Never, no_color, interactive).is_styled());
                assert!(Theme::resolve(ColorMode::Always, no_color, interactive).is_styled());
            }
        }
    }

    #[test]
    fn test_auto_needs_terminal_and_no_override() {
        assert!(Theme::resolve(ColorMode::Auto, false, true).is_styled());
        assert!(!Theme::resolve(ColorMode::Auto, false, false).is_styled());
        assert!(!Theme::resolve(ColorMode::Auto, true, true).is_styled());
        assert!(!Theme::resolve(ColorMode::Auto, true, false).is_styled());
    }

    #[test]
    fn test_plain_theme_passes_text_through() {
        let theme = Theme::plain();
        assert_eq!(theme.label("Pod:"), "Pod:");
        assert_eq!(theme.strong("nightly"), "nightly");
        assert_eq!(theme.secondary("(3 items)"), "(3 items)");
    }

    #[test]
    fn test_styled_spans_are_wrapped() {
        let theme = Theme::styled();
        for s in [
            theme.title("PodVolumeBackup"),
            theme.strong("nightly"),
            theme.secondary("(3 items)"),
        ] {
            assert!(s.starts_with("\x1b["), "missing escape in {:?}", s);
            assert!(s.ends_with('m'), "missing reset in {:?}", s);
        }
        assert_ne!(theme.label("x"), theme.secondary("x"));
        assert_ne!(theme.value("x"), theme.strong("x"));
    }

    #[test]
    fn test_styled_categories_ignore_crossterm_color_switch() {
        {
            let _guard = ansi_colors_lock();
            Colored::set_ansi_color_disabled(true);
        }
        let theme = Theme::styled();
        let label = theme.label("x");
        let value = theme.value("x");
        assert_ne!(label, value, "label={:?} value={:?}", label, value);
        assert!(!label.contains("\x1b[m"), "color stripped from {:?}", label);
        assert_ne!(theme.title("x"), theme.strong("x"));
    }

    #[test]
    fn test_empty_text_is_never_styled() {
        let theme = Theme::styled();
        assert_eq!(theme.value(""), "");
        assert_eq!(theme.strong(""), "");
    }
}
