//! Main header widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use opsdeck_app::AppState;

use crate::theme::styles;

/// Top row: app title, environment count, snapshot age
pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = self.state.environments().len();
        let mut spans = vec![
            Span::styled(" Opsdeck", styles::accent_bold()),
            Span::styled("  │ ", styles::text_muted()),
            Span::styled(
                match count {
                    1 => "1 environment".to_string(),
                    n => format!("{n} environments"),
                },
                styles::text_secondary(),
            ),
        ];
        if let Some(fetched_at) = self.state.fetched_at {
            spans.push(Span::styled(
                format!("  (snapshot from {})", fetched_at.format("%Y-%m-%d %H:%M UTC")),
                styles::text_muted(),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_app::config::Settings;
    use opsdeck_core::{DeploySnapshot, EnvironmentSummary};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(MainHeader::new(state), f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_header_shows_environment_count() {
        let snapshot = DeploySnapshot {
            environments: vec![
                EnvironmentSummary::new("staging", true, true),
                EnvironmentSummary::new("production", true, true),
            ],
            fetched_at: None,
        };
        let state = AppState::from_snapshot(Settings::default(), snapshot);
        let content = render(&state);
        assert!(content.contains("Opsdeck"));
        assert!(content.contains("2 environments"));
    }

    #[test]
    fn test_header_singular_count() {
        let snapshot = DeploySnapshot {
            environments: vec![EnvironmentSummary::new("staging", true, true)],
            fetched_at: None,
        };
        let state = AppState::from_snapshot(Settings::default(), snapshot);
        assert!(render(&state).contains("1 environment"));
    }
}
