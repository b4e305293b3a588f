//! Bottom status bar with contextual key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use opsdeck_app::AppState;

use crate::theme::styles;

/// Key hints matching the affordances currently on screen
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![("q", "Quit")];
        if self.state.environments().len() > 1 {
            hints.push(("Tab", "Next"));
            hints.push(("S-Tab", "Prev"));
        }
        if let Some(env) = self.state.selected_env() {
            if !env.has_gitops_repo {
                hints.push(("t", "Toggle layout"));
                hints.push(("b", "Bootstrap"));
            } else {
                hints.push(("g", "Infra docs"));
                hints.push(("a", "Apps docs"));
            }
            if !env.is_online {
                hints.push(("o", "Install agent"));
                hints.push(("d", "Delete"));
            }
        }
        hints
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled(format!("[{key}]"), styles::keybinding()));
            spans.push(Span::styled(format!(" {label}  "), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
