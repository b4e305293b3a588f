//! Environment summary card
//!
//! One card per environment: a header with the connectivity status and any
//! warnings, and a body that is either the pair of gitops documentation
//! links (repository already bootstrapped) or the bootstrap wizard.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use opsdeck_core::{manifests_folder, repo_names, EnvironmentSummary, RepoLayout};
use opsdeck_app::EnvironmentCardState;

use crate::theme::styles;

/// Card widget over caller-supplied environment facts and per-card state
pub struct EnvironmentCard<'a> {
    env: &'a EnvironmentSummary,
    card: &'a EnvironmentCardState,
}

impl<'a> EnvironmentCard<'a> {
    pub fn new(env: &'a EnvironmentSummary, card: &'a EnvironmentCardState) -> Self {
        Self { env, card }
    }

    /// Card title: environment name, connectivity, initialization warning
    fn title(&self) -> Line<'static> {
        let (icon, icon_style) = if self.env.is_online {
            ("●", styles::status_green())
        } else {
            ("✗", styles::status_red())
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", self.env.name), styles::text_primary()),
            Span::styled(icon, icon_style),
            Span::styled(
                format!(" {} ", self.env.connectivity_label()),
                styles::text_secondary(),
            ),
        ];
        if !self.env.has_gitops_repo {
            spans.push(Span::styled("⚠ uninitiated ", styles::status_yellow()));
        }
        Line::from(spans)
    }

    /// Right-hand header controls, shown for disconnected environments only
    fn offline_controls(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(" Install agent ", styles::link()),
            Span::styled("[o]", styles::keybinding()),
            Span::styled("  ✕ Delete ", styles::status_red()),
            Span::styled("[d] ", styles::keybinding()),
        ])
        .right_aligned()
    }

    /// Two informational links to the environment's gitops repositories
    fn repo_links(&self) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            Line::from(vec![
                Span::styled("Gitops-infra ↗ ", styles::link()),
                Span::styled("[g]", styles::keybinding()),
                Span::raw("    "),
                Span::styled("Gitops-apps ↗ ", styles::link()),
                Span::styled("[a]", styles::keybinding()),
            ]),
        ]
    }

    /// Bootstrap wizard for environments without a gitops repository
    fn bootstrap_wizard(&self) -> Vec<Line<'static>> {
        let env = &self.env.name;
        let enabled = self.card.repo_per_env();
        let shared = repo_names(env, RepoLayout::Shared);
        let dedicated = repo_names(env, RepoLayout::PerEnvironment);
        let shared_folder =
            manifests_folder(env, RepoLayout::Shared).unwrap_or_else(|| env.clone());

        let toggle = if enabled {
            Span::styled("◉ on ", styles::accent_bold())
        } else {
            Span::styled("○ off", styles::text_muted())
        };

        vec![
            Line::default(),
            Line::from(Span::styled(
                "Bootstrap gitops repository",
                styles::text_primary().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "To initialize this environment, bootstrap the gitops repository first",
                styles::text_secondary(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("ℹ ", styles::status_blue()),
                Span::styled(
                    format!(
                        "By default manifests of this environment are placed in the {shared_folder}/ \
                         folder of the shared {} repository",
                        shared.infra
                    ),
                    styles::status_blue(),
                ),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("[t]", styles::keybinding()),
                Span::styled(
                    " Separate environments by git repositories: ",
                    styles::text_primary(),
                ),
                toggle,
            ]),
            Line::from(vec![
                Span::styled(
                    "Manifests will be placed in the environment specific ",
                    styles::text_secondary(),
                ),
                Span::styled(dedicated.infra, styles::accent()),
                Span::styled(" repository", styles::text_secondary()),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("[b]", styles::keybinding()),
                Span::styled(" Bootstrap gitops repository", styles::status_green()),
            ]),
        ]
    }
}

impl Widget for EnvironmentCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(if self.env.is_online {
                styles::border_active()
            } else {
                styles::border_inactive()
            });
        if !self.env.is_online {
            block = block.title_top(self.offline_controls());
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let body = if self.env.has_gitops_repo {
            self.repo_links()
        } else {
            self.bootstrap_wizard()
        };
        Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
