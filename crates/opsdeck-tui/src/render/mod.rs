//! Main render/view function (View in TEA pattern)

use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use opsdeck_app::AppState;
use opsdeck_core::prelude::*;

use crate::theme::{palette, styles};
use crate::widgets::{EnvironmentCard, MainHeader, StatusBar, TabStrip};
use crate::layout;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering over the state; operator intent is handled elsewhere.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(MainHeader::new(state), areas.header);

    // The descriptor list is rebuilt from authoritative state every render
    let tabs = state.tabs();
    if !tabs.is_empty() {
        match TabStrip::new(&tabs) {
            Ok(strip) => frame.render_widget(
                strip.compact_below(state.settings.ui.compact_tabs_below),
                areas.tabs,
            ),
            Err(err) => warn!("Tab strip rejected descriptors: {err}"),
        }
    }

    match (state.selected_env(), state.selected_card()) {
        (Some(env), Some(card)) => {
            frame.render_widget(EnvironmentCard::new(env, card), areas.card);
        }
        _ => {
            let placeholder = Paragraph::new(vec![
                Line::default(),
                Line::styled("No environments in this snapshot", styles::text_secondary()),
                Line::styled(
                    "Point opsdeck at a deploy snapshot file to populate the dashboard",
                    styles::text_muted(),
                ),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(placeholder, areas.card);
        }
    }

    frame.render_widget(StatusBar::new(state), areas.footer);
}
