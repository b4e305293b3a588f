//! Tab strip widget for switching between environment views
//!
//! Renders the same descriptor list in one of two forms depending on the
//! width it is given: a compact selector line for narrow terminals, or the
//! full navigation row otherwise. Both forms are derived from the same
//! slice on every render, so they cannot drift apart.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use opsdeck_core::prelude::*;
use opsdeck_core::{find_current, TabDescriptor};

use crate::theme::styles;

/// Width below which the compact selector form is used
pub const DEFAULT_COMPACT_BELOW: u16 = 70;

/// Tab strip over a caller-supplied descriptor list.
///
/// Owns no state; "current" is whatever the descriptors say. Construction
/// rejects a list with no current descriptor instead of guessing a default.
#[derive(Debug)]
pub struct TabStrip<'a> {
    tabs: &'a [TabDescriptor],
    current: &'a TabDescriptor,
    compact_below: u16,
}

impl<'a> TabStrip<'a> {
    /// Build a tab strip, validating the caller contract.
    ///
    /// The first descriptor with `current == true` is the selection; a list
    /// with several current entries is degraded caller input and the first
    /// match wins.
    pub fn new(tabs: &'a [TabDescriptor]) -> Result<Self> {
        if tabs.is_empty() {
            return Err(Error::EmptyTabs);
        }
        let current = find_current(tabs).ok_or(Error::NoCurrentTab)?;
        Ok(Self {
            tabs,
            current,
            compact_below: DEFAULT_COMPACT_BELOW,
        })
    }

    /// Override the width threshold for the compact form
    pub fn compact_below(mut self, width: u16) -> Self {
        self.compact_below = width;
        self
    }

    /// The descriptor the compact form displays
    pub fn current(&self) -> &TabDescriptor {
        self.current
    }

    /// Compact selector: shows the current selection only. Display-only;
    /// switching flows through the navigation keys.
    fn render_compact(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("⌄ ", styles::accent()),
            Span::styled(self.current.name.clone(), styles::tab_active()),
            Span::styled(
                format!("  ({} tabs)", self.tabs.len()),
                styles::text_muted(),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }

    /// Full navigation: one element per tab, emphasis from each
    /// descriptor's own flag.
    fn render_full(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.tabs.len() * 2);
        for (idx, tab) in self.tabs.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted()));
            }
            let style = if tab.current {
                styles::tab_active()
            } else {
                styles::tab_inactive()
            };
            spans.push(Span::styled(format!(" {} ", tab.name), style));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

impl Widget for TabStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < self.compact_below {
            self.render_compact(area, buf);
        } else {
            self.render_full(area, buf);
        }
    }
}
