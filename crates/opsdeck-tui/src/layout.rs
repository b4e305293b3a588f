//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// App title row
    pub header: Rect,

    /// Tab strip row
    pub tabs: Rect,

    /// Environment card area
    pub card: Rect,

    /// Key hint row
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(2), // Tabs + breathing room
        Constraint::Min(8),    // Card
        Constraint::Length(1), // Footer
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        tabs: chunks[1],
        card: chunks[2],
        footer: chunks[3],
    }
}
