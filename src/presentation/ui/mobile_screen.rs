//! Mobile KPI screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use tracing::{debug, warn};

use crate::domain::entities::{KpiSnapshot, format_number};
use crate::domain::errors::ApiError;
use crate::presentation::theme::Palette;

/// Static screen title.
pub const TITLE: &str = "ANALYTIC.A PRO";
/// Label in front of the member count.
pub const MEMBERS_LABEL: &str = "Membros: ";

/// Title plus member count, fetched once on mount.
#[derive(Debug, Default)]
pub struct MobileKpiScreen {
    members: f64,
    mounted: bool,
    palette: Palette,
}

impl MobileKpiScreen {
    /// Creates an unmounted screen showing zero members.
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self {
            members: 0.0,
            mounted: false,
            palette,
        }
    }

    /// Changes the colors.
    pub const fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Claims the mount fetch. Returns `true` only on the first call; the
    /// caller then issues the fetch and passes its result to
    /// [`finish_mount`](Self::finish_mount).
    pub const fn begin_mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        true
    }

    /// Stores the fetched member count. A failed fetch keeps the current count.
    pub fn finish_mount(&mut self, result: Result<KpiSnapshot, ApiError>) {
        match result {
            Ok(snapshot) => {
                debug!(members = snapshot.members, "Mobile screen loaded");
                self.members = snapshot.members;
            }
            Err(e) => warn!(error = %e, "Mobile screen failed to load indicators"),
        }
    }

    fn member_count(&self) -> String {
        format_number(self.members)
    }
}

impl Widget for &MobileKpiScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(self.palette.base_style())
            .render(area, buf);

        let layout = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ]);
        let [_, title_area, _, members_area, _] = layout.areas(area);

        Paragraph::new(Line::from(TITLE).style(self.palette.title_style()))
            .alignment(Alignment::Center)
            .render(title_area, buf);

        let members = Line::from(vec![
            Span::styled(MEMBERS_LABEL, self.palette.dimmed_style()),
            Span::styled(self.member_count(), self.palette.base_style()),
        ]);
        Paragraph::new(members)
            .alignment(Alignment::Center)
            .render(members_area, buf);
    }
}
