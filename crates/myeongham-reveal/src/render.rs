//! Terminal presentation of content blocks.

use myeongham_core::Language;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::block::{Block, SegmentStyle};
use crate::sequencer::BlockView;

/// Trailing cursor glyph shown while a block is typing.
pub const CURSOR_CHAR: char = '█';

/// Terminal style for a segment role.
pub fn segment_style(style: SegmentStyle) -> Style {
    match style {
        SegmentStyle::Normal => Style::new(),
        SegmentStyle::Heading => Style::new().add_modifier(Modifier::BOLD),
        SegmentStyle::Accent => Style::new().fg(Color::Green),
        SegmentStyle::Dim => Style::new().fg(Color::DarkGray),
        SegmentStyle::Link => Style::new()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
        SegmentStyle::Tag => Style::new().fg(Color::DarkGray),
    }
}

/// Render one block at its current reveal progress.
///
/// A typing block shows an unstyled prefix of the plain projection plus
/// the cursor; a full block re-applies the captured segments verbatim.
pub fn block_line(block: &Block, view: BlockView, lang: Language) -> Line<'static> {
    match view {
        BlockView::Hidden => Line::default(),
        BlockView::Typing(cursor) => {
            let prefix: String = block.plain(lang).chars().take(cursor).collect();
            Line::from(vec![
                Span::raw(prefix),
                Span::styled(CURSOR_CHAR.to_string(), Style::new().fg(Color::Green)),
            ])
        }
        BlockView::Full => Line::from(
            block
                .segments
                .iter()
                .map(|s| Span::styled(s.text(lang).to_string(), segment_style(s.style)))
                .collect::<Vec<Span>>(),
        ),
    }
}
