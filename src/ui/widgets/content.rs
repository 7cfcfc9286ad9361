use crate::screening::content::{ScreenContent, Tone};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Build the paragraph for a screen's content, with link hotkeys appended.
///
pub fn paragraph(content: &ScreenContent, theme: &Theme) -> Paragraph<'static> {
    let lines: Vec<Line> = content
        .lines
        .iter()
        .map(|line| {
            let mut spans: Vec<Span> = line
                .iter()
                .map(|segment| {
                    Span::styled(
                        segment.text.clone(),
                        styling::tone_style(theme, segment.tone),
                    )
                })
                .collect();
            for segment in line {
                if let Tone::Link(link) = segment.tone {
                    spans.push(Span::styled(
                        format!(" [{}]", link.hotkey()),
                        styling::muted_text_style(theme),
                    ));
                }
            }
            Line::from(spans)
        })
        .collect();

    Paragraph::new(Text::from(lines))
        .style(styling::normal_text_style(theme))
        .wrap(Wrap { trim: false })
}

/// Same as `paragraph`, framed in a titled block.
///
pub fn framed_paragraph(content: &ScreenContent, theme: &Theme) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(content.title, styling::banner_style(theme)))
        .border_style(styling::normal_block_border_style(theme))
        .style(styling::normal_text_style(theme));
    paragraph(content, theme).block(block)
}
