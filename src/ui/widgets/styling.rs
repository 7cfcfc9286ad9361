use crate::screening::content::Tone;
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text.to_color())
        .bg(theme.background.to_color())
}

/// Return the style for hints and other secondary text.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for the banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.banner.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the blocking warning text.
///
pub fn warning_style(theme: &Theme) -> Style {
    Style::default().fg(theme.warning.to_color())
}

/// Return the style for a filled button.
///
pub fn button_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.button_fg.to_color())
        .bg(theme.button_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the selected segment of a picker.
///
pub fn selected_option_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.background.to_color())
        .bg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for a content segment.
///
pub fn tone_style(theme: &Theme, tone: Tone) -> Style {
    let base = Style::default().fg(theme.text.to_color());
    match tone {
        Tone::Plain => base,
        Tone::Strong => base.add_modifier(Modifier::BOLD),
        Tone::Italic => base.add_modifier(Modifier::ITALIC),
        Tone::Clear => base
            .fg(theme.clear.to_color())
            .add_modifier(Modifier::BOLD),
        Tone::NotClear => base
            .fg(theme.not_clear.to_color())
            .add_modifier(Modifier::BOLD),
        Tone::Warning => base.fg(theme.warning.to_color()),
        Tone::Contact => base
            .fg(theme.link.to_color())
            .add_modifier(Modifier::ITALIC),
        Tone::Link(_) => base
            .fg(theme.link.to_color())
            .add_modifier(Modifier::UNDERLINED),
    }
}
