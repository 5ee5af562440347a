//! UI rendering for the lyrics presentation.

use crate::lyrics::{LyricsPresentation, LyricsSource};
use crate::ui::game_common::{create_game_layout, render_info_panel_frame, render_status_bar};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the lyrics scene: current line centered, progress on the right.
pub fn render_lyrics(frame: &mut Frame, area: Rect, presentation: &LyricsPresentation) {
    let title = format!(" {} ", presentation.title);
    let layout = create_game_layout(frame, area, &title, Color::Magenta, 3, 22);

    render_current_line(frame, layout.content, presentation);
    render_status_bar_content(frame, layout.status_bar, presentation);
    render_info_panel(frame, layout.info_panel, presentation);
}

fn render_current_line(frame: &mut Frame, area: Rect, presentation: &LyricsPresentation) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let Some(line) = presentation.reveal.current() else {
        return;
    };

    // Vertically center a single (possibly wrapped) line.
    let text_rows = (line.chars().count() as u16 / area.width.max(1)) + 1;
    let top = area.y + area.height.saturating_sub(text_rows) / 2;
    let text_area = Rect {
        y: top,
        height: area.bottom().saturating_sub(top),
        ..area
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        line,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, text_area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, presentation: &LyricsPresentation) {
    let controls = [("[Esc/Q/Enter]", "Close")];

    if let Some(notice) = &presentation.notice {
        render_status_bar(frame, area, notice, Color::Yellow, &controls);
    } else if presentation.is_audio_playing() {
        render_status_bar(frame, area, "♪ Music playing", Color::Green, &controls);
    } else {
        render_status_bar(frame, area, "", Color::DarkGray, &controls);
    }
}

fn source_label(source: LyricsSource) -> &'static str {
    match source {
        LyricsSource::File => "Lyrics file",
        LyricsSource::SampleMissing => "Sample (no file)",
        LyricsSource::SampleEmpty => "Sample (empty file)",
        LyricsSource::SampleUnreadable => "Sample (unreadable)",
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, presentation: &LyricsPresentation) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let reveal = &presentation.reveal;
    let lines = vec![
        Line::from(vec![
            Span::styled(" Line: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} / {}", reveal.position(), reveal.len()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", source_label(presentation.source)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            if reveal.is_finished() {
                " Finished"
            } else {
                " Playing"
            },
            Style::default().fg(Color::Cyan),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
