//! UI rendering for the road game.

use crate::core::config::GameConfig;
use crate::road::{Rect as WorldRect, SessionState, Snapshot};
use crate::ui::game_common::{
    create_game_layout, render_centered_modal, render_info_panel_frame, render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Lane marker spacing and dash length, in world units.
const LANE_MARKER_PERIOD: f64 = 80.0;
const LANE_MARKER_DASH: f64 = 40.0;
/// Lane markers scroll this many world units per second.
const LANE_MARKER_SPEED: f64 = 200.0;

const CRASH_HINT: &str = "Press R to restart, Esc to quit";
const MEDIA_PLAYING: &str = "Video should be playing (default player).";

/// Render the road game scene.
///
/// `elapsed` is wall-clock seconds since start, used only to scroll the
/// lane markers.
pub fn render_road(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot<'_>,
    config: &GameConfig,
    elapsed: f64,
) {
    let border = match snapshot.state {
        SessionState::Playing => Color::Cyan,
        SessionState::Crashed => Color::Red,
    };
    let layout = create_game_layout(frame, area, " Road Crash ", border, 10, 22);

    render_play_area(frame, layout.content, snapshot, config, elapsed);
    render_status_bar_content(frame, layout.status_bar, snapshot);
    render_info_panel(frame, layout.info_panel, snapshot);

    if snapshot.state == SessionState::Crashed {
        let message = snapshot.last_error.unwrap_or(MEDIA_PLAYING);
        render_centered_modal(
            frame,
            layout.content,
            Color::Red,
            "CRASH!",
            message,
            CRASH_HINT,
        );
    }
}

/// What occupies one terminal cell of the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Verge,
    Road,
    LaneMarker,
    Player,
    Obstacle,
}

impl Cell {
    fn span(self) -> Span<'static> {
        match self {
            Cell::Verge => Span::styled(" ", Style::default()),
            Cell::Road => Span::styled(" ", Style::default().bg(Color::DarkGray)),
            Cell::LaneMarker => Span::styled(
                "┃",
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
            Cell::Player => Span::styled(
                "█",
                Style::default()
                    .fg(Color::Green)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::Obstacle => {
                Span::styled("█", Style::default().fg(Color::Red).bg(Color::DarkGray))
            }
        }
    }
}

/// Classify the world point at the center of a cell.
fn classify(
    snapshot: &Snapshot<'_>,
    x: f64,
    y: f64,
    marker_column: bool,
    marker_offset: f64,
) -> Cell {
    let inside =
        |r: &WorldRect| x >= r.left() && x < r.right() && y >= r.top() && y < r.bottom();

    if inside(&snapshot.player.rect) {
        return Cell::Player;
    }
    if snapshot.obstacles.iter().any(|o| inside(&o.rect)) {
        return Cell::Obstacle;
    }
    if x < snapshot.track.left || x >= snapshot.track.right {
        return Cell::Verge;
    }
    if marker_column && (y - marker_offset).rem_euclid(LANE_MARKER_PERIOD) < LANE_MARKER_DASH {
        return Cell::LaneMarker;
    }
    Cell::Road
}

/// Render the road, scaled from world units to terminal cells.
fn render_play_area(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot<'_>,
    config: &GameConfig,
    elapsed: f64,
) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }

    let x_scale = config.screen_width / width as f64;
    let y_scale = config.screen_height / height as f64;
    let marker_col = ((config.screen_width / 2.0) / x_scale) as usize;
    let marker_offset = elapsed * LANE_MARKER_SPEED;

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let y = (row as f64 + 0.5) * y_scale;
        let spans: Vec<Span> = (0..width)
            .map(|col| {
                let x = (col as f64 + 0.5) * x_scale;
                classify(snapshot, x, y, col == marker_col, marker_offset).span()
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);

    // HUD
    let hud = format!("Score: {}", snapshot.score);
    let hud_area = Rect {
        width: area.width.min(hud.chars().count() as u16),
        height: 1,
        ..area
    };
    frame.render_widget(
        Paragraph::new(hud).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        hud_area,
    );
}

/// Render the status bar at the bottom.
fn render_status_bar_content(frame: &mut Frame, area: Rect, snapshot: &Snapshot<'_>) {
    match snapshot.state {
        SessionState::Playing => render_status_bar(
            frame,
            area,
            "Dodge the traffic!",
            Color::Green,
            &[("[←/→ A/D]", "Steer"), ("[Esc]", "Quit")],
        ),
        SessionState::Crashed => render_status_bar(
            frame,
            area,
            "CRASH!",
            Color::Red,
            &[("[R]", "Restart"), ("[Esc]", "Quit")],
        ),
    }
}

/// Render the info panel on the right.
fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot<'_>) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let (state_label, state_color) = match snapshot.state {
        SessionState::Playing => ("Driving", Color::Green),
        SessionState::Crashed => ("Crashed", Color::Red),
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", state_label),
            Style::default()
                .fg(state_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snapshot.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1}", snapshot.obstacle_speed),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Traffic: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snapshot.obstacles.len()),
                Style::default().fg(Color::Red),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
