//! UI rendering for the game scene.
//!
//! The play area maps logical board units onto terminal cells, so the same
//! simulation renders at any terminal size. Missing visuals degrade to plain
//! glyphs; nothing here feeds back into the simulation.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::*;
use crate::game::types::{GameSession, GameState, Rectf};

/// Render the whole session: play area, status bar, and any overlay.
pub fn render_session(frame: &mut Frame, area: Rect, session: &GameSession) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Skyward ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(inner);

    render_play_area(frame, chunks[0], session);
    render_status_bar(frame, chunks[1], session);

    match session.state {
        GameState::Menu => render_menu_overlay(frame, area),
        GameState::GameOver => render_game_over_overlay(frame, area, session),
        GameState::Running => {}
    }
}

/// Render the scrolling world: sky, clouds, pipes, ground, particles, bird.
fn render_play_area(frame: &mut Frame, area: Rect, session: &GameSession) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    // Cell -> logical board coordinate scale.
    let x_scale = BOARD_WIDTH / width as f32;
    let y_scale = BOARD_HEIGHT / height as f32;

    let bird_rect = session.bird.rect();

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let game_y = (row as f32 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);
        for col in 0..width {
            let game_x = (col as f32 + 0.5) * x_scale;
            spans.push(cell_span(session, &bird_rect, game_x, game_y));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Pick the glyph for one cell. Draw order mirrors the paint order of the
/// scene: bird on top, then particles, ground band, pipes, clouds, sky.
fn cell_span(session: &GameSession, bird_rect: &Rectf, game_x: f32, game_y: f32) -> Span<'static> {
    if game_x >= bird_rect.x
        && game_x < bird_rect.x + bird_rect.w
        && game_y >= bird_rect.y
        && game_y < bird_rect.y + bird_rect.h
    {
        return Span::styled(
            bird_glyph(session),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    }

    for particle in &session.particles {
        if (game_x - particle.x).abs() <= particle.size
            && (game_y - particle.y).abs() <= particle.size
        {
            let glyph = if particle.alpha > 0.66 {
                "●"
            } else if particle.alpha > 0.33 {
                "•"
            } else {
                "·"
            };
            return Span::styled(glyph, Style::default().fg(Color::White));
        }
    }

    // Ground band covers pipes, scrolled by the ground offset.
    if game_y >= BOARD_HEIGHT - GROUND_HEIGHT {
        let shifted = (game_x - session.ground_offset).rem_euclid(BOARD_WIDTH);
        let glyph = if (shifted / 12.0) as u32 % 2 == 0 {
            "▓"
        } else {
            "▒"
        };
        return Span::styled(glyph, Style::default().fg(Color::Rgb(160, 120, 60)));
    }

    for pipe in &session.pipes {
        if game_x >= pipe.x && game_x < pipe.x + PIPE_WIDTH {
            let in_top = game_y < pipe.y + PIPE_HEIGHT;
            let in_bottom = game_y >= pipe.y + PIPE_HEIGHT + PIPE_GAP;
            if in_top || in_bottom {
                return Span::styled("█", Style::default().fg(Color::Green));
            }
        }
    }

    // Cloud band between 50 and 150 board units, seamless horizontal loop.
    if (50.0..150.0).contains(&game_y) {
        let shifted = (game_x + session.cloud_offset).rem_euclid(BOARD_WIDTH);
        if (shifted / 24.0) as u32 % 3 == 0 {
            return Span::styled("~", Style::default().fg(Color::White));
        }
    }

    Span::raw(" ")
}

fn bird_glyph(session: &GameSession) -> &'static str {
    // Wing flutter only shows in the level pose; the tilt poses win.
    const LEVEL_FRAMES: [&str; BIRD_FRAME_COUNT] = ["►", "▶", "▷"];

    let bird = &session.bird;
    if bird.angle < 0.0 {
        "▲"
    } else if bird.angle >= 30.0 {
        "▼"
    } else {
        LEVEL_FRAMES[bird.frame % BIRD_FRAME_COUNT]
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, session: &GameSession) {
    let (message, color) = match session.state {
        GameState::Menu => ("Press Enter to start".to_string(), Color::Yellow),
        GameState::Running => (
            format!("Score: {}  High: {}", session.score, session.high_score),
            Color::Green,
        ),
        GameState::GameOver => ("Crashed! Press Space to restart".to_string(), Color::Red),
    };

    let line = Line::from(vec![
        Span::styled(format!(" {}", message), Style::default().fg(color)),
        Span::raw("   "),
        Span::styled("[Space]", Style::default().fg(Color::Cyan)),
        Span::styled(" Flap  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Q]", Style::default().fg(Color::Cyan)),
        Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_menu_overlay(frame: &mut Frame, area: Rect) {
    let rect = centered_rect(area, 30, 7);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let lines = vec![
        Line::from(Span::styled(
            "SKYWARD",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press ENTER to Start"),
        Line::from(Span::styled(
            "Q to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        rect,
    );
}

fn render_game_over_overlay(frame: &mut Frame, area: Rect, session: &GameSession) {
    let rect = centered_rect(area, 34, 8);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Score: {}", session.score)),
        Line::from(format!("High Score: {}", session.high_score)),
        Line::from(""),
        Line::from("Press SPACE to Restart"),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        rect,
    );
}

/// A fixed-size rect centered in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
