//! Stateless UI rendering for the flag game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

use super::app::{App, Dialog};
use super::input::FlagSlot;
use crate::games::flags::{CountryCode, RandomSource, RoundState};
use crate::store::HighScoreStore;

/// Renders the whole screen: prompt, three flags, score line, and any dialog.
pub fn draw<R: RandomSource, S: HighScoreStore>(frame: &mut Frame, app: &App<R, S>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(4),  // Prompt
            Constraint::Min(9),     // Flags
            Constraint::Length(3),  // Score
            Constraint::Length(1),  // Help
        ])
        .split(area);

    let title = Paragraph::new("Guess The Flag")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let engine = app.engine();
    // After game over the last round stays on screen under the dialog.
    if let Some(round) = engine.state().round() {
        draw_prompt(frame, chunks[1], round);
        draw_flags(frame, chunks[2], round, app.cursor());
    }

    let round_label = if engine.is_game_over() {
        engine.total_rounds()
    } else {
        engine.rounds_played() + 1
    };
    let score = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Score: {}", engine.score()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Round: {}/{}    High Score: {}",
            round_label,
            engine.total_rounds(),
            engine.high_score()
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(score, chunks[3]);

    let help = Paragraph::new("1-3 or ↑/↓ + Enter to pick  ·  q to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if let Some(dialog) = app.dialog() {
        draw_dialog(frame, area, dialog);
    }
}

fn draw_prompt(frame: &mut Frame, area: Rect, round: &RoundState) {
    let prompt = Paragraph::new(vec![
        Line::from(Span::styled(
            "Tap the flag of",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            round.target_name().to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(prompt, area);
}

fn draw_flags(frame: &mut Frame, area: Rect, round: &RoundState, cursor: FlagSlot) {
    let column = center_rect(area, 24, 9);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 3])
        .split(column);

    for slot in FlagSlot::iter() {
        let Some(code) = round.candidates().get(slot.index()) else {
            continue;
        };

        let border_style = if slot == cursor {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let flag = Paragraph::new(format!("{}  {}", slot.label(), flag_glyph(code)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        frame.render_widget(flag, rows[slot.index()]);
    }
}

fn draw_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog) {
    let (title, message, action) = match dialog {
        Dialog::Score { title, message } => (title, message, "Enter: Continue"),
        Dialog::GameOver { title, message } => (title, message, "Enter: Start New Game"),
    };

    let popup = center_rect(area, 44, 8);
    let mut lines: Vec<Line> = message.lines().map(|l| Line::from(l.to_string())).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(action, Style::default().fg(Color::Cyan))));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.as_str())
                .title_alignment(Alignment::Center),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// Emoji flag for a two-letter ISO code, built from regional indicator
/// symbols. Other codes get a plain white flag.
pub fn flag_glyph(code: &CountryCode) -> String {
    let code = code.as_str();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return "🏳".to_string();
    }

    code.to_ascii_uppercase()
        .chars()
        .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
        .collect()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_glyph_from_iso_code() {
        assert_eq!(flag_glyph(&"fr".into()), "🇫🇷");
        assert_eq!(flag_glyph(&"US".into()), "🇺🇸");
    }

    #[test]
    fn test_flag_glyph_fallback() {
        assert_eq!(flag_glyph(&"gb-sct".into()), "🏳");
        assert_eq!(flag_glyph(&"1a".into()), "🏳");
    }
}
