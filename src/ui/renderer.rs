use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::engine::Snapshot;

/// Draws one frame from a read-only snapshot. Holds no state and never
/// touches the engine.
pub fn draw(frame: &mut Frame, snap: &Snapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // score counters
            Constraint::Length(1), // level / game line
            Constraint::Min(4),    // status message
            Constraint::Length(3), // revealed pattern
            Constraint::Length(3), // input or continuation hint
            Constraint::Length(3), // garden image placard
        ])
        .split(frame.area());

    let counters = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    frame.render_widget(
        Paragraph::new(format!(
            "Words Guessed: {}\nWords Missed: {}",
            snap.words_guessed, snap.words_missed
        )),
        counters[0],
    );
    frame.render_widget(
        Paragraph::new(format!(
            "Words to Guess: {}\nWords in Game: {}",
            snap.words_remaining, snap.words_total
        ))
        .alignment(Alignment::Right),
        counters[1],
    );

    frame.render_widget(
        Paragraph::new(format!(
            "Level: {}   Game: {} of {}",
            snap.level, snap.game, snap.games_at_level
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray)),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(snap.status_message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(snap.revealed.as_str())
            .block(Block::default().borders(Borders::ALL).title(" WORD "))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        chunks[3],
    );

    let hint = if snap.input_live {
        format!(
            "Type a letter A-Z to guess ({} guesses remaining)   [Esc] Quit",
            snap.guesses_remaining
        )
    } else {
        format!("[Enter] {}   [Esc] Quit", snap.continue_label)
    };
    frame.render_widget(
        Paragraph::new(hint)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[4],
    );

    frame.render_widget(
        Paragraph::new(format!("[ {} ]", snap.image))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green)),
        chunks[5],
    );
}
