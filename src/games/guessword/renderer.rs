use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::game::{Buzz, RoundView};
use super::INFO;

/// Draws the three screens. A pending buzz cue recolors the frame borders
/// for the duration of its pattern.
#[derive(Debug)]
pub struct GuessWordRenderer;

impl GuessWordRenderer {
    pub fn render_title(frame: &mut Frame, word_count: usize, round_seconds: u32) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Percentage(60),
                Constraint::Percentage(20),
            ])
            .split(frame.area());

        let title = Paragraph::new(format!("═══ {} ═══", INFO.name.to_uppercase()))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(title, chunks[0]);

        let body = format!(
            "{}\n\n{} words in the deck, {} seconds on the clock.\n\n\
             One player holds the terminal, the others shout clues!",
            INFO.description, word_count, round_seconds
        );
        let menu = Paragraph::new(body)
            .block(Block::default().borders(Borders::ALL).title(" HOW TO PLAY "))
            .alignment(Alignment::Center);
        frame.render_widget(menu, chunks[1]);

        let instructions = Paragraph::new("Enter to start a round, Esc to exit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(instructions, chunks[2]);
    }

    pub fn render_play(frame: &mut Frame, view: &RoundView, cue: Option<Buzz>) {
        let border_style = Style::default().fg(cue_color(cue));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Min(0),    // Word
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let clock_style = if view.panic {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let status = Line::from(vec![
            Span::raw(format!("Score: {}", view.score)),
            Span::raw("    "),
            Span::styled(view.clock.clone(), clock_style),
        ]);
        let status = Paragraph::new(status)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(" ROUND "),
            )
            .alignment(Alignment::Center);
        frame.render_widget(status, chunks[0]);

        let word = Paragraph::new(format!("\n\n{}", view.word.to_uppercase()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(word, chunks[1]);

        let footer = Paragraph::new("→ / y = got it    ← / n = skip    Esc = quit")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(footer, chunks[2]);
    }

    pub fn render_results(frame: &mut Frame, score: i32, cue: Option<Buzz>) {
        let border_style = Style::default().fg(cue_color(cue));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Percentage(60),
                Constraint::Percentage(20),
            ])
            .split(frame.area());

        let title = Paragraph::new("⏰ TIME'S UP! ⏰")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        frame.render_widget(title, chunks[0]);

        let body = Paragraph::new(format!("\nFinal score\n\n{}", score))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(" RESULTS "),
            )
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(body, chunks[1]);

        let instructions = Paragraph::new("Enter to play again, Esc to exit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(instructions, chunks[2]);
    }
}

fn cue_color(cue: Option<Buzz>) -> Color {
    match cue {
        Some(Buzz::Correct) => Color::Green,
        Some(Buzz::Panic) => Color::Yellow,
        Some(Buzz::GameOver) => Color::Red,
        Some(Buzz::None) | None => Color::White,
    }
}
