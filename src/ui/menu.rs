use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::collision::GameOverCause;
use crate::config::Palette;

/// Message box contents shown over the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Message {
    /// Remaining countdown step before play begins.
    Countdown(u32),
    GameOver { cause: GameOverCause, score: u32 },
}

impl Message {
    /// Text lines of the message box.
    #[must_use]
    pub fn lines(self) -> Vec<String> {
        match self {
            Self::Countdown(remaining) => vec![remaining.to_string()],
            Self::GameOver { cause, score } => vec![
                "Game Over".to_owned(),
                String::new(),
                format!("You {cause}"),
                format!("Score: {score}"),
                String::new(),
                "[Enter]/[Space] Play Again".to_owned(),
                "[Q] Quit".to_owned(),
            ],
        }
    }
}

/// Draws `message` as a centered popup inside `area`.
pub fn render_message(frame: &mut Frame<'_>, area: Rect, message: Message, palette: &Palette) {
    let (width_percent, height_percent) = match message {
        Message::Countdown(_) => (30, 20),
        Message::GameOver { .. } => (80, 60),
    };
    let popup = centered_popup(area, width_percent, height_percent);
    frame.render_widget(Clear, popup);

    let lines: Vec<Line<'_>> = message.lines().into_iter().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(palette.message)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::bordered()),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use super::Message;
    use crate::collision::GameOverCause;

    #[test]
    fn countdown_shows_only_the_number() {
        assert_eq!(Message::Countdown(3).lines(), vec!["3".to_owned()]);
    }

    #[test]
    fn game_over_names_the_cause() {
        let lines = Message::GameOver {
            cause: GameOverCause::SelfCollision,
            score: 4,
        }
        .lines();

        assert_eq!(lines[0], "Game Over");
        assert!(lines.contains(&"You hit yourself".to_owned()));
        assert!(lines.contains(&"Score: 4".to_owned()));
    }
}
