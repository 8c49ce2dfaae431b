use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{GLYPH_HALF_UPPER, Palette};
use crate::grid::{Cell, Grid};
use crate::ui::menu::{Message, render_message};

/// Everything the renderer needs for one frame. Borrowed, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub grid: Grid,
    /// Body cells, tail first.
    pub snake: &'a [Cell],
    pub food: Cell,
    pub score: u32,
    pub message: Option<Message>,
}

/// Renders the full game frame.
pub fn render(frame: &mut Frame<'_>, scene: &Scene<'_>, palette: &Palette) {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let board_area = board_rect(play_area, scene.grid);
    let block = Block::bordered().border_style(Style::new().fg(palette.border_fg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_cells(frame, inner, scene, palette);

    frame.render_widget(
        Paragraph::new(Line::from(format!(
            " Length: {}  Score: {}  [arrows/WASD] move  [Q] quit",
            scene.snake.len(),
            scene.score
        )))
        .style(Style::new().fg(palette.status_text)),
        status_area,
    );

    if let Some(message) = scene.message {
        render_message(frame, board_area, message, palette);
    }
}

/// Terminal rows needed for `grid_rows`, two grid rows per terminal row.
#[must_use]
pub fn terminal_rows(grid_rows: u16) -> u16 {
    grid_rows.div_ceil(2)
}

fn board_rect(area: Rect, grid: Grid) -> Rect {
    let width = grid.columns().saturating_add(2).min(area.width);
    let height = terminal_rows(grid.rows()).saturating_add(2).min(area.height);
    Rect::new(area.x, area.y, width, height)
}

fn render_cells(frame: &mut Frame<'_>, inner: Rect, scene: &Scene<'_>, palette: &Palette) {
    let grid = scene.grid;
    // Only the part of the board that fits inside `inner` is buffered.
    let visible_cols = grid.columns().min(inner.width);
    let visible_rows = grid.rows().min(inner.height.saturating_mul(2));
    let columns = usize::from(visible_cols);
    let mut colors = vec![palette.play_bg; columns * usize::from(visible_rows)];

    let mut paint = |cell: Cell, color: Color| {
        let Some((col, row)) = grid.column_row(cell) else {
            return;
        };
        if col < visible_cols && row < visible_rows {
            colors[usize::from(row) * columns + usize::from(col)] = color;
        }
    };

    paint(scene.food, palette.food);
    for segment in scene.snake {
        paint(*segment, palette.snake);
    }
    if let Some(head) = scene.snake.last() {
        paint(*head, palette.snake_head);
    }

    let color_at = |col: u16, row: u16| -> Color {
        if row >= visible_rows {
            return palette.play_bg;
        }
        colors[usize::from(row) * columns + usize::from(col)]
    };

    let buffer = frame.buffer_mut();
    for term_row in 0..terminal_rows(visible_rows) {
        for col in 0..visible_cols {
            let upper = color_at(col, term_row * 2);
            let lower = color_at(col, term_row * 2 + 1);
            buffer.set_string(
                inner.x + col,
                inner.y + term_row,
                GLYPH_HALF_UPPER,
                Style::new().fg(upper).bg(lower),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::{Scene, render, terminal_rows};
    use crate::config::{GLYPH_HALF_UPPER, PALETTE_DEFAULT};
    use crate::grid::{Cell, Grid};
    use crate::ui::menu::Message;

    #[test]
    fn two_grid_rows_share_a_terminal_row() {
        assert_eq!(terminal_rows(60), 30);
        assert_eq!(terminal_rows(5), 3);
    }

    #[test]
    fn snake_and_food_are_painted_as_half_blocks() {
        let grid = Grid::new(60, 40, 10).expect("valid grid");
        let snake = [Cell::new(0, 0), Cell::new(10, 0)];
        let scene = Scene {
            grid,
            snake: &snake,
            food: Cell::new(50, 30),
            score: 0,
            message: None,
        };
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).expect("test terminal");

        terminal
            .draw(|frame| render(frame, &scene, &PALETTE_DEFAULT))
            .expect("draw should succeed");

        let buffer = terminal.backend().buffer();
        let tail = &buffer[(1, 1)];
        assert_eq!(tail.symbol(), GLYPH_HALF_UPPER);
        assert_eq!(tail.fg, PALETTE_DEFAULT.snake);
        assert_eq!(tail.bg, PALETTE_DEFAULT.play_bg);
        assert_eq!(buffer[(2, 1)].fg, PALETTE_DEFAULT.snake_head);

        // Grid row 3 is the lower half of terminal row 1 inside the border.
        assert_eq!(buffer[(6, 2)].bg, PALETTE_DEFAULT.food);
    }

    #[test]
    fn undersized_terminal_does_not_panic() {
        let grid = Grid::new(600, 600, 10).expect("valid grid");
        let snake = [Cell::new(100, 100)];
        let scene = Scene {
            grid,
            snake: &snake,
            food: Cell::new(590, 590),
            score: 3,
            message: Some(Message::Countdown(2)),
        };
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).expect("test terminal");

        terminal
            .draw(|frame| render(frame, &scene, &PALETTE_DEFAULT))
            .expect("draw should succeed");
    }

    #[test]
    fn board_larger_than_terminal_renders_visible_window_only() {
        let grid = Grid::new(60000, 60000, 1).expect("valid grid");
        let snake = [Cell::new(0, 0), Cell::new(1, 0), Cell::new(59999, 0)];
        let scene = Scene {
            grid,
            snake: &snake,
            food: Cell::new(59999, 59999),
            score: 0,
            message: None,
        };
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");

        terminal
            .draw(|frame| render(frame, &scene, &PALETTE_DEFAULT))
            .expect("draw should succeed");

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(1, 1)].fg, PALETTE_DEFAULT.snake);
        assert_eq!(buffer[(2, 1)].fg, PALETTE_DEFAULT.snake);
        assert_eq!(buffer[(3, 1)].fg, PALETTE_DEFAULT.play_bg);
        assert_eq!(buffer[(78, 21)].bg, PALETTE_DEFAULT.play_bg);
    }
}
