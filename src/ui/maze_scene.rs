//! UI rendering for the maze game.

use crate::games::maze::{Cell, MazeGame, MazePhase, Position};
use crate::ui::game_common::{
    centered_rect, create_game_layout, info_line, render_info_panel_frame,
    render_round_over_banner, render_status_bar, render_too_small, GameResultType,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Each grid cell is drawn two columns wide so cells look roughly square.
const CELL_WIDTH: u16 = 2;

const OPEN_BG: Color = Color::Rgb(34, 34, 68);
const WALL_BG: Color = Color::Rgb(58, 58, 90);

/// Render the maze game scene.
pub fn render_maze(frame: &mut Frame, area: Rect, game: &MazeGame) {
    let border = if game.low_time() && !game.is_over() {
        Color::Red
    } else {
        Color::Magenta
    };
    let layout = create_game_layout(frame, area, " Maze Runner ", border, 8, 24);

    render_board(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);

    match game.phase {
        MazePhase::Playing => {}
        MazePhase::Won => render_round_over_banner(
            frame,
            layout.content,
            GameResultType::Win,
            "VICTORY!",
            &game.status_message(),
        ),
        MazePhase::TimedOut => {
            let message = if game.exit_reachable {
                game.status_message()
            } else {
                format!("{} (this maze had no path)", game.status_message())
            };
            render_round_over_banner(
                frame,
                layout.content,
                GameResultType::Loss,
                "TIME'S UP",
                &message,
            );
        }
    }
}

fn cell_span(game: &MazeGame, pos: Position) -> Span<'static> {
    if pos == game.player {
        return Span::styled(
            "██",
            Style::default().fg(Color::LightGreen).bg(OPEN_BG),
        );
    }
    if pos == game.exit && game.exit_visible() {
        return Span::styled(
            "◆◆",
            Style::default()
                .fg(Color::Yellow)
                .bg(OPEN_BG)
                .add_modifier(Modifier::BOLD),
        );
    }
    match game.grid.get(pos) {
        Some(Cell::Wall) => Span::styled("  ", Style::default().bg(WALL_BG)),
        _ => Span::styled("  ", Style::default().bg(OPEN_BG)),
    }
}

fn render_board(frame: &mut Frame, area: Rect, game: &MazeGame) {
    let board_width = game.grid.cols() as u16 * CELL_WIDTH;
    let board_height = game.grid.rows() as u16;
    if area.width < board_width || area.height < board_height {
        render_too_small(frame, area, board_width, board_height);
        return;
    }

    let lines: Vec<Line> = (0..game.grid.rows())
        .map(|y| {
            Line::from(
                (0..game.grid.cols())
                    .map(|x| cell_span(game, Position { x, y }))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let board_area = centered_rect(area, board_width, board_height);
    frame.render_widget(Paragraph::new(lines), board_area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &MazeGame) {
    let controls = [
        ("[Arrows]", "Move"),
        ("[R]", "Reveal"),
        ("[1-3]", "Difficulty"),
        ("[Esc]", "Menu"),
    ];
    let (text, color) = match game.phase {
        MazePhase::Playing if game.low_time() => ("Hurry! The exit is showing", Color::Red),
        MazePhase::Playing if game.exit_revealed => ("There it is!", Color::Yellow),
        MazePhase::Playing => ("Find the hidden exit", Color::White),
        MazePhase::Won | MazePhase::TimedOut => ("", Color::White),
    };
    render_status_bar(frame, area, text, color, &controls);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &MazeGame) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let time_style = if game.low_time() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let streak_style = if game.streak_hot() {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let reveal = if game.exit_revealed {
        "showing"
    } else if game.is_over() {
        "-"
    } else {
        "ready"
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", game.difficulty().name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        info_line("Time", format!("{}", game.time_left), time_style),
        info_line("Wins", format!("{}", game.wins), Style::default().fg(Color::Green)),
        info_line("Streak", format!("{}", game.streak), streak_style),
        info_line("Round", format!("{}", game.round), Style::default().fg(Color::White)),
        Line::from(""),
        info_line("Reveal", reveal.to_string(), Style::default().fg(Color::Yellow)),
        info_line(
            "Walls",
            format!("{:.0}%", game.difficulty().wall_probability() * 100.0),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::maze::{reveal_exit, MazeSettings};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_game() -> MazeGame {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let mut game = MazeGame::new(MazeSettings::default(), &mut rng).unwrap();
        // Keep the player off the exit so its glyph is the only candidate
        game.player = Position::START;
        game
    }

    fn is_exit_glyph(span: &Span) -> bool {
        span.content == "◆◆"
    }

    #[test]
    fn test_exit_hidden_early_in_the_round() {
        let game = new_game();
        assert!(!is_exit_glyph(&cell_span(&game, game.exit)));
    }

    #[test]
    fn test_exit_drawn_while_revealed() {
        let mut game = new_game();
        reveal_exit(&mut game);
        assert!(is_exit_glyph(&cell_span(&game, game.exit)));
    }

    #[test]
    fn test_exit_drawn_in_the_last_seconds() {
        let mut game = new_game();
        game.time_left = 5;
        assert!(is_exit_glyph(&cell_span(&game, game.exit)));
        game.time_left = 6;
        assert!(!is_exit_glyph(&cell_span(&game, game.exit)));
    }
}
