//! UI rendering for the shooter game.

use crate::core::geometry::Aabb;
use crate::games::shooter::{ShooterGame, ShooterOutcome};
use crate::ui::game_common::{
    create_game_layout, info_line, render_info_panel_frame, render_round_over_banner,
    render_status_bar, GameResultType,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the shooter game scene.
pub fn render_shooter(frame: &mut Frame, area: Rect, game: &ShooterGame) {
    let layout = create_game_layout(frame, area, " Sky Shooter ", Color::Cyan, 10, 24);

    render_play_area(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);

    if let Some(outcome) = game.outcome() {
        let (result_type, title) = match outcome {
            ShooterOutcome::Survived => (GameResultType::Win, "ROUND WON"),
            ShooterOutcome::Hit => (GameResultType::Loss, "ROUND LOST"),
        };
        render_round_over_banner(
            frame,
            layout.content,
            result_type,
            title,
            &game.end_message(),
        );
    }
}

/// A character canvas the arena is rasterised onto.
struct Raster {
    width: usize,
    height: usize,
    scale_x: f64,
    scale_y: f64,
    cells: Vec<(&'static str, Color)>,
}

impl Raster {
    fn new(width: usize, height: usize, arena_width: f64, arena_height: f64) -> Self {
        Self {
            width,
            height,
            scale_x: arena_width / width as f64,
            scale_y: arena_height / height as f64,
            cells: vec![(" ", Color::Reset); width * height],
        }
    }

    /// Paint every display cell the box covers. Boxes smaller than a cell
    /// still paint the cell containing their origin.
    fn paint(&mut self, bounds: Aabb, glyph: &'static str, color: Color) {
        let col_start = (bounds.x / self.scale_x).floor().max(0.0) as usize;
        let row_start = (bounds.y / self.scale_y).floor().max(0.0) as usize;
        let col_end = ((bounds.right() / self.scale_x).ceil() as usize).max(col_start + 1);
        let row_end = ((bounds.bottom() / self.scale_y).ceil() as usize).max(row_start + 1);

        for row in row_start..row_end.min(self.height) {
            for col in col_start..col_end.min(self.width) {
                self.cells[row * self.width + col] = (glyph, color);
            }
        }
    }

    fn into_lines(self) -> Vec<Line<'static>> {
        self.cells
            .chunks(self.width)
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|(glyph, color)| Span::styled(*glyph, Style::default().fg(*color)))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, game: &ShooterGame) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let mut raster = Raster::new(width, height, game.settings.width, game.settings.height);
    for enemy in &game.enemies {
        raster.paint(enemy.bounds(), "█", Color::Red);
    }
    raster.paint(game.player.bounds(), "█", Color::LightGreen);
    for bullet in &game.bullets {
        raster.paint(bullet.bounds(), "•", Color::Yellow);
    }

    frame.render_widget(Paragraph::new(raster.into_lines()), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &ShooterGame) {
    let controls = [("[←/→]", "Move"), ("[Space]", "Fire"), ("[Esc]", "Menu")];
    let (text, color) = if !game.is_active() {
        (String::new(), Color::White)
    } else if game.low_time() {
        (format!("Almost there! {}s left", game.time_left), Color::Yellow)
    } else {
        (format!("Survive {}s more", game.time_left), Color::White)
    };
    render_status_bar(frame, area, &text, color, &controls);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &ShooterGame) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let time_style = if game.low_time() {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let plain = Style::default().fg(Color::White);

    let lines = vec![
        info_line("Time", format!("{}", game.time_left), time_style),
        info_line("Survived", format!("{}s", game.survived), plain),
        Line::from(""),
        info_line("Enemies", format!("{}", game.enemies.len()), Style::default().fg(Color::Red)),
        info_line(
            "Bullets",
            format!("{}", game.bullets.len()),
            Style::default().fg(Color::Yellow),
        ),
        info_line("Destroyed", format!("{}", game.enemies_destroyed), plain),
        Line::from(""),
        info_line(
            "Won",
            format!("{}", game.rounds_survived),
            Style::default().fg(Color::Green),
        ),
        info_line("Lost", format!("{}", game.rounds_lost), Style::default().fg(Color::Red)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
