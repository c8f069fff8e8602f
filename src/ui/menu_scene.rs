//! Game selection menu.

use crate::app::App;
use crate::build_info;
use crate::games::GameKind;
use crate::ui::game_common::{centered_rect, render_status_bar};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MENU_WIDTH: u16 = 52;
const MENU_HEIGHT: u16 = 16;

pub fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);

    let menu_area = centered_rect(area, MENU_WIDTH, MENU_HEIGHT);
    let block = Block::default()
        .title(" Arcade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(menu_area);
    frame.render_widget(block, menu_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(inner);

    let mut lines = vec![Line::from("")];
    for (i, kind) in GameKind::ALL.iter().enumerate() {
        let selected = i == app.menu_selection % GameKind::ALL.len();
        let (marker, name_style) = if selected {
            (
                "> ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(Color::White))
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(kind.name(), name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", kind.description()),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    if app.selected_game() == GameKind::Maze {
        lines.push(Line::from(Span::styled(
            format!("  Difficulty: {}", app.config.maze.difficulty.name()),
            Style::default().fg(Color::Cyan),
        )));
    }
    if let Some(notice) = &app.notice {
        lines.push(Line::from(Span::styled(
            format!("  {}", notice),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            format!("v{}", build_info::version_string()),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right),
    );

    frame.render_widget(Paragraph::new(lines), chunks[0]);
    render_status_bar(
        frame,
        chunks[1],
        "Choose a game",
        Color::White,
        &[("[↑/↓]", "Select"), ("[Enter]", "Play"), ("[Q]", "Quit")],
    );
}
