//! Error view rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::App;

/// Render the error view, shown when the status service is unreachable.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(frame.area());

    let text = vec![
        Line::from(vec![
            Span::styled(
                " \u{2717} PointZerver is not reachable",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw(" Endpoint: "),
            Span::styled(app.endpoint.clone(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(Span::raw(
            " Start PointZerver on this machine, then press [R] to retry.",
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" CONNECTION ERROR ")
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(Paragraph::new(text).block(block), chunks[0]);
    super::render_footer(frame, app, chunks[1]);
}
