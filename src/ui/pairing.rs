//! Pairing view rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::App;

/// Render the pairing view: connection details plus the QR panel.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(7), // Connection details
            Constraint::Min(8),    // QR panel
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_details(frame, app, chunks[1]);
    render_qr(frame, app, chunks[2]);
    super::render_footer(frame, app, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::raw(" Status: "),
        Span::styled(
            "\u{25cf} CONNECTED",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    Scan the code or open the link to pair a device"),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" POINTZERVER PAIRING "),
    );

    frame.render_widget(header, area);
}

fn render_details(frame: &mut Frame, app: &App, area: Rect) {
    let Some(status) = &app.status else {
        return;
    };

    let text = vec![
        Line::from(vec![
            Span::raw(" Hostname:        "),
            Span::styled(
                status.hostname.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(" IP Address:      "),
            Span::styled(
                status.ip_display().to_string(),
                Style::default().fg(if status.ip.is_some() {
                    Color::Cyan
                } else {
                    Color::DarkGray
                }),
            ),
        ]),
        Line::from(vec![
            Span::raw(" Discovery Port:  "),
            Span::styled(
                status.discovery_port.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw(" Command Port:    "),
            Span::styled(
                status.command_port.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw(" Download:        "),
            Span::styled(
                status.app_download_url.clone(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" CONNECTION ")
        .border_style(Style::default().fg(Color::Blue));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_qr(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" SCAN TO DOWNLOAD ")
        .border_style(Style::default().fg(Color::Magenta));

    let paragraph = match &app.qr {
        Some(image) => Paragraph::new(image.to_lines()).alignment(Alignment::Center),
        None => Paragraph::new(Line::from(Span::styled(
            " QR code unavailable; use the download link above.",
            Style::default().fg(Color::DarkGray),
        ))),
    };

    frame.render_widget(paragraph.block(block), area);
}
