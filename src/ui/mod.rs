//! UI module for TUI rendering.

pub mod error;
pub mod pairing;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, View};

/// Render exactly one of the three view sections.
pub fn render(frame: &mut Frame, app: &App) {
    match app.view {
        View::Loading => render_loading(frame, app),
        View::Pairing => pairing::render(frame, app),
        View::Error => error::render(frame, app),
    }
}

/// Loading placeholder, shown until the first poll resolves.
fn render_loading(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(frame.area());

    let placeholder = Paragraph::new(Line::from(Span::styled(
        " Waiting for status...",
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" POINTZERVER PAIRING "),
    );

    frame.render_widget(placeholder, chunks[0]);
    render_footer(frame, app, chunks[1]);
}

/// Footer bar with key hints and the polled endpoint.
pub(crate) fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" [R] ", Style::default().fg(Color::Yellow)),
        Span::raw("Refresh  "),
        Span::styled("[Q] ", Style::default().fg(Color::Yellow)),
        Span::raw("Quit  "),
        Span::raw("\u{2502} "),
        Span::styled(app.endpoint.clone(), Style::default().fg(Color::DarkGray)),
    ];

    if let Some(age) = app.refresh_age() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("updated {}", format_elapsed(age)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Format elapsed time as a human-readable string.
fn format_elapsed(duration: std::time::Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else {
        format!("{}h ago", secs / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::PairingStatus;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn sample_status(ip: Option<&str>) -> PairingStatus {
        PairingStatus {
            hostname: "host1".to_string(),
            ip: ip.map(str::to_string),
            discovery_port: 9000,
            command_port: 9001,
            app_download_url: "https://example.com/app".to_string(),
        }
    }

    /// Draw the app into a test backend and flatten the buffer to text.
    fn draw(app: &App) -> String {
        let backend = TestBackend::new(80, 36);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn loading_view_is_the_only_visible_section() {
        let app = App::new("http://127.0.0.1:45460/status", false);
        let screen = draw(&app);

        assert!(screen.contains("Waiting for status..."));
        assert!(!screen.contains("Hostname"));
        assert!(!screen.contains("not reachable"));
    }

    #[test]
    fn pairing_view_shows_all_fields_verbatim() {
        let mut app = App::new("http://127.0.0.1:45460/status", false);
        app.apply_poll(Some(sample_status(Some("10.0.0.5"))));
        let screen = draw(&app);

        assert!(screen.contains("host1"));
        assert!(screen.contains("10.0.0.5"));
        assert!(screen.contains("9000"));
        assert!(screen.contains("9001"));
        assert!(screen.contains("https://example.com/app"));
        assert!(screen.contains("SCAN TO DOWNLOAD"));
        assert!(!screen.contains("Waiting for status..."));
        assert!(!screen.contains("not reachable"));
    }

    #[test]
    fn pairing_view_uses_ip_placeholder() {
        let mut app = App::new("http://127.0.0.1:45460/status", false);
        app.apply_poll(Some(sample_status(None)));
        let screen = draw(&app);

        assert!(screen.contains("Not available"));
    }

    #[test]
    fn error_view_is_the_only_visible_section() {
        let mut app = App::new("http://127.0.0.1:45460/status", false);
        app.apply_poll(None);
        let screen = draw(&app);

        assert!(screen.contains("not reachable"));
        assert!(screen.contains("http://127.0.0.1:45460/status"));
        assert!(!screen.contains("Hostname"));
        assert!(!screen.contains("Waiting for status..."));
    }

    #[test]
    fn footer_shows_key_hints() {
        let app = App::new("http://127.0.0.1:45460/status", false);
        let screen = draw(&app);

        assert!(screen.contains("[R]"));
        assert!(screen.contains("[Q]"));
        assert!(screen.contains("http://127.0.0.1:45460/status"));
    }

    #[test]
    fn test_format_elapsed() {
        use std::time::Duration;
        assert_eq!(format_elapsed(Duration::from_secs(5)), "5s ago");
        assert_eq!(format_elapsed(Duration::from_secs(90)), "1m ago");
        assert_eq!(format_elapsed(Duration::from_secs(7200)), "2h ago");
    }
}
