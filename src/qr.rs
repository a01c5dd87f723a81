//! QR encoding for the download link, rendered as Unicode half-blocks.

use qrcode::{Color as ModuleColor, QrCode};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use thiserror::Error;

/// Options recognized by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrOptions {
    /// Maximum rendered width in terminal cells.
    pub width: u16,
    /// Quiet-zone size in modules around the code.
    pub margin: u8,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            width: 80,
            margin: 0,
        }
    }
}

/// Errors that can occur while encoding a QR image.
#[derive(Debug, Error)]
pub enum QrError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("QR code is {0} cells wide, exceeds the limit of {1}")]
    TooWide(u16, u16),
}

/// An encoded QR code: a square module matrix with the quiet zone applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    /// Row-major module matrix, `true` for dark modules.
    modules: Vec<bool>,
    /// Side length in modules, quiet zone included.
    width: usize,
}

/// Encode `text` into a QR module matrix.
pub fn encode(text: &str, options: QrOptions) -> Result<QrImage, QrError> {
    let code = QrCode::new(text.as_bytes())?;
    let side = code.width();
    let margin = options.margin as usize;
    let total = side + 2 * margin;

    if total > options.width as usize {
        return Err(QrError::TooWide(total as u16, options.width));
    }

    let colors = code.to_colors();
    let mut modules = vec![false; total * total];
    for y in 0..side {
        for x in 0..side {
            if colors[y * side + x] == ModuleColor::Dark {
                modules[(y + margin) * total + (x + margin)] = true;
            }
        }
    }

    Ok(QrImage {
        modules,
        width: total,
    })
}

impl QrImage {
    /// Side length in modules (one module is one terminal cell wide).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rendered height in terminal rows (two module rows per line).
    pub fn height(&self) -> usize {
        self.width.div_ceil(2)
    }

    fn dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.width + x]
    }

    /// Render the matrix as terminal lines, packing two module rows into
    /// each line with half-block characters.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.height());

        for y in (0..self.width).step_by(2) {
            let mut spans = Vec::with_capacity(self.width);
            for x in 0..self.width {
                let top = self.dark(x, y);
                let bottom = y + 1 < self.width && self.dark(x, y + 1);
                let style = Style::default()
                    .fg(module_color(top))
                    .bg(module_color(bottom));
                spans.push(Span::styled("\u{2580}", style));
            }
            lines.push(Line::from(spans));
        }

        lines
    }
}

fn module_color(dark: bool) -> Color {
    if dark {
        Color::Black
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com/app";

    #[test]
    fn encode_produces_square_matrix() {
        let image = encode(URL, QrOptions::default()).unwrap();
        assert!(image.width() > 0);
        assert_eq!(image.modules.len(), image.width() * image.width());
    }

    #[test]
    fn margin_adds_light_quiet_zone() {
        let bare = encode(URL, QrOptions::default()).unwrap();
        let padded = encode(
            URL,
            QrOptions {
                width: 80,
                margin: 2,
            },
        )
        .unwrap();

        assert_eq!(padded.width(), bare.width() + 4);
        // The outermost ring must stay light.
        let w = padded.width();
        for i in 0..w {
            assert!(!padded.dark(i, 0));
            assert!(!padded.dark(i, w - 1));
            assert!(!padded.dark(0, i));
            assert!(!padded.dark(w - 1, i));
        }
    }

    #[test]
    fn width_limit_is_enforced() {
        let result = encode(
            URL,
            QrOptions {
                width: 10,
                margin: 0,
            },
        );
        assert!(matches!(result, Err(QrError::TooWide(_, 10))));
    }

    #[test]
    fn oversized_payload_fails_to_encode() {
        let huge = "x".repeat(8000);
        assert!(matches!(
            encode(&huge, QrOptions::default()),
            Err(QrError::Encode(_))
        ));
    }

    #[test]
    fn rendering_packs_two_rows_per_line() {
        let image = encode(URL, QrOptions::default()).unwrap();
        let lines = image.to_lines();
        assert_eq!(lines.len(), image.height());
        assert_eq!(lines[0].spans.len(), image.width());
    }
}
