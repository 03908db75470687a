//! The boot screen: green script rows, the progress bar, and the CRT
//! power-off collapse while the sequence exits.

use crt_boot::BootFrame;
use crt_boot::BootScript;
use crt_boot::CURSOR_GLYPH;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::Widget;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::WidgetRef;

use super::centered;

/// `[`, `] `, `100` and `%` around the bar cells, plus the marker.
const BAR_DECORATION: usize = 8;

const SCANLINE: &str = "─";

/// Widest row the sequence can produce, so the block does not shift while
/// the script is being typed.
pub fn content_width(script: &BootScript, bar_width: usize) -> usize {
    let widest_line = (0..script.len())
        .map(|i| script.char_len(i) + 1)
        .max()
        .unwrap_or(0);
    widest_line.max(bar_width + BAR_DECORATION)
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Rows still visible after `progress` of the power-off collapse.
pub fn collapsed_rows(height: usize, progress: f32) -> usize {
    let remaining = 1.0 - ease_out_cubic(progress);
    (height as f32 * remaining).round() as usize
}

pub struct BootScreen<'a> {
    frame: &'a BootFrame,
    width: Option<usize>,
}

impl<'a> BootScreen<'a> {
    pub fn new(frame: &'a BootFrame) -> Self {
        Self { frame, width: None }
    }

    pub fn content_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let marker = || Span::from(CURSOR_GLYPH.to_string()).slow_blink();

        let mut lines: Vec<Line<'static>> = self
            .frame
            .lines
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let mut spans = vec![Span::from(text.clone())];
                if self.frame.marker_line == Some(i) {
                    spans.push(marker());
                }
                Line::from(spans)
            })
            .collect();

        if let Some(bar) = self.frame.bar() {
            let mut spans = vec![Span::from(bar)];
            if self.frame.bar_has_marker() {
                spans.push(marker());
            }
            lines.push(Line::from(spans));
        }
        lines
    }

    /// Script rows plus the bar row, reserved from the start.
    fn height(&self) -> usize {
        self.frame.lines.len() + 1
    }
}

impl WidgetRef for BootScreen<'_> {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let lines = self.lines();
        let width = self
            .width
            .unwrap_or_else(|| lines.iter().map(Line::width).max().unwrap_or(0));
        let height = self.height();
        let block = centered(area, clamp_u16(width), clamp_u16(height));

        let Some(progress) = self.frame.exit_progress else {
            Paragraph::new(lines).green().render(block, buf);
            return;
        };

        let visible = collapsed_rows(height, progress);
        if visible == 0 {
            if progress < 1.0 {
                let row = Rect {
                    y: block.y + block.height / 2,
                    height: 1,
                    ..block
                };
                let line = Line::from(SCANLINE.repeat(usize::from(block.width)));
                Paragraph::new(line).green().render(row.intersection(block), buf);
            }
            return;
        }

        let skip = (height - visible) / 2;
        let rows = Rect {
            y: block.y.saturating_add(clamp_u16(skip)),
            height: clamp_u16(visible),
            ..block
        }
        .intersection(block);
        let lines: Vec<Line<'static>> = lines.into_iter().skip(skip).take(visible).collect();
        Paragraph::new(lines).green().render(rows, buf);
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
