//! Plain-text rendering of the boot screen.
//!
//! The output is byte-exact so frames can be compared in tests and printed
//! by headless front-ends. Styling (colour, blinking) is left to the caller;
//! the blinking marker is represented by [`CURSOR_GLYPH`].

use crate::animator::Phase;

/// Block glyph used for the typing marker and for filled bar cells.
pub const CURSOR_GLYPH: char = '█';

const EMPTY_CELL: char = '-';

/// Render a progress bar: `[` + filled + empty + `] ` + percent + `%`.
///
/// `progress` above 100 is clamped.
pub fn progress_bar(progress: u8, width: usize) -> String {
    let progress = progress.min(100);
    let filled = usize::from(progress) * width / 100;
    let empty = width - filled;

    let mut bar = String::with_capacity(width * CURSOR_GLYPH.len_utf8() + 8);
    bar.push('[');
    bar.extend(std::iter::repeat_n(CURSOR_GLYPH, filled));
    bar.extend(std::iter::repeat_n(EMPTY_CELL, empty));
    bar.push_str("] ");
    bar.push_str(&progress.to_string());
    bar.push('%');
    bar
}

/// Snapshot of everything visible on the boot screen at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct BootFrame {
    pub phase: Phase,
    /// One entry per script line, each a prefix of that line.
    pub lines: Vec<String>,
    /// Row showing the typing marker.
    pub marker_line: Option<usize>,
    /// Bar percentage, present once typing has finished.
    pub progress: Option<u8>,
    pub bar_width: usize,
    /// Linear exit transition progress, present once exiting.
    pub exit_progress: Option<f32>,
}

impl BootFrame {
    /// The rendered bar row, without marker.
    pub fn bar(&self) -> Option<String> {
        self.progress
            .map(|progress| progress_bar(progress, self.bar_width))
    }

    /// Whether the bar row carries the blinking marker.
    pub fn bar_has_marker(&self) -> bool {
        self.progress.is_some_and(|progress| progress < 100)
    }

    /// All visible rows, markers included.
    pub fn rows(&self) -> Vec<String> {
        let mut rows: Vec<String> = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let mut row = line.clone();
                if self.marker_line == Some(i) {
                    row.push(CURSOR_GLYPH);
                }
                row
            })
            .collect();

        if let Some(mut bar) = self.bar() {
            if self.bar_has_marker() {
                bar.push(CURSOR_GLYPH);
            }
            rows.push(bar);
        }
        rows
    }

    /// Rows joined with `\n`.
    pub fn to_text(&self) -> String {
        self.rows().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frame(lines: &[&str], marker_line: Option<usize>, progress: Option<u8>) -> BootFrame {
        BootFrame {
            phase: if progress.is_some() {
                Phase::BarFilling
            } else {
                Phase::Typing
            },
            lines: lines.iter().map(|line| line.to_string()).collect(),
            marker_line,
            progress,
            bar_width: 4,
            exit_progress: None,
        }
    }

    #[test]
    fn bar_floors_filled_cells() {
        assert_eq!(progress_bar(0, 4), "[----] 0%");
        assert_eq!(progress_bar(24, 4), "[----] 24%");
        assert_eq!(progress_bar(25, 4), "[█---] 25%");
        assert_eq!(progress_bar(60, 4), "[██--] 60%");
        assert_eq!(progress_bar(99, 4), "[███-] 99%");
        assert_eq!(progress_bar(100, 4), "[████] 100%");
    }

    #[test]
    fn bar_at_default_width() {
        let bar = progress_bar(37, 50);
        assert_eq!(bar.chars().filter(|c| *c == CURSOR_GLYPH).count(), 18);
        assert_eq!(bar.chars().filter(|c| *c == '-').count(), 32);
        assert!(bar.ends_with("] 37%"));
    }

    #[test]
    fn bar_clamps_out_of_range_progress() {
        assert_eq!(progress_bar(250, 4), "[████] 100%");
    }

    #[test]
    fn marker_follows_typing_row() {
        let frame = frame(&["A", ""], Some(0), None);
        assert_eq!(frame.to_text(), "A█\n");
    }

    #[test]
    fn bar_row_marker_only_while_filling() {
        let filling = frame(&["AB", ""], None, Some(60));
        assert_eq!(filling.to_text(), "AB\n\n[██--] 60%█");

        let full = frame(&["AB", ""], None, Some(100));
        assert_eq!(full.to_text(), "AB\n\n[████] 100%");
    }
}
