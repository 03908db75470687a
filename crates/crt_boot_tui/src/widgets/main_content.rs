use crt_boot::CURSOR_GLYPH;
use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
use ratatui::layout::Rect;
use ratatui::prelude::Widget;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::WidgetRef;
use ratatui::widgets::Wrap;

use super::centered;

pub const HEADING: &str = "SYSTEM ONLINE";
pub const GREETING: &str = "Welcome, user.";
pub const BODY: &str = "The graphical user interface has been loaded successfully. \
    All systems are operating within normal parameters. \
    You can now proceed with your tasks.";
pub const BUTTONS: [&str; 2] = ["Run Program", "System Check"];
pub const PROMPT: &str = "> Awaiting command...";

const MAX_WIDTH: u16 = 72;

/// The application's main view, shown once the boot screen has finished.
pub struct MainContent {
    fade_in: f32,
}

impl MainContent {
    /// `fade_in` runs from 0.0 (just revealed) to 1.0; below 1.0 the view is
    /// drawn dimmed.
    pub fn new(fade_in: f32) -> Self {
        Self { fade_in }
    }

    /// The view as plain text, one entry per row before wrapping.
    pub fn plain_lines() -> Vec<String> {
        vec![
            HEADING.to_string(),
            String::new(),
            GREETING.to_string(),
            String::new(),
            BODY.to_string(),
            String::new(),
            BUTTONS.map(button_label).join("  "),
            String::new(),
            format!("{PROMPT}{CURSOR_GLYPH}"),
        ]
    }

    fn paragraph(&self) -> Paragraph<'static> {
        let [run, check] = BUTTONS.map(button_label);
        let lines = vec![
            Line::from(HEADING).green().bold(),
            Line::default(),
            Line::from(GREETING).white(),
            Line::default(),
            Line::from(BODY).gray(),
            Line::default(),
            Line::from(vec![
                Span::from(run).black().on_green().bold(),
                Span::from("  "),
                Span::from(check).white().on_dark_gray().bold(),
            ]),
            Line::default(),
            Line::from(vec![
                Span::from(PROMPT).green(),
                Span::from(CURSOR_GLYPH.to_string()).green().slow_blink(),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        if self.fade_in < 1.0 {
            paragraph.dim()
        } else {
            paragraph
        }
    }
}

fn button_label(label: &str) -> String {
    format!("[ {label} ]")
}

impl WidgetRef for MainContent {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let width = area.width.min(MAX_WIDTH);
        let paragraph = self.paragraph();
        let height = u16::try_from(paragraph.line_count(width)).unwrap_or(u16::MAX);
        paragraph.render(centered(area, width, height), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Modifier;

    fn render(widget: &MainContent) -> Buffer {
        let mut terminal =
            Terminal::new(TestBackend::new(80, 20)).unwrap_or_else(|err| panic!("{err}"));
        terminal
            .draw(|f| widget.render_ref(f.area(), f.buffer_mut()))
            .unwrap_or_else(|err| panic!("{err}"));
        terminal.backend().buffer().clone()
    }

    fn find_row(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
        (0..buf.area.height).find_map(|y| {
            let row: String = (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect();
            row.find(needle).map(|byte| (row[..byte].chars().count() as u16, y))
        })
    }

    #[test]
    fn plain_text_lists_every_element() {
        let lines = MainContent::plain_lines();
        assert_eq!(lines[0], "SYSTEM ONLINE");
        assert_eq!(lines[6], "[ Run Program ]  [ System Check ]");
        assert_eq!(lines.last().map(String::as_str), Some("> Awaiting command...█"));
    }

    #[test]
    fn renders_heading_buttons_and_prompt() {
        let buf = render(&MainContent::new(1.0));
        for needle in [HEADING, GREETING, "[ Run Program ]", "[ System Check ]", PROMPT] {
            assert!(find_row(&buf, needle).is_some(), "missing {needle:?}");
        }

        let heading = find_row(&buf, HEADING).unwrap_or_else(|| panic!("heading"));
        let prompt = find_row(&buf, PROMPT).unwrap_or_else(|| panic!("prompt"));
        assert!(heading.1 < prompt.1);
        assert!(!buf[heading].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn dimmed_while_fading_in() {
        let buf = render(&MainContent::new(0.25));
        let heading = find_row(&buf, HEADING).unwrap_or_else(|| panic!("heading"));
        assert!(buf[heading].modifier.contains(Modifier::DIM));
    }
}
