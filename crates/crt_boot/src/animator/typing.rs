//! Character-by-character typing driver.

use crate::script::BootScript;

use super::state::{LinePacing, TypingCursor};

/// What a single typing tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingStep {
    /// One more character of `line` became visible.
    Revealed { line: usize },
    /// `line` was empty and got skipped.
    SkippedEmpty { line: usize },
    /// The cursor left the fully typed `line`.
    LineAdvanced { line: usize },
    /// Every line is revealed. Returned again on every later tick.
    Complete,
}

/// Reveals a [`BootScript`] one character per tick.
#[derive(Debug, Clone)]
pub struct TypingDriver {
    cursor: TypingCursor,
    revealed: Vec<String>,
    pacing: LinePacing,
    complete: bool,
}

impl TypingDriver {
    pub fn new(script: &BootScript, pacing: LinePacing) -> Self {
        Self {
            cursor: TypingCursor::default(),
            revealed: vec![String::new(); script.len()],
            pacing,
            complete: false,
        }
    }

    pub fn step(&mut self, script: &BootScript) -> TypingStep {
        if self.complete {
            return TypingStep::Complete;
        }

        let line_index = self.cursor.line_index;
        let Some(line) = script.line(line_index) else {
            self.complete = true;
            return TypingStep::Complete;
        };

        if line.is_empty() {
            self.cursor.line_index += 1;
            return TypingStep::SkippedEmpty { line: line_index };
        }

        let Some(next) = line.chars().nth(self.cursor.char_index) else {
            self.advance_line();
            return TypingStep::LineAdvanced { line: line_index };
        };

        if let Some(revealed) = self.revealed.get_mut(line_index) {
            revealed.push(next);
        }
        self.cursor.char_index += 1;

        if self.pacing == LinePacing::Immediate
            && self.cursor.char_index >= script.char_len(line_index)
        {
            self.advance_line();
        }
        TypingStep::Revealed { line: line_index }
    }

    fn advance_line(&mut self) {
        self.cursor.line_index += 1;
        self.cursor.char_index = 0;
    }

    #[inline]
    pub fn cursor(&self) -> TypingCursor {
        self.cursor
    }

    pub fn revealed(&self) -> &[String] {
        &self.revealed
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Line that shows the typing marker, if any.
    pub fn marker_line(&self) -> Option<usize> {
        if self.complete || self.cursor.line_index >= self.revealed.len() {
            None
        } else {
            Some(self.cursor.line_index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_to_completion(script: &BootScript, pacing: LinePacing) -> Vec<TypingStep> {
        let mut driver = TypingDriver::new(script, pacing);
        let mut steps = Vec::new();
        loop {
            let step = driver.step(script);
            steps.push(step);
            if step == TypingStep::Complete {
                return steps;
            }
        }
    }

    #[test]
    fn idle_tick_pacing_spends_a_tick_per_boundary() {
        let script = BootScript::new(["AB", "", "C"]);
        assert_eq!(
            run_to_completion(&script, LinePacing::IdleTick),
            vec![
                TypingStep::Revealed { line: 0 },
                TypingStep::Revealed { line: 0 },
                TypingStep::LineAdvanced { line: 0 },
                TypingStep::SkippedEmpty { line: 1 },
                TypingStep::Revealed { line: 2 },
                TypingStep::LineAdvanced { line: 2 },
                TypingStep::Complete,
            ]
        );
    }

    #[test]
    fn immediate_pacing_collapses_boundaries() {
        let script = BootScript::new(["AB", "", "C"]);
        assert_eq!(
            run_to_completion(&script, LinePacing::Immediate),
            vec![
                TypingStep::Revealed { line: 0 },
                TypingStep::Revealed { line: 0 },
                TypingStep::SkippedEmpty { line: 1 },
                TypingStep::Revealed { line: 2 },
                TypingStep::Complete,
            ]
        );
    }

    #[test]
    fn revealed_lines_are_prefixes_and_grow_one_char_at_a_time() {
        let script = BootScript::standard();
        let mut driver = TypingDriver::new(&script, LinePacing::IdleTick);
        let mut last_cursor = driver.cursor();

        while driver.step(&script) != TypingStep::Complete {
            let cursor = driver.cursor();
            assert!(cursor.line_index >= last_cursor.line_index);
            assert!(cursor.line_index <= script.len());
            if cursor.line_index < script.len() {
                assert!(cursor.char_index <= script.char_len(cursor.line_index));
            }
            for (i, revealed) in driver.revealed().iter().enumerate() {
                let line = script.line(i).unwrap_or_default();
                assert!(line.starts_with(revealed.as_str()), "{revealed:?} vs {line:?}");
            }
            last_cursor = cursor;
        }

        let full: Vec<String> = script.lines().map(str::to_string).collect();
        assert_eq!(driver.revealed(), full.as_slice());
        assert_eq!(driver.marker_line(), None);
    }

    #[test]
    fn multibyte_characters_are_typed_whole() {
        let script = BootScript::new(["é█"]);
        let mut driver = TypingDriver::new(&script, LinePacing::IdleTick);
        driver.step(&script);
        assert_eq!(driver.revealed(), ["é".to_string()].as_slice());
        driver.step(&script);
        assert_eq!(driver.revealed(), ["é█".to_string()].as_slice());
    }

    #[test]
    fn empty_script_completes_on_first_tick() {
        let script = BootScript::new(Vec::<String>::new());
        let mut driver = TypingDriver::new(&script, LinePacing::IdleTick);
        assert_eq!(driver.marker_line(), None);
        assert_eq!(driver.step(&script), TypingStep::Complete);
        assert_eq!(driver.step(&script), TypingStep::Complete);
    }
}
