//! Timed line-by-line reveal.

use std::time::Duration;

/// Reveals lyric lines one at a time. Driven by elapsed time from the
/// caller; the last line stays on screen once the sequence is exhausted.
#[derive(Debug, Clone)]
pub struct LyricsReveal {
    lines: Vec<String>,
    interval: f64,
    /// Number of lines revealed so far.
    shown: usize,
    /// Seconds until the next line appears.
    until_next: f64,
}

impl LyricsReveal {
    /// `lead_in` delays the first line; every later line waits `interval`.
    pub fn new(lines: Vec<String>, interval: Duration, lead_in: Duration) -> Self {
        Self {
            lines,
            interval: interval.as_secs_f64(),
            shown: 0,
            until_next: lead_in.as_secs_f64(),
        }
    }

    /// Advance by `dt` seconds. Returns true if a new line appeared.
    pub fn advance(&mut self, dt: f64) -> bool {
        if self.is_finished() {
            return false;
        }

        self.until_next -= dt.max(0.0);
        let mut changed = false;
        while self.until_next <= 0.0 && !self.is_finished() {
            self.shown += 1;
            self.until_next += self.interval;
            changed = true;
        }
        changed
    }

    /// The line currently on screen.
    pub fn current(&self) -> Option<&str> {
        self.shown
            .checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
    }

    /// 1-based position of the current line.
    pub fn position(&self) -> usize {
        self.shown
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Every line has been revealed.
    pub fn is_finished(&self) -> bool {
        self.shown >= self.lines.len()
    }

    /// Seconds until the next line, if any remain.
    pub fn time_to_next(&self) -> Option<f64> {
        (!self.is_finished()).then_some(self.until_next.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal(lines: &[&str]) -> LyricsReveal {
        LyricsReveal::new(
            lines.iter().map(|s| s.to_string()).collect(),
            Duration::from_millis(1500),
            Duration::from_millis(200),
        )
    }

    #[test]
    fn test_nothing_shown_before_lead_in() {
        let mut r = reveal(&["a", "b"]);
        assert_eq!(r.current(), None);
        assert!(!r.advance(0.1));
        assert_eq!(r.current(), None);
    }

    #[test]
    fn test_lines_advance_on_interval() {
        let mut r = reveal(&["a", "b", "c"]);
        assert!(r.advance(0.25));
        assert_eq!(r.current(), Some("a"));

        assert!(!r.advance(1.0));
        assert_eq!(r.current(), Some("a"));

        assert!(r.advance(0.5));
        assert_eq!(r.current(), Some("b"));
        assert_eq!(r.position(), 2);
    }

    #[test]
    fn test_last_line_stays() {
        let mut r = reveal(&["Hello", "World"]);
        r.advance(0.2);
        r.advance(1.5);
        assert_eq!(r.current(), Some("World"));
        assert!(r.is_finished());
        assert!(!r.advance(100.0));
        assert_eq!(r.current(), Some("World"));
        assert_eq!(r.time_to_next(), None);
    }

    #[test]
    fn test_reveal_sequence_order() {
        let mut r = reveal(&["Hello", "World"]);
        let mut seen = Vec::new();
        for _ in 0..300 {
            if r.advance(1.0 / 60.0) {
                seen.push(r.current().unwrap().to_string());
            }
        }
        assert_eq!(seen, vec!["Hello", "World"]);
    }

    #[test]
    fn test_large_step_catches_up() {
        let mut r = reveal(&["a", "b", "c", "d"]);
        assert!(r.advance(10.0));
        assert_eq!(r.current(), Some("d"));
    }

    #[test]
    fn test_empty_sequence() {
        let mut r = reveal(&[]);
        assert!(r.is_empty());
        assert!(r.is_finished());
        assert!(!r.advance(1.0));
        assert_eq!(r.current(), None);
    }
}
