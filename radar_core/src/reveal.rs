//! Typewriter reveal of a finished report.
//!
//! [`Reveal`] owns the full text and a cursor into it. A timer calls
//! [`Reveal::tick`] at a fixed period; each tick moves the cursor forward by
//! `step` characters until the whole text is visible. [`Reveal::skip`] jumps
//! straight to the end.
//!
//! ```text
//!   Empty ──load──▶ Revealing ──tick (cursor == len)──▶ Complete
//!                       │                                  ▲
//!                       └──────────────skip────────────────┘
//! ```
//!
//! The visible text is always a prefix of the full text, never shrinks,
//! and only reaches full length on entering `Complete`. The cursor is kept as
//! a byte offset on a char boundary so multi-byte characters are never split.
//!
//! ```rust
//! use radar_core::reveal::{Reveal, RevealPhase};
//!
//! let mut reveal = Reveal::new(3);
//! reveal.load("Hello, world");
//! assert_eq!(reveal.tick(), RevealPhase::Revealing);
//! assert_eq!(reveal.visible(), "Hel");
//! reveal.skip();
//! assert_eq!(reveal.visible(), "Hello, world");
//! ```

use tracing::debug;

/// Where the reveal currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    /// Nothing to show yet (no report was handed over)
    Empty,
    /// Part of the text is visible and the timer is running
    Revealing,
    /// The whole text is visible; the timer must be stopped
    Complete,
}

impl RevealPhase {
    /// Whether a ticker should be running in this phase.
    pub fn wants_ticks(self) -> bool {
        self == RevealPhase::Revealing
    }
}

/// Typewriter state over one report text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    text: String,
    cursor: usize,
    shown_chars: usize,
    step: usize,
    phase: RevealPhase,
}

impl Reveal {
    /// An empty reveal advancing `step` characters per tick.
    /// A step of zero is treated as one.
    pub fn new(step: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            shown_chars: 0,
            step: step.max(1),
            phase: RevealPhase::Empty,
        }
    }

    /// Start revealing `text` from the beginning.
    ///
    /// An empty text leaves the reveal in [`RevealPhase::Empty`]; there is
    /// nothing to animate and nothing to export.
    pub fn load(&mut self, text: impl Into<String>) -> RevealPhase {
        self.text = text.into();
        self.cursor = 0;
        self.shown_chars = 0;
        self.phase = if self.text.is_empty() {
            RevealPhase::Empty
        } else {
            RevealPhase::Revealing
        };
        debug!(
            chars = self.text.chars().count(),
            step = self.step,
            phase = ?self.phase,
            "reveal loaded"
        );
        self.phase
    }

    /// Advance by one step. No-op outside [`RevealPhase::Revealing`].
    pub fn tick(&mut self) -> RevealPhase {
        if self.phase != RevealPhase::Revealing {
            return self.phase;
        }

        let rest = &self.text[self.cursor..];
        match rest.char_indices().nth(self.step) {
            Some((offset, _)) => {
                self.cursor += offset;
                self.shown_chars += self.step;
            }
            // `step` or fewer characters left
            None => self.finish(),
        }
        self.phase
    }

    /// Show everything now.
    pub fn skip(&mut self) -> RevealPhase {
        if self.phase == RevealPhase::Revealing {
            debug!(shown = self.shown_chars, "reveal skipped");
            self.finish();
        }
        self.phase
    }

    fn finish(&mut self) {
        if self.phase == RevealPhase::Complete {
            return;
        }
        self.cursor = self.text.len();
        self.shown_chars = self.text.chars().count();
        self.phase = RevealPhase::Complete;
        debug!(chars = self.shown_chars, "reveal complete");
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// True while the caret and the skip control should be shown.
    pub fn is_typing(&self) -> bool {
        self.phase == RevealPhase::Revealing
    }

    /// The currently visible prefix.
    pub fn visible(&self) -> &str {
        &self.text[..self.cursor]
    }

    /// The full text, regardless of progress. Exports act on this.
    pub fn full_text(&self) -> &str {
        &self.text
    }

    /// Number of characters currently visible.
    pub fn shown_chars(&self) -> usize {
        self.shown_chars
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Ticks still needed to reach [`RevealPhase::Complete`].
    pub fn remaining_ticks(&self) -> usize {
        if self.phase != RevealPhase::Revealing {
            return 0;
        }
        let remaining = self.text[self.cursor..].chars().count();
        remaining.div_ceil(self.step)
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn drain(reveal: &mut Reveal) -> Vec<String> {
        let mut frames = Vec::new();
        while reveal.phase() == RevealPhase::Revealing {
            reveal.tick();
            frames.push(reveal.visible().to_string());
            assert!(frames.len() <= 10_000, "reveal never completed");
        }
        frames
    }

    #[test]
    fn starts_empty() {
        let reveal = Reveal::new(3);
        assert_eq!(reveal.phase(), RevealPhase::Empty);
        assert_eq!(reveal.visible(), "");
        assert!(!reveal.is_typing());
    }

    #[test]
    fn ticks_in_empty_do_nothing() {
        let mut reveal = Reveal::new(3);
        assert_eq!(reveal.tick(), RevealPhase::Empty);
        assert_eq!(reveal.skip(), RevealPhase::Empty);
        assert_eq!(reveal.visible(), "");
    }

    #[test]
    fn loading_empty_text_stays_empty() {
        let mut reveal = Reveal::new(3);
        assert_eq!(reveal.load(""), RevealPhase::Empty);
    }

    #[test]
    fn advances_three_chars_per_tick() {
        let mut reveal = Reveal::new(3);
        reveal.load("abcdefghij");
        assert_eq!(reveal.visible(), "");

        let frames = drain(&mut reveal);
        assert_eq!(frames, vec!["abc", "abcdef", "abcdefghi", "abcdefghij"]);
        assert_eq!(reveal.phase(), RevealPhase::Complete);
    }

    #[test]
    fn exact_multiple_completes_on_last_step() {
        let mut reveal = Reveal::new(3);
        reveal.load("abcdef");
        assert_eq!(reveal.tick(), RevealPhase::Revealing);
        assert_eq!(reveal.tick(), RevealPhase::Complete);
        assert_eq!(reveal.visible(), "abcdef");
    }

    #[test]
    fn completes_within_ceil_len_over_step_ticks() {
        for len in 1..40usize {
            for step in 1..6usize {
                let text: String = "x".repeat(len);
                let mut reveal = Reveal::new(step);
                reveal.load(text.clone());
                assert_eq!(reveal.remaining_ticks(), len.div_ceil(step));
                let frames = drain(&mut reveal);
                assert_eq!(frames.len(), len.div_ceil(step), "len={len} step={step}");
                assert_eq!(frames.last().map(String::as_str), Some(text.as_str()));
            }
        }
    }

    #[test]
    fn visible_is_monotonic_prefix() {
        let text = "Competitive landscape:\n- Ads: 42 active\n- SEO: strong";
        let mut reveal = Reveal::new(3);
        reveal.load(text);
        let mut last = 0;
        for frame in drain(&mut reveal) {
            assert!(text.starts_with(&frame));
            assert!(frame.len() >= last);
            last = frame.len();
        }
        assert_eq!(last, text.len());
    }

    #[test]
    fn never_splits_multibyte_chars() {
        let text = "Zürich → Genève ✓ 日本語";
        let mut reveal = Reveal::new(2);
        reveal.load(text);
        for frame in drain(&mut reveal) {
            assert!(text.starts_with(&frame));
        }
        assert_eq!(reveal.visible(), text);
        assert_eq!(reveal.shown_chars(), text.chars().count());
    }

    #[test]
    fn skip_shows_everything_and_stops() {
        let mut reveal = Reveal::new(3);
        reveal.load("The quick brown fox");
        reveal.tick();
        assert_eq!(reveal.skip(), RevealPhase::Complete);
        assert_eq!(reveal.visible(), "The quick brown fox");
        assert_eq!(reveal.remaining_ticks(), 0);

        // further ticks are inert
        assert_eq!(reveal.tick(), RevealPhase::Complete);
        assert_eq!(reveal.visible(), "The quick brown fox");
    }

    #[test]
    fn skip_before_first_tick() {
        let mut reveal = Reveal::new(3);
        reveal.load("abc");
        reveal.skip();
        assert_eq!(reveal.visible(), "abc");
        assert!(!reveal.is_typing());
    }

    #[test]
    fn full_text_is_available_mid_reveal() {
        let mut reveal = Reveal::new(3);
        reveal.load("full report body");
        reveal.tick();
        assert_eq!(reveal.visible(), "ful");
        assert_eq!(reveal.full_text(), "full report body");
    }

    #[test]
    fn zero_step_is_clamped() {
        let mut reveal = Reveal::new(0);
        assert_eq!(reveal.step(), 1);
        reveal.load("ab");
        reveal.tick();
        assert_eq!(reveal.visible(), "a");
    }

    #[test]
    fn reload_restarts_from_the_beginning() {
        let mut reveal = Reveal::new(3);
        reveal.load("first");
        reveal.skip();
        assert_eq!(reveal.load("second"), RevealPhase::Revealing);
        assert_eq!(reveal.visible(), "");
    }
}
