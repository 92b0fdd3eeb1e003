// ============================================================
// Layer 4 — Context Windower
// ============================================================
// Splits a long context into overlapping windows of words.
//
// Why do we need windowing?
//   Transformer models have a maximum input length (max_seq_len).
//   The session's context can be arbitrarily long — set_context
//   enforces no limit, by contract. We can't just truncate:
//   the answer span might be in the part we cut off.
//
// Solution: sliding windows with overlap
//   - Split the context into windows of `window_size` words
//   - Each window overlaps the next by `overlap` words
//   - Overlap guarantees a span near a window boundary appears
//     whole in at least one window
//
// Example with window_size=5, overlap=2:
//   Context:  "A B C D E F G H I J"
//   Window 1: "A B C D E"          (positions 0-4)
//   Window 2: "D E F G H"          (positions 3-7)
//   Window 3: "G H I J"            (positions 6-9, last window)
//
// The stride (step between windows) = window_size - overlap.
// The provider runs inference per window and keeps the span
// with the best confidence.
//
// Reference: Rust Book §8 (Slices)

pub struct ContextWindower {
    /// Target number of words per window
    window_size: usize,
    /// Number of words shared between adjacent windows
    overlap: usize,
}

impl ContextWindower {
    /// Create a new ContextWindower.
    ///
    /// # Panics
    /// Panics if overlap >= window_size, because the stride would
    /// be zero and the slide would never advance.
    pub fn new(window_size: usize, overlap: usize) -> Self {
        assert!(
            overlap < window_size,
            "overlap ({}) must be less than window_size ({})",
            overlap,
            window_size
        );
        Self { window_size, overlap }
    }

    /// Split text into overlapping word windows.
    /// A context that fits in one window comes back as a single
    /// element; an empty context produces no windows at all.
    pub fn windows(&self, text: &str) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        let stride = self.window_size - self.overlap;

        let mut windows = Vec::new();
        let mut start   = 0usize;

        loop {
            let end = (start + self.window_size).min(words.len());
            windows.push(words[start..end].join(" "));

            if end == words.len() {
                break;
            }
            start += stride;
        }

        windows
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_windowing() {
        let w = ContextWindower::new(5, 2);
        let windows = w.windows("a b c d e f g h i j");

        assert_eq!(windows[0], "a b c d e");
        assert!(windows.len() > 1);
    }

    #[test]
    fn test_adjacent_windows_overlap() {
        let w = ContextWindower::new(4, 2);
        let windows = w.windows("a b c d e f");

        // stride = 2, so window 2 starts two words after window 1
        assert_eq!(windows[0], "a b c d");
        assert!(windows[1].starts_with("c d"));
    }

    #[test]
    fn test_short_context_is_one_window() {
        let w = ContextWindower::new(100, 10);
        let windows = w.windows("just a few words");
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0], "just a few words");
    }

    #[test]
    fn test_empty_context_has_no_windows() {
        let w = ContextWindower::new(5, 2);
        assert!(w.windows("").is_empty());
    }

    #[test]
    #[should_panic]
    fn test_overlap_must_be_less_than_window_size() {
        let _ = ContextWindower::new(5, 5);
    }
}
