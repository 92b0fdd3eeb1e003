// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Cleans raw text extracted from context files before it is
// handed to set_context. Word documents in particular carry
// formatting residue the tokenizer should never see:
//
//   - Non-breaking spaces (U+00A0) from Word formatting
//   - Zero-width spaces (U+200B) from copy-pasting
//   - Carriage returns (\r) from Windows line endings
//   - Tabs from table formatting
//   - Runs of spaces from indentation
//
// The session context is one flat string — paragraph structure
// carries no meaning for span extraction — so cleaning here is
// a single pass: normalise the problem characters to spaces,
// then collapse all whitespace runs to single spaces.
//
// Cleaning happens in the driver path, BEFORE the context is
// set. set_context itself stores whatever it is given, verbatim.
//
// Reference: Rust Book §8 (Strings in Rust)

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Normalise a raw text string into a clean, single-line
    /// context. Takes a &str and returns an owned String.
    pub fn clean(&self, text: &str) -> String {
        let normalised: String = text
            .chars()
            .map(|c| match c {
                // Unicode whitespace variants → plain space
                '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                // Any control character (tabs, \r, \n included) → space;
                // newlines are deliberately flattened because the
                // context is consumed as one string
                c if c.is_control() => ' ',
                c => c,
            })
            .collect();

        // split_whitespace both collapses runs and trims the edges
        normalised.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_multiple_spaces() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("hello   world"), "hello world");
    }

    #[test]
    fn test_trims_edges() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("  hello world  "), "hello world");
    }

    #[test]
    fn test_removes_control_chars() {
        let p = Preprocessor::new();
        // \x01 is a control character that should become a space
        assert_eq!(p.clean("hello\x01world"), "hello world");
    }

    #[test]
    fn test_flattens_newlines_and_nbsp() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("line1\r\nline2\u{00A0}end"), "line1 line2 end");
    }

    #[test]
    fn test_empty_string() {
        let p = Preprocessor::new();
        assert_eq!(p.clean(""), "");
    }
}
