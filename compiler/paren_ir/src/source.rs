//! Source file snapshot used for diagnostics.

/// A named piece of source text.
///
/// The runtime keeps the file currently being evaluated so errors can slice
/// the offending line back out of it. Scripts given inline use the
/// `<anonymous>` path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    path: String,
    text: String,
}

impl SourceFile {
    /// Path used for inline source.
    pub const ANONYMOUS: &'static str = "<anonymous>";

    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        SourceFile {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Source that did not come from a file.
    pub fn anonymous(text: impl Into<String>) -> Self {
        Self::new(Self::ANONYMOUS, text)
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text of a 1-based line, without its terminator.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let index = usize::try_from(line.checked_sub(1)?).ok()?;
        self.text
            .split('\n')
            .nth(index)
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
    }
}

impl Default for SourceFile {
    fn default() -> Self {
        Self::anonymous("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_text_is_one_based() {
        let file = SourceFile::anonymous("(a)\n(b)\r\n(c)");
        assert_eq!(file.line_text(1), Some("(a)"));
        assert_eq!(file.line_text(2), Some("(b)"));
        assert_eq!(file.line_text(3), Some("(c)"));
        assert_eq!(file.line_text(4), None);
    }

    #[test]
    fn line_zero_has_no_text() {
        let file = SourceFile::anonymous("(a)");
        assert_eq!(file.line_text(0), None);
    }

    #[test]
    fn anonymous_path() {
        assert_eq!(SourceFile::anonymous("").path(), "<anonymous>");
        assert_eq!(SourceFile::new("lib.paren", "").path(), "lib.paren");
    }
}
