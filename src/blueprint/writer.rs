/// One indentation unit of the Blueprint dialect.
const TAB: &str = "    ";

/// Accumulates document text.
#[derive(Debug, Default)]
pub(crate) struct Writer {
    contents: String,
}

impl Writer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, text: &str) {
        self.contents.push_str(text);
    }

    pub(crate) fn line(&mut self, repeat: usize) {
        for _ in 0..repeat {
            self.contents.push('\n');
        }
    }

    pub(crate) fn tab(&mut self, repeat: usize) {
        for _ in 0..repeat {
            self.contents.push_str(TAB);
        }
    }

    /// `lines` newlines, `indent` tabs, then `+ <name>`.
    pub(crate) fn section(&mut self, name: &str, indent: usize, lines: usize) {
        self.line(lines);
        self.tab(indent);
        self.contents.push_str("+ ");
        self.contents.push_str(name);
    }

    /// The finished document: trimmed, with backslash escapes removed.
    pub(crate) fn finish(self) -> String {
        strip_slashes(self.contents.trim())
    }
}

/// Remove backslash escapes: `\x` becomes `x`, `\\` becomes `\`, and a trailing lone
/// backslash is dropped.
pub fn strip_slashes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}
