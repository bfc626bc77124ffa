/// A doc comment split into a one-line summary and a free-form description.
///
/// The summary runs up to the first blank line, or up to and including the first line
/// ending with a period. Whatever follows is the description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    summary: Option<String>,
    description: Option<String>,
}

impl DocBlock {
    pub fn parse(doc: &str) -> Self {
        let mut lines = doc.lines().map(str::trim_end).skip_while(|l| l.trim().is_empty());

        let mut summary: Vec<&str> = Vec::new();
        for line in lines.by_ref() {
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            summary.push(line);
            if line.ends_with('.') {
                break;
            }
        }

        let rest: Vec<&str> = lines.collect();
        let description = rest.join("\n").trim().to_string();

        Self {
            summary: non_empty(summary.join(" ")),
            description: non_empty(description),
        }
    }

    pub fn from_option(doc: Option<&str>) -> Self {
        doc.map(Self::parse).unwrap_or_default()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Summary and description, one after the other.
    pub fn text(&self) -> Option<String> {
        match (&self.summary, &self.description) {
            (Some(s), Some(d)) => Some(format!("{s}\n{d}")),
            (Some(s), None) => Some(s.clone()),
            (None, Some(d)) => Some(d.clone()),
            (None, None) => None,
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
