/// Separator placed between consecutive page texts: one blank line.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Trimmed, non-blank page texts in document order.
///
/// Blank pages never appear as entries, so joining never produces more than
/// one blank line between two retained pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedText {
    pages: Vec<String>,
}

impl CollectedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one page's text. Returns `false` if the page was dropped
    /// because it is absent, empty, or only whitespace.
    pub fn push_page(&mut self, text: Option<&str>) -> bool {
        match text.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => {
                self.pages.push(trimmed.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Join the retained pages with [`PAGE_SEPARATOR`].
    pub fn join(&self) -> String {
        self.pages.join(PAGE_SEPARATOR)
    }
}

impl<'a> FromIterator<Option<&'a str>> for CollectedText {
    fn from_iter<I: IntoIterator<Item = Option<&'a str>>>(iter: I) -> Self {
        let mut collected = Self::new();
        for text in iter {
            collected.push_page(text);
        }
        collected
    }
}
