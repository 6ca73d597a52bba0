/// Where a piece of acquired content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// A company's public sustainability/ESG page.
    Sustainability,
    /// An excerpt of a regulatory filing.
    Filing,
    /// No source produced content; the text is empty.
    None,
}

/// Raw text acquired for one company, tagged by source. Ephemeral — lives
/// only for the duration of that company's collection pass.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub text: String,
    pub source: ContentSource,
}

impl PageContent {
    /// The degraded no-content value returned when every candidate fails.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            source: ContentSource::None,
        }
    }
}
