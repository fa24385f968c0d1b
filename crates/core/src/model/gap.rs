/// Skill names previously identified as unknown or weak, in stored order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapList(Vec<String>);

/// The first `limit` gap skills plus how many were left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapPreview<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl GapList {
    #[must_use]
    pub fn new(skills: Vec<String>) -> Self {
        Self(skills)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, skill: &str) -> bool {
        self.0.iter().any(|gap| gap == skill)
    }

    #[must_use]
    pub fn preview(&self, limit: usize) -> GapPreview<'_> {
        let shown_len = self.0.len().min(limit);
        GapPreview {
            shown: &self.0[..shown_len],
            hidden: self.0.len() - shown_len,
        }
    }
}

impl From<Vec<String>> for GapList {
    fn from(skills: Vec<String>) -> Self {
        Self::new(skills)
    }
}
