#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Merged,
    Stale,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Merged => "merged",
            Category::Stale => "stale",
        }
    }
}

/// Per-scope deletion candidates. A branch classified as merged never also
/// appears as stale, otherwise it would be prompted for (and deleted) twice.
#[derive(Debug, Default, Clone)]
pub struct CandidateSet {
    pub merged: Vec<String>,
    pub stale: Vec<String>,
}

impl CandidateSet {
    pub fn build(merged: Vec<String>, mut stale: Vec<String>) -> Self {
        stale.retain(|name| !merged.contains(name));
        Self { merged, stale }
    }

    pub fn is_empty(&self) -> bool {
        self.merged.is_empty() && self.stale.is_empty()
    }

    pub fn len(&self) -> usize {
        self.merged.len() + self.stale.len()
    }

    /// Merged candidates first, then stale, each tagged with its category.
    pub fn entries(&self) -> Vec<(String, Category)> {
        self.merged
            .iter()
            .map(|name| (name.clone(), Category::Merged))
            .chain(
                self.stale
                    .iter()
                    .map(|name| (name.clone(), Category::Stale)),
            )
            .collect()
    }
}
