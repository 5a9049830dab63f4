//! Font availability registry.

/// Source of installed font family names.
///
/// Injected into the style engine so lookups stay outside the rendering core.
pub trait FontRegistry {
    /// Installed font family names.
    fn families(&self) -> Vec<String>;

    /// Whether `family` is installed (exact name match).
    fn contains(&self, family: &str) -> bool {
        self.families().iter().any(|f| f == family)
    }
}

/// Registry backed by a fixed list of family names.
#[derive(Clone, Debug, Default)]
pub struct FixedFonts(Vec<String>);

impl FixedFonts {
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(families.into_iter().map(Into::into).collect())
    }
}

impl FontRegistry for FixedFonts {
    fn families(&self) -> Vec<String> {
        self.0.clone()
    }

    fn contains(&self, family: &str) -> bool {
        self.0.iter().any(|f| f == family)
    }
}
