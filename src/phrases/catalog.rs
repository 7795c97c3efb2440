//! Categorized phrase collections

use super::embedded::CATEGORIES;
use rustc_hash::FxHashSet;

/// A named group of phrases (FOOD, PEOPLE, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    phrases: Vec<String>,
}

impl Category {
    /// Create a category, dropping blank lines and surrounding whitespace
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        Self {
            name: name.into(),
            phrases,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

/// Every phrase a game may draw from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseCatalog {
    categories: Vec<Category>,
}

impl PhraseCatalog {
    /// Build a catalog, skipping categories with no phrases
    ///
    /// A phrase that appears more than once, in any case and in any category, is
    /// kept only where it first appears.
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        let mut seen = FxHashSet::default();

        Self {
            categories: categories
                .into_iter()
                .map(|mut category| {
                    category.phrases.retain(|p| seen.insert(p.to_uppercase()));
                    category
                })
                .filter(|c| !c.phrases.is_empty())
                .collect(),
        }
    }

    /// The phrase bank shipped with the binary
    ///
    /// # Examples
    /// ```
    /// use wheel_of_fortune::phrases::PhraseCatalog;
    ///
    /// let catalog = PhraseCatalog::embedded();
    /// assert!(catalog.categories().iter().any(|c| c.name() == "FOOD"));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            CATEGORIES
                .iter()
                .map(|&(name, phrases)| Category::new(name, phrases))
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Total number of phrases across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.phrases.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
