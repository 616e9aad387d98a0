use ahash::AHashSet;
use std::fmt;

/// The accessories a recipe needs, parsed from comma-joined text.
///
/// Tokens are trimmed, empty tokens are dropped and duplicates are removed
/// while keeping first-seen order. Membership is exact-token: a list of
/// `"Pot, Pan"` contains `"Pan"` but not `"an"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AccessoryList(Vec<String>);

impl AccessoryList {
    pub const DELIMITER: char = ',';

    /// Parses comma-joined accessory text.
    pub fn parse(raw: &str) -> Self {
        Self::from_tokens(raw.split(Self::DELIMITER))
    }

    /// Builds a list from already split tokens, applying the same trimming
    /// and de-duplication as [`AccessoryList::parse`].
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = AHashSet::new();
        let items = tokens
            .into_iter()
            .filter_map(|token| {
                let token = token.as_ref().trim();
                (!token.is_empty() && seen.insert(token.to_string())).then(|| token.to_string())
            })
            .collect();
        Self(items)
    }

    /// Exact-element membership test.
    pub fn contains(&self, accessory: &str) -> bool {
        self.0.iter().any(|a| a == accessory)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AccessoryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}
