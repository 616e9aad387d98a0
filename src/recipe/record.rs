use super::accessories::AccessoryList;
use crate::media::PopupMedia;
use std::fmt;
use std::str::FromStr;

/// Sort key used for a recipe with no usable cooking time.
///
/// Missing times order after every real time when ascending.
pub const MISSING_TIME_SENTINEL: u32 = u32::MAX;

/// The diet class of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DietClass {
    Vegetarian,
    Egg,
    NonVegetarian,
}

impl DietClass {
    /// The label shown in choice controls and on recipe cards.
    pub fn label(&self) -> &'static str {
        match self {
            DietClass::Vegetarian => "VEG",
            DietClass::Egg => "EGG",
            DietClass::NonVegetarian => "NON VEG",
        }
    }
}

impl fmt::Display for DietClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string does not name a known diet class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDietClass(pub String);

impl fmt::Display for UnknownDietClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown diet class '{}'", self.0)
    }
}

impl std::error::Error for UnknownDietClass {}

impl FromStr for DietClass {
    type Err = UnknownDietClass;

    /// Accepts the spellings found in recipe sheets: `VEG`, `Non Veg`,
    /// `NON-VEG`, `Eggetarian`, ... Case, spaces, hyphens and underscores
    /// are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_' | '/'))
            .flat_map(char::to_uppercase)
            .collect();

        match folded.as_str() {
            "VEG" | "VEGETARIAN" | "V" => Ok(DietClass::Vegetarian),
            "EGG" | "EGGETARIAN" | "CONTAINSEGG" => Ok(DietClass::Egg),
            "NONVEG" | "NONVEGETARIAN" | "NV" => Ok(DietClass::NonVegetarian),
            _ => Err(UnknownDietClass(s.trim().to_string())),
        }
    }
}

/// Cooking time of a recipe in whole minutes.
///
/// `fast` is the time on the cooking platform and is the value used for
/// filtering and sorting. `conventional` is the stovetop time, kept for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CookingTime {
    pub fast: Option<u32>,
    pub conventional: Option<u32>,
}

impl CookingTime {
    pub fn new(fast: Option<u32>, conventional: Option<u32>) -> Self {
        Self { fast, conventional }
    }

    /// A time with only the platform variant set.
    pub fn fast(minutes: u32) -> Self {
        Self {
            fast: Some(minutes),
            conventional: None,
        }
    }

    /// The time used by the time threshold and by sorting.
    pub fn effective(&self) -> Option<u32> {
        self.fast
    }

    /// The sort key, with a missing time mapped to [`MISSING_TIME_SENTINEL`].
    pub fn sort_key(&self) -> u32 {
        self.effective().unwrap_or(MISSING_TIME_SENTINEL)
    }
}

/// Parses minutes from free text with leading-integer semantics.
///
/// Leading whitespace and a `+` sign are skipped, then digits are read until
/// the first non-digit, so `"12 mins"` is 12. Text without leading digits, a
/// negative number, or a value that overflows `u32` yields `None`.
pub fn parse_minutes(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_end == 0 {
        return None;
    }
    unsigned[..digits_end].parse().ok()
}

/// A single recipe record. Immutable once part of a catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recipe {
    pub name: String,
    pub diet: Option<DietClass>,
    pub mode: String,
    pub cuisine: String,
    pub category: String,
    pub accessories: AccessoryList,
    pub time: CookingTime,
    pub image: String,
    pub popup: Option<PopupMedia>,
    pub ingredients: Vec<String>,
    pub output: Option<String>,
}

impl Recipe {
    /// Creates a recipe with only a name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_diet(mut self, diet: DietClass) -> Self {
        self.diet = Some(diet);
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_accessories(mut self, accessories: &str) -> Self {
        self.accessories = AccessoryList::parse(accessories);
        self
    }

    pub fn with_time(mut self, minutes: u32) -> Self {
        self.time.fast = Some(minutes);
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_popup(mut self, path: &str) -> Self {
        self.popup = PopupMedia::from_path(path);
        self
    }

    /// The cooking time used by filtering and sorting, if the record has one.
    pub fn cooking_time(&self) -> Option<u32> {
        self.time.effective()
    }
}
