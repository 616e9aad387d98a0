use super::raw::RawRecipe;
use super::record::{CookingTime, DietClass, Recipe};
use crate::media::PopupMedia;
use tracing::warn;

/// A trait for record formats that can be turned into a canonical [`Recipe`].
///
/// This is the extension point for feeding the engine from a source other
/// than the bundled catalog JSON. Conversion never fails: a field that cannot
/// be interpreted falls back to its "absent" value, so one bad cell only
/// affects the record it belongs to.
///
/// # Example
///
/// ```rust
/// use saji::prelude::*;
///
/// struct SheetRow { title: String, minutes: u32 }
///
/// impl IntoRecipe for SheetRow {
///     fn into_recipe(self) -> Recipe {
///         Recipe::new(self.title).with_time(self.minutes)
///     }
/// }
///
/// let catalog = Catalog::from_records(vec![SheetRow { title: "Dal".into(), minutes: 12 }]);
/// assert_eq!(catalog.len(), 1);
/// ```
pub trait IntoRecipe {
    /// Consumes the record and converts it into a canonical recipe.
    fn into_recipe(self) -> Recipe;
}

impl IntoRecipe for Recipe {
    fn into_recipe(self) -> Recipe {
        self
    }
}

impl IntoRecipe for RawRecipe {
    fn into_recipe(self) -> Recipe {
        let name = self.name.unwrap_or_default();

        let diet = self.diet.as_deref().and_then(|raw| {
            if raw.trim().is_empty() {
                return None;
            }
            raw.parse::<DietClass>()
                .map_err(|e| warn!(recipe = %name, "{}", e))
                .ok()
        });

        // The platform time is normally the numeric `Cooking Time`; older
        // exports only carry the `On2Cook Cooking Time` text.
        let fast = self
            .cooking_time
            .as_ref()
            .and_then(|t| t.as_minutes())
            .or_else(|| self.platform_time.as_ref().and_then(|t| t.as_minutes()));
        let conventional = self.normal_time.as_ref().and_then(|t| t.as_minutes());

        Recipe {
            diet,
            mode: self.cooking_mode.unwrap_or_default(),
            cuisine: self.cuisine.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            accessories: self
                .accessories
                .map(|a| a.as_accessories())
                .unwrap_or_default(),
            time: CookingTime::new(fast, conventional),
            image: self.image.unwrap_or_default(),
            popup: self.popup_image.as_deref().and_then(PopupMedia::from_path),
            ingredients: self
                .ingredients
                .unwrap_or_default()
                .into_iter()
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty())
                .collect(),
            output: self.total_output.filter(|o| !o.trim().is_empty()),
            name,
        }
    }
}
