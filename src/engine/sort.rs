use crate::query::SortOrder;
use crate::recipe::Recipe;

/// Orders recipes by cooking time.
///
/// The sort is stable, so recipes with equal times keep their relative
/// order in both directions. A recipe without a usable time sorts as
/// [`crate::recipe::MISSING_TIME_SENTINEL`]: last when ascending, first when
/// descending.
// TODO: decide whether missing times should always sort last regardless of direction.
pub fn sort_by_time(recipes: &mut [&Recipe], order: SortOrder) {
    match order {
        SortOrder::Ascending => recipes.sort_by_key(|r| r.time.sort_key()),
        SortOrder::Descending => recipes.sort_by(|a, b| b.time.sort_key().cmp(&a.time.sort_key())),
    }
}
