//! The recipe-matching oracle.

use crafter_item::{CraftingGrid, ItemStack};

/// Source of recipe knowledge for crafting patterns.
///
/// Implementations must treat the grid as read-only input: the same grid
/// always gives the same answers. Calls are synchronous and may be
/// expensive, which is why patterns cache their verdicts.
pub trait RecipeMatcher {
    /// Handle to a recipe known to this matcher.
    type Recipe;

    /// Find any recipe matching `grid`, along with what it crafts.
    fn find_matching_recipe(&self, grid: &CraftingGrid) -> Option<(Self::Recipe, ItemStack)>;

    /// Whether `recipe` accepts `grid`.
    fn matches(&self, recipe: &Self::Recipe, grid: &CraftingGrid) -> bool;

    /// The result of crafting `recipe` from `grid`.
    fn craft(&self, recipe: &Self::Recipe, grid: &CraftingGrid) -> Option<ItemStack>;
}
