//! A small shapeless recipe book used by the integration tests.

#![allow(
    dead_code,
    reason = "each test binary uses a different subset of the helpers"
)]

use std::cell::Cell;

use crafter_item::{CraftingGrid, ItemId, ItemIdentity, ItemStack, GRID_SIZE};
use crafter_pattern::{PatternRecord, RecipeMatcher};

pub const OAK_LOG: ItemId = ItemId::new(17);
pub const SPRUCE_LOG: ItemId = ItemId::new(18);
pub const PLANKS: ItemId = ItemId::new(5);
pub const STONE: ItemId = ItemId::new(1);

/// A shapeless recipe: the multiset of ingredient identities, in any slots.
pub struct ShapelessRecipe {
    ingredients: Vec<ItemIdentity>,
    output: ItemStack,
}

impl ShapelessRecipe {
    pub fn new(ingredients: &[ItemStack], output: ItemStack) -> Self {
        let mut ingredients: Vec<ItemIdentity> =
            ingredients.iter().map(ItemStack::identity).collect();
        ingredients.sort_unstable();
        Self {
            ingredients,
            output,
        }
    }

    fn accepts(&self, grid: &CraftingGrid) -> bool {
        let mut present: Vec<ItemIdentity> =
            grid.occupied().map(|(_, stack)| stack.identity()).collect();
        present.sort_unstable();
        present == self.ingredients
    }
}

/// Recipe book that counts how often it is consulted.
#[derive(Default)]
pub struct RecipeBook {
    recipes: Vec<ShapelessRecipe>,
    lookups: Cell<usize>,
}

impl RecipeBook {
    pub fn with(mut self, recipe: ShapelessRecipe) -> Self {
        self.recipes.push(recipe);
        self
    }

    /// Number of oracle calls so far.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    fn bump(&self) {
        self.lookups.set(self.lookups.get() + 1);
    }
}

impl RecipeMatcher for RecipeBook {
    type Recipe = usize;

    fn find_matching_recipe(&self, grid: &CraftingGrid) -> Option<(usize, ItemStack)> {
        self.bump();
        self.recipes
            .iter()
            .position(|recipe| recipe.accepts(grid))
            .map(|index| (index, self.recipes[index].output.clone()))
    }

    fn matches(&self, recipe: &usize, grid: &CraftingGrid) -> bool {
        self.bump();
        self.recipes[*recipe].accepts(grid)
    }

    fn craft(&self, recipe: &usize, _grid: &CraftingGrid) -> Option<ItemStack> {
        self.bump();
        Some(self.recipes[*recipe].output.clone())
    }
}

pub fn item(id: ItemId) -> ItemStack {
    ItemStack::new(id, 0, 1)
}

/// Crafting record with `stack` in `slot` and nothing else.
pub fn single_slot_record(slot: usize, stack: ItemStack) -> PatternRecord {
    let mut inputs = vec![None; GRID_SIZE];
    inputs[slot] = Some(stack);
    PatternRecord {
        inputs,
        outputs: Vec::new(),
        crafting: true,
    }
}

/// Planks from oak or spruce logs (4 each), and a 2-plank recipe from
/// stone, for declined substitutions.
pub fn plank_book() -> RecipeBook {
    RecipeBook::default()
        .with(ShapelessRecipe::new(
            &[item(OAK_LOG)],
            ItemStack::new(PLANKS, 0, 4),
        ))
        .with(ShapelessRecipe::new(
            &[item(SPRUCE_LOG)],
            ItemStack::new(PLANKS, 0, 4),
        ))
        .with(ShapelessRecipe::new(
            &[ItemStack::new(OAK_LOG, 3, 1)],
            ItemStack::new(PLANKS, 0, 2),
        ))
}
