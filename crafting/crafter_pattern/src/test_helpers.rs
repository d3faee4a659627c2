//! Test helpers for pattern unit tests.
//!
//! Provides `StubMatcher`, a `RecipeMatcher` whose recipes are plain
//! closures and which counts every oracle call.

use std::cell::Cell;

use crafter_item::{CraftingGrid, ItemId, ItemStack};

use crate::RecipeMatcher;

type RecipeFn = Box<dyn Fn(&CraftingGrid) -> Option<ItemStack>>;

/// Oracle calls observed by a `StubMatcher`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Calls {
    pub find: usize,
    pub matches: usize,
    pub craft: usize,
}

impl Calls {
    pub fn total(self) -> usize {
        self.find + self.matches + self.craft
    }
}

/// Matcher over closure recipes. A recipe matches a grid when its closure
/// returns an output for it. Recipe handles are indices, first match wins.
#[derive(Default)]
pub struct StubMatcher {
    recipes: Vec<RecipeFn>,
    calls: Cell<Calls>,
}

impl StubMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a recipe.
    pub fn with_recipe(
        mut self,
        recipe: impl Fn(&CraftingGrid) -> Option<ItemStack> + 'static,
    ) -> Self {
        self.recipes.push(Box::new(recipe));
        self
    }

    pub fn calls(&self) -> Calls {
        self.calls.get()
    }

    pub fn reset_calls(&self) {
        self.calls.set(Calls::default());
    }

    fn bump(&self, f: impl FnOnce(&mut Calls)) {
        let mut calls = self.calls.get();
        f(&mut calls);
        self.calls.set(calls);
    }
}

impl RecipeMatcher for StubMatcher {
    type Recipe = usize;

    fn find_matching_recipe(&self, grid: &CraftingGrid) -> Option<(usize, ItemStack)> {
        self.bump(|c| c.find += 1);
        self.recipes
            .iter()
            .enumerate()
            .find_map(|(index, recipe)| recipe(grid).map(|output| (index, output)))
    }

    fn matches(&self, recipe: &usize, grid: &CraftingGrid) -> bool {
        self.bump(|c| c.matches += 1);
        self.recipes.get(*recipe).is_some_and(|r| r(grid).is_some())
    }

    fn craft(&self, recipe: &usize, grid: &CraftingGrid) -> Option<ItemStack> {
        self.bump(|c| c.craft += 1);
        self.recipes.get(*recipe).and_then(|r| r(grid))
    }
}

pub const OAK_LOG: ItemId = ItemId::new(17);
pub const JUNGLE_LOG: ItemId = ItemId::new(162);
pub const PLANKS: ItemId = ItemId::new(5);
pub const STONE: ItemId = ItemId::new(1);
pub const STICK: ItemId = ItemId::new(280);

pub fn stack(id: ItemId) -> ItemStack {
    ItemStack::new(id, 0, 1)
}

/// Single occupied slot holding an item with identity `id`.
pub fn only_in_slot(grid: &CraftingGrid, slot: usize, id: ItemId) -> bool {
    let mut occupied = grid.occupied();
    matches!(occupied.next(), Some((index, stack)) if index == slot && stack.id == id)
        && occupied.next().is_none()
}
