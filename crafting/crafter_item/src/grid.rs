//! The 3x3 crafting grid.

use crate::ItemStack;

/// Width (and height) of the crafting grid.
pub const GRID_WIDTH: usize = 3;

/// Number of slots in the crafting grid.
pub const GRID_SIZE: usize = GRID_WIDTH * GRID_WIDTH;

/// A 3x3 grid of optional item stacks, stored row-major.
///
/// Slot `i` sits at row `i / GRID_WIDTH`, column `i % GRID_WIDTH`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CraftingGrid {
    slots: [Option<ItemStack>; GRID_SIZE],
}

impl CraftingGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from its nine slots.
    pub const fn from_slots(slots: [Option<ItemStack>; GRID_SIZE]) -> Self {
        Self { slots }
    }

    /// Stack in `index`, or `None` if the slot is empty or out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Stack at a row/column position.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Option<&ItemStack> {
        if row >= GRID_WIDTH || col >= GRID_WIDTH {
            return None;
        }
        self.get(row * GRID_WIDTH + col)
    }

    /// Replace the contents of `index`, returning the previous stack.
    ///
    /// Indices outside the grid are ignored and return `None`.
    pub fn set(&mut self, index: usize, stack: Option<ItemStack>) -> Option<ItemStack> {
        debug_assert!(index < GRID_SIZE, "grid slot {index} out of range");
        match self.slots.get_mut(index) {
            Some(cell) => std::mem::replace(cell, stack),
            None => None,
        }
    }

    /// Iterate over all nine slots in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&ItemStack>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Iterate over the occupied slots with their indices.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &ItemStack)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|stack| (index, stack)))
    }

    /// Returns `true` if no slot holds a stack.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
