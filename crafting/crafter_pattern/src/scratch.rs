//! Scratch grid for validation probes.
//!
//! A probe swaps one candidate into a working copy of the recorded grid and
//! hands it to the recipe matcher. [`Probe`] restores the slot when it is
//! dropped, so every exit path leaves the scratch grid equal to the recorded
//! one.

use std::ops::Deref;

use crafter_item::{CraftingGrid, ItemStack};

/// Working copy of a pattern's recorded grid.
#[derive(Clone, Debug)]
pub(crate) struct ScratchGrid {
    grid: CraftingGrid,
}

impl ScratchGrid {
    pub(crate) fn new(recorded: &CraftingGrid) -> Self {
        Self {
            grid: recorded.clone(),
        }
    }

    /// Reset to `recorded`, then place `candidate` in `slot`.
    pub(crate) fn probe<'a>(
        &'a mut self,
        recorded: &'a CraftingGrid,
        slot: usize,
        candidate: Option<&ItemStack>,
    ) -> Probe<'a> {
        self.grid.clone_from(recorded);
        self.grid.set(slot, candidate.cloned());
        Probe {
            grid: &mut self.grid,
            recorded,
            slot,
        }
    }

    #[cfg(test)]
    pub(crate) fn contents(&self) -> &CraftingGrid {
        &self.grid
    }
}

/// A scratch grid with one slot substituted.
pub(crate) struct Probe<'a> {
    grid: &'a mut CraftingGrid,
    recorded: &'a CraftingGrid,
    slot: usize,
}

impl Deref for Probe<'_> {
    type Target = CraftingGrid;

    fn deref(&self) -> &CraftingGrid {
        &*self.grid
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.grid
            .set(self.slot, self.recorded.get(self.slot).cloned());
    }
}
