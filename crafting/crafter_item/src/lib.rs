//! Crafter Item - item stacks and the crafting grid.
//!
//! This crate provides the value types shared by the pattern machinery:
//! - `ItemId`, `ItemStack`, `InstanceData` - a stack of some registry item
//! - `ItemIdentity` - packed (id, damage) fingerprint used as a cache key
//! - `CraftingGrid` - the 3x3 grid recipes are matched against
//!
//! Resolving items to registry ids happens outside this crate; an `ItemId`
//! is assumed to already be the stable numeric id.

mod grid;
mod item;

pub use grid::{CraftingGrid, GRID_SIZE, GRID_WIDTH};
pub use item::{InstanceData, ItemId, ItemIdentity, ItemStack, DAMAGE_SHIFT};
