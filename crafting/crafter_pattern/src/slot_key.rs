//! Cache key for per-slot verdicts.

use std::hash::{Hash, Hasher};

use crafter_item::ItemIdentity;

/// Bits the identity is rotated by per slot index when hashing.
pub const SLOT_ROTATION: u32 = 3;

/// A (slot, item identity) pair.
///
/// Equality is field-wise. Hashing feeds a single `u32` to the hasher: the
/// packed identity rotated left by `SLOT_ROTATION * slot`, so the same item
/// lands in different buckets for different slots.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SlotKey {
    slot: u8,
    identity: ItemIdentity,
}

impl SlotKey {
    #[inline]
    pub const fn new(slot: u8, identity: ItemIdentity) -> Self {
        Self { slot, identity }
    }

    #[inline]
    pub const fn slot(self) -> u8 {
        self.slot
    }

    #[inline]
    pub const fn identity(self) -> ItemIdentity {
        self.identity
    }

    /// The mixed value fed to the hasher.
    #[inline]
    pub fn fingerprint(self) -> u32 {
        self.identity
            .raw()
            .rotate_left(SLOT_ROTATION * u32::from(self.slot))
    }
}

impl Hash for SlotKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fingerprint().hash(state);
    }
}
