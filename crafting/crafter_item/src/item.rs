//! Item stacks and their identities.

use std::fmt;

/// Number of bits the damage value is shifted by when packing an
/// [`ItemIdentity`]. Registry ids occupy the low 16 bits.
pub const DAMAGE_SHIFT: u32 = 16;

/// Stable numeric id of an item kind, as assigned by the item registry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ItemId(u16);

impl ItemId {
    /// Create an id from its raw registry value.
    #[inline]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the raw registry value.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

/// Opaque per-stack data (enchantments, names, stored energy, ...).
///
/// Compared bit-for-bit. Its mere presence on a stack matters: a stack
/// carrying instance data never participates in identity-based caching,
/// even if the blob is empty.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceData(Box<[u8]>);

impl InstanceData {
    /// Wrap raw instance bytes.
    pub fn new(bytes: impl Into<Box<[u8]>>) -> Self {
        Self(bytes.into())
    }

    /// The raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// A stack of items: kind, sub-variant, count and optional instance data.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    /// Registry id of the item kind.
    pub id: ItemId,
    /// Sub-variant (metadata/damage value).
    pub damage: u16,
    /// Number of items in the stack.
    pub count: u32,
    /// Per-instance data, if any.
    pub tag: Option<InstanceData>,
}

impl ItemStack {
    /// Create an untagged stack.
    pub const fn new(id: ItemId, damage: u16, count: u32) -> Self {
        Self {
            id,
            damage,
            count,
            tag: None,
        }
    }

    /// Attach instance data to this stack.
    #[must_use]
    pub fn with_tag(mut self, tag: InstanceData) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Same stack with a different count.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Returns `true` if this stack carries instance data.
    #[inline]
    pub fn has_tag(&self) -> bool {
        self.tag.is_some()
    }

    /// Identity fingerprint of this stack (kind + sub-variant).
    #[inline]
    pub fn identity(&self) -> ItemIdentity {
        ItemIdentity::of(self)
    }

    /// Exact comparison used to decide whether two crafting results are
    /// interchangeable: kind, sub-variant, count and instance data must all
    /// agree.
    ///
    /// Identity alone is not enough. Two results of the same kind can
    /// still differ in how many items they yield or in the data they carry.
    pub fn same_item_exact(&self, other: &ItemStack) -> bool {
        self == other
    }
}

/// Packed `(damage, id)` fingerprint of an item kind.
///
/// Layout: `damage << DAMAGE_SHIFT | id`. Count and instance data are not
/// part of the identity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ItemIdentity(u32);

impl ItemIdentity {
    /// Compute the identity of a stack.
    #[inline]
    pub const fn of(stack: &ItemStack) -> Self {
        Self::from_parts(stack.id, stack.damage)
    }

    /// Pack an id and damage value.
    #[inline]
    pub const fn from_parts(id: ItemId, damage: u16) -> Self {
        Self(((damage as u32) << DAMAGE_SHIFT) | id.raw() as u32)
    }

    /// Get the packed `u32` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The registry id half.
    #[inline]
    pub const fn id(self) -> ItemId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "low 16 bits hold the id by construction"
        )]
        let raw = self.0 as u16;
        ItemId::new(raw)
    }

    /// The damage half.
    #[inline]
    pub const fn damage(self) -> u16 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "high 16 bits hold the damage by construction"
        )]
        let damage = (self.0 >> DAMAGE_SHIFT) as u16;
        damage
    }
}

impl fmt::Debug for ItemIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemIdentity({}:{})", self.id().raw(), self.damage())
    }
}
