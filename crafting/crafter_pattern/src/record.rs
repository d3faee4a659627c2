//! Serialized pattern records.
//!
//! A record is what gets persisted on a pattern item: the input slots, the
//! output slots and whether the pattern is a crafting or processing one.
//! On disk it is bincode-encoded.

use crafter_item::{ItemStack, GRID_SIZE};
use serde::{Deserialize, Serialize};

use crate::errors::{InvalidPatternError, PatternResult};

/// Persisted form of a pattern.
///
/// Field names follow the stored layout (`in`, `out`, `crafting`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecord {
    /// Input slots in grid order. Crafting patterns use up to 9.
    #[serde(rename = "in")]
    pub inputs: Vec<Option<ItemStack>>,
    /// Output slots. Only read for processing patterns.
    #[serde(rename = "out")]
    pub outputs: Vec<Option<ItemStack>>,
    /// `true` for grid recipes, `false` for fixed processing recipes.
    pub crafting: bool,
}

impl PatternRecord {
    /// Decode a bincode-encoded record.
    pub fn from_bytes(bytes: &[u8]) -> PatternResult<Self> {
        bincode::deserialize(bytes)
            .map_err(|e| InvalidPatternError::Malformed(e.to_string()).into())
    }

    /// Encode this record with bincode.
    pub fn to_bytes(&self) -> PatternResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| InvalidPatternError::Malformed(e.to_string()).into())
    }

    /// Check the structural limits of the record.
    pub(crate) fn validate(&self) -> PatternResult<()> {
        if self.inputs.len() > GRID_SIZE {
            return Err(InvalidPatternError::TooManyInputs {
                count: self.inputs.len(),
            }
            .into());
        }
        Ok(())
    }
}

/// Decode one stored slot. Absent slots and zero-sized stacks are empty.
pub(crate) fn decode_slot(slot: Option<&ItemStack>) -> Option<ItemStack> {
    slot.filter(|stack| stack.count > 0).cloned()
}
