//! Decoded patterns and the slot validation engine.
//!
//! A [`Pattern`] is decoded once from its [`PatternRecord`]. For crafting
//! patterns, decoding runs the one full recipe search against the recorded
//! grid. Afterwards every slot query only re-probes that known recipe, falls
//! back to a search for the single substituted grid when it has to, and
//! remembers the verdict.

use crafter_item::{CraftingGrid, ItemStack, GRID_SIZE};
use smallvec::SmallVec;

use crate::errors::{
    unsupported_for_processing, InvalidPatternError, PatternError, PatternResult,
};
use crate::matcher::RecipeMatcher;
use crate::record::{decode_slot, PatternRecord};
use crate::scratch::ScratchGrid;
use crate::slot_cache::{SlotStatus, SlotTestCache, Verdict};

/// A decoded crafting or processing pattern.
///
/// `R` is the recipe handle type of the [`RecipeMatcher`] it was decoded
/// with. Queries must use the same matcher.
///
/// Not shareable across threads while being queried: validation mutates the
/// verdict cache and scratch grid, so callers serialize access per pattern.
#[derive(Debug)]
pub struct Pattern<R> {
    source: PatternRecord,
    grid: CraftingGrid,
    inputs: SmallVec<[ItemStack; GRID_SIZE]>,
    outputs: Vec<ItemStack>,
    crafting: Option<CraftingState<R>>,
}

/// State only crafting patterns carry.
#[derive(Debug)]
struct CraftingState<R> {
    recipe: R,
    output: ItemStack,
    cache: SlotTestCache,
    scratch: ScratchGrid,
}

impl<R> Pattern<R> {
    /// Decode a pattern from its record.
    ///
    /// Crafting patterns are matched against `matcher` once here; a grid no
    /// recipe accepts is `NoMatchingRecipe`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn decode<M>(record: Option<&PatternRecord>, matcher: &M) -> PatternResult<Self>
    where
        M: RecipeMatcher<Recipe = R>,
    {
        let record = record.ok_or(InvalidPatternError::Missing)?;
        record.validate()?;

        let is_crafting = record.crafting;
        let mut grid = CraftingGrid::new();
        let mut inputs = SmallVec::new();
        let mut cache = SlotTestCache::new();

        for (slot, encoded) in (0u8..).zip(&record.inputs) {
            let Some(stack) = decode_slot(encoded.as_ref()) else {
                continue;
            };
            // Tagged ingredients of crafting patterns stay out of the input
            // list; the cache ignores them either way.
            if !is_crafting || !stack.has_tag() {
                cache.record(slot, &stack, Verdict::Accepted);
                inputs.push(stack.clone());
            }
            grid.set(usize::from(slot), Some(stack));
        }

        let (outputs, crafting) = if is_crafting {
            let (recipe, output) = matcher
                .find_matching_recipe(&grid)
                .ok_or(PatternError::NoMatchingRecipe)?;
            let state = CraftingState {
                recipe,
                output: output.clone(),
                cache,
                scratch: ScratchGrid::new(&grid),
            };
            (vec![output], Some(state))
        } else {
            let outputs = record
                .outputs
                .iter()
                .filter_map(|encoded| decode_slot(encoded.as_ref()))
                .collect();
            (outputs, None)
        };

        tracing::debug!(
            crafting = is_crafting,
            inputs = inputs.len(),
            outputs = outputs.len(),
            "decoded pattern"
        );

        Ok(Pattern {
            source: record.clone(),
            grid,
            inputs,
            outputs,
            crafting,
        })
    }

    /// Decode a pattern from bincode-encoded record bytes.
    pub fn from_bytes<M>(bytes: &[u8], matcher: &M) -> PatternResult<Self>
    where
        M: RecipeMatcher<Recipe = R>,
    {
        let record = PatternRecord::from_bytes(bytes)?;
        Self::decode(Some(&record), matcher)
    }

    /// Whether `candidate` can stand in `slot` without changing what the
    /// pattern crafts.
    ///
    /// Only meaningful for crafting patterns.
    pub fn is_valid_item_for_slot<M>(
        &mut self,
        matcher: &M,
        slot: usize,
        candidate: Option<&ItemStack>,
    ) -> PatternResult<bool>
    where
        M: RecipeMatcher<Recipe = R>,
    {
        let state = self
            .crafting
            .as_mut()
            .ok_or_else(|| unsupported_for_processing("is_valid_item_for_slot"))?;
        let slot = u8::try_from(slot)
            .ok()
            .filter(|&s| usize::from(s) < GRID_SIZE)
            .ok_or(PatternError::SlotOutOfRange { slot })?;

        Ok(state.test_slot(matcher, &self.grid, slot, candidate))
    }

    /// What `grid` crafts under this pattern.
    ///
    /// Checks slots in order and stops at the first rejected one. Returns the
    /// pattern's output only if all nine slots are accepted.
    pub fn get_output<M>(
        &mut self,
        matcher: &M,
        grid: &CraftingGrid,
    ) -> PatternResult<Option<ItemStack>>
    where
        M: RecipeMatcher<Recipe = R>,
    {
        if self.crafting.is_none() {
            return Err(unsupported_for_processing("get_output"));
        }

        for slot in 0..GRID_SIZE {
            if !self.is_valid_item_for_slot(matcher, slot, grid.get(slot))? {
                return Ok(None);
            }
        }
        Ok(self.outputs.first().cloned())
    }

    /// `true` for crafting patterns.
    #[inline]
    pub fn is_craftable(&self) -> bool {
        self.crafting.is_some()
    }

    /// Fuzzy ingredient substitution is not supported.
    #[inline]
    pub fn can_substitute(&self) -> bool {
        false
    }

    /// Required inputs with their quantities.
    #[inline]
    pub fn inputs(&self) -> &[ItemStack] {
        &self.inputs
    }

    /// Produced outputs with their quantities.
    #[inline]
    pub fn outputs(&self) -> &[ItemStack] {
        &self.outputs
    }

    /// The recorded 3x3 grid.
    #[inline]
    pub fn grid(&self) -> &CraftingGrid {
        &self.grid
    }

    /// The record this pattern was decoded from.
    #[inline]
    pub fn pattern_source(&self) -> &PatternRecord {
        &self.source
    }
}

impl<R> CraftingState<R> {
    fn test_slot<M>(
        &mut self,
        matcher: &M,
        recorded: &CraftingGrid,
        slot: u8,
        candidate: Option<&ItemStack>,
    ) -> bool
    where
        M: RecipeMatcher<Recipe = R>,
    {
        let index = usize::from(slot);
        match self.cache.classify(slot, recorded.get(index), candidate) {
            SlotStatus::Accepted => return true,
            SlotStatus::Declined => return false,
            SlotStatus::Unknown => {}
        }
        // Unknown implies a present candidate.
        let Some(candidate) = candidate else {
            return false;
        };

        let verdict = {
            let probe = self.scratch.probe(recorded, index, Some(candidate));
            judge(matcher, &self.recipe, &self.output, &probe)
        };
        tracing::debug!(
            slot,
            identity = ?candidate.identity(),
            tagged = candidate.has_tag(),
            ?verdict,
            "probed slot"
        );

        self.cache.record(slot, candidate, verdict);
        verdict.is_accepted()
    }
}

/// Decide whether `grid` still crafts exactly `expected`.
///
/// The recorded recipe is tried first. If it no longer matches, or crafts
/// something else, any recipe matching the grid is accepted as long as its
/// result is identical: several recipes can share one output.
fn judge<M: RecipeMatcher>(
    matcher: &M,
    recipe: &M::Recipe,
    expected: &ItemStack,
    grid: &CraftingGrid,
) -> Verdict {
    let crafts_expected = |output: Option<&ItemStack>| {
        output.is_some_and(|output| output.same_item_exact(expected))
    };

    if matcher.matches(recipe, grid) && crafts_expected(matcher.craft(recipe, grid).as_ref()) {
        return Verdict::Accepted;
    }

    let fallback = matcher.find_matching_recipe(grid);
    if crafts_expected(fallback.as_ref().map(|(_, output)| output)) {
        tracing::trace!("accepted through another recipe");
        return Verdict::Accepted;
    }
    Verdict::Declined
}
