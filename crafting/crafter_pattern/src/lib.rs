//! Crafter Pattern - decoding crafting patterns and checking substitutions.
//!
//! This crate provides:
//! - `PatternRecord` - the persisted pattern format
//! - `Pattern` - a decoded pattern and its slot validation engine
//! - `RecipeMatcher` - the recipe oracle patterns are checked against
//! - `SlotTestCache` / `SlotKey` - memoized per-slot verdicts
//!
//! # Validation
//!
//! For a crafting pattern, a UI asks "may item X go in slot S" for every
//! slot and candidate, many times per second. Each answer must agree with
//! what crafting would actually produce, and the recipe oracle is too slow
//! to ask every time. A `Pattern` runs the full recipe search once when
//! decoded and then:
//!
//! 1. answers from its verdict cache when it can,
//! 2. otherwise re-checks the recorded recipe against a scratch grid with
//!    the candidate swapped in,
//! 3. otherwise searches for any recipe crafting the identical output,
//!
//! and caches the verdict unless the candidate carries instance data.

mod errors;
mod matcher;
mod pattern;
mod record;
mod scratch;
mod slot_cache;
mod slot_key;

#[cfg(test)]
mod test_helpers;

use std::sync::Once;

pub use errors::{InvalidPatternError, PatternError, PatternResult};
pub use matcher::RecipeMatcher;
pub use pattern::Pattern;
pub use record::PatternRecord;
pub use slot_cache::{SlotStatus, SlotTestCache, Verdict};
pub use slot_key::{SlotKey, SLOT_ROTATION};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for this crate.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=crafter_pattern=debug` or `RUST_LOG=crafter_pattern=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
