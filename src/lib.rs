//! # Layout Compressor Ground Truth
//!
//! Rewrites a decoded page-builder layout tree into its normalized, reduced
//! form: dead metadata stripped, structural markers collapsed, directional
//! properties optionally mirrored for RTL, and spacing/naming injected by
//! hierarchy position.
//!
//! ## Structural Invariants
//!
//! 1. **Single Root**: the first container encountered during the walk is the
//!    root section. Every later container is nested (level >= 2) even when it
//!    sits at the top of the document.
//!
//! 2. **Positional Classification**: containers are classified by the depth
//!    at which they are met, never by flags carried in the input. `isInner`
//!    is an output: `false` exactly for the root section, `true` for every
//!    other container.
//!
//! 3. **Protected Keys**: `settings` and `elements` are never dropped for
//!    being empty. Every other key whose value cleans down to an empty map
//!    is removed and counted.
//!
//! 4. **Bottom-Up Construction**: children are cleaned before a node's
//!    settings are finalized, so finalization rules (id derivation from
//!    `_title`, padding injection) always see cleaned maps. The input tree
//!    is never mutated.
//!
//! 5. **Deterministic Naming**: container titles chain per-sibling-list
//!    ordinals into hierarchical paths (`"1"`, `"1-1"`, `"1-2"`), so re-runs
//!    over the same document produce identical names.

#[cfg(feature = "napi")]
use napi_derive::napi;

mod compress;
mod filter;
mod format;
mod hierarchy;
mod node;
mod options;
mod redundancy;
mod rewrite;


pub use compress::{compress, CompressError, CompressOutput, MAX_DEPTH};
pub use format::format_bytes;
pub use hierarchy::ContainerRole;
pub use node::NodeKind;
pub use options::{CompressOptions, PaddingSides, PerDevicePadding};

#[cfg(feature = "napi")]
pub use compress::compress_tree_native;

#[cfg(feature = "napi")]
#[napi]
pub fn compressor_bridge() -> String {
    "Compressor Native Bridge Connected".to_string()
}
