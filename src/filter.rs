//! Per-key property filter.
//!
//! Each key/value pair of an object node is classified before any recursion
//! happens, in this exact precedence:
//!
//! 1. Motion-effect keys are dropped when `stripMotionEffects` is on.
//! 2. Mirror-artifact keys (hover/video/shadow/sticky/custom-CSS) are dropped
//!    when `mirrorDirection` is on.
//! 3. The inline width override is blanked in place, never dropped.
//! 4. Custom width markers are dropped and raise a `flex-start`
//!    self-alignment request for the enclosing element node.
//! 5. Redundant values are dropped without recursion (`settings` and
//!    `elements` are exempt).
//! 6. Everything else recurses.

use serde_json::Value;

use crate::node::{
    KEY_ELEMENTS, KEY_ELEMENT_CUSTOM_WIDTH, KEY_ELEMENT_CUSTOM_WIDTH_TABLET, KEY_ELEMENT_WIDTH,
    KEY_SETTINGS, MIRROR_ARTIFACT_PREFIXES, MOTION_EFFECT_PREFIX,
};
use crate::options::CompressOptions;
use crate::redundancy::is_redundant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    /// Remove the pair; counts as one removal.
    Drop,
    /// Keep the key, force its value to an empty string.
    BlankValue,
    /// Remove the pair and request `_flex_align_self` on the enclosing
    /// element node; counts as one removal.
    DropRequestAlign,
    /// Descend into the value.
    Recurse,
}

pub fn property_filter(key: &str, value: &Value, options: &CompressOptions) -> FilterAction {
    if options.strip_motion_effects && key.starts_with(MOTION_EFFECT_PREFIX) {
        return FilterAction::Drop;
    }
    if options.mirror_direction && MIRROR_ARTIFACT_PREFIXES.iter().any(|p| key.starts_with(p)) {
        return FilterAction::Drop;
    }
    if key == KEY_ELEMENT_WIDTH {
        return FilterAction::BlankValue;
    }
    if key == KEY_ELEMENT_CUSTOM_WIDTH || key == KEY_ELEMENT_CUSTOM_WIDTH_TABLET {
        return FilterAction::DropRequestAlign;
    }
    if key != KEY_SETTINGS && key != KEY_ELEMENTS && is_redundant(value) {
        return FilterAction::Drop;
    }
    FilterAction::Recurse
}
