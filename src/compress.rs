//! Recursion driver and public entry point.
//!
//! Walks the decoded layout tree depth-first, threading an explicit
//! traversal context (container level, naming path, parent key) and a
//! per-invocation walk state (removal counter, root-found flag) instead of
//! relying on shared captures. Children are cleaned before their parent's
//! settings are finalized, so the rewriter always sees cleaned maps. The
//! input is never mutated; the output tree is freshly allocated.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(feature = "napi")]
use napi_derive::napi;

use crate::filter::{property_filter, FilterAction};
use crate::hierarchy::{self, ContainerRole};
use crate::node::{self, NodeKind};
use crate::options::CompressOptions;
use crate::rewrite;

/// Nesting levels (maps and lists both count) before the walk aborts
/// instead of risking the native stack.
pub const MAX_DEPTH: usize = 128;

// ═══════════════════════════════════════════════════════════════════════════════
// RESULT & ERROR TYPES
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressOutput {
    pub tree: Value,
    pub removed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompressError {
    DepthExceeded { depth: usize },
}

impl std::fmt::Display for CompressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DepthExceeded { depth } => {
                write!(
                    f,
                    "Maximum nesting depth {} exceeded at depth {}",
                    MAX_DEPTH, depth
                )
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TRAVERSAL STATE
// ═══════════════════════════════════════════════════════════════════════════════

/// Context passed by value down the recursion.
#[derive(Debug, Clone)]
struct TraversalContext<'a> {
    /// Container depth of the enclosing chain; 0 outside any container.
    level: u32,
    /// Naming path of the enclosing container chain; empty at the top.
    path: String,
    /// Key under which the current value sits in its parent map.
    parent_key: Option<&'a str>,
    /// Structural depth, bounded by `MAX_DEPTH`.
    depth: usize,
}

/// Mutable state scoped to one `compress` invocation.
struct WalkState {
    removed: u64,
    root_seen: bool,
}

/// A cleaned value plus a pending `flex-start` self-alignment request that
/// has not yet reached an element node able to absorb it.
struct CleanOutcome {
    value: Value,
    align_request: bool,
}

// ═══════════════════════════════════════════════════════════════════════════════
// ENTRY POINT
// ═══════════════════════════════════════════════════════════════════════════════

/// Rewrite `tree` into its normalized, reduced form.
///
/// Returns the freshly built tree together with the number of key/list-item
/// removals performed during the pass.
pub fn compress(tree: &Value, options: &CompressOptions) -> Result<CompressOutput, CompressError> {
    let mut state = WalkState {
        removed: 0,
        root_seen: false,
    };
    let ctx = TraversalContext {
        level: 0,
        path: String::new(),
        parent_key: None,
        depth: 0,
    };
    let outcome = clean_value(tree, &ctx, 1, options, &mut state)?;
    debug!("compress pass removed {} entries", state.removed);
    Ok(CompressOutput {
        tree: outcome.value,
        removed: state.removed,
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECURSION DRIVER
// ═══════════════════════════════════════════════════════════════════════════════

fn clean_value<'a>(
    value: &'a Value,
    ctx: &TraversalContext<'a>,
    ordinal: u32,
    options: &CompressOptions,
    state: &mut WalkState,
) -> Result<CleanOutcome, CompressError> {
    if ctx.depth >= MAX_DEPTH {
        return Err(CompressError::DepthExceeded { depth: ctx.depth });
    }
    match value {
        Value::Object(map) => clean_object(map, ctx, ordinal, options, state),
        Value::Array(items) => clean_list(items, ctx, options, state),
        scalar => Ok(CleanOutcome {
            value: scalar.clone(),
            align_request: false,
        }),
    }
}

fn clean_list<'a>(
    items: &'a [Value],
    ctx: &TraversalContext<'a>,
    options: &CompressOptions,
    state: &mut WalkState,
) -> Result<CleanOutcome, CompressError> {
    let mut out = Vec::with_capacity(items.len());
    let mut container_ordinal = 0u32;
    let mut align_request = false;

    for item in items {
        // Sibling ordinals are scoped to this list: only container elements
        // advance the counter.
        let ordinal = if NodeKind::of(item) == NodeKind::Container {
            container_ordinal += 1;
            container_ordinal
        } else {
            1
        };
        let child_ctx = TraversalContext {
            level: ctx.level,
            path: ctx.path.clone(),
            parent_key: None,
            depth: ctx.depth + 1,
        };
        let child = clean_value(item, &child_ctx, ordinal, options, state)?;
        align_request |= child.align_request;
        if child.value.is_null() {
            trace!("pruned null element from list under {:?}", ctx.parent_key);
            state.removed += 1;
            continue;
        }
        out.push(child.value);
    }

    Ok(CleanOutcome {
        value: Value::Array(out),
        align_request,
    })
}

fn clean_object<'a>(
    map: &'a Map<String, Value>,
    ctx: &TraversalContext<'a>,
    ordinal: u32,
    options: &CompressOptions,
    state: &mut WalkState,
) -> Result<CleanOutcome, CompressError> {
    let kind = NodeKind::of_map(map);
    let (container_level, own_path) = match kind {
        NodeKind::Container => {
            let level = hierarchy::assign_level(ctx.level, state.root_seen);
            if level == 1 {
                state.root_seen = true;
            }
            (Some(level), hierarchy::child_path(&ctx.path, ordinal))
        }
        _ => (None, ctx.path.clone()),
    };

    let mut out = Map::new();
    let mut align_request = false;

    for (key, value) in map {
        match property_filter(key, value, options) {
            FilterAction::Drop => {
                state.removed += 1;
            }
            FilterAction::BlankValue => {
                out.insert(key.clone(), Value::String(String::new()));
            }
            FilterAction::DropRequestAlign => {
                state.removed += 1;
                align_request = true;
            }
            FilterAction::Recurse => {
                let child_ctx = TraversalContext {
                    level: container_level.unwrap_or(ctx.level),
                    path: own_path.clone(),
                    parent_key: Some(key.as_str()),
                    depth: ctx.depth + 1,
                };
                let child = clean_value(value, &child_ctx, 1, options, state)?;
                align_request |= child.align_request;
                let mut cleaned = child.value;

                // Directional mirroring of a flex direction sitting directly
                // in a settings map.
                if options.mirror_direction
                    && ctx.parent_key == Some(node::KEY_SETTINGS)
                    && key == node::KEY_FLEX_DIRECTION
                {
                    if let Some(flipped) = rewrite::flip_row_direction(&cleaned) {
                        cleaned = flipped;
                    }
                }

                if key == node::KEY_SETTINGS {
                    if let Value::Object(settings) = &mut cleaned {
                        finalize_settings(settings, kind, container_level, &own_path, map, options, state);
                    }
                }

                match &cleaned {
                    Value::Null => {
                        state.removed += 1;
                    }
                    Value::Object(cleaned_map)
                        if cleaned_map.is_empty()
                            && key != node::KEY_SETTINGS
                            && key != node::KEY_ELEMENTS =>
                    {
                        state.removed += 1;
                    }
                    _ => {
                        out.insert(key.clone(), cleaned);
                    }
                }
            }
        }
    }

    if align_request && kind.is_element() {
        out.insert(
            node::KEY_FLEX_ALIGN_SELF.to_string(),
            Value::String("flex-start".to_string()),
        );
        align_request = false;
    }
    if let Some(level) = container_level {
        out.insert(node::KEY_IS_INNER.to_string(), Value::Bool(level != 1));
    }

    Ok(CleanOutcome {
        value: Value::Object(out),
        align_request,
    })
}

/// Post-process a node's cleaned settings map.
fn finalize_settings(
    settings: &mut Map<String, Value>,
    kind: NodeKind,
    container_level: Option<u32>,
    path: &str,
    node_map: &Map<String, Value>,
    options: &CompressOptions,
    state: &mut WalkState,
) {
    match (kind, container_level) {
        (NodeKind::Container, Some(level)) => {
            rewrite::rewrite_container_settings(
                settings,
                ContainerRole::for_level(level),
                path,
                options,
                &mut state.removed,
            );
        }
        (NodeKind::Widget, _) => {
            if let Some(widget) = node::widget_kind(node_map) {
                rewrite::rewrite_widget_settings(settings, widget, options);
            }
        }
        _ => {}
    }
    if options.mirror_direction {
        rewrite::mirror_absolute_offsets(settings);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// NODE BRIDGE
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "napi")]
#[napi]
pub fn compress_tree_native(
    tree: serde_json::Value,
    options: serde_json::Value,
) -> napi::Result<serde_json::Value> {
    let options: CompressOptions = serde_json::from_value(options)
        .map_err(|e| napi::Error::from_reason(format!("Invalid options: {}", e)))?;
    let output = compress(&tree, &options).map_err(|e| napi::Error::from_reason(e.to_string()))?;
    serde_json::to_value(&output)
        .map_err(|e| napi::Error::from_reason(format!("Serialize error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(tree: Value) -> CompressOutput {
        compress(&tree, &CompressOptions::default()).unwrap()
    }

    #[test]
    fn test_scalars_pass_through() {
        assert_eq!(run(json!("hello")).tree, json!("hello"));
        assert_eq!(run(json!(42)).tree, json!(42));
        assert_eq!(run(json!(null)).tree, json!(null));
    }

    #[test]
    fn test_null_keys_and_elements_are_pruned_and_counted() {
        let output = run(json!({
            "keep": "yes",
            "gone": null,
            "list": ["a", null, "b", null]
        }));
        assert_eq!(
            output.tree,
            json!({ "keep": "yes", "list": ["a", "b"] })
        );
        assert_eq!(output.removed, 3);
    }

    #[test]
    fn test_maps_that_clean_down_to_empty_are_pruned() {
        let output = run(json!({
            "style": { "shadow": { "size": "", "sizes": [] } },
            "keep": { "size": "12", "sizes": [] }
        }));
        // The placeholder drop and the then-empty parent drop both count.
        assert_eq!(output.tree, json!({ "keep": { "size": "12", "sizes": [] } }));
        assert_eq!(output.removed, 2);
    }

    #[test]
    fn test_preserved_empty_settings_and_elements() {
        let output = run(json!({ "settings": {}, "elements": [], "extra": {} }));
        assert_eq!(output.tree, json!({ "settings": {}, "elements": [] }));
        assert_eq!(output.removed, 1);
    }

    #[test]
    fn test_element_width_blanked_in_place() {
        let output = run(json!({
            "settings": { "_element_width": { "unit": "px", "size": 320, "sizes": [] }, "color": "red" }
        }));
        assert_eq!(
            output.tree,
            json!({ "settings": { "_element_width": "", "color": "red" } })
        );
        assert_eq!(output.removed, 0);
    }

    #[test]
    fn test_second_top_level_container_is_not_root() {
        let tree = json!([
            { "elType": "container", "settings": {}, "elements": [] },
            { "elType": "container", "settings": {}, "elements": [] }
        ]);
        let output = run(tree);
        let containers = output.tree.as_array().unwrap();
        assert_eq!(containers[0]["isInner"], json!(false));
        assert_eq!(containers[0]["settings"]["content_width"], json!("full"));
        assert_eq!(containers[1]["isInner"], json!(true));
        assert_eq!(containers[1]["settings"]["content_width"], json!("boxed"));
    }

    #[test]
    fn test_is_inner_input_is_ignored() {
        let tree = json!({
            "elType": "container",
            "isInner": true,
            "settings": {},
            "elements": [
                { "elType": "container", "isInner": false, "settings": {}, "elements": [] }
            ]
        });
        let output = run(tree);
        assert_eq!(output.tree["isInner"], json!(false));
        assert_eq!(output.tree["elements"][0]["isInner"], json!(true));
    }

    #[test]
    fn test_depth_guard() {
        let mut tree = json!("leaf");
        for _ in 0..(MAX_DEPTH + 10) {
            tree = json!([tree]);
        }
        assert!(matches!(
            compress(&tree, &CompressOptions::default()),
            Err(CompressError::DepthExceeded { .. })
        ));
    }

    #[test]
    fn test_trees_within_depth_bound_succeed() {
        let mut tree = json!("leaf");
        for _ in 0..(MAX_DEPTH - 1) {
            tree = json!([tree]);
        }
        assert!(compress(&tree, &CompressOptions::default()).is_ok());
    }

    #[test]
    fn test_motion_effects_stripped_and_counted() {
        let mut options = CompressOptions::default();
        options.strip_motion_effects = true;
        let tree = json!({
            "settings": {
                "motion_fx_scrolling": "on",
                "motion_fx_devices": ["desktop"],
                "color": "red"
            }
        });
        let output = compress(&tree, &options).unwrap();
        assert_eq!(output.tree, json!({ "settings": { "color": "red" } }));
        assert_eq!(output.removed, 2);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let tree = json!({ "elType": "container", "settings": { "flex_direction": "row" }, "elements": [] });
        let before = tree.clone();
        let mut options = CompressOptions::default();
        options.mirror_direction = true;
        let _ = compress(&tree, &options).unwrap();
        assert_eq!(tree, before);
    }
}
