//! Node rewriter.
//!
//! Runs over a node's already-cleaned `settings` map. Containers get their
//! role-specific layout forced (widths, content width, optional padding and
//! naming); widgets and absolutely-positioned elements get their directional
//! properties mirrored when RTL mirroring is requested.

use serde_json::{json, Map, Value};

use crate::hierarchy::{self, ContainerRole};
use crate::node::{
    KEY_ALIGN, KEY_CONTENT_WIDTH, KEY_ELEMENT_ID, KEY_FLEX_DIRECTION, KEY_FLEX_SIZE, KEY_POSITION,
    KEY_TEXT_ALIGN, KEY_TITLE, MARGIN_KEYS, OFFSET_ORIENTATION_KEYS, PADDING_KEYS, WIDTH_KEYS,
    WIDGET_ICON_BOX, WIDGET_TEXT,
};
use crate::options::{CompressOptions, PaddingSides, PerDevicePadding};

/// A full-width responsive dimension.
fn full_width() -> Value {
    json!({ "unit": "%", "size": 100, "sizes": [] })
}

fn padding_setting(sides: &PaddingSides) -> Value {
    json!({
        "unit": "px",
        "isLinked": false,
        "top": sides.top.clone(),
        "right": sides.right.clone(),
        "bottom": sides.bottom.clone(),
        "left": sides.left.clone(),
    })
}

pub fn rewrite_container_settings(
    settings: &mut Map<String, Value>,
    role: ContainerRole,
    path: &str,
    options: &CompressOptions,
    removed: &mut u64,
) {
    if options.strip_margins {
        remove_keys(settings, &MARGIN_KEYS, removed);
    }

    if options.auto_name_containers && !path.is_empty() {
        settings.insert(KEY_TITLE.to_string(), Value::String(role.title(path)));
        if role == ContainerRole::Section {
            settings.insert(
                KEY_ELEMENT_ID.to_string(),
                Value::String(hierarchy::section_element_id(path)),
            );
        }
    }

    match role {
        ContainerRole::Section => {
            settings.insert(KEY_CONTENT_WIDTH.to_string(), json!("full"));
            settings.insert("width".to_string(), full_width());
            if options.apply_root_padding {
                apply_padding(settings, &options.root_padding);
            }
            if options.mirror_direction {
                settings.insert(KEY_FLEX_DIRECTION.to_string(), json!("row-reverse"));
                if !options.auto_name_containers {
                    derive_element_id_from_title(settings);
                }
            }
        }
        ContainerRole::Container => {
            settings.insert(KEY_CONTENT_WIDTH.to_string(), json!("boxed"));
            remove_keys(settings, &WIDTH_KEYS, removed);
            if options.strip_level2_padding {
                remove_keys(settings, &PADDING_KEYS, removed);
            } else if options.apply_level2_padding {
                apply_padding(settings, &options.level2_padding);
            }
            if options.mirror_direction {
                settings.insert(KEY_FLEX_SIZE.to_string(), json!("none"));
                flip_row_in_place(settings);
            }
        }
        ContainerRole::Inner => {
            settings.insert(KEY_CONTENT_WIDTH.to_string(), json!("full"));
            for key in WIDTH_KEYS {
                settings.insert(key.to_string(), full_width());
            }
            if options.strip_level3_padding {
                remove_keys(settings, &PADDING_KEYS, removed);
            } else if options.apply_level3_padding {
                apply_padding(settings, &options.level3_padding);
            }
            if options.mirror_direction {
                flip_row_in_place(settings);
            }
        }
    }
}

/// Mirroring for widget settings; applies independently of nesting depth.
pub fn rewrite_widget_settings(
    settings: &mut Map<String, Value>,
    kind: &str,
    options: &CompressOptions,
) {
    if !options.mirror_direction {
        return;
    }
    match kind {
        WIDGET_TEXT => {
            settings.insert(KEY_ALIGN.to_string(), json!("start"));
        }
        WIDGET_ICON_BOX => {
            settings.insert(KEY_TEXT_ALIGN.to_string(), json!("start"));
        }
        _ => {}
    }
}

/// Flip `start`/`end` offsets on absolutely- or fixed-positioned elements.
pub fn mirror_absolute_offsets(settings: &mut Map<String, Value>) {
    let positioned = matches!(
        settings.get(KEY_POSITION).and_then(Value::as_str),
        Some("absolute") | Some("fixed")
    );
    if !positioned {
        return;
    }
    for key in OFFSET_ORIENTATION_KEYS {
        let flipped = match settings.get(key).and_then(Value::as_str) {
            Some("start") => Some("end"),
            Some("end") => Some("start"),
            _ => None,
        };
        if let Some(orientation) = flipped {
            settings.insert(key.to_string(), Value::String(orientation.to_string()));
        }
    }
}

/// `"row"` flips to `"row-reverse"`; anything else is left alone.
pub fn flip_row_direction(value: &Value) -> Option<Value> {
    match value.as_str() {
        Some("row") => Some(json!("row-reverse")),
        _ => None,
    }
}

fn flip_row_in_place(settings: &mut Map<String, Value>) {
    let flipped = settings
        .get(KEY_FLEX_DIRECTION)
        .and_then(flip_row_direction);
    if let Some(direction) = flipped {
        settings.insert(KEY_FLEX_DIRECTION.to_string(), direction);
    }
}

fn remove_keys(settings: &mut Map<String, Value>, keys: &[&str], removed: &mut u64) {
    for key in keys {
        if settings.shift_remove(*key).is_some() {
            *removed += 1;
        }
    }
}

fn apply_padding(settings: &mut Map<String, Value>, padding: &PerDevicePadding) {
    settings.insert("padding".to_string(), padding_setting(&padding.desktop));
    settings.insert(
        "padding_tablet".to_string(),
        padding_setting(&padding.tablet),
    );
    settings.insert(
        "padding_mobile".to_string(),
        padding_setting(&padding.mobile),
    );
}

fn derive_element_id_from_title(settings: &mut Map<String, Value>) {
    let has_id = settings
        .get(KEY_ELEMENT_ID)
        .and_then(Value::as_str)
        .map(|id| !id.is_empty())
        .unwrap_or(false);
    if has_id {
        return;
    }
    let id = match settings.get(KEY_TITLE).and_then(Value::as_str) {
        Some(title) => hierarchy::element_id_from_title(title),
        None => return,
    };
    if !id.is_empty() {
        settings.insert(KEY_ELEMENT_ID.to_string(), Value::String(id));
    }
}
