//! Node-kind classification and the page-builder key vocabulary.
//!
//! Every value in a decoded layout document is exactly one of five kinds:
//! a layout container, a widget, a plain map, a list, or a scalar. All
//! downstream rules dispatch on this classification instead of probing for
//! keys ad hoc.

use serde_json::{Map, Value};

// ═══════════════════════════════════════════════════════════════════════════════
// ELEMENT TAGS
// ═══════════════════════════════════════════════════════════════════════════════

pub const KEY_EL_TYPE: &str = "elType";
pub const KEY_WIDGET_TYPE: &str = "widgetType";
pub const EL_TYPE_CONTAINER: &str = "container";

/// Widget kinds the rewriter knows how to mirror.
pub const WIDGET_TEXT: &str = "text";
pub const WIDGET_ICON_BOX: &str = "icon-box";

// ═══════════════════════════════════════════════════════════════════════════════
// STRUCTURAL KEYS
// ═══════════════════════════════════════════════════════════════════════════════

/// Protected keys: never dropped for being empty.
pub const KEY_SETTINGS: &str = "settings";
pub const KEY_ELEMENTS: &str = "elements";

pub const KEY_IS_INNER: &str = "isInner";
pub const KEY_TITLE: &str = "_title";
pub const KEY_ELEMENT_ID: &str = "_element_id";

// ═══════════════════════════════════════════════════════════════════════════════
// LAYOUT KEYS
// ═══════════════════════════════════════════════════════════════════════════════

pub const KEY_CONTENT_WIDTH: &str = "content_width";
pub const KEY_FLEX_DIRECTION: &str = "flex_direction";
pub const KEY_FLEX_SIZE: &str = "flex_size";
pub const KEY_FLEX_ALIGN_SELF: &str = "_flex_align_self";
pub const KEY_ALIGN: &str = "align";
pub const KEY_TEXT_ALIGN: &str = "text_align";
pub const KEY_POSITION: &str = "_position";

pub const WIDTH_KEYS: [&str; 3] = ["width", "width_tablet", "width_mobile"];
pub const MARGIN_KEYS: [&str; 3] = ["margin", "margin_tablet", "margin_mobile"];
pub const PADDING_KEYS: [&str; 3] = ["padding", "padding_tablet", "padding_mobile"];

// ═══════════════════════════════════════════════════════════════════════════════
// STRIP MARKERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Inline width override: blanked in place, never removed.
pub const KEY_ELEMENT_WIDTH: &str = "_element_width";

/// Custom width markers: removed, and the enclosing element node gains a
/// `flex-start` self-alignment override.
pub const KEY_ELEMENT_CUSTOM_WIDTH: &str = "_element_custom_width";
pub const KEY_ELEMENT_CUSTOM_WIDTH_TABLET: &str = "_element_custom_width_tablet";

pub const MOTION_EFFECT_PREFIX: &str = "motion_fx";

/// Settings families dropped outright when mirroring for RTL: hover states,
/// background video, shadows, sticky behavior, and custom CSS.
pub const MIRROR_ARTIFACT_PREFIXES: [&str; 5] = [
    "hover_",
    "background_video_",
    "box_shadow",
    "sticky",
    "custom_css",
];

/// Responsive variants of the absolute-position offset orientation key.
pub const OFFSET_ORIENTATION_KEYS: [&str; 3] = [
    "_offset_orientation_h",
    "_offset_orientation_h_tablet",
    "_offset_orientation_h_mobile",
];

// ═══════════════════════════════════════════════════════════════════════════════
// NODE KIND
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Container,
    Widget,
    Map,
    List,
    Scalar,
}

impl NodeKind {
    pub fn of(value: &Value) -> NodeKind {
        match value {
            Value::Object(map) => NodeKind::of_map(map),
            Value::Array(_) => NodeKind::List,
            _ => NodeKind::Scalar,
        }
    }

    pub fn of_map(map: &Map<String, Value>) -> NodeKind {
        if is_container(map) {
            NodeKind::Container
        } else if widget_kind(map).is_some() {
            NodeKind::Widget
        } else {
            NodeKind::Map
        }
    }

    pub fn is_element(self) -> bool {
        matches!(self, NodeKind::Container | NodeKind::Widget)
    }
}

pub fn is_container(map: &Map<String, Value>) -> bool {
    map.get(KEY_EL_TYPE).and_then(Value::as_str) == Some(EL_TYPE_CONTAINER)
}

/// The widget kind tag, if this map is a widget node.
pub fn widget_kind(map: &Map<String, Value>) -> Option<&str> {
    map.get(KEY_WIDGET_TYPE).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_container_classification() {
        let container = json!({ "elType": "container", "settings": {}, "elements": [] });
        assert_eq!(NodeKind::of(&container), NodeKind::Container);
    }

    #[test]
    fn test_widget_classification() {
        let widget = json!({ "elType": "widget", "widgetType": "text", "settings": {} });
        assert_eq!(NodeKind::of(&widget), NodeKind::Widget);
        if let Value::Object(map) = &widget {
            assert_eq!(widget_kind(map), Some("text"));
        }
    }

    #[test]
    fn test_plain_values() {
        assert_eq!(NodeKind::of(&json!({ "size": "10" })), NodeKind::Map);
        assert_eq!(NodeKind::of(&json!([1, 2])), NodeKind::List);
        assert_eq!(NodeKind::of(&json!("row")), NodeKind::Scalar);
        assert_eq!(NodeKind::of(&json!(null)), NodeKind::Scalar);
    }

    #[test]
    fn test_non_container_el_type_is_not_container() {
        let section = json!({ "elType": "section" });
        assert_eq!(NodeKind::of(&section), NodeKind::Map);
    }
}
