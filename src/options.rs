//! Compression options.
//!
//! All boolean switches default to off; callers that deserialize a partial
//! options object get the documented defaults for every missing field.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompressOptions {
    pub mirror_direction: bool,
    pub strip_motion_effects: bool,
    pub auto_name_containers: bool,
    pub strip_margins: bool,
    pub apply_root_padding: bool,
    pub root_padding: PerDevicePadding,
    pub apply_level2_padding: bool,
    pub level2_padding: PerDevicePadding,
    pub apply_level3_padding: bool,
    pub level3_padding: PerDevicePadding,
    pub strip_level2_padding: bool,
    pub strip_level3_padding: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerDevicePadding {
    pub desktop: PaddingSides,
    pub tablet: PaddingSides,
    pub mobile: PaddingSides,
}

/// One edge set of string magnitudes. Sides missing from the input
/// deserialize as `"0"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaddingSides {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

impl Default for PaddingSides {
    fn default() -> Self {
        PaddingSides {
            top: "0".to_string(),
            right: "0".to_string(),
            bottom: "0".to_string(),
            left: "0".to_string(),
        }
    }
}
