//! Container hierarchy classification and naming.
//!
//! Containers are classified by the depth at which the walk encounters them,
//! never by flags carried in the document. The first container found anywhere
//! is the root section; a later container whose computed depth would also be
//! 1 is demoted to level 2. Naming paths chain per-sibling-list ordinals, so
//! `"1-2-1"` reads as: first root, its second container child, that child's
//! first container child.

use lazy_static::lazy_static;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerRole {
    Section,
    Container,
    Inner,
}

impl ContainerRole {
    pub fn for_level(level: u32) -> ContainerRole {
        match level {
            0 | 1 => ContainerRole::Section,
            2 => ContainerRole::Container,
            _ => ContainerRole::Inner,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContainerRole::Section => "Section",
            ContainerRole::Container => "Container",
            ContainerRole::Inner => "Inner",
        }
    }

    pub fn title(self, path: &str) -> String {
        format!("{} {}", self.label(), path)
    }
}

/// Level for a container met while the enclosing chain is `parent_level`
/// deep. Only the first container in the whole walk may take level 1.
pub fn assign_level(parent_level: u32, root_seen: bool) -> u32 {
    let level = parent_level + 1;
    if level == 1 && root_seen {
        2
    } else {
        level
    }
}

pub fn child_path(parent: &str, ordinal: u32) -> String {
    if parent.is_empty() {
        ordinal.to_string()
    } else {
        format!("{}-{}", parent, ordinal)
    }
}

pub fn section_element_id(path: &str) -> String {
    format!("section_{}", path)
}

/// Derive a stable element id from a human title: lower-case, collapse
/// whitespace/dash/slash runs to underscores, trim the ends.
pub fn element_id_from_title(title: &str) -> String {
    lazy_static! {
        static ref SEPARATOR_RUN_RE: Regex = Regex::new(r"[\s/-]+").unwrap();
    }
    let lowered = title.to_lowercase();
    SEPARATOR_RUN_RE
        .replace_all(&lowered, "_")
        .trim_matches('_')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_for_level() {
        assert_eq!(ContainerRole::for_level(1), ContainerRole::Section);
        assert_eq!(ContainerRole::for_level(2), ContainerRole::Container);
        assert_eq!(ContainerRole::for_level(3), ContainerRole::Inner);
        assert_eq!(ContainerRole::for_level(7), ContainerRole::Inner);
    }

    #[test]
    fn test_only_first_container_takes_level_one() {
        assert_eq!(assign_level(0, false), 1);
        assert_eq!(assign_level(0, true), 2);
        assert_eq!(assign_level(1, true), 2);
        assert_eq!(assign_level(2, true), 3);
    }

    #[test]
    fn test_child_path_chains_ordinals() {
        assert_eq!(child_path("", 1), "1");
        assert_eq!(child_path("1", 2), "1-2");
        assert_eq!(child_path("1-2", 1), "1-2-1");
    }

    #[test]
    fn test_titles() {
        assert_eq!(ContainerRole::Section.title("1"), "Section 1");
        assert_eq!(ContainerRole::Container.title("1-1"), "Container 1-1");
        assert_eq!(ContainerRole::Inner.title("1-1-2"), "Inner 1-1-2");
        assert_eq!(section_element_id("1"), "section_1");
    }

    #[test]
    fn test_element_id_from_title() {
        assert_eq!(element_id_from_title("Hero Section"), "hero_section");
        assert_eq!(element_id_from_title("Top Banner / Main"), "top_banner_main");
        assert_eq!(element_id_from_title("--Call to-Action--"), "call_to_action");
        assert_eq!(element_id_from_title("   "), "");
    }
}
