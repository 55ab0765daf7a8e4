//! Attribute schema of the templated rule resource.
//!
//! The host validates declared input against this table before invoking any lifecycle
//! operation. Nothing in this crate validates against it; the platform enforces the
//! domain constraints itself.

/// Minutes of trailing traffic a rule may examine.
pub const VALID_INTERVALS: [u32; 3] = [1, 10, 60];

/// Smallest accepted threshold.
pub const MIN_THRESHOLD: u32 = 1;

/// Largest accepted threshold.
pub const MAX_THRESHOLD: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    String,
    Int,
    Bool,
}

/// Declaration of one resource attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSchema {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub required: bool,
    /// Changing the value requires destroying and recreating the remote object.
    pub force_new: bool,
    pub description: &'static str,
}

pub const ATTRIBUTES: [AttributeSchema; 8] = [
    AttributeSchema {
        name: "site_short_name",
        kind: AttributeKind::String,
        required: true,
        force_new: true,
        description: "Site short name",
    },
    AttributeSchema {
        name: "tag_name",
        kind: AttributeKind::String,
        required: true,
        force_new: false,
        description: "Name of the tag whose occurrences the alert watches; must match an existing tag",
    },
    AttributeSchema {
        name: "long_name",
        kind: AttributeKind::String,
        required: false,
        force_new: false,
        description: "Human readable description",
    },
    AttributeSchema {
        name: "interval",
        kind: AttributeKind::Int,
        required: false,
        force_new: false,
        description: "Minutes of past traffic to examine; one of 1, 10 or 60",
    },
    AttributeSchema {
        name: "threshold",
        kind: AttributeKind::Int,
        required: false,
        force_new: false,
        description: "Occurrences of the tag within the interval that trigger the alert; 1 to 10000",
    },
    AttributeSchema {
        name: "block_duration_seconds",
        kind: AttributeKind::Int,
        required: false,
        force_new: false,
        description: "Seconds a triggered block stays active",
    },
    AttributeSchema {
        name: "enabled",
        kind: AttributeKind::Bool,
        required: false,
        force_new: false,
        description: "Toggles the alert",
    },
    AttributeSchema {
        name: "action",
        kind: AttributeKind::String,
        required: false,
        force_new: false,
        description: "'info' creates an incident; 'flagged' creates an incident and blocks traffic",
    },
];

/// Looks up an attribute declaration by name.
pub fn attribute(name: &str) -> Option<&'static AttributeSchema> {
    ATTRIBUTES.iter().find(|attr| attr.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_site_forces_replacement() {
        let force_new: Vec<&str> = ATTRIBUTES
            .iter()
            .filter(|attr| attr.force_new)
            .map(|attr| attr.name)
            .collect();
        assert_eq!(force_new, vec!["site_short_name"]);
    }

    #[test]
    fn test_required_attributes() {
        assert!(attribute("site_short_name").unwrap().required);
        assert!(attribute("tag_name").unwrap().required);
        assert!(!attribute("threshold").unwrap().required);
        assert_eq!(attribute("enabled").unwrap().kind, AttributeKind::Bool);
        assert!(attribute("id").is_none());
    }
}
