//! Project category classification.
//!
//! Maps the small integer `type` code stored on a project row to its display
//! label and CSS class token. The mapping is a static lookup defined once
//! here so the home listing, public portfolio, and admin portfolio can never
//! drift apart.

use serde::Serialize;

/// Display metadata for a known project category code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Human-readable label shown in listings.
    pub label: &'static str,
    /// CSS-safe class token used by filter widgets.
    pub css_class: &'static str,
}

/// Classify a project type code.
///
/// Total over all inputs: codes 1..=5 yield their fixed category, anything
/// else yields `None`. Unknown codes must render as an unmapped label, never
/// fail a request.
pub fn classify(code: i16) -> Option<Category> {
    match code {
        1 => Some(Category {
            label: "Residential",
            css_class: "residential",
        }),
        2 => Some(Category {
            label: "Commercial",
            css_class: "commercial",
        }),
        3 => Some(Category {
            label: "Independent Bungalows / Villa",
            css_class: "independent",
        }),
        4 => Some(Category {
            label: "School",
            css_class: "school",
        }),
        5 => Some(Category {
            label: "Interior Design",
            css_class: "interior",
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_are_fixed() {
        let expected = [
            (1, "Residential", "residential"),
            (2, "Commercial", "commercial"),
            (3, "Independent Bungalows / Villa", "independent"),
            (4, "School", "school"),
            (5, "Interior Design", "interior"),
        ];
        for (code, label, css) in expected {
            let cat = classify(code).unwrap_or_else(|| panic!("code {code} should classify"));
            assert_eq!(cat.label, label);
            assert_eq!(cat.css_class, css);
        }
    }

    #[test]
    fn test_unknown_codes_map_to_none() {
        for code in [0, 6, -1, i16::MAX, i16::MIN] {
            assert!(classify(code).is_none(), "code {code} should be unmapped");
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        assert_eq!(classify(2), classify(2));
    }
}
