//! Section Navigation
//!
//! The fixed set of content sections and the pure resolution logic behind
//! the taskbar. The table is the single source of truth: the taskbar and
//! the section markup are both generated from it.

/// One navigable content section.
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const ABOUT_SECTION: &str = "about-section";
pub const CONTACT_SECTION: &str = "contact-section";
pub const SETTINGS_SECTION: &str = "settings-section";

/// All sections, in taskbar display order.
pub const SECTIONS: &[Section] = &[
    Section { id: ABOUT_SECTION, label: "About" },
    Section { id: CONTACT_SECTION, label: "Contact" },
    Section { id: SETTINGS_SECTION, label: "Settings" },
];

/// Section shown when the URL carries no fragment.
pub const DEFAULT_SECTION: &str = ABOUT_SECTION;

/// Resolve a requested section id against the section table.
///
/// `Some` carries the canonical `'static` id. An unknown id resolves to
/// `None`, which leaves every section hidden and no trigger active. That
/// is a silent no-op, not an error.
pub fn show_target(target: &str) -> Option<&'static str> {
    SECTIONS.iter().find(|s| s.id == target).map(|s| s.id)
}

/// Resolve the section to show at page load from the raw `location.hash`.
///
/// Accepts the hash with or without its leading `#`. An empty fragment
/// falls back to [`DEFAULT_SECTION`]; anything else is returned verbatim,
/// even when it names no section.
pub fn initial_target(hash: &str) -> &str {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    if fragment.is_empty() {
        DEFAULT_SECTION
    } else {
        fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in &SECTIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_show_known_section() {
        assert_eq!(show_target("about-section"), Some(ABOUT_SECTION));
        assert_eq!(show_target("contact-section"), Some(CONTACT_SECTION));
        assert_eq!(show_target("settings-section"), Some(SETTINGS_SECTION));
    }

    #[test]
    fn test_show_unknown_section_is_noop() {
        assert_eq!(show_target("no-such-section"), None);
        assert_eq!(show_target(""), None);
    }

    #[test]
    fn test_initial_target_from_fragment() {
        assert_eq!(initial_target("#contact-section"), "contact-section");
        assert_eq!(initial_target("contact-section"), "contact-section");
    }

    #[test]
    fn test_initial_target_defaults_without_fragment() {
        assert_eq!(initial_target(""), DEFAULT_SECTION);
        assert_eq!(initial_target("#"), DEFAULT_SECTION);
    }

    #[test]
    fn test_initial_target_keeps_unknown_fragment() {
        // An unknown fragment is passed through; show_target then hides
        // everything rather than falling back to the default.
        assert_eq!(initial_target("#missing"), "missing");
        assert_eq!(show_target(initial_target("#missing")), None);
    }
}
