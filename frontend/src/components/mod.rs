pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod header;
pub mod hero;
pub mod projects;
pub mod scroll_progress;

/// Wrapper class for a section body that slides in once visible.
pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal reveal--shown"
    } else {
        "reveal"
    }
}

/// Staggers list items entering together by a tenth of a second each.
pub fn stagger_style(index: usize) -> String {
    format!("animation-delay: {:.1}s;", index as f64 * 0.1)
}

/// Animation class applied to list items only after the section is seen.
pub fn animate_class(visible: bool, animation: &'static str) -> Option<&'static str> {
    visible.then_some(animation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_by_a_tenth() {
        assert_eq!(stagger_style(0), "animation-delay: 0.0s;");
        assert_eq!(stagger_style(3), "animation-delay: 0.3s;");
    }

    #[test]
    fn hidden_sections_do_not_animate_items() {
        assert_eq!(animate_class(false, "fade-in"), None);
        assert_eq!(animate_class(true, "fade-in"), Some("fade-in"));
        assert_eq!(reveal_class(false), "reveal");
    }
}
