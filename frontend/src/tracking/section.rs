use std::fmt;

/// The fixed set of page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    /// The element id the section is rendered under.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A section's vertical span in document coordinates, measured on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub top_offset: f64,
    pub height: f64,
}

impl SectionDescriptor {
    pub fn new(id: SectionId, top_offset: f64, height: f64) -> Self {
        Self { id, top_offset, height }
    }

    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top_offset && y < self.top_offset + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_section_is_home() {
        assert_eq!(SectionId::default(), SectionId::Home);
    }

    #[test]
    fn anchors_match_element_ids() {
        assert_eq!(SectionId::Projects.anchor(), "#projects");
        assert_eq!(SectionId::Contact.to_string(), "contact");
    }

    #[test]
    fn span_excludes_its_bottom_edge() {
        let about = SectionDescriptor::new(SectionId::About, 800.0, 600.0);
        assert!(about.contains(800.0));
        assert!(about.contains(1399.9));
        assert!(!about.contains(1400.0));
        assert!(!about.contains(799.0));
    }

    #[test]
    fn zero_height_span_contains_nothing() {
        let empty = SectionDescriptor::new(SectionId::Home, 0.0, 0.0);
        assert!(!empty.contains(0.0));
    }
}
