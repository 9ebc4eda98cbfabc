//! Static page content, embedded at build time and never mutated.

use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Content {
    pub owner: Owner,
    pub about: About,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
    pub footer: String,
}

impl Content {
    pub fn embedded() -> Result<Self, serde_json::Error> {
        serde_json::from_str(SITE_JSON)
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Owner {
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub tagline: String,
    pub institution: String,
    pub email: String,
}

impl Owner {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct About {
    pub lead: String,
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub fun_fact: String,
    pub traits: Vec<AboutTrait>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct AboutTrait {
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub kind: String,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "status-badge status-completed",
            ProjectStatus::InProgress => "status-badge status-in-progress",
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub github: String,
    pub demo: String,
    pub status: ProjectStatus,
    pub year: String,
}

impl Project {
    /// Title up to the first colon, used on the selector pills.
    pub fn short_title(&self) -> &str {
        self.title
            .split(':')
            .next()
            .unwrap_or(&self.title)
            .trim_end()
    }

    /// `#` marks a project without a live demo.
    pub fn demo_url(&self) -> Option<&str> {
        let demo = self.demo.trim();
        (!demo.is_empty() && demo != "#").then_some(demo)
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct ContactInfo {
    pub lead: String,
    pub intro: String,
    pub channels: Vec<Channel>,
    pub socials: Vec<SocialLink>,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    Location,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Channel {
    pub kind: ChannelKind,
    pub title: String,
    pub value: String,
}

impl Channel {
    pub fn href(&self) -> String {
        match self.kind {
            ChannelKind::Email => format!("mailto:{}", self.value),
            ChannelKind::Location => format!(
                "https://maps.google.com/?q={}",
                urlencoding::encode(&self.value)
            ),
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub username: String,
}

/// Web links open in a new tab; `mailto:` and anchors stay in place.
pub fn opens_new_tab(href: &str) -> bool {
    href.starts_with("http")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = Content::embedded().expect("site.json must deserialize");
        assert_eq!(content.owner.full_name(), "Sai Ajit Bhavaraju");
        assert_eq!(content.about.traits.len(), 4);
        assert_eq!(content.experience.len(), 3);
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.contact.socials.len(), 3);
    }

    #[test]
    fn project_short_title_stops_at_colon() {
        let content = Content::embedded().unwrap();
        assert_eq!(content.projects[0].short_title(), "LyriSync");
        assert_eq!(content.projects[1].short_title(), "Neural Network from Scratch");
    }

    #[test]
    fn placeholder_demo_is_hidden() {
        let mut project = Content::embedded().unwrap().projects.remove(0);
        assert_eq!(project.demo_url(), None);

        project.demo = "https://lyrisync.example".into();
        assert_eq!(project.demo_url(), Some("https://lyrisync.example"));
    }

    #[test]
    fn status_is_parsed_from_display_text() {
        let content = Content::embedded().unwrap();
        assert_eq!(content.projects[3].status, ProjectStatus::InProgress);
        assert_eq!(content.projects[3].status.label(), "In Progress");
    }

    #[test]
    fn location_link_is_url_encoded() {
        let channel = Channel {
            kind: ChannelKind::Location,
            title: "Location".into(),
            value: "Gwalior, Madhya Pradesh".into(),
        };
        assert_eq!(
            channel.href(),
            "https://maps.google.com/?q=Gwalior%2C%20Madhya%20Pradesh"
        );
        assert!(opens_new_tab(&channel.href()));
    }

    #[test]
    fn email_link_stays_in_tab() {
        let channel = Channel {
            kind: ChannelKind::Email,
            title: "Email".into(),
            value: "saiajit.b@gmail.com".into(),
        };
        assert_eq!(channel.href(), "mailto:saiajit.b@gmail.com");
        assert!(!opens_new_tab(&channel.href()));
    }
}
