use serde::Deserialize;
use thiserror::Error;

/// Anchor ids of the page sections, in document order.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "projects", "skills", "contact"];

/// The section whose visibility starts the skill-bar animation.
pub const ABOUT_SECTION: &str = "about";

const PRIMARY_PROFILE: &str = include_str!("../profiles/alex_chen.json");
const STUDIO_PROFILE: &str = include_str!("../profiles/maya_rodriguez.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: String,
    pub target: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Skill {
    pub name: String,
    pub percentage: u8,
}

/// Color token of a project card. The renderer maps each to a CSS class.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
    Teal,
    Pink,
}

impl Accent {
    pub fn css_class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Green => "accent-green",
            Accent::Purple => "accent-purple",
            Accent::Orange => "accent-orange",
            Accent::Teal => "accent-teal",
            Accent::Pink => "accent-pink",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: String,
    pub accent: Accent,
    pub icon: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SkillCategory {
    pub title: String,
    pub icon: String,
    pub description: String,
    pub skills: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ContactEntry {
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub icon: String,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Hero {
    pub greeting: String,
    pub name: String,
    pub tagline: String,
    pub role_badge: String,
    pub avatar: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct About {
    pub heading: String,
    pub summary: String,
    pub journey_title: String,
    pub journey: Vec<String>,
}

/// Heading and subtitle above a page section.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SectionCopy {
    pub heading: String,
    pub subtitle: String,
}

impl SectionCopy {
    fn new(heading: &str, subtitle: &str) -> Self {
        Self {
            heading: heading.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

/// Copy for the Projects, Skills and Contact sections.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SectionTexts {
    pub projects: SectionCopy,
    pub skills: SectionCopy,
    pub contact: SectionCopy,
}

impl Default for SectionTexts {
    fn default() -> Self {
        Self {
            projects: SectionCopy::new(
                "Featured Projects",
                "A showcase of my recent work across different industries and platforms",
            ),
            skills: SectionCopy::new(
                "Skills",
                "Comprehensive design and development skills to bring your ideas to life",
            ),
            contact: SectionCopy::new(
                "Let's Work Together",
                "Ready to start your next project? Let's discuss how I can help bring your vision to life",
            ),
        }
    }
}

/// Everything one variant of the page displays.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub slug: String,
    pub brand: String,
    pub hero: Hero,
    pub about: About,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub skill_categories: Vec<SkillCategory>,
    pub contacts: Vec<ContactEntry>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub sections: SectionTexts,
    #[serde(default)]
    pub cv_url: Option<String>,
    #[serde(default = "default_acknowledgment")]
    pub acknowledgment: String,
    #[serde(default = "default_nav")]
    pub nav: Vec<NavItem>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed site profile: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("skill `{name}` has percentage {percentage}, expected 0-100")]
    PercentageOutOfRange { name: String, percentage: u8 },
    #[error("nav item `{label}` targets unknown section `{target}`")]
    UnknownSection { label: String, target: String },
    #[error("project #{index} has an empty title")]
    EmptyProjectTitle { index: usize },
    #[error("project `{title}` links to `{link}`, expected an http(s) URL")]
    InvalidLink { title: String, link: String },
}

fn default_acknowledgment() -> String {
    "Thank you for your message! I'll get back to you soon.".to_string()
}

/// Home, About, Projects, Skills, Contact.
pub fn default_nav() -> Vec<NavItem> {
    ["Home", "About", "Projects", "Skills", "Contact"]
        .into_iter()
        .zip(SECTION_IDS)
        .map(|(label, target)| NavItem {
            label: label.to_string(),
            target: target.to_string(),
        })
        .collect()
}

impl SiteConfig {
    pub fn owner(&self) -> &str {
        &self.hero.name
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(skill) = self.skills.iter().find(|s| s.percentage > 100) {
            return Err(ConfigError::PercentageOutOfRange {
                name: skill.name.clone(),
                percentage: skill.percentage,
            });
        }

        if let Some(item) = self
            .nav
            .iter()
            .find(|item| !SECTION_IDS.contains(&item.target.as_str()))
        {
            return Err(ConfigError::UnknownSection {
                label: item.label.clone(),
                target: item.target.clone(),
            });
        }

        for (index, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(ConfigError::EmptyProjectTitle { index });
            }
            if let Some(link) = &project.link {
                if !(link.starts_with("https://") || link.starts_with("http://")) {
                    return Err(ConfigError::InvalidLink {
                        title: project.title.clone(),
                        link: link.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

pub fn parse(raw: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = serde_json::from_str(raw)?;
    config.validate()?;
    Ok(config)
}

/// The page variants shipped with the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    Primary,
    Studio,
}

impl Profile {
    fn raw(self) -> &'static str {
        match self {
            Profile::Primary => PRIMARY_PROFILE,
            Profile::Studio => STUDIO_PROFILE,
        }
    }

    pub fn load(self) -> Result<SiteConfig, ConfigError> {
        parse(self.raw())
    }
}
