use std::fmt;

/// The six kinds of work the studio showcases. Portfolio cards carry a
/// plain label so content authored with a category we don't know about
/// still renders (the modal falls back to the item's own description).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    LogoDesign,
    SocialMedia,
    Commercial,
    MotionGraphics,
    ColorGrading,
    Audio,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 6] = [
        ProjectCategory::LogoDesign,
        ProjectCategory::SocialMedia,
        ProjectCategory::Commercial,
        ProjectCategory::MotionGraphics,
        ProjectCategory::ColorGrading,
        ProjectCategory::Audio,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::LogoDesign => "Logo Design",
            ProjectCategory::SocialMedia => "Social Media",
            ProjectCategory::Commercial => "Commercial",
            ProjectCategory::MotionGraphics => "Motion Graphics",
            ProjectCategory::ColorGrading => "Color Grading",
            ProjectCategory::Audio => "Audio",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// Detail paragraph shown in the project modal.
    pub fn detail_text(&self) -> &'static str {
        match self {
            ProjectCategory::LogoDesign => {
                "This logo animation project showcases dynamic motion graphics with professional 4K quality output, perfect for cinema and branding applications."
            }
            ProjectCategory::SocialMedia => {
                "Complete social media content package optimized for various platforms including Instagram, YouTube, and TikTok with engaging visual elements."
            }
            ProjectCategory::Commercial => {
                "Professional commercial video editing with advanced color grading, smooth transitions, and compelling storytelling for maximum impact."
            }
            ProjectCategory::MotionGraphics => {
                "Creative motion graphics and animation work showcasing technical proficiency in After Effects and advanced animation techniques."
            }
            ProjectCategory::ColorGrading => {
                "Professional color grading and correction services to enhance visual appeal and achieve cinematic quality in your video content."
            }
            ProjectCategory::Audio => {
                "Professional audio enhancement including cleanup, mixing, sound design, and post-production for crystal clear audio quality."
            }
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One displayed unit of prior work, rendered by the grid and used as the
/// content source for the project modal.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub category: &'static str,
}

impl PortfolioItem {
    /// Category-specific detail paragraph; an unknown category label reuses
    /// the item's own description.
    pub fn detail_text(&self) -> &'static str {
        match ProjectCategory::from_label(self.category) {
            Some(category) => category.detail_text(),
            None => self.description,
        }
    }

    pub fn matches(&self, filter: ProjectFilter) -> bool {
        match filter {
            ProjectFilter::All => true,
            ProjectFilter::Category(category) => self.category == category.label(),
        }
    }
}

/// State of the portfolio grid's filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

pub fn catalog() -> &'static [PortfolioItem] {
    const CATALOG: &[PortfolioItem] = &[
        PortfolioItem {
            title: "MS Production Logo Animation",
            description: "Dynamic 4K logo reveal produced for MS Production, delivered for cinema pre-rolls and brand spots.",
            tags: &["After Effects", "4K", "Branding"],
            category: "Logo Design",
        },
        PortfolioItem {
            title: "Creator Growth Shorts Pack",
            description: "A month of short-form content cut for a lifestyle creator, tailored per platform with captions and hooks.",
            tags: &["Reels", "Shorts", "TikTok"],
            category: "Social Media",
        },
        PortfolioItem {
            title: "Streetwear Launch Spot",
            description: "Thirty-second launch commercial for a streetwear drop, edited for web and in-store screens.",
            tags: &["Commercial", "Storytelling", "Premiere Pro"],
            category: "Commercial",
        },
        PortfolioItem {
            title: "Kinetic Typography Promo",
            description: "Energetic kinetic typography piece promoting a podcast season, fully animated from the waveform up.",
            tags: &["Animation", "Typography", "After Effects"],
            category: "Motion Graphics",
        },
        PortfolioItem {
            title: "Indie Film Color Pass",
            description: "Full color grade for a 40-minute indie drama, matching three cameras into one cinematic look.",
            tags: &["DaVinci Resolve", "Cinematic", "HDR"],
            category: "Color Grading",
        },
        PortfolioItem {
            title: "Podcast Audio Restoration",
            description: "Noise cleanup, leveling and mixing for a 12-episode interview series recorded in the field.",
            tags: &["Mixing", "Restoration", "Podcast"],
            category: "Audio",
        },
    ];
    CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_label_parses_back() {
        for category in ProjectCategory::ALL {
            assert_eq!(ProjectCategory::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn unknown_label_does_not_parse() {
        assert_eq!(ProjectCategory::from_label("Wedding"), None);
        assert_eq!(ProjectCategory::from_label("logo design"), None);
    }

    #[test]
    fn known_category_uses_category_detail() {
        let item = &catalog()[0];
        assert_eq!(item.category, "Logo Design");
        assert_eq!(item.detail_text(), ProjectCategory::LogoDesign.detail_text());
    }

    #[test]
    fn unknown_category_falls_back_to_description() {
        let item = PortfolioItem {
            title: "Wedding Highlight Reel",
            description: "Same-day highlight edit for a destination wedding.",
            tags: &["Wedding"],
            category: "Wedding",
        };
        assert_eq!(item.detail_text(), item.description);
    }

    #[test]
    fn filter_all_matches_everything() {
        for item in catalog() {
            assert!(item.matches(ProjectFilter::All));
        }
    }

    #[test]
    fn category_filter_matches_only_its_items() {
        let filter = ProjectFilter::Category(ProjectCategory::Audio);
        let matching: Vec<_> = catalog().iter().filter(|i| i.matches(filter)).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].title, "Podcast Audio Restoration");
    }

    #[test]
    fn catalog_covers_every_known_category() {
        for category in ProjectCategory::ALL {
            assert!(
                catalog().iter().any(|i| i.category == category.label()),
                "no catalog item for {category}"
            );
        }
    }
}
