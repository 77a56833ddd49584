//! Homepage layout configuration.
//!
//! The homepage is an ordered list of sections. Platforms pick a preset
//! (`HomeLayout::classic` or `HomeLayout::with_takeout`) and hand it to
//! `views::HomePage`, which renders `HomeLayout::sections()` top to bottom.
//! Tests can assert on the section order without rendering anything.

/// Identifier for one homepage section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    MenuHighlights,
    ChefSpotlight,
    OurStory,
    Testimonials,
    HowItWorks,
    Takeout,
    Subscribe,
    Faq,
}

impl SectionId {
    /// Stable slug, used both as the DOM anchor and the `data-section` marker.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::MenuHighlights => "menu",
            Self::ChefSpotlight => "chef",
            Self::OurStory => "story",
            Self::Testimonials => "testimonials",
            Self::HowItWorks => "how-it-works",
            Self::Takeout => "takeout",
            Self::Subscribe => "subscribe",
            Self::Faq => "faq",
        }
    }
}

/// Where the testimonials section gets its reviews from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestimonialSource {
    /// Curated quotes bundled with the app; no data dependency.
    Static,
    /// Verified reviews retrieved before the page renders.
    Fetched,
}

/// Full section order. `Takeout` is skipped when a layout opts out of it.
const SECTION_ORDER: [SectionId; 9] = [
    SectionId::Hero,
    SectionId::MenuHighlights,
    SectionId::ChefSpotlight,
    SectionId::OurStory,
    SectionId::Testimonials,
    SectionId::HowItWorks,
    SectionId::Takeout,
    SectionId::Subscribe,
    SectionId::Faq,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub include_takeout: bool,
    pub testimonials: TestimonialSource,
}

impl HomeLayout {
    /// Eight sections, static testimonials. Used by the offline native shells.
    pub const fn classic() -> Self {
        Self {
            include_takeout: false,
            testimonials: TestimonialSource::Static,
        }
    }

    /// Nine sections including takeout, testimonials fetched from the server.
    pub const fn with_takeout() -> Self {
        Self {
            include_takeout: true,
            testimonials: TestimonialSource::Fetched,
        }
    }

    pub fn sections(&self) -> Vec<SectionId> {
        SECTION_ORDER
            .into_iter()
            .filter(|id| self.includes(*id))
            .collect()
    }

    pub fn includes(&self, id: SectionId) -> bool {
        id != SectionId::Takeout || self.include_takeout
    }
}
