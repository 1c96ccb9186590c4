use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gallery::{
    Carousel, CarouselId, GalleryController, GalleryError, GalleryId, Slide, TabbedGallery,
    Variant, VariantSet,
};

const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<PortfolioData, ContentError>> = LazyLock::new(|| {
    let file = Content::get(PORTFOLIO_FILE)
        .ok_or_else(|| ContentError::Missing(PORTFOLIO_FILE.to_string()))?;
    PortfolioData::parse(&file.data)
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file `{0}` is missing")]
    Missing(String),
    #[error("couldn't parse portfolio content: {0}")]
    Parse(String),
    #[error(transparent)]
    Gallery(#[from] GalleryError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub hero: Hero,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// Fallback swatch when there is no icon.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default)]
    pub gallery: Option<ProjectGallery>,
}

/// Screenshots shown in a project's carousel. Either a fixed list of slides,
/// or two tab-switched variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectGallery {
    pub id: CarouselId,
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub tabs: Option<GalleryTabs>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryTabs {
    pub id: GalleryId,
    /// Used in generated alt text, e.g. "HookFlow IOS - Image 1".
    pub name: String,
    #[serde(default)]
    pub active: Variant,
    #[serde(flatten)]
    pub variants: VariantSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

/// The embedded portfolio, parsed and validated on first use.
pub fn portfolio() -> Result<&'static PortfolioData, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

impl PortfolioData {
    pub fn parse(bytes: &[u8]) -> Result<Self, ContentError> {
        let data: Self =
            serde_json::from_slice(bytes).map_err(|e| ContentError::Parse(e.to_string()))?;
        data.gallery_controller()?;
        Ok(data)
    }

    fn tabbed_gallery(gallery: &ProjectGallery) -> Option<Result<TabbedGallery, GalleryError>> {
        gallery.tabs.as_ref().map(|tabs| {
            TabbedGallery::new(
                tabs.id.clone(),
                &tabs.name,
                gallery.id.clone(),
                tabs.variants.clone(),
                tabs.active,
            )
        })
    }

    /// Builds the controller owning every project carousel on the page.
    pub fn gallery_controller(&self) -> Result<GalleryController, GalleryError> {
        let mut controller = GalleryController::new();
        for gallery in self.projects.iter().filter_map(|p| p.gallery.as_ref()) {
            match Self::tabbed_gallery(gallery).transpose()? {
                Some(tabbed) => {
                    let slides = tabbed.slides(tabbed.active());
                    controller.register_carousel(Carousel::new(gallery.id.clone(), slides)?)?;
                    controller.register_gallery(tabbed)?;
                }
                None => {
                    controller
                        .register_carousel(Carousel::new(gallery.id.clone(), gallery.slides.clone())?)?;
                }
            }
        }
        Ok(controller)
    }

    /// Image sources not on screen at load time: the inactive tab variants and
    /// every slide after the first.
    pub fn deferred_images(&self) -> Vec<String> {
        let mut sources = Vec::new();
        for gallery in self.projects.iter().filter_map(|p| p.gallery.as_ref()) {
            match &gallery.tabs {
                Some(tabs) => {
                    let shown = tabs.variants.get(tabs.active);
                    let hidden = tabs.variants.get(tabs.active.other());
                    sources.extend(shown.images.iter().skip(1).cloned());
                    sources.extend(hidden.images.iter().cloned());
                }
                None => sources.extend(gallery.slides.iter().skip(1).map(|s| s.src.clone())),
            }
        }
        sources
    }
}
