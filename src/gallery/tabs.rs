use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CarouselId, GalleryError, Slide};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GalleryId(String);

impl GalleryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GalleryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for GalleryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Primary, Variant::Secondary];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }
}

/// One tab's worth of images, e.g. the iOS screenshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantImages {
    /// Text on the tab.
    pub label: String,
    /// Short machine tag (`ios`, `android`), also used in alt text.
    pub tag: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSet {
    pub primary: VariantImages,
    pub secondary: VariantImages,
}

impl VariantSet {
    pub fn get(&self, variant: Variant) -> &VariantImages {
        match variant {
            Variant::Primary => &self.primary,
            Variant::Secondary => &self.secondary,
        }
    }
}

/// A pair of image sets driving one carousel, switched with tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabbedGallery {
    id: GalleryId,
    name: String,
    carousel: CarouselId,
    variants: VariantSet,
    active: Variant,
}

impl TabbedGallery {
    pub fn new(
        id: GalleryId,
        name: impl Into<String>,
        carousel: CarouselId,
        variants: VariantSet,
        active: Variant,
    ) -> Result<Self, GalleryError> {
        let primary = variants.primary.images.len();
        let secondary = variants.secondary.images.len();
        if primary != secondary || primary == 0 {
            return Err(GalleryError::UnevenVariants {
                gallery: id,
                primary,
                secondary,
            });
        }
        Ok(Self {
            id,
            name: name.into(),
            carousel,
            variants,
            active,
        })
    }

    pub fn id(&self) -> &GalleryId {
        &self.id
    }

    pub fn carousel(&self) -> &CarouselId {
        &self.carousel
    }

    pub fn active(&self) -> Variant {
        self.active
    }

    pub fn variants(&self) -> &VariantSet {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.primary.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slides for `variant`, alt text numbered from one.
    pub fn slides(&self, variant: Variant) -> Vec<Slide> {
        let images = self.variants.get(variant);
        let tag = images.tag.to_uppercase();
        images
            .images
            .iter()
            .enumerate()
            .map(|(i, src)| Slide::new(src, format!("{} {} - Image {}", self.name, tag, i + 1)))
            .collect()
    }

    pub(super) fn select(&mut self, variant: Variant) -> Vec<Slide> {
        self.active = variant;
        self.slides(variant)
    }
}

/// Rendered position of a single tab inside its bar.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TabMetrics {
    pub offset_left: f64,
    pub offset_width: f64,
}

/// Where the sliding highlight sits.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SliderGeometry {
    pub left: f64,
    pub width: f64,
}

impl SliderGeometry {
    pub fn style(&self) -> String {
        format!("width: {}px; left: {}px;", self.width, self.left)
    }
}

impl From<TabMetrics> for SliderGeometry {
    fn from(tab: TabMetrics) -> Self {
        Self {
            left: tab.offset_left,
            width: tab.offset_width,
        }
    }
}

/// Measured tabs of one rendered tab bar. Every bar measures itself, so a bar
/// inside the lightbox and the one on the page can differ in size while still
/// following the same active variant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TabBarLayout {
    pub primary: TabMetrics,
    pub secondary: TabMetrics,
}

impl TabBarLayout {
    pub fn slider(&self, active: Variant) -> SliderGeometry {
        match active {
            Variant::Primary => self.primary.into(),
            Variant::Secondary => self.secondary.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants(primary: usize, secondary: usize) -> VariantSet {
        VariantSet {
            primary: VariantImages {
                label: "iOS".to_string(),
                tag: "ios".to_string(),
                images: (1..=primary).map(|i| format!("/assets/ios-{i}.png")).collect(),
            },
            secondary: VariantImages {
                label: "Android".to_string(),
                tag: "android".to_string(),
                images: (1..=secondary)
                    .map(|i| format!("/assets/android-{i}.jpg"))
                    .collect(),
            },
        }
    }

    #[test]
    fn test_variant_lists_must_match() {
        let err = TabbedGallery::new(
            "hookflow".into(),
            "HookFlow",
            "projectCarouselHookflow".into(),
            variants(5, 4),
            Variant::Primary,
        )
        .unwrap_err();
        assert_eq!(
            err,
            GalleryError::UnevenVariants {
                gallery: "hookflow".into(),
                primary: 5,
                secondary: 4,
            }
        );
    }

    #[test]
    fn test_select_swaps_sources() {
        let mut g = TabbedGallery::new(
            "hookflow".into(),
            "HookFlow",
            "projectCarouselHookflow".into(),
            variants(5, 5),
            Variant::Primary,
        )
        .unwrap();
        assert_eq!(g.slides(Variant::Primary)[0].alt, "HookFlow IOS - Image 1");

        let slides = g.select(Variant::Secondary);
        assert_eq!(g.active(), Variant::Secondary);
        assert_eq!(slides.len(), 5);
        assert_eq!(slides[4].src, "/assets/android-5.jpg");
        assert_eq!(slides[4].alt, "HookFlow ANDROID - Image 5");
    }

    #[test]
    fn test_slider_follows_active_tab_in_every_bar() {
        let page = TabBarLayout {
            primary: TabMetrics {
                offset_left: 4.0,
                offset_width: 80.0,
            },
            secondary: TabMetrics {
                offset_left: 84.0,
                offset_width: 112.0,
            },
        };
        let overlay = TabBarLayout {
            primary: TabMetrics {
                offset_left: 2.0,
                offset_width: 60.0,
            },
            secondary: TabMetrics {
                offset_left: 62.0,
                offset_width: 90.0,
            },
        };
        for active in Variant::ALL {
            for layout in [page, overlay] {
                let slider = layout.slider(active);
                let tab = match active {
                    Variant::Primary => layout.primary,
                    Variant::Secondary => layout.secondary,
                };
                assert_eq!(slider.width, tab.offset_width);
                assert_eq!(slider.left, tab.offset_left);
            }
        }
        assert_eq!(
            page.slider(Variant::Secondary).style(),
            "width: 112px; left: 84px;"
        );
    }

    #[test]
    fn test_variant_serde_tags() {
        let v: Variant = serde_json::from_str("\"secondary\"").unwrap();
        assert_eq!(v, Variant::Secondary);
        assert_eq!(v.other(), Variant::Primary);
        assert_eq!(serde_json::to_string(&Variant::Primary).unwrap(), "\"primary\"");
        assert_eq!(Variant::Primary.as_str(), "primary");
    }
}
