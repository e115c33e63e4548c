//! The content payload shared by both delivery paths.

use std::sync::OnceLock;

use folio_carousel::{client_script, CarouselTiming, ImageSequence};
use regex::Regex;

use crate::portfolio;

/// Immutable page content: title, fonts, styles, markup and the carousel
/// images the markup refers to.
///
/// The payload is opaque to both adapters. They only compose it into a
/// document or a mount fragment.
#[derive(Debug, Clone)]
pub struct ContentPayload {
    title: &'static str,
    font_links: &'static [&'static str],
    styles: &'static str,
    markup: &'static str,
    carousel_element_id: &'static str,
    images: ImageSequence,
}

impl ContentPayload {
    /// Create a payload from its parts.
    pub fn new(
        title: &'static str,
        font_links: &'static [&'static str],
        styles: &'static str,
        markup: &'static str,
        carousel_element_id: &'static str,
        images: ImageSequence,
    ) -> Self {
        Self {
            title,
            font_links,
            styles,
            markup,
            carousel_element_id,
            images,
        }
    }

    /// The portfolio page, built once per process.
    pub fn portfolio() -> &'static ContentPayload {
        static PAYLOAD: OnceLock<ContentPayload> = OnceLock::new();

        PAYLOAD.get_or_init(|| {
            let images =
                ImageSequence::new(portfolio::IMAGES).expect("portfolio images are valid references");

            ContentPayload::new(
                portfolio::TITLE,
                &portfolio::FONT_LINKS,
                portfolio::STYLES,
                portfolio::MARKUP,
                portfolio::CAROUSEL_ELEMENT_ID,
                images,
            )
        })
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn font_links(&self) -> &'static [&'static str] {
        self.font_links
    }

    pub fn styles(&self) -> &'static str {
        self.styles
    }

    pub fn markup(&self) -> &'static str {
        self.markup
    }

    pub fn carousel_element_id(&self) -> &'static str {
        self.carousel_element_id
    }

    pub fn images(&self) -> &ImageSequence {
        &self.images
    }

    /// Whether the markup contains the carousel image element.
    pub fn has_carousel(&self) -> bool {
        contains_element_id(self.markup, self.carousel_element_id)
    }

    /// Browser script that drives the carousel element.
    pub fn carousel_script(&self, timing: &CarouselTiming) -> String {
        client_script(&self.images, self.carousel_element_id, timing)
    }

    /// Style block followed by the markup, without any document wrapper.
    pub fn fragment(&self) -> String {
        self.fragment_with_styles(self.styles)
    }

    /// Like [`fragment`](Self::fragment) but with a replacement style block,
    /// e.g. a minified one.
    pub fn fragment_with_styles(&self, styles: &str) -> String {
        format!("<style>\n{}\n</style>\n\n{}", styles.trim_end(), self.markup)
    }
}

/// Whether `html` has an element whose `id` attribute is exactly `id`.
pub fn contains_element_id(html: &str, id: &str) -> bool {
    let pattern = format!(r#"<[^>]*\sid\s*=\s*["']{}["'][^>]*>"#, regex::escape(id));

    Regex::new(&pattern)
        .map(|re| re.is_match(html))
        .unwrap_or(false)
}
