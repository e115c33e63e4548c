//! Mounting the payload into a page shell.

use folio_carousel::CarouselTiming;
use folio_content::{contains_element_id, ContentPayload, MOUNT_ID};
use regex::Regex;

/// Attribute text of a tag, allowing `>` inside quoted values.
const ATTRS: &str = r#"(?:[^>"']|"[^"]*"|'[^']*')*"#;

/// Replace the contents of the element whose `id` is `mount_id`.
///
/// Returns `None` when the shell has no such element or the element is never
/// closed. Nested elements with the same tag name are balanced, so the
/// matching close tag is the one that ends the mount element. Comments and
/// the raw text of `script` and `style` elements are not scanned for tags.
pub fn inject(shell: &str, mount_id: &str, fragment: &str) -> Option<String> {
    let open_pattern = format!(
        r#"<([A-Za-z][A-Za-z0-9-]*)\b{attrs}?\sid\s*=\s*["']{id}["']{attrs}>"#,
        attrs = ATTRS,
        id = regex::escape(mount_id)
    );
    let open_re = Regex::new(&open_pattern).ok()?;
    let open = open_re.captures(shell)?;
    let open_tag = open.get(0)?;
    let tag = open.get(1)?.as_str();

    if open_tag.as_str().ends_with("/>") {
        let attrs = open_tag.as_str().trim_end_matches("/>").trim_end();
        return Some(format!(
            "{}{}>{}</{}>{}",
            &shell[..open_tag.start()],
            attrs,
            fragment,
            tag,
            &shell[open_tag.end()..]
        ));
    }

    let inner_start = open_tag.end();
    let close_start = find_matching_close(shell, inner_start, tag)?;

    Some(format!(
        "{}{}{}",
        &shell[..inner_start],
        fragment,
        &shell[close_start..]
    ))
}

/// Byte offset of the close tag balancing an element whose content starts at
/// `from`.
fn find_matching_close(html: &str, from: usize, tag: &str) -> Option<usize> {
    let tag_re = Regex::new(&format!(
        r"(?is)<!--.*?-->|<(?:script|style)\b{attrs}>.*?</(?:script|style)\s*>|(?P<tag><(?P<close>/?){tag}\b{attrs}>)",
        attrs = ATTRS,
        tag = regex::escape(tag)
    ))
    .ok()?;

    let mut depth = 1usize;
    for caps in tag_re.captures_iter(&html[from..]) {
        let Some(whole) = caps.name("tag") else {
            continue;
        };
        let closing = caps.name("close").is_some_and(|c| !c.as_str().is_empty());

        if closing {
            depth -= 1;
            if depth == 0 {
                return Some(from + whole.start());
            }
        } else if !whole.as_str().ends_with("/>") {
            depth += 1;
        }
    }

    None
}

/// A shell with the payload mounted.
#[derive(Debug, Clone)]
pub struct Mounted {
    /// The complete page
    pub html: String,

    /// Whether the carousel script was attached
    pub carousel_attached: bool,
}

/// Injects the content payload into the `app` element of a page shell.
pub struct StaticHost<'a> {
    payload: &'a ContentPayload,
    styles: Option<String>,
    timing: CarouselTiming,
}

impl<'a> StaticHost<'a> {
    pub fn new(payload: &'a ContentPayload) -> Self {
        Self {
            payload,
            styles: None,
            timing: CarouselTiming::default(),
        }
    }

    /// Use a replacement style block (e.g. minified) in the fragment.
    pub fn with_styles(mut self, styles: String) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn with_timing(mut self, timing: CarouselTiming) -> Self {
        self.timing = timing;
        self
    }

    /// The markup injected into the mount element.
    ///
    /// The carousel script is appended only when the injected content holds
    /// the carousel element.
    pub fn fragment(&self) -> (String, bool) {
        let mut fragment = match &self.styles {
            Some(styles) => self.payload.fragment_with_styles(styles),
            None => self.payload.fragment(),
        };

        let carousel = contains_element_id(&fragment, self.payload.carousel_element_id());
        if carousel {
            fragment.push_str("\n<script>");
            fragment.push_str(&self.payload.carousel_script(&self.timing));
            fragment.push_str("</script>\n");
        }

        (fragment, carousel)
    }

    /// Mount the payload into `shell`. Returns `None` (and does nothing) when
    /// the shell has no mount element.
    ///
    /// Mounting an already-mounted page replaces the previous content.
    pub fn mount(&self, shell: &str) -> Option<Mounted> {
        let (fragment, carousel_attached) = self.fragment();

        inject(shell, MOUNT_ID, &fragment).map(|html| Mounted {
            html,
            carousel_attached,
        })
    }
}
