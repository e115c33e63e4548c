//! Templates wrapping the payload into HTML documents.

use folio_carousel::CarouselTiming;
use minijinja::{context, Environment};

use crate::payload::ContentPayload;

/// Id of the element the static host mounts the payload into.
pub const MOUNT_ID: &str = "app";

/// Errors that can occur while rendering a document.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Failed to render template: {0}")]
    Render(#[from] minijinja::Error),
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the document and shell templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template("head.html", HEAD_TEMPLATE)
            .expect("Failed to add head template");

        env.add_template("document.html", DOCUMENT_TEMPLATE)
            .expect("Failed to add document template");

        env.add_template("shell.html", SHELL_TEMPLATE)
            .expect("Failed to add shell template");

        Self { env }
    }

    /// Render the full page: payload styles in the head, markup and the
    /// carousel script in the body.
    pub fn render_document(
        &self,
        payload: &ContentPayload,
        timing: &CarouselTiming,
    ) -> Result<String, TemplateError> {
        let script = if payload.has_carousel() {
            payload.carousel_script(timing)
        } else {
            String::new()
        };

        let tmpl = self.env.get_template("document.html")?;
        let html = tmpl.render(context! {
            title => payload.title(),
            font_links => payload.font_links(),
            styles => payload.styles().trim_end(),
            body => payload.markup().trim_end(),
            script => script,
        })?;

        Ok(html)
    }

    /// Render an empty page shell with fonts and a mount element, ready for
    /// the static host to fill.
    pub fn render_shell(&self, payload: &ContentPayload) -> Result<String, TemplateError> {
        let tmpl = self.env.get_template("shell.html")?;
        let html = tmpl.render(context! {
            title => payload.title(),
            font_links => payload.font_links(),
            mount_id => MOUNT_ID,
        })?;

        Ok(html)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const HEAD_TEMPLATE: &str = r##"  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  {% for href in font_links %}<link rel="stylesheet" href="{{ href | safe }}">
  {% endfor %}"##;

const DOCUMENT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
{% include "head.html" %}<style>
{{ styles | safe }}
  </style>
</head>
<body>
{{ body | safe }}
{% if script %}
  <script>{{ script | safe }}</script>
{% endif %}
</body>
</html>
"##;

const SHELL_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
{% include "head.html" %}
</head>
<body>
  <div id="{{ mount_id }}"></div>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use folio_carousel::ImageSequence;

    fn render() -> String {
        TemplateEngine::new()
            .render_document(ContentPayload::portfolio(), &CarouselTiming::default())
            .unwrap()
    }

    #[test]
    fn renders_full_document() {
        let html = render();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("<title>Allan Paul | Portfolio</title>").count(), 1);
        assert_eq!(html.matches("<h1>Allan Paul Permejo</h1>").count(), 1);
        assert!(html.contains("--primary: #2c3c7c;"));
        assert!(html.contains("fonts.googleapis.com/css2?family=Inter"));
    }

    #[test]
    fn embeds_carousel_script_after_markup() {
        let html = render();

        let img = html.find(r#"id="hanapp-slideshow""#).unwrap();
        let script = html.find(r#"document.getElementById("hanapp-slideshow")"#).unwrap();
        assert!(img < script);
        assert!(html.contains(r#"["hackathoncert.jpg","hanapp2.jpg","hanapp3.jpg","hanapp4.jpg"]"#));
    }

    #[test]
    fn omits_script_without_carousel() {
        let payload = ContentPayload::new(
            "Plain",
            &[],
            "p { margin: 0; }",
            "<p>No images</p>",
            "slides",
            ImageSequence::new(["a.jpg"]).unwrap(),
        );

        let html = TemplateEngine::new()
            .render_document(&payload, &CarouselTiming::default())
            .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("<p>No images</p>"));
    }

    #[test]
    fn renders_empty_shell() {
        let html = TemplateEngine::new()
            .render_shell(ContentPayload::portfolio())
            .unwrap();

        assert!(html.contains(r#"<div id="app"></div>"#));
        assert!(html.contains("<title>Allan Paul | Portfolio</title>"));
        assert!(!html.contains("Allan Paul Permejo"));
        assert!(!html.contains("<style>"));
    }
}
