//! Browser-side carousel script.

use crate::controller::CarouselTiming;
use crate::sequence::ImageSequence;

/// Generate the inline script that runs the carousel in the browser.
///
/// Mirrors [`crate::CarouselController`]: one `setInterval` per transition
/// with a nested `setTimeout` for the swap. When no element with
/// `element_id` exists the script does nothing.
pub fn client_script(sequence: &ImageSequence, element_id: &str, timing: &CarouselTiming) -> String {
    // serde_json output is a valid JS literal; `</` is escaped so a reference
    // can never close the surrounding <script> tag.
    let images = serde_json::to_string(sequence.as_slice())
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/");
    let id = serde_json::to_string(element_id)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/");

    format!(
        r#"
(function() {{
  'use strict';

  const images = {images};
  const img = document.getElementById({id});
  if (!img) {{
    return;
  }}

  let currentIndex = 0;
  setInterval(function() {{
    const next = (currentIndex + 1) % images.length;
    img.style.opacity = {dimmed};
    setTimeout(function() {{
      img.src = images[next];
      img.style.opacity = {full};
      currentIndex = next;
    }}, {fade});
  }}, {interval});
}})();
"#,
        images = images,
        id = id,
        dimmed = timing.dimmed_opacity,
        full = timing.full_opacity,
        fade = timing.fade_delay.as_millis(),
        interval = timing.interval.as_millis(),
    )
}
