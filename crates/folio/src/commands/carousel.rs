//! Carousel preview command.

use anyhow::{Context, Result};
use folio_carousel::{CarouselController, CarouselTarget};
use folio_content::ContentPayload;

/// Carousel target that logs every change.
struct LogTarget;

impl CarouselTarget for LogTarget {
    fn set_opacity(&mut self, opacity: f32) {
        tracing::debug!("opacity {}", opacity);
    }

    fn set_source(&mut self, source: &str) {
        tracing::info!("Showing {}", source);
    }
}

/// Run the carousel in real time for `ticks` transitions.
pub async fn run(ticks: usize) -> Result<()> {
    let images = ContentPayload::portfolio().images().clone();
    tracing::info!("Showing {}", images.first());

    let mut handle = CarouselController::new(images, LogTarget).start();

    for _ in 0..ticks {
        handle
            .changed()
            .await
            .context("Carousel stopped unexpectedly")?;
    }

    let controller = handle.stop().await.context("Carousel task failed")?;

    tracing::info!(
        "Stopped after {} ticks on {} (index {})",
        ticks,
        controller.current_source(),
        controller.state().cursor()
    );

    Ok(())
}
