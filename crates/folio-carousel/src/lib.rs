//! Image carousel for the folio portfolio page.
//!
//! The carousel cycles one image element through a fixed [`ImageSequence`],
//! dimming the element briefly around each swap. The same timing drives both
//! the in-process [`CarouselController`] and the browser-side script emitted
//! by [`client_script`].

pub mod controller;
pub mod script;
pub mod sequence;
pub mod state;

pub use controller::{
    CarouselController, CarouselHandle, CarouselTarget, CarouselTiming, MIN_INTERVAL,
};
pub use script::client_script;
pub use sequence::{ImageSequence, SequenceError};
pub use state::CarouselState;
