//! Canvas particle effects.
//!
//! Two independent layers share the same shape: a fixed-size pool of records,
//! updated and redrawn once per animation frame on its own full-viewport
//! canvas.
//! - Ambient field: gold motes that pulse and drift upward, forever.
//! - Confetti burst: tumbling rectangles, started and stopped by scrolling.
//!
//! # Example
//!
//! ```ignore
//! use invite_fx::components::effects::{AmbientStyle, ConfettiStyle, EffectsLayer};
//!
//! let armed = RwSignal::new(false);
//! view! {
//!     <EffectsLayer
//!         ambient=AmbientStyle::default()
//!         confetti=ConfettiStyle::default()
//!         armed=armed
//!     />
//! }
//! ```

mod component;
pub mod confetti;
pub mod debounce;
pub mod frame_loop;
mod layers;
pub mod particles;
mod render;
pub mod surface;
pub mod theme;
pub mod trigger;

pub use component::EffectsLayer;
pub use theme::{AmbientStyle, ConfettiStyle};
