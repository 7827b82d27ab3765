//! Page wiring around the effect layers.
//!
//! Each initializer looks up its elements in the static page and quietly does
//! nothing when they are absent:
//! - entrance overlay and background music
//! - countdown to the ceremony
//! - gallery position dots
//! - floating hearts in the finale
//! - visibility-triggered reveals

pub mod countdown;
pub mod dom;
pub mod entrance;
pub mod gallery;
pub mod hearts;
pub mod reveal;

pub use countdown::CountdownConfig;
pub use entrance::EntranceConfig;
pub use gallery::GalleryConfig;
pub use hearts::HeartStyle;
pub use reveal::RevealConfig;
