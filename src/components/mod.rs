//! UI components: the canvas effect layers and the page wiring around them.

pub mod effects;
pub mod page;
