//! Scroll-position trigger for the confetti burst.

/// Edge crossed by the watched section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
	/// The section top passed the trigger line scrolling down.
	Enter,
	/// The section top went back below the line scrolling up.
	LeaveBack,
}

/// Fires once per crossing of a line placed at `fraction` of the viewport
/// height. Scrolling back past the line re-arms it.
#[derive(Clone, Debug)]
pub struct ScrollTrigger {
	fraction: f64,
	entered: bool,
}

impl ScrollTrigger {
	pub fn new(fraction: f64) -> Self {
		Self {
			fraction,
			entered: false,
		}
	}

	/// `section_top` is the section's top edge relative to the viewport.
	pub fn update(&mut self, section_top: f64, viewport_height: f64) -> Option<Crossing> {
		let past_line = section_top <= viewport_height * self.fraction;
		match (self.entered, past_line) {
			(false, true) => {
				self.entered = true;
				Some(Crossing::Enter)
			}
			(true, false) => {
				self.entered = false;
				Some(Crossing::LeaveBack)
			}
			_ => None,
		}
	}
}
