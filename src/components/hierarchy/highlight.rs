use std::collections::HashSet;

/// Hover must rest this long (seconds) before the highlight starts to rise.
const HOVER_DELAY: f64 = 0.08;
const RISE_RATE: f64 = 1.8;
const FALL_RATE: f64 = 1.26;
/// Below this level a fading highlight is dropped.
const FADE_FLOOR: f64 = 0.01;

/// A hovered node and its tree neighbours, faded in and out over time.
///
/// After the pointer leaves, the last group stays highlighted until the
/// level has decayed, so it can be painted fading out.
#[derive(Clone, Debug, Default)]
pub struct Highlight {
	anchor: Option<usize>,
	group: HashSet<usize>,
	live: bool,
	waited: f64,
	level: f64,
}

impl Highlight {
	/// Node currently under the pointer, if any.
	pub fn hovered(&self) -> Option<usize> {
		self.anchor.filter(|_| self.live)
	}

	/// Point the highlight at `node` and its `neighbors`, or release it with `None`.
	pub fn point_at(&mut self, node: Option<usize>, neighbors: impl IntoIterator<Item = usize>) {
		if self.hovered() == node {
			return;
		}
		match node {
			Some(idx) => {
				if !self.live {
					self.waited = 0.0;
				}
				self.anchor = Some(idx);
				self.group = neighbors.into_iter().chain(Some(idx)).collect();
				self.live = true;
			}
			None => self.live = false,
		}
	}

	pub fn advance(&mut self, dt: f64) {
		if self.live {
			self.waited = (self.waited + dt).min(HOVER_DELAY);
			if self.waited >= HOVER_DELAY {
				self.level += (1.0 - self.level) * RISE_RATE * dt;
			}
			return;
		}
		self.level -= self.level * FALL_RATE * dt;
		if self.level < FADE_FLOOR {
			*self = Self::default();
		}
	}

	/// Eased-in strength in `[0, 1]`.
	pub fn level(&self) -> f64 {
		self.level
	}

	pub fn is_active(&self) -> bool {
		self.anchor.is_some()
	}

	pub fn contains(&self, idx: usize) -> bool {
		self.group.contains(&idx)
	}

	pub fn is_anchor(&self, idx: usize) -> bool {
		self.anchor == Some(idx)
	}
}
