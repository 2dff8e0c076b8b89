pub const ZOOM_MIN: f64 = 0.1;
pub const ZOOM_MAX: f64 = 4.0;
/// Seconds taken to recenter on an outline selection.
pub const FOCUS_DURATION: f64 = 0.75;
/// Settled layout extent grows with the square root of the node count.
const SPREAD_PER_ROOT_NODE: f64 = 125.0;
/// Share of the shorter viewport side the first view leaves for the layout.
const FIT_MARGIN: f64 = 0.8;

fn ease_cubic_in_out(t: f64) -> f64 {
	if t < 0.5 {
		4.0 * t * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
	}
}

/// Screen = graph * k + (x, y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	/// Starting view for `nodes` laid out around the viewport midpoint.
	///
	/// Zooms out, never in, so that a settled layout of that size fits. The
	/// midpoint stays fixed on screen.
	pub fn fitted(nodes: usize, width: f64, height: f64) -> Self {
		let extent = SPREAD_PER_ROOT_NODE * (nodes.max(1) as f64).sqrt();
		let k = (width.min(height) * FIT_MARGIN / extent).clamp(ZOOM_MIN, 1.0);
		Self {
			x: width / 2.0 * (1.0 - k),
			y: height / 2.0 * (1.0 - k),
			k,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	pub fn graph_to_screen(&self, gx: f64, gy: f64) -> (f64, f64) {
		(gx * self.k + self.x, gy * self.k + self.y)
	}

	/// Scale by `factor` around the screen point `(sx, sy)`, clamped to
	/// `[ZOOM_MIN, ZOOM_MAX]`.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.k * factor).clamp(ZOOM_MIN, ZOOM_MAX);
		let ratio = new_k / self.k;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
		self.k = new_k;
	}

	/// Transform with the same scale that puts graph point `(gx, gy)` at the
	/// viewport midpoint.
	pub fn centered_on(&self, gx: f64, gy: f64, width: f64, height: f64) -> Self {
		Self {
			x: width / 2.0 - gx * self.k,
			y: height / 2.0 - gy * self.k,
			k: self.k,
		}
	}

	fn lerp(&self, to: &Self, t: f64) -> Self {
		Self {
			x: self.x + (to.x - self.x) * t,
			y: self.y + (to.y - self.y) * t,
			k: (self.k + (to.k - self.k) * t).clamp(ZOOM_MIN, ZOOM_MAX),
		}
	}
}

#[derive(Clone, Debug)]
pub struct FocusTransition {
	from: ViewTransform,
	to: ViewTransform,
	elapsed: f64,
	duration: f64,
}

impl FocusTransition {
	pub fn new(from: ViewTransform, to: ViewTransform) -> Self {
		Self {
			from,
			to,
			elapsed: 0.0,
			duration: FOCUS_DURATION,
		}
	}

	pub fn is_finished(&self) -> bool {
		self.elapsed >= self.duration
	}

	/// Advance by `dt` seconds and return the transform to paint with.
	pub fn advance(&mut self, dt: f64) -> ViewTransform {
		self.elapsed = (self.elapsed + dt).min(self.duration);
		let t = ease_cubic_in_out(self.elapsed / self.duration);
		self.from.lerp(&self.to, t)
	}
}
