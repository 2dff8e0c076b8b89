/// The d3 category10 palette.
const CATEGORY10: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub fn category_color(i: usize) -> &'static str {
	CATEGORY10[i % CATEGORY10.len()]
}

/// Maps a continuous domain onto a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	pub domain: (f64, f64),
	pub range: (f64, f64),
}

impl LinearScale {
	pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
		Self { domain, range }
	}

	pub fn apply(&self, v: f64) -> f64 {
		let span = self.domain.1 - self.domain.0;
		if span == 0.0 {
			return self.range.0;
		}
		let t = (v - self.domain.0) / span;
		self.range.0 + t * (self.range.1 - self.range.0)
	}

	/// `count + 1` evenly spaced domain values, both ends included.
	pub fn ticks(&self, count: usize) -> Vec<f64> {
		let count = count.max(1);
		let step = (self.domain.1 - self.domain.0) / count as f64;
		(0..=count).map(|i| self.domain.0 + step * i as f64).collect()
	}
}

/// Linear over the square root of the input, so marker area tracks value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale(LinearScale);

impl SqrtScale {
	pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
		Self(LinearScale::new(
			(domain.0.max(0.0).sqrt(), domain.1.max(0.0).sqrt()),
			range,
		))
	}

	pub fn apply(&self, v: f64) -> f64 {
		self.0.apply(v.max(0.0).sqrt())
	}
}

/// Splits a range into `n` equal bands separated by padding, expressed as a
/// fraction of the step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
	n: usize,
	range: (f64, f64),
	padding_inner: f64,
	padding_outer: f64,
}

impl BandScale {
	pub fn new(n: usize, range: (f64, f64)) -> Self {
		Self {
			n,
			range,
			padding_inner: 0.0,
			padding_outer: 0.0,
		}
	}

	pub fn padding(mut self, padding: f64) -> Self {
		let p = padding.clamp(0.0, 1.0);
		self.padding_inner = p;
		self.padding_outer = p;
		self
	}

	pub fn step(&self) -> f64 {
		let slots = (self.n as f64 - self.padding_inner + 2.0 * self.padding_outer).max(1.0);
		(self.range.1 - self.range.0) / slots
	}

	pub fn bandwidth(&self) -> f64 {
		self.step() * (1.0 - self.padding_inner)
	}

	/// Left edge of band `i`.
	pub fn position(&self, i: usize) -> f64 {
		self.range.0 + self.step() * (self.padding_outer + i as f64)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn linear_maps_endpoints_and_inverts_range() {
		let y = LinearScale::new((0.0, 50.0), (200.0, 0.0));
		assert_eq!(y.apply(0.0), 200.0);
		assert_eq!(y.apply(50.0), 0.0);
		assert_eq!(y.apply(25.0), 100.0);
		assert_eq!(LinearScale::new((3.0, 3.0), (0.0, 10.0)).apply(3.0), 0.0);
		assert_eq!(y.ticks(5), vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
	}

	#[test]
	fn sqrt_scale_tracks_area() {
		let r = SqrtScale::new((0.0, 100.0), (0.0, 20.0));
		assert_eq!(r.apply(100.0), 20.0);
		assert_eq!(r.apply(25.0), 10.0);
		assert_eq!(r.apply(-4.0), 0.0);
	}

	#[test]
	fn bands_and_padding_fill_the_range() {
		let width = 640.0;
		let band = BandScale::new(7, (0.0, width)).padding(0.2);
		let first = band.position(0);
		let last_end = band.position(6) + band.bandwidth();
		assert!((first - 0.2 * band.step()).abs() < 1e-9);
		assert!((width - last_end - 0.2 * band.step()).abs() < 1e-9);
		assert!((band.position(1) - band.position(0) - band.step()).abs() < 1e-9);
	}

	#[test]
	fn palette_wraps() {
		assert_eq!(category_color(0), category_color(10));
		assert_ne!(category_color(0), category_color(1));
	}
}
