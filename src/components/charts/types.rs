use serde::{Deserialize, Serialize};

/// One `{category, value}` pair fed to a chart widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Datum {
	pub category: String,
	pub value: f64,
}

impl Datum {
	pub fn new(category: impl Into<String>, value: f64) -> Self {
		Self {
			category: category.into(),
			value,
		}
	}

	/// Value used for proportions: negatives and NaN count as nothing.
	pub fn weight(&self) -> f64 {
		if self.value.is_finite() && self.value > 0.0 {
			self.value
		} else {
			0.0
		}
	}
}

pub fn total(data: &[Datum]) -> f64 {
	data.iter().map(Datum::weight).sum()
}

/// Integers print bare, everything else with one decimal.
pub fn format_value(value: f64) -> String {
	if value.fract() == 0.0 {
		format!("{}", value as i64)
	} else {
		format!("{:.1}", value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn weight_ignores_negative_and_nan() {
		assert_eq!(Datum::new("a", -3.0).weight(), 0.0);
		assert_eq!(Datum::new("a", f64::NAN).weight(), 0.0);
		assert_eq!(total(&[Datum::new("a", 2.0), Datum::new("b", -1.0), Datum::new("c", 3.5)]), 5.5);
	}

	#[test]
	fn values_format_compactly() {
		assert_eq!(format_value(42.0), "42");
		assert_eq!(format_value(12.34), "12.3");
	}
}
