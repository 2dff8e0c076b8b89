use std::f64::consts::{PI, TAU};

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::scale::category_color;
use super::tooltip::{Tooltip, TooltipContent};
use super::types::{Datum, total};

/// Angles are radians, clockwise from twelve o'clock.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
	pub index: usize,
	pub datum: Datum,
	pub start_angle: f64,
	pub end_angle: f64,
}

impl PieSlice {
	pub fn span(&self) -> f64 {
		self.end_angle - self.start_angle
	}

	pub fn share(&self) -> f64 {
		self.span() / TAU
	}
}

/// Lay slices out in input order. Yields nothing when there is no positive
/// value to divide the circle by.
pub fn pie_slices(data: &[Datum]) -> Vec<PieSlice> {
	let sum = total(data);
	if sum <= 0.0 {
		return Vec::new();
	}
	let mut angle = 0.0;
	data.iter()
		.enumerate()
		.map(|(index, datum)| {
			let start_angle = angle;
			angle += datum.weight() / sum * TAU;
			PieSlice {
				index,
				datum: datum.clone(),
				start_angle,
				end_angle: angle,
			}
		})
		.collect()
}

fn point(r: f64, angle: f64) -> (f64, f64) {
	(r * angle.sin(), -r * angle.cos())
}

/// SVG path for a wedge (`inner == 0`) or annulus segment centred on the origin.
pub fn arc_path(inner: f64, outer: f64, start: f64, end: f64) -> String {
	let span = end - start;
	if span >= TAU - 1e-9 {
		// A single arc cannot close on itself, so draw two halves
		let mid = start + PI;
		let ring = |r: f64, sweep: u8| {
			let (x0, y0) = point(r, start);
			let (x1, y1) = point(r, mid);
			format!(
				"M{x0:.3},{y0:.3}A{r:.3},{r:.3} 0 1 {sweep} {x1:.3},{y1:.3}A{r:.3},{r:.3} 0 1 {sweep} {x0:.3},{y0:.3}Z"
			)
		};
		return if inner > 0.0 {
			format!("{}{}", ring(outer, 1), ring(inner, 0))
		} else {
			ring(outer, 1)
		};
	}

	let large = u8::from(span > PI);
	let (ox0, oy0) = point(outer, start);
	let (ox1, oy1) = point(outer, end);
	let mut d = format!("M{ox0:.3},{oy0:.3}A{outer:.3},{outer:.3} 0 {large} 1 {ox1:.3},{oy1:.3}");
	if inner > 0.0 {
		let (ix1, iy1) = point(inner, end);
		let (ix0, iy0) = point(inner, start);
		d.push_str(&format!(
			"L{ix1:.3},{iy1:.3}A{inner:.3},{inner:.3} 0 {large} 0 {ix0:.3},{iy0:.3}Z"
		));
	} else {
		d.push_str("L0,0Z");
	}
	d
}

/// Midpoint of the slice band, used to anchor labels.
pub fn centroid(inner: f64, outer: f64, start: f64, end: f64) -> (f64, f64) {
	point((inner + outer) / 2.0, (start + end) / 2.0)
}

/// Pie, or doughnut when `inner_ratio > 0`.
#[component]
pub fn PieChart(
	data: Vec<Datum>,
	#[prop(default = 320.0)] size: f64,
	#[prop(default = 0.0)] inner_ratio: f64,
) -> impl IntoView {
	let tooltip = RwSignal::new(None::<TooltipContent>);
	let outer = size / 2.0 - 4.0;
	let inner = outer * inner_ratio.clamp(0.0, 0.95);

	let slices = pie_slices(&data)
		.into_iter()
		.map(|slice| {
			let d = arc_path(inner, outer, slice.start_angle, slice.end_angle);
			let (lx, ly) = centroid(inner, outer, slice.start_angle, slice.end_angle);
			// Labels on slivers would overlap their neighbours
			let label = (slice.share() > 0.06).then(|| {
				view! {
					<text x=lx y=ly text-anchor="middle" class="slice-label">
						{format!("{:.0}%", slice.share() * 100.0)}
					</text>
				}
			});
			let (datum, share) = (slice.datum.clone(), slice.share());
			view! {
				<g class="slice">
					<path
						d=d
						fill=category_color(slice.index)
						stroke="#fff"
						on:mousemove=move |ev: MouseEvent| {
							tooltip.set(Some(TooltipContent::for_datum(&datum, Some(share), &ev)))
						}
						on:mouseleave=move |_| tooltip.set(None)
					/>
					{label}
				</g>
			}
		})
		.collect_view();

	let legend = data
		.iter()
		.enumerate()
		.map(|(i, d)| {
			view! {
				<li>
					<span class="swatch" style=format!("background: {};", category_color(i))></span>
					{d.category.clone()}
				</li>
			}
		})
		.collect_view();

	let half = size / 2.0;
	view! {
		<figure class="chart pie-chart">
			<svg width=size height=size viewBox=format!("{} {} {} {}", -half, -half, size, size)>
				{slices}
			</svg>
			<ul class="legend">{legend}</ul>
			<Tooltip content=tooltip />
		</figure>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn glazes() -> Vec<Datum> {
		vec![
			Datum::new("blue and white", 41.0),
			Datum::new("celadon", 12.0),
			Datum::new("famille rose", 17.0),
			Datum::new("monochrome", 0.0),
			Datum::new("blanc de chine", 9.5),
		]
	}

	#[test]
	fn slice_angles_sum_to_full_turn() {
		let slices = pie_slices(&glazes());
		assert_eq!(slices.len(), 5);
		let sum: f64 = slices.iter().map(PieSlice::span).sum();
		assert!((sum.to_degrees() - 360.0).abs() < 1e-9);
		assert!((slices.last().unwrap().end_angle - TAU).abs() < 1e-9);
		for pair in slices.windows(2) {
			assert_eq!(pair[0].end_angle, pair[1].start_angle);
		}
	}

	#[test]
	fn slices_are_proportional() {
		let slices = pie_slices(&[Datum::new("a", 1.0), Datum::new("b", 3.0)]);
		assert!((slices[0].share() - 0.25).abs() < 1e-12);
		assert!((slices[1].span() - 1.5 * PI).abs() < 1e-12);
	}

	#[test]
	fn empty_or_zero_data_has_no_slices() {
		assert!(pie_slices(&[]).is_empty());
		assert!(pie_slices(&[Datum::new("a", 0.0), Datum::new("b", -2.0)]).is_empty());
	}

	#[test]
	fn wedge_path_closes_at_centre() {
		let d = arc_path(0.0, 100.0, 0.0, PI / 2.0);
		assert_eq!(d, "M0.000,-100.000A100.000,100.000 0 0 1 100.000,-0.000L0,0Z");
	}

	#[test]
	fn large_doughnut_segment_sets_large_arc_flag() {
		let d = arc_path(50.0, 100.0, 0.0, 1.5 * PI);
		assert!(d.contains(" 0 1 1 "));
		assert!(d.contains(" 0 1 0 "));
		assert!(d.ends_with('Z'));
	}

	#[test]
	fn full_circle_is_drawn_in_two_halves() {
		let d = arc_path(0.0, 10.0, 0.0, TAU);
		assert_eq!(d.matches('A').count(), 2);
		let ring = arc_path(5.0, 10.0, 0.0, TAU);
		assert_eq!(ring.matches('A').count(), 4);
	}
}
