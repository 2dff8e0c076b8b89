use leptos::prelude::*;
use web_sys::MouseEvent;

use super::scale::category_color;
use super::tooltip::{Tooltip, TooltipContent};
use super::types::{Datum, total};

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
	pub index: usize,
	pub datum: Datum,
	pub x: f64,
	pub width: f64,
}

/// Contiguous segments, in input order, whose widths add up to `width`.
pub fn segments(data: &[Datum], width: f64) -> Vec<Segment> {
	let sum = total(data);
	if sum <= 0.0 {
		return Vec::new();
	}
	let mut x = 0.0;
	data.iter()
		.enumerate()
		.map(|(index, datum)| {
			let w = datum.weight() / sum * width;
			let segment = Segment {
				index,
				datum: datum.clone(),
				x,
				width: w,
			};
			x += w;
			segment
		})
		.collect()
}

/// Strip of colour swatches sized by share. `colors` pairs with `data` by
/// position and falls back to the categorical palette.
#[component]
pub fn ProportionalBar(
	data: Vec<Datum>,
	#[prop(optional)] colors: Vec<String>,
	#[prop(default = 560.0)] width: f64,
	#[prop(default = 48.0)] height: f64,
) -> impl IntoView {
	let tooltip = RwSignal::new(None::<TooltipContent>);

	let rects = segments(&data, width)
		.into_iter()
		.map(|seg| {
			let fill = colors
				.get(seg.index)
				.cloned()
				.unwrap_or_else(|| category_color(seg.index).to_string());
			let (datum, share) = (seg.datum.clone(), seg.width / width);
			view! {
				<rect
					x=seg.x
					y=0.0
					width=seg.width
					height=height
					fill=fill
					on:mousemove=move |ev: MouseEvent| {
						tooltip.set(Some(TooltipContent::for_datum(&datum, Some(share), &ev)))
					}
					on:mouseleave=move |_| tooltip.set(None)
				/>
			}
		})
		.collect_view();

	view! {
		<figure class="chart proportional-bar">
			<svg width=width height=height>{rects}</svg>
			<Tooltip content=tooltip />
		</figure>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn widths_sum_to_total_width() {
		let data = vec![
			Datum::new("cobalt", 7.0),
			Datum::new("iron red", 3.3),
			Datum::new("celadon green", 11.0),
			Datum::new("gilt", 0.7),
		];
		let segs = segments(&data, 733.0);
		let sum: f64 = segs.iter().map(|s| s.width).sum();
		assert!((sum - 733.0).abs() < 1e-9);
		for pair in segs.windows(2) {
			assert!((pair[0].x + pair[0].width - pair[1].x).abs() < 1e-9);
		}
		assert_eq!(segs[0].x, 0.0);
	}

	#[test]
	fn negative_values_take_no_room() {
		let segs = segments(&[Datum::new("a", 1.0), Datum::new("b", -5.0), Datum::new("c", 1.0)], 100.0);
		assert_eq!(segs[1].width, 0.0);
		assert_eq!(segs[2].x, 50.0);
	}

	#[test]
	fn nothing_to_divide_yields_no_segments() {
		assert!(segments(&[Datum::new("a", 0.0)], 100.0).is_empty());
	}
}
