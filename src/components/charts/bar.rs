use leptos::prelude::*;
use web_sys::MouseEvent;

use super::scale::{BandScale, LinearScale, category_color};
use super::tooltip::{Tooltip, TooltipContent};
use super::types::{Datum, format_value};

const BAR_PADDING: f64 = 0.2;
const AXIS_TICKS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
	pub index: usize,
	pub datum: Datum,
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

/// Vertical bars over a `width` x `height` plot area, tallest bar touching
/// the top edge.
pub fn bar_layout(data: &[Datum], width: f64, height: f64) -> Vec<BarRect> {
	let band = BandScale::new(data.len(), (0.0, width)).padding(BAR_PADDING);
	let max = data.iter().map(Datum::weight).fold(0.0, f64::max);
	let y = LinearScale::new((0.0, max), (height, 0.0));
	data.iter()
		.enumerate()
		.map(|(index, datum)| {
			let top = if max > 0.0 { y.apply(datum.weight()) } else { height };
			BarRect {
				index,
				datum: datum.clone(),
				x: band.position(index),
				y: top,
				width: band.bandwidth(),
				height: height - top,
			}
		})
		.collect()
}

fn alert_datum(datum: &Datum) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(&format!(
			"{}: {}",
			datum.category,
			format_value(datum.value)
		));
	}
}

#[component]
pub fn BarChart(
	data: Vec<Datum>,
	#[prop(default = 560.0)] width: f64,
	#[prop(default = 300.0)] height: f64,
) -> impl IntoView {
	let tooltip = RwSignal::new(None::<TooltipContent>);
	let (margin_left, margin_bottom) = (40.0, 70.0);
	let (plot_w, plot_h) = (width - margin_left, height - margin_bottom);
	let max = data.iter().map(Datum::weight).fold(0.0, f64::max);
	let axis = LinearScale::new((0.0, max), (plot_h, 0.0));

	let ticks = axis
		.ticks(AXIS_TICKS)
		.into_iter()
		.map(|v| {
			let ty = axis.apply(v);
			view! {
				<g class="tick">
					<line x1={-4.0} x2=plot_w y1=ty y2=ty stroke="#ddd" />
					<text x={-8.0} y={ty + 4.0} text-anchor="end">{format!("{:.0}", v)}</text>
				</g>
			}
		})
		.collect_view();

	let bars = bar_layout(&data, plot_w, plot_h)
		.into_iter()
		.map(|bar| {
			let (hover, click) = (bar.datum.clone(), bar.datum.clone());
			let label_x = bar.x + bar.width / 2.0;
			view! {
				<g class="bar">
					<rect
						x=bar.x
						y=bar.y
						width=bar.width
						height=bar.height
						fill=category_color(bar.index)
						on:mousemove=move |ev: MouseEvent| {
							tooltip.set(Some(TooltipContent::for_datum(&hover, None, &ev)))
						}
						on:mouseleave=move |_| tooltip.set(None)
						on:click=move |_| alert_datum(&click)
					/>
					<text
						class="bar-label"
						transform=format!("translate({label_x:.1},{:.1}) rotate(-40)", plot_h + 12.0)
						text-anchor="end"
					>
						{bar.datum.category.clone()}
					</text>
				</g>
			}
		})
		.collect_view();

	view! {
		<figure class="chart bar-chart">
			<svg width=width height=height>
				<g transform=format!("translate({margin_left},8)")>{ticks} {bars}</g>
			</svg>
			<Tooltip content=tooltip />
		</figure>
	}
}
