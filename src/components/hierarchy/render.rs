use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{HierarchyState, NODE_RADIUS, depth_color};

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &HierarchyState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#f7f3ea");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	let positions = state.sim.positions();
	draw_links(state, &positions, ctx);
	draw_nodes(state, &positions, ctx);
	ctx.restore();
}

fn draw_links(state: &HierarchyState, positions: &[(f64, f64)], ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let t = ease_out_cubic(state.hover.level());
	let (dash, gap) = (6.0 / k, 4.0 / k);
	let dash_offset = -(state.flow_time * 20.0) % (dash + gap);
	let selection_path = state
		.selected
		.map(|idx| state.hierarchy.path_to_root(idx))
		.unwrap_or_default();

	for link in &state.hierarchy.links {
		let ((x1, y1), (x2, y2)) = (positions[link.source], positions[link.target]);
		let is_highlighted = state.hover.contains(link.source) && state.hover.contains(link.target);
		// Links on the path from the root to the selected node flow toward it
		let on_selection = selection_path.contains(&link.target);

		let (alpha, width) = if is_highlighted {
			(0.5 + 0.4 * t, (1.2 + 0.6 * t) / k)
		} else {
			(0.5 - 0.35 * t, 1.2 / k)
		};

		ctx.set_stroke_style_str(&format!("rgba(60, 70, 90, {})", alpha));
		ctx.set_line_width(width);
		if on_selection {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(dash_offset);
		}
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
		if on_selection {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}
	}
}

fn draw_nodes(state: &HierarchyState, positions: &[(f64, f64)], ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.hover.is_active(),
		ease_out_cubic(state.hover.level()),
		state.transform.k,
	);
	let font = format!("{}px serif", 11.0 / k.max(0.5));

	for (idx, node) in state.hierarchy.nodes.iter().enumerate() {
		let (x, y) = positions[idx];
		let highlighted = state.hover.contains(idx);
		let (alpha, radius) = match (has_highlight, highlighted) {
			(true, false) => (1.0 - 0.6 * t, node_radius(node.depth) * (1.0 - 0.15 * t)),
			(true, true) if state.hover.is_anchor(idx) => (1.0, node_radius(node.depth) * (1.0 + 0.35 * t)),
			_ => (1.0, node_radius(node.depth)),
		};

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(depth_color(node.depth));
		ctx.fill();

		if state.selected == Some(idx) {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 4.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("#b5523b");
			ctx.set_line_width(2.0 / k);
			ctx.stroke();
		}

		ctx.set_fill_style_str("#2b2b2b");
		ctx.set_font(&font);
		let _ = ctx.fill_text(&node.name, x + radius + 3.0, y + 3.0);
		ctx.set_global_alpha(1.0);
	}
}

/// Root is drawn largest, leaves settle at the base radius.
fn node_radius(depth: usize) -> f64 {
	NODE_RADIUS * (1.0 + 0.8 / (depth as f64 + 1.0))
}
