use log::{debug, info, warn};

use super::highlight::Highlight;
use super::simulation::{LayoutParams, Simulation};
use super::transform::{FocusTransition, ViewTransform};
use super::types::Hierarchy;

const DEPTH_COLORS: &[&str] = &[
	"#c8a24a", "#2f5d9e", "#4f8f8a", "#b5523b", "#7d6aa6", "#8c564b", "#5f7f3a",
];

pub const NODE_RADIUS: f64 = 6.0;
pub const HIT_RADIUS: f64 = 12.0;

pub fn depth_color(depth: usize) -> &'static str {
	DEPTH_COLORS[depth % DEPTH_COLORS.len()]
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

pub struct HierarchyState {
	pub hierarchy: Hierarchy,
	pub sim: Simulation,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: Highlight,
	pub selected: Option<usize>,
	pub focus: Option<FocusTransition>,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	was_running: bool,
}

impl HierarchyState {
	pub fn new(hierarchy: Hierarchy, width: f64, height: f64) -> Self {
		Self::with_params(hierarchy, LayoutParams::default(), width, height)
	}

	pub fn with_params(hierarchy: Hierarchy, params: LayoutParams, width: f64, height: f64) -> Self {
		let sim = Simulation::new(&hierarchy, params, width, height);
		let transform = ViewTransform::fitted(hierarchy.len(), width, height);
		info!(
			"Laying out {} ontology nodes over {} levels",
			hierarchy.len(),
			hierarchy.max_depth() + 1
		);
		Self {
			hierarchy,
			sim,
			transform,
			drag: DragState::default(),
			pan: PanState::default(),
			hover: Highlight::default(),
			selected: None,
			focus: None,
			width,
			height,
			flow_time: 0.0,
			was_running: true,
		}
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.transform.screen_to_graph(sx, sy);
		// Last hit wins, matching paint order.
		self.sim
			.positions()
			.iter()
			.enumerate()
			.filter(|(_, (x, y))| ((x - gx).powi(2) + (y - gy).powi(2)).sqrt() < HIT_RADIUS)
			.map(|(i, _)| i)
			.last()
	}

	pub fn begin_drag(&mut self, idx: usize, sx: f64, sy: f64) {
		let Some((nx, ny)) = self.sim.position(idx) else {
			return;
		};
		self.drag = DragState {
			active: true,
			node: Some(idx),
			start_x: sx,
			start_y: sy,
			node_start_x: nx,
			node_start_y: ny,
		};
		self.focus = None;
		self.sim.pin(idx, nx as f32, ny as f32);
		let target = self.sim.params().drag_alpha_target;
		self.sim.reheat(target);
	}

	pub fn drag_to(&mut self, sx: f64, sy: f64) {
		let Some(idx) = self.drag.node.filter(|_| self.drag.active) else {
			return;
		};
		let (dx, dy) = (
			(sx - self.drag.start_x) / self.transform.k,
			(sy - self.drag.start_y) / self.transform.k,
		);
		self.sim.pin(
			idx,
			(self.drag.node_start_x + dx) as f32,
			(self.drag.node_start_y + dy) as f32,
		);
	}

	pub fn end_drag(&mut self) {
		if let Some(idx) = self.drag.node.take() {
			self.sim.unpin(idx);
			self.sim.reheat(0.0);
		}
		self.drag.active = false;
	}

	pub fn begin_pan(&mut self, sx: f64, sy: f64) {
		self.focus = None;
		self.pan = PanState {
			active: true,
			start_x: sx,
			start_y: sy,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	pub fn pan_to(&mut self, sx: f64, sy: f64) {
		if !self.pan.active {
			return;
		}
		self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
		self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
	}

	pub fn end_pan(&mut self) {
		self.pan.active = false;
	}

	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		self.focus = None;
		self.transform.zoom_at(sx, sy, factor);
	}

	/// Animate the view onto the first node called `name`.
	///
	/// Returns false, leaving the view untouched, when no node has that name.
	pub fn focus_on(&mut self, name: &str) -> bool {
		let Some(idx) = self.hierarchy.find(name) else {
			warn!("No ontology node named {name:?}");
			return false;
		};
		let Some((gx, gy)) = self.sim.position(idx) else {
			return false;
		};
		debug!("Focusing {name:?} at ({gx:.1}, {gy:.1})");
		let target = self.transform.centered_on(gx, gy, self.width, self.height);
		self.focus = Some(FocusTransition::new(self.transform, target));
		self.selected = Some(idx);
		true
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		let neighbors = node.map(|idx| self.hierarchy.neighbors(idx)).unwrap_or_default();
		self.hover.point_at(node, neighbors);
	}

	pub fn tick(&mut self, dt: f32) {
		let running = self.sim.tick(dt);
		if running != self.was_running {
			if running {
				info!("Layout reheated (alpha target {:.2})", self.sim.alpha_target());
			} else {
				info!("Layout at rest");
			}
			self.was_running = running;
		}
		self.flow_time += dt as f64;

		if let Some(ref mut focus) = self.focus {
			self.transform = focus.advance(dt as f64);
			if focus.is_finished() {
				self.focus = None;
			}
		}

		self.hover.advance(dt as f64);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.sim.set_center(width, height);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::hierarchy::transform::{FOCUS_DURATION, ZOOM_MAX, ZOOM_MIN};
	use crate::components::hierarchy::types::OntologyNode;

	fn state() -> HierarchyState {
		let tree = OntologyNode::branch(
			"Object",
			vec![
				OntologyNode::branch("Descriptive", vec![OntologyNode::leaf("Glaze")]),
				OntologyNode::leaf("Management"),
			],
		);
		HierarchyState::new(Hierarchy::from_tree(&tree), 800.0, 600.0)
	}

	fn run(s: &mut HierarchyState, seconds: f64) {
		for _ in 0..(seconds / 0.016).ceil() as usize {
			s.tick(0.016);
		}
	}

	#[test]
	fn focus_recenters_on_named_node() {
		let mut s = state();
		run(&mut s, 1.0);
		while s.sim.is_running() {
			s.tick(0.016);
		}
		assert!(s.focus_on("Glaze"));
		assert_eq!(s.selected, s.hierarchy.find("Glaze"));
		run(&mut s, FOCUS_DURATION + 0.05);
		assert!(s.focus.is_none());

		let (gx, gy) = s.sim.position(s.hierarchy.find("Glaze").unwrap()).unwrap();
		let (sx, sy) = s.transform.graph_to_screen(gx, gy);
		assert!((sx - 400.0).abs() < 1e-6);
		assert!((sy - 300.0).abs() < 1e-6);
	}

	#[test]
	fn focus_on_unknown_name_is_a_no_op() {
		let mut s = state();
		let before = s.transform;
		assert!(!s.focus_on("Nope"));
		assert!(s.focus.is_none());
		assert_eq!(s.selected, None);
		assert_eq!(s.transform, before);
	}

	#[test]
	fn drag_pins_and_reheats_then_releases() {
		let mut s = state();
		while s.sim.is_running() {
			s.tick(0.016);
		}
		let idx = s.hierarchy.find("Management").unwrap();
		let (nx, ny) = s.sim.position(idx).unwrap();
		let (sx, sy) = s.transform.graph_to_screen(nx, ny);
		assert_eq!(s.node_at_position(sx, sy), Some(idx));

		s.begin_drag(idx, sx, sy);
		assert!(s.sim.is_pinned(idx));
		assert!(s.sim.is_running());
		assert_eq!(s.sim.alpha_target(), 0.3);

		s.drag_to(sx + 40.0, sy - 20.0);
		s.tick(0.016);
		let (px, py) = s.sim.position(idx).unwrap();
		assert!((px - (nx + 40.0)).abs() < 1e-3);
		assert!((py - (ny - 20.0)).abs() < 1e-3);

		s.end_drag();
		assert!(!s.sim.is_pinned(idx));
		assert_eq!(s.sim.alpha_target(), 0.0);
		assert!(!s.drag.active);
	}

	#[test]
	fn drag_during_focus_tracks_cursor() {
		let mut s = state();
		while s.sim.is_running() {
			s.tick(0.016);
		}
		assert!(s.focus_on("Glaze"));
		s.tick(0.016);

		let idx = s.hierarchy.find("Management").unwrap();
		let (nx, ny) = s.sim.position(idx).unwrap();
		let (sx, sy) = s.transform.graph_to_screen(nx, ny);
		s.begin_drag(idx, sx, sy);
		assert!(s.focus.is_none());

		run(&mut s, 0.8);
		s.drag_to(sx, sy);
		s.tick(0.016);
		let (px, py) = s.sim.position(idx).unwrap();
		let (cx, cy) = s.transform.graph_to_screen(px, py);
		assert!((cx - sx).abs() < 1e-3, "{cx} vs {sx}");
		assert!((cy - sy).abs() < 1e-3, "{cy} vs {sy}");
	}

	#[test]
	fn ontology_fits_viewport_once_settled() {
		let tree = crate::data::porcelain_ontology().unwrap();
		let mut s = HierarchyState::new(Hierarchy::from_tree(&tree), 800.0, 600.0);
		assert!(s.transform.k < 1.0);
		while s.sim.is_running() {
			s.tick(0.016);
		}

		let screen: Vec<(f64, f64)> = s
			.sim
			.positions()
			.into_iter()
			.map(|(x, y)| s.transform.graph_to_screen(x, y))
			.collect();
		let span = |pick: fn(&(f64, f64)) -> f64| {
			let lo = screen.iter().map(pick).fold(f64::INFINITY, f64::min);
			let hi = screen.iter().map(pick).fold(f64::NEG_INFINITY, f64::max);
			hi - lo
		};
		assert!(span(|p| p.0) < s.width);
		assert!(span(|p| p.1) < s.height);
	}

	#[test]
	fn wheel_and_pan_interact_with_transform() {
		let mut s = state();
		for _ in 0..200 {
			s.zoom_at(100.0, 100.0, 1.1);
		}
		assert_eq!(s.transform.k, ZOOM_MAX);
		for _ in 0..400 {
			s.zoom_at(100.0, 100.0, 0.9);
		}
		assert_eq!(s.transform.k, ZOOM_MIN);

		let start = s.transform;
		s.begin_pan(10.0, 10.0);
		s.pan_to(60.0, -15.0);
		s.end_pan();
		assert_eq!(s.transform.x, start.x + 50.0);
		assert_eq!(s.transform.y, start.y - 25.0);
		s.pan_to(500.0, 500.0);
		assert_eq!(s.transform.x, start.x + 50.0);
	}

	#[test]
	fn hover_highlights_parent_and_children() {
		let mut s = state();
		let desc = s.hierarchy.find("Descriptive").unwrap();
		s.set_hover(Some(desc));
		assert!(s.hover.is_anchor(desc));
		assert!(s.hover.contains(s.hierarchy.find("Object").unwrap()));
		assert!(s.hover.contains(s.hierarchy.find("Glaze").unwrap()));
		assert!(!s.hover.contains(s.hierarchy.find("Management").unwrap()));

		s.set_hover(None);
		assert!(s.hover.is_active());
		run(&mut s, 5.0);
		assert!(!s.hover.is_active());
	}
}
