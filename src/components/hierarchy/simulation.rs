use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::Hierarchy;

const INITIAL_RADIUS: f64 = 10.0;

/// Tunables for the tree layout.
///
/// `link_distance` and `charge_strength` are expressed the d3 way. They are
/// converted to engine constants so that a lone parent-child pair comes to
/// rest `link_distance` apart.
#[derive(Clone, Debug)]
pub struct LayoutParams {
	pub link_distance: f32,
	pub charge_strength: f32,
	pub node_mass: f32,
	pub force_max: f32,
	pub node_speed: f32,
	pub damping_factor: f32,
	pub alpha_min: f64,
	pub alpha_decay: f64,
	/// Target temperature while a node is being dragged.
	pub drag_alpha_target: f64,
}

impl Default for LayoutParams {
	fn default() -> Self {
		let alpha_min = 0.001;
		Self {
			link_distance: 100.0,
			charge_strength: -1000.0,
			node_mass: 10.0,
			force_max: 100.0,
			node_speed: 40000.0,
			damping_factor: 0.9,
			alpha_min,
			alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
			drag_alpha_target: 0.3,
		}
	}
}

impl LayoutParams {
	pub fn simulation_parameters(&self) -> SimulationParameters {
		let force_charge = self.charge_strength.abs() / self.node_mass;
		// Spring pull 0.5 * s * d balances repulsion c * m^2 / d^2 at d = link_distance.
		let force_spring =
			2.0 * force_charge * self.node_mass.powi(2) / self.link_distance.powi(3);
		SimulationParameters {
			force_charge,
			force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub slot: usize,
	pub depth: usize,
	pub pin: Option<(f32, f32)>,
}

/// Cooling force layout over a [`Hierarchy`].
pub struct Simulation {
	graph: ForceGraph<NodeInfo, ()>,
	base: SimulationParameters,
	params: LayoutParams,
	indices: Vec<DefaultNodeIdx>,
	center: (f32, f32),
	alpha: f64,
	alpha_target: f64,
}

impl Simulation {
	pub fn new(hierarchy: &Hierarchy, params: LayoutParams, width: f64, height: f64) -> Self {
		let base = params.simulation_parameters();
		let mut graph = ForceGraph::new(base.clone());
		let (cx, cy) = (width / 2.0, height / 2.0);
		let golden = PI * (3.0 - 5f64.sqrt());

		let indices: Vec<DefaultNodeIdx> = hierarchy
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| {
				let (r, angle) = (INITIAL_RADIUS * (0.5 + i as f64).sqrt(), i as f64 * golden);
				graph.add_node(NodeData {
					x: (cx + r * angle.cos()) as f32,
					y: (cy + r * angle.sin()) as f32,
					mass: params.node_mass,
					is_anchor: false,
					user_data: NodeInfo {
						slot: i,
						depth: node.depth,
						pin: None,
					},
				})
			})
			.collect();

		for link in &hierarchy.links {
			graph.add_edge(
				indices[link.source],
				indices[link.target],
				EdgeData::default(),
			);
		}

		Self {
			graph,
			base,
			params,
			indices,
			center: (cx as f32, cy as f32),
			alpha: 1.0,
			alpha_target: 0.0,
		}
	}

	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	pub fn alpha_target(&self) -> f64 {
		self.alpha_target
	}

	pub fn params(&self) -> &LayoutParams {
		&self.params
	}

	pub fn is_running(&self) -> bool {
		self.alpha >= self.params.alpha_min || self.alpha_target >= self.params.alpha_min
	}

	/// Raise (or lower) the temperature the simulation relaxes toward.
	pub fn reheat(&mut self, target: f64) {
		self.alpha_target = target.max(0.0);
	}

	pub fn set_center(&mut self, width: f64, height: f64) {
		self.center = ((width / 2.0) as f32, (height / 2.0) as f32);
	}

	/// Advance one step. Returns false once the layout has cooled to rest.
	pub fn tick(&mut self, dt: f32) -> bool {
		if !self.is_running() {
			return false;
		}
		self.alpha += (self.alpha_target - self.alpha) * self.params.alpha_decay;

		let a = self.alpha as f32;
		self.graph.parameters.force_charge = self.base.force_charge * a;
		self.graph.parameters.force_spring = self.base.force_spring * a;
		self.graph.update(dt);
		self.recenter();
		true
	}

	/// Translate free nodes so the centroid sits on the viewport midpoint,
	/// then snap pinned nodes back onto their pins.
	fn recenter(&mut self) {
		let n = self.indices.len();
		if n == 0 {
			return;
		}
		let (mut sx, mut sy) = (0.0f32, 0.0f32);
		self.graph.visit_nodes(|node| {
			sx += node.x();
			sy += node.y();
		});
		let (dx, dy) = (self.center.0 - sx / n as f32, self.center.1 - sy / n as f32);
		self.graph.visit_nodes_mut(|node| match node.data.user_data.pin {
			Some((px, py)) => {
				node.data.x = px;
				node.data.y = py;
			}
			None => {
				node.data.x += dx;
				node.data.y += dy;
			}
		});
	}

	/// Fix node `slot` at `(x, y)` until [`Simulation::unpin`].
	pub fn pin(&mut self, slot: usize, x: f32, y: f32) {
		let Some(&idx) = self.indices.get(slot) else {
			return;
		};
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = x;
				node.data.y = y;
				node.data.user_data.pin = Some((x, y));
			}
		});
	}

	pub fn unpin(&mut self, slot: usize) {
		let Some(&idx) = self.indices.get(slot) else {
			return;
		};
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.user_data.pin = None;
			}
		});
	}

	pub fn is_pinned(&self, slot: usize) -> bool {
		self.indices
			.get(slot)
			.is_some_and(|&idx| self.graph.get_graph()[idx].data.user_data.pin.is_some())
	}

	pub fn position(&self, slot: usize) -> Option<(f64, f64)> {
		let &idx = self.indices.get(slot)?;
		let node = &self.graph.get_graph()[idx];
		Some((node.x() as f64, node.y() as f64))
	}

	/// Node positions indexed by hierarchy slot.
	pub fn positions(&self) -> Vec<(f64, f64)> {
		let mut out = vec![(0.0, 0.0); self.indices.len()];
		self.graph.visit_nodes(|node| {
			out[node.data.user_data.slot] = (node.x() as f64, node.y() as f64);
		});
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::hierarchy::types::OntologyNode;

	fn pair() -> Hierarchy {
		Hierarchy::from_tree(&OntologyNode::branch(
			"Parent",
			vec![OntologyNode::leaf("Child")],
		))
	}

	fn distance(sim: &Simulation, a: usize, b: usize) -> f64 {
		let (ax, ay) = sim.position(a).unwrap();
		let (bx, by) = sim.position(b).unwrap();
		((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
	}

	#[test]
	fn derived_constants_balance_at_link_distance() {
		let params = LayoutParams::default();
		let sp = params.simulation_parameters();
		let d = params.link_distance;
		let spring = 0.5 * sp.force_spring * d;
		let repel = sp.force_charge * params.node_mass.powi(2) / (d * d);
		assert!((spring - repel).abs() < 1e-4);
	}

	#[test]
	fn linked_pair_settles_at_link_distance() {
		let mut sim = Simulation::new(&pair(), LayoutParams::default(), 800.0, 600.0);
		sim.reheat(1.0);
		for _ in 0..2000 {
			sim.tick(0.016);
		}
		assert!((distance(&sim, 0, 1) - 100.0).abs() < 1.0);
	}

	#[test]
	fn cools_to_rest_without_target() {
		let mut sim = Simulation::new(&pair(), LayoutParams::default(), 800.0, 600.0);
		assert!(sim.is_running());
		let mut steps = 0;
		while sim.tick(0.016) {
			steps += 1;
			assert!(steps < 1000);
		}
		assert!(!sim.is_running());
		assert!(sim.alpha() < sim.params().alpha_min);
		assert!(steps >= 250);
	}

	#[test]
	fn reheat_restarts_cooled_layout() {
		let mut sim = Simulation::new(&pair(), LayoutParams::default(), 800.0, 600.0);
		while sim.tick(0.016) {}
		sim.reheat(0.3);
		assert!(sim.is_running());
		for _ in 0..500 {
			sim.tick(0.016);
		}
		assert!((sim.alpha() - 0.3).abs() < 1e-3);
	}

	#[test]
	fn centroid_is_viewport_midpoint() {
		let tree = OntologyNode::branch(
			"Root",
			vec![
				OntologyNode::leaf("A"),
				OntologyNode::leaf("B"),
				OntologyNode::branch("C", vec![OntologyNode::leaf("D")]),
			],
		);
		let mut sim = Simulation::new(&Hierarchy::from_tree(&tree), LayoutParams::default(), 1000.0, 400.0);
		for _ in 0..50 {
			sim.tick(0.016);
		}
		let pos = sim.positions();
		let n = pos.len() as f64;
		let cx = pos.iter().map(|p| p.0).sum::<f64>() / n;
		let cy = pos.iter().map(|p| p.1).sum::<f64>() / n;
		assert!((cx - 500.0).abs() < 0.01);
		assert!((cy - 200.0).abs() < 0.01);
	}

	#[test]
	fn pinned_node_holds_position() {
		let mut sim = Simulation::new(&pair(), LayoutParams::default(), 800.0, 600.0);
		sim.pin(1, 700.0, 50.0);
		assert!(sim.is_pinned(1));
		for _ in 0..100 {
			sim.tick(0.016);
		}
		assert_eq!(sim.position(1), Some((700.0, 50.0)));

		sim.unpin(1);
		assert!(!sim.is_pinned(1));
		sim.reheat(1.0);
		for _ in 0..100 {
			sim.tick(0.016);
		}
		assert_ne!(sim.position(1), Some((700.0, 50.0)));
	}

	#[test]
	fn out_of_range_slots_are_ignored() {
		let mut sim = Simulation::new(&pair(), LayoutParams::default(), 800.0, 600.0);
		sim.pin(7, 1.0, 1.0);
		sim.unpin(7);
		assert!(!sim.is_pinned(7));
		assert_eq!(sim.position(7), None);
	}
}
