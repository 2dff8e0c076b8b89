use super::types::{Hierarchy, HierarchyLink, HierarchyNode, OntologyNode};

impl Hierarchy {
	/// Flatten `root` into pre-order nodes and one link per parent-child edge.
	///
	/// The literal is trusted: cycles cannot be expressed in an owned tree and
	/// duplicate names are kept as they are.
	pub fn from_tree(root: &OntologyNode) -> Self {
		let total = root.count();
		let mut nodes: Vec<HierarchyNode> = Vec::with_capacity(total);
		let mut links = Vec::with_capacity(total - 1);
		let mut stack: Vec<(&OntologyNode, usize, Option<usize>)> = vec![(root, 0, None)];

		while let Some((node, depth, parent)) = stack.pop() {
			let idx = nodes.len();
			nodes.push(HierarchyNode {
				name: node.name.clone(),
				depth,
				parent,
				children: Vec::with_capacity(node.children.len()),
			});
			if let Some(p) = parent {
				nodes[p].children.push(idx);
				links.push(HierarchyLink {
					source: p,
					target: idx,
				});
			}
			// Reversed so the first child is popped first.
			for child in node.children.iter().rev() {
				stack.push((child, depth + 1, Some(idx)));
			}
		}

		Self { nodes, links }
	}

	/// Index of the first node (in pre-order) whose name equals `name`.
	pub fn find(&self, name: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.name == name)
	}

	/// Parent and children of `idx`.
	pub fn neighbors(&self, idx: usize) -> Vec<usize> {
		let Some(node) = self.nodes.get(idx) else {
			return Vec::new();
		};
		node.parent
			.into_iter()
			.chain(node.children.iter().copied())
			.collect()
	}

	/// `idx` followed by each of its ancestors up to the root.
	pub fn path_to_root(&self, idx: usize) -> Vec<usize> {
		std::iter::successors(self.nodes.get(idx).map(|_| idx), |&i| self.nodes[i].parent)
			.collect()
	}

	pub fn max_depth(&self) -> usize {
		self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> OntologyNode {
		OntologyNode::branch(
			"Object",
			vec![
				OntologyNode::branch(
					"Descriptive",
					vec![OntologyNode::leaf("Glaze"), OntologyNode::leaf("Shape")],
				),
				OntologyNode::branch(
					"Management",
					vec![OntologyNode::branch(
						"Preservation",
						vec![OntologyNode::leaf("Rights")],
					)],
				),
				OntologyNode::leaf("Extended"),
			],
		)
	}

	#[test]
	fn two_children_yield_three_nodes_two_links() {
		let tree: OntologyNode =
			serde_json::from_str(r#"{"name":"A","children":[{"name":"B"},{"name":"C"}]}"#)
				.unwrap();
		let h = Hierarchy::from_tree(&tree);

		assert_eq!(h.nodes.len(), 3);
		assert_eq!(h.links.len(), 2);
		let a = h.find("A").unwrap();
		for name in ["B", "C"] {
			let idx = h.find(name).unwrap();
			let touching: Vec<_> = h
				.links
				.iter()
				.filter(|l| l.source == idx || l.target == idx)
				.collect();
			assert_eq!(touching.len(), 1);
			assert_eq!(touching[0].source, a);
			assert_eq!(touching[0].target, idx);
		}
	}

	#[test]
	fn counts_follow_tree_property() {
		let tree = sample();
		let h = Hierarchy::from_tree(&tree);
		assert_eq!(h.len(), tree.count());
		assert_eq!(h.links.len(), h.len() - 1);
	}

	#[test]
	fn single_node_has_no_links() {
		let h = Hierarchy::from_tree(&OntologyNode::leaf("Alone"));
		assert_eq!(h.len(), 1);
		assert!(h.links.is_empty());
		assert_eq!(h.nodes[0].parent, None);
	}

	#[test]
	fn nodes_are_in_pre_order_with_depths() {
		let h = Hierarchy::from_tree(&sample());
		let names: Vec<_> = h.nodes.iter().map(|n| n.name.as_str()).collect();
		assert_eq!(
			names,
			[
				"Object",
				"Descriptive",
				"Glaze",
				"Shape",
				"Management",
				"Preservation",
				"Rights",
				"Extended"
			]
		);
		let depths: Vec<_> = h.nodes.iter().map(|n| n.depth).collect();
		assert_eq!(depths, [0, 1, 2, 2, 1, 2, 3, 1]);
		assert_eq!(h.max_depth(), 3);
	}

	#[test]
	fn every_link_is_a_literal_edge() {
		fn edges(node: &OntologyNode, out: &mut Vec<(String, String)>) {
			for child in &node.children {
				out.push((node.name.clone(), child.name.clone()));
				edges(child, out);
			}
		}
		let tree = sample();
		let mut expected = Vec::new();
		edges(&tree, &mut expected);

		let h = Hierarchy::from_tree(&tree);
		let mut actual: Vec<_> = h
			.links
			.iter()
			.map(|l| (h.nodes[l.source].name.clone(), h.nodes[l.target].name.clone()))
			.collect();
		expected.sort();
		actual.sort();
		assert_eq!(actual, expected);

		for link in &h.links {
			assert_eq!(h.nodes[link.target].parent, Some(link.source));
			assert!(h.nodes[link.source].children.contains(&link.target));
		}
	}

	#[test]
	fn path_walks_up_to_root() {
		let h = Hierarchy::from_tree(&sample());
		let rights = h.find("Rights").unwrap();
		let names: Vec<_> = h
			.path_to_root(rights)
			.into_iter()
			.map(|i| h.nodes[i].name.as_str())
			.collect();
		assert_eq!(names, ["Rights", "Preservation", "Management", "Object"]);
		assert_eq!(h.path_to_root(0), vec![0]);
		assert!(h.path_to_root(99).is_empty());
	}

	#[test]
	fn find_returns_first_match() {
		let tree = OntologyNode::branch(
			"Root",
			vec![
				OntologyNode::branch("Twin", vec![OntologyNode::leaf("X")]),
				OntologyNode::leaf("Twin"),
			],
		);
		let h = Hierarchy::from_tree(&tree);
		assert_eq!(h.find("Twin"), Some(1));
		assert_eq!(h.find("Missing"), None);
	}

	#[test]
	fn neighbors_are_parent_and_children() {
		let h = Hierarchy::from_tree(&sample());
		let descriptive = h.find("Descriptive").unwrap();
		let mut n = h.neighbors(descriptive);
		n.sort();
		assert_eq!(n, vec![0, h.find("Glaze").unwrap(), h.find("Shape").unwrap()]);
		assert_eq!(h.neighbors(99), Vec::<usize>::new());
	}
}
