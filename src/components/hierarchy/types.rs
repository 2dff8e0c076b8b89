use serde::{Deserialize, Serialize};

/// One class in the ontology literal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OntologyNode {
	pub name: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub children: Vec<OntologyNode>,
}

impl OntologyNode {
	pub fn leaf(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			children: Vec::new(),
		}
	}

	pub fn branch(name: impl Into<String>, children: Vec<OntologyNode>) -> Self {
		Self {
			name: name.into(),
			children,
		}
	}

	/// Total number of nodes in this subtree, root included.
	pub fn count(&self) -> usize {
		1 + self.children.iter().map(OntologyNode::count).sum::<usize>()
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct HierarchyNode {
	pub name: String,
	pub depth: usize,
	pub parent: Option<usize>,
	pub children: Vec<usize>,
}

/// Parent (`source`) to child (`target`) edge, as indices into [`Hierarchy::nodes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HierarchyLink {
	pub source: usize,
	pub target: usize,
}

/// Flat pre-order decomposition of an [`OntologyNode`] tree.
#[derive(Clone, Debug, Default)]
pub struct Hierarchy {
	pub nodes: Vec<HierarchyNode>,
	pub links: Vec<HierarchyLink>,
}
