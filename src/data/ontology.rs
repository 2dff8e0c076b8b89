use crate::components::hierarchy::OntologyNode;
use crate::error::AtlasError;

const ONTOLOGY: &str = include_str!("ontology.json");

/// The porcelain metadata ontology, rooted at "Porcelain Object".
pub fn porcelain_ontology() -> Result<OntologyNode, AtlasError> {
	Ok(serde_json::from_str(ONTOLOGY)?)
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	fn names<'a>(node: &'a OntologyNode, out: &mut Vec<&'a str>) {
		out.push(&node.name);
		for child in &node.children {
			names(child, out);
		}
	}

	#[test]
	fn ontology_literal_parses() {
		let tree = porcelain_ontology().unwrap();
		assert_eq!(tree.name, "Porcelain Object");
		assert_eq!(tree.count(), 52);
		let top: Vec<&str> = tree.children.iter().map(|c| c.name.as_str()).collect();
		assert_eq!(
			top,
			vec!["DescriptiveMetadata", "Metadata_for_Management", "ExtendedMetadata"]
		);
	}

	#[test]
	fn ontology_names_are_unique() {
		let tree = porcelain_ontology().unwrap();
		let mut all = Vec::new();
		names(&tree, &mut all);
		let unique: HashSet<&str> = all.iter().copied().collect();
		assert_eq!(unique.len(), all.len());
	}
}
