use leptos::prelude::*;

use super::component::HierarchyDiagram;
use super::state::depth_color;
use super::types::{Hierarchy, HierarchyNode, OntologyNode};

/// Indented, clickable list of every node in pre-order.
#[component]
pub fn OutlineList(nodes: Vec<HierarchyNode>, selected: RwSignal<Option<String>>) -> impl IntoView {
	let entries = nodes
		.into_iter()
		.map(|node| {
			let name = node.name.clone();
			let is_selected = {
				let name = node.name.clone();
				move || selected.get().as_deref() == Some(name.as_str())
			};
			let style = format!(
				"padding-left: {:.2}em; border-left: 3px solid {};",
				node.depth as f64 * 1.25,
				depth_color(node.depth)
			);
			view! {
				<li class="outline-entry" class:selected=is_selected style=style>
					<button type="button" on:click=move |_| selected.set(Some(name.clone()))>
						{node.name}
					</button>
				</li>
			}
		})
		.collect_view();

	view! { <ul class="outline">{entries}</ul> }
}

/// Outline and diagram side by side, synchronized by node name.
#[component]
pub fn HierarchyExplorer(tree: OntologyNode) -> impl IntoView {
	let hierarchy = Hierarchy::from_tree(&tree);
	let nodes = hierarchy.nodes.clone();
	let selected = RwSignal::new(None::<String>);

	view! {
		<div class="hierarchy-explorer">
			<nav class="outline-panel">
				<OutlineList nodes=nodes selected=selected />
			</nav>
			<div class="diagram-panel">
				<HierarchyDiagram hierarchy=hierarchy focus=selected />
			</div>
		</div>
	}
}
