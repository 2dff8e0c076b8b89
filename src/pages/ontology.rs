use leptos::prelude::*;

use crate::components::hierarchy::HierarchyExplorer;
use crate::data::porcelain_ontology;

/// Ontology explorer: outline on the left, live diagram on the right.
#[component]
pub fn Ontology() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"The ontology could not be loaded"</h1>

				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<section class="page ontology">
				<h1>"Porcelain Metadata Ontology"</h1>
				<p class="subtitle">
					"Pick a class in the outline to bring it into view. Drag nodes to pin them, drag the background to pan and scroll to zoom."
				</p>
				{porcelain_ontology().map(|tree| view! { <HierarchyExplorer tree=tree /> })}
			</section>
		</ErrorBoundary>
	}
}
