use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<section class="page home">
			<h1>"Chinese Porcelain in European Collections"</h1>
			<p class="subtitle">
				"A metadata ontology and a set of collection views built from museum records of Chinese porcelain held across Europe."
			</p>
			<div class="cards">
				<A href="/ontology">
					<h2>"Ontology"</h2>
					<p>"Browse the metadata classes as an outline and a force-directed diagram."</p>
				</A>
				<A href="/visualization">
					<h2>"Visualization"</h2>
					<p>"Shapes, glazes, decorations, periods and holding institutions at a glance."</p>
				</A>
				<A href="/research">
					<h2>"Research"</h2>
					<p>"How records were gathered, cleaned and mapped onto the ontology."</p>
				</A>
			</div>
		</section>
	}
}
