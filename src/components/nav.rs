use leptos::prelude::*;
use leptos_router::components::A;

const LINKS: &[(&str, &str)] = &[
	("/", "Home"),
	("/research", "Research"),
	("/ontology", "Ontology"),
	("/visualization", "Visualization"),
	("/about", "About"),
];

/// Site-wide navigation bar.
#[component]
pub fn SiteNav() -> impl IntoView {
	view! {
		<nav class="site-nav">
			<span class="site-title">"Porcelain Atlas"</span>
			<ul>
				{LINKS
					.iter()
					.map(|&(href, label)| view! { <li><A href=href>{label}</A></li> })
					.collect_view()}
			</ul>
		</nav>
	}
}
