use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
	view! {
		<section class="page about">
			<h1>"About"</h1>
			<p>
				"Porcelain Atlas is a static digital humanities site. Everything it shows is computed in the browser from data shipped with the page."
			</p>
			<p>
				"Records are drawn from museum metadata published through Europeana. The world outline on the map is public GeoJSON fetched at view time."
			</p>
		</section>
	}
}
