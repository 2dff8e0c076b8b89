use leptos::prelude::*;
use leptos_router::components::A;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="page not-found">
			<h1>"Page not found"</h1>
			<A href="/">"Back to the start"</A>
		</section>
	}
}
