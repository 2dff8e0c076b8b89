//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod data;
mod error;
mod pages;

// Top-Level pages
use crate::components::SiteNav;
use crate::pages::about::About;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::ontology::Ontology;
use crate::pages::research::Research;
use crate::pages::visualization::Visualization;

pub use crate::error::AtlasError;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// The site router: five content pages and a 404 fallback.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		<Title text="Porcelain Atlas" />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<SiteNav />
			<main>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Home />
					<Route path=path!("/research") view=Research />
					<Route path=path!("/ontology") view=Ontology />
					<Route path=path!("/visualization") view=Visualization />
					<Route path=path!("/about") view=About />
				</Routes>
			</main>
		</Router>
	}
}
