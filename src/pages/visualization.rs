use leptos::prelude::*;

use crate::components::charts::{BarChart, Datum, DotMap, Location, PieChart, ProportionalBar};
use crate::data::datasets;
use crate::data::stats::{CollectionStats, Field, load_records};

const TOP_N: usize = 8;

#[component]
fn Panel(#[prop(into)] title: String, children: Children) -> impl IntoView {
	view! {
		<figure class="panel">
			<figcaption>{title}</figcaption>
			{children()}
		</figure>
	}
}

/// Every series the page draws, computed up front so each chart owns its data.
struct Series {
	summary: Option<String>,
	quality: Vec<Datum>,
	origin: Vec<Datum>,
	countries: Vec<Datum>,
	dynasties: Vec<Datum>,
	centuries: Vec<Datum>,
	shapes: Vec<Datum>,
	glazes: Vec<Datum>,
	pairings: Vec<Datum>,
	themes: Vec<Datum>,
	inscriptions: Vec<Datum>,
	coverage: Vec<Datum>,
	drawings: Vec<Datum>,
	swatches: Vec<String>,
	locations: Vec<Location>,
}

impl Series {
	fn from_stats(stats: &CollectionStats) -> Self {
		let summary = stats.quality_summary().map(|q| {
			format!(
				"Average quality {:.2} (min {:.2}, max {:.2}) across {} records",
				q.average, q.min, q.max, stats.records
			)
		});
		let (china, europe) = stats.china_vs_europe();
		let (drawings, swatches) = datasets::drawing_palette(stats);
		Self {
			summary,
			quality: datasets::quality_bands(stats),
			origin: vec![
				Datum::new("China", china as f64),
				Datum::new("Europe", europe as f64),
			],
			countries: datasets::countries(stats),
			dynasties: datasets::dynasties(stats),
			centuries: datasets::centuries(stats),
			shapes: datasets::top_values(stats, Field::Shape, TOP_N),
			glazes: datasets::top_values(stats, Field::Glaze, TOP_N),
			pairings: datasets::shape_functions(stats, TOP_N),
			themes: datasets::decoration_themes(stats),
			inscriptions: datasets::inscription_types(stats),
			coverage: datasets::coverage(stats),
			drawings,
			swatches,
			locations: datasets::institution_locations(stats),
		}
	}
}

fn collection_view(stats: CollectionStats) -> impl IntoView {
	let Series {
		summary,
		quality,
		origin,
		countries,
		dynasties,
		centuries,
		shapes,
		glazes,
		pairings,
		themes,
		inscriptions,
		coverage,
		drawings,
		swatches,
		locations,
	} = Series::from_stats(&stats);

	view! {
		<p class="summary">{summary}</p>
		<div class="panels">
			<Panel title="Record quality">
				<PieChart data=quality inner_ratio=0.55 />
			</Panel>
			<Panel title="Chinese and European production">
				<PieChart data=origin size=240.0 />
			</Panel>
			<Panel title="Production countries">
				<BarChart data=countries />
			</Panel>
			<Panel title="Dynasties">
				<BarChart data=dynasties />
			</Panel>
			<Panel title="Dated pieces by century">
				<BarChart data=centuries />
			</Panel>
			<Panel title="Shapes">
				<BarChart data=shapes />
			</Panel>
			<Panel title="Glazes">
				<BarChart data=glazes />
			</Panel>
			<Panel title="Shape and function">
				<BarChart data=pairings />
			</Panel>
			<Panel title="Decoration themes">
				<PieChart data=themes inner_ratio=0.4 />
			</Panel>
			<Panel title="Inscription types">
				<PieChart data=inscriptions size=240.0 />
			</Panel>
			<Panel title="Field coverage (%)">
				<BarChart data=coverage />
			</Panel>
			<Panel title="Colour schemes">
				<ProportionalBar data=drawings colors=swatches />
			</Panel>
			<Panel title="Holding institutions">
				<DotMap locations=locations />
			</Panel>
		</div>
	}
}

/// Collection-level charts over the embedded record sample.
#[component]
pub fn Visualization() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"The collection data could not be loaded"</h1>

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
			<section class="page visualization">
				<h1>"The Collection in Numbers"</h1>
				{load_records()
					.map(|records| collection_view(CollectionStats::from_records(&records)))}
			</section>
		</ErrorBoundary>
	}
}
