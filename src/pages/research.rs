use leptos::prelude::*;

const STEPS: &[(&str, &str)] = &[
	(
		"Collection",
		"Object records were harvested from the Europeana aggregation, keeping items whose type and subject point to Chinese porcelain.",
	),
	(
		"Preprocessing",
		"Titles and descriptions were language-detected, lowercased and stripped of stopwords while keeping domain terms such as glaze and kiln names.",
	),
	(
		"Topic modelling",
		"An LDA model, with the topic count chosen by perplexity and coherence, grouped descriptions into recurring themes.",
	),
	(
		"Keyword mapping",
		"A keyword dictionary assigned shapes, functions, pastes, glazes, decorations and production places to each record.",
	),
	(
		"Reporting",
		"Field counts, quality scores and coverage were tallied for the whole collection.",
	),
];

/// Research question and processing pipeline.
#[component]
pub fn Research() -> impl IntoView {
	view! {
		<section class="page research">
			<h1>"Research"</h1>
			<p>
				"Which forms, decorations and production centres of Chinese porcelain are represented in European museums, and how well are they described?"
			</p>
			<h2>"Method"</h2>
			<ol class="steps">
				{STEPS
					.iter()
					.map(|&(title, body)| {
						view! {
							<li>
								<h3>{title}</h3>
								<p>{body}</p>
							</li>
						}
					})
					.collect_view()}
			</ol>
		</section>
	}
}
