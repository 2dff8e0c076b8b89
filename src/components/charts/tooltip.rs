use leptos::prelude::*;
use web_sys::MouseEvent;

use super::types::{Datum, format_value};

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
	pub title: String,
	pub detail: String,
	pub x: f64,
	pub y: f64,
}

impl TooltipContent {
	/// Describe `datum`, with its share of the whole when one is known.
	pub fn for_datum(datum: &Datum, share: Option<f64>, ev: &MouseEvent) -> Self {
		let detail = match share {
			Some(share) => format!("{} ({:.1}%)", format_value(datum.value), share * 100.0),
			None => format_value(datum.value),
		};
		Self {
			title: datum.category.clone(),
			detail,
			x: ev.client_x() as f64,
			y: ev.client_y() as f64,
		}
	}
}

/// Transient hover card. Hidden while `content` is `None`.
#[component]
pub fn Tooltip(content: RwSignal<Option<TooltipContent>>) -> impl IntoView {
	move || {
		content.get().map(|c| {
			let style = format!("position: fixed; left: {}px; top: {}px;", c.x + 12.0, c.y + 12.0);
			view! {
				<div class="chart-tooltip" style=style>
					<strong>{c.title}</strong>
					<br />
					<span>{c.detail}</span>
				</div>
			}
		})
	}
}
