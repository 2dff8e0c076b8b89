use leptos::prelude::*;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use web_sys::MouseEvent;

use super::geo::{Ring, WORLD_OUTLINE_URL, fetch_text, parse_outline};
use super::scale::SqrtScale;
use super::tooltip::{Tooltip, TooltipContent};
use super::types::Datum;

const MAX_DOT_RADIUS: f64 = 22.0;

/// A quantity pinned to a place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
	pub name: String,
	pub lon: f64,
	pub lat: f64,
	pub value: f64,
}

impl Location {
	pub fn datum(&self) -> Datum {
		Datum::new(self.name.clone(), self.value)
	}
}

/// Plate carrée projection of a lon/lat window onto a pixel viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Equirectangular {
	pub lon: (f64, f64),
	pub lat: (f64, f64),
	pub width: f64,
	pub height: f64,
}

impl Equirectangular {
	/// Western and central Europe, where the collections are held.
	pub fn europe(width: f64, height: f64) -> Self {
		Self {
			lon: (-11.0, 25.0),
			lat: (35.0, 60.0),
			width,
			height,
		}
	}

	pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
		(
			(lon - self.lon.0) / (self.lon.1 - self.lon.0) * self.width,
			(self.lat.1 - lat) / (self.lat.1 - self.lat.0) * self.height,
		)
	}

	pub fn contains(&self, lon: f64, lat: f64) -> bool {
		(self.lon.0..=self.lon.1).contains(&lon) && (self.lat.0..=self.lat.1).contains(&lat)
	}

	pub fn ring_path(&self, ring: &[[f64; 2]]) -> String {
		let mut d = String::new();
		for (i, [lon, lat]) in ring.iter().enumerate() {
			let (x, y) = self.project(*lon, *lat);
			d.push_str(&format!("{}{x:.1},{y:.1}", if i == 0 { 'M' } else { 'L' }));
		}
		if !d.is_empty() {
			d.push('Z');
		}
		d
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
	pub location: Location,
	pub x: f64,
	pub y: f64,
	pub r: f64,
}

/// Project each location and size its marker by area. The largest value gets
/// `max_radius`.
pub fn dots(locations: &[Location], projection: &Equirectangular, max_radius: f64) -> Vec<Dot> {
	let max = locations.iter().map(|l| l.value).fold(0.0, f64::max);
	let radius = SqrtScale::new((0.0, max), (0.0, max_radius));
	locations
		.iter()
		.map(|l| {
			let (x, y) = projection.project(l.lon, l.lat);
			Dot {
				location: l.clone(),
				x,
				y,
				r: radius.apply(l.value),
			}
		})
		.collect()
}

/// Dot overlay on a country outline fetched from `outline_url`.
///
/// The widget stays empty if the outline cannot be fetched or parsed.
#[component]
pub fn DotMap(
	locations: Vec<Location>,
	#[prop(into, default = WORLD_OUTLINE_URL.to_string())] outline_url: String,
	#[prop(default = 560.0)] width: f64,
	#[prop(default = 420.0)] height: f64,
) -> impl IntoView {
	let tooltip = RwSignal::new(None::<TooltipContent>);
	let outline = RwSignal::new(None::<Vec<String>>);
	let projection = Equirectangular::europe(width, height);

	fetch_text(&outline_url, move |res| match res.and_then(|text| parse_outline(&text)) {
		Ok(rings) => {
			info!("Loaded {} outline rings", rings.len());
			let paths = visible_paths(&rings, &projection);
			let _ = outline.try_set(Some(paths));
		}
		Err(e) => warn!("Map outline unavailable, leaving map empty: {e}"),
	});

	let markers = dots(&locations, &projection, MAX_DOT_RADIUS);

	move || {
		let paths = outline.get()?;
		let land = paths
			.into_iter()
			.map(|d| view! { <path d=d class="land" fill="#e8e1d3" stroke="#b9ad97" /> })
			.collect_view();
		let circles = markers
			.iter()
			.map(|dot| {
				let datum = dot.location.datum();
				view! {
					<circle
						cx=dot.x
						cy=dot.y
						r=dot.r
						fill="rgba(47, 93, 158, 0.55)"
						stroke="#2f5d9e"
						on:mousemove=move |ev: MouseEvent| {
							tooltip.set(Some(TooltipContent::for_datum(&datum, None, &ev)))
						}
						on:mouseleave=move |_| tooltip.set(None)
					/>
				}
			})
			.collect_view();
		Some(view! {
			<figure class="chart dot-map">
				<svg width=width height=height>
					<g class="outline">{land}</g>
					<g class="dots">{circles}</g>
				</svg>
				<Tooltip content=tooltip />
			</figure>
		})
	}
}

/// Paths for rings with at least one vertex inside the projection window.
fn visible_paths(rings: &[Ring], projection: &Equirectangular) -> Vec<String> {
	rings
		.iter()
		.filter(|ring| ring.iter().any(|[lon, lat]| projection.contains(*lon, *lat)))
		.map(|ring| projection.ring_path(ring))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn loc(name: &str, lon: f64, lat: f64, value: f64) -> Location {
		Location {
			name: name.into(),
			lon,
			lat,
			value,
		}
	}

	#[test]
	fn projection_maps_window_corners() {
		let p = Equirectangular::europe(360.0, 250.0);
		assert_eq!(p.project(-11.0, 60.0), (0.0, 0.0));
		assert_eq!(p.project(25.0, 35.0), (360.0, 250.0));
		let (x, y) = p.project(4.885, 52.36);
		assert!(x > 0.0 && x < 360.0 && y > 0.0 && y < 250.0);
	}

	#[test]
	fn marker_area_tracks_value() {
		let p = Equirectangular::europe(500.0, 400.0);
		let d = dots(
			&[loc("Amsterdam", 4.9, 52.4, 400.0), loc("Dresden", 13.7, 51.1, 100.0)],
			&p,
			20.0,
		);
		assert_eq!(d[0].r, 20.0);
		assert_eq!(d[1].r, 10.0);
	}

	#[test]
	fn ring_path_is_closed() {
		let p = Equirectangular::europe(360.0, 250.0);
		let d = p.ring_path(&[[-11.0, 60.0], [25.0, 60.0], [25.0, 35.0]]);
		assert_eq!(d, "M0.0,0.0L360.0,0.0L360.0,250.0Z");
		assert_eq!(p.ring_path(&[]), "");
	}

	#[test]
	fn rings_outside_window_are_dropped() {
		let p = Equirectangular::europe(360.0, 250.0);
		let rings = vec![
			vec![[100.0, 30.0], [110.0, 30.0], [110.0, 40.0]],
			vec![[0.0, 50.0], [5.0, 50.0], [5.0, 55.0]],
		];
		assert_eq!(visible_paths(&rings, &p).len(), 1);
	}
}
