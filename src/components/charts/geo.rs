use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use web_sys::XmlHttpRequest;

use crate::error::AtlasError;

/// Country outlines drawn under the dot overlay.
pub const WORLD_OUTLINE_URL: &str =
	"https://raw.githubusercontent.com/johan/world.geo.json/master/countries.geo.json";

pub type Ring = Vec<[f64; 2]>;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
	features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
	geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
	Polygon { coordinates: Vec<Ring> },
	MultiPolygon { coordinates: Vec<Vec<Ring>> },
	#[serde(other)]
	Unsupported,
}

/// Every polygon ring in a GeoJSON feature collection, as `[lon, lat]` pairs.
pub fn parse_outline(text: &str) -> Result<Vec<Ring>, AtlasError> {
	let collection: FeatureCollection = serde_json::from_str(text)?;
	Ok(collection
		.features
		.into_iter()
		.filter_map(|f| f.geometry)
		.flat_map(|g| match g {
			Geometry::Polygon { coordinates } => coordinates,
			Geometry::MultiPolygon { coordinates } => coordinates.into_iter().flatten().collect(),
			Geometry::Unsupported => Vec::new(),
		})
		.collect())
}

/// GET `url` once and hand the body to `done`. No retry, no timeout.
pub fn fetch_text(url: &str, done: impl FnOnce(Result<String, AtlasError>) + 'static) {
	let xhr = match XmlHttpRequest::new() {
		Ok(xhr) => xhr,
		Err(e) => return done(Err(AtlasError::Fetch(format!("{e:?}")))),
	};
	if let Err(e) = xhr.open("GET", url) {
		return done(Err(AtlasError::Fetch(format!("{e:?}"))));
	}

	// Exactly one of load, error or a failed send reports back.
	let done = Rc::new(RefCell::new(Some(done)));

	let (xhr_load, done_load) = (xhr.clone(), done.clone());
	let onload = Closure::once_into_js(move || {
		let Some(done) = done_load.borrow_mut().take() else {
			return;
		};
		let status = xhr_load.status().unwrap_or(0);
		let result = if (200..300).contains(&status) {
			xhr_load
				.response_text()
				.ok()
				.flatten()
				.ok_or(AtlasError::EmptyResponse)
		} else {
			Err(AtlasError::Status(status))
		};
		done(result);
	});

	let done_error = done.clone();
	let onerror = Closure::once_into_js(move || {
		let Some(done) = done_error.borrow_mut().take() else {
			return;
		};
		done(Err(AtlasError::Fetch("network error".into())));
	});

	xhr.set_onload(Some(onload.unchecked_ref()));
	xhr.set_onerror(Some(onerror.unchecked_ref()));
	if let Err(e) = xhr.send() {
		let pending = done.borrow_mut().take();
		if let Some(done) = pending {
			done(Err(AtlasError::Fetch(format!("{e:?}"))));
		}
	}
}
