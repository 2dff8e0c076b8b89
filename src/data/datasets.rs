//! Chart-ready series built from [`CollectionStats`].

use crate::components::charts::{Datum, Location};

use super::stats::{CollectionStats, Field, top_n};

/// Swatch per coloured-drawing style. Unlisted styles fall back to [`NEUTRAL_SWATCH`].
const DRAWING_SWATCHES: &[(&str, &str)] = &[
	("blue and white", "#2f4f8f"),
	("celadon", "#9dbf9e"),
	("famille rose", "#e39aa8"),
	("famille verte", "#5d8c4a"),
	("grey-green", "#8a9a86"),
	("imari", "#b5523b"),
	("polychrome", "#d9a441"),
	("white", "#f1ede4"),
	("wucai", "#c86b3c"),
];

const NEUTRAL_SWATCH: &str = "#9e9e9e";

const INSTITUTIONS: &[(&str, f64, f64)] = &[
	("Rijksmuseum", 4.885, 52.36),
	("Victoria and Albert Museum", -0.172, 51.497),
	("Musée Guimet", 2.294, 48.865),
	("Staatliche Kunstsammlungen Dresden", 13.737, 51.053),
	("Royal Museums of Art and History", 4.392, 50.841),
	("Museum für Ostasiatische Kunst Köln", 6.936, 50.937),
];

pub fn swatch(style: &str) -> &'static str {
	DRAWING_SWATCHES
		.iter()
		.find(|(name, _)| name.eq_ignore_ascii_case(style))
		.map(|(_, hex)| *hex)
		.unwrap_or(NEUTRAL_SWATCH)
}

fn to_data(items: Vec<(String, usize)>) -> Vec<Datum> {
	items
		.into_iter()
		.map(|(category, n)| Datum::new(category, n as f64))
		.collect()
}

/// The `n` most frequent values of `field`.
pub fn top_values(stats: &CollectionStats, field: Field, n: usize) -> Vec<Datum> {
	to_data(top_n(stats.counts(field), n))
}

pub fn quality_bands(stats: &CollectionStats) -> Vec<Datum> {
	stats
		.quality_distribution()
		.into_iter()
		.map(|(band, n)| Datum::new(band.label(), n as f64))
		.collect()
}

pub fn countries(stats: &CollectionStats) -> Vec<Datum> {
	to_data(top_n(&stats.countries(), usize::MAX))
}

pub fn dynasties(stats: &CollectionStats) -> Vec<Datum> {
	to_data(stats.dynasties())
}

pub fn decoration_themes(stats: &CollectionStats) -> Vec<Datum> {
	stats
		.decoration_themes()
		.into_iter()
		.map(|group| Datum::new(group.theme, group.total as f64))
		.collect()
}

pub fn inscription_types(stats: &CollectionStats) -> Vec<Datum> {
	stats
		.inscription_types()
		.into_iter()
		.map(|group| Datum::new(group.theme, group.total as f64))
		.collect()
}

/// The `n` most common shape and function pairings.
pub fn shape_functions(stats: &CollectionStats, n: usize) -> Vec<Datum> {
	to_data(top_n(&stats.combinations, n))
}

pub fn centuries(stats: &CollectionStats) -> Vec<Datum> {
	to_data(stats.centuries())
}

pub fn coverage(stats: &CollectionStats) -> Vec<Datum> {
	Field::ALL
		.iter()
		.map(|&field| Datum::new(field.label(), stats.coverage_percent(field)))
		.collect()
}

/// Coloured-drawing shares paired with their swatches.
pub fn drawing_palette(stats: &CollectionStats) -> (Vec<Datum>, Vec<String>) {
	let data = top_values(stats, Field::ColoredDrawing, usize::MAX);
	let colors = data.iter().map(|d| swatch(&d.category).to_string()).collect();
	(data, colors)
}

/// Institutions with known coordinates, sized by holdings.
pub fn institution_locations(stats: &CollectionStats) -> Vec<Location> {
	INSTITUTIONS
		.iter()
		.filter_map(|&(name, lon, lat)| {
			let n = stats.institutions.get(name)?;
			Some(Location {
				name: name.to_string(),
				lon,
				lat,
				value: *n as f64,
			})
		})
		.collect()
}
