//! Collection statistics over processed porcelain records.
//!
//! Records follow the layout of the ontology: a `DescriptiveMetadata` block of
//! multi-valued fields and a `Metadata_for_Management` block with periods,
//! dated years and the providing institution.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::AtlasError;

pub type Counts = BTreeMap<String, usize>;

static NO_COUNTS: Counts = BTreeMap::new();

const RECORDS: &str = include_str!("records.json");

/// Decoration themes in reporting order. Anything else is grouped as "other".
pub const DECORATION_THEMES: &[&str] = &[
	"floral",
	"figural",
	"animal",
	"landscape",
	"geometric",
	"calligraphy",
	"symbolic",
	"color",
];

/// Chinese dynasties in chronological order.
pub const DYNASTIES: &[&str] = &["Tang", "Song", "Yuan", "Ming", "Qing", "Republic", "Modern"];

/// Shapes considered when pairing a record's form with its use.
const MAIN_SHAPES: &[&str] = &[
	"bowl", "vase", "jar", "plate", "cup", "pot", "bottle", "box", "censer", "ewer",
];

/// Details listed per inscription type.
const INSCRIPTION_DETAILS: usize = 5;

const OTHER_GROUP: &str = "other";

pub const EUROPEAN_COUNTRIES: &[&str] = &["Netherlands", "Belgium", "Germany", "France", "England"];

const PLACE_COUNTRIES: &[(&str, &str)] = &[
	("china", "China"),
	("jingdezhen", "China"),
	("longquan", "China"),
	("dehua", "China"),
	("yixing", "China"),
	("netherlands", "Netherlands"),
	("delft", "Netherlands"),
	("belgium", "Belgium"),
	("brussels", "Belgium"),
	("germany", "Germany"),
	("meissen", "Germany"),
	("france", "France"),
	("sevres", "France"),
	("england", "England"),
	("worcester", "England"),
];

pub const UNKNOWN_COUNTRY: &str = "Unknown";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PorcelainRecord {
	#[serde(default)]
	pub id: String,
	#[serde(rename = "DescriptiveMetadata")]
	pub descriptive: Option<DescriptiveMetadata>,
	#[serde(rename = "Metadata_for_Management")]
	pub management: Option<ManagementMetadata>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescriptiveMetadata {
	#[serde(rename = "quality_score")]
	pub quality_score: f64,
	pub colored_drawing: Vec<String>,
	pub decorations: Vec<String>,
	pub shape: Vec<String>,
	pub function: Vec<String>,
	pub glaze: Vec<String>,
	pub paste: Vec<String>,
	pub production_place: Vec<String>,
	pub inscriptions: Vec<String>,
}

/// Periods arrive either as a list or as a single string.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Periods {
	Many(Vec<String>),
	One(String),
}

impl Default for Periods {
	fn default() -> Self {
		Self::Many(Vec::new())
	}
}

impl Periods {
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		let items: &[String] = match self {
			Self::Many(v) => v,
			Self::One(s) => std::slice::from_ref(s),
		};
		items.iter().map(String::as_str).filter(|s| !s.is_empty())
	}
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ManagementMetadata {
	pub title: String,
	pub period: Periods,
	pub years: Vec<u32>,
	pub providing_institution: String,
	pub providing_institution_country: String,
}

/// Multi-valued descriptive fields that are tallied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
	Decorations,
	Shape,
	Function,
	Glaze,
	Paste,
	ProductionPlace,
	ColoredDrawing,
	Inscriptions,
}

impl Field {
	pub const ALL: [Field; 8] = [
		Field::Decorations,
		Field::Shape,
		Field::Function,
		Field::Glaze,
		Field::Paste,
		Field::ProductionPlace,
		Field::ColoredDrawing,
		Field::Inscriptions,
	];

	pub fn label(self) -> &'static str {
		match self {
			Field::Decorations => "Decoration",
			Field::Shape => "Shape",
			Field::Function => "Function",
			Field::Glaze => "Glaze",
			Field::Paste => "Material",
			Field::ProductionPlace => "Production",
			Field::ColoredDrawing => "Color",
			Field::Inscriptions => "Inscription",
		}
	}

	fn values(self, d: &DescriptiveMetadata) -> &[String] {
		match self {
			Field::Decorations => &d.decorations,
			Field::Shape => &d.shape,
			Field::Function => &d.function,
			Field::Glaze => &d.glaze,
			Field::Paste => &d.paste,
			Field::ProductionPlace => &d.production_place,
			Field::ColoredDrawing => &d.colored_drawing,
			Field::Inscriptions => &d.inscriptions,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityBand {
	Excellent,
	Good,
	Medium,
	Poor,
	VeryPoor,
}

impl QualityBand {
	pub const ALL: [QualityBand; 5] = [
		QualityBand::Excellent,
		QualityBand::Good,
		QualityBand::Medium,
		QualityBand::Poor,
		QualityBand::VeryPoor,
	];

	/// Upper bounds are inclusive: exactly 0.6 is Medium.
	pub fn of(score: f64) -> Self {
		match score {
			s if s > 0.8 => QualityBand::Excellent,
			s if s > 0.6 => QualityBand::Good,
			s if s > 0.4 => QualityBand::Medium,
			s if s > 0.2 => QualityBand::Poor,
			_ => QualityBand::VeryPoor,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			QualityBand::Excellent => "Excellent (>0.8)",
			QualityBand::Good => "Good (0.6-0.8)",
			QualityBand::Medium => "Medium (0.4-0.6)",
			QualityBand::Poor => "Poor (0.2-0.4)",
			QualityBand::VeryPoor => "Very Poor (<0.2)",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualitySummary {
	pub average: f64,
	pub min: f64,
	pub max: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeGroup {
	pub theme: String,
	pub total: usize,
	/// `(detail, count)`, most frequent first.
	pub details: Vec<(String, usize)>,
}

#[derive(Clone, Debug, Default)]
pub struct CollectionStats {
	pub records: usize,
	pub quality_scores: Vec<f64>,
	pub periods: Counts,
	pub institutions: Counts,
	pub years: Vec<u32>,
	/// "shape - function" pairs, one per record at most.
	pub combinations: Counts,
	fields: BTreeMap<Field, Counts>,
	coverage: BTreeMap<Field, usize>,
}

pub fn load_records() -> Result<Vec<PorcelainRecord>, AtlasError> {
	Ok(serde_json::from_str(RECORDS)?)
}

/// Sorted by count descending, ties broken alphabetically.
pub fn top_n(counts: &Counts, n: usize) -> Vec<(String, usize)> {
	let mut items: Vec<(String, usize)> = counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
	items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
	items.truncate(n);
	items
}

/// Dynasty a calendar year falls in. A boundary year belongs to the earlier dynasty.
pub fn dynasty_of_year(year: u32) -> &'static str {
	match year {
		618..=907 => "Tang",
		960..=1279 => "Song",
		1280..=1368 => "Yuan",
		1369..=1644 => "Ming",
		1645..=1911 => "Qing",
		1912..=1949 => "Republic",
		1950.. => "Modern",
		_ => "Unknown",
	}
}

pub fn century_of(year: u32) -> u32 {
	year.saturating_sub(1) / 100 + 1
}

/// "1st century", "12th century", "21st century".
pub fn century_label(century: u32) -> String {
	let suffix = match (century % 10, century % 100) {
		(_, 11..=13) => "th",
		(1, _) => "st",
		(2, _) => "nd",
		(3, _) => "rd",
		_ => "th",
	};
	format!("{century}{suffix} century")
}

/// Splits `type:detail`. Values without a prefix, or with one outside `known`,
/// fall under "other".
fn split_prefixed<'a>(value: &'a str, known: Option<&[&str]>) -> (&'a str, &'a str) {
	match value.split_once(':') {
		Some((prefix, detail)) if known.is_none_or(|k| k.contains(&prefix)) => (prefix, detail),
		_ => (OTHER_GROUP, value),
	}
}

fn group_by_prefix<'a>(counts: &'a Counts, known: Option<&[&str]>) -> BTreeMap<&'a str, Counts> {
	let mut groups: BTreeMap<&str, Counts> = BTreeMap::new();
	for (value, n) in counts {
		let (group, detail) = split_prefixed(value, known);
		*groups
			.entry(group)
			.or_default()
			.entry(detail.to_string())
			.or_default() += n;
	}
	groups
}

fn theme_group(theme: &str, details: &Counts, limit: usize) -> ThemeGroup {
	ThemeGroup {
		theme: theme.to_string(),
		total: details.values().sum(),
		details: top_n(details, limit),
	}
}

/// First recognised shape paired with the first listed function.
fn shape_function(desc: &DescriptiveMetadata) -> Option<String> {
	let shape = desc.shape.iter().find(|s| MAIN_SHAPES.contains(&s.as_str()))?;
	let function = desc.function.first()?;
	Some(format!("{shape} - {function}"))
}

/// Country a production place belongs to, or [`UNKNOWN_COUNTRY`].
pub fn country_of(place: &str) -> &'static str {
	let place = place.to_lowercase();
	PLACE_COUNTRIES
		.iter()
		.find(|(p, _)| *p == place)
		.map(|(_, c)| *c)
		.unwrap_or(UNKNOWN_COUNTRY)
}

impl CollectionStats {
	pub fn from_records(records: &[PorcelainRecord]) -> Self {
		let mut stats = Self {
			records: records.len(),
			..Self::default()
		};

		for record in records {
			if let Some(desc) = &record.descriptive {
				stats.quality_scores.push(desc.quality_score);
				for field in Field::ALL {
					let values = field.values(desc);
					if !values.is_empty() {
						*stats.coverage.entry(field).or_default() += 1;
					}
					let counts = stats.fields.entry(field).or_default();
					for value in values.iter().filter(|v| !v.is_empty()) {
						*counts.entry(value.clone()).or_default() += 1;
					}
				}
			}
			if let Some(pair) = record.descriptive.as_ref().and_then(shape_function) {
				*stats.combinations.entry(pair).or_default() += 1;
			}
			if let Some(mgmt) = &record.management {
				stats.years.extend(mgmt.years.iter().copied());
				for period in mgmt.period.iter() {
					*stats.periods.entry(period.to_string()).or_default() += 1;
				}
				if !mgmt.providing_institution.is_empty() {
					*stats
						.institutions
						.entry(mgmt.providing_institution.clone())
						.or_default() += 1;
				}
			}
		}
		stats
	}

	pub fn counts(&self, field: Field) -> &Counts {
		self.fields.get(&field).unwrap_or(&NO_COUNTS)
	}

	pub fn quality_summary(&self) -> Option<QualitySummary> {
		if self.quality_scores.is_empty() {
			return None;
		}
		let sum: f64 = self.quality_scores.iter().sum();
		Some(QualitySummary {
			average: sum / self.quality_scores.len() as f64,
			min: self.quality_scores.iter().copied().fold(f64::INFINITY, f64::min),
			max: self.quality_scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
		})
	}

	pub fn quality_distribution(&self) -> Vec<(QualityBand, usize)> {
		QualityBand::ALL
			.iter()
			.map(|&band| {
				let n = self
					.quality_scores
					.iter()
					.filter(|&&s| QualityBand::of(s) == band)
					.count();
				(band, n)
			})
			.collect()
	}

	/// Production places folded into countries.
	pub fn countries(&self) -> Counts {
		let mut out = Counts::new();
		for (place, n) in self.counts(Field::ProductionPlace) {
			*out.entry(country_of(place).to_string()).or_default() += n;
		}
		out
	}

	/// `(chinese, european)` production counts.
	pub fn china_vs_europe(&self) -> (usize, usize) {
		let countries = self.countries();
		let china = countries.get("China").copied().unwrap_or(0);
		let europe = EUROPEAN_COUNTRIES
			.iter()
			.filter_map(|c| countries.get(*c))
			.sum();
		(china, europe)
	}

	/// Dynasty counts in chronological order, skipping absent dynasties.
	pub fn dynasties(&self) -> Vec<(String, usize)> {
		DYNASTIES
			.iter()
			.filter_map(|d| self.periods.get(*d).map(|n| (d.to_string(), *n)))
			.collect()
	}

	/// Decorations grouped by their `theme:detail` prefix.
	pub fn decoration_themes(&self) -> Vec<ThemeGroup> {
		let groups = group_by_prefix(self.counts(Field::Decorations), Some(DECORATION_THEMES));
		DECORATION_THEMES
			.iter()
			.chain(std::iter::once(&OTHER_GROUP))
			.filter_map(|theme| {
				let details = groups.get(theme)?;
				Some(theme_group(theme, details, details.len()))
			})
			.collect()
	}

	/// Inscriptions grouped by their `type:detail` prefix, largest group first.
	pub fn inscription_types(&self) -> Vec<ThemeGroup> {
		let mut out: Vec<ThemeGroup> = group_by_prefix(self.counts(Field::Inscriptions), None)
			.iter()
			.map(|(kind, details)| theme_group(kind, details, INSCRIPTION_DETAILS))
			.collect();
		out.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.theme.cmp(&b.theme)));
		out
	}

	/// Dynasties of the dated years, in chronological order.
	pub fn dynasties_by_year(&self) -> Vec<(String, usize)> {
		let mut counts = Counts::new();
		for &year in &self.years {
			*counts.entry(dynasty_of_year(year).to_string()).or_default() += 1;
		}
		DYNASTIES
			.iter()
			.chain(std::iter::once(&"Unknown"))
			.filter_map(|d| counts.get(*d).map(|n| (d.to_string(), *n)))
			.collect()
	}

	/// Dated years per century, earliest first.
	pub fn centuries(&self) -> Vec<(String, usize)> {
		let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
		for &year in &self.years {
			*counts.entry(century_of(year)).or_default() += 1;
		}
		counts
			.into_iter()
			.map(|(c, n)| (century_label(c), n))
			.collect()
	}

	/// Share of records, in percent, with at least one value in `field`.
	pub fn coverage_percent(&self, field: Field) -> f64 {
		if self.records == 0 {
			return 0.0;
		}
		self.coverage.get(&field).copied().unwrap_or(0) as f64 / self.records as f64 * 100.0
	}
}
