//! Loading and validating the graph catalog.
//!
//! The page may embed its own catalog as JSON inside
//! `<script id="graph-data" type="application/json">`. Without one (or when it
//! fails to parse) the catalog bundled with the binary is used.

use std::collections::HashSet;

use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use super::state::DataMode;
use super::types::{Dataset, GraphCatalog};

const BUNDLED_CATALOG: &str = include_str!("../../../assets/graph.json");

/// Why a catalog was rejected.
#[derive(Debug, Error)]
pub enum DataError {
	#[error("invalid graph JSON: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("{mode:?} path references unknown node {id:?}")]
	UnknownPathNode { mode: DataMode, id: String },
}

/// Parse and validate a catalog.
pub fn parse_catalog(json: &str) -> Result<GraphCatalog, DataError> {
	let catalog: GraphCatalog = serde_json::from_str(json)?;
	for mode in [DataMode::Students, DataMode::Groups] {
		validate_ham_path(mode, catalog.dataset(mode), catalog.ham_path(mode))?;
	}
	Ok(catalog)
}

/// Every id must exist. Gaps, repeats and non-adjacent steps are only logged:
/// the path is still drawn exactly as given.
pub fn validate_ham_path(
	mode: DataMode,
	dataset: &Dataset,
	path: &[String],
) -> Result<(), DataError> {
	if let Some(id) = path.iter().find(|id| !dataset.contains(id)) {
		return Err(DataError::UnknownPathNode {
			mode,
			id: id.clone(),
		});
	}

	let distinct: HashSet<&str> = path.iter().map(String::as_str).collect();
	if distinct.len() != path.len() {
		warn!("cohort-graph: {:?} path visits a node more than once", mode);
	}
	if distinct.len() != dataset.len() {
		warn!(
			"cohort-graph: {:?} path covers {} of {} nodes",
			mode,
			distinct.len(),
			dataset.len()
		);
	}
	for pair in path.windows(2) {
		if !dataset.are_adjacent(&pair[0], &pair[1]) {
			warn!(
				"cohort-graph: {:?} path steps across non-edge {} -> {}",
				mode, pair[0], pair[1]
			);
		}
	}
	Ok(())
}

/// The catalog compiled into the binary.
pub fn bundled_catalog() -> GraphCatalog {
	match parse_catalog(BUNDLED_CATALOG) {
		Ok(catalog) => catalog,
		Err(e) => {
			warn!("cohort-graph: bundled catalog rejected: {}", e);
			GraphCatalog::default()
		}
	}
}

fn page_catalog_json() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("graph-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Catalog from the page if present and valid, else the bundled one.
pub fn load_catalog() -> GraphCatalog {
	let Some(json) = page_catalog_json() else {
		return bundled_catalog();
	};
	match parse_catalog(&json) {
		Ok(catalog) => {
			info!(
				"cohort-graph: loaded {} students, {} groups",
				catalog.students.len(),
				catalog.groups.len()
			);
			catalog
		}
		Err(e) => {
			warn!("cohort-graph: page catalog rejected, using bundled data: {}", e);
			bundled_catalog()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_catalog_is_well_formed() {
		let catalog = parse_catalog(BUNDLED_CATALOG).unwrap();
		for mode in [DataMode::Students, DataMode::Groups] {
			let dataset = catalog.dataset(mode);
			let path = catalog.ham_path(mode);
			assert!(dataset.len() > 1);
			assert_eq!(path.len(), dataset.len(), "{mode:?} path must visit every node");
			let distinct: HashSet<_> = path.iter().collect();
			assert_eq!(distinct.len(), path.len());
			for pair in path.windows(2) {
				assert!(dataset.are_adjacent(&pair[0], &pair[1]), "{mode:?} {pair:?}");
			}
		}
	}

	#[test]
	fn unknown_path_node_is_rejected() {
		let json = r#"{ "students": { "a": {} }, "groups": {}, "hamPaths": { "students": ["a", "b"] } }"#;
		match parse_catalog(json) {
			Err(DataError::UnknownPathNode { mode, id }) => {
				assert_eq!(mode, DataMode::Students);
				assert_eq!(id, "b");
			}
			other => panic!("unexpected: {other:?}"),
		}
	}

	#[test]
	fn malformed_json_is_a_parse_error() {
		assert!(matches!(parse_catalog("{ nope"), Err(DataError::Parse(_))));
	}

	#[test]
	fn imperfect_paths_are_accepted() {
		let json = r#"{ "students": { "a": {}, "b": {}, "c": {} }, "groups": {},
			"hamPaths": { "students": ["a", "c", "a"] } }"#;
		let catalog = parse_catalog(json).unwrap();
		assert_eq!(catalog.ham_path(DataMode::Students).len(), 3);
	}
}
