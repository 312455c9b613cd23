//! Graph data structures: node records, per-mode datasets and the catalog.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use super::state::DataMode;

/// A single node as stored in a dataset.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct NodeRecord {
	/// Optional display label. Falls back to the title-cased id.
	#[serde(default)]
	pub label: Option<String>,
	/// Hue in degrees (0-360) used for the node fill and tooltip border.
	#[serde(default, rename = "colorH")]
	pub color_h: f64,
	/// Optional normalized position (0..1 on both axes) for the Cartesian layout.
	#[serde(default)]
	pub position: Option<[f64; 2]>,
	/// Ids this node is connected to. Edges are undirected.
	#[serde(default)]
	pub neighbors: Vec<String>,
}

/// All nodes of one data mode, keyed by id. Iteration order is lexicographic.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Dataset {
	nodes: BTreeMap<String, NodeRecord>,
}

impl Dataset {
	pub fn new(nodes: BTreeMap<String, NodeRecord>) -> Self {
		Self { nodes }
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn get(&self, id: &str) -> Option<&NodeRecord> {
		self.nodes.get(id)
	}

	pub fn contains(&self, id: &str) -> bool {
		self.nodes.contains_key(id)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &NodeRecord)> {
		self.nodes.iter()
	}

	/// Node ids in lexicographic order.
	pub fn sorted_ids(&self) -> Vec<&str> {
		self.nodes.keys().map(String::as_str).collect()
	}

	/// Label shown for a node: its own label, else the title-cased id.
	pub fn display_label(&self, id: &str) -> String {
		self.nodes
			.get(id)
			.and_then(|n| n.label.clone())
			.unwrap_or_else(|| to_title_case(id))
	}

	/// Direct neighbors of `id`, following edges declared on either endpoint.
	pub fn neighbors(&self, id: &str) -> BTreeSet<&str> {
		let mut out = BTreeSet::new();
		let Some(node) = self.nodes.get(id) else {
			return out;
		};
		for n in &node.neighbors {
			if n != id && self.nodes.contains_key(n) {
				out.insert(n.as_str());
			}
		}
		for (other_id, other) in &self.nodes {
			if other_id != id && other.neighbors.iter().any(|n| n == id) {
				out.insert(other_id.as_str());
			}
		}
		out
	}

	/// Every undirected edge once, smaller id first. Dangling references are dropped.
	pub fn edges(&self) -> Vec<(&str, &str)> {
		let mut set = BTreeSet::new();
		for (id, node) in &self.nodes {
			for n in &node.neighbors {
				let Some((other, _)) = self.nodes.get_key_value(n) else {
					continue;
				};
				if other == id {
					continue;
				}
				let (a, b) = if id < other { (id, other) } else { (other, id) };
				set.insert((a.as_str(), b.as_str()));
			}
		}
		set.into_iter().collect()
	}

	pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
		let declared = |x: &str, y: &str| {
			self.nodes
				.get(x)
				.is_some_and(|n| n.neighbors.iter().any(|m| m == y))
		};
		declared(a, b) || declared(b, a)
	}
}

/// Precomputed Hamiltonian paths, one per data mode.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct HamPaths {
	#[serde(default)]
	pub students: Vec<String>,
	#[serde(default)]
	pub groups: Vec<String>,
}

/// Both datasets plus their precomputed paths.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphCatalog {
	pub students: Dataset,
	pub groups: Dataset,
	#[serde(default)]
	pub ham_paths: HamPaths,
}

impl GraphCatalog {
	pub fn dataset(&self, mode: DataMode) -> &Dataset {
		match mode {
			DataMode::Students => &self.students,
			DataMode::Groups => &self.groups,
		}
	}

	pub fn ham_path(&self, mode: DataMode) -> &[String] {
		match mode {
			DataMode::Students => &self.ham_paths.students,
			DataMode::Groups => &self.ham_paths.groups,
		}
	}
}

/// Uppercase the first character of every whitespace-separated word and
/// lowercase the rest.
pub fn to_title_case(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	let mut at_word_start = true;
	for c in s.chars() {
		if c.is_whitespace() {
			at_word_start = true;
			out.push(c);
		} else if at_word_start {
			out.extend(c.to_uppercase());
			at_word_start = false;
		} else {
			out.extend(c.to_lowercase());
		}
	}
	out
}
