//! Node placement for the two graph algorithms.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use super::state::GraphAlgo;
use super::types::Dataset;

/// Canvas-space node centers for one dataset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
	positions: BTreeMap<String, (f64, f64)>,
}

impl Layout {
	/// Place every node of `dataset` inside a `width` x `height` canvas,
	/// keeping `padding` pixels free along each border.
	pub fn compute(
		dataset: &Dataset,
		algo: GraphAlgo,
		width: f64,
		height: f64,
		padding: f64,
	) -> Self {
		let (x0, y0) = (padding.min(width / 2.0), padding.min(height / 2.0));
		let (w, h) = ((width - 2.0 * x0).max(0.0), (height - 2.0 * y0).max(0.0));
		let positions = match algo {
			GraphAlgo::Cartesian => cartesian(dataset, x0, y0, w, h),
			GraphAlgo::Radial => radial(dataset, x0, y0, w, h),
		};
		Self { positions }
	}

	pub fn get(&self, id: &str) -> Option<(f64, f64)> {
		self.positions.get(id).copied()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, (f64, f64))> {
		self.positions.iter().map(|(k, v)| (k.as_str(), *v))
	}

	pub fn len(&self) -> usize {
		self.positions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	/// Closest node to `(x, y)` whose center lies within `hit_radius`.
	pub fn nearest(&self, x: f64, y: f64, hit_radius: f64) -> Option<&str> {
		let mut best: Option<(&str, f64)> = None;
		for (id, &(nx, ny)) in &self.positions {
			let (dx, dy) = (nx - x, ny - y);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist < hit_radius && best.is_none_or(|(_, d)| dist < d) {
				best = Some((id.as_str(), dist));
			}
		}
		best.map(|(id, _)| id)
	}
}

/// Explicit positions where given, the rest on a square grid in id order.
fn cartesian(
	dataset: &Dataset,
	x0: f64,
	y0: f64,
	w: f64,
	h: f64,
) -> BTreeMap<String, (f64, f64)> {
	let mut positions = BTreeMap::new();
	let unplaced: Vec<&String> = dataset
		.iter()
		.filter_map(|(id, node)| match node.position {
			Some([px, py]) => {
				let (px, py) = (px.clamp(0.0, 1.0), py.clamp(0.0, 1.0));
				positions.insert(id.clone(), (x0 + px * w, y0 + py * h));
				None
			}
			None => Some(id),
		})
		.collect();

	if unplaced.is_empty() {
		return positions;
	}
	let cols = (unplaced.len() as f64).sqrt().ceil() as usize;
	let rows = unplaced.len().div_ceil(cols);
	let cell = |i: usize, n: usize, span: f64| {
		if n <= 1 {
			span / 2.0
		} else {
			span * i as f64 / (n - 1) as f64
		}
	};
	for (i, id) in unplaced.into_iter().enumerate() {
		let (col, row) = (i % cols, i / cols);
		positions.insert(id.clone(), (x0 + cell(col, cols, w), y0 + cell(row, rows, h)));
	}
	positions
}

/// Nodes evenly spaced on one circle, starting at twelve o'clock.
fn radial(
	dataset: &Dataset,
	x0: f64,
	y0: f64,
	w: f64,
	h: f64,
) -> BTreeMap<String, (f64, f64)> {
	let (cx, cy) = (x0 + w / 2.0, y0 + h / 2.0);
	let n = dataset.len();
	if n == 1 {
		return dataset.iter().map(|(id, _)| (id.clone(), (cx, cy))).collect();
	}
	let radius = 0.4 * w.min(h);
	dataset
		.iter()
		.enumerate()
		.map(|(i, (id, _))| {
			let angle = (i as f64) * 2.0 * PI / n as f64 - PI / 2.0;
			(id.clone(), (cx + radius * angle.cos(), cy + radius * angle.sin()))
		})
		.collect()
}
