//! Shortest connecting path between two nodes.

use std::collections::{HashMap, VecDeque};

use super::types::Dataset;

/// Breadth-first search over the undirected neighbor relation.
///
/// Neighbors are expanded in sorted order, so ties always resolve to the
/// lexicographically smallest route. Returns `None` for unknown endpoints or
/// when `to` is unreachable.
pub fn shortest_path(dataset: &Dataset, from: &str, to: &str) -> Option<Vec<String>> {
	if !dataset.contains(from) || !dataset.contains(to) {
		return None;
	}
	if from == to {
		return Some(vec![from.to_string()]);
	}

	let mut parent: HashMap<&str, &str> = HashMap::new();
	let mut queue = VecDeque::from([from]);
	parent.insert(from, from);

	while let Some(current) = queue.pop_front() {
		for next in dataset.neighbors(current) {
			if parent.contains_key(next) {
				continue;
			}
			parent.insert(next, current);
			if next == to {
				let mut path = vec![to.to_string()];
				let mut at = to;
				while at != from {
					at = parent[at];
					path.push(at.to_string());
				}
				path.reverse();
				return Some(path);
			}
			queue.push_back(next);
		}
	}
	None
}
