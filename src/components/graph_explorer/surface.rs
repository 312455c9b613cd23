//! Drawing-surface contract the controller renders through.

use super::completion::Completion;
use super::state::GraphAlgo;
use super::types::Dataset;

/// Pointer location in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPos {
	pub client_x: i32,
	pub client_y: i32,
	/// False when the event landed on something above the canvas, like a control.
	pub on_canvas: bool,
}

impl PointerPos {
	pub fn new(client_x: i32, client_y: i32) -> Self {
		Self {
			client_x,
			client_y,
			on_canvas: true,
		}
	}

	pub fn on_canvas(self, on_canvas: bool) -> Self {
		Self { on_canvas, ..self }
	}
}

/// Everything the controller needs from whatever draws the graph.
pub trait RenderSurface {
	/// Draw every node and edge on top of the current canvas contents.
	fn draw_graph(&mut self, dataset: &Dataset, animated: bool);

	/// Clear, then draw every node and edge.
	fn draw_full_graph(&mut self, dataset: &Dataset, animated: bool) {
		self.clear_canvas();
		self.draw_graph(dataset, animated);
	}

	/// Erase everything. Invalidates in-flight animations.
	fn clear_canvas(&mut self);

	/// Find and draw a path between two nodes. Resolves once drawing is done.
	fn connect_two_nodes(&mut self, dataset: &Dataset, from: &str, to: &str) -> Completion;

	/// Draw `path` at once, or one segment per `delay_ms` when given.
	fn draw_path(
		&mut self,
		dataset: &Dataset,
		path: &[String],
		delay_ms: Option<u32>,
	) -> Completion;

	fn resize_canvas(&mut self);

	fn handle_algo_change(&mut self, algo: GraphAlgo);

	/// The drawn node nearest to the pointer, if any is within reach.
	fn closest_node(&self, dataset: &Dataset, pointer: PointerPos) -> Option<String>;

	/// Emphasize `node_id` and its direct neighbors, dimming the rest.
	fn highlight_first_degree(&mut self, dataset: &Dataset, node_id: &str);
}
