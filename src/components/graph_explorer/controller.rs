//! UI state controller.
//!
//! Owns the [`Configuration`] and keeps it consistent with the page controls,
//! re-rendering through a [`RenderSurface`]. Every public method corresponds to
//! one control event. The controller never touches the DOM directly; it goes
//! through [`Controls`], so it can run against fakes.
//!
//! Path operations are mutually exclusive: while an animated path is being
//! drawn, further path operations (and click highlighting) are rejected until
//! [`UiController::finish`] is called with the operation's ticket.

use log::debug;

use super::completion::Completion;
use super::config::{ViewConfig, truncate_label};
use super::controls::{ControlGroup, Controls, NodeOption, TooltipView};
use super::state::Configuration;
use super::surface::{PointerPos, RenderSurface};
use super::theme::Theme;
use super::types::GraphCatalog;

/// Cleanup owed once an asynchronous path operation completes.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "hand the ticket back to UiController::finish"]
pub struct PathTicket {
	group: ControlGroup,
	restore_tooltips: bool,
}

/// An in-flight path operation.
#[derive(Debug)]
pub struct PendingPath {
	pub done: Completion,
	pub ticket: PathTicket,
}

impl PendingPath {
	/// Wait for the drawing to finish, yielding the ticket for [`UiController::finish`].
	pub async fn wait(self) -> PathTicket {
		self.done.await;
		self.ticket
	}
}

/// Handles every control event against one surface and one set of controls.
pub struct UiController<S, C> {
	config: Configuration,
	catalog: GraphCatalog,
	view: ViewConfig,
	theme: Theme,
	surface: S,
	controls: C,
	last_highlighted: Option<String>,
	path_busy: bool,
}

impl<S: RenderSurface, C: Controls> UiController<S, C> {
	pub fn new(
		catalog: GraphCatalog,
		surface: S,
		controls: C,
		view: ViewConfig,
		theme: Theme,
	) -> Self {
		let mut controller = Self {
			config: Configuration::default(),
			catalog,
			view,
			theme,
			surface,
			controls,
			last_highlighted: None,
			path_busy: false,
		};
		controller.update_text_dependencies();
		controller
	}

	pub fn config(&self) -> &Configuration {
		&self.config
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}

	pub fn controls(&self) -> &C {
		&self.controls
	}

	pub fn last_highlighted(&self) -> Option<&str> {
		self.last_highlighted.as_deref()
	}

	pub fn is_path_busy(&self) -> bool {
		self.path_busy
	}

	/// Switch between the Students and Groups datasets.
	pub fn toggle_data_mode(&mut self) {
		self.config.data_mode = self.config.data_mode.toggled();
		debug!("cohort-graph: data mode -> {:?}", self.config.data_mode);
		self.reset_graph();
	}

	/// Switch between the Cartesian and radial layouts.
	pub fn toggle_graph_algo(&mut self) {
		self.config.graph_algo = self.config.graph_algo.toggled();
		debug!("cohort-graph: graph algo -> {:?}", self.config.graph_algo);
		self.surface.handle_algo_change(self.config.graph_algo);
		self.reset_graph();
	}

	fn reset_graph(&mut self) {
		self.surface.clear_canvas();
		self.config.graph_enabled = false;
		self.last_highlighted = None;
		self.controls.reset_node_selectors();
		self.update_text_dependencies();
	}

	/// Draw (or redraw) the current dataset and fill the node selectors.
	pub fn draw_graph(&mut self) {
		self.config.graph_enabled = true;
		self.last_highlighted = None;
		self.controls.set_draw_label("Redraw");
		let dataset = self.catalog.dataset(self.config.data_mode);
		self.surface.draw_full_graph(dataset, true);
		self.update_connect_dropdowns();
	}

	fn update_connect_dropdowns(&mut self) {
		let dataset = self.catalog.dataset(self.config.data_mode);
		let options: Vec<NodeOption> = dataset
			.sorted_ids()
			.into_iter()
			.map(|id| {
				let title = dataset.display_label(id);
				NodeOption {
					value: id.to_string(),
					text: truncate_label(&title, self.view.label_max_chars),
					title,
				}
			})
			.collect();
		let to_selected = (options.len() > 1).then_some(1);
		self.controls.fill_node_selectors(&options, to_selected);
	}

	/// Clear a previously drawn path (keeping the base graph) and mark a new one.
	fn prepare_path(&mut self) {
		if self.config.path_enabled {
			self.surface.clear_canvas();
			if self.config.graph_enabled {
				self.surface
					.draw_graph(self.catalog.dataset(self.config.data_mode), false);
			}
		}
		self.config.path_enabled = true;
	}

	/// Suspend tooltips and disable `group` for the duration of a path operation.
	fn begin_path_op(&mut self, group: ControlGroup) -> PathTicket {
		let restore_tooltips = self.config.tooltips_enabled;
		if restore_tooltips {
			self.toggle_tooltips();
		}
		self.controls.set_group_disabled(group, true);
		self.prepare_path();
		self.path_busy = true;
		PathTicket {
			group,
			restore_tooltips,
		}
	}

	fn reject_if_busy(&self, op: &str) -> bool {
		if self.path_busy {
			debug!("cohort-graph: {} ignored, path operation in flight", op);
		}
		self.path_busy
	}

	/// Connect the nodes chosen in the "from" and "to" selectors.
	pub fn connect_nodes(&mut self) -> Option<PendingPath> {
		if self.reject_if_busy("connect") {
			return None;
		}
		let ticket = self.begin_path_op(ControlGroup::Connect);
		let (from, to) = (self.controls.connect_from(), self.controls.connect_to());
		debug!("cohort-graph: connecting {} -> {}", from, to);
		let done = self
			.surface
			.connect_two_nodes(self.catalog.dataset(self.config.data_mode), &from, &to);
		Some(PendingPath { done, ticket })
	}

	/// Draw the precomputed Hamiltonian path of the current dataset at once.
	pub fn draw_ham_path(&mut self) {
		if self.reject_if_busy("draw path") {
			return;
		}
		self.prepare_path();
		let mode = self.config.data_mode;
		let _ = self.surface.draw_path(
			self.catalog.dataset(mode),
			self.catalog.ham_path(mode),
			None,
		);
	}

	/// Animate the precomputed Hamiltonian path using the delay input.
	pub fn animate_ham_path(&mut self) -> Option<PendingPath> {
		if self.reject_if_busy("animate path") {
			return None;
		}
		let delay = self.view.delay.sanitize(&self.controls.delay_input());
		let ticket = self.begin_path_op(ControlGroup::AnimateHamPath);
		let mode = self.config.data_mode;
		debug!("cohort-graph: animating path with {}ms steps", delay);
		let done = self.surface.draw_path(
			self.catalog.dataset(mode),
			self.catalog.ham_path(mode),
			Some(delay),
		);
		Some(PendingPath { done, ticket })
	}

	/// Remove any drawn path, keeping the base graph if it is enabled.
	pub fn clear_path(&mut self) {
		if self.reject_if_busy("clear path") {
			return;
		}
		self.surface.clear_canvas();
		if self.config.graph_enabled {
			self.surface
				.draw_graph(self.catalog.dataset(self.config.data_mode), false);
		}
		self.config.path_enabled = false;
	}

	/// Undo what a path operation suspended. Call once its completion resolves.
	pub fn finish(&mut self, ticket: PathTicket) {
		self.path_busy = false;
		self.controls.set_group_disabled(ticket.group, false);
		if ticket.restore_tooltips && !self.config.tooltips_enabled {
			self.toggle_tooltips();
		}
	}

	/// Normalize the animation delay input in place.
	pub fn validate_delay(&mut self) {
		let value = self.view.delay.sanitize(&self.controls.delay_input());
		self.controls.set_delay_input(value);
	}

	pub fn toggle_tooltips(&mut self) {
		self.controls.hide_tooltip();
		self.config.tooltips_enabled = !self.config.tooltips_enabled;
		let next = match self.controls.tooltip_toggle_label().trim() {
			"Enable" => "Disable",
			"Disable" => "Enable",
			_ => "Error",
		};
		self.controls.set_tooltip_toggle_label(next);
	}

	/// Show the tooltip for the node under the pointer, if tooltips are on.
	pub fn pointer_moved(&mut self, pointer: PointerPos) {
		if !self.config.tooltips_enabled {
			return;
		}
		if !pointer.on_canvas {
			self.controls.hide_tooltip();
			return;
		}
		let dataset = self.catalog.dataset(self.config.data_mode);
		let hit = self
			.surface
			.closest_node(dataset, pointer)
			.and_then(|id| dataset.get(&id).map(|node| (id, node)));
		let Some((id, node)) = hit else {
			self.controls.hide_tooltip();
			return;
		};
		let (dx, dy) = self.view.tooltip_offset;
		let view = TooltipView {
			text: dataset.display_label(&id),
			border_color: self.theme.tooltip_border(node.color_h),
			left: pointer.client_x + dx,
			top: pointer.client_y + dy,
		};
		self.controls.show_tooltip(&view);
	}

	/// Toggle first-degree highlighting of the node under the pointer.
	pub fn pointer_clicked(&mut self, pointer: PointerPos) {
		if self.path_busy || !pointer.on_canvas {
			return;
		}
		let dataset = self.catalog.dataset(self.config.data_mode);
		let Some(id) = self
			.surface
			.closest_node(dataset, pointer)
			.filter(|id| dataset.contains(id))
		else {
			return;
		};

		if self.last_highlighted.as_deref() == Some(id.as_str()) {
			self.last_highlighted = None;
			self.surface.draw_full_graph(dataset, false);
			return;
		}
		self.surface.highlight_first_degree(dataset, &id);
		self.last_highlighted = Some(id);
	}

	/// Fit the canvas to the new window size and redraw if a graph is shown.
	pub fn window_resized(&mut self) {
		self.surface.resize_canvas();
		if self.config.graph_enabled {
			self.surface
				.draw_full_graph(self.catalog.dataset(self.config.data_mode), true);
		}
	}

	fn update_text_dependencies(&mut self) {
		let text = format!("Data Mode: {}", self.config.data_mode.label());
		self.controls.set_mode_text(&text);
	}
}

#[cfg(test)]
mod tests {
	use std::collections::{BTreeMap, HashSet};

	use futures::executor::block_on;

	use super::*;
	use crate::components::graph_explorer::completion::{CompletionHandle, completion};
	use crate::components::graph_explorer::controls::PLACEHOLDER;
	use crate::components::graph_explorer::state::{DataMode, GraphAlgo};
	use crate::components::graph_explorer::types::{Dataset, HamPaths, NodeRecord};

	#[derive(Clone, Debug, PartialEq)]
	enum Call {
		Draw { animated: bool },
		Clear,
		Connect(String, String),
		Path { len: usize, delay: Option<u32> },
		Resize,
		Algo(GraphAlgo),
		Highlight(String),
	}

	#[derive(Default)]
	struct FakeSurface {
		calls: Vec<Call>,
		pending: Vec<CompletionHandle>,
		under_pointer: Option<String>,
	}

	impl FakeSurface {
		fn pending_completion(&mut self) -> Completion {
			let (handle, done) = completion();
			self.pending.push(handle);
			done
		}
	}

	impl RenderSurface for FakeSurface {
		fn draw_graph(&mut self, _: &Dataset, animated: bool) {
			self.calls.push(Call::Draw { animated });
		}

		fn clear_canvas(&mut self) {
			self.calls.push(Call::Clear);
		}

		fn connect_two_nodes(&mut self, _: &Dataset, from: &str, to: &str) -> Completion {
			self.calls.push(Call::Connect(from.into(), to.into()));
			self.pending_completion()
		}

		fn draw_path(&mut self, _: &Dataset, path: &[String], delay: Option<u32>) -> Completion {
			self.calls.push(Call::Path {
				len: path.len(),
				delay,
			});
			match delay {
				Some(_) => self.pending_completion(),
				None => Completion::ready(),
			}
		}

		fn resize_canvas(&mut self) {
			self.calls.push(Call::Resize);
		}

		fn handle_algo_change(&mut self, algo: GraphAlgo) {
			self.calls.push(Call::Algo(algo));
		}

		fn closest_node(&self, _: &Dataset, _: PointerPos) -> Option<String> {
			self.under_pointer.clone()
		}

		fn highlight_first_degree(&mut self, _: &Dataset, node_id: &str) {
			self.calls.push(Call::Highlight(node_id.into()));
		}
	}

	struct FakeControls {
		from_options: Vec<NodeOption>,
		to_options: Vec<NodeOption>,
		to_selected: Option<usize>,
		from_value: String,
		to_value: String,
		disabled: HashSet<ControlGroup>,
		mode_text: String,
		draw_label: String,
		toggle_label: String,
		delay: String,
		tooltip: Option<TooltipView>,
	}

	impl Default for FakeControls {
		fn default() -> Self {
			Self {
				from_options: Vec::new(),
				to_options: Vec::new(),
				to_selected: None,
				from_value: PLACEHOLDER.into(),
				to_value: PLACEHOLDER.into(),
				disabled: HashSet::new(),
				mode_text: String::new(),
				draw_label: "Draw".into(),
				toggle_label: "Enable".into(),
				delay: "250".into(),
				tooltip: None,
			}
		}
	}

	impl Controls for FakeControls {
		fn reset_node_selectors(&mut self) {
			let placeholder = NodeOption {
				value: PLACEHOLDER.into(),
				text: PLACEHOLDER.into(),
				title: String::new(),
			};
			self.from_options = vec![placeholder.clone()];
			self.to_options = vec![placeholder];
			self.to_selected = None;
			self.from_value = PLACEHOLDER.into();
			self.to_value = PLACEHOLDER.into();
		}

		fn fill_node_selectors(&mut self, options: &[NodeOption], to_selected: Option<usize>) {
			self.from_options = options.to_vec();
			self.to_options = options.to_vec();
			self.to_selected = to_selected;
			self.from_value = options.first().map(|o| o.value.clone()).unwrap_or_default();
			self.to_value = options
				.get(to_selected.unwrap_or(0))
				.map(|o| o.value.clone())
				.unwrap_or_default();
		}

		fn connect_from(&self) -> String {
			self.from_value.clone()
		}

		fn connect_to(&self) -> String {
			self.to_value.clone()
		}

		fn set_group_disabled(&mut self, group: ControlGroup, disabled: bool) {
			if disabled {
				self.disabled.insert(group);
			} else {
				self.disabled.remove(&group);
			}
		}

		fn set_mode_text(&mut self, text: &str) {
			self.mode_text = text.into();
		}

		fn set_draw_label(&mut self, text: &str) {
			self.draw_label = text.into();
		}

		fn tooltip_toggle_label(&self) -> String {
			self.toggle_label.clone()
		}

		fn set_tooltip_toggle_label(&mut self, text: &str) {
			self.toggle_label = text.into();
		}

		fn delay_input(&self) -> String {
			self.delay.clone()
		}

		fn set_delay_input(&mut self, value: u32) {
			self.delay = value.to_string();
		}

		fn show_tooltip(&mut self, view: &TooltipView) {
			self.tooltip = Some(view.clone());
		}

		fn hide_tooltip(&mut self) {
			self.tooltip = None;
		}
	}

	type Controller = UiController<FakeSurface, FakeControls>;

	fn record(label: Option<&str>, hue: f64, neighbors: &[&str]) -> NodeRecord {
		NodeRecord {
			label: label.map(str::to_string),
			color_h: hue,
			neighbors: neighbors.iter().map(|s| s.to_string()).collect(),
			..Default::default()
		}
	}

	fn catalog() -> GraphCatalog {
		let groups = Dataset::new(BTreeMap::from([
			("c".to_string(), record(None, 30.0, &[])),
			("a".to_string(), record(Some("Alice"), 200.0, &["b"])),
			("b".to_string(), record(Some("Bob"), 90.0, &["c"])),
		]));
		let students = Dataset::new(BTreeMap::from([
			("zed".to_string(), record(None, 0.0, &["amy"])),
			(
				"amy".to_string(),
				record(Some("Amelia Constance Worthington"), 300.0, &[]),
			),
		]));
		GraphCatalog {
			students,
			groups,
			ham_paths: HamPaths {
				students: vec!["amy".into(), "zed".into()],
				groups: vec!["a".into(), "b".into(), "c".into()],
			},
		}
	}

	fn controller() -> Controller {
		UiController::new(
			catalog(),
			FakeSurface::default(),
			FakeControls::default(),
			ViewConfig::default(),
			Theme::default(),
		)
	}

	fn calls(c: &mut Controller) -> Vec<Call> {
		std::mem::take(&mut c.surface_mut().calls)
	}

	fn fire_completions(c: &mut Controller) {
		for handle in c.surface_mut().pending.drain(..) {
			handle.finish();
		}
	}

	#[test]
	fn mode_text_is_set_on_construction() {
		assert_eq!(controller().controls().mode_text, "Data Mode: Groups");
	}

	#[test]
	fn toggling_data_mode_twice_restores_mode_and_disables_graph() {
		let mut c = controller();
		c.draw_graph();
		c.toggle_data_mode();
		assert_eq!(c.config().data_mode, DataMode::Students);
		assert_eq!(c.controls().mode_text, "Data Mode: Students");
		c.toggle_data_mode();
		assert_eq!(c.config().data_mode, DataMode::Groups);
		assert!(!c.config().graph_enabled);
		assert_eq!(c.controls().from_options[0].value, PLACEHOLDER);
		assert_eq!(c.controls().to_options.len(), 1);
		assert_eq!(c.controls().mode_text, "Data Mode: Groups");
	}

	#[test]
	fn toggling_algo_notifies_surface_and_resets() {
		let mut c = controller();
		c.draw_graph();
		calls(&mut c);
		c.toggle_graph_algo();
		assert_eq!(c.config().graph_algo, GraphAlgo::Radial);
		assert_eq!(calls(&mut c), vec![Call::Algo(GraphAlgo::Radial), Call::Clear]);
		assert!(!c.config().graph_enabled);
		assert_eq!(c.controls().to_options[0].value, PLACEHOLDER);
	}

	#[test]
	fn draw_graph_populates_sorted_selectors() {
		let mut c = controller();
		c.draw_graph();
		assert!(c.config().graph_enabled);
		assert_eq!(c.controls().draw_label, "Redraw");
		assert_eq!(calls(&mut c), vec![Call::Clear, Call::Draw { animated: true }]);

		let ctl = c.controls();
		let values: Vec<_> = ctl.from_options.iter().map(|o| o.value.as_str()).collect();
		assert_eq!(values, ["a", "b", "c"]);
		assert_eq!(ctl.from_options, ctl.to_options);
		assert_eq!(ctl.to_selected, Some(1));
		assert_eq!(ctl.to_value, "b");
		let texts: Vec<_> = ctl.from_options.iter().map(|o| o.text.as_str()).collect();
		assert_eq!(texts, ["Alice", "Bob", "C"]);
	}

	#[test]
	fn long_labels_are_truncated_with_full_title() {
		let mut c = controller();
		c.toggle_data_mode();
		c.draw_graph();
		let amy = &c.controls().from_options[0];
		assert_eq!(amy.text, "Amelia Constance Wo...");
		assert_eq!(amy.title, "Amelia Constance Worthington");
		assert_eq!(c.controls().from_options.len(), 2);
		assert_eq!(c.controls().to_selected, Some(1));
	}

	#[test]
	fn connect_disables_group_until_completion() {
		let mut c = controller();
		c.draw_graph();
		calls(&mut c);

		let mut pending = c.connect_nodes().expect("connect accepted");
		assert!(c.config().path_enabled);
		assert!(c.controls().disabled.contains(&ControlGroup::Connect));
		assert_eq!(calls(&mut c), vec![Call::Connect("a".into(), "b".into())]);
		assert!(!pending.done.is_finished());

		fire_completions(&mut c);
		let ticket = block_on(pending.wait());
		assert!(c.controls().disabled.contains(&ControlGroup::Connect));
		c.finish(ticket);
		assert!(c.controls().disabled.is_empty());
		assert!(!c.is_path_busy());
	}

	#[test]
	fn second_path_redraws_base_graph_first() {
		let mut c = controller();
		c.draw_graph();
		let first = c.connect_nodes().unwrap();
		fire_completions(&mut c);
		c.finish(block_on(first.wait()));
		calls(&mut c);

		c.draw_ham_path();
		assert_eq!(
			calls(&mut c),
			vec![
				Call::Clear,
				Call::Draw { animated: false },
				Call::Path {
					len: 3,
					delay: None
				}
			]
		);
	}

	#[test]
	fn path_without_graph_does_not_draw_graph() {
		let mut c = controller();
		c.draw_ham_path();
		c.draw_ham_path();
		assert_eq!(
			calls(&mut c),
			vec![
				Call::Path {
					len: 3,
					delay: None
				},
				Call::Clear,
				Call::Path {
					len: 3,
					delay: None
				}
			]
		);
	}

	#[test]
	fn path_operations_are_mutually_exclusive() {
		let mut c = controller();
		c.draw_graph();
		let pending = c.connect_nodes().unwrap();
		calls(&mut c);

		assert!(c.animate_ham_path().is_none());
		assert!(c.connect_nodes().is_none());
		c.draw_ham_path();
		c.clear_path();
		assert!(calls(&mut c).is_empty());
		assert!(!c.controls().disabled.contains(&ControlGroup::AnimateHamPath));

		fire_completions(&mut c);
		c.finish(block_on(pending.wait()));
		assert!(c.animate_ham_path().is_some());
	}

	#[test]
	fn animate_uses_sanitized_delay() {
		let mut c = controller();
		c.controls.delay = "5000".into();
		let pending = c.animate_ham_path().unwrap();
		assert_eq!(
			calls(&mut c),
			vec![Call::Path {
				len: 3,
				delay: Some(2000)
			}]
		);
		assert!(c.controls().disabled.contains(&ControlGroup::AnimateHamPath));
		fire_completions(&mut c);
		c.finish(block_on(pending.wait()));
		assert!(c.controls().disabled.is_empty());

		c.controls.delay = "oops".into();
		let _ = c.animate_ham_path().unwrap();
		assert_eq!(
			calls(&mut c),
			vec![
				Call::Clear,
				Call::Path {
					len: 3,
					delay: Some(250)
				}
			]
		);
	}

	#[test]
	fn dropped_animation_still_releases_controls() {
		let mut c = controller();
		let pending = c.animate_ham_path().unwrap();
		c.surface_mut().pending.clear();
		c.finish(block_on(pending.wait()));
		assert!(c.controls().disabled.is_empty());
	}

	#[test]
	fn tooltips_are_suspended_during_path_ops() {
		let mut c = controller();
		c.toggle_tooltips();
		assert!(c.config().tooltips_enabled);
		assert_eq!(c.controls().toggle_label, "Disable");

		let pending = c.connect_nodes().unwrap();
		assert!(!c.config().tooltips_enabled);
		assert_eq!(c.controls().toggle_label, "Enable");

		fire_completions(&mut c);
		c.finish(block_on(pending.wait()));
		assert!(c.config().tooltips_enabled);
		assert_eq!(c.controls().toggle_label, "Disable");
	}

	#[test]
	fn tooltips_left_on_manually_are_not_flipped_back_off() {
		let mut c = controller();
		c.toggle_tooltips();
		let pending = c.connect_nodes().unwrap();
		c.toggle_tooltips();
		fire_completions(&mut c);
		c.finish(block_on(pending.wait()));
		assert!(c.config().tooltips_enabled);
	}

	#[test]
	fn clear_path_redraws_graph_when_enabled() {
		let mut c = controller();
		c.draw_ham_path();
		c.clear_path();
		assert!(!c.config().path_enabled);
		c.draw_graph();
		calls(&mut c);
		c.clear_path();
		assert_eq!(calls(&mut c), vec![Call::Clear, Call::Draw { animated: false }]);
	}

	#[test]
	fn validate_delay_clamps_input() {
		let mut c = controller();
		for (input, expected) in [("abc", "250"), ("42", "100"), ("9000", "2000"), ("640", "640")] {
			c.controls.delay = input.into();
			c.validate_delay();
			assert_eq!(c.controls().delay, expected);
		}
	}

	#[test]
	fn toggling_tooltips_twice_restores_label() {
		let mut c = controller();
		c.toggle_tooltips();
		c.toggle_tooltips();
		assert_eq!(c.controls().toggle_label, "Enable");
		assert!(!c.config().tooltips_enabled);
	}

	#[test]
	fn unknown_toggle_label_falls_back_to_sentinel() {
		let mut c = controller();
		c.controls.toggle_label = "???".into();
		c.toggle_tooltips();
		assert_eq!(c.controls().toggle_label, "Error");
		assert!(c.config().tooltips_enabled);
	}

	#[test]
	fn pointer_move_shows_tooltip_only_when_enabled() {
		let mut c = controller();
		c.surface_mut().under_pointer = Some("a".into());
		c.pointer_moved(PointerPos::new(10, 20));
		assert!(c.controls().tooltip.is_none());

		c.toggle_tooltips();
		c.pointer_moved(PointerPos::new(10, 20));
		assert_eq!(
			c.controls().tooltip,
			Some(TooltipView {
				text: "Alice".into(),
				border_color: "hsl(200, 60%, 68%)".into(),
				left: 17,
				top: 25,
			})
		);

		c.surface_mut().under_pointer = Some("c".into());
		c.pointer_moved(PointerPos::new(0, 0));
		assert_eq!(c.controls().tooltip.as_ref().unwrap().text, "C");

		c.surface_mut().under_pointer = None;
		c.pointer_moved(PointerPos::new(0, 0));
		assert!(c.controls().tooltip.is_none());
	}

	#[test]
	fn clicking_same_node_twice_clears_highlight() {
		let mut c = controller();
		c.draw_graph();
		calls(&mut c);
		c.surface_mut().under_pointer = Some("b".into());

		c.pointer_clicked(PointerPos::new(0, 0));
		assert_eq!(c.last_highlighted(), Some("b"));
		assert_eq!(calls(&mut c), vec![Call::Highlight("b".into())]);

		c.pointer_clicked(PointerPos::new(0, 0));
		assert_eq!(c.last_highlighted(), None);
		assert_eq!(calls(&mut c), vec![Call::Clear, Call::Draw { animated: false }]);
	}

	#[test]
	fn clicking_nothing_or_unknown_node_is_a_no_op() {
		let mut c = controller();
		c.pointer_clicked(PointerPos::new(0, 0));
		c.surface_mut().under_pointer = Some("not-in-dataset".into());
		c.pointer_clicked(PointerPos::new(0, 0));
		assert!(calls(&mut c).is_empty());
		assert_eq!(c.last_highlighted(), None);
	}

	#[test]
	fn resize_redraws_only_when_graph_enabled() {
		let mut c = controller();
		c.window_resized();
		assert_eq!(calls(&mut c), vec![Call::Resize]);
		c.draw_graph();
		calls(&mut c);
		c.window_resized();
		assert_eq!(
			calls(&mut c),
			vec![Call::Resize, Call::Clear, Call::Draw { animated: true }]
		);
	}

	#[test]
	fn pointer_events_off_the_canvas_are_ignored() {
		let mut c = controller();
		c.draw_graph();
		c.draw_ham_path();
		calls(&mut c);
		c.surface_mut().under_pointer = Some("a".into());

		let over_button = PointerPos::new(40, 40).on_canvas(false);
		c.pointer_clicked(over_button);
		assert!(calls(&mut c).is_empty());
		assert_eq!(c.last_highlighted(), None);

		c.toggle_tooltips();
		c.pointer_moved(PointerPos::new(40, 40));
		assert!(c.controls().tooltip.is_some());
		c.pointer_moved(over_button);
		assert!(c.controls().tooltip.is_none());
	}

	#[test]
	fn animate_suspends_and_restores_tooltips() {
		let mut c = controller();
		c.toggle_tooltips();
		c.surface_mut().under_pointer = Some("a".into());

		let pending = c.animate_ham_path().unwrap();
		assert!(!c.config().tooltips_enabled);
		assert_eq!(c.controls().toggle_label, "Enable");
		c.pointer_moved(PointerPos::new(5, 5));
		assert!(c.controls().tooltip.is_none());

		fire_completions(&mut c);
		c.finish(block_on(pending.wait()));
		assert!(c.config().tooltips_enabled);
		assert_eq!(c.controls().toggle_label, "Disable");
		assert!(c.controls().disabled.is_empty());
	}

	#[test]
	fn toggle_mode_during_animation_releases_controls() {
		let mut c = controller();
		c.draw_graph();
		let pending = c.animate_ham_path().unwrap();
		assert!(c.is_path_busy());

		c.toggle_data_mode();
		assert_eq!(c.config().data_mode, DataMode::Students);
		assert!(!c.config().graph_enabled);

		fire_completions(&mut c);
		c.finish(block_on(pending.wait()));
		assert!(!c.is_path_busy());
		assert!(c.controls().disabled.is_empty());
		assert!(c.animate_ham_path().is_some());
	}
}
