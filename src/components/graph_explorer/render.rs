//! Canvas implementation of the [`RenderSurface`].
//!
//! Static draws paint immediately. Animated draws (graph reveal, path
//! animation) run as local tasks that paint one step per timer tick. Each
//! `clear_canvas` bumps an epoch counter; a task that sees a newer epoch stops
//! painting, but still resolves its [`Completion`].

use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet};
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::completion::{Completion, completion};
use super::config::{NodeSizing, ViewConfig};
use super::layout::Layout;
use super::pathfind::shortest_path;
use super::state::GraphAlgo;
use super::surface::{PointerPos, RenderSurface};
use super::theme::Theme;
use super::types::Dataset;

type Point = (f64, f64);

/// Everything needed to paint one node.
#[derive(Clone, Debug)]
struct NodeGlyph {
	pos: Point,
	hue: f64,
	label: String,
}

fn glyphs(dataset: &Dataset, layout: &Layout) -> BTreeMap<String, NodeGlyph> {
	layout
		.iter()
		.filter_map(|(id, pos)| {
			let node = dataset.get(id)?;
			Some((
				id.to_string(),
				NodeGlyph {
					pos,
					hue: node.color_h,
					label: dataset.display_label(id),
				},
			))
		})
		.collect()
}

/// Stateless drawing primitives. Cheap to clone into animation tasks.
#[derive(Clone)]
struct Painter {
	ctx: CanvasRenderingContext2d,
	theme: Theme,
	sizing: NodeSizing,
}

impl Painter {
	fn background(&self, width: f64, height: f64) {
		self.ctx.set_fill_style_str(&self.theme.background.to_css());
		self.ctx.fill_rect(0.0, 0.0, width, height);
	}

	fn edge(&self, a: Point, b: Point, alpha: f64, dashed: bool) {
		let color = self.theme.edge;
		self.ctx
			.set_stroke_style_str(&color.with_alpha(color.a * alpha).to_css());
		self.ctx.set_line_width(self.sizing.edge_width);
		if dashed {
			let _ = self.ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(4.0),
				&JsValue::from_f64(4.0),
			));
		}
		self.ctx.begin_path();
		self.ctx.move_to(a.0, a.1);
		self.ctx.line_to(b.0, b.1);
		self.ctx.stroke();
		if dashed {
			let _ = self.ctx.set_line_dash(&js_sys::Array::new());
		}
	}

	fn node(&self, glyph: &NodeGlyph, alpha: f64) {
		let (x, y) = glyph.pos;
		let r = self.sizing.radius;
		self.ctx
			.set_fill_style_str(&self.theme.node_fill(glyph.hue, alpha));
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, r, 0.0, 2.0 * PI);
		self.ctx.fill();

		let label = self.theme.label;
		self.ctx
			.set_fill_style_str(&label.with_alpha(label.a * alpha).to_css());
		self.ctx.set_font(&self.sizing.label_font);
		let _ = self.ctx.fill_text(&glyph.label, x + r + 4.0, y + 4.0);
	}

	fn ring(&self, glyph: &NodeGlyph) {
		let (x, y) = glyph.pos;
		self.ctx.set_stroke_style_str(&self.theme.ring.to_css());
		self.ctx.set_line_width(2.0);
		self.ctx.begin_path();
		let _ = self.ctx.arc(
			x,
			y,
			self.sizing.radius + self.sizing.ring_offset,
			0.0,
			2.0 * PI,
		);
		self.ctx.stroke();
	}

	fn path_vertex(&self, p: Point) {
		self.ctx.set_fill_style_str(&self.theme.path.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(p.0, p.1, self.sizing.radius * 0.5, 0.0, 2.0 * PI);
		self.ctx.fill();
	}

	fn path_segment(&self, a: Point, b: Point) {
		self.ctx.set_stroke_style_str(&self.theme.path.to_css());
		self.ctx.set_line_width(self.sizing.path_width);
		self.ctx.set_line_cap("round");
		self.ctx.begin_path();
		self.ctx.move_to(a.0, a.1);
		self.ctx.line_to(b.0, b.1);
		self.ctx.stroke();
		self.path_vertex(a);
		self.path_vertex(b);
	}

	fn graph(&self, dataset: &Dataset, glyphs: &BTreeMap<String, NodeGlyph>) {
		for (a, b) in dataset.edges() {
			if let (Some(ga), Some(gb)) = (glyphs.get(a), glyphs.get(b)) {
				self.edge(ga.pos, gb.pos, 1.0, false);
			}
		}
		for glyph in glyphs.values() {
			self.node(glyph, 1.0);
		}
	}
}

/// A node revealed during an animated draw, with its already-revealed neighbors.
struct RevealStep {
	glyph: NodeGlyph,
	earlier: Vec<NodeGlyph>,
}

/// Draws the explorer onto an HTML canvas.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	painter: Painter,
	view: ViewConfig,
	algo: GraphAlgo,
	width: f64,
	height: f64,
	epoch: Rc<Cell<u64>>,
	/// Layout of the nodes currently on screen; `None` after a clear.
	visible: Option<Layout>,
}

impl CanvasSurface {
	pub fn new(canvas: HtmlCanvasElement, view: ViewConfig, theme: Theme) -> Option<Self> {
		let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
		let mut surface = Self {
			canvas,
			painter: Painter {
				ctx,
				theme,
				sizing: view.nodes.clone(),
			},
			view,
			algo: GraphAlgo::default(),
			width: 0.0,
			height: 0.0,
			epoch: Rc::new(Cell::new(0)),
			visible: None,
		};
		surface.resize_canvas();
		Some(surface)
	}

	fn layout(&self, dataset: &Dataset) -> Layout {
		Layout::compute(
			dataset,
			self.algo,
			self.width,
			self.height,
			self.view.nodes.padding,
		)
	}

	fn reveal(&self, dataset: &Dataset, glyphs: &BTreeMap<String, NodeGlyph>) {
		let mut seen: BTreeSet<&str> = BTreeSet::new();
		let steps: Vec<RevealStep> = glyphs
			.iter()
			.map(|(id, glyph)| {
				let earlier = dataset
					.neighbors(id)
					.into_iter()
					.filter(|n| seen.contains(n))
					.filter_map(|n| glyphs.get(n).cloned())
					.collect();
				seen.insert(id.as_str());
				RevealStep {
					glyph: glyph.clone(),
					earlier,
				}
			})
			.collect();

		let painter = self.painter.clone();
		let epoch = self.epoch.clone();
		let started = epoch.get();
		let step_ms = self.view.animation.reveal_step_ms;
		spawn_local(async move {
			for step in steps {
				if epoch.get() != started {
					debug!("cohort-graph: graph reveal interrupted");
					return;
				}
				for other in &step.earlier {
					painter.edge(step.glyph.pos, other.pos, 1.0, false);
					painter.node(other, 1.0);
				}
				painter.node(&step.glyph, 1.0);
				TimeoutFuture::new(step_ms).await;
			}
		});
	}
}

impl RenderSurface for CanvasSurface {
	fn draw_graph(&mut self, dataset: &Dataset, animated: bool) {
		let layout = self.layout(dataset);
		let glyphs = glyphs(dataset, &layout);
		debug!(
			"cohort-graph: drawing {} nodes ({:?}, animated={})",
			glyphs.len(),
			self.algo,
			animated
		);
		if animated {
			self.reveal(dataset, &glyphs);
		} else {
			self.painter.graph(dataset, &glyphs);
		}
		self.visible = Some(layout);
	}

	fn clear_canvas(&mut self) {
		self.epoch.set(self.epoch.get() + 1);
		self.painter.background(self.width, self.height);
		self.visible = None;
	}

	fn connect_two_nodes(&mut self, dataset: &Dataset, from: &str, to: &str) -> Completion {
		match shortest_path(dataset, from, to) {
			Some(path) => {
				debug!("cohort-graph: {} -> {} spans {} nodes", from, to, path.len());
				let step = self.view.animation.connect_step_ms;
				self.draw_path(dataset, &path, Some(step))
			}
			None => {
				warn!("cohort-graph: no path between {:?} and {:?}", from, to);
				Completion::ready()
			}
		}
	}

	fn draw_path(
		&mut self,
		dataset: &Dataset,
		path: &[String],
		delay_ms: Option<u32>,
	) -> Completion {
		let layout = self.layout(dataset);
		let points: Vec<Point> = path.iter().filter_map(|id| layout.get(id)).collect();
		if points.len() != path.len() {
			warn!(
				"cohort-graph: {} path node(s) missing from the current dataset",
				path.len() - points.len()
			);
		}

		let Some(delay) = delay_ms else {
			if let [only] = points.as_slice() {
				self.painter.path_vertex(*only);
			}
			for pair in points.windows(2) {
				self.painter.path_segment(pair[0], pair[1]);
			}
			return Completion::ready();
		};

		let (handle, done) = completion();
		let painter = self.painter.clone();
		let epoch = self.epoch.clone();
		let started = epoch.get();
		spawn_local(async move {
			for (i, &point) in points.iter().enumerate() {
				if epoch.get() != started {
					debug!("cohort-graph: path animation interrupted at step {}", i);
					break;
				}
				match i {
					0 => painter.path_vertex(point),
					_ => painter.path_segment(points[i - 1], point),
				}
				if i + 1 < points.len() {
					TimeoutFuture::new(delay).await;
				}
			}
			handle.finish();
		});
		done
	}

	fn resize_canvas(&mut self) {
		let window = web_sys::window();
		let (w, h) = self
			.canvas
			.parent_element()
			.map(|p| (p.client_width() as f64, p.client_height() as f64))
			.filter(|&(w, h)| w > 0.0 && h > 0.0)
			.or_else(|| {
				let win = window.as_ref()?;
				Some((
					win.inner_width().ok()?.as_f64()?,
					win.inner_height().ok()?.as_f64()?,
				))
			})
			.unwrap_or((800.0, 600.0));
		self.width = w;
		self.height = h;
		self.canvas.set_width(w as u32);
		self.canvas.set_height(h as u32);
		// Resizing wipes the bitmap.
		self.clear_canvas();
	}

	fn handle_algo_change(&mut self, algo: GraphAlgo) {
		self.algo = algo;
	}

	fn closest_node(&self, dataset: &Dataset, pointer: PointerPos) -> Option<String> {
		let layout = self.visible.as_ref()?;
		let rect = self.canvas.get_bounding_client_rect();
		let (x, y) = (
			pointer.client_x as f64 - rect.left(),
			pointer.client_y as f64 - rect.top(),
		);
		layout
			.nearest(x, y, self.view.nodes.hit_radius)
			.filter(|id| dataset.contains(id))
			.map(str::to_string)
	}

	fn highlight_first_degree(&mut self, dataset: &Dataset, node_id: &str) {
		self.clear_canvas();
		let layout = self.layout(dataset);
		let glyphs = glyphs(dataset, &layout);
		let Some(center) = glyphs.get(node_id) else {
			self.painter.graph(dataset, &glyphs);
			self.visible = Some(layout);
			return;
		};
		let mut focus = dataset.neighbors(node_id);
		focus.insert(node_id);
		let dim = self.view.dim_alpha;

		for (a, b) in dataset.edges() {
			if a == node_id || b == node_id {
				continue;
			}
			if let (Some(ga), Some(gb)) = (glyphs.get(a), glyphs.get(b)) {
				self.painter.edge(ga.pos, gb.pos, dim, true);
			}
		}
		for (id, glyph) in &glyphs {
			if !focus.contains(id.as_str()) {
				self.painter.node(glyph, dim);
			}
		}
		for id in &focus {
			if let Some(glyph) = glyphs.get(*id) {
				if *id != node_id {
					self.painter.edge(center.pos, glyph.pos, 1.0, false);
				}
			}
		}
		for id in &focus {
			if let Some(glyph) = glyphs.get(*id) {
				self.painter.node(glyph, 1.0);
			}
		}
		self.painter.ring(center);
		debug!(
			"cohort-graph: highlighted {} with {} neighbor(s)",
			node_id,
			focus.len() - 1
		);
		self.visible = Some(layout);
	}
}
