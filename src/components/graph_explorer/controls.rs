//! DOM control surface the controller reads from and writes to.
//!
//! The [`Controls`] trait keeps the controller free of `web-sys`; the
//! [`DomControls`] implementation holds handles to the real elements.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{
	Document, Element, HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement,
};

/// Placeholder shown in the node selectors until a graph is drawn.
pub const PLACEHOLDER: &str = "Draw First";

/// Controls that are disabled and re-enabled together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlGroup {
	Connect,
	AnimateHamPath,
}

impl ControlGroup {
	pub fn class_name(self) -> &'static str {
		match self {
			ControlGroup::Connect => "DEPconnect",
			ControlGroup::AnimateHamPath => "DEPanimateHamPath",
		}
	}
}

/// One entry of the "from"/"to" node selectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeOption {
	/// Node id submitted when selected.
	pub value: String,
	/// Visible, possibly truncated, text.
	pub text: String,
	/// Full label shown on hover.
	pub title: String,
}

/// Content and placement of the node tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipView {
	pub text: String,
	pub border_color: String,
	pub left: i32,
	pub top: i32,
}

/// Read/write access to the page controls.
pub trait Controls {
	/// Replace both node selectors' options with the placeholder.
	fn reset_node_selectors(&mut self);
	/// Fill both node selectors; the "to" option at `to_selected` starts selected.
	fn fill_node_selectors(&mut self, options: &[NodeOption], to_selected: Option<usize>);
	fn connect_from(&self) -> String;
	fn connect_to(&self) -> String;
	fn set_group_disabled(&mut self, group: ControlGroup, disabled: bool);
	/// Text for every element bound to the current data mode.
	fn set_mode_text(&mut self, text: &str);
	fn set_draw_label(&mut self, text: &str);
	fn tooltip_toggle_label(&self) -> String;
	fn set_tooltip_toggle_label(&mut self, text: &str);
	fn delay_input(&self) -> String;
	fn set_delay_input(&mut self, value: u32);
	fn show_tooltip(&mut self, view: &TooltipView);
	fn hide_tooltip(&mut self);
}

/// [`Controls`] backed by live DOM elements.
pub struct DomControls {
	document: Document,
	connect_from: HtmlSelectElement,
	connect_to: HtmlSelectElement,
	draw_graph: HtmlElement,
	toggle_tooltips: HtmlElement,
	delay: HtmlInputElement,
	tooltip: HtmlElement,
}

fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
	let found = document
		.query_selector(selector)
		.ok()
		.flatten()
		.and_then(|e| e.dyn_into::<T>().ok());
	if found.is_none() {
		warn!("cohort-graph: control {} missing or of unexpected type", selector);
	}
	found
}

impl DomControls {
	pub fn new(
		document: Document,
		connect_from: HtmlSelectElement,
		connect_to: HtmlSelectElement,
		draw_graph: HtmlElement,
		toggle_tooltips: HtmlElement,
		delay: HtmlInputElement,
		tooltip: HtmlElement,
	) -> Self {
		Self {
			document,
			connect_from,
			connect_to,
			draw_graph,
			toggle_tooltips,
			delay,
			tooltip,
		}
	}

	/// Look up every control by its id (and the tooltip by class).
	pub fn from_document(document: &Document) -> Option<Self> {
		Some(Self::new(
			document.clone(),
			query(document, "#connectFrom")?,
			query(document, "#connectTo")?,
			query(document, "#drawGraph")?,
			query(document, "#toggleTooltips")?,
			query(document, "#animateHamPathDelay")?,
			query(document, ".tooltip")?,
		))
	}

	fn for_each_in_class(&self, class: &str, mut f: impl FnMut(Element)) {
		let Ok(list) = self.document.query_selector_all(&format!(".{}", class)) else {
			return;
		};
		for i in 0..list.length() {
			if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
				f(el);
			}
		}
	}

	fn make_option(&self, option: &NodeOption) -> Option<HtmlOptionElement> {
		let el: HtmlOptionElement = self.document.create_element("option").ok()?.dyn_into().ok()?;
		el.set_value(&option.value);
		el.set_title(&option.title);
		el.set_text(&option.text);
		Some(el)
	}
}

impl Controls for DomControls {
	fn reset_node_selectors(&mut self) {
		let html = format!("<option value=\"{0}\">{0}</option>", PLACEHOLDER);
		self.connect_from.set_inner_html(&html);
		self.connect_to.set_inner_html(&html);
	}

	fn fill_node_selectors(&mut self, options: &[NodeOption], to_selected: Option<usize>) {
		self.connect_from.set_inner_html("");
		self.connect_to.set_inner_html("");

		for (i, option) in options.iter().enumerate() {
			let Some(el) = self.make_option(option) else {
				continue;
			};
			if let Ok(copy) = el.clone_node_with_deep(true) {
				let _ = self.connect_from.append_child(&copy);
			}
			if to_selected == Some(i) {
				let _ = el.set_attribute("selected", "true");
			}
			let _ = self.connect_to.append_child(&el);
		}
	}

	fn connect_from(&self) -> String {
		self.connect_from.value()
	}

	fn connect_to(&self) -> String {
		self.connect_to.value()
	}

	fn set_group_disabled(&mut self, group: ControlGroup, disabled: bool) {
		self.for_each_in_class(group.class_name(), |el| {
			let _ = if disabled {
				el.set_attribute("disabled", "true")
			} else {
				el.remove_attribute("disabled")
			};
		});
	}

	fn set_mode_text(&mut self, text: &str) {
		self.for_each_in_class("DEPdataMode", |el| {
			if let Ok(el) = el.dyn_into::<HtmlElement>() {
				el.set_inner_text(text);
			}
		});
	}

	fn set_draw_label(&mut self, text: &str) {
		self.draw_graph.set_inner_text(text);
	}

	fn tooltip_toggle_label(&self) -> String {
		self.toggle_tooltips.inner_text()
	}

	fn set_tooltip_toggle_label(&mut self, text: &str) {
		self.toggle_tooltips.set_inner_text(text);
	}

	fn delay_input(&self) -> String {
		self.delay.value()
	}

	fn set_delay_input(&mut self, value: u32) {
		self.delay.set_value(&value.to_string());
	}

	fn show_tooltip(&mut self, view: &TooltipView) {
		let style = self.tooltip.style();
		let _ = style.set_property("display", "block");
		if let Some(text) = self
			.tooltip
			.first_element_child()
			.and_then(|c| c.dyn_into::<HtmlElement>().ok())
		{
			text.set_inner_text(&view.text);
		}
		let _ = style.set_property("border-color", &view.border_color);
		let _ = style.set_property("left", &format!("{}px", view.left));
		let _ = style.set_property("top", &format!("{}px", view.top));

		// Flip to the left of the pointer instead of overflowing the viewport.
		let rect = self.tooltip.get_bounding_client_rect();
		let viewport = web_sys::window()
			.and_then(|w| w.inner_width().ok())
			.and_then(|v| v.as_f64());
		if let Some(vw) = viewport {
			if rect.x() + rect.width() > vw {
				let left = view.left as f64 - rect.width();
				let _ = style.set_property("left", &format!("{}px", left));
			}
		}
	}

	fn hide_tooltip(&mut self) {
		let _ = self.tooltip.style().set_property("display", "none");
	}
}
