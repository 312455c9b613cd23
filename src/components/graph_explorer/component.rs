//! Leptos component hosting the control panel, canvas and tooltip.
//!
//! On mount the component builds a [`CanvasSurface`] and [`DomControls`],
//! hands both to a [`UiController`], and attaches the window `resize` and
//! document `mousemove`/`click` listeners. Control events are routed to the
//! controller; path operations settle asynchronously through `spawn_local`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, HtmlCanvasElement, MouseEvent};

use super::config::ViewConfig;
use super::controller::{PendingPath, UiController};
use super::controls::{DomControls, PLACEHOLDER};
use super::render::CanvasSurface;
use super::surface::PointerPos;
use super::theme::Theme;
use super::types::GraphCatalog;

type Explorer = UiController<CanvasSurface, DomControls>;
type Shared = Rc<RefCell<Option<Explorer>>>;

/// Run `f` against the controller if it is mounted and not already borrowed.
fn with_explorer<R>(explorer: &Shared, f: impl FnOnce(&mut Explorer) -> R) -> Option<R> {
	let mut guard = explorer.try_borrow_mut().ok()?;
	guard.as_mut().map(f)
}

/// Run `f` once `slot` can be borrowed, calling `pause` between attempts.
async fn when_free<T, P>(
	slot: &RefCell<Option<T>>,
	mut pause: impl FnMut() -> P,
	f: impl FnOnce(&mut T),
) where
	P: Future<Output = ()>,
{
	loop {
		if let Ok(mut guard) = slot.try_borrow_mut() {
			if let Some(value) = guard.as_mut() {
				f(value);
			}
			return;
		}
		debug!("cohort-graph: controller busy, retrying path cleanup");
		pause().await;
	}
}

fn handler<E>(
	explorer: &Shared,
	f: fn(&mut Explorer),
) -> impl FnMut(E) + 'static + use<E> {
	let explorer = explorer.clone();
	move |_| {
		with_explorer(&explorer, f);
	}
}

/// Like [`handler`], for operations that finish asynchronously.
fn path_handler<E>(
	explorer: &Shared,
	f: fn(&mut Explorer) -> Option<PendingPath>,
) -> impl FnMut(E) + 'static + use<E> {
	let explorer = explorer.clone();
	move |_| {
		let Some(pending) = with_explorer(&explorer, f).flatten() else {
			return;
		};
		let explorer = explorer.clone();
		spawn_local(async move {
			let ticket = pending.wait().await;
			when_free(&*explorer, || TimeoutFuture::new(0), |c| c.finish(ticket)).await;
		});
	}
}

/// Interactive explorer for the student and group graphs.
#[component]
pub fn GraphExplorer(#[prop(into)] catalog: Signal<GraphCatalog>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let explorer: Shared = Rc::new(RefCell::new(None));
	let pointer_cbs: Rc<RefCell<Vec<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(Vec::new()));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (explorer_init, pointer_cbs_init, resize_cb_init) =
		(explorer.clone(), pointer_cbs.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if explorer_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let canvas_target: EventTarget = canvas.clone().into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(document) = window.document() else {
			return;
		};
		let Some(controls) = DomControls::from_document(&document) else {
			warn!("cohort-graph: controls not found, explorer disabled");
			return;
		};
		let (view, theme) = (ViewConfig::default(), Theme::default());
		let Some(surface) = CanvasSurface::new(canvas, view.clone(), theme.clone()) else {
			warn!("cohort-graph: 2d canvas context unavailable");
			return;
		};
		*explorer_init.borrow_mut() = Some(UiController::new(
			catalog.get_untracked(),
			surface,
			controls,
			view,
			theme,
		));
		info!("cohort-graph: explorer mounted");

		let explorer_resize = explorer_init.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			with_explorer(&explorer_resize, |c| c.window_resized());
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let pointer_at = move |ev: &MouseEvent| {
			let on_canvas = ev.target().is_some_and(|t| t == canvas_target);
			PointerPos::new(ev.client_x(), ev.client_y()).on_canvas(on_canvas)
		};
		let explorer_mm = explorer_init.clone();
		let pointer_mm = pointer_at.clone();
		let on_mousemove = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			let pointer = pointer_mm(&ev);
			with_explorer(&explorer_mm, |c| c.pointer_moved(pointer));
		});
		let explorer_click = explorer_init.clone();
		let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			let pointer = pointer_at(&ev);
			with_explorer(&explorer_click, |c| c.pointer_clicked(pointer));
		});
		let _ = document
			.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
		let _ =
			document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
		pointer_cbs_init.borrow_mut().extend([on_mousemove, on_click]);
	});

	view! {
		<div class="graph-explorer">
			<aside class="graph-controls">
				<h2 class="DEPdataMode">"Data Mode: Groups"</h2>
				<label>
					"Dataset "
					<select id="dataMode" on:change=handler(&explorer, Explorer::toggle_data_mode)>
						<option value="groups" selected=true>"Groups"</option>
						<option value="students">"Students"</option>
					</select>
				</label>
				<label>
					"Layout "
					<select id="graphAlgo" on:change=handler(&explorer, Explorer::toggle_graph_algo)>
						<option value="cartesian" selected=true>"Cartesian"</option>
						<option value="radial">"Radial"</option>
					</select>
				</label>
				<button id="drawGraph" on:click=handler(&explorer, Explorer::draw_graph)>"Draw"</button>

				<fieldset>
					<legend>"Connect"</legend>
					<select id="connectFrom" class="DEPconnect">
						<option value=PLACEHOLDER>{PLACEHOLDER}</option>
					</select>
					<select id="connectTo" class="DEPconnect">
						<option value=PLACEHOLDER>{PLACEHOLDER}</option>
					</select>
					<button
						id="runConnect"
						class="DEPconnect"
						on:click=path_handler(&explorer, Explorer::connect_nodes)
					>
						"Connect"
					</button>
				</fieldset>

				<fieldset>
					<legend>"Hamiltonian Path"</legend>
					<button
						id="drawHamPath"
						class="DEPanimateHamPath"
						on:click=handler(&explorer, Explorer::draw_ham_path)
					>
						"Draw"
					</button>
					<button
						id="animateHamPath"
						class="DEPanimateHamPath"
						on:click=path_handler(&explorer, Explorer::animate_ham_path)
					>
						"Animate"
					</button>
					<button
						id="clearHamPath"
						class="DEPanimateHamPath"
						on:click=handler(&explorer, Explorer::clear_path)
					>
						"Clear"
					</button>
					<input
						id="animateHamPathDelay"
						class="DEPanimateHamPath"
						type="number"
						min="100"
						max="2000"
						value="250"
						on:change=handler(&explorer, Explorer::validate_delay)
					/>
				</fieldset>

				<label>
					"Tooltips "
					<button id="toggleTooltips" on:click=handler(&explorer, Explorer::toggle_tooltips)>
						"Enable"
					</button>
				</label>
			</aside>

			<div class="graph-stage">
				<canvas node_ref=canvas_ref class="graph-canvas" style="display: block;" />
			</div>

			<div class="tooltip" style="display: none; position: fixed; pointer-events: none;">
				<span></span>
			</div>
		</div>
	}
}
