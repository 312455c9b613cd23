//! cohort-graph: interactive explorer for student and group graphs.
//!
//! This crate provides a WASM-based canvas component that lays out either
//! dataset, connects chosen nodes, animates a precomputed Hamiltonian path and
//! highlights first-degree neighborhoods.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;

pub use components::graph_explorer::{
	DataMode, GraphAlgo, GraphCatalog, GraphExplorer, UiController, load_catalog,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("cohort-graph: logging initialized");
}

/// Main application component.
/// Loads the catalog from the page (or the bundled one) and mounts the explorer.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let catalog = load_catalog();
	let catalog_signal = Signal::derive(move || catalog.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Cohort Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<GraphExplorer catalog=catalog_signal />
		</div>
	}
}
