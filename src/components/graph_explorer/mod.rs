//! Student/group graph explorer.
//!
//! Renders one of two datasets on an HTML canvas with:
//! - Cartesian (grid or explicit position) and radial layouts
//! - Shortest-path connection between two chosen nodes
//! - Drawing and animating a precomputed Hamiltonian path
//! - First-degree highlighting on click and hover tooltips
//!
//! The [`UiController`] holds all UI state and talks to the page only through
//! the [`RenderSurface`] and [`Controls`] traits, so it runs without a DOM.
//!
//! # Example
//!
//! ```ignore
//! use cohort_graph::{GraphExplorer, load_catalog};
//!
//! let catalog = load_catalog();
//! view! { <GraphExplorer catalog=Signal::derive(move || catalog.clone()) /> }
//! ```

mod completion;
mod component;
pub mod config;
mod controller;
mod controls;
mod data;
mod layout;
mod pathfind;
mod render;
mod state;
mod surface;
pub mod theme;
mod types;

pub use completion::{Completion, CompletionHandle, completion};
pub use component::GraphExplorer;
pub use config::ViewConfig;
pub use controller::{PathTicket, PendingPath, UiController};
pub use controls::{ControlGroup, Controls, DomControls, NodeOption, TooltipView};
pub use data::{DataError, bundled_catalog, load_catalog, parse_catalog};
pub use layout::Layout;
pub use pathfind::shortest_path;
pub use render::CanvasSurface;
pub use state::{Configuration, DataMode, GraphAlgo};
pub use surface::{PointerPos, RenderSurface};
pub use theme::Theme;
pub use types::{Dataset, GraphCatalog, HamPaths, NodeRecord};
