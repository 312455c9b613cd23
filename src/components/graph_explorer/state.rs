//! Runtime configuration shared by every UI handler.

/// Which of the two datasets is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DataMode {
	Students,
	#[default]
	Groups,
}

impl DataMode {
	pub fn toggled(self) -> Self {
		match self {
			DataMode::Students => DataMode::Groups,
			DataMode::Groups => DataMode::Students,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			DataMode::Students => "Students",
			DataMode::Groups => "Groups",
		}
	}
}

/// Layout strategy used when placing nodes on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GraphAlgo {
	#[default]
	Cartesian,
	Radial,
}

impl GraphAlgo {
	pub fn toggled(self) -> Self {
		match self {
			GraphAlgo::Cartesian => GraphAlgo::Radial,
			GraphAlgo::Radial => GraphAlgo::Cartesian,
		}
	}
}

/// The controller's mutable state. Lives for the whole page session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Configuration {
	pub data_mode: DataMode,
	pub graph_algo: GraphAlgo,
	/// The base graph is currently drawn.
	pub graph_enabled: bool,
	/// A path has been drawn since the last clear.
	pub path_enabled: bool,
	pub tooltips_enabled: bool,
}
