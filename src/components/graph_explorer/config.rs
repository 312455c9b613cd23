//! View configuration: sizes, timings and input bounds.
//!
//! All canvas sizes are in CSS pixels. The canvas is never zoomed, so there is
//! no distinction between world and screen space here.

/// Delay bounds and default for path animations, in milliseconds.
#[derive(Clone, Debug)]
pub struct DelayConfig {
	pub min_ms: u32,
	pub max_ms: u32,
	/// Used when the input is empty, zero or not a number.
	pub default_ms: u32,
}

impl DelayConfig {
	/// Parse a delay the way the delay input is interpreted: the leading
	/// integer of the trimmed text, defaulting on zero or garbage, then
	/// clamped into bounds.
	pub fn sanitize(&self, input: &str) -> u32 {
		let value = match parse_int_prefix(input) {
			Some(v) if v != 0 => v,
			_ => self.default_ms as i64,
		};
		value.clamp(self.min_ms as i64, self.max_ms as i64) as u32
	}
}

/// Leading integer of a string: optional sign then digits, ignoring the rest.
fn parse_int_prefix(input: &str) -> Option<i64> {
	let s = input.trim_start();
	let (sign, rest) = match s.as_bytes().first() {
		Some(b'-') => (-1, &s[1..]),
		Some(b'+') => (1, &s[1..]),
		_ => (1, s),
	};
	let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
	if digits.is_empty() {
		return None;
	}
	// Saturate absurd inputs; the value is clamped afterwards anyway.
	let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
	Some(sign * magnitude)
}

/// Node and edge sizing.
#[derive(Clone, Debug)]
pub struct NodeSizing {
	pub radius: f64,
	/// Pointer lookups only match nodes whose center is this close.
	pub hit_radius: f64,
	pub ring_offset: f64,
	pub label_font: String,
	pub edge_width: f64,
	pub path_width: f64,
	/// Canvas padding kept free around the layout.
	pub padding: f64,
}

/// Timings for canvas animations.
#[derive(Clone, Debug)]
pub struct AnimationConfig {
	/// Delay between revealed nodes in an animated full-graph draw.
	pub reveal_step_ms: u32,
	/// Delay between segments when animating a connect path.
	pub connect_step_ms: u32,
}

/// Complete view configuration.
#[derive(Clone, Debug)]
pub struct ViewConfig {
	pub nodes: NodeSizing,
	pub animation: AnimationConfig,
	pub delay: DelayConfig,
	/// Option labels longer than this are cut and suffixed with "...".
	pub label_max_chars: usize,
	/// Tooltip offset from the pointer, in pixels.
	pub tooltip_offset: (i32, i32),
	/// Alpha applied to nodes outside a first-degree highlight.
	pub dim_alpha: f64,
}

impl Default for ViewConfig {
	fn default() -> Self {
		Self {
			nodes: NodeSizing {
				radius: 9.0,
				hit_radius: 16.0,
				ring_offset: 4.0,
				label_font: "12px sans-serif".into(),
				edge_width: 1.5,
				path_width: 4.0,
				padding: 48.0,
			},
			animation: AnimationConfig {
				reveal_step_ms: 15,
				connect_step_ms: 200,
			},
			delay: DelayConfig {
				min_ms: 100,
				max_ms: 2000,
				default_ms: 250,
			},
			label_max_chars: 19,
			tooltip_offset: (7, 5),
			dim_alpha: 0.15,
		}
	}
}

/// Cut `text` to `max` characters, appending "..." when anything was removed.
pub fn truncate_label(text: &str, max: usize) -> String {
	if text.chars().count() > max {
		let mut cut: String = text.chars().take(max).collect();
		cut.push_str("...");
		cut
	} else {
		text.to_string()
	}
}
