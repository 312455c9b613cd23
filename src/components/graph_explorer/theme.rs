//! Visual theming for the explorer canvas and tooltip.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// CSS `hsl()` string. Hue is wrapped into 0..360.
pub fn hsl_css(h: f64, s: u8, l: u8) -> String {
	format!("hsl({}, {}%, {}%)", h.rem_euclid(360.0), s, l)
}

/// CSS `hsla()` string, for dimmed node fills.
pub fn hsla_css(h: f64, s: u8, l: u8, a: f64) -> String {
	format!("hsla({}, {}%, {}%, {})", h.rem_euclid(360.0), s, l, a)
}

/// Saturation/lightness pairs applied to a node's hue.
#[derive(Clone, Debug)]
pub struct HueStyle {
	pub saturation: u8,
	pub lightness: u8,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub background: Color,
	pub edge: Color,
	pub path: Color,
	pub label: Color,
	pub ring: Color,
	pub node_fill: HueStyle,
	pub tooltip_border: HueStyle,
}

impl Theme {
	pub fn node_fill(&self, hue: f64, alpha: f64) -> String {
		hsla_css(hue, self.node_fill.saturation, self.node_fill.lightness, alpha)
	}

	pub fn tooltip_border(&self, hue: f64) -> String {
		hsl_css(
			hue,
			self.tooltip_border.saturation,
			self.tooltip_border.lightness,
		)
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::rgb(22, 27, 34),
			edge: Color::rgba(140, 160, 180, 0.55),
			path: Color::rgb(255, 196, 87),
			label: Color::rgba(230, 235, 240, 0.9),
			ring: Color::rgb(255, 255, 255),
			node_fill: HueStyle {
				saturation: 60,
				lightness: 55,
			},
			tooltip_border: HueStyle {
				saturation: 60,
				lightness: 68,
			},
		}
	}
}
