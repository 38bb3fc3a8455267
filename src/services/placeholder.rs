pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_TEXT: &str = "The Lone Traveler";
pub const DEFAULT_BG_COLOR: &str = "3b82f6";
pub const DEFAULT_TEXT_COLOR: &str = "ffffff";

const MAX_DIMENSION: u32 = 8000;

/// Fully-resolved parameters for one placeholder image.
#[derive(Debug, Clone)]
pub struct PlaceholderSpec {
    pub width: u32,
    pub height: u32,
    pub text: String,
    pub bg_color: String,
    pub text_color: String,
}

impl Default for PlaceholderSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            text: DEFAULT_TEXT.to_string(),
            bg_color: DEFAULT_BG_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
        }
    }
}

/// Malformed or out-of-range dimensions fall back to the default instead
/// of propagating into the markup.
pub fn parse_dimension(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|v| (1..=MAX_DIMENSION).contains(v))
        .unwrap_or(default)
}

/// Colors must be plain hex digit runs (3, 4, 6 or 8 chars, no `#`);
/// anything else falls back to the default.
pub fn parse_color(raw: Option<&str>, default: &str) -> String {
    match raw {
        Some(s) if is_hex_color(s) => s.to_string(),
        _ => default.to_string(),
    }
}

fn is_hex_color(s: &str) -> bool {
    matches!(s.len(), 3 | 4 | 6 | 8) && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Render the SVG document: a filled rect with the text centered, font
/// size scaled to a tenth of the smaller dimension.
pub fn render_svg(spec: &PlaceholderSpec) -> String {
    let font_size = spec.width.min(spec.height) / 10;

    format!(
        r##"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
  <rect width="100%" height="100%" fill="#{bg_color}"/>
  <text x="50%" y="50%" font-family="Arial, sans-serif" font-size="{font_size}px" fill="#{text_color}" text-anchor="middle" dominant-baseline="middle">{text}</text>
</svg>
"##,
        width = spec.width,
        height = spec.height,
        bg_color = spec.bg_color,
        font_size = font_size,
        text_color = spec.text_color,
        text = escape_xml(&spec.text),
    )
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
