//! SVG rendering of badges.
//!
//! Two layouts are available. [`Style::Fixed`] sizes both boxes from the
//! badge's character based widths and uses a monospace font so the estimate
//! holds. [`Style::Dynamic`] measures text against Helvetica advance widths,
//! which gives tighter boxes for proportional text.

use crate::badge::Badge;
use std::borrow::Cow;
use std::fmt;

const HEIGHT: usize = 20;
const TITLE_BACKGROUND: &str = "#555";
const TITLE_TEXT: &str = "#fff";
const SHADOW_COLOR: &str = "#010101";
const SHADOW_OPACITY: f32 = 0.3;
const SHADOW_OFFSET: usize = 1;
const TEXT_Y: usize = 14;

const FIXED_PADDING: usize = 6;
const FIXED_FONT_FAMILY: &str = "DejaVu Sans Mono,Menlo,Consolas,monospace";
const FIXED_FONT_SIZE: usize = 10;

const DYNAMIC_PADDING: usize = 8;
const DYNAMIC_FONT_FAMILY: &str = "Helvetica,Arial,sans-serif";
const DYNAMIC_FONT_SIZE: usize = 11;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Fixed,
    Dynamic,
}

impl Style {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Style::Fixed => "fixed",
            Style::Dynamic => "dynamic",
        }
    }
}

pub fn render(badge: &Badge, style: Style) -> String {
    match style {
        Style::Fixed => render_fixed(badge),
        Style::Dynamic => render_dynamic(badge),
    }
}

fn render_fixed(badge: &Badge) -> String {
    let title_width = badge.title_width() + 2 * FIXED_PADDING;
    let value_width = badge.value_width() + 2 * FIXED_PADDING;

    let layout = Layout {
        title_width,
        value_width,
        padding: FIXED_PADDING,
        font_family: FIXED_FONT_FAMILY,
        font_size: FIXED_FONT_SIZE,
        shadow: false,
    };
    Svg { layout, badge }.to_string()
}

fn render_dynamic(badge: &Badge) -> String {
    let title_width = text_width(badge.title()).round() as usize + 2 * DYNAMIC_PADDING;
    let value_width = text_width(badge.value()).round() as usize + 2 * DYNAMIC_PADDING;

    let layout = Layout {
        title_width,
        value_width,
        padding: DYNAMIC_PADDING,
        font_family: DYNAMIC_FONT_FAMILY,
        font_size: DYNAMIC_FONT_SIZE,
        shadow: true,
    };
    Svg { layout, badge }.to_string()
}

struct Layout {
    title_width: usize,
    value_width: usize,
    padding: usize,
    font_family: &'static str,
    font_size: usize,
    shadow: bool,
}

struct Svg<'a> {
    layout: Layout,
    badge: &'a Badge,
}

impl fmt::Display for Svg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Svg { layout, badge } = self;
        let width = layout.title_width + layout.value_width;
        let title = escape_xml(badge.title());
        let value = escape_xml(badge.value());
        let label = escape_xml(&format!("{}: {}", badge.title(), badge.value())).into_owned();

        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            f,
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" "#,
                r#"width="{}" height="{}" role="img" aria-label="{}">"#,
            ),
            width, HEIGHT, label,
        )?;
        writeln!(f, "  <title>{label}</title>")?;
        writeln!(f, "  <g>")?;
        writeln!(
            f,
            r#"    <rect width="{}" height="{HEIGHT}" fill="{TITLE_BACKGROUND}"/>"#,
            layout.title_width,
        )?;
        writeln!(
            f,
            r#"    <rect x="{}" width="{}" height="{HEIGHT}" fill="{}"/>"#,
            layout.title_width,
            layout.value_width,
            badge.background_color_code(),
        )?;
        writeln!(f, "  </g>")?;
        writeln!(
            f,
            r#"  <g font-family="{}" font-size="{}">"#,
            layout.font_family, layout.font_size,
        )?;

        let value_x = layout.title_width + layout.padding;
        if layout.shadow {
            write_shadow(f, layout.padding, &title)?;
        }
        writeln!(
            f,
            r#"    <text x="{}" y="{TEXT_Y}" fill="{TITLE_TEXT}">{title}</text>"#,
            layout.padding,
        )?;
        if layout.shadow {
            write_shadow(f, value_x, &value)?;
        }
        writeln!(
            f,
            r#"    <text x="{value_x}" y="{TEXT_Y}" fill="{}">{value}</text>"#,
            badge.text_color_code(),
        )?;

        writeln!(f, "  </g>")?;
        writeln!(f, "</svg>")
    }
}

fn write_shadow(f: &mut fmt::Formatter<'_>, x: usize, text: &str) -> fmt::Result {
    writeln!(
        f,
        r#"    <text x="{}" y="{}" fill="{}" fill-opacity="{}">{}</text>"#,
        x + SHADOW_OFFSET,
        TEXT_Y + SHADOW_OFFSET,
        SHADOW_COLOR,
        SHADOW_OPACITY,
        text,
    )
}

fn escape_xml(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Helvetica advance widths for printable ASCII in 1/1000 em, from the
/// standard Adobe font metrics.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' to '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0' to '9'
    278, 278, 584, 584, 584, 556, 1015, // ':' to '@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A' to 'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N' to 'Z'
    278, 278, 278, 469, 556, 333, // '[' to '`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a' to 'm'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n' to 'z'
    334, 260, 334, 584, // '{' to '~'
];
const HELVETICA_DEFAULT_WIDTH: u16 = 556;

/// Estimated rendered width in pixels of `text` at the dynamic font size.
fn text_width(text: &str) -> f64 {
    let units: u32 = text
        .chars()
        .map(|c| {
            let code = c as u32;
            if (0x20..0x7F).contains(&code) {
                HELVETICA_WIDTHS[(code - 0x20) as usize] as u32
            } else {
                HELVETICA_DEFAULT_WIDTH as u32
            }
        })
        .sum();

    units as f64 * DYNAMIC_FONT_SIZE as f64 / 1000.0
}
