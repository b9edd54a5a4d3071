// File: crates/emuchart-svg/src/lib.rs
// Summary: Minimal SVG document builder. Emits elements into a String buffer;
// knows nothing about charts.

use std::fmt::Write as _;

/// Escape text content for element bodies.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a pixel coordinate with up to two decimals, trimming trailing zeros.
pub fn fmt_px(v: f64) -> String {
    let mut s = format!("{:.2}", v);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// An SVG document under construction. All drawing methods append markup;
/// `finish` closes the root element and returns the buffer.
pub struct SvgDoc {
    buf: String,
    open_groups: usize,
}

impl SvgDoc {
    pub fn new(width: f64, height: f64) -> Self {
        let mut buf = String::with_capacity(4096);
        let _ = write!(
            buf,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_px(width),
            h = fmt_px(height),
        );
        Self { buf, open_groups: 0 }
    }

    /// Open a `<g>` with raw attributes (caller escapes values as needed).
    pub fn open_group(&mut self, attrs: &str) {
        if attrs.is_empty() {
            self.buf.push_str("<g>");
        } else {
            let _ = write!(self.buf, "<g {}>", attrs);
        }
        self.open_groups += 1;
    }

    pub fn close_group(&mut self) {
        debug_assert!(self.open_groups > 0, "unbalanced close_group");
        if self.open_groups > 0 {
            self.buf.push_str("</g>");
            self.open_groups -= 1;
        }
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, attrs: &str) {
        let _ = write!(
            self.buf,
            r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
            fmt_px(x),
            fmt_px(y),
            fmt_px(w.max(0.0)),
            fmt_px(h.max(0.0)),
            attrs,
        );
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, attrs: &str) {
        let _ = write!(
            self.buf,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            fmt_px(x1),
            fmt_px(y1),
            fmt_px(x2),
            fmt_px(y2),
            attrs,
        );
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, attrs: &str) {
        let _ = write!(
            self.buf,
            r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
            fmt_px(cx),
            fmt_px(cy),
            fmt_px(r.max(0.0)),
            attrs,
        );
    }

    /// Emit a `<path>` from a prebuilt `d` attribute.
    pub fn path(&mut self, d: &str, attrs: &str) {
        let _ = write!(self.buf, r#"<path d="{}" {}/>"#, d, attrs);
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, attrs: &str) {
        let _ = write!(
            self.buf,
            r#"<text x="{}" y="{}" {}>{}</text>"#,
            fmt_px(x),
            fmt_px(y),
            attrs,
            escape_text(content),
        );
    }

    /// Close any groups left open, then the root element, and return the markup.
    pub fn finish(mut self) -> String {
        while self.open_groups > 0 {
            self.buf.push_str("</g>");
            self.open_groups -= 1;
        }
        self.buf.push_str("</svg>");
        self.buf
    }
}

/// Build a polyline `d` attribute ("M x y L x y ...") from pixel points.
pub fn polyline_d(points: &[(f64, f64)]) -> String {
    let mut d = String::with_capacity(points.len() * 12);
    for (i, &(x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{}{} {}", cmd, fmt_px(x), fmt_px(y));
    }
    d
}
