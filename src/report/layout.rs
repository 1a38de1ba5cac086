//! Page model and the vertical-cursor layout engine shared by every report.
//!
//! Coordinates are points from the top-left corner. Text `y` is the
//! baseline. The cursor only moves down; a page break pushes the current
//! page and resets the cursor to the top margin.

use crate::config::ReportConfig;

/// Average Helvetica glyph width as a fraction of the font size.
const AVG_CHAR_WIDTH: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
pub const DARK_GRAY: Rgb = Rgb::new(0.3, 0.3, 0.3);
pub const LIGHT_GRAY: Rgb = Rgb::new(0.85, 0.85, 0.85);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        font: Font,
        color: Rgb,
    },
    /// Filled rectangle; `(x, y)` is the top-left corner.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        thickness: f32,
        color: Rgb,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

pub struct PageLayout<'a> {
    config: &'a ReportConfig,
    done: Vec<Page>,
    current: Page,
    cursor: f32,
}

impl<'a> PageLayout<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self {
            config,
            done: Vec::new(),
            current: Page::default(),
            cursor: config.margin,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        self.config
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Pages started so far, the current one included.
    pub fn page_count(&self) -> usize {
        self.done.len() + 1
    }

    pub fn line_height(&self, size: f32) -> f32 {
        size * self.config.line_spacing
    }

    /// Start a new page. Breaking on a page with nothing drawn only resets
    /// the cursor, so forced breaks never leave blank pages behind.
    pub fn page_break(&mut self) {
        if !self.current.is_empty() {
            self.done.push(std::mem::take(&mut self.current));
        }
        self.cursor = self.config.margin;
    }

    /// Break when a block of `height` would cross the break threshold.
    pub fn ensure_space(&mut self, height: f32) {
        if self.cursor + height > self.config.break_threshold && !self.current.is_empty() {
            self.page_break();
        }
    }

    pub fn gap(&mut self, height: f32) {
        self.cursor += height;
    }

    /// Move the cursor to an absolute position on the current page.
    pub fn set_cursor(&mut self, y: f32) {
        self.cursor = y;
    }

    pub fn draw(&mut self, op: DrawOp) {
        self.current.ops.push(op);
    }

    pub fn text_at(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, font: Font, color: Rgb) {
        self.draw(DrawOp::Text {
            text: text.into(),
            x,
            y,
            size,
            font,
            color,
        });
    }

    /// One unwrapped line at the left margin.
    pub fn text_line(&mut self, text: impl Into<String>, size: f32, font: Font) {
        let lh = self.line_height(size);
        self.ensure_space(lh);
        let (x, y) = (self.config.margin, self.cursor + size);
        self.text_at(text, x, y, size, font, BLACK);
        self.cursor += lh;
    }

    /// Height `text` occupies once wrapped to the content width minus `indent`.
    pub fn measure(&self, text: &str, size: f32, indent: f32) -> f32 {
        let lines = wrap_text(text, self.max_chars(size, indent));
        lines.len() as f32 * self.line_height(size)
    }

    /// Word-wrapped text. A paragraph that fits on one page is kept together;
    /// longer ones break line by line.
    pub fn paragraph(&mut self, text: &str, size: f32, font: Font, indent: f32) {
        let lines = wrap_text(text, self.max_chars(size, indent));
        let lh = self.line_height(size);
        let height = lines.len() as f32 * lh;
        if height <= self.config.break_threshold - self.config.margin {
            self.ensure_space(height);
        }
        let x = self.config.margin + indent;
        for line in lines {
            self.ensure_space(lh);
            let y = self.cursor + size;
            self.text_at(line, x, y, size, font, BLACK);
            self.cursor += lh;
        }
    }

    pub fn finish(mut self) -> Vec<Page> {
        self.done.push(self.current);
        self.done
    }

    fn max_chars(&self, size: f32, indent: f32) -> usize {
        let width = (self.config.content_width() - indent).max(size);
        ((width / (size * AVG_CHAR_WIDTH)) as usize).max(1)
    }
}

/// Greedy word wrap at `max_chars`. Embedded newlines start new lines and
/// words longer than a line are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max_chars) {
                if current_len > 0 && current_len + 1 + chunk.len() > max_chars {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.extend(chunk);
                current_len += chunk.len();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
