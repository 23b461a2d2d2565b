//! Quote layout and rendering
//!
//! Two layouts are supported. The framed layout draws each quote inside a
//! rounded box, with the portrait beside the first quote. The plain layout
//! prints wrapped text and an attribution line and nothing else.
//!
//! Layout is computed on raw text first and colors are applied per segment
//! afterwards, so column arithmetic never sees escape sequences.

use crate::portrait;
use crate::quote::Quote;
use crate::{Error, Result};
use crossterm::style::Stylize;
use std::iter;
use unicode_width::UnicodeWidthStr;

/// Smallest wrap width accepted from callers
pub const MIN_WIDTH: usize = 20;
/// Wrap width used next to the portrait
pub const FRAMED_WIDTH: usize = 40;
/// Wrap width used for plain output
pub const PLAIN_WIDTH: usize = 70;

const GUTTER: usize = 3;

/// Options controlling a single render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw the framed layout with the portrait
    pub show_ascii: bool,
    /// Emit ANSI colors
    pub color: bool,
    /// Override for the wrap width of either layout
    pub width: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_ascii: true,
            color: false,
            width: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Role {
    Frame,
    Portrait,
    Text,
    Author,
    Index,
}

/// Wrapped quote text and attribution for one framed card
#[derive(Debug)]
struct TextBlock {
    rows: Vec<(Role, String)>,
    width: usize,
}

/// Renders quotes into a single output string
#[derive(Debug, Clone)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer, rejecting wrap widths below [`MIN_WIDTH`]
    pub fn new(options: RenderOptions) -> Result<Self> {
        if let Some(width) = options.width
            && width < MIN_WIDTH
        {
            return Err(Error::invalid_width(width, MIN_WIDTH));
        }
        Ok(Self { options })
    }

    /// Render every quote into one string ending in a newline.
    ///
    /// The result depends only on the options and the quotes, so identical
    /// inputs always produce identical bytes.
    #[must_use]
    pub fn render(&self, quotes: &[Quote]) -> String {
        let mut out = String::from("\n");

        if self.options.show_ascii {
            let blocks: Vec<TextBlock> = quotes.iter().map(|q| self.text_block(q)).collect();
            // All cards share the widest card's inner width
            let inner = blocks
                .iter()
                .enumerate()
                .map(|(i, block)| block.width + if i == 0 { portrait_column() } else { 0 })
                .max()
                .unwrap_or(0);
            for (i, block) in blocks.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                self.framed_card(block, i == 0, inner, &mut out);
            }
            out.push('\n');
        } else {
            let numbered = quotes.len() > 1;
            for (i, quote) in quotes.iter().enumerate() {
                let label = numbered.then(|| format!("[{}] ", i + 1));
                self.plain_block(quote, label.as_deref(), &mut out);
            }
        }

        tracing::debug!(
            quotes = quotes.len(),
            show_ascii = self.options.show_ascii,
            color = self.options.color,
            bytes = out.len(),
            "Rendered output"
        );

        out
    }

    fn wrap_width(&self) -> usize {
        self.options.width.unwrap_or(if self.options.show_ascii {
            FRAMED_WIDTH
        } else {
            PLAIN_WIDTH
        })
    }

    fn text_block(&self, quote: &Quote) -> TextBlock {
        let mut text_lines = wrap_text(&quote.text, self.wrap_width());
        if let Some(first) = text_lines.first_mut() {
            first.insert(0, '"');
        }
        if let Some(last) = text_lines.last_mut() {
            last.push('"');
        }

        let attribution = attribution(quote);
        let width = text_lines
            .iter()
            .map(|line| line.width())
            .chain(iter::once(attribution.width()))
            .max()
            .unwrap_or(0);

        let mut rows: Vec<(Role, String)> =
            text_lines.into_iter().map(|line| (Role::Text, line)).collect();
        rows.push((Role::Text, String::new()));
        rows.push((Role::Author, attribution));

        TextBlock { rows, width }
    }

    fn framed_card(&self, block: &TextBlock, with_portrait: bool, inner: usize, out: &mut String) {
        let art: &[&str] = if with_portrait { portrait::lines() } else { &[] };
        let left_width = if with_portrait { portrait_column() } else { 0 };
        let text_width = inner.saturating_sub(left_width);
        let rows = art.len().max(block.rows.len());
        let offset = (rows - block.rows.len()) / 2;

        self.border(out, '╭', '╮', inner);
        for row in 0..rows {
            self.paint_into(out, Role::Frame, "│ ");

            if with_portrait {
                let line = art.get(row).copied().unwrap_or("");
                self.paint_into(out, Role::Portrait, line);
                out.push_str(&padding(line, left_width));
            }

            match row.checked_sub(offset).and_then(|i| block.rows.get(i)) {
                Some((Role::Author, text)) => {
                    out.push_str(&padding(text, text_width));
                    self.paint_into(out, Role::Author, text);
                }
                Some((role, text)) => {
                    self.paint_into(out, *role, text);
                    out.push_str(&padding(text, text_width));
                }
                None => out.push_str(&" ".repeat(text_width)),
            }

            self.paint_into(out, Role::Frame, " │");
            out.push('\n');
        }
        self.border(out, '╰', '╯', inner);
    }

    fn plain_block(&self, quote: &Quote, label: Option<&str>, out: &mut String) {
        let indent = " ".repeat(label.map_or(0, UnicodeWidthStr::width));
        let lines = wrap_text(&format!("\"{}\"", quote.text), self.wrap_width());

        for (i, line) in lines.iter().enumerate() {
            match label {
                Some(label) if i == 0 => self.paint_into(out, Role::Index, label),
                _ => out.push_str(&indent),
            }
            self.paint_into(out, Role::Text, line);
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&indent);
        self.paint_into(out, Role::Author, &attribution(quote));
        out.push_str("\n\n");
    }

    fn border(&self, out: &mut String, left: char, right: char, inner: usize) {
        let line: String = iter::once(left)
            .chain(iter::repeat_n('─', inner + 2))
            .chain(iter::once(right))
            .collect();
        self.paint_into(out, Role::Frame, &line);
        out.push('\n');
    }

    fn paint_into(&self, out: &mut String, role: Role, text: &str) {
        if !self.options.color || text.is_empty() {
            out.push_str(text);
            return;
        }
        let styled = match role {
            Role::Frame | Role::Portrait => text.cyan().to_string(),
            Role::Text => text.yellow().to_string(),
            Role::Author | Role::Index => text.green().bold().to_string(),
        };
        out.push_str(&styled);
    }
}

/// Render a single quote without colors.
///
/// Framed when `show_ascii` is true, plain otherwise.
#[must_use]
pub fn render(quote: &Quote, show_ascii: bool) -> String {
    let options = RenderOptions {
        show_ascii,
        ..RenderOptions::default()
    };
    Renderer { options }.render(std::slice::from_ref(quote))
}

/// Greedy word wrap measured in terminal columns.
///
/// Words are never split: a word wider than `width` sits alone on its line.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// True for characters the framed layout draws with: box drawing and block elements
#[must_use]
pub fn is_framing_char(c: char) -> bool {
    ('\u{2500}'..='\u{259F}').contains(&c)
}

fn attribution(quote: &Quote) -> String {
    format!("- {}", quote.author)
}

fn portrait_column() -> usize {
    portrait::width() + GUTTER
}

fn padding(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()))
}
