//! Converts server-supplied markup into plain terminal lines.
//!
//! Answers arrive as HTML (rendered from markdown by the server) or as
//! plain text. They are parsed the way a browser parses them and the
//! resulting tree is walked with a small allowlist: block elements shape
//! the lines, script and style bodies are dropped, every other element
//! contributes only its text. Text is cleaned with [`terminal_safe`]
//! before it becomes a line.

use scraper::{ElementRef, Html};

use crate::ui::terminal_safe;

/// One rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Heading(String),
    Bullet(String),
    Text(String),
    Blank,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Kind {
    Heading,
    Bullet,
    Text,
}

struct LineBuilder {
    lines: Vec<Line>,
    current: String,
    kind: Kind,
}

impl LineBuilder {
    const fn new() -> Self {
        Self {
            lines: Vec::new(),
            current: String::new(),
            kind: Kind::Text,
        }
    }

    fn push_text(&mut self, text: &str) {
        self.current.push_str(text);
    }

    fn flush(&mut self) {
        let text = collapse_whitespace(&terminal_safe(&self.current));
        if !text.is_empty() {
            self.lines.push(match self.kind {
                Kind::Heading => Line::Heading(text),
                Kind::Bullet => Line::Bullet(text),
                Kind::Text => Line::Text(text),
            });
        }
        self.current.clear();
        self.kind = Kind::Text;
    }

    fn start(&mut self, kind: Kind) {
        self.flush();
        self.kind = kind;
    }

    fn paragraph_break(&mut self) {
        self.flush();
        if !matches!(self.lines.last(), None | Some(Line::Blank)) {
            self.lines.push(Line::Blank);
        }
    }

    fn finish(mut self) -> Vec<Line> {
        self.flush();
        while self.lines.last() == Some(&Line::Blank) {
            self.lines.pop();
        }
        self.lines
    }
}

/// Renders server content into terminal lines.
pub fn render(content: &str) -> Vec<Line> {
    let fragment = Html::parse_fragment(content);
    let root = fragment.root_element();

    if !root.children().any(|node| node.value().is_element()) {
        return render_plain(&root.text().collect::<String>());
    }

    let mut builder = LineBuilder::new();
    walk(root, &mut builder);
    builder.finish()
}

fn walk(element: ElementRef<'_>, builder: &mut LineBuilder) {
    for node in element.children() {
        if let Some(text) = node.value().as_text() {
            builder.push_text(text);
        } else if let Some(child) = ElementRef::wrap(node) {
            visit(child, builder);
        }
    }
}

fn visit(element: ElementRef<'_>, builder: &mut LineBuilder) {
    let name = element.value().name();
    match name {
        "script" | "style" | "template" | "noscript" | "iframe" | "object" | "head" | "title" => {
            return;
        }
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => builder.start(Kind::Heading),
        "li" => builder.start(Kind::Bullet),
        "tr" | "div" | "br" => builder.flush(),
        "p" | "ul" | "ol" | "table" | "blockquote" | "pre" => builder.paragraph_break(),
        _ => {}
    }

    walk(element, builder);

    match name {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "p" | "ul" | "ol" | "table" | "blockquote"
        | "pre" => builder.paragraph_break(),
        "li" | "tr" | "div" => builder.flush(),
        "td" | "th" => builder.push_text(" "),
        _ => {}
    }
}

fn render_plain(content: &str) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    for raw in content.lines() {
        let text = terminal_safe(raw).trim_end().to_string();
        if text.trim().is_empty() {
            if !matches!(lines.last(), None | Some(Line::Blank)) {
                lines.push(Line::Blank);
            }
        } else {
            lines.push(Line::Text(text));
        }
    }
    while lines.last() == Some(&Line::Blank) {
        lines.pop();
    }
    lines
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
