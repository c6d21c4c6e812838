//! Inline markup → ratatui `Text` renderer.
//!
//! The tutor service emits a small fixed markup dialect, not full
//! Markdown: `**bold**`, `*italic*`, `` `code` ``, and literal newlines.
//! Rendering applies the same ordered chain the service's own clients
//! use — newlines split lines first, then bold, then italic, then code —
//! so `**` is always consumed before `*`. Delimiters never span lines and
//! unmatched delimiters stay literal.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Parse `content` into styled `Text`, with `base` applied to plain runs.
///
/// Returns owned text (`'static`) so callers aren't constrained by input
/// lifetime.
pub fn render(content: &str, base: Style) -> Text<'static> {
    let lines: Vec<Line<'static>> = content
        .split('\n')
        .map(|line| Line::from(render_line(line, base)))
        .collect();
    Text::from(lines)
}

/// A run of text plus how far through the chain it has been classified.
#[derive(Debug, Clone, PartialEq)]
enum Chunk {
    /// Still eligible for later passes.
    Raw(String),
    /// Claimed by an earlier pass; later delimiters inside are literal.
    Styled(String, Kind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Bold,
    Italic,
    Code,
}

fn render_line(line: &str, base: Style) -> Vec<Span<'static>> {
    let mut chunks = vec![Chunk::Raw(line.to_string())];
    // Order matters: "**" must be consumed before "*" sees the text.
    chunks = apply_pass(chunks, "**", Kind::Bold);
    chunks = apply_pass(chunks, "*", Kind::Italic);
    chunks = apply_pass(chunks, "`", Kind::Code);

    chunks
        .into_iter()
        .filter(|c| !matches!(c, Chunk::Raw(s) if s.is_empty()))
        .map(|chunk| match chunk {
            Chunk::Raw(text) => Span::styled(text, base),
            Chunk::Styled(text, kind) => Span::styled(text, style_for(kind, base)),
        })
        .collect()
}

/// Split every `Raw` chunk on non-greedy `delim`…`delim` pairs, marking
/// the enclosed text with `kind`. Text with no closing delimiter is left
/// as-is.
fn apply_pass(chunks: Vec<Chunk>, delim: &str, kind: Kind) -> Vec<Chunk> {
    let mut out = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        match chunk {
            Chunk::Styled(..) => out.push(chunk),
            Chunk::Raw(text) => split_raw(&text, delim, kind, &mut out),
        }
    }
    out
}

fn split_raw(text: &str, delim: &str, kind: Kind, out: &mut Vec<Chunk>) {
    let mut rest = text;
    loop {
        let Some(open) = rest.find(delim) else { break };
        let after_open = &rest[open + delim.len()..];
        let Some(close) = after_open.find(delim) else { break };

        if open > 0 {
            out.push(Chunk::Raw(rest[..open].to_string()));
        }
        out.push(Chunk::Styled(after_open[..close].to_string(), kind));
        rest = &after_open[close + delim.len()..];
    }
    if !rest.is_empty() {
        out.push(Chunk::Raw(rest.to_string()));
    }
}

fn style_for(kind: Kind, base: Style) -> Style {
    match kind {
        Kind::Bold => base.add_modifier(Modifier::BOLD),
        Kind::Italic => base.add_modifier(Modifier::ITALIC),
        Kind::Code => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}
