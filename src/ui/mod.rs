pub mod status;

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{self as term, Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use ratatui::prelude::*;

/// Message tone for one-line feedback.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Tone {
    Prompt,
    Info,
    Warning,
}

impl Tone {
    fn color(&self) -> Color {
        match self {
            Tone::Prompt => Color::Rgb(80, 200, 255),
            Tone::Info => Color::Rgb(80, 220, 80),
            Tone::Warning => Color::Rgb(255, 160, 60),
        }
    }
}

pub fn message(text: impl Into<String>, tone: Tone) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(tone.color())))
}

fn term_color(color: Color) -> Option<term::Color> {
    match color {
        Color::Rgb(r, g, b) => Some(term::Color::Rgb { r, g, b }),
        Color::White => Some(term::Color::White),
        Color::Gray => Some(term::Color::Grey),
        _ => None,
    }
}

fn write_spans<W: Write>(out: &mut W, line: &Line, color: bool) -> io::Result<()> {
    for span in &line.spans {
        if !color {
            out.write_all(span.content.as_bytes())?;
            continue;
        }
        if let Some(fg) = span.style.fg.and_then(term_color) {
            queue!(out, SetForegroundColor(fg))?;
        }
        if span.style.add_modifier.contains(Modifier::BOLD) {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        queue!(out, Print(&span.content), SetAttribute(Attribute::Reset), ResetColor)?;
    }
    Ok(())
}

pub fn write_lines<W: Write>(out: &mut W, lines: &[Line], color: bool) -> io::Result<()> {
    for line in lines {
        write_spans(out, line, color)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Write a prompt without a trailing newline.
pub fn prompt<W: Write>(out: &mut W, text: &str, color: bool) -> io::Result<()> {
    write_spans(out, &message(text, Tone::Prompt), color)?;
    out.flush()
}

#[cfg(test)]
pub fn plain_text(lines: &[Line]) -> String {
    let mut text = String::new();
    for line in lines {
        for span in &line.spans {
            text.push_str(&span.content);
        }
        text.push('\n');
    }
    text
}
