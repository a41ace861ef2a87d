//! Line-oriented page: keeps element state and prints what changed.

use std::io::{self, Write};

use resumizer_core::{EnhancedResume, BREAK_MARKER};

use super::commands::{ElementId, ElementKind, UiCommand};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Text(String),
    Markup(String),
}

#[derive(Debug)]
struct Element {
    id: ElementId,
    parent: Option<ElementId>,
    kind: ElementKind,
    caption: &'static str,
    content: Content,
    href: Option<String>,
    visible: bool,
}

pub struct ConsolePage<W: Write> {
    out: W,
    elements: Vec<Element>,
    changed: Vec<ElementId>,
}

impl<W: Write> ConsolePage<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            elements: Vec::new(),
            changed: Vec::new(),
        }
    }

    pub fn apply(&mut self, commands: Vec<UiCommand>) {
        for command in commands {
            match command {
                UiCommand::CreateElement {
                    id,
                    parent,
                    kind,
                    caption,
                } => {
                    self.elements.retain(|element| element.id != id);
                    self.elements.push(Element {
                        id,
                        parent,
                        kind,
                        caption,
                        content: Content::Text(String::new()),
                        href: None,
                        visible: true,
                    });
                }
                UiCommand::SetText { id, text } => {
                    self.update(id, |element| {
                        replace(&mut element.content, Content::Text(text))
                    });
                }
                UiCommand::SetMarkup { id, markup } => {
                    self.update(id, |element| {
                        replace(&mut element.content, Content::Markup(markup))
                    });
                }
                UiCommand::SetHref { id, href } => {
                    self.update(id, |element| replace(&mut element.href, Some(href)));
                }
                UiCommand::SetVisible { id, visible } => {
                    self.update(id, |element| replace(&mut element.visible, visible));
                }
            }
        }
    }

    pub fn clear_changes(&mut self) {
        self.changed.clear();
    }

    /// Prints every changed element that is currently on screen, in page order.
    /// Changes under a hidden parent stay pending until the parent is shown.
    pub fn flush_changes(&mut self) -> io::Result<()> {
        let changed = std::mem::take(&mut self.changed);
        for element in &self.elements {
            if !changed.contains(&element.id) {
                continue;
            }
            if !self.parent_visible(element) {
                self.changed.push(element.id);
                continue;
            }
            write_element(&mut self.out, element)?;
        }
        self.out.flush()
    }

    pub fn alert(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "!! {message}")?;
        self.out.flush()
    }

    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    pub fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.out, "Commands:")?;
        writeln!(self.out, "  file <path>      select the resume PDF (no path clears)")?;
        writeln!(self.out, "  upload           enhance the selected resume")?;
        writeln!(self.out, "  download         save the enhanced resume PDF")?;
        writeln!(self.out, "  job <text>       set the job description")?;
        writeln!(self.out, "  job+ <text>      append a line to the job description")?;
        writeln!(self.out, "  analyze          compare the enhanced resume with the job")?;
        writeln!(self.out, "  show             print the enhanced resume text")?;
        writeln!(self.out, "  help             print this list")?;
        writeln!(self.out, "  quit             leave")?;
        self.out.flush()
    }

    pub fn print_resume(&mut self, resume: &EnhancedResume) -> io::Result<()> {
        writeln!(self.out, "----- enhanced resume -----")?;
        writeln!(self.out, "{}", resume.text)?;
        if let Some(original) = &resume.original_text {
            writeln!(self.out, "----- original text -----")?;
            writeln!(self.out, "{original}")?;
        }
        writeln!(self.out, "---------------------------")?;
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn update(&mut self, id: ElementId, apply: impl FnOnce(&mut Element) -> bool) {
        let Some(element) = self.elements.iter_mut().find(|element| element.id == id) else {
            return;
        };
        if apply(element) && !self.changed.contains(&id) {
            self.changed.push(id);
        }
    }

    fn parent_visible(&self, element: &Element) -> bool {
        match element.parent {
            None => true,
            Some(parent) => self
                .elements
                .iter()
                .find(|candidate| candidate.id == parent)
                .is_some_and(|parent| parent.visible && self.parent_visible(parent)),
        }
    }
}

/// Stores `value` and reports whether it differed from the old one.
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

fn write_element(out: &mut impl Write, element: &Element) -> io::Result<()> {
    let prefix = format!("[{}] {}", element.id, element.caption);
    match element.kind {
        ElementKind::Section => {
            let state = if element.visible { "shown" } else { "hidden" };
            writeln!(out, "{prefix}: {state}")
        }
        ElementKind::Link => match (&element.href, element.visible) {
            (Some(href), true) => writeln!(out, "{prefix}: {href} (type `download` to save)"),
            _ => writeln!(out, "{prefix}: hidden"),
        },
        ElementKind::FileInput
        | ElementKind::TextInput
        | ElementKind::Label
        | ElementKind::Output => {
            if !element.visible {
                return writeln!(out, "{prefix}: hidden");
            }
            match &element.content {
                Content::Text(text) if text.is_empty() => writeln!(out, "{prefix}: (empty)"),
                Content::Text(text) => writeln!(out, "{prefix}: {text}"),
                Content::Markup(markup) => {
                    writeln!(out, "{prefix}:")?;
                    for line in markup_to_lines(markup) {
                        writeln!(out, "    {line}")?;
                    }
                    Ok(())
                }
            }
        }
    }
}

/// One output line per break marker, with entities turned back into characters.
pub fn markup_to_lines(markup: &str) -> Vec<String> {
    markup
        .split(BREAK_MARKER)
        .map(|line| {
            line.replace("&lt;", "<")
                .replace("&gt;", ">")
                .replace("&quot;", "\"")
                .replace("&#39;", "'")
                .replace("&amp;", "&")
        })
        .collect()
}
