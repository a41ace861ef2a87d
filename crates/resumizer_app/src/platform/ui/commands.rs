use std::fmt;

/// Stable identifier of a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(&'static str);

impl ElementId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    FileInput,
    TextInput,
    Label,
    Link,
    Section,
    Output,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    CreateElement {
        id: ElementId,
        parent: Option<ElementId>,
        kind: ElementKind,
        caption: &'static str,
    },
    /// Plain text, shown verbatim.
    SetText { id: ElementId, text: String },
    /// Formatted content using break markers and escaped entities.
    SetMarkup { id: ElementId, markup: String },
    SetHref { id: ElementId, href: String },
    SetVisible { id: ElementId, visible: bool },
}
