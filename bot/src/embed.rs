//! Chat message model and its plain-text rendering.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Purple,
    Red,
}

impl Color {
    pub fn hex(&self) -> u32 {
        match self {
            Color::Purple => 0x9b59b6,
            Color::Red => 0xe74c3c,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A rich chat message: title, optional description, fields and footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub description: Option<String>,
    pub color: Color,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
}

impl Embed {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            color: Color::Purple,
            fields: Vec::new(),
            footer: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
    }
}

impl fmt::Display for Embed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[#{:06x}] {}", self.color.hex(), self.title)?;
        if let Some(description) = &self.description {
            writeln!(f, "{}", description)?;
        }
        for field in &self.fields {
            writeln!(f)?;
            if field.inline {
                writeln!(f, "{}: {}", field.name, field.value)?;
                continue;
            }
            if !field.name.is_empty() {
                writeln!(f, "{}", field.name)?;
            }
            for line in field.value.lines() {
                writeln!(f, "  {}", line)?;
            }
        }
        if let Some(footer) = &self.footer {
            writeln!(f)?;
            writeln!(f, "{}", footer)?;
        }
        Ok(())
    }
}
