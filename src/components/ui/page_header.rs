use crate::libs::routes::PageMeta;
use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub struct PageHeader {
    pub title: String,
    pub subtitle: Option<String>,
}

impl PageHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), subtitle: None }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

impl From<&PageMeta> for PageHeader {
    fn from(meta: &PageMeta) -> Self {
        PageHeader::new(meta.title.clone()).with_subtitle(meta.description.clone())
    }
}

impl fmt::Display for PageHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        if let Some(subtitle) = &self.subtitle {
            writeln!(f, "{}", subtitle)?;
        }
        Ok(())
    }
}
