use crate::{Error, Project, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A way of finding an element on a rendered page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "lowercase")]
pub enum Locator {
    /// CSS selector, including attribute flags such as `[placeholder*="name" i]`
    Css { selector: String },
    /// First `tag` element whose visible text contains `text`, case-insensitive
    Text { tag: String, text: String },
}

impl Locator {
    pub fn css(selector: impl Into<String>) -> Self {
        Locator::Css {
            selector: selector.into(),
        }
    }

    pub fn text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Locator::Text {
            tag: tag.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Css { selector } => write!(f, "css={}", selector),
            Locator::Text { tag, text } => write!(f, "{}:has-text(\"{}\")", tag, text),
        }
    }
}

/// Logical form field on a directory's submission page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Description,
    Url,
    Demo,
    Tags,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Url => "url",
            Field::Demo => "demo",
            Field::Tags => "tags",
        }
    }

    /// Value to type into this field, or `None` when the project has nothing for it
    pub fn value(&self, project: &Project) -> Option<String> {
        match self {
            Field::Name => Some(project.name.clone()),
            Field::Description => Some(project.description.clone()),
            Field::Url => Some(project.url.clone()),
            Field::Demo => project.demo.clone(),
            Field::Tags => Some(project.tags_joined()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alternative locators for one field, tried in order; first match wins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub field: Field,
    pub locators: Vec<Locator>,
}

impl FieldRule {
    pub fn new(field: Field, locators: Vec<Locator>) -> Self {
        Self { field, locators }
    }
}

/// Everything needed to fill one directory's form, as data
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormPlan {
    /// Any match means the form sits behind a login wall
    #[serde(default)]
    pub login_wall: Vec<Locator>,
    pub fields: Vec<FieldRule>,
}

impl FormPlan {
    pub fn new(login_wall: Vec<Locator>, fields: Vec<FieldRule>) -> Self {
        Self { login_wall, fields }
    }

    /// Every rule needs a locator, and a field may appear only once
    pub fn validate(&self, owner: &str) -> Result<()> {
        let mut seen = HashSet::new();
        for rule in &self.fields {
            if rule.locators.is_empty() {
                return Err(Error::InvalidEntry {
                    key: owner.to_string(),
                    reason: format!("field '{}' has no locators", rule.field),
                });
            }
            if !seen.insert(rule.field) {
                return Err(Error::InvalidEntry {
                    key: owner.to_string(),
                    reason: format!("field '{}' listed more than once", rule.field),
                });
            }
        }
        Ok(())
    }

    /// Rules that apply to this project, paired with the value to fill
    pub fn fills_for<'a>(&'a self, project: &Project) -> Vec<(&'a FieldRule, String)> {
        self.fields
            .iter()
            .filter_map(|rule| rule.field.value(project).map(|value| (rule, value)))
            .collect()
    }
}
