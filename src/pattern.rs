//! Block kinds and their compiled patterns.

use std::fmt;

use regex::Regex;

use crate::constants::{STYLES_EXTENSION, STYLES_PATTERN, TEMPLATE_EXTENSION, TEMPLATE_PATTERN};
use crate::error::ExtractResult;

/// The two inline blocks a component may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Template,
    Styles,
}

impl BlockKind {
    /// Processing order: template first, then styles.
    pub const ALL: [BlockKind; 2] = [BlockKind::Template, BlockKind::Styles];

    pub fn pattern(&self) -> &'static str {
        match self {
            BlockKind::Template => TEMPLATE_PATTERN,
            BlockKind::Styles => STYLES_PATTERN,
        }
    }

    /// Extension of the sibling file this block is extracted into.
    pub fn extension(&self) -> &'static str {
        match self {
            BlockKind::Template => TEMPLATE_EXTENSION,
            BlockKind::Styles => STYLES_EXTENSION,
        }
    }

    /// The line that replaces the inline block in the component.
    pub fn reference_line(&self, reference: &str) -> String {
        match self {
            BlockKind::Template => format!("templateUrl: '{}',", reference),
            BlockKind::Styles => format!("styleUrls: ['{}']", reference),
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Template => write!(f, "template"),
            BlockKind::Styles => write!(f, "styles"),
        }
    }
}

/// Compiled patterns for every [`BlockKind`].
#[derive(Debug, Clone)]
pub struct ComponentPatterns {
    template: Regex,
    styles: Regex,
}

impl ComponentPatterns {
    pub fn new() -> ExtractResult<Self> {
        Ok(Self {
            template: Regex::new(BlockKind::Template.pattern())?,
            styles: Regex::new(BlockKind::Styles.pattern())?,
        })
    }

    pub fn get(&self, kind: BlockKind) -> &Regex {
        match kind {
            BlockKind::Template => &self.template,
            BlockKind::Styles => &self.styles,
        }
    }
}
