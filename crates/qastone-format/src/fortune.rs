//! Fortune vocabulary: glow channels, content categories, complexity tiers
//!
//! A fortune is the compact `channel:category:complexity` tag a producer
//! stamps into the header so a consumer can triage a stone without reading
//! past it. Parsing is permissive — any unrecognized or missing component
//! is simply absent.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Coarse routing category that picks a stone's default detail depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlowChannel {
    /// Actionable work item; a scan is usually enough
    Task,
    /// Background material; summary depth by default
    Context,
    /// Agent-to-agent transfer; summary depth by default
    Handoff,
    /// Question awaiting an answer; a scan is usually enough
    Query,
    /// Raw payload; detail depth by default
    Data,
}

impl GlowChannel {
    /// Wire spelling of this channel
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            GlowChannel::Task => "task",
            GlowChannel::Context => "context",
            GlowChannel::Handoff => "handoff",
            GlowChannel::Query => "query",
            GlowChannel::Data => "data",
        }
    }

    /// Default LOD depth a consumer should load for this channel
    #[inline]
    #[must_use]
    pub const fn default_level(&self) -> u8 {
        match self {
            GlowChannel::Task | GlowChannel::Query => 0,
            GlowChannel::Context | GlowChannel::Handoff => 1,
            GlowChannel::Data => 2,
        }
    }
}

impl Display for GlowChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GlowChannel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "task" => Ok(GlowChannel::Task),
            "context" => Ok(GlowChannel::Context),
            "handoff" => Ok(GlowChannel::Handoff),
            "query" => Ok(GlowChannel::Query),
            "data" => Ok(GlowChannel::Data),
            _ => Err(UnknownVariant {
                kind: "glow channel",
                value: s.to_string(),
            }),
        }
    }
}

/// Content category inferred from keyword matching at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Repo,
    Api,
    Database,
    Ui,
    Test,
    General,
}

impl Category {
    /// Wire spelling of this category
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Repo => "repo",
            Category::Api => "api",
            Category::Database => "database",
            Category::Ui => "ui",
            Category::Test => "test",
            Category::General => "general",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "repo" => Ok(Category::Repo),
            "api" => Ok(Category::Api),
            "database" => Ok(Category::Database),
            "ui" => Ok(Category::Ui),
            "test" => Ok(Category::Test),
            "general" => Ok(Category::General),
            _ => Err(UnknownVariant {
                kind: "category",
                value: s.to_string(),
            }),
        }
    }
}

/// Complexity tier inferred from word count at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    /// Wire spelling of this tier
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        }
    }
}

impl Display for Complexity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Complexity::Simple),
            "medium" => Ok(Complexity::Medium),
            "complex" => Ok(Complexity::Complex),
            _ => Err(UnknownVariant {
                kind: "complexity",
                value: s.to_string(),
            }),
        }
    }
}

/// An enum spelling that is not part of the fortune vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    /// Which vocabulary was being parsed
    pub kind: &'static str,
    /// The offending spelling
    pub value: String,
}

/// Parsed `channel:category:complexity` triple
///
/// Every component is optional; a malformed fortune yields fewer populated
/// fields rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fortune {
    /// Routing channel component
    pub channel: Option<GlowChannel>,
    /// Content category component
    pub category: Option<Category>,
    /// Complexity tier component
    pub complexity: Option<Complexity>,
}

impl Fortune {
    /// Create a fully-populated fortune
    #[inline]
    #[must_use]
    pub const fn new(channel: GlowChannel, category: Category, complexity: Complexity) -> Self {
        Self {
            channel: Some(channel),
            category: Some(category),
            complexity: Some(complexity),
        }
    }

    /// Split a fortune tag on `:`
    ///
    /// Pure and infallible: components that are missing or not in the
    /// vocabulary come back as `None`.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let mut parts = tag.splitn(3, ':');
        Self {
            channel: parts.next().and_then(|p| p.trim().parse().ok()),
            category: parts.next().and_then(|p| p.trim().parse().ok()),
            complexity: parts.next().and_then(|p| p.trim().parse().ok()),
        }
    }

    /// True when the complexity component is present and `simple`
    #[inline]
    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.complexity == Some(Complexity::Simple)
    }

    /// True when the complexity component is present and `complex`
    #[inline]
    #[must_use]
    pub fn is_complex(&self) -> bool {
        self.complexity == Some(Complexity::Complex)
    }
}

impl Display for Fortune {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.channel.map_or("", |c| c.as_str()),
            self.category.map_or("", |c| c.as_str()),
            self.complexity.map_or("", |c| c.as_str()),
        )
    }
}

/// Word-count thresholds for complexity classification
const COMPLEX_WORDS: usize = 200;
const MEDIUM_WORDS: usize = 50;

/// Keyword vocabulary for category classification, tested in order;
/// the first category with a matching word wins.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Repo, &["repo", "repository", "github", "git", "branch", "commit"]),
    (Category::Api, &["api", "endpoint", "rest", "graphql", "webhook"]),
    (Category::Database, &["database", "db", "sql", "query", "schema", "migration"]),
    (Category::Ui, &["ui", "frontend", "component", "css", "layout", "interface"]),
    (Category::Test, &["test", "tests", "testing", "coverage", "assertion"]),
];

/// Classify content into a category by whole-word keyword match
///
/// Words are lowercased and split on non-alphanumeric boundaries, so
/// `GitHub` matches `github` but `suite` does not match `ui`.
#[must_use]
pub fn classify_category(content: &str) -> Category {
    let lowered = content.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    for (category, keywords) in CATEGORY_KEYWORDS {
        if words.iter().any(|w| keywords.contains(w)) {
            return *category;
        }
    }
    Category::General
}

/// Classify content into a complexity tier by word count
#[must_use]
pub fn classify_complexity(content: &str) -> Complexity {
    let words = content.split_whitespace().count();
    if words > COMPLEX_WORDS {
        Complexity::Complex
    } else if words > MEDIUM_WORDS {
        Complexity::Medium
    } else {
        Complexity::Simple
    }
}
