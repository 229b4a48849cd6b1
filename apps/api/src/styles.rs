//! Company interview styles — an immutable lookup table injected into both
//! endpoints at startup. A miss falls back to the caller's default, so the
//! lookup is total and has no failure mode.

use std::collections::HashMap;

/// Immutable company → style-hint mapping, built once at startup.
/// The style hint only biases the prompt; it is never returned to the client.
#[derive(Debug, Clone)]
pub struct StyleTable {
    profiles: HashMap<String, String>,
}

impl StyleTable {
    /// Builds the table from explicit entries. Tests use this to inject
    /// custom style sets.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            profiles: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The built-in company profiles.
    pub fn builtin() -> Self {
        Self::new([
            (
                "Google",
                "Focus on algorithms, system design, and problem-solving depth.",
            ),
            (
                "Infosys",
                "Practical coding, OOP basics, and database concepts.",
            ),
            (
                "Microsoft",
                "System design, product sense, and engineering trade-offs.",
            ),
            (
                "TCS",
                "Scenario-based questions, programming fundamentals, and aptitude.",
            ),
        ])
    }

    /// Resolves the style hint for `company`, falling back to `default` for
    /// unknown companies. Pure and total.
    pub fn lookup<'a>(&'a self, company: &str, default: &'a str) -> &'a str {
        self.profiles
            .get(company)
            .map(String::as_str)
            .unwrap_or(default)
    }
}
