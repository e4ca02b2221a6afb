//! Conflict classification - pure functions over command output
//!
//! Free-text matching on merge output is inherently fragile (locale- and
//! version-dependent phrasing), so it lives behind one named type that
//! could be swapped for a structured status check.

/// Built-in tokens that mark a failed merge as a content conflict
const BUILTIN_TOKENS: [&str; 4] = [
    "conflict",
    "merge conflict",
    "unmerged",
    "automatic merge failed",
];

/// Status code characters that participate in unmerged pairs
const UNMERGED_CODES: [char; 3] = ['U', 'A', 'D'];

/// Case-insensitive token list classifying failed merge output
///
/// A failed merge command whose combined output contains any token is a
/// conflict, not a hard error. Deployments add localized tokens through
/// configuration rather than editing the built-in list.
#[derive(Debug, Clone)]
pub struct ConflictLexicon {
    tokens: Vec<String>,
}

impl Default for ConflictLexicon {
    fn default() -> Self {
        Self {
            tokens: BUILTIN_TOKENS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ConflictLexicon {
    /// The built-in lexicon plus extra (e.g. localized) tokens.
    #[must_use]
    pub fn with_extra_tokens<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::default();
        for token in extra {
            let token = token.as_ref().trim().to_lowercase();
            if !token.is_empty() && !lexicon.tokens.contains(&token) {
                lexicon.tokens.push(token);
            }
        }
        lexicon
    }

    /// Whether `output` reads as a merge conflict.
    #[must_use]
    pub fn matches(&self, output: &str) -> bool {
        let lower = output.to_lowercase();
        self.tokens.iter().any(|token| lower.contains(token))
    }
}

/// One parsed line of short-form status output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// First status code character (index state)
    pub index: char,
    /// Second status code character (worktree state)
    pub worktree: char,
    /// Path the codes apply to
    pub path: String,
}

impl StatusEntry {
    /// Parse one `status --porcelain` line.
    ///
    /// Returns `None` for lines too short to carry a code pair.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut chars = line.chars();
        let index = chars.next()?;
        let worktree = chars.next()?;
        Some(Self {
            index,
            worktree,
            path: line.get(3..).unwrap_or_default().trim().to_string(),
        })
    }

    /// Whether this entry marks an unresolved conflict.
    ///
    /// Both code characters must come from {U, A, D}: UU, AA, DD, AU, UA,
    /// DU, UD. Some merge tooling exits zero while leaving such markers in
    /// the tree, so this check runs even after a reported merge success.
    #[must_use]
    pub fn is_unmerged(&self) -> bool {
        UNMERGED_CODES.contains(&self.index) && UNMERGED_CODES.contains(&self.worktree)
    }
}

/// Parse every code-bearing line of short-form status output.
#[must_use]
pub fn parse_status(output: &str) -> Vec<StatusEntry> {
    output.lines().filter_map(StatusEntry::parse).collect()
}
