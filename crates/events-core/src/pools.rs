//! Sampling vocabularies for event generation.

use serde::{Deserialize, Serialize};

/// Name and phrase pools the generator samples from.
///
/// The defaults mirror the vocabulary used to seed the downstream events
/// table. Every pool must be non-empty; `EventGenerator::new` validates this
/// and rejects pools that would make sampling impossible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pools {
    /// Organization names, used when the sampled owner is an organization.
    pub organizations: Vec<String>,
    /// User names, used when the sampled owner is an individual user.
    pub users: Vec<String>,
    /// Repository names.
    pub repositories: Vec<String>,
    /// Member names. Sampled independently of owner and repository.
    pub members: Vec<String>,
    /// Commit message phrases.
    pub commit_messages: Vec<String>,
    /// Pull request title phrases.
    pub pull_request_titles: Vec<String>,
    /// Branch names deploys are cut from.
    pub deploy_refs: Vec<String>,
}

impl Pools {
    /// Name of the first empty pool, if any.
    pub fn first_empty(&self) -> Option<&'static str> {
        [
            ("organizations", &self.organizations),
            ("users", &self.users),
            ("repositories", &self.repositories),
            ("members", &self.members),
            ("commit_messages", &self.commit_messages),
            ("pull_request_titles", &self.pull_request_titles),
            ("deploy_refs", &self.deploy_refs),
        ]
        .into_iter()
        .find(|(_, pool)| pool.is_empty())
        .map(|(name, _)| name)
    }
}

impl Default for Pools {
    fn default() -> Self {
        Self {
            organizations: strings(&["acme-corp", "tech-startup", "open-source-org"]),
            users: strings(&["alice", "bob", "charlie", "diana", "eve"]),
            repositories: strings(&[
                "web-app",
                "api-server",
                "mobile-app",
                "data-pipeline",
                "infrastructure",
                "docs",
                "frontend",
                "backend",
            ]),
            members: strings(&[
                "alice", "bob", "charlie", "diana", "eve", "frank", "grace", "henry",
            ]),
            commit_messages: strings(&[
                "Fix bug in authentication",
                "Add new feature",
                "Update documentation",
                "Refactor code",
                "Improve performance",
                "Fix typo",
                "Add tests",
                "Update dependencies",
            ]),
            pull_request_titles: strings(&[
                "Add new feature",
                "Fix critical bug",
                "Update dependencies",
                "Improve documentation",
                "Refactor code",
                "Add tests",
                "Performance improvements",
            ]),
            deploy_refs: strings(&["main", "develop", "release/v1.0"]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pools_are_non_empty() {
        assert!(Pools::default().first_empty().is_none());
    }

    #[test]
    fn test_first_empty_names_the_pool() {
        let pools = Pools {
            repositories: Vec::new(),
            ..Pools::default()
        };
        assert_eq!(pools.first_empty(), Some("repositories"));
    }
}
