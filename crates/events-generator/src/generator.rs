//! Main event generator producing uniquely identified, time-distributed events.

use crate::generators::{choice, hex, timestamp, token};
use events_core::{
    DeployEnvironment, DeployStatus, Event, EventKind, EventPayload, OwnerKind, Pools,
    PullRequestState, Window,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// Upper bound on payload-and-id regeneration when a derived id collides.
const MAX_ID_ATTEMPTS: u32 = 100;

/// Upper bound on sha resampling within one (owner, repo) pair.
const MAX_SHA_ATTEMPTS: u32 = 100;

/// Maximum seconds `created_at` trails `timestamp` by.
const CREATED_AT_JITTER_SECS: i64 = 3600;

/// Alphabet short commit shas are drawn from.
const SHA_ALPHABET: &str = "0123456789abcdef";

/// Length of a short commit sha.
const SHA_LEN: usize = 7;

/// Range the first pull-request number of an (owner, repo) pair is drawn from.
const PR_NUMBER_SEED_RANGE: std::ops::RangeInclusive<u32> = 1..=1000;

/// Error type for generator construction.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A sampling pool has no entries
    #[error("Pool '{0}' is empty")]
    EmptyPool(&'static str),
}

type RepoKey = (String, String);

/// Generator that produces synthetic activity events.
///
/// The generator uses a seeded random number generator to ensure reproducible
/// results across runs with the same seed, pools, and window. Uniqueness
/// state (used ids, per-repository pull-request counters and commit sha sets)
/// is scoped to one generator instance and discarded with it.
pub struct EventGenerator {
    pools: Pools,
    window: Window,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    sha_alphabet: Vec<char>,
    used_ids: HashSet<String>,
    pr_counters: HashMap<RepoKey, u32>,
    commit_shas: HashMap<RepoKey, HashSet<String>>,
}

impl EventGenerator {
    /// Create a new generator with the given pools, window, and seed.
    ///
    /// Fails if any sampling pool is empty.
    pub fn new(pools: Pools, window: Window, seed: u64) -> Result<Self, GeneratorError> {
        if let Some(name) = pools.first_empty() {
            return Err(GeneratorError::EmptyPool(name));
        }

        Ok(Self {
            pools,
            window,
            rng: StdRng::seed_from_u64(seed),
            sha_alphabet: SHA_ALPHABET.chars().collect(),
            used_ids: HashSet::new(),
            pr_counters: HashMap::new(),
            commit_shas: HashMap::new(),
        })
    }

    /// Replace the alphabet commit shas are drawn from. Must be non-empty.
    ///
    /// Shrinking the alphabet makes sha collisions likely, which is how the
    /// tests exercise the bounded-retry fallback paths.
    pub fn with_sha_alphabet(mut self, alphabet: &str) -> Self {
        self.sha_alphabet = alphabet.chars().collect();
        self
    }

    /// Generate `count` events, sorted ascending by timestamp.
    pub fn generate(&mut self, count: u64) -> Vec<Event> {
        let mut events: Vec<Event> = (0..count).map(|_| self.next_event()).collect();
        // Stable sort keeps generation order for equal timestamps.
        events.sort_by_key(|e| e.timestamp);
        events
    }

    /// Generate a single event with a uniformly sampled kind.
    pub fn next_event(&mut self) -> Event {
        let kind = *choice::pick(&mut self.rng, &EventKind::ALL);
        self.next_event_of(kind)
    }

    /// Generate a single event of a specific kind.
    pub fn next_event_of(&mut self, kind: EventKind) -> Event {
        let owner_kind = *choice::pick(&mut self.rng, &OwnerKind::ALL);
        let owner = match owner_kind {
            OwnerKind::Organization => choice::pick(&mut self.rng, &self.pools.organizations),
            OwnerKind::User => choice::pick(&mut self.rng, &self.pools.users),
        }
        .clone();
        let repo = choice::pick(&mut self.rng, &self.pools.repositories).clone();
        let member = choice::pick(&mut self.rng, &self.pools.members).clone();

        let (id, payload) = self.unique_payload(kind, &owner, &repo);

        let timestamp = timestamp::sample_in_window(&mut self.rng, &self.window);
        let created_at = timestamp::jitter(&mut self.rng, timestamp, CREATED_AT_JITTER_SECS);

        Event {
            id,
            kind,
            owner,
            owner_kind,
            repo,
            member,
            timestamp,
            payload,
            created_at,
        }
    }

    /// Build a payload together with an id unused within this run.
    ///
    /// A colliding id regenerates the whole payload, up to `MAX_ID_ATTEMPTS`
    /// times; after that the id falls back to a fresh random token so
    /// generation always terminates.
    fn unique_payload(&mut self, kind: EventKind, owner: &str, repo: &str) -> (String, EventPayload) {
        for _ in 0..MAX_ID_ATTEMPTS {
            let payload = self.build_payload(kind, owner, repo);
            let id = derive_id(owner, repo, &payload);
            if self.used_ids.insert(id.clone()) {
                return (id, payload);
            }
        }

        // Every attempt collided; a random token id guarantees termination.
        let payload = self.build_payload(kind, owner, repo);
        let id = format!(
            "{owner}-{repo}-{}-{}",
            kind.as_str(),
            token::uuid_v4(&mut self.rng)
        );
        self.used_ids.insert(id.clone());
        (id, payload)
    }

    fn build_payload(&mut self, kind: EventKind, owner: &str, repo: &str) -> EventPayload {
        match kind {
            EventKind::Commit => {
                let sha = self.next_commit_sha(owner, repo);
                EventPayload::Commit {
                    sha,
                    message: choice::pick(&mut self.rng, &self.pools.commit_messages).clone(),
                    additions: self.rng.random_range(10..=500),
                    deletions: self.rng.random_range(5..=300),
                    files_changed: self.rng.random_range(1..=20),
                }
            }
            EventKind::PullRequest => {
                let number = self.next_pr_number(owner, repo);
                EventPayload::PullRequest {
                    number,
                    title: choice::pick(&mut self.rng, &self.pools.pull_request_titles).clone(),
                    state: *choice::pick(&mut self.rng, &PullRequestState::ALL),
                    additions: self.rng.random_range(50..=1000),
                    deletions: self.rng.random_range(20..=500),
                    files_changed: self.rng.random_range(1..=30),
                }
            }
            EventKind::Deploy => EventPayload::Deploy {
                id: token::uuid_v4(&mut self.rng).to_string(),
                environment: *choice::pick(&mut self.rng, &DeployEnvironment::ALL),
                status: *choice::pick(&mut self.rng, &DeployStatus::ALL),
                git_ref: choice::pick(&mut self.rng, &self.pools.deploy_refs).clone(),
                sha: hex::token(&mut self.rng, &self.sha_alphabet, SHA_LEN),
            },
        }
    }

    /// Sample a sha unused within (owner, repo).
    ///
    /// Gives up after `MAX_SHA_ATTEMPTS` resamples and accepts a duplicate,
    /// which is recorded regardless.
    fn next_commit_sha(&mut self, owner: &str, repo: &str) -> String {
        let key = (owner.to_string(), repo.to_string());
        let used = self.commit_shas.entry(key).or_default();

        let mut sha = hex::token(&mut self.rng, &self.sha_alphabet, SHA_LEN);
        let mut attempts = 0;
        while used.contains(&sha) && attempts < MAX_SHA_ATTEMPTS {
            sha = hex::token(&mut self.rng, &self.sha_alphabet, SHA_LEN);
            attempts += 1;
        }
        used.insert(sha.clone());
        sha
    }

    /// Next pull-request number for (owner, repo): a seeded starting value on
    /// first use, then +1 per event.
    fn next_pr_number(&mut self, owner: &str, repo: &str) -> u32 {
        let key = (owner.to_string(), repo.to_string());
        match self.pr_counters.entry(key) {
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += 1;
                *entry.get()
            }
            Entry::Vacant(entry) => *entry.insert(self.rng.random_range(PR_NUMBER_SEED_RANGE)),
        }
    }
}

/// Deterministic id derived from the payload's discriminator field.
fn derive_id(owner: &str, repo: &str, payload: &EventPayload) -> String {
    match payload {
        EventPayload::Commit { sha, .. } => format!("{owner}-{repo}-commit-{sha}"),
        EventPayload::PullRequest { number, .. } => format!("{owner}-{repo}-pr-{number}"),
        EventPayload::Deploy { id, .. } => format!("{owner}-{repo}-deploy-{id}"),
    }
}
