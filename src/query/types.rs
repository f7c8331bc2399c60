use crate::catalog::TestType;
use crate::constants::DEFAULT_TIME_LIMIT_MINS;

/// Seniority signal extracted from the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExperienceLevel {
    /// Entry-level / graduate roles.
    Entry,
    /// No explicit signal.
    #[default]
    Mid,
    /// Senior / lead / principal roles.
    Senior,
}

/// Insertion-ordered set of test types (at most 3 entries).
///
/// Iteration order is the order in which signals were unioned during query
/// parsing, which makes downstream balancing deterministic for a given
/// requirements object. Never mutated after parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestTypeSet {
    entries: Vec<TestType>,
}

impl TestTypeSet {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type if not already present. Returns `true` if it was added.
    pub fn insert(&mut self, test_type: TestType) -> bool {
        if self.entries.contains(&test_type) {
            return false;
        }
        self.entries.push(test_type);
        true
    }

    /// Returns `true` if the type is in the set.
    #[inline]
    pub fn contains(&self, test_type: TestType) -> bool {
        self.entries.contains(&test_type)
    }

    /// Number of types in the set (0–3).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no types were signaled.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, TestType> {
        self.entries.iter()
    }

    /// The entries in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[TestType] {
        &self.entries
    }
}

impl FromIterator<TestType> for TestTypeSet {
    fn from_iter<I: IntoIterator<Item = TestType>>(iter: I) -> Self {
        let mut set = Self::new();
        for t in iter {
            set.insert(t);
        }
        set
    }
}

/// Structured intent extracted from a free-text query.
///
/// Ephemeral: created per query, discarded with the request.
#[derive(Debug, Clone, PartialEq)]
pub struct Requirements {
    /// Matched vocabulary terms, in vocabulary-iteration order. Each term is
    /// tested once, so duplicates are impossible.
    pub skills: Vec<String>,
    /// Test types signaled by keywords and skill categories.
    pub test_types: TestTypeSet,
    /// Time budget in minutes.
    pub time_limit: u32,
    /// Seniority signal.
    pub experience_level: ExperienceLevel,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            skills: Vec::new(),
            test_types: TestTypeSet::new(),
            time_limit: DEFAULT_TIME_LIMIT_MINS,
            experience_level: ExperienceLevel::Mid,
        }
    }
}
