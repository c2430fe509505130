use std::ops::RangeInclusive;
use std::sync::LazyLock;

use ahash::HashSet;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SUFFIX_RANGE: RangeInclusive<u32> = 100_000..=999_999;

static GLOBAL: LazyLock<IdRegistry> = LazyLock::new(IdRegistry::new);

/// Issues `id` attribute values that are never handed out twice.
///
/// An id has the form `<scope>_<six digits>`. Every id issued is
/// remembered, so it stays unique for the lifetime of the registry, across
/// any number of documents.
///
/// Conversions use [`IdRegistry::global`] unless a registry is passed in
/// explicitly, for instance to keep tests independent of each other.
///
/// ```rust
/// use dictxml::IdRegistry;
///
/// let registry = IdRegistry::new();
/// let a = registry.allocate("root");
/// let b = registry.allocate("root");
/// assert!(a.starts_with("root_"));
/// assert_ne!(a, b);
/// assert_eq!(registry.len(), 2);
/// ```
pub struct IdRegistry {
    inner: Mutex<Inner>,
}

struct Inner {
    issued: HashSet<String>,
    rng: StdRng,
}

impl IdRegistry {
    /// Create an empty registry with a randomly seeded generator.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create an empty registry whose ids are reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        IdRegistry {
            inner: Mutex::new(Inner {
                issued: HashSet::default(),
                rng,
            }),
        }
    }

    /// The registry shared by the whole process.
    pub fn global() -> &'static IdRegistry {
        &GLOBAL
    }

    /// Issue a new id scoped to `scope`.
    ///
    /// Candidates that were issued or reserved before are drawn again.
    pub fn allocate(&self, scope: &str) -> String {
        let mut inner = self.inner.lock();
        loop {
            let suffix = inner.rng.gen_range(SUFFIX_RANGE);
            let candidate = format!("{}_{}", scope, suffix);
            if !inner.issued.contains(&candidate) {
                inner.issued.insert(candidate.clone());
                return candidate;
            }
            tracing::trace!(%candidate, "id collision, drawing again");
        }
    }

    /// Mark `id` as taken so it is never issued.
    ///
    /// Returns false if it was already taken.
    pub fn reserve(&self, id: impl Into<String>) -> bool {
        self.inner.lock().issued.insert(id.into())
    }

    /// Whether `id` has been issued or reserved.
    pub fn contains(&self, id: &str) -> bool {
        self.inner.lock().issued.contains(id)
    }

    /// The number of ids issued or reserved so far.
    pub fn len(&self) -> usize {
        self.inner.lock().issued.len()
    }

    /// Whether no id has been issued or reserved yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for IdRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IdRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdRegistry")
            .field("issued", &self.len())
            .finish()
    }
}
