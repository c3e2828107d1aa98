use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::{BuildHasher, Hash, RandomState};

/// A single-argument function which caches its result for every argument it has been called
/// with.
///
/// This is the state behind [`memoize`]. The cache is never evicted, only [`clear`](Memoize::clear)ed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of cached results.
/// - `f`: The time complexity of the wrapped function.
///
/// | Method | Complexity |
/// |-|-|
/// | `call` | `O(1)`*, `O(f)` |
/// | `contains` | `O(1)` |
/// | `len` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* On a cache hit.
pub struct Memoize<F, A, R, S = RandomState> {
    func: F,
    cache: HashMap<A, R, S>,
}

impl<F, A, R> Memoize<F, A, R>
where
    F: FnMut(A) -> R,
    A: Hash + Eq + Clone,
{
    /// Wraps `func` with an empty cache, without calling it.
    pub fn new(func: F) -> Memoize<F, A, R> {
        Memoize {
            func,
            cache: HashMap::new(),
        }
    }
}

impl<F, A, R, S> Memoize<F, A, R, S>
where
    F: FnMut(A) -> R,
    A: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Wraps `func` with an empty cache which uses the provided `hasher`.
    pub fn with_hasher(func: F, hasher: S) -> Memoize<F, A, R, S> {
        Memoize {
            func,
            cache: HashMap::with_hasher(hasher),
        }
    }

    /// Returns the cached result for `arg`, calling the wrapped function to compute and cache it
    /// if there is none.
    pub fn call(&mut self, arg: A) -> &R {
        match self.cache.entry(arg) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                tracing::trace!("memoized function cache miss");
                let result = (self.func)(entry.key().clone());
                entry.insert(result)
            },
        }
    }

    /// Returns true if a result is cached for `arg`.
    pub fn contains(&self, arg: &A) -> bool {
        self.cache.contains_key(arg)
    }

    /// Returns the number of cached results.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if no results are cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Discards every cached result.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

/// Returns a closure which caches the result of `func` for each argument it is called with. When
/// called again with an equal argument, the cached result is cloned and `func` isn't called.
pub fn memoize<F, A, R>(func: F) -> impl FnMut(A) -> R
where
    F: FnMut(A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    let mut memo = Memoize::new(func);
    move |arg| memo.call(arg).clone()
}
