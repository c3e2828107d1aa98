use super::Mapping;

/// Copies every entry of each source into `target`, from left to right, then returns `target`.
///
/// Later sources overwrite entries from earlier ones and from `target` itself.
pub fn extend<'t, M, S>(target: &'t mut M, sources: &[&S]) -> &'t mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
    S: Mapping<Key = M::Key, Value = M::Value>,
{
    for source in sources {
        for (key, value) in source.pairs() {
            target.assign(key.clone(), value.clone());
        }
    }
    target
}

/// Like [`extend`], except that entries are only copied for keys that `target` doesn't already
/// have. The first source to provide a key wins.
pub fn defaults<'t, M, S>(target: &'t mut M, sources: &[&S]) -> &'t mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
    S: Mapping<Key = M::Key, Value = M::Value>,
{
    for source in sources {
        for (key, value) in source.pairs() {
            if !target.has_key(key) {
                target.assign(key.clone(), value.clone());
            }
        }
    }
    target
}
