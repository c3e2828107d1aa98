/// Zips together any number of sequences. The `i`th inner Vec of the result holds the `i`th
/// element of each sequence, in the order the sequences were provided.
///
/// The result is as long as the longest sequence. Positions past the end of a shorter sequence are
/// filled with None.
pub fn zip<T: Clone>(seqs: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let len = seqs.iter().map(|seq| seq.len()).max().unwrap_or(0);
    (0..len)
        .map(|i| seqs.iter().map(|seq| seq.get(i).cloned()).collect())
        .collect()
}

/// Zips together two sequences that hold different types, as pairs. Like [`zip`], the result is as
/// long as the longer sequence.
pub fn zip_pair<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<(Option<A>, Option<B>)> {
    (0..a.len().max(b.len()))
        .map(|i| (a.get(i).cloned(), b.get(i).cloned()))
        .collect()
}
