use std::collections::HashSet;

/// Order-preserving intersection of two match-ID sequences
///
/// Builds a membership set from `a` and keeps the elements of `b` found in
/// it, in `b`'s order. Duplicates in `b` are kept as they appear.
///
/// # Examples
/// ```
/// use duo_finder::core::intersect;
///
/// let a = ["m1", "m2", "m3"];
/// let b = ["m3", "m4", "m2"];
/// assert_eq!(intersect(&a, &b), vec!["m3", "m2"]);
/// ```
pub fn intersect<T: AsRef<str>>(a: &[T], b: &[T]) -> Vec<String> {
    let members: HashSet<&str> = a.iter().map(AsRef::<str>::as_ref).collect();

    b.iter()
        .map(AsRef::<str>::as_ref)
        .filter(|id| members.contains(id))
        .map(str::to_string)
        .collect()
}

/// Drop repeated IDs, keeping the first occurrence
pub fn dedup_preserving_order(ids: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
