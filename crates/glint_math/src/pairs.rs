/// Iterate over consecutive pairs of `items`, finishing with the pair that
/// wraps from the last element back to the first.
///
/// `[a, b, c]` yields `(a, b)`, `(b, c)`, `(c, a)`.
pub fn closed_pairs<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> + '_ {
    items.iter().zip(items.iter().cycle().skip(1))
}
