// Effective-value resolution for properties that fall back through several
// sources (run -> style, direct -> style -> raw attribute).

/// First set value in an ordered chain of optional sources.
pub fn first_some<T, I>(chain: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    chain.into_iter().flatten().next()
}

/// Every set value in the chain, in source order. Used by rules that pass
/// when any source carries an acceptable value.
pub fn candidates<T, I>(chain: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    chain.into_iter().flatten().collect()
}
