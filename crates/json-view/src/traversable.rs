//! Iterable-but-not-indexable values: cursors, lazy sequences, generators.
//!
//! A [`Traversable`] is walked once per render and materialized into a
//! plain array or object, keeping the keys it reports.

use crate::variable::Variable;
use crate::variables::Key;

pub trait Traversable {
    /// Walk the value, yielding each entry with its key.
    fn traverse(&self) -> Box<dyn Iterator<Item = (Key, Variable)> + '_>;
}

/// A lazily produced list. Entries are keyed by position.
///
/// ```rust
/// use json_view::traversable::Sequence;
///
/// let ids = Sequence::new(|| (1..=3).map(serde_json::Value::from));
/// ```
pub struct Sequence<F> {
    produce: F,
}

impl<F> Sequence<F> {
    pub fn new(produce: F) -> Self {
        Self { produce }
    }
}

impl<F, I, V> Traversable for Sequence<F>
where
    F: Fn() -> I,
    I: IntoIterator<Item = V> + 'static,
    V: Into<Variable> + 'static,
{
    fn traverse(&self) -> Box<dyn Iterator<Item = (Key, Variable)> + '_> {
        Box::new(
            (self.produce)()
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::Index(i), v.into())),
        )
    }
}

/// A lazily produced keyed iterable.
pub struct Pairs<F> {
    produce: F,
}

impl<F> Pairs<F> {
    pub fn new(produce: F) -> Self {
        Self { produce }
    }
}

impl<F, I, K, V> Traversable for Pairs<F>
where
    F: Fn() -> I,
    I: IntoIterator<Item = (K, V)> + 'static,
    K: Into<Key> + 'static,
    V: Into<Variable> + 'static,
{
    fn traverse(&self) -> Box<dyn Iterator<Item = (Key, Variable)> + '_> {
        Box::new(
            (self.produce)()
                .into_iter()
                .map(|(k, v)| (k.into(), v.into())),
        )
    }
}
