use crate::value::Value;

/// A type which is either a leaf or a sequence of further nested values.
pub trait Nest: Sized {
    /// The type of the values found at the leaves.
    type Leaf;

    /// Returns whether this value is a leaf or a branch.
    fn shape(&self) -> Shape<'_, Self>;
}

/// A borrowed view of a single level of a [`Nest`].
pub enum Shape<'a, N: Nest> {
    /// A value that isn't a sequence.
    Leaf(&'a N::Leaf),
    /// A sequence, which may contain leaves or further sequences.
    Branch(&'a [N]),
}

/// An arbitrarily nested sequence of `T`.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    /// A single value.
    Leaf(T),
    /// A sequence of nested values.
    List(Vec<Nested<T>>),
}

impl<T> Nest for Nested<T> {
    type Leaf = T;

    fn shape(&self) -> Shape<'_, Self> {
        match self {
            Nested::Leaf(value) => Shape::Leaf(value),
            Nested::List(items) => Shape::Branch(items),
        }
    }
}

/// Arrays are branches. Everything else, including objects, is a leaf.
impl Nest for Value {
    type Leaf = Value;

    fn shape(&self) -> Shape<'_, Self> {
        match self {
            Value::Array(items) => Shape::Branch(items),
            other => Shape::Leaf(other),
        }
    }
}

/// Returns every leaf of `nested`, in depth-first, left-to-right order.
pub fn flatten<N>(nested: &[N]) -> Vec<N::Leaf>
where
    N: Nest,
    N::Leaf: Clone,
{
    let mut flat = Vec::new();
    flatten_into(nested, &mut flat);
    flat
}

fn flatten_into<N>(nested: &[N], flat: &mut Vec<N::Leaf>)
where
    N: Nest,
    N::Leaf: Clone,
{
    for item in nested {
        match item.shape() {
            Shape::Leaf(leaf) => flat.push(leaf.clone()),
            Shape::Branch(items) => flatten_into(items, flat),
        }
    }
}
