//! Binary tree of ordered values with stack-based in-order iteration.

use std::fmt;

use tracing::instrument;

use crate::domain::DomainError;

/// Deepest tree `to_display_tree` will draw; rendering recurses per level.
pub const MAX_DISPLAY_DEPTH: usize = 256;

type Link<T> = Option<Box<Node<T>>>;

/// A single tree node. Children are owned; an absent child is an empty subtree.
pub struct Node<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> Node<T> {
    fn boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// Binary tree, possibly empty.
///
/// `PartialEq` compares shape and values. Use [`crate::same`] to compare
/// only the in-order sequence. `Clone`, `PartialEq`, `Debug` and `Drop`
/// all work on an explicit stack, so degenerate trees are safe.
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Single-node tree.
    pub fn leaf(value: T) -> Self {
        Self {
            root: Some(Node::boxed(value)),
        }
    }

    /// Tree with `value` at the root and the given subtrees.
    pub fn node(mut left: Tree<T>, value: T, mut right: Tree<T>) -> Self {
        Self {
            root: Some(Box::new(Node {
                value,
                left: left.root.take(),
                right: right.root.take(),
            })),
        }
    }

    /// Builds a height-balanced tree whose in-order sequence is exactly `values`.
    ///
    /// The slice is not sorted first: the middle element becomes the root,
    /// the halves become the subtrees.
    pub fn balanced(values: &[T]) -> Self
    where
        T: Clone,
    {
        if values.is_empty() {
            return Self::new();
        }
        let mid = values.len() / 2;
        Self::node(
            Self::balanced(&values[..mid]),
            values[mid].clone(),
            Self::balanced(&values[mid + 1..]),
        )
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Length of the longest root-to-leaf path; 0 for an empty tree.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }

        max_depth
    }

    /// In-order iterator over the values.
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Converts the tree into a `termtree` for display.
    ///
    /// A node with a single child shows the missing side as `·` so left and
    /// right stay distinguishable. Trees deeper than [`MAX_DISPLAY_DEPTH`]
    /// are rejected.
    pub fn to_display_tree(&self) -> Result<termtree::Tree<String>, DomainError>
    where
        T: fmt::Display,
    {
        let depth = self.depth();
        if depth > MAX_DISPLAY_DEPTH {
            return Err(DomainError::TooDeepToDisplay {
                depth,
                max: MAX_DISPLAY_DEPTH,
            });
        }

        fn build<T: fmt::Display>(node: &Node<T>) -> termtree::Tree<String> {
            let children = match (node.left.as_deref(), node.right.as_deref()) {
                (None, None) => vec![],
                (Some(l), None) => vec![build(l), termtree::Tree::new("·".to_string())],
                (None, Some(r)) => vec![termtree::Tree::new("·".to_string()), build(r)],
                (Some(l), Some(r)) => vec![build(l), build(r)],
            };
            termtree::Tree::new(node.value.to_string()).with_leaves(children)
        }

        Ok(match self.root() {
            Some(root) => build(root),
            None => termtree::Tree::new("(empty)".to_string()),
        })
    }
}

impl<T: Ord> Tree<T> {
    /// Binary-search-tree insert: smaller values go left, everything else right.
    pub fn insert(&mut self, value: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::boxed(value));
    }

    /// Inserts `values` in order into an empty tree.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

// Unlinks nodes onto a heap stack so dropping a degenerate tree does not recurse.
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

// Post-order copy: each finished subtree leaves one node on `built`.
impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        let mut pending: Vec<(&Node<T>, bool)> = self.root().map(|n| (n, false)).into_iter().collect();
        let mut built: Vec<Box<Node<T>>> = Vec::new();

        while let Some((node, children_done)) = pending.pop() {
            if children_done {
                let right = node.right.as_ref().and_then(|_| built.pop());
                let left = node.left.as_ref().and_then(|_| built.pop());
                built.push(Box::new(Node {
                    value: node.value.clone(),
                    left,
                    right,
                }));
            } else {
                pending.push((node, true));
                pending.extend(node.right.as_deref().map(|r| (r, false)));
                pending.extend(node.left.as_deref().map(|l| (l, false)));
            }
        }

        Self { root: built.pop() }
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self.root(), other.root())];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.value == b.value => {
                    stack.push((a.left.as_deref(), b.left.as_deref()));
                    stack.push((a.right.as_deref(), b.right.as_deref()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("depth", &self.depth())
            .field("in_order", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_left", &self.left.is_some())
            .field("has_right", &self.right.is_some())
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order (left, node, right) iterator.
///
/// Keeps the pending left spine on an explicit stack, so memory is bounded
/// by tree depth and no call recursion is involved.
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}
