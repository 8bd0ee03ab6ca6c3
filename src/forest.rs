//! Binomial forest primitives
//!
//! A forest is an ordered sequence of binomial tree roots. In its stable
//! state the roots are sorted by strictly increasing degree, so the root
//! degrees of a forest holding n nodes are exactly the set bits of n.
//!
//! **Binomial Tree Bₖ**:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees
//! - Bₖ has exactly 2ᵏ nodes; its root has children of degree k-1, ..., 1, 0
//!
//! The operations here are the whole algorithmic core of the heap:
//! - [`merge_nodes`]: link two equal-degree trees into one of degree+1
//! - [`adjust`]: collapse same-degree neighbours after a raw merge (carry propagation)
//! - [`merge_forests`]: stable merge by degree followed by [`adjust`]
//! - [`children_as_forest`]: turn a node's child chain into an ascending forest
//! - [`remove_min`]: extract the minimum root and meld its children back in
//! - [`release`]: tear down a forest without recursion
//!
//! **Memory Model**: `child` and `sibling` own the nodes below and beside a
//! node. `parent` is a non-owning back-reference that is only ever compared
//! by address, never dereferenced.

use crate::traits::InvariantViolation;
use log::trace;
use smallvec::SmallVec;
use std::iter;
use std::ptr::NonNull;

/// Ordered sequence of tree roots, ascending by degree
pub(crate) type Forest<T> = SmallVec<[Box<Node<T>>; 8]>;

/// One vertex of one binomial tree
pub(crate) struct Node<T> {
    pub(crate) key: T,
    /// Number of children. A node of degree k roots a subtree of 2ᵏ nodes
    pub(crate) degree: usize,
    /// Head of the child chain, highest degree first
    child: Option<Box<Node<T>>>,
    /// Next node in the parent's child chain
    sibling: Option<Box<Node<T>>>,
    /// Owning parent while attached to a tree, None for roots
    parent: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a degree-0 tree holding a single key
    pub(crate) fn singleton(key: T) -> Box<Self> {
        Box::new(Node {
            key,
            degree: 0,
            child: None,
            sibling: None,
            parent: None,
        })
    }

    fn children(&self) -> impl Iterator<Item = &Node<T>> {
        iter::successors(self.child.as_deref(), |child| child.sibling.as_deref())
    }
}

/// Links two trees of equal degree into one tree of degree+1
///
/// The root with the larger key becomes the new head of the other root's
/// child chain. On equal keys `a` stays on top.
///
/// **Time Complexity**: O(1)
pub(crate) fn merge_nodes<T: Ord>(a: Box<Node<T>>, b: Box<Node<T>>) -> Box<Node<T>> {
    debug_assert_eq!(a.degree, b.degree, "merge_nodes: degrees differ");

    let (mut small, mut large) = if a.key > b.key { (b, a) } else { (a, b) };

    large.parent = Some(NonNull::from(&*small));
    large.sibling = small.child.take();
    small.child = Some(large);
    small.degree += 1;

    small
}

/// Collapses same-degree neighbours in a forest sorted by ascending degree
///
/// The input is the raw stable merge of two normalized forests, so each degree
/// appears at most twice, plus at most one pending carry. A window of three
/// consecutive roots walks the forest:
/// - first two differ: slide on
/// - all three tie: leave the first in place and slide on, so the two after it pair up
/// - exactly two tie: link them in the first slot and re-examine that slot
///
/// Like carries in binary addition, the linked tree may tie with what follows,
/// which the next iteration picks up.
///
/// **Time Complexity**: O(log n) links, each paying an O(log n) slot shift at worst
pub(crate) fn adjust<T: Ord>(forest: &mut Forest<T>) {
    if forest.len() < 2 {
        return;
    }

    let mut first = 0;
    while first + 1 < forest.len() {
        let degree = forest[first].degree;
        if forest[first + 1].degree != degree {
            first += 1;
            continue;
        }

        let three_way = forest
            .get(first + 2)
            .is_some_and(|third| third.degree == degree);
        if three_way {
            first += 1;
            continue;
        }

        let rhs = forest.remove(first + 1);
        let lhs = forest.remove(first);
        trace!("adjust: linking two roots of degree {} at slot {}", degree, first);
        forest.insert(first, merge_nodes(lhs, rhs));
    }
}

/// Merges two normalized forests into one normalized forest
///
/// Roots are merged by degree, keeping `lhs` roots ahead of `rhs` roots of the
/// same degree, then [`adjust`] resolves the collisions. Both inputs are consumed.
///
/// **Time Complexity**: O(log n)
pub(crate) fn merge_forests<T: Ord>(lhs: Forest<T>, rhs: Forest<T>) -> Forest<T> {
    if rhs.is_empty() {
        return lhs;
    }
    if lhs.is_empty() {
        return rhs;
    }

    let mut merged = Forest::with_capacity(lhs.len() + rhs.len());
    let mut lhs = lhs.into_iter().peekable();
    let mut rhs = rhs.into_iter().peekable();

    loop {
        let from_lhs = match (lhs.peek(), rhs.peek()) {
            (Some(l), Some(r)) => l.degree <= r.degree,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if from_lhs { lhs.next() } else { rhs.next() };
        merged.extend(next);
    }

    adjust(&mut merged);
    merged
}

/// Detaches a node's child chain and returns it as a standalone forest
///
/// The chain is stored highest degree first, so the collected roots are
/// reversed into ascending order. Every returned root has its sibling and
/// parent links cleared.
pub(crate) fn children_as_forest<T>(node: &mut Node<T>) -> Forest<T> {
    let mut children = Forest::with_capacity(node.degree);
    let mut next = node.child.take();

    while let Some(mut child) = next {
        next = child.sibling.take();
        child.parent = None;
        children.push(child);
    }

    node.degree = 0;
    children.reverse();
    children
}

/// Position of the root holding the smallest key, first one on ties
pub(crate) fn min_position<T: Ord>(forest: &[Box<Node<T>>]) -> Option<usize> {
    forest
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.key.cmp(&b.key))
        .map(|(position, _)| position)
}

/// Removes the minimum root from a forest
///
/// Returns the extracted key together with the normalized forest holding every
/// other element, or `None` if the forest is empty.
///
/// **Algorithm**:
/// 1. Scan the roots for the minimum key (the heap order puts it at a root)
/// 2. Take that root out of the forest
/// 3. Turn its children into a forest of B_{k-1}, ..., B₀ trees
/// 4. Merge the children back with the remaining roots
///
/// **Time Complexity**: O(log n)
pub(crate) fn remove_min<T: Ord>(mut forest: Forest<T>) -> Option<(T, Forest<T>)> {
    let position = min_position(&forest)?;
    let mut min = forest.remove(position);

    trace!(
        "remove_min: extracting root of degree {} at slot {}",
        min.degree,
        position
    );

    let children = children_as_forest(&mut min);
    let Node { key, .. } = *min;

    Some((key, merge_forests(children, forest)))
}

/// Releases every node of a forest, returning how many were released
///
/// Uses an explicit worklist instead of recursive drops. A node's child
/// subtree is detached and visited before its sibling, and each node is
/// dropped only after both links have been taken out of it.
pub(crate) fn release<T>(forest: &mut Forest<T>) -> usize {
    let mut pending: Vec<Box<Node<T>>> = forest.drain(..).rev().collect();
    let mut released = 0;

    while let Some(mut node) = pending.pop() {
        if let Some(sibling) = node.sibling.take() {
            pending.push(sibling);
        }
        if let Some(child) = node.child.take() {
            pending.push(child);
        }
        released += 1;
    }

    released
}

/// Checks every structural invariant of a forest holding `len` nodes
pub(crate) fn verify<T: Ord>(forest: &[Box<Node<T>>], len: usize) -> Result<(), InvariantViolation> {
    verify_roots(forest, len)?;
    for root in forest {
        verify_tree(root)?;
    }
    Ok(())
}

/// Checks root ordering and the size correspondence only
///
/// O(log n); cheap enough to run after every operation in debug builds.
pub(crate) fn verify_roots<T>(forest: &[Box<Node<T>>], len: usize) -> Result<(), InvariantViolation> {
    let mut counted = 0usize;

    for (position, root) in forest.iter().enumerate() {
        if let Some(prev) = position.checked_sub(1).map(|p| &forest[p]) {
            if root.degree <= prev.degree {
                return Err(InvariantViolation::DegreeOrder {
                    position,
                    previous: prev.degree,
                    degree: root.degree,
                });
            }
        }
        if root.parent.is_some() {
            return Err(InvariantViolation::ParentLink);
        }
        counted += 1usize << root.degree;
    }

    if counted != len {
        return Err(InvariantViolation::SizeMismatch {
            counted,
            expected: len,
        });
    }
    Ok(())
}

fn verify_tree<T: Ord>(root: &Node<T>) -> Result<(), InvariantViolation> {
    let mut pending = vec![root];

    while let Some(node) = pending.pop() {
        let children: Vec<&Node<T>> = node.children().collect();
        if children.len() != node.degree {
            return Err(InvariantViolation::ChildCount {
                degree: node.degree,
                children: children.len(),
            });
        }

        let owner = NonNull::from(node);
        for (i, child) in children.iter().enumerate() {
            let expected = node.degree - 1 - i;
            if child.degree != expected {
                return Err(InvariantViolation::ChildDegree {
                    expected,
                    found: child.degree,
                });
            }
            if child.key < node.key {
                return Err(InvariantViolation::HeapOrder);
            }
            if child.parent != Some(owner) {
                return Err(InvariantViolation::ParentLink);
            }
        }

        pending.extend(children);
    }

    Ok(())
}
