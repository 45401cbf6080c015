//! Binary search tree backend.
//!
//! An unbalanced BST keyed by lexicographic comparison of the bid id.
//! No rebalancing is performed: sorted-order insertion degrades the
//! tree to a path, and operations degrade from O(log n) to O(n)
//! accordingly. Enumeration is an in-order traversal, so it is always
//! ascending by id.

use std::cmp::Ordering;

use bidstore_core::{Bid, KeyedStore, StoreError};

type Link = Option<Box<TreeNode>>;

struct TreeNode {
    bid: Bid,
    left: Link,
    right: Link,
}

impl TreeNode {
    fn new(bid: Bid) -> Self {
        Self {
            bid,
            left: None,
            right: None,
        }
    }
}

/// Unbalanced binary search tree of bids, keyed by id.
///
/// # Example
///
/// ```rust
/// use bidstore_backends::TreeStore;
/// use bidstore_core::{Bid, KeyedStore};
///
/// let mut tree = TreeStore::new();
/// tree.insert(Bid::new("5", "five", "F", 0.0)).unwrap();
/// tree.insert(Bid::new("3", "three", "F", 0.0)).unwrap();
///
/// let ids: Vec<&str> = tree.enumerate().iter().map(|b| b.id()).collect();
/// assert_eq!(ids, ["3", "5"]);
/// ```
#[derive(Default)]
pub struct TreeStore {
    root: Link,
}

impl TreeStore {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }
}

impl KeyedStore for TreeStore {
    fn insert(&mut self, bid: Bid) -> Result<(), StoreError> {
        if bid.id().is_empty() {
            return Err(StoreError::EmptyId);
        }

        let mut link = &mut self.root;
        loop {
            match link {
                None => {
                    *link = Some(Box::new(TreeNode::new(bid)));
                    return Ok(());
                }
                Some(node) => match bid.id().cmp(node.bid.id()) {
                    Ordering::Less => link = &mut node.left,
                    Ordering::Greater => link = &mut node.right,
                    // Duplicate id: neither overwritten nor duplicated.
                    Ordering::Equal => return Ok(()),
                },
            }
        }
    }

    fn search(&self, id: &str) -> Result<Option<&Bid>, StoreError> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match id.cmp(node.bid.id()) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Ok(Some(&node.bid)),
            }
        }
        Ok(None)
    }

    fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        Ok(remove_node(&mut self.root, id))
    }

    /// In-order traversal with an explicit stack, so a path-shaped
    /// tree cannot overflow the call stack.
    fn enumerate(&self) -> Vec<&Bid> {
        let mut out = Vec::new();
        let mut stack: Vec<&TreeNode> = Vec::new();
        let mut cur = self.root.as_deref();

        loop {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    out.push(&node.bid);
                    cur = node.right.as_deref();
                }
                None => return out,
            }
        }
    }
}

/// Descend to the node holding `id` and unlink it. Returns whether a
/// node was removed. Recursion depth is bounded by the tree height,
/// the same bound the descent itself already pays.
fn remove_node(link: &mut Link, id: &str) -> bool {
    let Some(node) = link else {
        return false;
    };

    match id.cmp(node.bid.id()) {
        Ordering::Less => remove_node(&mut node.left, id),
        Ordering::Greater => remove_node(&mut node.right, id),
        Ordering::Equal => {
            match (node.left.take(), node.right.take()) {
                // Leaf: the subtree becomes empty.
                (None, None) => *link = None,
                // One child: the child subtree takes this node's place.
                (Some(child), None) | (None, Some(child)) => *link = Some(child),
                // Two children: overwrite with the in-order successor
                // (leftmost of the right subtree), then unlink it.
                (Some(left), Some(right)) => {
                    node.left = Some(left);
                    node.right = Some(right);
                    if let Some(successor) = detach_min(&mut node.right) {
                        node.bid = successor;
                    }
                }
            }
            true
        }
    }
}

/// Unlink and return the smallest bid in a non-empty subtree. The
/// detached node's right child takes its place, covering both the
/// immediate-right-child case and the deeper leftmost case.
fn detach_min(link: &mut Link) -> Option<Bid> {
    let mut cur = link;
    while cur.as_ref().is_some_and(|node| node.left.is_some()) {
        cur = &mut cur.as_mut().unwrap().left;
    }

    cur.take().map(|node| {
        let TreeNode { bid, right, .. } = *node;
        *cur = right;
        bid
    })
}

impl Drop for TreeStore {
    /// Iterative teardown: a degraded (path-shaped) tree would blow
    /// the stack under naive recursive drop of the Box chain.
    fn drop(&mut self) {
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
