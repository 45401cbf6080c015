//! Singly linked list backend.
//!
//! Nodes live in an index arena (`Vec` of slots plus a free list)
//! rather than behind owned pointers - that keeps the tail link a
//! plain index, giving O(1) append and prepend without aliasing the
//! node chain. Search and delete are linear scans; enumeration is
//! insertion order for append-only use.

use bidstore_core::{Bid, KeyedStore, StoreError};

struct ListNode {
    bid: Bid,
    next: Option<usize>,
}

/// Singly linked list of bids with tracked head, tail, and count.
///
/// # Example
///
/// ```rust
/// use bidstore_backends::ListStore;
/// use bidstore_core::{Bid, KeyedStore};
///
/// let mut list = ListStore::new();
/// list.append(Bid::new("2", "second", "F", 0.0)).unwrap();
/// list.prepend(Bid::new("1", "first", "F", 0.0)).unwrap();
/// assert_eq!(list.len(), 2);
///
/// let ids: Vec<&str> = list.enumerate().iter().map(|b| b.id()).collect();
/// assert_eq!(ids, ["1", "2"]);
/// ```
#[derive(Default)]
pub struct ListStore {
    nodes: Vec<ListNode>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl ListStore {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live bids. O(1) via the running count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no bids.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add a bid at the end of the list. O(1) via the tail index.
    pub fn append(&mut self, bid: Bid) -> Result<(), StoreError> {
        let slot = self.alloc(bid)?;
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(slot),
            // First element is both head and tail.
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
        Ok(())
    }

    /// Add a bid at the start of the list. O(1).
    pub fn prepend(&mut self, bid: Bid) -> Result<(), StoreError> {
        let slot = self.alloc(bid)?;
        match self.head {
            Some(head) => self.nodes[slot].next = Some(head),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
        Ok(())
    }

    /// Claim a slot for the bid, reusing a freed one when available.
    fn alloc(&mut self, bid: Bid) -> Result<usize, StoreError> {
        if bid.id().is_empty() {
            return Err(StoreError::EmptyId);
        }
        let node = ListNode { bid, next: None };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                Ok(slot)
            }
            None => {
                self.nodes.push(node);
                Ok(self.nodes.len() - 1)
            }
        }
    }
}

impl KeyedStore for ListStore {
    /// Insert appends; the menu's bulk load preserves file order.
    fn insert(&mut self, bid: Bid) -> Result<(), StoreError> {
        self.append(bid)
    }

    fn search(&self, id: &str) -> Result<Option<&Bid>, StoreError> {
        let mut cur = self.head;
        while let Some(slot) = cur {
            let node = &self.nodes[slot];
            if node.bid.id() == id {
                return Ok(Some(&node.bid));
            }
            cur = node.next;
        }
        Ok(None)
    }

    fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut prev: Option<usize> = None;
        let mut cur = self.head;

        while let Some(slot) = cur {
            let next = self.nodes[slot].next;
            if self.nodes[slot].bid.id() == id {
                match prev {
                    // Interior or tail node: link predecessor to successor.
                    Some(prev_slot) => self.nodes[prev_slot].next = next,
                    // Head node: the successor becomes the head.
                    None => self.head = next,
                }
                if self.tail == Some(slot) {
                    self.tail = prev;
                }
                self.free.push(slot);
                self.len -= 1;
                // First match only: id is treated as unique.
                return Ok(true);
            }
            prev = cur;
            cur = next;
        }
        Ok(false)
    }

    fn enumerate(&self) -> Vec<&Bid> {
        let mut out = Vec::with_capacity(self.len);
        let mut cur = self.head;
        while let Some(slot) = cur {
            let node = &self.nodes[slot];
            out.push(&node.bid);
            cur = node.next;
        }
        out
    }
}
