//! A doubly linked list that flattens all its nodes onto a Vec for storage,
//! gaining data locality and O(1) removal of any node you hold a handle to.

/// Alias for the index of a node in the linked list's storage vec.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeHandle(usize);

/// A node that lives in a linked list.
#[derive(Clone, Debug)]
struct Node<T> {
    /// The value being stored. Vacant slots waiting on the freelist hold
    /// `None`.
    value: Option<T>,

    /// The index of the node previous to this one.
    prev: NodeHandle,

    /// The index of the next node in the list.
    next: NodeHandle,
}

/// A circular list kept in a single contiguous Vec of nodes, which are
/// addressed by their position in the Vec. Removed slots go on a freelist and
/// get reused by later pushes, so handles stay valid for as long as their node
/// is in the list. The tail is always `head.prev`.
#[derive(Clone, Debug)]
pub(crate) struct LinkedList<T> {
    /// The nodes in the list.
    store: Vec<Node<T>>,

    /// Entries in the list which aren't in use anymore. These will be reused.
    free: Vec<NodeHandle>,

    /// The first node in the list.
    head: Option<NodeHandle>,
}

impl<T> LinkedList<T> {
    /// Creates a new linked list with a specific capacity.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
        }
    }

    /// The length of this linked list.
    pub(crate) fn len(&self) -> usize {
        self.store.len() - self.free.len()
    }

    /// Gets an element from the list.
    pub(crate) fn get(&self, node: NodeHandle) -> Option<&T> {
        self.store.get(node.0).and_then(|node| node.value.as_ref())
    }

    /// Gets a mutable reference to an element in the list.
    pub(crate) fn get_mut(&mut self, node: NodeHandle) -> Option<&mut T> {
        self.store.get_mut(node.0).and_then(|node| node.value.as_mut())
    }

    /// Pushes t onto the back of the list and returns a handle to the node.
    pub(crate) fn push_back(&mut self, t: T) -> NodeHandle {
        // use the first available location in the storage vec, or infer what
        // the next location will be on push.
        let idx = self
            .free
            .pop()
            .unwrap_or_else(|| NodeHandle(self.store.len()));

        let mut n = Node {
            value: Some(t),
            prev: idx,
            next: idx,
        };

        match self.head {
            Some(head) => {
                // slot in between the current tail and the head
                n.prev = self.store[head.0].prev;
                n.next = head;

                self.store[n.prev.0].next = idx;
                self.store[head.0].prev = idx;
            }
            None => self.head = Some(idx),
        }

        if self.store.len() <= idx.0 {
            self.store.push(n);
        } else {
            self.store[idx.0] = n;
        }

        idx
    }

    /// Remove an arbitrary node from the list, returning its value. Handles to
    /// vacant slots return `None`.
    pub(crate) fn remove_node(&mut self, node: NodeHandle) -> Option<T> {
        let value = self.store.get_mut(node.0)?.value.take()?;

        if self.len() == 1 {
            // just reset head and freelist the node
            self.head = None;
        } else {
            let prev = self.store[node.0].prev;
            let next = self.store[node.0].next;

            if self.head == Some(node) {
                self.head = Some(next);
            }

            // link prev to next and next to prev so node doesn't exist in the
            // chain anymore; it'll get overwritten at some later push by
            // placing its handle on the freelist
            self.store[prev.0].next = next;
            self.store[next.0].prev = prev;
        }

        self.free.push(node);

        Some(value)
    }

    /// The first element of the list.
    pub(crate) fn front(&self) -> Option<&T> {
        self.head.and_then(|head| self.get(head))
    }

    /// The last element of the list.
    pub(crate) fn back(&self) -> Option<&T> {
        self.head.and_then(|head| self.get(self.store[head.0].prev))
    }

    /// Walks the list from head to tail.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len(),
        }
    }
}

pub(crate) struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<NodeHandle>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // the list is circular, so count down instead of looking for the end
        if self.remaining == 0 {
            return None;
        }

        let node = &self.list.store[self.cursor?.0];
        self.remaining -= 1;
        self.cursor = Some(node.next);
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
