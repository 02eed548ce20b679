use super::Contact;

/// Position of a node inside a [`ContactList`] arena.
pub type NodeId = usize;

#[derive(Debug)]
struct Node {
    contact: Contact,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Insertion-ordered doubly-linked list of contacts.
///
/// Nodes live in a `Vec` and link to each other by index. Nothing is ever
/// unlinked, so a `NodeId` handed out by [`ContactList::push_back`] stays
/// valid for the life of the list.
#[derive(Debug, Default)]
pub struct ContactList {
    nodes: Vec<Node>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl ContactList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `contact` at the tail in O(1) and returns its node id.
    pub fn push_back(&mut self, contact: Contact) -> NodeId {
        let id = self.nodes.len();

        self.nodes.push(Node {
            contact,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);

        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Contact> {
        self.nodes.get(id).map(|node| &node.contact)
    }

    pub fn front(&self) -> Option<&Contact> {
        self.head.and_then(|id| self.get(id))
    }

    pub fn back(&self) -> Option<&Contact> {
        self.tail.and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks the list head to tail. Use `.rev()` to walk tail to head.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }
}

impl<'a> IntoIterator for &'a ContactList {
    type Item = &'a Contact;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor pair over a [`ContactList`], following `next` links from the
/// front and `prev` links from the back until the two meet.
pub struct Iter<'a> {
    list: &'a ContactList,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.contact)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.contact)
    }
}

impl ExactSizeIterator for Iter<'_> {}
