
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::rc::Rc;

use crate::error::TreeError;
use crate::node::{Color, Node, NodeRef};

/// An ordered set backed by a red-black tree.
///
/// Keys are any `T: Ord`. The tree stores no duplicates and no absent keys;
/// after every successful insert the root is black, no red node has a red
/// child and every root-to-empty path crosses the same number of black nodes,
/// which bounds lookups at O(log n).
///
/// Single threaded: the `Rc`/`RefCell` node graph makes the tree neither
/// `Send` nor `Sync`, so callers serialize access externally.
#[derive(Debug)]
pub struct RBTree<T: Ord> {
    root: Option<NodeRef<T>>,
    size: usize,
}

impl<T: Ord> Default for RBTree<T> {
    fn default() -> RBTree<T> {
        RBTree::new()
    }
}

impl<T: Ord> RBTree<T> {
    pub fn new() -> RBTree<T> {
        RBTree {
            root: None,
            size: 0,
        }
    }

    /// The number of keys stored in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts `key` into the tree, rebalancing as needed.
    ///
    /// An absent key (`None`) is rejected with [`TreeError::InvalidInput`] and
    /// a key already present with [`TreeError::DuplicateKey`]; in both cases
    /// the tree and its size are left untouched.
    pub fn insert(&mut self, key: impl Into<Option<T>>) -> Result<(), TreeError> {
        let key = match key.into() {
            Some(key) => key,
            None => return Err(TreeError::InvalidInput),
        };

        let Some(mut iter) = self.root.as_ref().cloned() else {
            // First key: it becomes the root and is blackened immediately.
            let root = Node::new(key, Color::Black, None, None, None);
            self.root = Some(Rc::new(RefCell::new(root)));
            self.size += 1;
            return Ok(());
        };

        loop {
            let (ordering, next) = {
                let node = iter.borrow();
                match key.cmp(&node.key) {
                    Ordering::Equal => return Err(TreeError::DuplicateKey),
                    Ordering::Less => (Ordering::Less, node.get_left_child()),
                    Ordering::Greater => (Ordering::Greater, node.get_right_child()),
                }
            };
            match next {
                Some(child) => iter = child,
                None => {
                    let new_node = Rc::new(RefCell::new(Node::new(
                        key,
                        Color::Red,
                        None,
                        None,
                        Some(Rc::downgrade(&iter)),
                    )));
                    {
                        let mut leaf = iter.borrow_mut();
                        if ordering == Ordering::Less {
                            leaf.left = Some(Rc::clone(&new_node));
                        } else {
                            leaf.right = Some(Rc::clone(&new_node));
                        }
                    }
                    self.size += 1;
                    self.rebalance_after_insert(new_node)?;
                    break;
                }
            }
        }

        // Invariant of last resort: whatever path rebalancing took, the root
        // ends up black.
        if let Some(root) = self.root.as_ref() {
            root.borrow_mut().update_color(Color::Black);
        }
        Ok(())
    }

    /// Repairs the red-on-red violation introduced by attaching `new_node`
    /// red, walking up the tree until a terminal case is hit.
    fn rebalance_after_insert(&mut self, new_node: NodeRef<T>) -> Result<(), TreeError> {
        let mut curr = new_node;
        loop {
            let parent = match curr.borrow().get_parent() {
                Some(parent) => parent,
                None => break,
            };
            if parent.borrow().get_color() == Color::Black {
                break;
            }
            // A red parent is never the root, so the grandparent must exist.
            let grandparent = parent
                .borrow()
                .get_parent()
                .expect("red node has no parent");

            let parent_is_left = Node::is_left_child(&parent);
            let uncle = if parent_is_left {
                grandparent.borrow().get_right_child()
            } else {
                grandparent.borrow().get_left_child()
            };
            let uncle_is_red = uncle
                .as_ref()
                .map_or(false, |uncle| uncle.borrow().get_color() == Color::Red);

            if uncle_is_red {
                // Red uncle: push the grandparent's blackness down one level
                // and escalate, since the reddened grandparent may now be in
                // violation itself.
                parent.borrow_mut().update_color(Color::Black);
                if let Some(uncle) = uncle {
                    uncle.borrow_mut().update_color(Color::Black);
                }
                grandparent.borrow_mut().update_color(Color::Red);
                curr = grandparent;
                continue;
            }

            if Node::is_left_child(&curr) != parent_is_left {
                // Black uncle, inner child: rotate the violation into the
                // outer shape. The demoted parent carries it into the next
                // step, which is guaranteed to hit the terminal case.
                self.rotate(&curr, &parent)?;
                curr = parent;
                continue;
            }

            // Black uncle, outer child: one rotation resolves the violation,
            // with the promoted node and the demoted grandparent exchanging
            // colors.
            self.rotate(&parent, &grandparent)?;
            parent.borrow_mut().update_color(Color::Black);
            grandparent.borrow_mut().update_color(Color::Red);
            if let Some(root) = self.root.as_ref() {
                root.borrow_mut().parent = None;
            }
            break;
        }

        if let Some(root) = self.root.as_ref() {
            root.borrow_mut().update_color(Color::Black);
        }
        Ok(())
    }

    /// Rotates `child` up over `parent`: a right rotation when `child` sits in
    /// the left slot, a left rotation when it sits in the right slot.
    ///
    /// Colors are untouched; recoloring is the caller's responsibility. A
    /// parent with no children at all is a degenerate near-empty tree and the
    /// call is a no-op. Unrelated nodes signal [`TreeError::UnrelatedNodes`],
    /// which a correct tree never produces.
    fn rotate(&mut self, child: &NodeRef<T>, parent: &NodeRef<T>) -> Result<(), TreeError> {
        let (left, right) = {
            let parent = parent.borrow();
            (parent.get_left_child(), parent.get_right_child())
        };
        if left.is_none() && right.is_none() {
            return Ok(());
        }

        if left.map_or(false, |left| Rc::ptr_eq(&left, child)) {
            self.rotate_right(parent);
        } else if right.map_or(false, |right| Rc::ptr_eq(&right, child)) {
            self.rotate_left(parent);
        } else {
            return Err(TreeError::UnrelatedNodes);
        }
        Ok(())
    }

    fn rotate_left(&mut self, parent_node: &NodeRef<T>) {
        let right_child = parent_node
            .borrow()
            .get_right_child()
            .expect("left rotation without a right child");

        // The promoted node's left subtree crosses over to the demoted side.
        if let Some(crossing) = right_child.borrow().get_left_child() {
            crossing.borrow_mut().parent = Some(Rc::downgrade(parent_node));
            parent_node.borrow_mut().right = Some(crossing);
        } else {
            parent_node.borrow_mut().right = None;
        }

        if let Some(grandparent) = parent_node.borrow().get_parent() {
            right_child.borrow_mut().parent = Some(Rc::downgrade(&grandparent));
            let parent_is_left = grandparent
                .borrow()
                .get_left_child()
                .map_or(false, |left| Rc::ptr_eq(&left, parent_node));
            if parent_is_left {
                grandparent.borrow_mut().left = Some(Rc::clone(&right_child));
            } else {
                grandparent.borrow_mut().right = Some(Rc::clone(&right_child));
            }
        } else {
            right_child.borrow_mut().parent = None;
            self.root = Some(Rc::clone(&right_child));
        }

        right_child.borrow_mut().left = Some(Rc::clone(parent_node));
        parent_node.borrow_mut().parent = Some(Rc::downgrade(&right_child));
    }

    fn rotate_right(&mut self, parent_node: &NodeRef<T>) {
        let left_child = parent_node
            .borrow()
            .get_left_child()
            .expect("right rotation without a left child");

        if let Some(crossing) = left_child.borrow().get_right_child() {
            crossing.borrow_mut().parent = Some(Rc::downgrade(parent_node));
            parent_node.borrow_mut().left = Some(crossing);
        } else {
            parent_node.borrow_mut().left = None;
        }

        if let Some(grandparent) = parent_node.borrow().get_parent() {
            left_child.borrow_mut().parent = Some(Rc::downgrade(&grandparent));
            let parent_is_right = grandparent
                .borrow()
                .get_right_child()
                .map_or(false, |right| Rc::ptr_eq(&right, parent_node));
            if parent_is_right {
                grandparent.borrow_mut().right = Some(Rc::clone(&left_child));
            } else {
                grandparent.borrow_mut().left = Some(Rc::clone(&left_child));
            }
        } else {
            left_child.borrow_mut().parent = None;
            self.root = Some(Rc::clone(&left_child));
        }

        left_child.borrow_mut().right = Some(Rc::clone(parent_node));
        parent_node.borrow_mut().parent = Some(Rc::downgrade(&left_child));
    }

    /// Whether `key` is stored in the tree. Pure read; an absent key (`None`)
    /// is rejected with [`TreeError::InvalidInput`].
    pub fn contains<'a>(&self, key: impl Into<Option<&'a T>>) -> Result<bool, TreeError>
    where
        T: 'a,
    {
        let key = match key.into() {
            Some(key) => key,
            None => return Err(TreeError::InvalidInput),
        };

        let mut iter = self.root.as_ref().cloned();
        while let Some(node) = iter {
            let node = node.borrow();
            iter = match key.cmp(&node.key) {
                Ordering::Equal => return Ok(true),
                Ordering::Less => node.get_left_child(),
                Ordering::Greater => node.get_right_child(),
            };
        }
        Ok(false)
    }

    /// Starts a fresh in-order (ascending) walk over all keys. Traversals are
    /// independent of each other and lazy.
    pub fn iter(&self) -> InOrder<T> {
        InOrder {
            stack: Vec::new(),
            current: self.root.as_ref().cloned(),
        }
    }
}

impl<T: Ord + Clone + Display> Display for RBTree<T> {
    /// In-order bracketed rendering of all keys. Debug aid, not a stable
    /// serialization format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<String> = self.iter().map(|key| key.to_string()).collect();
        write!(f, "[ {} ]", keys.join(", "))
    }
}

/// Stack-based in-order walk: ancestors are pushed while descending left, then
/// popped and yielded before the walk enters their right subtree.
pub struct InOrder<T> {
    stack: Vec<NodeRef<T>>,
    current: Option<NodeRef<T>>,
}

impl<T: Clone> InOrder<T> {
    /// Like [`Iterator::next`], but reports exhaustion as an error.
    pub fn try_next(&mut self) -> Result<T, TreeError> {
        self.next().ok_or(TreeError::IteratorExhausted)
    }
}

impl<T: Clone> Iterator for InOrder<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while let Some(node) = self.current.take() {
            self.current = node.borrow().get_left_child();
            self.stack.push(node);
        }
        let processed = self.stack.pop()?;
        self.current = processed.borrow().get_right_child();
        let key = processed.borrow().key.clone();
        Some(key)
    }
}
