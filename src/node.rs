#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_color_update() {
        let mut node = Node::new(5, Color::Red, None, None, None);
        node.update_color(Color::Black);
        assert_eq!(Color::Black, node.get_color());
    }

    #[test]
    fn test_get_left_child() {
        let node_1 = Node::new(1, Color::Red, None, None, None);
        let node_1_rc = Rc::new(RefCell::new(node_1));
        let node_2 = Node::new(2, Color::Red, Some(Rc::clone(&node_1_rc)), None, None);

        assert!(Rc::ptr_eq(&node_1_rc, &node_2.get_left_child().unwrap()))
    }

    #[test]
    fn test_get_right_child() {
        let node_1 = Node::new(3, Color::Red, None, None, None);
        let node_1_rc = Rc::new(RefCell::new(node_1));
        let node_2 = Node::new(2, Color::Red, None, Some(Rc::clone(&node_1_rc)), None);

        assert!(Rc::ptr_eq(&node_1_rc, &node_2.get_right_child().unwrap()))
    }

    #[test]
    fn test_get_parent() {
        let node_1 = Node::new(2, Color::Black, None, None, None);
        let node_1_rc = Rc::new(RefCell::new(node_1));
        let node_2 = Node::new(1, Color::Red, None, None, Some(Rc::downgrade(&node_1_rc)));

        assert!(Rc::ptr_eq(&node_1_rc, &node_2.get_parent().unwrap()))
    }

    // Builds the three-node tree
    //       2
    //      / \
    //     1   3
    // and returns the (root, left, right) handles.
    fn three_nodes() -> (NodeRef<i32>, NodeRef<i32>, NodeRef<i32>) {
        let root = Rc::new(RefCell::new(Node::new(2, Color::Black, None, None, None)));
        let left = Rc::new(RefCell::new(Node::new(
            1,
            Color::Red,
            None,
            None,
            Some(Rc::downgrade(&root)),
        )));
        let right = Rc::new(RefCell::new(Node::new(
            3,
            Color::Red,
            None,
            None,
            Some(Rc::downgrade(&root)),
        )));
        root.borrow_mut().left = Some(Rc::clone(&left));
        root.borrow_mut().right = Some(Rc::clone(&right));
        (root, left, right)
    }

    #[test]
    fn test_is_left_child() {
        let (root, left, right) = three_nodes();

        assert!(!Node::is_left_child(&root));
        assert!(Node::is_left_child(&left));
        assert!(!Node::is_left_child(&right));
    }

    #[test]
    fn test_render_level_order_single_node() {
        let node = Rc::new(RefCell::new(Node::new(7, Color::Black, None, None, None)));
        assert_eq!(Node::render_level_order(&node), "[7]");
    }

    #[test]
    fn test_render_level_order_enqueues_left_then_right() {
        let (root, left, _right) = three_nodes();
        let grandchild = Rc::new(RefCell::new(Node::new(
            0,
            Color::Black,
            None,
            None,
            Some(Rc::downgrade(&left)),
        )));
        left.borrow_mut().left = Some(grandchild);

        assert_eq!(Node::render_level_order(&root), "[2, 1, 3, 0]");
        // Rendering a subtree only lists keys reachable from it.
        assert_eq!(Node::render_level_order(&left), "[1, 0]");
    }
}

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt::Display;
use std::rc::{Rc, Weak};

/// Shared handle to a tree cell. The tree owns its node graph through these
/// handles; parent links are weak and never keep a node alive.
pub type NodeRef<T> = Rc<RefCell<Node<T>>>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// A single cell of the tree: a key, a color flag and the three relationship
/// pointers. Carries no balancing logic of its own; [`RBTree`](crate::RBTree)
/// performs all structural mutation.
#[derive(Debug)]
pub struct Node<T> {
    pub key: T,
    color: Color,
    pub left: Option<NodeRef<T>>,
    pub right: Option<NodeRef<T>>,
    pub parent: Option<Weak<RefCell<Node<T>>>>,
}

impl<T> Node<T> {
    pub fn new(
        key: T,
        color: Color,
        left: Option<NodeRef<T>>,
        right: Option<NodeRef<T>>,
        parent: Option<Weak<RefCell<Node<T>>>>,
    ) -> Node<T> {
        Node {
            key,
            color,
            left,
            right,
            parent,
        }
    }

    pub fn get_color(&self) -> Color {
        self.color
    }

    pub fn update_color(&mut self, new_color: Color) {
        self.color = new_color;
    }

    pub fn get_left_child(&self) -> Option<NodeRef<T>> {
        self.left.as_ref().map(Rc::clone)
    }

    pub fn get_right_child(&self) -> Option<NodeRef<T>> {
        self.right.as_ref().map(Rc::clone)
    }

    pub fn get_parent(&self) -> Option<NodeRef<T>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    /// True when this node has a parent and sits in that parent's left slot.
    /// False for the root and for right children. Identity, not key equality.
    pub fn is_left_child(this: &NodeRef<T>) -> bool {
        match this.borrow().get_parent() {
            Some(parent) => match parent.borrow().get_left_child() {
                Some(left) => Rc::ptr_eq(&left, this),
                None => false,
            },
            None => false,
        }
    }
}

impl<T: Display> Node<T> {
    /// Breadth-first, comma separated bracketed listing of the keys rooted at
    /// `this`, enqueuing left then right children. Debugging/test aid only.
    pub fn render_level_order(this: &NodeRef<T>) -> String {
        let mut output = String::from("[");
        let mut queue: VecDeque<NodeRef<T>> = VecDeque::new();
        queue.push_back(Rc::clone(this));

        while let Some(next) = queue.pop_front() {
            let next = next.borrow();
            if let Some(left) = next.get_left_child() {
                queue.push_back(left);
            }
            if let Some(right) = next.get_right_child() {
                queue.push_back(right);
            }
            output.push_str(&next.key.to_string());
            if !queue.is_empty() {
                output.push_str(", ");
            }
        }
        output.push(']');
        output
    }
}
