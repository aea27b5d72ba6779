use std::cmp::Ordering;

use glossa_types::{DeleteOutcome, Entry, InsertOutcome};

use crate::error::InvariantViolation;
use crate::iter::Iter;

pub(crate) type Link = Option<Box<Node>>;

pub(crate) struct Node {
    pub(crate) entry: Entry,
    pub(crate) left: Link,
    pub(crate) right: Link,
    height: u32,
}

impl Node {
    fn leaf(word: &str, translation: &str) -> Box<Self> {
        Box::new(Self {
            entry: Entry::new(word, translation),
            left: None,
            right: None,
            height: 1,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// height(left) - height(right)
    fn balance(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }
}

fn height(link: &Link) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

fn balance_of(link: &Link) -> i32 {
    link.as_ref().map_or(0, |node| node.balance())
}

/// Ordered word -> translation map kept AVL-balanced.
///
/// Keys compare ordinally (`str::cmp`), so `"Cat"` and `"cat"` are distinct
/// words. Every mutation leaves the tree balanced, which keeps `insert`,
/// `search` and `delete` logarithmic in the number of entries.
#[derive(Default)]
pub struct BalancedIndex {
    root: Link,
    len: usize,
}

impl BalancedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree, 0 when empty
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Insert a new word.
    ///
    /// An existing word is left untouched: its translation is not replaced
    /// and [`InsertOutcome::AlreadyPresent`] is returned.
    pub fn insert(&mut self, word: &str, translation: &str) -> InsertOutcome {
        let outcome = insert_at(&mut self.root, word, translation);
        if outcome.is_inserted() {
            self.len += 1;
        }
        outcome
    }

    /// Look up a word by exact match
    pub fn search(&self, word: &str) -> Option<&Entry> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match word.cmp(node.entry.word.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.entry),
            };
        }
        None
    }

    /// Translation of a word, if present
    pub fn get(&self, word: &str) -> Option<&str> {
        self.search(word).map(|entry| entry.translation.as_str())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.search(word).is_some()
    }

    /// Remove a word.
    ///
    /// A node with two children takes over the entry of its in-order
    /// successor, and the successor's node is unlinked from the right subtree.
    pub fn delete(&mut self, word: &str) -> DeleteOutcome {
        let outcome = delete_at(&mut self.root, word);
        if outcome.is_deleted() {
            self.len -= 1;
        }
        outcome
    }

    /// Entries in ascending word order
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Verify ordering, balance, cached heights and the stored length.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let (_, count) = check_subtree(&self.root, None, None)?;
        if count != self.len {
            return Err(InvariantViolation::LengthMismatch {
                stored: self.len,
                counted: count,
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a BalancedIndex {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<W: AsRef<str>, T: AsRef<str>> Extend<(W, T)> for BalancedIndex {
    fn extend<I: IntoIterator<Item = (W, T)>>(&mut self, iter: I) {
        for (word, translation) in iter {
            self.insert(word.as_ref(), translation.as_ref());
        }
    }
}

impl<W: AsRef<str>, T: AsRef<str>> FromIterator<(W, T)> for BalancedIndex {
    fn from_iter<I: IntoIterator<Item = (W, T)>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl std::fmt::Debug for BalancedIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|e| (&e.word, &e.translation)))
            .finish()
    }
}

fn insert_at(slot: &mut Link, word: &str, translation: &str) -> InsertOutcome {
    let Some(node) = slot.as_mut() else {
        *slot = Some(Node::leaf(word, translation));
        return InsertOutcome::Inserted;
    };

    let outcome = match word.cmp(node.entry.word.as_str()) {
        Ordering::Less => insert_at(&mut node.left, word, translation),
        Ordering::Greater => insert_at(&mut node.right, word, translation),
        Ordering::Equal => return InsertOutcome::AlreadyPresent,
    };

    if outcome.is_inserted()
        && let Some(node) = slot.take()
    {
        *slot = Some(rebalance_after_insert(node, word));
    }
    outcome
}

/// Restore balance on the path of a fresh insert. The new key against the
/// heavy child's key tells the outer (single rotation) case from the inner
/// (double rotation) one.
fn rebalance_after_insert(mut node: Box<Node>, word: &str) -> Box<Node> {
    node.update_height();
    let balance = node.balance();

    if balance > 1 {
        let Some(left) = node.left.as_ref() else {
            return node;
        };
        return match word.cmp(left.entry.word.as_str()) {
            Ordering::Less => rotate_right(node),
            Ordering::Greater => {
                node.left = node.left.take().map(rotate_left);
                rotate_right(node)
            }
            Ordering::Equal => node,
        };
    }

    if balance < -1 {
        let Some(right) = node.right.as_ref() else {
            return node;
        };
        return match word.cmp(right.entry.word.as_str()) {
            Ordering::Greater => rotate_left(node),
            Ordering::Less => {
                node.right = node.right.take().map(rotate_right);
                rotate_left(node)
            }
            Ordering::Equal => node,
        };
    }

    node
}

fn delete_at(slot: &mut Link, word: &str) -> DeleteOutcome {
    let Some(node) = slot.as_mut() else {
        return DeleteOutcome::NotFound;
    };

    match word.cmp(node.entry.word.as_str()) {
        Ordering::Less => {
            if delete_at(&mut node.left, word) == DeleteOutcome::NotFound {
                return DeleteOutcome::NotFound;
            }
        }
        Ordering::Greater => {
            if delete_at(&mut node.right, word) == DeleteOutcome::NotFound {
                return DeleteOutcome::NotFound;
            }
        }
        Ordering::Equal => {
            if node.left.is_some() && node.right.is_some() {
                if let Some(successor) = detach_min(&mut node.right) {
                    node.entry = successor;
                }
            } else {
                // Zero or one child: the child (already balanced) takes the slot
                *slot = slot
                    .take()
                    .and_then(|mut removed| removed.left.take().or_else(|| removed.right.take()));
                return DeleteOutcome::Deleted;
            }
        }
    }

    rebalance_slot(slot);
    DeleteOutcome::Deleted
}

/// Unlink the minimum node of a subtree and hand back its entry
fn detach_min(slot: &mut Link) -> Option<Entry> {
    let node = slot.as_mut()?;
    if node.left.is_some() {
        let entry = detach_min(&mut node.left);
        rebalance_slot(slot);
        return entry;
    }

    let mut min = slot.take()?;
    *slot = min.right.take();
    Some(min.entry)
}

fn rebalance_slot(slot: &mut Link) {
    if let Some(node) = slot.take() {
        *slot = Some(rebalance(node));
    }
}

/// Restore balance after a removal. No new key exists here, so the heavy
/// child's own balance factor picks single versus double rotation.
fn rebalance(mut node: Box<Node>) -> Box<Node> {
    node.update_height();
    let balance = node.balance();

    if balance > 1 {
        if balance_of(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        if balance_of(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

//       y            x
//      / \          / \
//     x   C   =>   A   y
//    / \              / \
//   A   B            B   C
fn rotate_right(mut y: Box<Node>) -> Box<Node> {
    let Some(mut x) = y.left.take() else {
        unreachable!("right rotation on a node without a left child");
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    let Some(mut y) = x.right.take() else {
        unreachable!("left rotation on a node without a right child");
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Returns (height, node count) of a valid subtree
fn check_subtree(
    link: &Link,
    lower: Option<&str>,
    upper: Option<&str>,
) -> Result<(u32, usize), InvariantViolation> {
    let Some(node) = link else {
        return Ok((0, 0));
    };
    let word = node.entry.word.as_str();

    if lower.is_some_and(|bound| word <= bound) || upper.is_some_and(|bound| word >= bound) {
        return Err(InvariantViolation::Order {
            word: word.to_string(),
        });
    }

    let (left_height, left_count) = check_subtree(&node.left, lower, Some(word))?;
    let (right_height, right_count) = check_subtree(&node.right, Some(word), upper)?;

    let expected = 1 + left_height.max(right_height);
    if node.height != expected {
        return Err(InvariantViolation::StaleHeight {
            word: word.to_string(),
            cached: node.height,
            actual: expected,
        });
    }

    let balance = left_height as i32 - right_height as i32;
    if balance.abs() > 1 {
        return Err(InvariantViolation::Unbalanced {
            word: word.to_string(),
            balance,
        });
    }

    Ok((expected, left_count + right_count + 1))
}
