//! Uniform member access shared by every document element.
//!
//! Every element stores its accepted members in an ordered [`Members`] map.
//! Lookups accept a single member name, a collection index written as
//! decimal text, or a dotted path such as `"data.0.attributes.title"` which
//! is resolved one segment at a time through nested elements.

use std::fmt;

use serde_json::Value;

use crate::error::AccessError;
use crate::types::ElementKind;

/// A member key: a member name or a collection index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Name(String),
    Index(usize),
}

impl Key {
    /// Returns true if a single path segment addresses this key.
    fn matches(&self, segment: &str) -> bool {
        match self {
            Key::Name(name) => name == segment,
            Key::Index(index) => segment.parse::<usize>().ok() == Some(*index),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => f.write_str(name),
            Key::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<usize> for Key {
    fn eq(&self, other: &usize) -> bool {
        matches!(self, Key::Index(index) if index == other)
    }
}

/// A stored member: a raw JSON value or a nested element.
#[derive(Debug)]
pub enum Member {
    Value(Value),
    Node(Box<dyn Accessable>),
}

impl Member {
    /// Returns the string if this member is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Member::Value(value) => value.as_str(),
            Member::Node(_) => None,
        }
    }

    /// Returns the raw JSON value, if this member is not an element.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Member::Value(value) => Some(value),
            Member::Node(_) => None,
        }
    }

    /// Returns the nested element, if this member is one.
    pub fn as_node(&self) -> Option<&dyn Accessable> {
        match self {
            Member::Node(node) => Some(node.as_ref()),
            Member::Value(_) => None,
        }
    }

    /// Returns true if this member is an element built as `kind`.
    pub fn is_kind(&self, kind: ElementKind) -> bool {
        self.as_node()
            .map(|node| node.kind() == kind.as_str())
            .unwrap_or(false)
    }

    /// Resolve `key` inside this member. Raw values have no members.
    pub fn get(&self, key: &str) -> Result<&Member, AccessError> {
        match self {
            Member::Node(node) => node.get(key),
            Member::Value(_) => Err(AccessError::new(key)),
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }
}

impl From<Value> for Member {
    fn from(value: Value) -> Self {
        Member::Value(value)
    }
}

impl From<String> for Member {
    fn from(value: String) -> Self {
        Member::Value(Value::String(value))
    }
}

impl From<Box<dyn Accessable>> for Member {
    fn from(node: Box<dyn Accessable>) -> Self {
        Member::Node(node)
    }
}

/// The JSON shape an element is exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Object,
    Array,
    Null,
}

/// Ordered member storage of a single element.
#[derive(Debug)]
pub struct Members {
    shape: Shape,
    entries: Vec<(Key, Member)>,
}

impl Members {
    pub fn object() -> Self {
        Self::with_shape(Shape::Object)
    }

    pub fn array() -> Self {
        Self::with_shape(Shape::Array)
    }

    pub fn null() -> Self {
        Self::with_shape(Shape::Null)
    }

    fn with_shape(shape: Shape) -> Self {
        Self {
            shape,
            entries: Vec::new(),
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Store a member. A key that is already present keeps its position.
    pub fn insert(&mut self, key: impl Into<Key>, member: impl Into<Member>) {
        let key = key.into();
        let member = member.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = member,
            None => self.entries.push((key, member)),
        }
    }

    /// Append a member at the next collection index.
    pub fn push(&mut self, member: impl Into<Member>) {
        let index = self.entries.len();
        self.entries.push((Key::Index(index), member.into()));
    }

    /// Single-step lookup without path traversal.
    pub fn lookup(&self, segment: &str) -> Option<&Member> {
        self.entries
            .iter()
            .find(|(key, _)| key.matches(segment))
            .map(|(_, member)| member)
    }

    /// Resolve a member name, index or dotted path.
    pub fn get(&self, path: &str) -> Result<&Member, AccessError> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };

        let member = self.lookup(head).ok_or_else(|| AccessError::new(path))?;

        match rest {
            None => Ok(member),
            Some(rest) => member.get(rest).map_err(|_| AccessError::new(path)),
        }
    }

    pub fn has(&self, path: &str) -> bool {
        self.get(path).is_ok()
    }

    pub fn keys(&self) -> Vec<Key> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Member)> {
        self.entries.iter().map(|(key, member)| (key, member))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read access to a constructed document element.
///
/// Implementors only provide their element name and member storage; path
/// resolution is shared.
pub trait Accessable: fmt::Debug + Send + Sync {
    /// The factory name of this element (e.g. `"ResourceItem"`).
    fn kind(&self) -> &str;

    fn members(&self) -> &Members;

    /// Resolve a member name, index or dotted path.
    ///
    /// # Errors
    ///
    /// Returns `AccessError` if any segment of the path is absent.
    fn get(&self, key: &str) -> Result<&Member, AccessError> {
        self.members().get(key)
    }

    /// Returns true if `key` resolves. Never fails.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Top-level keys in the order they were accepted.
    fn keys(&self) -> Vec<Key> {
        self.members().keys()
    }
}

/// Read-only view of the element currently under construction.
///
/// Children use it for sibling checks; it only exposes members the parent
/// has already accepted.
#[derive(Debug, Clone, Copy)]
pub struct Parent<'p> {
    kind: Option<&'p str>,
    members: Option<&'p Members>,
}

impl<'p> Parent<'p> {
    /// The parent of a top-level document.
    pub fn root() -> Self {
        Self {
            kind: None,
            members: None,
        }
    }

    pub fn new(kind: &'p str, members: &'p Members) -> Self {
        Self {
            kind: Some(kind),
            members: Some(members),
        }
    }

    /// The factory name of the parent element, `None` at the root.
    pub fn kind(&self) -> Option<&'p str> {
        self.kind
    }

    pub fn is(&self, kind: ElementKind) -> bool {
        self.kind == Some(kind.as_str())
    }

    pub fn get(&self, path: &str) -> Option<&'p Member> {
        self.members.and_then(|members| members.get(path).ok())
    }

    pub fn has(&self, path: &str) -> bool {
        self.get(path).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Bag {
        members: Members,
    }

    impl Accessable for Bag {
        fn kind(&self) -> &str {
            "Bag"
        }

        fn members(&self) -> &Members {
            &self.members
        }
    }

    fn nested() -> Bag {
        let mut inner = Members::object();
        inner.insert("title", "Rails is Omakase".to_string());
        let mut list = Members::array();
        list.push(Box::new(Bag { members: inner }) as Box<dyn Accessable>);
        let mut outer = Members::object();
        outer.insert("data", Box::new(Bag { members: list }) as Box<dyn Accessable>);
        outer.insert("count", json!(1));
        Bag { members: outer }
    }

    #[test]
    fn dotted_path_resolves_through_nodes() {
        let bag = nested();
        let title = bag.get("data.0.title").unwrap();
        assert_eq!(title.as_str(), Some("Rails is Omakase"));

        let stepwise = bag.get("data").unwrap().get("0").unwrap().get("title").unwrap();
        assert_eq!(stepwise.as_str(), title.as_str());
    }

    #[test]
    fn missing_segment_reports_full_path() {
        let bag = nested();
        let err = bag.get("data.1.title").unwrap_err();
        assert_eq!(err.key, "data.1.title");
        assert!(!bag.has("data.1.title"));
    }

    #[test]
    fn raw_values_cannot_be_traversed() {
        let bag = nested();
        assert!(bag.has("count"));
        assert!(!bag.has("count.value"));
    }

    #[test]
    fn keys_keep_insertion_order() {
        let bag = nested();
        assert_eq!(bag.keys(), ["data", "count"]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut members = Members::object();
        members.insert("a", json!(1));
        members.insert("b", json!(2));
        members.insert("a", json!(3));
        assert_eq!(members.keys(), ["a", "b"]);
        assert_eq!(members.get("a").unwrap().as_value(), Some(&json!(3)));
    }

    #[test]
    fn index_keys_match_numeric_segments() {
        let key = Key::Index(2);
        assert_eq!(key, "2");
        assert_eq!(key, 2usize);
        assert_ne!(key, "two");
        assert_eq!(key.to_string(), "2");
    }

    #[test]
    fn parent_view_sees_accepted_members() {
        let mut members = Members::object();
        members.insert("data", json!(null));
        let parent = Parent::new("Document", &members);
        assert!(parent.is(ElementKind::Document));
        assert!(parent.has("data"));
        assert!(!parent.has("links"));

        let root = Parent::root();
        assert_eq!(root.kind(), None);
        assert!(!root.has("data"));
    }
}
