//! The JSON value tree.
//!
//! A [`JsonValue`] owns everything reachable through it; dropping a value
//! drops the whole subtree. Inserting a value into a container moves it in,
//! so ownership transfer is enforced by the compiler rather than by
//! convention.

use std::fmt;

/// Decoded string payload of a JSON string or object key.
///
/// Holds raw bytes rather than a `String`: the escape codec appends literal
/// bytes verbatim without re-validating them, so a payload parsed from
/// damaged input may contain malformed UTF-8. The printer substitutes
/// U+FFFD for such bytes on output. Comparison and lookup are byte-wise.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct JsonString(Vec<u8>);

impl JsonString {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The payload as `&str`, or `None` when it is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for JsonString {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for JsonString {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&[u8]> for JsonString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for JsonString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for JsonString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// Type tag of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

/// Ordered key/value members of a JSON object.
///
/// Insertion order is preserved for iteration and printing; this is a
/// contract, not an accident of representation. Keys are unique: inserting
/// an existing key replaces its value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonObject {
    members: Vec<(JsonString, JsonValue)>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Inserts a member, taking ownership of `value`.
    ///
    /// Upsert semantics: an existing key keeps its position and has its
    /// value replaced (the old value is dropped); a fresh key is appended.
    pub fn insert(&mut self, key: impl Into<JsonString>, value: JsonValue) {
        let key = key.into();
        match self.members.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.members.push((key, value)),
        }
    }

    /// Removes the member with `key`. Returns `false` when the key is absent.
    pub fn remove(&mut self, key: impl AsRef<[u8]>) -> bool {
        let key = key.as_ref();
        match self.members.iter().position(|(k, _)| k.as_bytes() == key) {
            Some(i) => {
                self.members.remove(i);
                true
            }
            None => false,
        }
    }

    /// Looks up a member value by exact byte-wise key match.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&JsonValue> {
        let key = key.as_ref();
        self.members
            .iter()
            .find(|(k, _)| k.as_bytes() == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: impl AsRef<[u8]>) -> Option<&mut JsonValue> {
        let key = key.as_ref();
        self.members
            .iter_mut()
            .find(|(k, _)| k.as_bytes() == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&JsonString, &JsonValue)> {
        self.members.iter().map(|(k, v)| (k, v))
    }
}

/// Ordered, growable sequence of owned JSON values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonArray {
    items: Vec<JsonValue>,
}

impl JsonArray {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a value, taking ownership.
    pub fn push(&mut self, value: JsonValue) {
        self.items.push(value);
    }

    /// Removes the element at `index`, shifting later elements down by one.
    /// Returns `false` without modifying the array when `index` is out of
    /// range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    pub fn get(&self, index: usize) -> Option<&JsonValue> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut JsonValue> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &JsonValue> {
        self.items.iter()
    }
}

/// A single JSON datum: object, array, string, number, boolean, or null.
///
/// The active variant never changes after construction; mutation happens
/// only through the container operations on [`JsonObject`] and [`JsonArray`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    Object(JsonObject),
    Array(JsonArray),
    String(JsonString),
    Number(f64),
    Bool(bool),
    #[default]
    Null,
}

impl JsonValue {
    pub fn new_object() -> Self {
        JsonValue::Object(JsonObject::new())
    }

    pub fn new_array() -> Self {
        JsonValue::Array(JsonArray::new())
    }

    pub fn kind(&self) -> JsonKind {
        match self {
            JsonValue::Object(_) => JsonKind::Object,
            JsonValue::Array(_) => JsonKind::Array,
            JsonValue::String(_) => JsonKind::String,
            JsonValue::Number(_) => JsonKind::Number,
            JsonValue::Bool(_) => JsonKind::Boolean,
            JsonValue::Null => JsonKind::Null,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut JsonArray> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&JsonString> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The string payload as `&str`; `None` for non-strings and for
    /// payloads that are not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_string().and_then(JsonString::as_str)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Looks up an object member by key. `None` for non-objects.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&JsonValue> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Looks up an array element by index. `None` for non-arrays.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        self.as_array().and_then(|a| a.get(index))
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<f64> for JsonValue {
    fn from(n: f64) -> Self {
        JsonValue::Number(n)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.into())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s.into())
    }
}

impl From<JsonString> for JsonValue {
    fn from(s: JsonString) -> Self {
        JsonValue::String(s)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(o: JsonObject) -> Self {
        JsonValue::Object(o)
    }
}

impl From<JsonArray> for JsonValue {
    fn from(a: JsonArray) -> Self {
        JsonValue::Array(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(JsonValue::new_object().kind(), JsonKind::Object);
        assert_eq!(JsonValue::new_array().kind(), JsonKind::Array);
        assert_eq!(JsonValue::from("x").kind(), JsonKind::String);
        assert_eq!(JsonValue::from(1.0).kind(), JsonKind::Number);
        assert_eq!(JsonValue::from(true).kind(), JsonKind::Boolean);
        assert_eq!(JsonValue::Null.kind(), JsonKind::Null);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(JsonValue::from(true).as_bool(), Some(true));
        assert_eq!(JsonValue::from(42.0).as_f64(), Some(42.0));
        assert_eq!(JsonValue::from("test").as_str(), Some("test"));
        assert_eq!(JsonValue::Null.as_bool(), None);
        assert_eq!(JsonValue::from("test").as_f64(), None);
    }

    #[test]
    fn test_object_insert_fresh_key_grows() {
        let mut object = JsonObject::new();
        object.insert("a", JsonValue::from(1.0));
        assert_eq!(object.len(), 1);
        object.insert("b", JsonValue::from(2.0));
        assert_eq!(object.len(), 2);
    }

    #[test]
    fn test_object_upsert_replaces_in_place() {
        let mut object = JsonObject::new();
        object.insert("a", JsonValue::from(1.0));
        object.insert("b", JsonValue::from(2.0));
        object.insert("a", JsonValue::from(3.0));

        assert_eq!(object.len(), 2);
        assert_eq!(object.get("a").and_then(JsonValue::as_f64), Some(3.0));
        // The replaced key keeps its original position.
        let keys: Vec<&str> = object.iter().filter_map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn test_object_remove() {
        let mut object = JsonObject::new();
        object.insert("a", JsonValue::Null);
        assert!(object.remove("a"));
        assert!(!object.remove("a"));
        assert_eq!(object.len(), 0);
        assert_eq!(object.get("a"), None);
    }

    #[test]
    fn test_object_lookup_is_bytewise() {
        let mut object = JsonObject::new();
        object.insert("clé", JsonValue::from(1.0));
        assert!(object.get("clé").is_some());
        assert!(object.get("cle").is_none());
    }

    #[test]
    fn test_array_push_and_get() {
        let mut array = JsonArray::new();
        array.push(JsonValue::from(1.0));
        array.push(JsonValue::from("two"));
        assert_eq!(array.len(), 2);
        assert_eq!(array.get(1).and_then(JsonValue::as_str), Some("two"));
        assert_eq!(array.get(2), None);
    }

    #[test]
    fn test_array_remove_shifts() {
        let mut array = JsonArray::new();
        for n in [1.0, 2.0, 3.0] {
            array.push(JsonValue::from(n));
        }
        assert!(array.remove(1));
        assert_eq!(array.len(), 2);
        assert_eq!(array.get(0).and_then(JsonValue::as_f64), Some(1.0));
        assert_eq!(array.get(1).and_then(JsonValue::as_f64), Some(3.0));
    }

    #[test]
    fn test_array_remove_out_of_range() {
        let mut array = JsonArray::new();
        array.push(JsonValue::Null);
        assert!(!array.remove(1));
        assert_eq!(array.len(), 1);
    }

    #[test]
    fn test_value_passthroughs() {
        let mut object = JsonObject::new();
        let mut inner = JsonArray::new();
        inner.push(JsonValue::from(true));
        object.insert("arr", inner.into());
        let value = JsonValue::from(object);

        assert_eq!(
            value.get("arr").and_then(|a| a.get_index(0)),
            Some(&JsonValue::Bool(true))
        );
        assert_eq!(value.get("missing"), None);
        assert_eq!(value.get_index(0), None);
    }

    #[test]
    fn test_json_string_invalid_utf8() {
        let s = JsonString::from(vec![0x61, 0xFF, 0x62]);
        assert_eq!(s.as_str(), None);
        assert_eq!(s.as_bytes(), &[0x61, 0xFF, 0x62]);
    }
}
