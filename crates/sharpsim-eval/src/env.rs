//! Symbol table for one run.
//!
//! Three flat namespaces: scalar bindings, pseudo-objects and pseudo-arrays.
//! There is no block scoping; a name lives until the run ends.

use sharpsim_types::{Value, NULL_TEXT};
use std::collections::BTreeMap;

/// Stand-in for a constructed object: a class name and whatever fields
/// later lines assign.
#[derive(Debug, Clone, PartialEq)]
pub struct PseudoObject {
    pub class_name: String,
    pub fields: BTreeMap<String, Value>,
}

impl PseudoObject {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }

    /// How the object refers to itself: its `name` field, else its class.
    pub fn label(&self) -> String {
        match self.field("name") {
            Some(name) => name.to_string(),
            None => self.class_name.clone(),
        }
    }
}

/// Stand-in for a fixed-size array. Slots start unset.
#[derive(Debug, Clone, PartialEq)]
pub struct PseudoArray {
    items: Vec<Option<Value>>,
}

impl PseudoArray {
    /// An array of `len` unset slots.
    pub fn with_len(len: usize) -> Self {
        Self {
            items: vec![None; len],
        }
    }

    /// An array whose slots are all set, in order.
    pub fn from_values(values: Vec<Value>) -> Self {
        Self {
            items: values.into_iter().map(Some).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read slot `index`. An unset slot reads as the text `null`;
    /// out of range gives `None`.
    pub fn read(&self, index: usize) -> Option<Value> {
        let slot = self.items.get(index)?;
        Some(slot.clone().unwrap_or_else(|| Value::from(NULL_TEXT)))
    }

    /// Write slot `index`. Returns `false` if the index is out of range.
    pub fn write(&mut self, index: usize, value: Value) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = Some(value);
                true
            }
            None => false,
        }
    }
}

/// All named state of one run.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    bindings: BTreeMap<String, Value>,
    objects: BTreeMap<String, PseudoObject>,
    arrays: BTreeMap<String, PseudoArray>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Bindings ──────────────────────────────────────────────────────────

    /// Create or overwrite a binding.
    pub fn define(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Update an existing binding.
    /// Returns `true` if found and updated, `false` if not found.
    pub fn set(&mut self, name: &str, value: Value) -> bool {
        match self.bindings.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    // ── Objects ───────────────────────────────────────────────────────────

    /// Create an object, replacing any earlier object of the same name.
    pub fn insert_object(&mut self, name: &str, object: PseudoObject) {
        self.objects.insert(name.to_string(), object);
    }

    pub fn object(&self, name: &str) -> Option<&PseudoObject> {
        self.objects.get(name)
    }

    pub fn object_mut(&mut self, name: &str) -> Option<&mut PseudoObject> {
        self.objects.get_mut(name)
    }

    // ── Arrays ────────────────────────────────────────────────────────────

    /// Create an array, replacing any earlier array of the same name.
    pub fn insert_array(&mut self, name: &str, array: PseudoArray) {
        self.arrays.insert(name.to_string(), array);
    }

    pub fn array(&self, name: &str) -> Option<&PseudoArray> {
        self.arrays.get(name)
    }

    pub fn array_mut(&mut self, name: &str) -> Option<&mut PseudoArray> {
        self.arrays.get_mut(name)
    }
}
