use serde::Serialize;
use serde_json::{Map, Value};

/// Before/after values of the fields a mutation actually changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldChanges {
    before: Map<String, Value>,
    after: Map<String, Value>,
}

impl FieldChanges {
    pub fn is_empty(&self) -> bool {
        self.after.is_empty()
    }

    pub fn len(&self) -> usize {
        self.after.len()
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.after.contains_key(field_name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.after.keys().map(String::as_str)
    }

    /// Snapshot objects for the activity log. An empty change set yields no snapshots.
    pub fn into_snapshots(self) -> (Option<Value>, Option<Value>) {
        if self.after.is_empty() {
            return (None, None);
        }
        (Some(Value::Object(self.before)), Some(Value::Object(self.after)))
    }
}

/// Generic builder for tracking field changes
pub struct FieldChangeBuilder {
    changes: FieldChanges,
}

impl Default for FieldChangeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldChangeBuilder {
    pub fn new() -> Self {
        Self {
            changes: FieldChanges::default(),
        }
    }

    /// Track a field change; identical values are ignored
    pub fn track<T: Serialize + PartialEq + ?Sized>(
        &mut self,
        field_name: &str,
        old_value: &T,
        new_value: &T,
    ) {
        if old_value != new_value {
            self.changes
                .before
                .insert(field_name.to_string(), to_json(old_value));
            self.changes
                .after
                .insert(field_name.to_string(), to_json(new_value));
        }
    }

    /// Build the final set of changes
    pub fn build(self) -> FieldChanges {
        self.changes
    }
}

/// Snapshot of a single value. Domain field types always serialize.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
