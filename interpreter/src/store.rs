use std::collections::HashMap;

use crate::Value;

/// Program state: the current value bound to every assigned variable.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VariableStore {
    values: HashMap<String, Value>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Binds `name` to `value`, returning the value it replaced.
    pub fn set(&mut self, name: &str, value: Value) -> Option<Value> {
        self.values.insert(name.to_string(), value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All bindings ordered by name.
    pub fn sorted(&self) -> Vec<(&str, &Value)> {
        let mut entries: Vec<_> = self
            .values
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        entries.sort_by_key(|(name, _)| *name);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reassignment_replaces_binding() {
        let mut store = VariableStore::new();
        assert_eq!(store.set("a", Value::Integer(1)), None);
        assert_eq!(store.set("a", Value::Integer(2)), Some(Value::Integer(1)));
        assert_eq!(store.get("a"), Some(&Value::Integer(2)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sorted_by_name() {
        let mut store = VariableStore::new();
        store.set("b", Value::Integer(2));
        store.set("a", Value::String("x".to_string()));
        let names: Vec<_> = store.sorted().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
