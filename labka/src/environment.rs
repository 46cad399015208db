use std::collections::{hash_map::Entry, HashMap};

use crate::interpreter::RuntimeError;

#[derive(Debug, Default, Clone)]
pub struct Environment {
    values: HashMap<String, f64>,
}

impl Environment {
    pub fn define(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn assign(&mut self, name: &str, value: f64) -> Result<(), RuntimeError> {
        match self.values.entry(name.to_owned()) {
            Entry::Occupied(mut entry) => {
                entry.insert(value);
                Ok(())
            }
            Entry::Vacant(_) => Err(RuntimeError::UndefinedVariable(name.to_owned())),
        }
    }
}
