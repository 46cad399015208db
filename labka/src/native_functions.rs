use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub enum NativeFunction {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
}

impl NativeFunction {
    pub fn arity(&self) -> usize {
        match self {
            NativeFunction::Unary(_) => 1,
            NativeFunction::Binary(_) => 2,
        }
    }

    pub fn call(&self, args: &[f64]) -> Option<f64> {
        match (self, args) {
            (NativeFunction::Unary(f), &[x]) => Some(f(x)),
            (NativeFunction::Binary(f), &[x, y]) => Some(f(x, y)),
            _ => None,
        }
    }
}

pub static NATIVE_FUNCTIONS: phf::Map<&'static str, NativeFunction> = phf::phf_map! {
    "pow" => NativeFunction::Binary(f64::powf),
    "abs" => NativeFunction::Unary(f64::abs),
    "max" => NativeFunction::Binary(f64::max),
    "min" => NativeFunction::Binary(f64::min),
};

#[derive(Debug, Clone)]
pub struct FunctionTable {
    functions: HashMap<String, NativeFunction>,
}

impl FunctionTable {
    pub fn empty() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<NativeFunction> {
        self.functions.get(name).copied()
    }

    pub fn insert(&mut self, name: impl Into<String>, function: NativeFunction) -> Option<NativeFunction> {
        self.functions.insert(name.into(), function)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl Default for FunctionTable {
    fn default() -> Self {
        let functions = NATIVE_FUNCTIONS
            .entries()
            .map(|(&name, &function)| (name.to_owned(), function))
            .collect();
        Self { functions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_holds_builtins() {
        let table = FunctionTable::default();
        assert_eq!(table.len(), 4);
        for name in ["pow", "abs", "max", "min"] {
            assert!(table.contains(name), "missing {name}");
        }
        assert!(!table.contains("sqrt"));
    }

    #[test]
    fn builtins_compute() {
        let table = FunctionTable::default();
        assert_eq!(table.get("pow").unwrap().call(&[2.0, 3.0]), Some(8.0));
        assert_eq!(table.get("abs").unwrap().call(&[-4.5]), Some(4.5));
        assert_eq!(table.get("max").unwrap().call(&[5.0, 2.0]), Some(5.0));
        assert_eq!(table.get("min").unwrap().call(&[3.0, 4.0]), Some(3.0));
    }

    #[test]
    fn arity_mismatch() {
        let abs = NATIVE_FUNCTIONS["abs"];
        assert_eq!(abs.arity(), 1);
        assert_eq!(abs.call(&[1.0, 2.0]), None);
        assert_eq!(NATIVE_FUNCTIONS["pow"].call(&[]), None);
    }

    #[test]
    fn custom_table() {
        let mut table = FunctionTable::empty();
        assert!(table.is_empty());
        table.insert("hypot", NativeFunction::Binary(f64::hypot));
        assert_eq!(table.get("hypot").unwrap().call(&[3.0, 4.0]), Some(5.0));
        assert!(table.get("pow").is_none());
    }
}
