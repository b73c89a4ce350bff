use std::collections::HashMap;


pub trait SymbolTable {
    type Value;
    fn lookup(&self, key: &str) -> Option<&Self::Value>;
    /// Enters the value, replacing any previous entry with the same key.
    fn enter(&mut self, key: String, value: Self::Value);

    fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}

/// Type tag inferred from the shape of an assigned value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    String,
    Bool,
    None,
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableEntry {
    pub data_type: DataType,
    /// Line of the latest binding.
    pub line: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariableTable {
    pub entries: HashMap<String, VariableEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionEntry {
    pub name: String,
    pub line: usize,
    pub parameters: Vec<String>,
}

/// Function definitions in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionTable {
    pub entries: Vec<FunctionEntry>,
}

impl VariableTable {
    pub fn data_type(&self, name: &str) -> Option<DataType> {
        self.lookup(name).map(|entry| entry.data_type)
    }
}

impl FunctionTable {
    /// Functions defined on the given line.
    pub fn defined_on(&self, line: usize) -> impl Iterator<Item = &FunctionEntry> {
        self.entries.iter().filter(move |entry| entry.line == line)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }
}

impl SymbolTable for VariableTable {
    type Value = VariableEntry;

    fn lookup(&self, key: &str) -> Option<&VariableEntry> {
        self.entries.get(key)
    }

    fn enter(&mut self, key: String, value: VariableEntry) {
        self.entries.insert(key, value);
    }
}

impl SymbolTable for FunctionTable {
    type Value = FunctionEntry;

    fn lookup(&self, key: &str) -> Option<&FunctionEntry> {
        self.entries.iter().find(|entry| entry.name == key)
    }

    fn enter(&mut self, key: String, value: FunctionEntry) {
        match self.entries.iter_mut().find(|entry| entry.name == key) {
            Some(entry) => *entry = value,
            None => self.entries.push(value),
        }
    }
}
