use arch::mem::PREDEFINED;
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Predefined,
    Label,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub kind: Kind,
    pub addr: u16,
    /// Line that bound the symbol (0-based), none for predefined entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_idx: Option<usize>,
}

/// One flat namespace for registers, I/O, labels and variables.
/// Bindings are never removed or rebound.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct SymbolTable(IndexMap<String, Symbol>);

impl SymbolTable {
    pub fn new() -> Self {
        let mut map = IndexMap::new();
        for (name, addr) in PREDEFINED {
            map.insert(
                name.to_string(),
                Symbol {
                    kind: Kind::Predefined,
                    addr,
                    line_idx: None,
                },
            );
        }
        SymbolTable(map)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.0.get(name)
    }

    pub fn lookup(&self, name: &str) -> Result<u16, Error> {
        match self.0.get(name) {
            Some(sym) => Ok(sym.addr),
            None => Err(Error::UnknownSymbol(name.to_string())),
        }
    }

    /// Bind `name` to `addr`. Binding an existing name to the same address is a no-op.
    pub fn define(
        &mut self,
        name: &str,
        addr: u16,
        kind: Kind,
        line_idx: Option<usize>,
    ) -> Result<(), Error> {
        match self.0.get(name) {
            Some(prev) if prev.addr == addr => Ok(()),
            Some(prev) => Err(Error::DuplicateSymbol(name.to_string(), prev.addr, addr)),
            None => {
                self.0.insert(
                    name.to_string(),
                    Symbol {
                        kind,
                        addr,
                        line_idx,
                    },
                );
                Ok(())
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.0.iter().map(|(name, sym)| (name.as_str(), sym))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
