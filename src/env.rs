use super::*;

use std::collections::BTreeMap;

/// The table of user definitions for a circuit.
///
/// Keeps the definitions in declaration order. Lookup is by name, and when a name is
/// defined twice the later definition wins.
#[derive(Clone, Debug, Default)]
pub struct Definitions {
    defs: Vec<Def>,
    def_id_by_name: BTreeMap<Name, usize>,
}

impl Definitions {
    pub fn new() -> Definitions {
        Definitions::default()
    }

    pub fn add(&mut self, def: Def) {
        if self.def_id_by_name.contains_key(def.name()) {
            warn!("Redefinition of {}", def.name());
        }
        self.def_id_by_name.insert(def.name().to_string(), self.defs.len());
        self.defs.push(def);
    }

    pub fn get(&self, name: &str) -> Option<&Def> {
        self.def_id_by_name.get(name).map(|def_id| &self.defs[*def_id])
    }

    /// Every definition, in declaration order, including shadowed ones.
    pub fn iter(&self) -> std::slice::Iter<'_, Def> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl FromIterator<Def> for Definitions {
    fn from_iter<I: IntoIterator<Item = Def>>(iter: I) -> Definitions {
        let mut definitions = Definitions::new();
        for def in iter {
            definitions.add(def);
        }
        definitions
    }
}

/// The values of signals during evaluation, plus the definitions calls resolve against.
///
/// The definitions are borrowed, never copied: a child environment made for a call
/// shares its parent's table but starts with no signals bound.
#[derive(Clone, Debug)]
pub struct Environment<'d> {
    variables: BTreeMap<Name, bool>,
    definitions: &'d Definitions,
}

impl<'d> Environment<'d> {
    pub fn new(definitions: &'d Definitions) -> Environment<'d> {
        Environment {
            variables: BTreeMap::new(),
            definitions,
        }
    }

    pub fn child(&self) -> Environment<'d> {
        Environment::new(self.definitions)
    }

    pub fn definitions(&self) -> &'d Definitions {
        self.definitions
    }

    pub fn get_def(&self, name: &str) -> Result<&'d Def, HdlError> {
        self.definitions.get(name).ok_or_else(|| HdlError::UndefinedFunction(name.to_string()))
    }

    pub fn get_variable(&self, name: &str) -> Result<bool, HdlError> {
        self.variables.get(name).copied().ok_or_else(|| HdlError::UnboundSignal(name.to_string()))
    }

    pub fn set_variable(&mut self, name: &str, value: bool) {
        self.variables.insert(name.to_string(), value);
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }
}

impl std::fmt::Display for Environment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, (name, value)) in self.variables.iter().enumerate() {
            write!(f, "{name} : {}", *value as u8)?;
            if i + 1 < self.variables.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
