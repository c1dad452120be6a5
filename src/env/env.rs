use std::collections::HashMap;

use log::trace;

/// Handle of a [`LexicalEnv`] inside its [`EnvTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnvId(usize);

/// A named entity declared in an environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvElement {
    /// Declared spelling, as given to [`EnvTable::add`]
    pub name: String,
    /// Environment opened by the entity (package body, record components...),
    /// if it opens one
    pub opened_env: Option<EnvId>,
}

#[derive(Debug)]
pub struct LexicalEnv {
    pub parent: Option<EnvId>,
    /// Entries keyed by their case-folded name, in declaration order
    element_lookup: HashMap<String, Vec<EnvElement>>,
}

impl LexicalEnv {
    fn new(parent: Option<EnvId>) -> Self {
        LexicalEnv {
            parent,
            element_lookup: HashMap::new(),
        }
    }

    pub fn get_elements(&self, key: &str) -> &[EnvElement] {
        self.element_lookup
            .get(key)
            .map(|elements| elements.as_slice())
            .unwrap_or(&[])
    }
}

/// Arena of lexical environments. Environments refer to their parent by id,
/// so the table owns every scope and no reference cycles exist.
#[derive(Debug)]
pub struct EnvTable {
    environments: Vec<LexicalEnv>,
}

impl Default for EnvTable {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvTable {
    /// Creates a table holding a single parentless root environment.
    pub fn new() -> Self {
        EnvTable {
            environments: vec![LexicalEnv::new(None)],
        }
    }

    pub fn root(&self) -> EnvId {
        EnvId(0)
    }

    /// Adds an empty environment nested in `parent`.
    pub fn add_env(&mut self, parent: EnvId) -> EnvId {
        self.environments.push(LexicalEnv::new(Some(parent)));
        EnvId(self.environments.len() - 1)
    }

    /// Declares `name` in `env`. Redeclaring a name appends an overload, it
    /// never replaces the earlier entry.
    ///
    /// An `EnvId` is only valid for the table that created it; `add` panics on
    /// an id from another table.
    pub fn add(&mut self, env: EnvId, name: &str, opened_env: Option<EnvId>) {
        self.environments[env.0]
            .element_lookup
            .entry(name.to_lowercase())
            .or_default()
            .push(EnvElement {
                name: name.to_string(),
                opened_env,
            });
    }

    /// `None` when `env` does not belong to this table.
    pub fn get_env(&self, env: EnvId) -> Option<&LexicalEnv> {
        self.environments.get(env.0)
    }

    pub fn get_parent(&self, env: EnvId) -> Option<EnvId> {
        self.get_env(env).and_then(|environment| environment.parent)
    }

    /// Every entry named `name` visible from `env`: entries of `env` first,
    /// then those of each enclosing environment, each scope in declaration
    /// order. Names compare case-insensitively. An empty result is not an
    /// error, the name simply stays unresolved. An `env` from another table
    /// resolves nothing.
    pub fn lookup(&self, env: EnvId, name: &str) -> Vec<&EnvElement> {
        let key = name.to_lowercase();
        let mut elements = vec![];
        let mut current = Some(env);

        while let Some(environment) = current.and_then(|id| self.get_env(id)) {
            elements.extend(environment.get_elements(&key));
            current = environment.parent;
        }

        trace!("lookup {:?} from {:?}: {} candidate(s)", name, env, elements.len());
        elements
    }
}
