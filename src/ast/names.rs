use std::cell::OnceCell;

use log::trace;

use crate::{
    env::env::{EnvElement, EnvId, EnvTable},
    lexer::tokens::Token,
    Span,
};

/// Name-resolution capability shared by every name node.
///
/// Environments are supplied by the caller; the tree never owns them.
pub trait Resolvable {
    /// Environment designated by the name when it is evaluated from `env`.
    ///
    /// The result is memoized on the node: the first evaluation is kept and
    /// returned by every later call, whatever `env` they pass.
    fn designated_env(&self, table: &EnvTable, env: EnvId) -> Option<EnvId>;

    /// Environment in which the named entity is considered defined.
    fn scope(&self, table: &EnvTable, env: EnvId) -> Option<EnvId>;

    /// The token naming the entity, relative to its scope.
    fn name(&self) -> &Token;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseIdKind {
    Identifier,
    /// Operator symbol used as a name, `"+"`
    StringLiteral,
    EnumIdentifier,
}

/// Base Identifier
/// Simple name made of one token.
#[derive(Debug, Clone)]
pub struct BaseId {
    pub kind: BaseIdKind,
    pub token: Token,
    designated: OnceCell<Option<EnvId>>,
}

impl BaseId {
    pub fn new(kind: BaseIdKind, token: Token) -> Self {
        BaseId {
            kind,
            token,
            designated: OnceCell::new(),
        }
    }

    /// Every entry the name may denote from `env`, nearest scope first.
    pub fn env_elements<'a>(&self, table: &'a EnvTable, env: EnvId) -> Vec<&'a EnvElement> {
        table.lookup(env, &self.token.symbol())
    }
}

impl Resolvable for BaseId {
    fn designated_env(&self, table: &EnvTable, env: EnvId) -> Option<EnvId> {
        *self.designated.get_or_init(|| {
            let designated = self
                .env_elements(table, env)
                .first()
                .and_then(|element| element.opened_env);

            trace!("{} designates {:?}", self.token.value, designated);
            designated
        })
    }

    fn scope(&self, _table: &EnvTable, env: EnvId) -> Option<EnvId> {
        Some(env)
    }

    fn name(&self) -> &Token {
        &self.token
    }
}

/// Name Prefix
/// Selected name `Prefix.Suffix` whose prefix is itself a name, `Ada.Text_IO`.
#[derive(Debug, Clone)]
pub struct NamePrefix {
    pub prefix: Box<BaseName>,
    pub suffix: BaseId,
    pub span: Span,
    designated: OnceCell<Option<EnvId>>,
}

impl NamePrefix {
    pub fn new(prefix: BaseName, suffix: BaseId) -> Self {
        NamePrefix {
            span: Span::join(prefix.get_span(), &suffix.token.span),
            prefix: Box::new(prefix),
            suffix,
            designated: OnceCell::new(),
        }
    }
}

impl Resolvable for NamePrefix {
    fn designated_env(&self, table: &EnvTable, env: EnvId) -> Option<EnvId> {
        *self.designated.get_or_init(|| {
            // The suffix is looked up inside the environment the prefix designates
            let prefix_env = self.prefix.designated_env(table, env)?;
            self.suffix.designated_env(table, prefix_env)
        })
    }

    fn scope(&self, table: &EnvTable, env: EnvId) -> Option<EnvId> {
        self.prefix.designated_env(table, env)
    }

    fn name(&self) -> &Token {
        self.suffix.name()
    }
}

#[derive(Debug, Clone)]
pub enum BaseName {
    NamePrefix(NamePrefix),
    BaseId(BaseId),
}

impl BaseName {
    pub fn get_span(&self) -> &Span {
        match self {
            BaseName::NamePrefix(name_prefix) => &name_prefix.span,
            BaseName::BaseId(id) => &id.token.span,
        }
    }
}

impl Resolvable for BaseName {
    fn designated_env(&self, table: &EnvTable, env: EnvId) -> Option<EnvId> {
        match self {
            BaseName::NamePrefix(name_prefix) => name_prefix.designated_env(table, env),
            BaseName::BaseId(id) => id.designated_env(table, env),
        }
    }

    fn scope(&self, table: &EnvTable, env: EnvId) -> Option<EnvId> {
        match self {
            BaseName::NamePrefix(name_prefix) => name_prefix.scope(table, env),
            BaseName::BaseId(id) => id.scope(table, env),
        }
    }

    fn name(&self) -> &Token {
        match self {
            BaseName::NamePrefix(name_prefix) => name_prefix.name(),
            BaseName::BaseId(id) => id.name(),
        }
    }
}
