//! # Statement — Termo Lógico
//!
//! Um [`Statement`] é a unidade sintática de todo o conhecimento da base:
//! um **predicado** aplicado a uma lista ordenada de [`Term`]s.
//!
//! ```text
//! (isa cube block)      → predicado "isa", termos [cube, block]   (ground)
//! (isa ?x block)        → predicado "isa", termos [?x, block]     (padrão)
//! ```
//!
//! Statements são **imutáveis** e comparados estruturalmente — dois statements
//! com o mesmo predicado e os mesmos termos são o mesmo statement. É essa
//! igualdade (mais o `Hash`) que a [`KnowledgeBase`](super::KnowledgeBase) usa
//! como chave de canonicalização.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Argumento de um [`Statement`]: constante ou variável.
///
/// O nome da variável é armazenado **sem** o prefixo `?` usado no texto.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Constante — só casa com a mesma constante.
    Constant(String),
    /// Variável — pode ser ligada a qualquer termo durante o matching.
    Variable(String),
}

impl Term {
    /// Atalho para `Term::Constant`.
    pub fn constant(name: impl Into<String>) -> Self {
        Term::Constant(name.into())
    }

    /// Atalho para `Term::Variable` (sem o `?`).
    pub fn variable(name: impl Into<String>) -> Self {
        Term::Variable(name.into())
    }

    /// Interpreta um token textual: `?x` vira variável, o resto vira constante.
    pub fn from_token(token: &str) -> Self {
        match token.strip_prefix('?') {
            Some(name) => Term::Variable(name.to_string()),
            None => Term::Constant(token.to_string()),
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Constant(c) => write!(f, "{}", c),
            Term::Variable(v) => write!(f, "?{}", v),
        }
    }
}

/// Termo lógico: predicado + argumentos ordenados.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    /// Nome do predicado (ex: `isa`, `color`).
    pub predicate: String,
    /// Argumentos, na ordem em que aparecem.
    pub terms: Vec<Term>,
}

impl Statement {
    /// Cria um statement a partir do predicado e dos termos.
    pub fn new(predicate: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            predicate: predicate.into(),
            terms,
        }
    }

    /// Constrói um statement a partir de tokens textuais, aplicando
    /// [`Term::from_token`] a cada argumento.
    ///
    /// ```rust
    /// use logic_kb::core::Statement;
    ///
    /// let st = Statement::parse_tokens("isa", &["?x", "block"]);
    /// assert_eq!(st.to_string(), "(isa ?x block)");
    /// ```
    pub fn parse_tokens(predicate: &str, args: &[&str]) -> Self {
        Self::new(predicate, args.iter().map(|t| Term::from_token(t)).collect())
    }

    /// `true` quando nenhum argumento é variável.
    pub fn is_ground(&self) -> bool {
        !self.terms.iter().any(Term::is_variable)
    }

    /// Número de argumentos.
    pub fn arity(&self) -> usize {
        self.terms.len()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.predicate)?;
        for term in &self.terms {
            write!(f, " {}", term)?;
        }
        write!(f, ")")
    }
}
