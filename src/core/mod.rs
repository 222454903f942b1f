//! # Módulo Core — Tipos Fundamentais da Base de Conhecimento
//!
//! Este módulo agrupa os **tipos fundamentais** do motor de regras:
//!
//! - [`Statement`] / [`Term`] — termos lógicos: predicado + argumentos
//! - [`Bindings`] — substituições produzidas por [`match_statements`] e
//!   aplicadas por [`instantiate`]
//! - [`Fact`] / [`Rule`] — itens armazenados, com proveniência ([`Justification`])
//! - [`Assertion`] — item como o chamador o descreve
//! - [`KnowledgeBase`] — contêiner central: afirma, consulta e retira
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use logic_kb::core::{Assertion, KnowledgeBase, Statement};
//!
//! let mut kb = KnowledgeBase::new();
//! kb.assert(Assertion::fact(Statement::parse_tokens("p", &["a"])));
//! kb.assert(Assertion::rule(
//!     vec![Statement::parse_tokens("p", &["?x"])],
//!     Statement::parse_tokens("q", &["?x"]),
//! ));
//! assert!(kb.contains(&Assertion::fact(Statement::parse_tokens("q", &["a"]))));
//!
//! kb.retract(&Assertion::fact(Statement::parse_tokens("p", &["a"])));
//! assert_eq!(kb.fact_count(), 0);
//! ```

/// Sub-módulo com [`Statement`] e [`Term`].
pub mod statement;

/// Sub-módulo com [`Bindings`], matcher e instanciador.
pub mod bindings;

/// Sub-módulo com [`Fact`], [`Rule`], ids e [`Justification`].
pub mod item;

/// Sub-módulo com a [`KnowledgeBase`] — armazenamento, afirmação e consulta.
pub mod knowledge_base;

/// Sub-módulo com a retração em cascata.
pub mod retraction;

// Re-exports para conveniência: permite usar `crate::core::Statement` diretamente.
pub use bindings::{instantiate, instantiate_all, match_statements, Bindings};
pub use item::{Assertion, Fact, FactId, ItemId, Justification, Rule, RuleId};
pub use knowledge_base::{Answer, KnowledgeBase};
pub use retraction::{Refusal, RetractOutcome};
pub use statement::{Statement, Term};
