#![allow(rustdoc::broken_intra_doc_links)]
//! # logic-kb — Base de Conhecimento com Forward Chaining
//!
//! Motor de regras mínimo com **manutenção de verdade**: armazena fatos e
//! regras de implicação, deriva automaticamente novos fatos/regras a cada
//! afirmação, responde consultas por padrão e retira itens propagando a
//! remoção para tudo que dependia exclusivamente deles.
//!
//! ## Arquitetura
//!
//! ```text
//! reader ──► Assertion ──► KnowledgeBase::assert ──► agenda (fato, regra)
//!                                 │                        │
//!                                 │                        ▼
//!                                 │              InferenceEngine::forward_chain
//!                                 │                        │
//!                                 ◄──── add_fact / add_rule (com justificativa)
//!
//! KnowledgeBase::retract ──► cascata no grafo de justificativas
//! KnowledgeBase::ask     ──► match contra cada fato, em ordem de inserção
//! ```
//!
//! ## Módulos
//!
//! - [`core`] — statements, bindings, fatos, regras, a KB e a retração
//! - [`inference`] — o passo de forward chaining
//! - [`config`] — verbosidade dos eventos `tracing`
//! - [`reader`] — formato textual `fact:` / `rule:`
//!
//! ## Exemplo
//!
//! ```rust
//! use logic_kb::core::KnowledgeBase;
//! use logic_kb::reader;
//!
//! let mut kb = KnowledgeBase::new();
//! for item in reader::parse_str("
//!     fact: (isa cube block)
//!     rule: ((isa ?x block)) -> (pretty ?x)
//! ").unwrap() {
//!     kb.assert(item);
//! }
//!
//! let respostas = kb.ask(&reader::parse_query("(pretty ?y)").unwrap());
//! assert_eq!(respostas[0].bindings.to_string(), "?y : cube");
//! ```

/// Módulo `config` — configuração explícita de logging do motor.
pub mod config;

/// Módulo `core` — tipos fundamentais e a KnowledgeBase.
pub mod core;

/// Módulo `inference` — motor de forward chaining.
pub mod inference;

/// Módulo `reader` — leitura do formato textual de fatos e regras.
pub mod reader;

pub use crate::config::{EngineConfig, Verbosity};
pub use crate::core::{Assertion, KnowledgeBase, RetractOutcome};
