//! # Módulo Inference — Motor de Forward Chaining
//!
//! Este módulo contém o **motor de inferência** da base de conhecimento,
//! responsável por derivar **novos fatos e regras** sempre que um fato e uma
//! regra se encontram na [`KnowledgeBase`](crate::core::KnowledgeBase).
//!
//! ## Um Passo de Inferência
//!
//! | Regra | Fato | Resultado |
//! |-------|------|-----------|
//! | `((p ?x)) -> (q ?x)` | `(p a)` | fato `(q a)` |
//! | `((p ?x) (r ?x)) -> (q ?x)` | `(p a)` | regra `((r a)) -> (q a)` |
//!
//! Só o **primeiro** antecedente é testado; os demais são instanciados e
//! formam a regra parcial, que será testada contra os próximos fatos.
//!
//! Veja [`InferenceEngine`] para detalhes.

/// Sub-módulo com o passo de forward chaining.
pub mod forward;

/// Re-export do motor de inferência para acesso via `crate::inference::InferenceEngine`.
pub use forward::{InferenceEngine, InferenceResult};
