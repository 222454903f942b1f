//! # Configuração do Motor
//!
//! A verbosidade dos eventos emitidos pela [`KnowledgeBase`](crate::core::KnowledgeBase)
//! e pelo [`InferenceEngine`](crate::inference::InferenceEngine) é configurada
//! explicitamente na construção da KB, via [`EngineConfig`].
//!
//! Os eventos passam sempre por `tracing`; o filtro do subscriber (`RUST_LOG`)
//! continua valendo por cima desta configuração.
//!
//! | Verbosity | Eventos emitidos |
//! |-----------|------------------|
//! | `Quiet` | nenhum (exceto avisos de consulta inválida) |
//! | `Normal` | assert, ask, retract |
//! | `Detailed` | tudo acima + cada `add` e cada tentativa de forward chaining |

use serde::{Deserialize, Serialize};

/// Nível de detalhe dos eventos do motor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Detailed,
}

impl Verbosity {
    /// Converte as flags `-q` / `-v` da linha de comando.
    ///
    /// Sem flags vale o mesmo default de [`EngineConfig::default`].
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::default(),
            (false, _) => Verbosity::Detailed,
        }
    }
}

/// Configuração da KB, passada em [`KnowledgeBase::with_config`](crate::core::KnowledgeBase::with_config).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub verbosity: Verbosity,
}

impl EngineConfig {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Eventos de nível `Normal` (assert/ask/retract) devem ser emitidos?
    pub fn logs_operations(&self) -> bool {
        self.verbosity >= Verbosity::Normal
    }

    /// Eventos de nível `Detailed` (add, tentativas de inferência) devem ser emitidos?
    pub fn logs_details(&self) -> bool {
        self.verbosity >= Verbosity::Detailed
    }
}
