//! # Fact e Rule — Itens de Conhecimento com Proveniência
//!
//! Os dois tipos de item armazenados na [`KnowledgeBase`](super::KnowledgeBase):
//!
//! - [`Fact`] — um statement ground, ex: `(isa cube block)`
//! - [`Rule`] — antecedentes ⇒ consequente, ex: `((isa ?x block)) -> (pretty ?x)`
//!
//! ## Grafo de Justificativas
//!
//! Cada item carrega **duas visões** da mesma relação de dependência:
//!
//! ```text
//!   supported_by  (para trás)      supports_facts / supports_rules  (para frente)
//!   q(a).supported_by = [(p(a), R)]   p(a).supports_facts = [q(a)]
//!                                     R.supports_facts    = [q(a)]
//! ```
//!
//! As referências são **handles** ([`FactId`], [`RuleId`]) para as arenas da
//! KB, nunca cópias. Remover um item exige apagar seu id das listas dos
//! vizinhos; isso é responsabilidade da retração.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::statement::Statement;

/// Handle de um [`Fact`] na arena de fatos. Nunca reutilizado.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FactId(pub usize);

/// Handle de uma [`Rule`] na arena de regras. Nunca reutilizado.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RuleId(pub usize);

/// Handle de qualquer item da KB.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemId {
    Fact(FactId),
    Rule(RuleId),
}

impl fmt::Display for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}", self.0)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Fact(id) => id.fmt(f),
            ItemId::Rule(id) => id.fmt(f),
        }
    }
}

/// Justificativa de um item derivado: o fato premissa foi unificado com o
/// primeiro antecedente da regra premissa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Justification {
    pub fact: FactId,
    pub rule: RuleId,
}

impl Justification {
    pub fn new(fact: FactId, rule: RuleId) -> Self {
        Self { fact, rule }
    }

    /// `true` se `item` é um dos componentes do par.
    pub fn involves(&self, item: ItemId) -> bool {
        match item {
            ItemId::Fact(id) => self.fact == id,
            ItemId::Rule(id) => self.rule == id,
        }
    }
}

/// Fato armazenado na KB.
///
/// A identidade estrutural de um fato é o seu `statement`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fact {
    pub statement: Statement,
    /// Afirmado diretamente pelo usuário (independe de derivação).
    pub asserted: bool,
    /// Derivações alternativas que sustentam este fato.
    pub supported_by: Vec<Justification>,
    /// Fatos cuja justificativa menciona este fato.
    pub supports_facts: Vec<FactId>,
    /// Regras cuja justificativa menciona este fato.
    pub supports_rules: Vec<RuleId>,
}

impl Fact {
    pub(crate) fn new(statement: Statement, asserted: bool) -> Self {
        Self {
            statement,
            asserted,
            supported_by: Vec::new(),
            supports_facts: Vec::new(),
            supports_rules: Vec::new(),
        }
    }

    /// `true` se o fato ainda tem ao menos uma derivação.
    pub fn is_supported(&self) -> bool {
        !self.supported_by.is_empty()
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.statement)?;
        if self.asserted {
            write!(f, " ASSERTED")?;
        }
        if self.is_supported() {
            write!(f, " DERIVED")?;
        }
        Ok(())
    }
}

/// Regra armazenada na KB: `lhs` (antecedentes, em ordem) ⇒ `rhs`.
///
/// Regras parcialmente aplicadas pelo motor de inferência também são `Rule`s,
/// com menos antecedentes e variáveis já substituídas.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rule {
    pub lhs: Vec<Statement>,
    pub rhs: Statement,
    pub asserted: bool,
    pub supported_by: Vec<Justification>,
    pub supports_facts: Vec<FactId>,
    pub supports_rules: Vec<RuleId>,
}

impl Rule {
    pub(crate) fn new(lhs: Vec<Statement>, rhs: Statement, asserted: bool) -> Self {
        Self {
            lhs,
            rhs,
            asserted,
            supported_by: Vec::new(),
            supports_facts: Vec::new(),
            supports_rules: Vec::new(),
        }
    }

    pub fn is_supported(&self) -> bool {
        !self.supported_by.is_empty()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_rule(&self.lhs, &self.rhs))?;
        if self.asserted {
            write!(f, " ASSERTED")?;
        }
        if self.is_supported() {
            write!(f, " DERIVED")?;
        }
        Ok(())
    }
}

/// Formato textual de regra, o mesmo aceito pelo [`reader`](crate::reader).
pub(crate) fn format_rule(lhs: &[Statement], rhs: &Statement) -> String {
    let parts: Vec<String> = lhs.iter().map(|st| st.to_string()).collect();
    format!("({}) -> {}", parts.join(" "), rhs)
}

/// Item como o chamador o descreve — sem proveniência, sem id.
///
/// É a entrada de [`assert`](super::KnowledgeBase::assert),
/// [`ask`](super::KnowledgeBase::ask) e
/// [`retract`](super::KnowledgeBase::retract), e a saída do reader.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assertion {
    Fact(Statement),
    Rule { lhs: Vec<Statement>, rhs: Statement },
}

impl Assertion {
    pub fn fact(statement: Statement) -> Self {
        Assertion::Fact(statement)
    }

    pub fn rule(lhs: Vec<Statement>, rhs: Statement) -> Self {
        Assertion::Rule { lhs, rhs }
    }

    /// `true` se o item pode ser usado como padrão de consulta.
    pub fn is_fact_pattern(&self) -> bool {
        matches!(self, Assertion::Fact(_))
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assertion::Fact(st) => write!(f, "fact: {}", st),
            Assertion::Rule { lhs, rhs } => write!(f, "rule: {}", format_rule(lhs, rhs)),
        }
    }
}
