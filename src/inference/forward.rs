//! # Forward Chaining — Um Passo de Derivação
//!
//! O [`InferenceEngine`] recebe **um** fato e **uma** regra da
//! [KnowledgeBase] e tenta usar o fato para descarregar o primeiro
//! antecedente da regra.
//!
//! ## Como Funciona
//!
//! ```text
//! Fato:   (isa cube block)
//! Regra:  ((isa ?x block) (color ?x red)) -> (pretty ?x)
//! ─────────────────────────────────────────────
//! match((isa cube block), (isa ?x block))  →  {?x : cube}
//! restante: ((color cube red))             →  ainda há antecedentes
//! Derivação: regra ((color cube red)) -> (pretty cube)
//! ```
//!
//! Quando não sobra antecedente, o consequente instanciado vira um **fato**.
//! Em ambos os casos o item derivado nasce com a justificativa
//! `(fato, regra)` e é adicionado à KB, que pode enfileirar novos pares.
//!
//! A ausência de match é o caso comum e não é erro.

use crate::core::{
    instantiate, instantiate_all, match_statements, FactId, ItemId, Justification,
    KnowledgeBase, RuleId,
};

/// Resultado de um passo de inferência bem sucedido.
///
/// A explicação é usada nos logs e na saída da CLI.
///
/// ## Exemplo de Explicação
///
/// ```text
/// (p a) casa com (p ?x) em ((p ?x)) -> (q ?x), então (q a)
/// ```
#[derive(Clone, Debug)]
pub struct InferenceResult {
    /// Id canônico do item derivado (novo ou fundido a um existente).
    pub item: ItemId,
    /// Par de premissas usado neste passo.
    pub justification: Justification,
    /// Explicação legível do passo.
    pub explanation: String,
}

/// Motor de forward chaining (struct sem estado).
///
/// Toda a informação vem da KB; o motor só lê o par de premissas e devolve
/// o item derivado para a KB armazenar.
pub struct InferenceEngine;

impl InferenceEngine {
    /// Tenta derivar um fato ou regra a partir de `fact` e `rule`.
    ///
    /// ## Algoritmo
    ///
    /// ```text
    /// b = match(fact.statement, rule.lhs[0])       senão → None
    /// restante = instantiate(rule.lhs[1..], b)
    /// rhs      = instantiate(rule.rhs, b)
    /// se restante vazio: kb.add_fact(rhs, (fact, rule))
    /// senão:             kb.add_rule(restante, rhs, (fact, rule))
    /// ```
    ///
    /// Ids que não estão mais na base (ou uma regra sem antecedentes)
    /// resultam em `None`.
    pub fn forward_chain(
        fact_id: FactId,
        rule_id: RuleId,
        kb: &mut KnowledgeBase,
    ) -> Option<InferenceResult> {
        let detailed = kb.config().logs_details();
        let fact = kb.fact(fact_id)?;
        let rule = kb.rule(rule_id)?;

        if detailed {
            tracing::debug!(fact = %fact.statement, rule = %rule, "Inferência: tentando");
        }

        let (first, rest) = rule.lhs.split_first()?;
        let bindings = match_statements(&fact.statement, first)?;
        let remaining = instantiate_all(rest, &bindings);
        let new_rhs = instantiate(&rule.rhs, &bindings);

        let premise = format!(
            "{} casa com {} em {}",
            fact.statement,
            first,
            crate::core::item::format_rule(&rule.lhs, &rule.rhs)
        );
        let justification = Justification::new(fact_id, rule_id);

        let (item, conclusion) = if remaining.is_empty() {
            let conclusion = new_rhs.to_string();
            (ItemId::Fact(kb.add_fact(new_rhs, Some(justification))), conclusion)
        } else {
            let conclusion = crate::core::item::format_rule(&remaining, &new_rhs);
            (
                ItemId::Rule(kb.add_rule(remaining, new_rhs, Some(justification))),
                conclusion,
            )
        };

        let explanation = format!("{}, então {}", premise, conclusion);
        if detailed {
            tracing::debug!(item = %item, "Inferência: {}", explanation);
        }
        Some(InferenceResult {
            item,
            justification,
            explanation,
        })
    }
}
