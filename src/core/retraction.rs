//! # Retração — Remoção Dirigida por Dependências
//!
//! Retirar um item da [`KnowledgeBase`] remove também tudo o que dependia
//! **exclusivamente** dele. A cascata percorre o grafo de justificativas no
//! sentido das dependências (`supports_facts` / `supports_rules`):
//!
//! ```text
//! retract p(a)
//!   ├── q(a).supported_by -= (p(a), R)       back-link em R.supports_facts removido
//!   │   └── q(a) ficou sem suporte e não é afirmado → cascata
//!   └── p(a) sai da base
//! ```
//!
//! ## Quando a retração é recusada
//!
//! | Item | Situação | Resultado |
//! |------|----------|-----------|
//! | Regra | afirmada (com ou sem suporte) | recusa |
//! | Regra | derivada, ainda com suporte | recusa |
//! | Fato | afirmado **e** com suporte | recusa |
//! | Fato | derivado, ainda com suporte | recusa |
//! | Fato/Regra | sem nenhuma justificativa | remove + cascata |
//!
//! A assimetria entre regras e fatos é intencional: uma regra afirmada pelo
//! usuário nunca sai por este caminho, mesmo sem derivações; um fato afirmado
//! sem derivações sai.
//!
//! Dependentes afirmados pelo usuário sobrevivem à cascata: perdem a
//! justificativa, mas continuam na base como itens afirmados.
//!
//! Recusas nunca são erros: a base fica intacta e o [`RetractOutcome`]
//! informa o motivo.

use std::collections::HashSet;

use super::item::{Assertion, FactId, ItemId, RuleId};
use super::knowledge_base::KnowledgeBase;

/// Motivo pelo qual uma retração não removeu nada.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refusal {
    /// Regra afirmada diretamente pelo usuário.
    AssertedRule,
    /// Fato afirmado que também é derivável.
    AssertedAndSupported,
    /// Item derivado que ainda tem justificativas.
    StillSupported,
}

/// Resultado de [`KnowledgeBase::retract`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RetractOutcome {
    /// Itens removidos, o alvo primeiro, depois a cascata (em profundidade).
    Removed(Vec<ItemId>),
    Refused(Refusal),
    /// Nenhum item estruturalmente igual está na base.
    NotFound,
}

impl RetractOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, RetractOutcome::Removed(_))
    }
}

impl KnowledgeBase {
    /// Retira um fato ou regra, propagando a remoção para tudo que perdeu
    /// todo o suporte.
    pub fn retract(&mut self, assertion: &Assertion) -> RetractOutcome {
        if self.config.logs_operations() {
            tracing::info!(item = %assertion, "KB: retirando");
        }

        let Some(root) = self.lookup(assertion) else {
            if self.config.logs_operations() {
                tracing::debug!(item = %assertion, "KB: retração ignorada, item não encontrado");
            }
            return RetractOutcome::NotFound;
        };

        if let Some(refusal) = self.refusal_for(root) {
            if self.config.logs_operations() {
                tracing::debug!(item = %assertion, reason = ?refusal, "KB: retração recusada");
            }
            return RetractOutcome::Refused(refusal);
        }

        let removed = self.cascade(root);
        if self.config.logs_operations() {
            tracing::info!(removed = removed.len(), "KB: retração concluída");
        }
        RetractOutcome::Removed(removed)
    }

    /// Política de recusa para o alvo da retração.
    fn refusal_for(&self, item: ItemId) -> Option<Refusal> {
        match item {
            ItemId::Rule(id) => {
                let rule = self.rule_ref(id);
                if rule.asserted {
                    Some(Refusal::AssertedRule)
                } else if rule.is_supported() {
                    Some(Refusal::StillSupported)
                } else {
                    None
                }
            }
            ItemId::Fact(id) => {
                let fact = self.fact_ref(id);
                match (fact.asserted, fact.is_supported()) {
                    (true, true) => Some(Refusal::AssertedAndSupported),
                    (false, true) => Some(Refusal::StillSupported),
                    (_, false) => None,
                }
            }
        }
    }

    /// Remove `root` e, em profundidade, todo dependente que ficar sem
    /// justificativa e não for afirmado.
    ///
    /// Estados: presente → em cascata (no conjunto `cascading`) → removido.
    /// O conjunto garante que cada item é processado uma única vez.
    fn cascade(&mut self, root: ItemId) -> Vec<ItemId> {
        let mut removed = Vec::new();
        let mut cascading: HashSet<ItemId> = HashSet::from([root]);
        let mut stack = vec![root];

        while let Some(item) = stack.pop() {
            let (dependent_facts, dependent_rules) = self.dependents(item);

            for fact_id in dependent_facts {
                let dependent = ItemId::Fact(fact_id);
                if self.detach(dependent, item) && cascading.insert(dependent) {
                    stack.push(dependent);
                }
            }
            for rule_id in dependent_rules {
                let dependent = ItemId::Rule(rule_id);
                if self.detach(dependent, item) && cascading.insert(dependent) {
                    stack.push(dependent);
                }
            }

            self.remove_slot(item);
            if self.config.logs_details() {
                tracing::debug!(item = %item, "KB: item removido");
            }
            removed.push(item);
        }
        removed
    }

    /// Dependentes diretos de `item`, sem repetição, na ordem dos back-links.
    fn dependents(&self, item: ItemId) -> (Vec<FactId>, Vec<RuleId>) {
        let (facts, rules) = match item {
            ItemId::Fact(id) => {
                let fact = self.fact_ref(id);
                (&fact.supports_facts, &fact.supports_rules)
            }
            ItemId::Rule(id) => {
                let rule = self.rule_ref(id);
                (&rule.supports_facts, &rule.supports_rules)
            }
        };
        (unique(facts), unique(rules))
    }

    /// Remove de `dependent` toda justificativa que menciona `premise`, e o
    /// back-link recíproco no outro componente de cada par.
    ///
    /// Retorna `true` se `dependent` ficou sem suporte e não é afirmado, ou
    /// seja, deve seguir na cascata.
    fn detach(&mut self, dependent: ItemId, premise: ItemId) -> bool {
        let (supported_by, asserted) = match dependent {
            ItemId::Fact(id) => {
                let fact = self.fact_mut(id);
                (&mut fact.supported_by, fact.asserted)
            }
            ItemId::Rule(id) => {
                let rule = self.rule_mut(id);
                (&mut rule.supported_by, rule.asserted)
            }
        };
        let dropped: Vec<_> = supported_by
            .iter()
            .filter(|j| j.involves(premise))
            .copied()
            .collect();
        supported_by.retain(|j| !j.involves(premise));
        let exhausted = supported_by.is_empty();

        for justification in dropped {
            // O back-link na própria premissa desaparece junto com ela.
            match (premise, dependent) {
                (ItemId::Fact(_), ItemId::Fact(id)) => {
                    remove_one(&mut self.rule_mut(justification.rule).supports_facts, id)
                }
                (ItemId::Fact(_), ItemId::Rule(id)) => {
                    remove_one(&mut self.rule_mut(justification.rule).supports_rules, id)
                }
                (ItemId::Rule(_), ItemId::Fact(id)) => {
                    remove_one(&mut self.fact_mut(justification.fact).supports_facts, id)
                }
                (ItemId::Rule(_), ItemId::Rule(id)) => {
                    remove_one(&mut self.fact_mut(justification.fact).supports_rules, id)
                }
            }
        }

        exhausted && !asserted
    }

    /// Esvazia o slot do item e apaga sua chave do índice estrutural.
    fn remove_slot(&mut self, item: ItemId) {
        match item {
            ItemId::Fact(id) => {
                if let Some(fact) = self.take_fact(id) {
                    debug_assert!(fact.supported_by.is_empty());
                    self.fact_index.remove(&fact.statement);
                }
            }
            ItemId::Rule(id) => {
                if let Some(rule) = self.take_rule(id) {
                    debug_assert!(rule.supported_by.is_empty());
                    self.rule_index.remove(&(rule.lhs, rule.rhs));
                }
            }
        }
    }
}

fn unique<T: Copy + Eq + std::hash::Hash>(ids: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

fn remove_one<T: PartialEq>(ids: &mut Vec<T>, target: T) {
    if let Some(pos) = ids.iter().position(|id| *id == target) {
        ids.remove(pos);
    }
}
