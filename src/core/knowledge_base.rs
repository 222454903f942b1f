//! # KnowledgeBase — Contêiner Central de Fatos e Regras
//!
//! A [`KnowledgeBase`] é o **dono** de todos os [`Fact`]s e [`Rule`]s. Toda
//! afirmação, consulta e retração passa por ela.
//!
//! ## Armazenamento
//!
//! - **Fatos**: arena `Vec<Option<Fact>>` indexada por [`FactId`]
//! - **Regras**: arena `Vec<Option<Rule>>` indexada por [`RuleId`]
//! - **Índices estruturais**: `HashMap<Statement, FactId>` e
//!   `HashMap<(lhs, rhs), RuleId>` — a única fonte de canonicalização
//!
//! Ids nunca são reutilizados: a ordem dos slots é a ordem de inserção, e é
//! nela que [`ask()`](KnowledgeBase::ask) devolve as respostas. Um slot `None`
//! é um item retraído e continua ocupando a arena até o próximo
//! [`clear()`](KnowledgeBase::clear); varreduras como `facts()` e `ask()`
//! passam por esses slots.
//!
//! ## Agenda de Inferência
//!
//! Inserir um item novo não dispara recursão: cada par (fato, regra) a testar
//! entra numa fila FIFO (a *agenda*), que [`assert()`](KnowledgeBase::assert)
//! esvazia chamando o [`InferenceEngine`] uma vez por par. Derivações bem
//! sucedidas são adicionadas de volta e podem enfileirar novos pares.
//!
//! ```text
//! assert(p(a))
//!   ├── add p(a)            → agenda += (p(a), R1)
//!   └── drena agenda
//!       └── forward_chain(p(a), R1)  → add q(a) → agenda += (q(a), R1), ...
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use logic_kb::core::{Assertion, KnowledgeBase, Statement};
//!
//! let mut kb = KnowledgeBase::new();
//! kb.assert(Assertion::fact(Statement::parse_tokens("isa", &["cube", "block"])));
//! kb.assert(Assertion::rule(
//!     vec![Statement::parse_tokens("isa", &["?x", "block"])],
//!     Statement::parse_tokens("pretty", &["?x"]),
//! ));
//!
//! let respostas = kb.ask(&Assertion::fact(Statement::parse_tokens("pretty", &["?y"])));
//! assert_eq!(respostas.len(), 1);
//! assert_eq!(respostas[0].bindings.to_string(), "?y : cube");
//! ```

use std::collections::{HashMap, VecDeque};
use std::fmt;

use serde::Serialize;

use super::bindings::{match_statements, Bindings};
use super::item::{Assertion, Fact, FactId, ItemId, Justification, Rule, RuleId};
use super::statement::Statement;
use crate::config::EngineConfig;
use crate::inference::{InferenceEngine, InferenceResult};

/// Chave estrutural de uma regra.
type RuleKey = (Vec<Statement>, Statement);

/// Resposta de [`ask()`](KnowledgeBase::ask): as ligações obtidas e o fato
/// da base que casou com o padrão.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub bindings: Bindings,
    pub fact: FactId,
}

/// Base de conhecimento in-memory com forward chaining e manutenção de verdade.
///
/// Todas as mutações exigem `&mut self`: cada `assert`/`retract` roda até o
/// fim (inclusive o fan-out de inferência ou a cascata) antes de retornar.
pub struct KnowledgeBase {
    pub(super) facts: Vec<Option<Fact>>,
    pub(super) rules: Vec<Option<Rule>>,
    pub(super) fact_index: HashMap<Statement, FactId>,
    pub(super) rule_index: HashMap<RuleKey, RuleId>,
    /// Pares (fato, regra) ainda não testados pelo motor.
    agenda: VecDeque<(FactId, RuleId)>,
    pub(super) config: EngineConfig,
    /// Primeiro id de cada arena; avança a cada `clear()`.
    fact_base: usize,
    rule_base: usize,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase {
    /// Cria uma KB vazia com a configuração padrão.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Cria uma KB vazia com a configuração de logging fornecida.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            facts: Vec::new(),
            rules: Vec::new(),
            fact_index: HashMap::new(),
            rule_index: HashMap::new(),
            agenda: VecDeque::new(),
            config,
            fact_base: 0,
            rule_base: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Limpa toda a KB e libera as arenas.
    ///
    /// A numeração continua de onde parou: um id entregue antes do `clear()`
    /// nunca aponta para um item novo.
    pub fn clear(&mut self) {
        self.fact_base += self.facts.len();
        self.rule_base += self.rules.len();
        self.facts.clear();
        self.rules.clear();
        self.fact_index.clear();
        self.rule_index.clear();
        self.agenda.clear();
    }

    // ─── Afirmação ─────────────────────────────────────────────

    /// Afirma um fato ou regra e executa o forward chaining até o fecho.
    ///
    /// Se o item já existe, ele passa a ser marcado como afirmado (merge).
    /// Retorna cada derivação bem sucedida, na ordem em que a agenda foi
    /// processada.
    pub fn assert(&mut self, assertion: Assertion) -> Vec<InferenceResult> {
        if self.config.logs_operations() {
            tracing::info!(item = %assertion, "KB: afirmando");
        }
        match assertion {
            Assertion::Fact(statement) => {
                self.add_fact(statement, None);
            }
            Assertion::Rule { lhs, rhs } => {
                self.add_rule(lhs, rhs, None);
            }
        }
        self.run_agenda()
    }

    /// Esvazia a agenda, um passo de forward chaining por par.
    fn run_agenda(&mut self) -> Vec<InferenceResult> {
        let mut results = Vec::new();
        while let Some((fact, rule)) = self.agenda.pop_front() {
            if let Some(result) = InferenceEngine::forward_chain(fact, rule, self) {
                results.push(result);
            }
        }
        if self.config.logs_operations() && !results.is_empty() {
            tracing::info!(derived = results.len(), "KB: forward chaining concluído");
        }
        results
    }

    /// Insere (ou funde) um fato e retorna seu id canônico.
    ///
    /// - `support = None` → afirmação direta: novo fato nasce `asserted`,
    ///   fato existente passa a ser `asserted`
    /// - `support = Some(j)` → derivação: `j` é anexada às justificativas
    ///
    /// Um fato novo enfileira um par com cada regra já armazenada.
    pub(crate) fn add_fact(&mut self, statement: Statement, support: Option<Justification>) -> FactId {
        if self.config.logs_details() {
            tracing::debug!(statement = %statement, derived = support.is_some(), "KB: adicionando fato");
        }

        if let Some(&id) = self.fact_index.get(&statement) {
            match support {
                Some(justification) => {
                    self.attach_support(ItemId::Fact(id), justification);
                }
                None => self.fact_mut(id).asserted = true,
            }
            return id;
        }

        let id = FactId(self.fact_base + self.facts.len());
        self.facts.push(Some(Fact::new(statement.clone(), support.is_none())));
        self.fact_index.insert(statement, id);
        if let Some(justification) = support {
            self.attach_support(ItemId::Fact(id), justification);
        }

        let rule_ids: Vec<RuleId> = self.rules().map(|(rule_id, _)| rule_id).collect();
        self.agenda.extend(rule_ids.into_iter().map(|rule_id| (id, rule_id)));
        id
    }

    /// Análogo a [`add_fact`](Self::add_fact) para regras; uma regra nova
    /// enfileira um par com cada fato já armazenado.
    pub(crate) fn add_rule(
        &mut self,
        lhs: Vec<Statement>,
        rhs: Statement,
        support: Option<Justification>,
    ) -> RuleId {
        let key = (lhs, rhs);
        if self.config.logs_details() {
            tracing::debug!(rule = %super::item::format_rule(&key.0, &key.1), derived = support.is_some(), "KB: adicionando regra");
        }

        if let Some(&id) = self.rule_index.get(&key) {
            match support {
                Some(justification) => {
                    self.attach_support(ItemId::Rule(id), justification);
                }
                None => self.rule_mut(id).asserted = true,
            }
            return id;
        }

        let id = RuleId(self.rule_base + self.rules.len());
        self.rules
            .push(Some(Rule::new(key.0.clone(), key.1.clone(), support.is_none())));
        self.rule_index.insert(key, id);
        if let Some(justification) = support {
            self.attach_support(ItemId::Rule(id), justification);
        }

        let fact_ids: Vec<FactId> = self.facts().map(|(fact_id, _)| fact_id).collect();
        self.agenda.extend(fact_ids.into_iter().map(|fact_id| (fact_id, id)));
        id
    }

    /// Anexa uma justificativa a `target` e registra os back-links nas duas
    /// premissas. Um par já presente não é duplicado.
    ///
    /// Retorna `false` quando o par já existia.
    fn attach_support(&mut self, target: ItemId, justification: Justification) -> bool {
        let supported_by = match target {
            ItemId::Fact(id) => &mut self.fact_mut(id).supported_by,
            ItemId::Rule(id) => &mut self.rule_mut(id).supported_by,
        };
        if supported_by.contains(&justification) {
            return false;
        }
        supported_by.push(justification);

        match target {
            ItemId::Fact(id) => {
                self.fact_mut(justification.fact).supports_facts.push(id);
                self.rule_mut(justification.rule).supports_facts.push(id);
            }
            ItemId::Rule(id) => {
                self.fact_mut(justification.fact).supports_rules.push(id);
                self.rule_mut(justification.rule).supports_rules.push(id);
            }
        }
        true
    }

    // ─── Consulta ──────────────────────────────────────────────

    /// Casa um padrão de fato contra todos os fatos armazenados.
    ///
    /// Respostas seguem a ordem de inserção dos fatos. Uma regra não é um
    /// padrão válido: a consulta é registrada como inválida e o resultado é vazio.
    pub fn ask(&self, query: &Assertion) -> Vec<Answer> {
        let pattern = match query {
            Assertion::Fact(statement) => statement,
            Assertion::Rule { .. } => {
                tracing::warn!(query = %query, "KB: consulta inválida, apenas padrões de fato são aceitos");
                return Vec::new();
            }
        };

        let answers: Vec<Answer> = self
            .facts()
            .filter_map(|(id, fact)| {
                match_statements(pattern, &fact.statement).map(|bindings| Answer { bindings, fact: id })
            })
            .collect();

        if self.config.logs_operations() {
            tracing::info!(pattern = %pattern, answers = answers.len(), "KB: consulta");
        }
        answers
    }

    // ─── Busca estrutural ──────────────────────────────────────

    /// Id canônico do fato com este statement, se armazenado.
    pub fn fact_id(&self, statement: &Statement) -> Option<FactId> {
        self.fact_index.get(statement).copied()
    }

    /// Id canônico da regra `(lhs, rhs)`, se armazenada.
    pub fn rule_id(&self, lhs: &[Statement], rhs: &Statement) -> Option<RuleId> {
        // HashMap<(Vec, Statement)> não aceita busca por fatia emprestada
        self.rule_index.get(&(lhs.to_vec(), rhs.clone())).copied()
    }

    /// Resolve uma [`Assertion`] para o item canônico correspondente.
    pub fn lookup(&self, assertion: &Assertion) -> Option<ItemId> {
        match assertion {
            Assertion::Fact(statement) => self.fact_id(statement).map(ItemId::Fact),
            Assertion::Rule { lhs, rhs } => self.rule_id(lhs, rhs).map(ItemId::Rule),
        }
    }

    pub fn contains(&self, assertion: &Assertion) -> bool {
        self.lookup(assertion).is_some()
    }

    // ─── Inspeção ──────────────────────────────────────────────

    pub fn fact(&self, id: FactId) -> Option<&Fact> {
        let slot = id.0.checked_sub(self.fact_base)?;
        self.facts.get(slot).and_then(Option::as_ref)
    }

    pub fn rule(&self, id: RuleId) -> Option<&Rule> {
        let slot = id.0.checked_sub(self.rule_base)?;
        self.rules.get(slot).and_then(Option::as_ref)
    }

    /// Fatos armazenados, em ordem de inserção.
    pub fn facts(&self) -> impl Iterator<Item = (FactId, &Fact)> {
        let base = self.fact_base;
        self.facts
            .iter()
            .enumerate()
            .filter_map(move |(i, slot)| slot.as_ref().map(|fact| (FactId(base + i), fact)))
    }

    /// Regras armazenadas, em ordem de inserção.
    pub fn rules(&self) -> impl Iterator<Item = (RuleId, &Rule)> {
        let base = self.rule_base;
        self.rules
            .iter()
            .enumerate()
            .filter_map(move |(i, slot)| slot.as_ref().map(|rule| (RuleId(base + i), rule)))
    }

    pub fn fact_count(&self) -> usize {
        self.fact_index.len()
    }

    pub fn rule_count(&self) -> usize {
        self.rule_index.len()
    }

    /// Snapshot JSON (pretty) dos fatos e regras, para depuração.
    ///
    /// Não é um formato de persistência: nada o lê de volta.
    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct Snapshot<'a> {
            facts: Vec<Entry<FactId, &'a Fact>>,
            rules: Vec<Entry<RuleId, &'a Rule>>,
        }
        #[derive(Serialize)]
        struct Entry<I, T> {
            id: I,
            #[serde(flatten)]
            item: T,
        }

        let snapshot = Snapshot {
            facts: self.facts().map(|(id, item)| Entry { id, item }).collect(),
            rules: self.rules().map(|(id, item)| Entry { id, item }).collect(),
        };
        serde_json::to_string_pretty(&snapshot)
    }

    // ─── Acesso interno ────────────────────────────────────────
    //
    // Uma justificativa apontando para um slot vazio é uma invariante
    // quebrada, não um erro recuperável.

    pub(super) fn fact_mut(&mut self, id: FactId) -> &mut Fact {
        let slot = id.0.checked_sub(self.fact_base);
        match slot.and_then(|i| self.facts.get_mut(i)).and_then(Option::as_mut) {
            Some(fact) => fact,
            None => panic!("invariante violada: fato {} não está na base", id),
        }
    }

    pub(super) fn rule_mut(&mut self, id: RuleId) -> &mut Rule {
        let slot = id.0.checked_sub(self.rule_base);
        match slot.and_then(|i| self.rules.get_mut(i)).and_then(Option::as_mut) {
            Some(rule) => rule,
            None => panic!("invariante violada: regra {} não está na base", id),
        }
    }

    pub(super) fn fact_ref(&self, id: FactId) -> &Fact {
        match self.fact(id) {
            Some(fact) => fact,
            None => panic!("invariante violada: fato {} não está na base", id),
        }
    }

    pub(super) fn rule_ref(&self, id: RuleId) -> &Rule {
        match self.rule(id) {
            Some(rule) => rule,
            None => panic!("invariante violada: regra {} não está na base", id),
        }
    }

    /// Esvazia o slot do fato, deixando um `None` no lugar.
    pub(super) fn take_fact(&mut self, id: FactId) -> Option<Fact> {
        let slot = id.0.checked_sub(self.fact_base)?;
        self.facts.get_mut(slot).and_then(Option::take)
    }

    pub(super) fn take_rule(&mut self, id: RuleId) -> Option<Rule> {
        let slot = id.0.checked_sub(self.rule_base)?;
        self.rules.get_mut(slot).and_then(Option::take)
    }
}

impl fmt::Display for KnowledgeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Knowledge Base:")?;
        for (_, fact) in self.facts() {
            writeln!(f, "{}", fact)?;
        }
        for (_, rule) in self.rules() {
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::Term;

    pub(crate) fn st(pred: &str, args: &[&str]) -> Statement {
        Statement::parse_tokens(pred, args)
    }

    pub(crate) fn fact(pred: &str, args: &[&str]) -> Assertion {
        Assertion::fact(st(pred, args))
    }

    fn sorted<T: Ord>(mut v: Vec<T>) -> Vec<T> {
        v.sort();
        v
    }

    /// Verifica que cada justificativa tem exatamente um back-link em cada
    /// premissa, e que todo back-link corresponde a uma justificativa.
    pub(crate) fn assert_links_consistent(kb: &KnowledgeBase) {
        let mut expected_f: HashMap<ItemId, Vec<FactId>> = HashMap::new();
        let mut expected_r: HashMap<ItemId, Vec<RuleId>> = HashMap::new();
        for (id, f) in kb.facts() {
            assert!(f.asserted || f.is_supported(), "fato {} sem suporte", f);
            for j in &f.supported_by {
                assert!(kb.fact(j.fact).is_some());
                assert!(kb.rule(j.rule).is_some());
                expected_f.entry(ItemId::Fact(j.fact)).or_default().push(id);
                expected_f.entry(ItemId::Rule(j.rule)).or_default().push(id);
            }
        }
        for (id, r) in kb.rules() {
            assert!(r.asserted || r.is_supported(), "regra {} sem suporte", r);
            for j in &r.supported_by {
                assert!(kb.fact(j.fact).is_some());
                assert!(kb.rule(j.rule).is_some());
                expected_r.entry(ItemId::Fact(j.fact)).or_default().push(id);
                expected_r.entry(ItemId::Rule(j.rule)).or_default().push(id);
            }
        }
        for (id, f) in kb.facts() {
            let key = ItemId::Fact(id);
            assert_eq!(sorted(f.supports_facts.clone()), sorted(expected_f.remove(&key).unwrap_or_default()));
            assert_eq!(sorted(f.supports_rules.clone()), sorted(expected_r.remove(&key).unwrap_or_default()));
        }
        for (id, r) in kb.rules() {
            let key = ItemId::Rule(id);
            assert_eq!(sorted(r.supports_facts.clone()), sorted(expected_f.remove(&key).unwrap_or_default()));
            assert_eq!(sorted(r.supports_rules.clone()), sorted(expected_r.remove(&key).unwrap_or_default()));
        }
    }

    /// Afirmar o mesmo fato duas vezes mantém um único fato afirmado
    #[test]
    fn test_idempotent_assertion() {
        let mut kb = KnowledgeBase::new();
        kb.assert(fact("isa", &["cube", "block"]));
        kb.assert(fact("isa", &["cube", "block"]));

        assert_eq!(kb.fact_count(), 1);
        let id = kb.fact_id(&st("isa", &["cube", "block"])).unwrap();
        let f = kb.fact(id).unwrap();
        assert!(f.asserted);
        assert!(f.supported_by.is_empty());
        assert_links_consistent(&kb);
    }

    /// Forward chaining com a regra afirmada antes ou depois do fato
    #[test]
    fn test_closure_in_either_order() {
        let rule = Assertion::rule(vec![st("p", &["?x"])], st("q", &["?x"]));

        for fact_first in [true, false] {
            let mut kb = KnowledgeBase::new();
            if fact_first {
                kb.assert(fact("p", &["a"]));
                kb.assert(rule.clone());
            } else {
                kb.assert(rule.clone());
                kb.assert(fact("p", &["a"]));
            }

            let q = kb.fact(kb.fact_id(&st("q", &["a"])).unwrap()).unwrap();
            assert!(!q.asserted);
            let p_id = kb.fact_id(&st("p", &["a"])).unwrap();
            let r_id = kb.rule_id(&[st("p", &["?x"])], &st("q", &["?x"])).unwrap();
            assert_eq!(q.supported_by, vec![Justification::new(p_id, r_id)]);
            assert_links_consistent(&kb);
        }
    }

    /// Regra com dois antecedentes gera primeiro uma regra parcial
    #[test]
    fn test_partial_chaining() {
        let mut kb = KnowledgeBase::new();
        kb.assert(fact("p", &["a"]));
        kb.assert(Assertion::rule(
            vec![st("p", &["?x"]), st("r", &["?x"])],
            st("q", &["?x"]),
        ));

        assert!(kb.rule_id(&[st("r", &["a"])], &st("q", &["a"])).is_some());
        assert!(kb.fact_id(&st("q", &["a"])).is_none());

        kb.assert(fact("r", &["a"]));
        assert!(kb.fact_id(&st("q", &["a"])).is_some());
        assert_links_consistent(&kb);
    }

    /// Uma derivação que chega a um fato já afirmado só adiciona a justificativa
    #[test]
    fn test_merge_keeps_asserted_and_adds_support() {
        let mut kb = KnowledgeBase::new();
        kb.assert(fact("q", &["a"]));
        kb.assert(fact("p", &["a"]));
        kb.assert(Assertion::rule(vec![st("p", &["?x"])], st("q", &["?x"])));

        assert_eq!(kb.fact_count(), 2);
        let q = kb.fact(kb.fact_id(&st("q", &["a"])).unwrap()).unwrap();
        assert!(q.asserted);
        assert_eq!(q.supported_by.len(), 1);
        assert_links_consistent(&kb);
    }

    /// Duas derivações independentes do mesmo fato ficam registradas
    #[test]
    fn test_alternate_derivations_accumulate() {
        let mut kb = KnowledgeBase::new();
        kb.assert(Assertion::rule(vec![st("p", &["?x"])], st("q", &["?x"])));
        kb.assert(Assertion::rule(vec![st("s", &["?x"])], st("q", &["?x"])));
        kb.assert(fact("p", &["a"]));
        kb.assert(fact("s", &["a"]));

        let q = kb.fact(kb.fact_id(&st("q", &["a"])).unwrap()).unwrap();
        assert_eq!(q.supported_by.len(), 2);
        assert_links_consistent(&kb);
    }

    /// `assert` devolve as derivações na ordem da agenda
    #[test]
    fn test_assert_reports_derivations() {
        let mut kb = KnowledgeBase::new();
        kb.assert(Assertion::rule(vec![st("p", &["?x"])], st("q", &["?x"])));
        kb.assert(Assertion::rule(vec![st("q", &["?x"])], st("s", &["?x"])));
        let results = kb.assert(fact("p", &["a"]));

        let derived: Vec<String> = results
            .iter()
            .map(|r| match r.item {
                ItemId::Fact(id) => kb.fact(id).unwrap().statement.to_string(),
                ItemId::Rule(id) => kb.rule(id).unwrap().rhs.to_string(),
            })
            .collect();
        assert_eq!(derived, vec!["(q a)", "(s a)"]);
    }

    /// Consulta devolve as ligações na ordem de inserção
    #[test]
    fn test_ask_in_store_order() {
        let mut kb = KnowledgeBase::new();
        kb.assert(fact("p", &["a"]));
        kb.assert(fact("r", &["z"]));
        kb.assert(fact("p", &["b"]));

        let answers = kb.ask(&fact("p", &["?x"]));
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].bindings.bound_to("x"), Some(&Term::constant("a")));
        assert_eq!(answers[1].bindings.bound_to("x"), Some(&Term::constant("b")));
        assert_eq!(kb.fact(answers[0].fact).unwrap().statement, st("p", &["a"]));
    }

    #[test]
    fn test_ask_no_match_and_invalid_query() {
        let mut kb = KnowledgeBase::new();
        kb.assert(fact("p", &["a"]));
        assert!(kb.ask(&fact("q", &["?x"])).is_empty());

        let rule = Assertion::rule(vec![st("p", &["?x"])], st("q", &["?x"]));
        assert!(kb.ask(&rule).is_empty());
    }

    /// Consulta ground casa com ligações vazias
    #[test]
    fn test_ask_ground() {
        let mut kb = KnowledgeBase::new();
        kb.assert(fact("p", &["a"]));
        let answers = kb.ask(&fact("p", &["a"]));
        assert_eq!(answers.len(), 1);
        assert!(answers[0].bindings.is_empty());
    }

    #[test]
    fn test_display_and_json() {
        let mut kb = KnowledgeBase::new();
        kb.assert(fact("p", &["a"]));
        kb.assert(Assertion::rule(vec![st("p", &["?x"])], st("q", &["?x"])));

        let text = kb.to_string();
        assert!(text.starts_with("Knowledge Base:\n"));
        assert!(text.contains("(p a) ASSERTED"));
        assert!(text.contains("(q a) DERIVED"));
        assert!(text.contains("((p ?x)) -> (q ?x) ASSERTED"));

        let json: serde_json::Value = serde_json::from_str(&kb.to_json().unwrap()).unwrap();
        assert_eq!(json["facts"].as_array().unwrap().len(), 2);
        assert_eq!(json["rules"][0]["asserted"], true);
    }

    #[test]
    fn test_clear() {
        let mut kb = KnowledgeBase::new();
        kb.assert(fact("p", &["a"]));
        kb.clear();
        assert_eq!(kb.fact_count(), 0);
        assert_eq!(kb.facts().count(), 0);
        assert!(!kb.contains(&fact("p", &["a"])));
    }

    /// Depois do `clear()` a arena é liberada e os ids não se repetem
    #[test]
    fn test_clear_releases_arena_without_reusing_ids() {
        let mut kb = KnowledgeBase::new();
        kb.assert(fact("p", &["a"]));
        kb.assert(Assertion::rule(vec![st("p", &["?x"])], st("q", &["?x"])));
        kb.retract(&fact("p", &["a"]));
        kb.clear();
        assert!(kb.facts.is_empty());
        assert!(kb.rules.is_empty());

        kb.assert(fact("s", &["b"]));
        kb.assert(Assertion::rule(vec![st("s", &["?x"])], st("t", &["?x"])));
        let s = kb.fact_id(&st("s", &["b"])).unwrap();
        let t = kb.fact_id(&st("t", &["b"])).unwrap();
        assert_eq!(s, FactId(2));
        assert_eq!(t, FactId(3));
        assert!(kb.fact(FactId(0)).is_none());
        assert!(kb.rule(RuleId(0)).is_none());
        assert_eq!(
            kb.facts().map(|(id, _)| id).collect::<Vec<_>>(),
            vec![FactId(2), FactId(3)]
        );
        assert_eq!(kb.rule_id(&[st("s", &["?x"])], &st("t", &["?x"])), Some(RuleId(1)));
        assert_links_consistent(&kb);
    }
}
