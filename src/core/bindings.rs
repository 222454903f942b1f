//! # Bindings — Substituições, Matching e Instanciação
//!
//! Este módulo concentra as duas primitivas de unificação que o motor de
//! inferência e as consultas usam:
//!
//! | Função | Entrada | Saída |
//! |--------|---------|-------|
//! | [`match_statements`] | padrão + candidato | `Some(Bindings)` ou `None` |
//! | [`instantiate`] | statement + bindings | statement com variáveis substituídas |
//!
//! ## Exemplo
//!
//! ```rust
//! use logic_kb::core::{instantiate, match_statements, Statement};
//!
//! let padrao = Statement::parse_tokens("isa", &["?x", "block"]);
//! let fato = Statement::parse_tokens("isa", &["cube", "block"]);
//!
//! let b = match_statements(&padrao, &fato).unwrap();
//! let rhs = Statement::parse_tokens("pretty", &["?x"]);
//! assert_eq!(instantiate(&rhs, &b).to_string(), "(pretty cube)");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::statement::{Statement, Term};

/// Mapeamento ordenado variável → termo.
///
/// A ordem de inserção é preservada porque é a ordem em que as variáveis
/// aparecem no padrão, e é assim que as respostas são exibidas (`?x : cube`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bindings {
    entries: Vec<(String, Term)>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Termo ligado à variável `name` (sem `?`), se houver.
    pub fn bound_to(&self, name: &str) -> Option<&Term> {
        self.entries
            .iter()
            .find(|(var, _)| var == name)
            .map(|(_, term)| term)
    }

    /// Liga `name` a `value` sem verificar ligações anteriores.
    pub fn bind(&mut self, name: impl Into<String>, value: Term) {
        self.entries.push((name.into(), value));
    }

    /// Testa a ligação existente ou cria uma nova.
    ///
    /// - Variável já ligada → `true` somente se o valor ligado for igual a `value`
    /// - Variável livre → liga e retorna `true`
    pub fn test_and_bind(&mut self, name: &str, value: &Term) -> bool {
        match self.bound_to(name) {
            Some(bound) => bound == value,
            None => {
                self.bind(name, value.clone());
                true
            }
        }
    }

    /// Itera sobre os pares (variável, termo) na ordem de ligação.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.entries.iter().map(|(var, term)| (var.as_str(), term))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(var, term)| format!("?{} : {}", var, term))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Tenta unificar dois statements planos.
///
/// Predicado e aridade devem ser iguais. Para cada par de argumentos:
///
/// 1. variável à esquerda → testa/liga ao termo da direita
/// 2. senão, variável à direita → testa/liga ao termo da esquerda
/// 3. senão, as duas constantes devem ser idênticas
///
/// As ligações valem para o statement inteiro: `(p ?x ?x)` não casa com `(p a b)`.
pub fn match_statements(pattern: &Statement, candidate: &Statement) -> Option<Bindings> {
    if pattern.predicate != candidate.predicate || pattern.arity() != candidate.arity() {
        return None;
    }

    let mut bindings = Bindings::new();
    for (left, right) in pattern.terms.iter().zip(&candidate.terms) {
        let consistent = match (left, right) {
            (Term::Variable(var), _) => bindings.test_and_bind(var, right),
            (_, Term::Variable(var)) => bindings.test_and_bind(var, left),
            (Term::Constant(a), Term::Constant(b)) => a == b,
        };
        if !consistent {
            return None;
        }
    }
    Some(bindings)
}

/// Aplica `bindings` a um statement. Variáveis sem ligação permanecem.
pub fn instantiate(statement: &Statement, bindings: &Bindings) -> Statement {
    let terms = statement
        .terms
        .iter()
        .map(|term| match term {
            Term::Variable(var) => bindings.bound_to(var).cloned().unwrap_or_else(|| term.clone()),
            Term::Constant(_) => term.clone(),
        })
        .collect();
    Statement::new(statement.predicate.clone(), terms)
}

/// [`instantiate`] aplicado a cada statement da lista.
pub fn instantiate_all(statements: &[Statement], bindings: &Bindings) -> Vec<Statement> {
    statements
        .iter()
        .map(|st| instantiate(st, bindings))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn st(pred: &str, args: &[&str]) -> Statement {
        Statement::parse_tokens(pred, args)
    }

    #[test]
    fn test_match_binds_variables() {
        let b = match_statements(&st("isa", &["?x", "block"]), &st("isa", &["cube", "block"]))
            .unwrap();
        assert_eq!(b.bound_to("x"), Some(&Term::constant("cube")));
        assert_eq!(b.len(), 1);
    }

    /// Variáveis do lado do candidato também são ligadas (forward chaining
    /// passa o fato à esquerda e o antecedente da regra à direita)
    #[test]
    fn test_match_binds_right_side_variables() {
        let b = match_statements(&st("isa", &["cube", "block"]), &st("isa", &["?y", "block"]))
            .unwrap();
        assert_eq!(b.bound_to("y"), Some(&Term::constant("cube")));
    }

    #[test]
    fn test_match_fails_on_constant_mismatch() {
        assert!(match_statements(&st("isa", &["?x", "block"]), &st("isa", &["cube", "box"])).is_none());
        assert!(match_statements(&st("isa", &["?x"]), &st("isa", &["a", "b"])).is_none());
        assert!(match_statements(&st("color", &["?x"]), &st("isa", &["a"])).is_none());
    }

    /// A mesma variável deve casar com o mesmo termo em todo o statement
    #[test]
    fn test_match_consistency() {
        assert!(match_statements(&st("same", &["?x", "?x"]), &st("same", &["a", "b"])).is_none());
        assert!(match_statements(&st("same", &["?x", "?x"]), &st("same", &["a", "a"])).is_some());
    }

    #[test]
    fn test_instantiate_leaves_unbound() {
        let mut b = Bindings::new();
        b.bind("x", Term::constant("cube"));
        let out = instantiate(&st("on", &["?x", "?y"]), &b);
        assert_eq!(out, st("on", &["cube", "?y"]));
    }

    #[test]
    fn test_instantiate_all() {
        let mut b = Bindings::new();
        b.bind("x", Term::constant("a"));
        let out = instantiate_all(&[st("p", &["?x"]), st("q", &["?x", "b"])], &b);
        assert_eq!(out, vec![st("p", &["a"]), st("q", &["a", "b"])]);
    }

    #[test]
    fn test_display() {
        let mut b = Bindings::new();
        b.bind("x", Term::constant("a"));
        b.bind("y", Term::constant("b"));
        assert_eq!(b.to_string(), "?x : a, ?y : b");
    }
}
