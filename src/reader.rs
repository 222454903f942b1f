//! # Reader — Formato Textual de Fatos e Regras
//!
//! Converte o formato de texto dos arquivos `.kb` em [`Assertion`]s.
//!
//! ## Formato
//!
//! ```text
//! # comentário
//! fact: (isa cube block)
//! fact: (color cube red)
//! rule: ((isa ?x block) (color ?x red)) -> (pretty ?x)
//! ```
//!
//! - Um item por linha; linhas vazias e comentários (`#`) são ignorados
//! - Tokens iniciados por `?` são variáveis; o resto é constante
//! - O primeiro token de um statement é o predicado (nunca uma variável)
//!
//! A gramática fica em `kb.pest`; este módulo só monta os tipos do
//! [`core`](crate::core) a partir da árvore devolvida pelo pest.
//!
//! ## Exemplo
//!
//! ```rust
//! use logic_kb::reader::parse_assertion;
//!
//! let item = parse_assertion("rule: ((isa ?x block)) -> (pretty ?x)").unwrap();
//! assert_eq!(item.to_string(), "rule: ((isa ?x block)) -> (pretty ?x)");
//! ```

use std::path::{Path, PathBuf};

use pest::error::LineColLocation;
use pest::iterators::{Pair, Pairs};
use pest::Parser as PestParser;
use pest_derive::Parser;
use thiserror::Error;

use crate::core::{Assertion, Statement, Term};

#[derive(Parser)]
#[grammar = "kb.pest"]
struct KbParser;

/// Erro de sintaxe em um único item.
#[derive(Debug, Error)]
pub enum SyntaxError {
    #[error("erro de sintaxe: {0}")]
    Pest(#[from] pest::error::Error<Rule>),

    #[error("regra inesperada: {0:?}")]
    Unexpected(Rule),

    #[error("faltou {0:?}")]
    Missing(Rule),
}

/// Erro de leitura de um documento ou arquivo.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("falha ao ler {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("linha {line}: {source}")]
    Syntax {
        line: usize,
        #[source]
        source: SyntaxError,
    },
}

/// Lê um statement isolado, ex: `(isa ?x block)`.
pub fn parse_statement(input: &str) -> Result<Statement, SyntaxError> {
    build_statement(parse_line(Rule::statement_line, input)?)
}

/// Lê uma linha `fact: ...` ou `rule: ...`.
pub fn parse_assertion(input: &str) -> Result<Assertion, SyntaxError> {
    build_assertion(parse_line(Rule::assertion_line, input)?)
}

/// Lê uma consulta: aceita um statement puro ou uma linha `fact:`/`rule:`.
///
/// Uma linha `rule:` é aceita aqui para que a própria KB a rejeite como
/// consulta inválida.
pub fn parse_query(input: &str) -> Result<Assertion, SyntaxError> {
    build_assertion(parse_line(Rule::query_line, input)?)
}

/// Lê um documento inteiro, um item por linha.
pub fn parse_str(input: &str) -> Result<Vec<Assertion>, ReadError> {
    let document = KbParser::parse(Rule::document, input).map_err(|err| ReadError::Syntax {
        line: error_line(&err),
        source: err.into(),
    })?;

    document
        .flat_map(|pair| pair.into_inner())
        .filter(|pair| pair.as_rule() != Rule::EOI)
        .map(|pair| {
            let (line, _) = pair.as_span().start_pos().line_col();
            build_assertion(pair).map_err(|source| ReadError::Syntax { line, source })
        })
        .collect()
}

/// Lê um arquivo `.kb` do disco.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<Assertion>, ReadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&text)
}

/// Aplica a regra de linha inteira e devolve o único item dentro dela.
fn parse_line(rule: Rule, input: &str) -> Result<Pair<'_, Rule>, SyntaxError> {
    let mut pairs = KbParser::parse(rule, input.trim())?;
    let mut inner = expect(&mut pairs, rule)?.into_inner();
    inner.next().ok_or(SyntaxError::Missing(rule))
}

fn expect<'i>(pairs: &mut Pairs<'i, Rule>, rule: Rule) -> Result<Pair<'i, Rule>, SyntaxError> {
    match pairs.next() {
        Some(pair) if pair.as_rule() == rule => Ok(pair),
        Some(pair) => Err(SyntaxError::Unexpected(pair.as_rule())),
        None => Err(SyntaxError::Missing(rule)),
    }
}

fn error_line(err: &pest::error::Error<Rule>) -> usize {
    match err.line_col {
        LineColLocation::Pos((line, _)) | LineColLocation::Span((line, _), _) => line,
    }
}

fn build_assertion(pair: Pair<Rule>) -> Result<Assertion, SyntaxError> {
    match pair.as_rule() {
        Rule::statement => Ok(Assertion::Fact(build_statement(pair)?)),
        Rule::fact_item => {
            let mut inner = pair.into_inner();
            let statement = build_statement(expect(&mut inner, Rule::statement)?)?;
            Ok(Assertion::Fact(statement))
        }
        Rule::rule_item => {
            let mut inner = pair.into_inner();
            let lhs = expect(&mut inner, Rule::antecedents)?
                .into_inner()
                .map(build_statement)
                .collect::<Result<Vec<_>, _>>()?;
            let rhs = build_statement(expect(&mut inner, Rule::statement)?)?;
            Ok(Assertion::Rule { lhs, rhs })
        }
        r => Err(SyntaxError::Unexpected(r)),
    }
}

fn build_statement(pair: Pair<Rule>) -> Result<Statement, SyntaxError> {
    if pair.as_rule() != Rule::statement {
        return Err(SyntaxError::Unexpected(pair.as_rule()));
    }
    let mut inner = pair.into_inner();
    let predicate = expect(&mut inner, Rule::predicate)?.as_str().to_string();
    let terms = inner.map(build_term).collect::<Result<Vec<_>, _>>()?;
    Ok(Statement::new(predicate, terms))
}

fn build_term(pair: Pair<Rule>) -> Result<Term, SyntaxError> {
    match pair.as_rule() {
        Rule::variable | Rule::constant => Ok(Term::from_token(pair.as_str())),
        r => Err(SyntaxError::Unexpected(r)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
# blocos
fact: (isa cube block)
fact: (color cube red)   # cor

rule: ((isa ?x block) (color ?x red)) -> (pretty ?x)
";

    #[test]
    fn test_parse_statement() {
        let st = parse_statement("(isa ?x block)").unwrap();
        assert_eq!(st.predicate, "isa");
        assert_eq!(st.terms, vec![Term::variable("x"), Term::constant("block")]);

        let st = parse_statement("  ( ready )  ").unwrap();
        assert_eq!(st.predicate, "ready");
        assert!(st.terms.is_empty());
    }

    #[test]
    fn test_parse_fact_and_rule() {
        let fact = parse_assertion("fact: (isa cube block)").unwrap();
        assert_eq!(fact, Assertion::Fact(Statement::parse_tokens("isa", &["cube", "block"])));

        let rule = parse_assertion("rule: ((isa ?x block) (color ?x red)) -> (pretty ?x)").unwrap();
        match rule {
            Assertion::Rule { lhs, rhs } => {
                assert_eq!(lhs.len(), 2);
                assert_eq!(rhs, Statement::parse_tokens("pretty", &["?x"]));
            }
            other => panic!("esperava regra, veio {:?}", other),
        }
    }

    /// Display e reader usam o mesmo formato
    #[test]
    fn test_display_is_readable() {
        let line = "rule: ((on ?x ?y) (on ?y ?z)) -> (above ?x ?z)";
        assert_eq!(parse_assertion(line).unwrap().to_string(), line);
    }

    #[test]
    fn test_syntax_errors() {
        for bad in ["()", "(isa cube", "(isa cube) extra", "(?p a)", "isa cube"] {
            assert!(matches!(parse_statement(bad), Err(SyntaxError::Pest(_))), "{}", bad);
        }
        for bad in [
            "rule: () -> (q ?x)",
            "rule: ((p ?x)) => (q ?x)",
            "rule: ((p ?x))",
            "query: (p ?x)",
            "fact (p a)",
            "fact: (p a) (q b)",
        ] {
            assert!(matches!(parse_assertion(bad), Err(SyntaxError::Pest(_))), "{}", bad);
        }
    }

    #[test]
    fn test_parse_query() {
        assert!(parse_query("(p ?x)").unwrap().is_fact_pattern());
        assert!(parse_query("fact: (p ?x)").unwrap().is_fact_pattern());
        assert!(!parse_query("rule: ((p ?x)) -> (q ?x)").unwrap().is_fact_pattern());
    }

    /// Comentários, linhas vazias e finais CRLF são ignorados
    #[test]
    fn test_parse_str_skips_comments() {
        let items = parse_str(SAMPLE).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].to_string(), "fact: (color cube red)");

        let items = parse_str("fact: (p a)\r\n\r\nfact: (p b)\r\n").unwrap();
        assert_eq!(items.len(), 2);
        assert!(parse_str("").unwrap().is_empty());
    }

    /// Dois itens na mesma linha não são aceitos
    #[test]
    fn test_parse_str_one_item_per_line() {
        assert!(parse_str("fact: (p a) fact: (p b)").is_err());
    }

    /// O erro informa a linha do documento
    #[test]
    fn test_parse_str_reports_line() {
        let err = parse_str("fact: (p a)\n\nfact: (p\n").unwrap_err();
        match err {
            ReadError::Syntax { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(source, SyntaxError::Pest(_)));
            }
            other => panic!("esperava erro de sintaxe, veio {:?}", other),
        }
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let items = read_file(file.path()).unwrap();
        assert_eq!(items.len(), 3);
        assert!(matches!(
            read_file(file.path().with_extension("missing")),
            Err(ReadError::Io { .. })
        ));
    }
}
