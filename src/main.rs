//! # logic-kb — CLI
//!
//! **Ponto de entrada** da linha de comando: carrega um arquivo `.kb`, afirma
//! cada item, aplica as retrações pedidas, executa as consultas e imprime a
//! base resultante.
//!
//! ## Fluxo
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Lê o arquivo (reader)
//!   ├── Afirma cada item → forward chaining
//!   ├── --retract ...  → retração em cascata
//!   ├── --ask ...      → consultas
//!   └── Imprime a KB (texto ou JSON)
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Carregar e imprimir
//! cargo run -- demos/blocks.kb
//!
//! # Consultar e retirar, com eventos detalhados
//! cargo run -- demos/blocks.kb -v \
//!     --retract "fact: (color cube red)" --ask "(pretty ?x)"
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use logic_kb::core::{KnowledgeBase, RetractOutcome};
use logic_kb::{reader, EngineConfig, Verbosity};

/// Argumentos da linha de comando.
#[derive(Parser, Debug)]
#[command(name = "logic-kb", version, about = "Base de conhecimento com forward chaining e retração em cascata")]
struct Args {
    /// Arquivo com linhas `fact:` / `rule:`
    file: PathBuf,

    /// Consulta a executar após o carregamento, ex: "(isa ?x block)"
    #[arg(short, long = "ask", value_name = "PADRÃO")]
    ask: Vec<String>,

    /// Item a retirar antes das consultas, ex: "fact: (isa cube block)"
    #[arg(short, long = "retract", value_name = "ITEM")]
    retract: Vec<String>,

    /// Imprime a base como JSON em vez de texto
    #[arg(long)]
    json: bool,

    /// Mostra as derivações de cada afirmação
    #[arg(long)]
    explain: bool,

    /// Eventos detalhados do motor (cada add e cada tentativa de inferência)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silencia os eventos do motor
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG tem precedência; sem ele, -v liga o nível debug.
    let default_filter = if args.verbose > 0 { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = EngineConfig::new(Verbosity::from_flags(args.quiet, args.verbose));

    let items = reader::read_file(&args.file)
        .with_context(|| format!("Falha ao carregar {}", args.file.display()))?;
    if config.logs_operations() {
        tracing::info!(path = %args.file.display(), items = items.len(), "Arquivo carregado");
    }

    let mut kb = KnowledgeBase::with_config(config);

    for item in items {
        let line = item.to_string();
        let results = kb.assert(item);
        if args.explain {
            for result in &results {
                println!("{} ⇐ {}", line, result.explanation);
            }
        }
    }
    if kb.config().logs_operations() {
        tracing::info!(facts = kb.fact_count(), rules = kb.rule_count(), "KB pronta");
    }

    for text in &args.retract {
        let item = reader::parse_assertion(text)
            .with_context(|| format!("Retração inválida: {}", text))?;
        match kb.retract(&item) {
            RetractOutcome::Removed(removed) => {
                println!("Retirado {} ({} itens removidos)", item, removed.len())
            }
            RetractOutcome::Refused(reason) => println!("Retração recusada {}: {:?}", item, reason),
            RetractOutcome::NotFound => println!("Não encontrado: {}", item),
        }
    }

    for text in &args.ask {
        let query = reader::parse_query(text).with_context(|| format!("Consulta inválida: {}", text))?;
        let answers = kb.ask(&query);
        println!("Consulta {}: {} resposta(s)", text, answers.len());
        for answer in answers {
            if let Some(fact) = kb.fact(answer.fact) {
                if answer.bindings.is_empty() {
                    println!("  {}", fact.statement);
                } else {
                    println!("  {}  ({})", answer.bindings, fact.statement);
                }
            }
        }
    }

    if args.json {
        println!("{}", kb.to_json().context("Falha ao serializar a KB")?);
    } else {
        print!("{}", kb);
    }

    Ok(())
}
