//! Command implementations for the Rinku CLI.

use std::sync::Arc;

use serde::Serialize;

use crate::cli::args::{Command, GraphArgs, KanjiArgs, RinkuArgs, SuggestArgs};
use crate::corpus::CorpusStore;
use crate::error::{Result, RinkuError};
use crate::graph::GraphBuilder;
use crate::lookup::JishoLookup;

/// Execute a CLI command.
pub fn execute_command(args: RinkuArgs) -> Result<()> {
    let store = CorpusStore::open(&args.data);

    match &args.command {
        Command::Graph(graph_args) => build_graph(&store, graph_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest(&store, suggest_args.clone(), &args),
        Command::Kanji(kanji_args) => kanji_details(&store, kanji_args.clone(), &args),
    }
}

/// Build and print the graph for one word.
fn build_graph(store: &CorpusStore, args: GraphArgs, cli_args: &RinkuArgs) -> Result<()> {
    if args.word.is_empty() {
        return Err(RinkuError::invalid_input("word text must not be empty"));
    }

    let word = store
        .resolve_by_text(&args.word)?
        .ok_or_else(|| RinkuError::not_found(format!("word '{}' is not in the corpus", args.word)))?;

    let graph = if args.consolidated {
        let builder = GraphBuilder::with_lookup(Arc::new(JishoLookup::new()))
            .lookup_timeout(args.lookup_timeout());
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| RinkuError::other(format!("cannot start async runtime: {e}")))?;
        runtime.block_on(builder.build_consolidated(std::slice::from_ref(&word)))?
    } else {
        GraphBuilder::new().build(std::slice::from_ref(&word))
    };

    print_json(&graph, cli_args)
}

/// Print prefix suggestions.
fn suggest(store: &CorpusStore, args: SuggestArgs, cli_args: &RinkuArgs) -> Result<()> {
    let suggestions = store.suggest(&args.prefix)?;
    print_json(&suggestions, cli_args)
}

/// Print the detail record for one kanji.
fn kanji_details(store: &CorpusStore, args: KanjiArgs, cli_args: &RinkuArgs) -> Result<()> {
    let details = store.kanji_details(&args.character)?.ok_or_else(|| {
        RinkuError::not_found(format!("kanji '{}' is not in the corpus", args.character))
    })?;
    print_json(&details, cli_args)
}

fn print_json<T: Serialize>(value: &T, cli_args: &RinkuArgs) -> Result<()> {
    let json = if cli_args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
