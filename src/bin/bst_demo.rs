//! Builds a tree from the command line, removes and looks up values, then
//! prints the requested traversals.
//!
//! With no arguments it replays the classic walkthrough: insert 8 9 4 7 2,
//! remove 4, look up 9 and 4, and print every traversal.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use plain_bst::{Traversal, Tree};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Insert, remove, find and traverse values in an unbalanced binary search tree
#[derive(Parser, Debug)]
#[command(name = "bst_demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Values to insert, in order
    #[arg(default_values_t = [8, 9, 4, 7, 2])]
    values: Vec<i64>,

    /// Values to remove after inserting
    #[arg(short, long, default_values_t = [4])]
    remove: Vec<i64>,

    /// Values to look up after removing
    #[arg(short, long, default_values_t = [9, 4])]
    find: Vec<i64>,

    /// Traversals to print: in-order, pre-order, post-order, level-order
    #[arg(short, long, default_values_t = [
        Traversal::LevelOrder,
        Traversal::PreOrder,
        Traversal::PostOrder,
        Traversal::InOrder,
    ])]
    traversal: Vec<Traversal>,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli, io::stdout().lock()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli, mut out: impl Write) -> io::Result<()> {
    let mut tree = Tree::new();
    for value in &cli.values {
        if !tree.insert(*value) {
            tracing::info!(value, "skipping duplicate");
        }
    }
    for value in &cli.remove {
        tree.remove(value);
    }
    writeln!(out, "Done")?;

    for value in &cli.find {
        match tree.find(value) {
            Some(node) => writeln!(out, "Node value: {}", node.value())?,
            None => writeln!(out, "Element not found")?,
        }
    }

    for strategy in &cli.traversal {
        tree.write_traversal(*strategy, &mut out)?;
    }
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins over -d when it is set.
    let env_filter = EnvFilter::builder()
        .with_default_directive(filter.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .init();

    tracing::debug!(?filter, "logging initialised");
}
