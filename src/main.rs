//! 8-Puzzle Inspector
//!
//! Loads a 3x3 sliding-puzzle configuration and reports its rendering,
//! solvability and legal successors, or grows a duplicate-free search tree
//! from it to a fixed depth.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;
use rustc_hash::FxHashSet;

use eightpuzzle::{legal_actions, loader, successor_nodes, successor_states};
use eightpuzzle::{PuzzleState, SearchTree};

/// Inspects 8-puzzle configurations.
#[derive(Parser)]
#[command(name = "eightpuzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a configuration.
    Show { file: PathBuf },
    /// Report the inversion count and whether the configuration is solvable.
    Solvable { file: PathBuf },
    /// List every legal action and the state it leads to.
    Successors { file: PathBuf },
    /// Grow a search tree breadth-first, skipping repeated states.
    Expand {
        file: PathBuf,
        /// Deepest level to generate.
        #[arg(short, long, default_value_t = 5)]
        depth: u32,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Show { file } => run_show(&file),
        Command::Solvable { file } => run_solvable(&file),
        Command::Successors { file } => run_successors(&file),
        Command::Expand { file, depth } => run_expand(&file, depth),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_show(file: &Path) -> eightpuzzle::Result<()> {
    let state = loader::load(file)?;
    println!("{state}");
    println!("blank at {}", state.blank_position());
    Ok(())
}

fn run_solvable(file: &Path) -> eightpuzzle::Result<()> {
    let state = loader::load(file)?;
    println!("{}", format_solvability(&state));
    Ok(())
}

fn run_successors(file: &Path) -> eightpuzzle::Result<()> {
    let state = loader::load(file)?;
    print!("{}", format_successors(&state));
    Ok(())
}

fn run_expand(file: &Path, depth: u32) -> eightpuzzle::Result<()> {
    let state = loader::load(file)?;
    let (tree, layers) = grow_tree(state, depth)?;
    for (level, count) in layers.iter().enumerate() {
        println!("depth {level}: {count} new states");
    }
    println!("{} nodes in tree", tree.len());
    Ok(())
}

fn format_solvability(state: &PuzzleState) -> String {
    let verdict = if state.is_solvable() {
        "solvable"
    } else {
        "unsolvable"
    };
    format!("{} inversions: {verdict}", state.inversions())
}

fn format_successors(state: &PuzzleState) -> String {
    let mut output = String::new();
    for (action, next) in legal_actions(state).into_iter().zip(successor_states(state)) {
        output.push_str(&format!("{action} ({}):\n{next}\n", action.symbol()));
    }
    output
}

/// Breadth-first growth up to `max_depth`, attaching only unseen states.
///
/// Returns the tree and how many new states each level added. Each attached
/// node's cost is its depth; expanded nodes are marked visited.
fn grow_tree(start: PuzzleState, max_depth: u32) -> eightpuzzle::Result<(SearchTree, Vec<usize>)> {
    let mut tree = SearchTree::new(start);
    let mut seen: FxHashSet<PuzzleState> = FxHashSet::default();
    seen.insert(start);

    let mut frontier = vec![tree.root()];
    let mut layers = vec![1];

    for depth in 1..=max_depth {
        let mut next_frontier = Vec::new();
        for id in frontier {
            tree.node_mut(id).set_visited(true);
            for child in successor_nodes(&tree, id) {
                if !seen.insert(*child.state()) {
                    continue;
                }
                let child_id = tree.attach(child)?;
                let node = tree.node_mut(child_id);
                node.set_cost(depth);
                node.set_total_cost(depth);
                next_frontier.push(child_id);
            }
        }

        info!("depth {depth}: {} new states", next_frontier.len());
        if next_frontier.is_empty() {
            break;
        }
        layers.push(next_frontier.len());
        frontier = next_frontier;
    }

    Ok((tree, layers))
}
