// respell-train: Build a word frequency model from text.
//
// Counts every word (maximal run of ASCII letters, lowercased) in the
// given corpus files and writes the counts as JSON. With `--existing`,
// the counts are added to a previously saved model.
//
// Usage:
//   respell-train [--existing MODEL] -o OUTPUT CORPUS...

use std::path::PathBuf;

use clap::Parser;
use respell_engine::loader::write_model;
use tracing::info;

#[derive(Parser)]
#[command(name = "respell-train", version)]
#[command(about = "Count word frequencies in a corpus and save them as JSON")]
struct Args {
    /// Corpus text files
    #[arg(required = true, value_name = "CORPUS")]
    corpus: Vec<PathBuf>,

    /// Model to add the new counts to
    #[arg(short, long, value_name = "PATH")]
    existing: Option<PathBuf>,

    /// Where to write the model
    #[arg(short, long, value_name = "PATH")]
    output: PathBuf,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    respell_cli::init_tracing(args.verbose);

    let model = respell_cli::load_model(args.existing.as_deref(), &args.corpus)
        .unwrap_or_else(|e| respell_cli::fatal(&e))
        .unwrap_or_default();

    write_model(&args.output, &model).unwrap_or_else(|e| respell_cli::fatal(&e.to_string()));
    info!(
        path = %args.output.display(),
        words = model.len(),
        tokens = model.total(),
        "wrote model"
    );
}
