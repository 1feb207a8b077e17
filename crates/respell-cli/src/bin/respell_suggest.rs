// respell-suggest: Correct misspelled words.
//
// Corrects each word given on the command line. Without arguments, reads
// words from stdin (one per line) until EOF, prompting with `>` when stdin
// is a terminal. Prints the best suggestion for each word, or
// `NO SUGGESTION`.
//
// Usage:
//   respell-suggest [OPTIONS] [WORDS]...

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use respell_core::SearchMode;
use respell_engine::{Correction, RespellHandle};

#[derive(Parser)]
#[command(name = "respell-suggest", version)]
#[command(about = "Suggest the most likely correct spelling of each word")]
struct Args {
    /// Word list file, or a directory containing `words`
    #[arg(short, long, value_name = "PATH", env = respell_cli::DICT_ENV)]
    dict: Option<PathBuf>,

    /// Training text; ranks candidates by word frequency
    #[arg(short, long, value_name = "PATH")]
    corpus: Vec<PathBuf>,

    /// Frequency model written by respell-train
    #[arg(short, long, value_name = "PATH")]
    model: Option<PathBuf>,

    /// Stop at the first category with a match, or try every category
    #[arg(long, default_value_t = SearchMode::ShortCircuit)]
    mode: SearchMode,

    /// Give up after this many vocabulary lookups
    #[arg(long, value_name = "N")]
    max_cost: Option<usize>,

    /// Also print the candidate set and both rankings
    #[arg(short, long)]
    verbose: bool,

    /// Print one JSON object per word
    #[arg(long)]
    json: bool,

    /// Words to correct (read from stdin when omitted)
    words: Vec<String>,
}

fn main() {
    let args = Args::parse();
    respell_cli::init_tracing(args.verbose);

    let model = respell_cli::load_model(args.model.as_deref(), &args.corpus)
        .unwrap_or_else(|e| respell_cli::fatal(&e));

    // A trained model doubles as the vocabulary when no word list exists.
    let vocabulary = match (respell_cli::load_vocabulary(args.dict.as_deref()), &model) {
        (Ok(vocabulary), _) => vocabulary,
        (Err(_), Some(model)) if args.dict.is_none() => model.vocabulary(),
        (Err(e), _) => respell_cli::fatal(&e),
    };

    let mut handle = RespellHandle::new(vocabulary);
    if let Some(model) = model {
        handle = handle.with_model(model);
    }
    handle.set_mode(args.mode);
    handle.set_max_cost(args.max_cost);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !args.words.is_empty() {
        for word in &args.words {
            print_correction(&mut out, &handle.correct(word), &args);
        }
        let _ = out.flush();
        return;
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            let _ = write!(out, "> ");
            let _ = out.flush();
        }
        let line = match lines.next() {
            Some(Ok(l)) => l,
            Some(Err(e)) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
            None => break,
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        print_correction(&mut out, &handle.correct(word), &args);
        if interactive {
            let _ = out.flush();
        }
    }

    let _ = out.flush();
}

fn print_correction(out: &mut impl Write, correction: &Correction, args: &Args) {
    if args.json {
        match serde_json::to_string(correction) {
            Ok(json) => {
                let _ = writeln!(out, "{json}");
            }
            Err(e) => eprintln!("error encoding {}: {e}", correction.word),
        }
        return;
    }

    if !args.verbose {
        let _ = writeln!(out, "{}", correction.best);
        return;
    }

    let candidates: Vec<&str> = correction.candidates.iter().collect();
    let _ = writeln!(out, "{}", correction.word);
    let _ = writeln!(out, "  candidates:   {}", candidates.join(", "));
    match correction.ranking.distance {
        Some(d) => {
            let _ = writeln!(
                out,
                "  by distance:  {} ({d})",
                correction.ranking.by_distance
            );
        }
        None => {
            let _ = writeln!(out, "  by distance:  {}", correction.ranking.by_distance);
        }
    }
    if let Some(by_frequency) = &correction.ranking.by_frequency {
        let count = correction.ranking.frequency.unwrap_or(0);
        let _ = writeln!(out, "  by frequency: {by_frequency} ({count})");
    }
    for report in &correction.reports {
        let _ = writeln!(
            out,
            "  {:<16} generated {:>8}  matched {:>4}",
            report.category.name(),
            report.generated,
            report.matched
        );
    }
    if correction.aborted {
        let _ = writeln!(out, "  (search stopped after {} lookups)", correction.cost);
    }
    let _ = writeln!(out, "  best:         {}", correction.best);
}
