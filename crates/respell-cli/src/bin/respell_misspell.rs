// respell-misspell: Produce random misspellings.
//
// Prints one random misspelling per input word: either a vowel swap or a
// random repetition of letters. Words come from the command line, or from
// stdin (one per line) when none are given.
//
// Usage:
//   respell-misspell [--seed N] [--count N] [WORDS]...

use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use respell_engine::misspell::misspell;

#[derive(Parser)]
#[command(name = "respell-misspell", version)]
#[command(about = "Print random misspellings of words")]
struct Args {
    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Misspellings to print per word
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Words to misspell (read from stdin when omitted)
    words: Vec<String>,
}

fn main() {
    let args = Args::parse();
    respell_cli::init_tracing(false);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !args.words.is_empty() {
        for word in &args.words {
            emit(&mut out, word, args.count, &mut rng);
        }
    } else {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if !word.is_empty() {
                emit(&mut out, word, args.count, &mut rng);
            }
        }
    }

    let _ = out.flush();
}

fn emit(out: &mut impl Write, word: &str, count: usize, rng: &mut StdRng) {
    for _ in 0..count {
        let _ = writeln!(out, "{}", misspell(word, rng));
    }
}
