use std::fs;
use std::process::ExitCode;

use clap::{Arg, Command};
use log::{debug, error};

use cruciform::{CrosswordSolver, PuzzleBuilder, SolverConfig, WordList, Worklist};

fn main() -> ExitCode {
    env_logger::init();

    let matches = Command::new("crossword")
        .about("Fill a crossword structure from a word list")
        .arg(
            Arg::new("structure")
                .value_name("STRUCTURE")
                .help("Structure file; '_' marks an open cell, anything else a block")
                .required(true),
        )
        .arg(
            Arg::new("words")
                .value_name("WORDS")
                .help("Word list, one word per line")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .help("Also write the filled grid to this file"),
        )
        .arg(
            Arg::new("worklist")
                .long("worklist")
                .value_name("DISCIPLINE")
                .value_parser(["lifo", "fifo"])
                .default_value("lifo")
                .help("Order in which arc consistency revisits constraints"),
        )
        .get_matches();

    match run(&matches) {
        Ok(code) => code,
        Err(message) => {
            error!("{}", message);
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &clap::ArgMatches) -> Result<ExitCode, String> {
    let read = |name: &str| -> Result<String, String> {
        let path = matches.get_one::<String>(name).ok_or(format!("missing {}", name))?;
        fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path, e))
    };

    let builder = PuzzleBuilder::from_structure(&read("structure")?);
    let puzzle = builder.build().map_err(|reasons| format!("invalid structure: {:?}", reasons))?;

    let words: WordList = read("words")?.parse().map_err(|e| format!("{:?}", e))?;

    let worklist = matches.get_one::<String>("worklist")
        .map(|discipline| discipline.parse::<Worklist>())
        .transpose()
        .map_err(|e| format!("bad worklist: {}", e))?
        .unwrap_or_default();

    let solved = CrosswordSolver::new(&puzzle, words)
        .with_config(SolverConfig::default().with_worklist(worklist))
        .solve();

    match solved {
        Ok(solution) => {
            print!("{}", solution);
            if let Some(output) = matches.get_one::<String>("output") {
                fs::write(output, solution.to_string()).map_err(|e| format!("failed to write {}: {}", output, e))?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            debug!("{}", failure);
            println!("No solution.");
            Ok(ExitCode::FAILURE)
        }
    }
}
