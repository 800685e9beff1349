use intcalc::{CalcError, ShuntingParser};
use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;

mod repl {
    use super::*;

    // evaluate a one-shot expression and show how it was grouped
    pub fn evalexpr(input: &str) -> Result<String, CalcError> {
        let rpn = ShuntingParser::parse_str(input)?;
        let result = rpn.eval()?;
        Ok(format!("{} = {}", rpn, result))
    }

    pub fn evalline(input: &str) -> Result<String, CalcError> {
        intcalc::calculate(input).map(|result| result.to_string())
    }
}

#[cfg(feature = "repl")]
mod interactive {
    use rustyline::error::ReadlineError;

    pub fn run() -> Result<(), String> {
        let histpath = dirs::home_dir().map(|h| h.join(".intcalc_history"));
        let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
        if let Some(path) = &histpath {
            if rl.load_history(path).is_err() {
                log::debug!("No history yet at {}", path.display());
            }
        }
        loop {
            match rl.readline(">> ") {
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(format!("Readline err: {:?}", e)),
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    match super::repl::evalline(&line) {
                        Ok(result) => println!("{}", result),
                        Err(e) => println!("{}", e),
                    }
                }
            }
        }
        if let Some(path) = &histpath {
            rl.save_history(path).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

#[cfg(not(feature = "repl"))]
mod interactive {
    pub fn run() -> Result<(), String> {
        Err(format!("built without the repl feature"))
    }
}

fn report(outcome: Result<String, CalcError>) -> ExitCode {
    match outcome {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        return report(repl::evalexpr(&input));
    }

    if cfg!(feature = "repl") && io::stdin().is_terminal() {
        return match interactive::run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let mut line = String::new();
    if let Err(e) = io::stdin().lock().read_line(&mut line) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }
    report(repl::evalline(&line))
}
