use std::io::{BufRead, BufWriter, Write, stdout};
use std::path::PathBuf;

use crate::{
    common::{
        command::{Command, parse_submission},
        error::AppError,
    },
    domain::ledger::Ledger,
    io::reader,
    worker::processor::Processor,
};

/// Runs one interactive logging session over stdin/stdout.
///
/// With a store path argument the session is persisted: prior entries are
/// hydrated before the first prompt and every add is appended durably.
/// Without one the ledger lives only for the session and is discarded on
/// exit.
pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let store = args.get(1).map(PathBuf::from);

    let records = match &store {
        Some(path) => reader::load_store(path)?,
        None => Vec::new(),
    };
    let mut ledger = Ledger::hydrate(records);

    let stdin = std::io::stdin();
    let stdout = stdout();
    let writer = BufWriter::new(stdout.lock());
    run_session(&mut ledger, store, stdin.lock(), writer)
}

/// The session loop: read a line, parse and validate it, dispatch, repeat
/// until `quit` or end of input. Invalid submissions print a warning and
/// leave the ledger untouched; the user may resubmit.
pub fn run_session<R, W>(
    ledger: &mut Ledger,
    store: Option<PathBuf>,
    input: R,
    mut out: W,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    let mut processor = Processor::new(store);

    writeln!(out, "Spending Log")?;
    writeln!(
        out,
        "Commands: add <amount> <category> [YYYY-MM-DD] | list | total | filter <category> | categories | quit"
    )?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let today = chrono::Local::now().date_naive();
        match parse_submission(&line, today) {
            Ok(Command::Quit) => break,
            Ok(command) => processor.process(ledger, command, &mut out)?,
            // Rejected submissions are non-fatal: warn and wait for a resubmit.
            Err(reason) => writeln!(out, "Warning: {}", AppError::InvalidInput(reason))?,
        }
        out.flush()?;
    }

    out.flush()?;
    Ok(())
}
