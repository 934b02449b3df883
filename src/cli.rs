// src/cli.rs
use std::{
    env,
    error::Error,
    io::{self, BufRead, Write},
};

use crate::{
    config::options::ReconcileOptions,
    core::net::FetchError,
    imprints,
    progress::Progress,
    reconcile,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Empty = read names from stdin.
    Resolve(Vec<String>),
    Reconcile(ReconcileOptions),
    Audit,
    ListImprints,
    ListPublishers,
    ImprintsOf(String),
    Help,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cmd = parse_args(env::args().skip(1))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Command::Resolve(names) = &cmd {
        if names.is_empty() {
            let stdin = io::stdin();
            return resolve_lines(stdin.lock(), &mut out);
        }
    }
    execute(&cmd, &mut out)
}

/// Run everything except the stdin-driven resolve.
pub fn execute(cmd: &Command, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    let tables = imprints::builtin();
    match cmd {
        Command::Help => {
            write!(out, "{}", include_str!("cli_help.txt"))?;
        }
        Command::Resolve(names) => {
            for name in names {
                writeln!(out, "{}", tables.resolve(name))?;
            }
        }
        Command::Reconcile(opts) => {
            let mut progress = CliProgress::new(&mut *out);
            let outcome = reconcile::run(opts, Some(&mut progress));
            writeln!(out)?;
            for line in outcome.lines() {
                writeln!(out, "{line}")?;
            }
        }
        Command::Audit => {
            for line in tables.audit().lines() {
                writeln!(out, "{line}")?;
            }
        }
        Command::ListImprints => {
            for (imprint, parent) in tables.imprints() {
                writeln!(out, "{imprint}\t{parent}")?;
            }
        }
        Command::ListPublishers => {
            for name in tables.roots() {
                writeln!(out, "{name}")?;
            }
        }
        Command::ImprintsOf(parent) => {
            let found = tables.imprints_of(parent);
            if found.is_empty() {
                writeln!(out, "No known imprints for {}", parent.trim())?;
            }
            for name in found {
                writeln!(out, "{name}")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Resolve one name per input line; blank lines are skipped.
pub fn resolve_lines(input: impl BufRead, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    let tables = imprints::builtin();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(out, "{}", tables.resolve(&line))?;
    }
    out.flush()?;
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let Some(sub) = args.next() else {
        return Ok(Command::Help);
    };

    match sub.as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "resolve" => Ok(Command::Resolve(args.collect())),
        "reconcile" => parse_reconcile(args).map(Command::Reconcile),
        "audit" => no_more_args(args, Command::Audit),
        "list-imprints" => no_more_args(args, Command::ListImprints),
        "list-publishers" => no_more_args(args, Command::ListPublishers),
        "imprints-of" => {
            let parent = args.next().ok_or("Missing value for imprints-of")?;
            no_more_args(args, Command::ImprintsOf(parent))
        }
        other => Err(format!("Unknown command: {other}").into()),
    }
}

fn parse_reconcile(mut args: impl Iterator<Item = String>) -> Result<ReconcileOptions, Box<dyn Error>> {
    let mut opts = ReconcileOptions::default();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => opts.base_url = args.next().ok_or("Missing value for --url")?,
            "--pause-ms" => {
                opts.pause_ms = args.next().ok_or("Missing value for --pause-ms")?.parse()?;
            }
            "--max-pages" => {
                let v: u32 = args.next().ok_or("Missing value for --max-pages")?.parse()?;
                if v == 0 {
                    return Err("--max-pages must be at least 1".into());
                }
                opts.max_pages = Some(v);
            }
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }
    Ok(opts)
}

fn no_more_args(mut args: impl Iterator<Item = String>, cmd: Command) -> Result<Command, Box<dyn Error>> {
    match args.next() {
        Some(extra) => Err(format!("Unexpected arg: {extra}").into()),
        None => Ok(cmd),
    }
}

/* ---------- Progress adapter ---------- */

/// Prints one line per page, like `Page 3, 50 publishers...`.
pub struct CliProgress<'w> {
    out: &'w mut dyn Write,
}

impl<'w> CliProgress<'w> {
    pub fn new(out: &'w mut dyn Write) -> Self {
        Self { out }
    }
}

impl Progress for CliProgress<'_> {
    fn log(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{msg}");
    }
    fn page_done(&mut self, page: u32, found: usize, _total: usize) {
        let _ = writeln!(self.out, "Page {page}, {found} publishers...");
    }
    fn page_failed(&mut self, _page: u32, err: &FetchError) {
        let _ = writeln!(self.out, "unexpected web exception: {err}");
    }
}
