//! Command-line driver for the verification harness.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use hashforge_core::{Endianness, global};
use hashforge_harness::report::VerificationReport;
use hashforge_harness::runner::VerificationRunner;
use hashforge_harness::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};

#[derive(Parser)]
#[command(name = "harness", about = "hashforge verification harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum EndianArg {
    Default,
    Nondefault,
    Native,
    Byteswapped,
    Little,
    Big,
}

impl From<EndianArg> for Endianness {
    fn from(e: EndianArg) -> Endianness {
        match e {
            EndianArg::Default => Endianness::Default,
            EndianArg::Nondefault => Endianness::NonDefault,
            EndianArg::Native => Endianness::Native,
            EndianArg::Byteswapped => Endianness::Byteswapped,
            EndianArg::Little => Endianness::Little,
            EndianArg::Big => Endianness::Big,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List every registered hash with its metadata.
    List,
    /// Compute verification digests and compare to the declared codes.
    Verify {
        /// Verify a single hash by canonical name.
        #[arg(long)]
        hash: Option<String>,
        /// Endianness requests to verify (defaults to native+byteswapped).
        #[arg(long, value_enum)]
        endian: Vec<EndianArg>,
        /// Write a JSON report here.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Append JSONL structured logs here.
        #[arg(long)]
        log: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::List => {
            for h in global().list_all() {
                println!(
                    "{:<28} {:<16} {:>4} bits  LE {:#010x}  BE {:#010x}  {}",
                    h.name, h.family, h.bits, h.verification_le, h.verification_be, h.desc
                );
            }
            ExitCode::SUCCESS
        }
        Command::Verify {
            hash,
            endian,
            report,
            log,
        } => {
            let endians: Vec<Endianness> = if endian.is_empty() {
                vec![Endianness::Native, Endianness::Byteswapped]
            } else {
                endian.into_iter().map(Endianness::from).collect()
            };

            let mut runner = VerificationRunner::new(global());
            if let Some(name) = hash {
                runner = runner.with_filter(name);
            }
            let outcomes = runner.run(&endians);

            if let Some(path) = log {
                match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
                    Ok(file) => {
                        let emitter = LogEmitter::new(file);
                        for o in &outcomes {
                            let mut entry =
                                LogEntry::event("verify", LogLevel::Info, "verification");
                            entry.hash = Some(o.hash.clone());
                            entry.family = Some(o.family.clone());
                            entry.endian = Some(o.endian.clone());
                            entry.outcome = Some(if o.passed { Outcome::Pass } else { Outcome::Fail });
                            entry.computed = Some(o.computed);
                            entry.expected = Some(o.expected);
                            if let Err(e) = emitter.emit(&entry) {
                                eprintln!("log write failed: {e}");
                                return ExitCode::FAILURE;
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("cannot open log {}: {e}", path.display());
                        return ExitCode::FAILURE;
                    }
                }
            }

            let summary = VerificationReport::from_outcomes("verify", &outcomes);
            for o in &outcomes {
                if !o.passed {
                    eprintln!(
                        "FAIL {} [{}]: computed {:#010x}, expected {:#010x}",
                        o.hash, o.endian, o.computed, o.expected
                    );
                }
            }
            println!(
                "{} verifications, {} passed, {} failed",
                summary.total, summary.passed, summary.failed
            );

            if let Some(path) = report {
                if let Err(e) = summary.write_json(&path) {
                    eprintln!("cannot write report {}: {e}", path.display());
                    return ExitCode::FAILURE;
                }
            }

            if summary.all_passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
