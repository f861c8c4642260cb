/*
 *  Copyright (C) 2025  Markus Elias Gerber
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

mod address_reader;
mod error;

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser, ValueEnum};
use env_logger::{Builder, Env};
use log::info;
use mmu_sim::{modules::backing_store::FileBackingStore, MmuConfig, TranslationEngine, NUM_FRAMES};

use crate::{address_reader::AddressTokens, error::CliError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

/// Translates logical addresses to physical addresses through a TLB and a
/// demand paged page table
#[derive(Debug, Parser)]
#[command(name = "mmu_translate", version)]
struct Cli {
    /// Backing store file (256 pages of 256 bytes)
    backing_store: PathBuf,

    /// File with one decimal logical address per line
    addresses: PathBuf,

    /// Number of physical frames
    #[arg(long, default_value_t = NUM_FRAMES)]
    frames: usize,

    /// Format of the final statistics
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    summary: SummaryFormat,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    Builder::from_env(Env::default().default_filter_or(level))
        .format_module_path(false)
        .init();

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);

    match run(&cli, &mut out).and_then(|()| out.flush().map_err(CliError::from)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // keep already translated lines in front of the error
            let _ = out.flush();
            eprintln!("Error: {}", err);
            err.exit_code()
        }
    }
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> error::Result<()> {
    let storage = FileBackingStore::open(&cli.backing_store)?;
    let input = fs::read(&cli.addresses).map_err(|source| CliError::AddressesOpen {
        path: cli.addresses.clone(),
        source,
    })?;

    let config = MmuConfig {
        frame_count: cli.frames,
    };
    let mut engine: TranslationEngine<FileBackingStore> = TranslationEngine::new(storage, config)?;

    for address in AddressTokens::new(&input) {
        let translation = engine.translate(address)?;
        writeln!(out, "{}", translation)?;
    }

    let statistics = engine.statistics();
    info!(
        "Translated {} addresses, TLB hit rate {:.3}, page fault rate {:.3}",
        statistics.translations,
        statistics.tlb_hit_rate(),
        statistics.page_fault_rate()
    );

    match cli.summary {
        SummaryFormat::Text => write!(out, "{}", statistics)?,
        SummaryFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(statistics)?)?,
    }

    Ok(())
}
