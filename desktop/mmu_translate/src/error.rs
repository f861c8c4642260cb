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

use std::{io, path::PathBuf, process::ExitCode};

use mmu_sim::MmuError;
use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Mmu(#[from] MmuError),

    #[error("could not open addresses file {}: {source}", path.display())]
    AddressesOpen { path: PathBuf, source: io::Error },

    #[error("could not write output: {0}")]
    Output(#[from] io::Error),

    #[error("could not serialize statistics: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    fn exit_status(&self) -> u8 {
        match self {
            Self::Mmu(MmuError::InvalidConfig(_)) => 2,
            Self::Mmu(MmuError::BackingStoreOpen { .. }) | Self::AddressesOpen { .. } => 3,
            Self::Mmu(MmuError::BackingStoreRead { .. }) => 4,
            Self::Mmu(MmuError::FramePoolExhausted { .. } | MmuError::FrameOutOfRange { .. }) => 5,
            Self::Output(_) | Self::Json(_) => 7,
        }
    }
}
