// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{CommandFactory, Parser};
use discocli::commands::detect::DetectCommand;
use discocli::commands::download::DownloadCommand;
use discocli::commands::find::FindCommand;
use discocli::commands::info::InfoCommand;
use discocli::commands::update::UpdateCommand;
use discocli::config::new_disco_config;
use discocli::download::DownloadOutcome;
use discocli::error::{
    DiscoError, EXIT_ALREADY_EXISTS, EXIT_FAILURE, EXIT_SUCCESS, Result, format_error_with_color,
    get_exit_code, normalize_exit_code,
};
use discocli::logging;
use discocli::search::RawCriteria;
use std::io::IsTerminal;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "discocli")]
#[command(
    author,
    about = "Find and download JDK packages from the foojay disco API",
    long_about = None,
    disable_version_flag = true
)]
struct Cli {
    /// Show the supported values of every parameter
    #[arg(short = 'i', long)]
    info: bool,

    /// Distribution (e.g. zulu, temurin, corretto)
    #[arg(short = 'd', long, value_name = "DISTRIBUTION")]
    distribution: Option<String>,

    /// Java version (e.g. 17, 17.0.2, 21-ea+5)
    #[arg(short = 'v', long, value_name = "VERSION")]
    version: Option<String>,

    /// Operating system (defaults to the current one)
    #[arg(long = "os", value_name = "OS")]
    operating_system: Option<String>,

    /// C library type (glibc, musl, c_std_lib, libc)
    #[arg(long = "libc-type", visible_alias = "lc", value_name = "LIBC")]
    lib_c_type: Option<String>,

    /// Architecture (defaults to x64)
    #[arg(long = "architecture", visible_alias = "arc", value_name = "ARCH")]
    architecture: Option<String>,

    /// Package type (jdk or jre)
    #[arg(long = "package-type", visible_alias = "pt", value_name = "TYPE")]
    package_type: Option<String>,

    /// Archive type (e.g. tar.gz, zip, msi)
    #[arg(long = "archive-type", visible_alias = "at", value_name = "TYPE")]
    archive_type: Option<String>,

    /// Directory the package is downloaded to
    #[arg(short = 'o', long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Include early access builds
    #[arg(long)]
    ea: bool,

    /// Only packages with JavaFX bundled
    #[arg(long)]
    fx: bool,

    /// Latest build of the given version
    #[arg(long)]
    latest: bool,

    /// List every package matching the given criteria
    #[arg(short = 'f', long)]
    find: bool,

    /// Detect locally installed JDKs
    #[arg(long)]
    detect: bool,

    /// Directory scanned by --detect (repeatable)
    #[arg(long = "search-path", value_name = "DIR")]
    search_paths: Vec<PathBuf>,

    /// Check for updates of an installed JDK (distro,version,os,arch,packageType[,fx])
    #[arg(short = 'u', long, value_name = "DESCRIPTOR")]
    update: Option<String>,

    /// Disable progress indicators
    #[arg(long)]
    no_progress: bool,

    /// Increase verbosity (--verbose info, twice debug, three times trace)
    #[arg(long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn raw_criteria(&self) -> RawCriteria {
        RawCriteria {
            distribution: self.distribution.clone(),
            operating_system: self.operating_system.clone(),
            lib_c_type: self.lib_c_type.clone(),
            architecture: self.architecture.clone(),
            package_type: self.package_type.clone(),
            archive_type: self.archive_type.clone(),
            version: self.version.clone(),
            include_ea: self.ea,
            javafx_bundled: self.fx,
            latest_for_version: self.latest,
        }
    }

    fn check_modes(&self) -> Result<()> {
        let selected: Vec<&str> = [
            (self.info, "--info"),
            (self.find, "--find"),
            (self.detect, "--detect"),
            (self.update.is_some(), "--update"),
        ]
        .into_iter()
        .filter_map(|(enabled, flag)| enabled.then_some(flag))
        .collect();

        if selected.len() > 1 {
            return Err(DiscoError::InvalidModeCombination(format!(
                "{} cannot be combined",
                selected.join(" and ")
            )));
        }
        if !self.search_paths.is_empty() && !self.detect {
            return Err(DiscoError::InvalidModeCombination(
                "--search-path requires --detect".to_string(),
            ));
        }
        Ok(())
    }
}

fn run(cli: Cli) -> Result<i32> {
    cli.check_modes()?;

    if cli.info {
        InfoCommand::new().execute()?;
        return Ok(EXIT_SUCCESS);
    }
    if cli.detect {
        DetectCommand::new(cli.search_paths.clone())?.execute()?;
        return Ok(EXIT_SUCCESS);
    }

    let config = new_disco_config()?;

    if let Some(descriptor) = &cli.update {
        UpdateCommand::new(&config)?.execute(descriptor)?;
        return Ok(EXIT_SUCCESS);
    }

    let raw = cli.raw_criteria();
    if cli.find {
        FindCommand::new(&config)?.execute(&raw)?;
        return Ok(EXIT_SUCCESS);
    }

    let outcome = DownloadCommand::new(&config)?.execute(&raw, &cli.output, cli.no_progress)?;
    Ok(match outcome {
        DownloadOutcome::Downloaded { .. } => EXIT_SUCCESS,
        DownloadOutcome::AlreadyExists { .. } => EXIT_ALREADY_EXISTS,
    })
}

fn main() {
    if std::env::args_os().len() <= 1 {
        let _ = Cli::command().print_help();
        println!();
        std::process::exit(EXIT_SUCCESS);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() {
                EXIT_FAILURE
            } else {
                EXIT_SUCCESS
            });
        }
    };

    logging::setup_logger(cli.verbose);

    let code = match panic::catch_unwind(AssertUnwindSafe(|| run(cli))) {
        Ok(Ok(code)) => code,
        Ok(Err(e)) => {
            eprintln!(
                "{}",
                format_error_with_color(&e, std::io::stderr().is_terminal())
            );
            get_exit_code(&e)
        }
        Err(_) => EXIT_FAILURE,
    };

    std::process::exit(normalize_exit_code(code));
}
