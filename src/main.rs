use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;

use bootconf::constants::log_level::level_filter;
use bootconf::editor;
use bootconf::models::{mode_choices, AssignStyle, ConfigValue, ModeGroup, QualifiedKey};
use bootconf::parser::available_modes;
use bootconf::settings::Settings;

/// Edit a filter-sectioned boot config file (Raspberry Pi config.txt) in place
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML settings file
    #[arg(short, long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Config file to edit (overrides config_path from settings)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the value of KEY[@FILTER]
    Get {
        key: String,
        /// Printed when the key is not defined
        #[arg(short, long)]
        default: Option<String>,
        /// Read the value as an integer
        #[arg(long)]
        int: bool,
    },
    /// Set KEY[@FILTER] to VALUE
    Set {
        key: String,
        value: String,
        /// Compare as integers when checking the current value
        #[arg(long)]
        int: bool,
        /// Write even if the key already holds VALUE
        #[arg(long)]
        force: bool,
        /// Write `key,value` instead of `key=value`
        #[arg(long)]
        comma: bool,
    },
    /// Comment out every active definition of KEY[@FILTER]
    Comment {
        key: String,
        /// Rewrite the file even if the key is not defined
        #[arg(long)]
        force: bool,
    },
    /// Exit 0 and print true if KEY[@FILTER] is defined
    Defined { key: String },
    /// Comment out KEY when VALUE equals DEFAULT, set it otherwise
    SetOrComment {
        key: String,
        value: String,
        default: String,
        #[arg(long)]
        force: bool,
        /// Write `key,value` instead of `key=value`
        #[arg(long)]
        comma: bool,
    },
    /// Exit 0 and print true if two config files differ materially
    Differ { a: PathBuf, b: PathBuf },
    /// List the display modes to offer for a mode group (cea or dmt)
    Modes {
        group: ModeGroup,
        /// Mode listing to parse; `-` reads stdin. Without it the fallback
        /// table is printed
        #[arg(short, long, value_name = "FILE")]
        listing: Option<PathBuf>,
    },
}

fn parse_key(fullkey: &str, comma: bool) -> QualifiedKey {
    let key = QualifiedKey::parse(fullkey);
    if comma {
        key.with_assign(AssignStyle::Comma)
    } else {
        key
    }
}

fn flag_exit(flag: bool) -> ExitCode {
    println!("{}", flag);
    if flag {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn read_listing(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read mode listing from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read mode listing {}", path.display()))
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::new(),
    };

    // Initialize the logger; RUST_LOG still wins over the settings file
    env_logger::Builder::from_env(
        Env::default().default_filter_or(level_filter(&settings.log_level).to_string()),
    )
    .init();

    let path = args.file.clone().unwrap_or_else(|| settings.config_path.clone());
    debug!("Editing {}", path.display());

    let code = match args.command {
        Command::Get { key, default, int } => {
            let key = QualifiedKey::parse(&key);
            let default = default.map(|d| match ConfigValue::coerce_int(&d) {
                Some(n) if int => ConfigValue::Int(n),
                _ => ConfigValue::Text(d),
            });
            match editor::get(&key, &path, default, int)? {
                Some(value) => {
                    println!("{}", value);
                    ExitCode::SUCCESS
                }
                None => ExitCode::FAILURE,
            }
        }
        Command::Set {
            key,
            value,
            int,
            force,
            comma,
        } => {
            let key = parse_key(&key, comma);
            editor::set(&key, &value, &path, settings.check_first && !force, int)?;
            ExitCode::SUCCESS
        }
        Command::Comment { key, force } => {
            let key = QualifiedKey::parse(&key);
            editor::comment(&key, &path, settings.check_first && !force)?;
            ExitCode::SUCCESS
        }
        Command::Defined { key } => flag_exit(editor::is_defined(&QualifiedKey::parse(&key), &path)?),
        Command::SetOrComment {
            key,
            value,
            default,
            force,
            comma,
        } => {
            let key = parse_key(&key, comma);
            editor::set_or_comment(
                &key,
                Some(value.as_str()),
                Some(default.as_str()),
                &path,
                settings.check_first && !force,
            )?;
            ExitCode::SUCCESS
        }
        Command::Differ { a, b } => flag_exit(editor::differ_materially(&a, &b)?),
        Command::Modes { group, listing } => {
            let modes = match &listing {
                Some(file) => available_modes(&read_listing(file)?, group),
                None => group.fallback_modes().to_vec(),
            };
            let base = format!("{} default", group.name());
            for (_, label) in mode_choices(&base, &modes) {
                println!("{}", label);
            }
            ExitCode::SUCCESS
        }
    };
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_or_comment_accepts_comma() {
        let args = Args::try_parse_from([
            "bootconf",
            "set-or-comment",
            "dtoverlay@pi4",
            "w1-gpio",
            "",
            "--comma",
        ])
        .unwrap();
        match args.command {
            Command::SetOrComment { key, comma, .. } => {
                assert!(comma);
                let key = parse_key(&key, comma);
                assert_eq!(key.assign, AssignStyle::Comma);
                assert_eq!(key.directive_line("w1-gpio"), "dtoverlay,w1-gpio");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_key_defaults_to_inferred_style() {
        assert_eq!(parse_key("gpu_mem", false).assign, AssignStyle::Equals);
        assert_eq!(parse_key("dtparam=spi=", false).assign, AssignStyle::Embedded);
    }
}
