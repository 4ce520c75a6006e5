//! CLI tool for bytepack payload operations.

mod commands;
mod exit_codes;
mod output;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

use exit_codes::ExitCode;

/// Unpack, encode and inspect binary payloads
#[derive(Parser)]
#[command(name = "bytepack")]
#[command(author, version, about = "Unpack, encode and inspect binary payloads", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "human", global = true)]
    format: OutputFormat,

    /// Suppress informational output
    #[arg(long, short = 'q', global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decipher and decompress a delivered blob (alias: u)
    #[command(alias = "u")]
    Unpack {
        /// Blob file to unpack
        file: PathBuf,

        /// Write the unpacked payload to this file
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Cipher seed (decimal or 0x-prefixed hex)
        #[arg(long, value_parser = parse_seed, requires = "key_length")]
        seed: Option<u32>,

        /// Cipher key length in bytes
        #[arg(long, requires = "seed")]
        key_length: Option<usize>,

        /// Input is not LZ4-compressed
        #[arg(long)]
        raw: bool,

        /// Maximum unpacked size in bytes
        #[arg(long)]
        max_size: Option<usize>,
    },

    /// Encode a file as Base64
    Encode {
        /// File to encode
        file: PathBuf,

        /// Use the URL-safe alphabet (`-` and `_`)
        #[arg(long)]
        url_safe: bool,

        /// Omit `=` padding
        #[arg(long)]
        no_pad: bool,
    },

    /// Decode Base64 text
    Decode {
        /// File holding Base64 text, or `-` for stdin
        input: String,

        /// Write decoded bytes to this file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Print the cipher key derived from a seed
    Key {
        /// Generator seed (decimal or 0x-prefixed hex)
        #[arg(long, env = "BYTEPACK_SEED", value_parser = parse_seed)]
        seed: u32,

        /// Key length in bytes
        #[arg(long)]
        key_length: usize,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

fn parse_seed(value: &str) -> Result<u32, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|e| format!("invalid seed '{}': {}", value, e))
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Unpack {
            file,
            output,
            seed,
            key_length,
            raw,
            max_size,
        } => commands::unpack(&commands::UnpackConfig {
            input_path: &file,
            output_path: output.as_deref(),
            cipher: seed.zip(key_length),
            raw,
            max_size,
            format: cli.format,
            quiet: cli.quiet,
        }),

        Commands::Encode {
            file,
            url_safe,
            no_pad,
        } => commands::encode(&file, url_safe, !no_pad, cli.format),

        Commands::Decode { input, output } => {
            commands::decode(&input, output.as_deref(), cli.format, cli.quiet)
        }

        Commands::Key { seed, key_length } => commands::key(seed, key_length, cli.format),

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
            ExitCode::Success
        }
    };

    std::process::exit(exit_code.code());
}
