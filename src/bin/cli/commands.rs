//! Command implementations for the CLI tool.

use std::io::{Read, Write};
use std::path::Path;

use bytepack::codec::base64;
use bytepack::{ResourceLimits, UnpackOptions, Unpacker, Vigenere};

use crate::OutputFormat;
use crate::exit_codes::{ExitCode, error_to_exit_code};
use crate::output::{UnpackReport, create_formatter};

/// Number of payload bytes shown in the unpack summary.
const PREVIEW_LEN: usize = 16;

/// Configuration for the unpack command.
pub struct UnpackConfig<'a> {
    pub input_path: &'a Path,
    pub output_path: Option<&'a Path>,
    pub cipher: Option<(u32, usize)>,
    pub raw: bool,
    pub max_size: Option<usize>,
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Unpack command implementation
pub fn unpack(config: &UnpackConfig<'_>) -> ExitCode {
    let formatter = create_formatter(config.format);

    let data = match std::fs::read(config.input_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", config.input_path.display(), e);
            return ExitCode::IoError;
        }
    };
    let input_size = data.len();

    let mut limits = ResourceLimits::default();
    if let Some(max) = config.max_size {
        limits = limits.max_output_size(max);
    }
    let mut options = UnpackOptions::new().compressed(!config.raw).limits(limits);
    if let Some((seed, key_length)) = config.cipher {
        options = options.cipher(seed, key_length);
    }

    let unpacker = match Unpacker::new(options) {
        Ok(u) => u,
        Err(e) => {
            eprintln!("Error: {}", e);
            return error_to_exit_code(&e);
        }
    };

    let payload = match unpacker.unpack(data) {
        Ok(stream) => stream.into_inner(),
        Err(e) => {
            eprintln!("Error: {}", e);
            return error_to_exit_code(&e);
        }
    };

    if let Some(path) = config.output_path {
        if let Err(e) = std::fs::write(path, &payload) {
            eprintln!("Error writing {}: {}", path.display(), e);
            return ExitCode::IoError;
        }
    }

    if !config.quiet {
        let report = UnpackReport {
            input_size,
            output_size: payload.len(),
            deciphered: config.cipher.is_some(),
            decompressed: !config.raw,
            preview: payload.iter().take(PREVIEW_LEN).copied().collect(),
        };
        print!("{}", formatter.format_unpack(&report));
    }

    ExitCode::Success
}

/// Encode command implementation
pub fn encode(path: &Path, url_safe: bool, pad: bool, format: OutputFormat) -> ExitCode {
    let formatter = create_formatter(format);

    let data = match std::fs::read(path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", path.display(), e);
            return ExitCode::IoError;
        }
    };

    let alphabet = if url_safe {
        base64::Alphabet::UrlSafe
    } else {
        base64::Alphabet::Standard
    };
    let text = base64::encode_with(&data, alphabet, pad);
    print!("{}", formatter.format_encoded(&text, data.len()));

    ExitCode::Success
}

/// Decode command implementation
pub fn decode(input: &str, output_path: Option<&Path>, format: OutputFormat, quiet: bool) -> ExitCode {
    let text = match read_text(input) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {}", input, e);
            return ExitCode::IoError;
        }
    };

    // Line breaks and surrounding whitespace are not part of the encoding
    let compact: String = text.split_whitespace().collect();
    let bytes = match base64::decode(&compact) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: {}", e);
            return error_to_exit_code(&e);
        }
    };

    let written = match output_path {
        Some(path) => std::fs::write(path, &bytes),
        None => std::io::stdout().write_all(&bytes),
    };
    if let Err(e) = written {
        eprintln!("Error writing output: {}", e);
        return ExitCode::IoError;
    }

    if let (Some(path), false) = (output_path, quiet) {
        match format {
            OutputFormat::Human => println!("Decoded {} bytes to {}", bytes.len(), path.display()),
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({ "output": path.display().to_string(), "size": bytes.len() })
            ),
        }
    }

    ExitCode::Success
}

/// Key command implementation
pub fn key(seed: u32, key_length: usize, format: OutputFormat) -> ExitCode {
    let formatter = create_formatter(format);

    match Vigenere::new(seed, key_length) {
        Ok(cipher) => {
            print!("{}", formatter.format_key(seed, cipher.key()));
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            error_to_exit_code(&e)
        }
    }
}

/// Reads a file, or stdin when `input` is `-`.
fn read_text(input: &str) -> std::io::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
    }
}
