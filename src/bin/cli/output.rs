//! Output formatting for CLI operations.

use serde_json::json;

/// Summary of an unpack run.
pub struct UnpackReport {
    pub input_size: usize,
    pub output_size: usize,
    pub deciphered: bool,
    pub decompressed: bool,
    pub preview: Vec<u8>,
}

/// Trait for output formatting
pub trait OutputFormatter {
    /// Formats an unpack summary
    fn format_unpack(&self, report: &UnpackReport) -> String;

    /// Formats a derived cipher key
    fn format_key(&self, seed: u32, key: &[u8]) -> String;

    /// Formats Base64 text produced by the encode command
    fn format_encoded(&self, text: &str, input_size: usize) -> String;
}

/// Human-readable output formatter
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_unpack(&self, report: &UnpackReport) -> String {
        let mut output = String::new();

        output.push_str("Unpack Summary:\n");
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "  Input:          {}\n",
            humanize_bytes(report.input_size as u64)
        ));
        output.push_str(&format!(
            "  Output:         {}\n",
            humanize_bytes(report.output_size as u64)
        ));
        output.push_str(&format!(
            "  Deciphered:     {}\n",
            if report.deciphered { "yes" } else { "no" }
        ));
        output.push_str(&format!(
            "  Decompressed:   {}\n",
            if report.decompressed { "yes" } else { "no" }
        ));
        if !report.preview.is_empty() {
            output.push_str(&format!("  First bytes:    {}\n", to_hex(&report.preview)));
        }

        output
    }

    fn format_key(&self, _seed: u32, key: &[u8]) -> String {
        format!("{}\n", to_hex(key))
    }

    fn format_encoded(&self, text: &str, _input_size: usize) -> String {
        format!("{}\n", text)
    }
}

/// JSON output formatter
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_unpack(&self, report: &UnpackReport) -> String {
        let obj = json!({
            "input_size": report.input_size,
            "output_size": report.output_size,
            "deciphered": report.deciphered,
            "decompressed": report.decompressed,
            "preview": to_hex(&report.preview),
        });
        format!("{}\n", obj)
    }

    fn format_key(&self, seed: u32, key: &[u8]) -> String {
        let obj = json!({
            "seed": seed,
            "key_length": key.len(),
            "key": to_hex(key),
        });
        format!("{}\n", obj)
    }

    fn format_encoded(&self, text: &str, input_size: usize) -> String {
        let obj = json!({
            "input_size": input_size,
            "base64": text,
        });
        format!("{}\n", obj)
    }
}

/// Creates a formatter based on the output format
pub fn create_formatter(format: super::OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        super::OutputFormat::Human => Box::new(HumanFormatter),
        super::OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Converts bytes to human-readable format
pub fn humanize_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GiB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MiB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KiB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Lowercase hex without separators
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
