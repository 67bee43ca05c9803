use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use numwords::{Conversion, ConvertParams, OutputFormat, convert_batch, convert_str};

use super::args::CliArgs;
use super::errors::AppError;

const BANNER_WIDTH: usize = 40;
const RULE_WIDTH: usize = 50;
const PROMPT: &str = "Enter a number (or 'q' to quit): ";

fn is_quit(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "q" | "quit" | "exit")
}

fn write_conversion<W: Write>(
    out: &mut W,
    conversion: &Conversion,
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            let rule = "─".repeat(RULE_WIDTH);
            writeln!(out, "\n{}", rule)?;
            writeln!(out, "Number: {}", conversion.grouped)?;
            writeln!(out, "In words: {}", conversion.words)?;
            writeln!(out, "{}\n", rule)?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(conversion)?)?;
        }
    }
    Ok(())
}

fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let line = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{}", line)?;
    writeln!(out, "      NUMBER TO WORDS CONVERTER")?;
    writeln!(out, "{}", line)?;
    writeln!(out, "Enter numbers to convert them to English words.")?;
    writeln!(out, "Enter 'q' to quit the program.\n")
}

/// Convert numbers passed on the command line.
///
/// Without `continue_on_error` the first invalid number aborts the run before
/// anything is printed.
fn run_numbers<W: Write>(
    numbers: &[String],
    params: &ConvertParams,
    out: &mut W,
) -> Result<(), AppError> {
    let report = convert_batch(numbers, params.continue_on_error)?;

    for conversion in &report.converted {
        write_conversion(out, conversion, params.format)?;
    }
    for failure in &report.errors {
        eprintln!("{}: {}", failure.input, failure.message);
    }

    info!("Converted: {}", report.converted.len());
    if !report.errors.is_empty() {
        warn!("Errors: {}", report.errors.len());
    }
    Ok(())
}

/// Read numbers line by line until a quit command or end of input.
///
/// Conversion errors are reported and the loop carries on; only I/O errors
/// end the session early.
fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    params: &ConvertParams,
) -> Result<(), AppError> {
    write_banner(out)?;

    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input, leaving interactive session");
            writeln!(out)?;
            break;
        }

        let entry = line.trim();
        if is_quit(entry) {
            writeln!(out, "\nThank you for using Number to Words Converter!")?;
            break;
        }
        if entry.is_empty() {
            writeln!(out, "Please enter a number.")?;
            continue;
        }

        match convert_str(entry) {
            Ok(conversion) => write_conversion(out, &conversion, params.format)?,
            Err(e) => {
                debug!("Rejected {:?}: {}", entry, e);
                writeln!(out, "{}", e)?;
            }
        }
    }

    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let params = ConvertParams {
        format: args.format,
        continue_on_error: args.batch,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.numbers.is_empty() {
        info!("Starting interactive session");
        let stdin = io::stdin();
        run_interactive(stdin.lock(), &mut out, &params)?;
    } else {
        info!("Converting {} number(s)", args.numbers.len());
        run_numbers(&args.numbers, &params, &mut out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str, format: OutputFormat) -> String {
        let params = ConvertParams {
            format,
            ..ConvertParams::default()
        };
        let mut out = Vec::new();
        run_interactive(Cursor::new(input), &mut out, &params).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn interactive_converts_until_quit() {
        let out = session("105\nQuit\n42\n", OutputFormat::Text);
        assert!(out.starts_with(&"=".repeat(BANNER_WIDTH)));
        assert!(out.contains("Number: 105\nIn words: one hundred and five\n"));
        assert!(out.contains("Thank you for using Number to Words Converter!"));
        assert!(!out.contains("forty-two"));
    }

    #[test]
    fn interactive_reports_bad_input_and_continues() {
        let input = "\nabc\n1000000000000000000000000000000000\n-1001\n";
        let out = session(input, OutputFormat::Text);
        assert!(out.contains("Please enter a number."));
        assert!(out.contains("Invalid input: \"abc\""));
        assert!(out.contains("Number out of range"));
        assert!(out.contains("Number: -1,001\nIn words: minus one thousand, one\n"));
    }

    #[test]
    fn interactive_json_lines() {
        let out = session("-7\nq\n", OutputFormat::Json);
        assert!(out.contains(r#"{"value":-7,"grouped":"-7","words":"minus seven"}"#));
    }

    #[test]
    fn numbers_mode_stops_on_first_error_without_batch() {
        let numbers = vec!["1".to_string(), "x".to_string()];
        let mut out = Vec::new();
        let err = run_numbers(&numbers, &ConvertParams::default(), &mut out).unwrap_err();
        assert!(matches!(err, AppError::Convert(numwords::Error::InvalidInput { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn numbers_mode_in_batch_prints_what_converted() {
        let numbers = vec!["20".to_string(), "x".to_string(), "21".to_string()];
        let params = ConvertParams {
            format: OutputFormat::Json,
            continue_on_error: true,
        };
        let mut out = Vec::new();
        run_numbers(&numbers, &params, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"twenty\""));
        assert!(lines[1].contains("\"twenty-one\""));
    }
}
