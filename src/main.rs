use std::io::{self, BufRead, BufWriter, Write};

use tracing::{debug, info};

use request_target::config::Config;
use request_target::core::Result;
use request_target::{logging, TargetParser, VERSION};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config.logging);

    info!("request-target {}", VERSION);
    config.log_summary();

    let parser = TargetParser::from_config(&config.parser);
    // Non-UTF-8 arguments are decoded lossily rather than rejected
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let count = if args.is_empty() {
        let stdin = io::stdin();
        let mut count = 0u64;
        for line in stdin.lock().split(b'\n') {
            let line = line?;
            let line = String::from_utf8_lossy(&line);
            emit(&parser, line.trim_end_matches('\r'), &mut out)?;
            count += 1;
        }
        count
    } else {
        for arg in &args {
            emit(&parser, arg, &mut out)?;
        }
        args.len() as u64
    };

    out.flush()?;
    info!(count, mode = parser.mode().as_str(), "Parsed targets");

    Ok(())
}

/// Parse one target and write it as a JSON line.
fn emit<W: Write>(parser: &TargetParser, raw: &str, out: &mut W) -> Result<()> {
    let target = parser.parse(raw);
    debug!(raw, path = %target.path, params = target.query.len(), "Parsed target");

    serde_json::to_writer(&mut *out, &target)?;
    out.write_all(b"\n")?;
    Ok(())
}
