use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout only carries results. `RUST_LOG` takes precedence.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let timer = LocalTime::new(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]"
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_writer(std::io::stderr)
        .init();
}

pub fn format_number(num: usize) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Mask every label but the TLD. A label of three characters or fewer in
/// front of the TLD collapses the whole name to `???.<tld>`.
pub fn redact_domain(domain: &str) -> String {
    let Some((rest, tld)) = domain.rsplit_once('.') else {
        return domain.to_string();
    };

    let registrable = rest.rsplit('.').next().unwrap_or(rest);
    if registrable.len() <= 3 {
        return format!("???.{tld}");
    }

    let masked: String = rest
        .chars()
        .map(|c| if c == '.' { '.' } else { '*' })
        .collect();
    format!("{masked}.{tld}")
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if let Some(top) = args.top {
        if top == 0 {
            anyhow::bail!("--top must be greater than 0");
        }
    }

    if let Some(workers) = args.workers {
        if workers == 0 {
            anyhow::bail!("--workers must be greater than 0");
        }
    }

    Ok(())
}
