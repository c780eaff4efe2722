use anyhow::{Context, Result};
use clap::Parser;

use yamlpick::config::Config;
use yamlpick::file::loader::{load_yaml_file, load_yaml_from_stdin};
use yamlpick::{Document, QueryResult};

/// yamlpick - Print the value at a dot path in a YAML document
#[derive(Parser)]
#[command(name = "yamlpick")]
#[command(version)]
#[command(about = "Print the value at a dot path in a YAML document", long_about = None)]
struct Cli {
    /// Dot path to look up, e.g. `servers.#(name=web1).ip`
    #[arg(required_unless_present = "check")]
    path: Option<String>,

    /// YAML file to read (omit or use `-` to read stdin; `.gz` files are decompressed)
    file: Option<String>,

    /// Print the value re-encoded as YAML
    #[arg(long)]
    yaml: bool,

    /// Exit successfully even when the path does not resolve
    #[arg(long)]
    allow_missing: bool,

    /// Only check that the document is valid YAML (`--check FILE`)
    #[arg(long)]
    check: bool,

    /// Log filter when RUST_LOG is not set (default from config: warn)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    /// Returns the file to read, or `None` for stdin.
    ///
    /// `--check` needs no path, so a lone positional argument names the file.
    fn input_file(&self) -> Option<&str> {
        let file = match (&self.file, self.check) {
            (Some(file), _) => Some(file.as_str()),
            (None, true) => self.path.as_deref(),
            (None, false) => None,
        };
        file.filter(|file| *file != "-")
    }
}

fn init_logging(config: &Config) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn render(result: &QueryResult, config: &Config) -> Result<String> {
    let mut text = if config.yaml_output {
        serde_yaml::to_string(&result.to_yaml()).context("Failed to encode result as YAML")?
    } else {
        result.to_string()
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI flags override the config file
    let mut config = Config::load();
    if cli.yaml {
        config.yaml_output = true;
    }
    if cli.allow_missing {
        config.fail_on_missing = false;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    init_logging(&config);

    let text = match cli.input_file() {
        Some(file) => load_yaml_file(file, config.max_document_size)?,
        None => load_yaml_from_stdin(config.max_document_size)?,
    };

    if cli.check {
        Document::parse(&text).context("Document is not valid YAML")?;
        println!("valid");
        return Ok(());
    }

    let path = cli.path.unwrap_or_default();
    let result = yamlpick::get(&text, &path);
    if !result.exists() {
        tracing::debug!(%path, "path did not resolve");
        if config.fail_on_missing {
            eprintln!("yamlpick: no value at '{}'", path);
            std::process::exit(1);
        }
        return Ok(());
    }

    print!("{}", render(&result, &config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("yamlpick").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_path_then_file() {
        let cli = parse(&["servers.0.host", "deploy.yaml"]);
        assert_eq!(cli.path.as_deref(), Some("servers.0.host"));
        assert_eq!(cli.input_file(), Some("deploy.yaml"));
    }

    #[test]
    fn test_missing_file_reads_stdin() {
        assert_eq!(parse(&["servers"]).input_file(), None);
        assert_eq!(parse(&["servers", "-"]).input_file(), None);
    }

    #[test]
    fn test_check_takes_lone_argument_as_file() {
        let cli = parse(&["--check", "deploy.yaml"]);
        assert!(cli.check);
        assert_eq!(cli.input_file(), Some("deploy.yaml"));

        assert_eq!(parse(&["--check"]).input_file(), None);
        assert_eq!(parse(&["--check", "-"]).input_file(), None);
        assert_eq!(parse(&["--check", "a", "deploy.yaml"]).input_file(), Some("deploy.yaml"));
    }

    #[test]
    fn test_path_required_without_check() {
        assert!(Cli::try_parse_from(["yamlpick"]).is_err());
    }

    #[test]
    fn test_render_appends_newline() {
        let config = Config::default();
        let result = yamlpick::get("name: web1\n", "name");
        assert_eq!(render(&result, &config).unwrap(), "web1\n");

        let list = yamlpick::get("items: [a, b]\n", "items");
        assert_eq!(render(&list, &config).unwrap(), "- a\n- b\n");
    }
}
