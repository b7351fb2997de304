use govuk_components::{render_yaml_with, ComponentError, Config};
use std::env;
use std::fs;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn usage() -> ! {
    eprintln!("Usage: govuk-render [--config <config.yaml>] <file.yaml>...");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  govuk-render button.yaml");
    eprintln!("  govuk-render --config welsh.yaml fixtures/*.yaml");
    process::exit(1);
}

fn main() {
    init_tracing();

    let mut args = env::args().skip(1);
    let mut config_path = None;
    let mut files = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => config_path = Some(path),
                None => usage(),
            },
            _ => files.push(arg),
        }
    }
    if files.is_empty() {
        usage();
    }

    let config = match config_path.as_deref().map(load_config).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("✗ config has errors:");
            print_error(&e);
            process::exit(1);
        }
    };

    let mut exit_code = 0;
    for file_path in files {
        match render_file(&file_path, &config) {
            Ok(html) => println!("{}", html),
            Err(e) => {
                eprintln!("✗ {} has errors:", file_path);
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn read(path: &str) -> Result<String, ComponentError> {
    fs::read_to_string(path).map_err(|e| ComponentError::Io {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn load_config(path: &str) -> Result<Config, ComponentError> {
    Config::from_yaml(&read(path)?)
}

fn render_file(path: &str, config: &Config) -> Result<String, ComponentError> {
    let content = read(path)?;
    tracing::debug!(path, "rendering document");
    Ok(render_yaml_with(&content, config)?.into_string())
}

fn print_error(error: &ComponentError) {
    match error {
        ComponentError::Yaml(msg) => {
            eprintln!("  YAML error:");
            eprintln!("    {}", msg);
        }
        ComponentError::MissingComponentName => {
            eprintln!("  Missing 'component' key");
            eprintln!("    Each entry must name the component it renders");
        }
        ComponentError::UnknownComponent { name } => {
            eprintln!("  Unknown component '{}'", name);
            eprintln!(
                "    Expected one of: {}",
                govuk_components::document::COMPONENT_NAMES.join(", ")
            );
        }
        ComponentError::EmptyDocument => {
            eprintln!("  Empty document: no components found");
        }
        ComponentError::Io { path, message } => {
            eprintln!("  Failed to read '{}':", path);
            eprintln!("    {}", message);
        }
    }
}
