use railway_settings::config::Profile;
use railway_settings::env::EnvSnapshot;
use railway_settings::output::{self, OutputFormat};
use railway_settings::settings;
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Command-line options.
struct Args {
    profile: Option<String>,
    format: OutputFormat,
    show_secrets: bool,
    create_dirs: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        profile: None,
        format: OutputFormat::default(),
        show_secrets: false,
        create_dirs: true,
    };

    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--profile=") {
            args.profile = Some(path.to_string());
        } else if let Some(format) = arg.strip_prefix("--format=") {
            args.format = format.parse().map_err(|e| format!("{}", e))?;
        } else if arg == "--show-secrets" {
            args.show_secrets = true;
        } else if arg == "--no-create-dirs" {
            args.create_dirs = false;
        } else {
            return Err(format!("unknown argument: {}", arg));
        }
    }

    Ok(args)
}

fn init_tracing(log_level: Option<&str>) {
    let level = match log_level {
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!(
                "usage: railway-settings [--profile=PATH] [--format=yaml|json] [--show-secrets] [--no-create-dirs]"
            );
            return ExitCode::FAILURE;
        }
    };

    let profile = match args.profile.as_deref() {
        Some(path) => match Profile::load(path) {
            Ok(profile) => profile,
            Err(e) => {
                eprintln!("Failed to load profile {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            dotenvy::dotenv().ok();
            Profile::default()
        }
    };

    init_tracing(profile.app.log_level.as_deref());

    let env = EnvSnapshot::from_process();
    let mut resolution = settings::resolve(&env, &profile);
    if args.create_dirs && profile.paths.create_dirs {
        resolution.ensure_dirs();
    }
    resolution.diagnostics.emit(profile.diagnostics.verbose);

    let db = &resolution.settings.databases.default;
    info!(
        profile = %profile.app.name,
        host = %db.host,
        database = %db.name,
        warnings = resolution.diagnostics.warnings().count(),
        "Settings resolved"
    );

    match output::render(&resolution.settings, args.format, args.show_secrets) {
        Ok(rendered) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to render settings");
            ExitCode::FAILURE
        }
    }
}
