// # cf-cli - Cloudflare DNS records shell
//
// Thin integration layer: reads settings from the environment, parses the
// command line, loads the credential and hands one request to cfcli-core.
// Request building, dispatch and envelope rendering live in the core crate.
//
// ## Output
//
// Standard output carries exactly one document per invocation: either the
// upstream response body as received, or a JSON envelope
// `{"success":..,"errors":[..],"result":..}`. Logs go to standard error.
//
// ## Configuration
//
// - `CF_CLI_LOG`: log level (default warn)
// - `CF_CLI_API_BASE`: API origin override
// - `CF_CLI_CONFIG`: credential file override (default `$HOME/.cf_cli_config`)
// - `CF_CLI_TIMEOUT_SECS`: transport timeout in seconds
//
// ## Example
//
// ```bash
// cf-cli setup --x-auth-email user@example.com --x-auth-key c2547eb745079dac9320b638f5e225cf483cc5cfdda41
// cf-cli list --zone-id 023e105f4ecef8ad9ca31a8372d0c353 --type A
// cf-cli export --zone-id 023e105f4ecef8ad9ca31a8372d0c353
// ```

mod catalog;
mod cli;
mod settings;

use anyhow::{Context as _, Result};
use cfcli_core::{
    Context, Credential, CredentialStore, Dispatcher, Envelope, Error, FileCredentialStore,
    Handler,
};
use cfcli_http::ReqwestTransport;
use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::FmtSubscriber;

use crate::catalog::Endpoint;
use crate::cli::{Cli, Commands, SetupArgs};
use crate::settings::Settings;

/// Exit codes
///
/// - 0: A document was written (including failure envelopes for usage
///   errors) or help/version was printed
/// - 1: Invalid settings or startup failure
/// - 2: `setup` rejected its input; nothing else uses this code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliExitCode {
    Success = 0,
    ConfigError = 1,
    InvalidSetup = 2,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

fn main() -> ExitCode {
    let mut stdout = io::stdout().lock();

    let settings = match Settings::from_env().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            let _ = Envelope::failure(format!("{e:#}")).write_to(&mut stdout);
            return CliExitCode::ConfigError.into();
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(settings.level().unwrap_or(tracing::Level::WARN))
        .with_writer(io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return CliExitCode::ConfigError.into();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            match usage_failure(&e) {
                Some(envelope) => {
                    let _ = envelope.write_to(&mut stdout);
                }
                None => {
                    let _ = e.print();
                }
            }
            return CliExitCode::Success.into();
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return CliExitCode::ConfigError.into();
        }
    };

    match runtime.block_on(run(&settings, cli.command, &mut stdout)) {
        Ok(code) => code.into(),
        Err(e) => {
            error!("{:#}", e);
            CliExitCode::ConfigError.into()
        }
    }
}

/// Failure envelope for a rejected command line
///
/// `None` for help and version requests, which clap prints itself.
fn usage_failure(err: &clap::Error) -> Option<Envelope> {
    let message = match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => return None,
        ErrorKind::InvalidSubcommand => unknown_command_message(err),
        _ => first_line(&err.to_string()),
    };
    Some(Envelope::failure(message))
}

// clap renders "error: <what>" followed by usage and a help hint.
fn first_line(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

fn unknown_command_message(err: &clap::Error) -> String {
    let name = match err.get(ContextKind::InvalidSubcommand) {
        Some(ContextValue::String(name)) => name.as_str(),
        _ => "",
    };
    format!("command '{}' not found", name)
}

fn credential_store(settings: &Settings) -> cfcli_core::Result<FileCredentialStore> {
    match &settings.config_path {
        Some(path) => Ok(FileCredentialStore::new(path)),
        None => FileCredentialStore::at_home(),
    }
}

/// Run one parsed command
async fn run<W: Write>(settings: &Settings, command: Commands, out: &mut W) -> Result<CliExitCode> {
    let store = credential_store(settings);

    let endpoint = match command {
        Commands::Setup(args) => {
            return match &store {
                Ok(store) => setup(&args, store, out).await,
                Err(e) => {
                    report(e, out)?;
                    Ok(CliExitCode::Success)
                }
            };
        }
        command => match Endpoint::from_command(command) {
            Some(endpoint) => endpoint,
            None => return Ok(CliExitCode::Success),
        },
    };

    let context = match &store {
        Ok(store) => Context::load(store).await,
        Err(e) => {
            warn!("No credential location: {}", e);
            Context::unready()
        }
    };

    let handler = match build_handler(settings, context) {
        Ok(handler) => handler,
        Err(e) => {
            report(&e, out)?;
            return Ok(CliExitCode::ConfigError);
        }
    };

    handler
        .run_and_render(&endpoint, out)
        .await
        .context("failed to write response")?;
    Ok(CliExitCode::Success)
}

fn build_handler(settings: &Settings, context: Context) -> cfcli_core::Result<Handler> {
    let transport = ReqwestTransport::new(&settings.transport_settings())?;
    let dispatcher = Dispatcher::with_base_url(Box::new(transport), settings.api_base.clone());
    Ok(Handler::new(context, dispatcher))
}

/// Validate and persist the credential
///
/// Rejected input is reported on stderr with its own exit code; a failed
/// save becomes the failure envelope.
async fn setup<W: Write>(
    args: &SetupArgs,
    store: &dyn CredentialStore,
    out: &mut W,
) -> Result<CliExitCode> {
    if !args.api_token.is_empty() {
        warn!("--api-token is not used; requests authenticate with X-Auth-Email and X-Auth-Key");
    }

    let credential = Credential::new(args.x_auth_email.as_str(), args.x_auth_key.as_str());
    if let Err(e) = credential.validate() {
        eprintln!("{}", e);
        return Ok(CliExitCode::InvalidSetup);
    }

    if let Err(e) = store.save(&credential).await {
        report(&e, out)?;
    }
    Ok(CliExitCode::Success)
}

fn report<W: Write>(err: &Error, out: &mut W) -> Result<()> {
    error!("{}", err);
    Envelope::from_error(err)
        .write_to(out)
        .context("failed to write envelope")
}
