//! Command handler and readiness gate
//!
//! The [`Context`] is built once at startup from the credential store and
//! passed to the [`Handler`]. Its readiness never changes during a run: if no
//! credential could be loaded, every network command short-circuits with the
//! `Configuration unready` failure and no request is sent.

use std::io::{self, Write};

use crate::config::Credential;
use crate::dispatch::{Dispatcher, Outcome};
use crate::envelope;
use crate::error::{Error, Result};
use crate::request::{RequestBuilder, RequestOption};
use crate::traits::CredentialStore;

/// Startup context: the loaded credential, if any
#[derive(Debug, Clone, Default)]
pub struct Context {
    credential: Option<Credential>,
}

impl Context {
    /// A ready context holding `credential`
    pub fn ready(credential: Credential) -> Self {
        Self {
            credential: Some(credential),
        }
    }

    /// A context with no credential
    pub fn unready() -> Self {
        Self::default()
    }

    /// Load the credential once from `store`
    ///
    /// A load failure is not fatal: it only leaves the context unready.
    pub async fn load(store: &dyn CredentialStore) -> Self {
        match store.load().await {
            Ok(credential) => {
                tracing::debug!("Credential loaded from {}", store.location());
                Self::ready(credential)
            }
            Err(e) => {
                tracing::info!("No usable credential at {}: {}", store.location(), e);
                Self::unready()
            }
        }
    }

    /// Whether a credential was loaded
    pub fn is_ready(&self) -> bool {
        self.credential.is_some()
    }

    /// The loaded credential
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}

/// A network-calling command: a method, a path template and its options
///
/// Implementations describe only their own parameters; the handler adds the
/// security option from the context.
pub trait ApiCommand {
    /// Command name (for logging)
    fn name(&self) -> &'static str;

    /// Build the request for this invocation
    fn request(&self) -> Result<RequestBuilder>;
}

/// Runs [`ApiCommand`]s behind the readiness gate
#[derive(Debug)]
pub struct Handler {
    context: Context,
    dispatcher: Dispatcher,
}

impl Handler {
    /// Create a handler
    pub fn new(context: Context, dispatcher: Dispatcher) -> Self {
        Self {
            context,
            dispatcher,
        }
    }

    /// Startup context
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Build and dispatch `command`
    ///
    /// Fails with the unready configuration error, without building or
    /// sending anything, when no credential was loaded.
    pub async fn run(&self, command: &dyn ApiCommand) -> Result<Outcome> {
        let Some(credential) = self.context.credential() else {
            tracing::warn!("Refusing to run '{}': configuration unready", command.name());
            return Err(Error::unready());
        };

        let request = command
            .request()?
            .option(RequestOption::security(credential))
            .build();

        tracing::info!("Running '{}'", command.name());
        self.dispatcher.dispatch(&request).await
    }

    /// Run `command` and write the single output document to `out`
    pub async fn run_and_render<W: Write>(
        &self,
        command: &dyn ApiCommand,
        out: &mut W,
    ) -> io::Result<()> {
        let result = self.run(command).await;
        envelope::render(&result, out)
    }
}
