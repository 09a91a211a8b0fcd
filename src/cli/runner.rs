//! Runner orchestrating the deletion from parsed arguments to reported outcome

use crate::cli::args::Args;
use crate::cli::config::DeleteConfig;
use crate::error::{DeleterError, Result};
use crate::output::OutputManager;
use crate::registry::{delete_tag, RegistryClient, TagDeletionOutcome};
use std::time::Instant;

pub struct Runner {
    args: Args,
    output: OutputManager,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        let output = if args.quiet {
            OutputManager::new_quiet()
        } else {
            OutputManager::new(args.verbose)
        };

        Self { args, output }
    }

    pub async fn run(&self) -> Result<()> {
        let start_time = Instant::now();

        self.output.section("Docker Tag Deleter");

        let config = DeleteConfig::from_args(&self.args)?;

        self.output.info(&format!("Registry: {}", config.registry));
        self.output.info(&format!("Repository: {}", config.repository));
        self.output.info(&format!("Tag: {}", config.tag));

        let client = self.create_registry_client(&config)?;

        match delete_tag(&client, &config.repository, &config.tag).await {
            TagDeletionOutcome::Deleted => {
                self.output.success(&format!(
                    "Deleted tag {} from {} in {}",
                    config.tag,
                    config.repository,
                    self.output.format_duration(start_time.elapsed())
                ));
                Ok(())
            }
            TagDeletionOutcome::NotFound(message) if config.ignore_not_found => {
                self.output.info(&message);
                Ok(())
            }
            TagDeletionOutcome::NotFound(message) => Err(DeleterError::TagNotFound(message)),
            TagDeletionOutcome::Failed(err) => Err(err),
        }
    }

    fn create_registry_client(&self, config: &DeleteConfig) -> Result<RegistryClient> {
        self.output.step("Setting up registry client");

        if config.skip_tls {
            self.output
                .warning("TLS certificate verification is disabled");
        }

        let mut builder = RegistryClient::builder(config.registry.clone())
            .with_auth(config.credentials.clone())
            .with_skip_tls(config.skip_tls)
            .with_output(self.output.clone());

        if let Some(timeout) = config.timeout {
            builder = builder.with_timeout(timeout);
        }

        builder.build()
    }
}
