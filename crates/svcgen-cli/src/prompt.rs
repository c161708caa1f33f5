//! [`ConfigPrompter`] implementations.
//!
//! - [`DialoguerPrompter`]: interactive, re-asks until the name is valid.
//! - [`PresetPrompter`]: answers from `--name/--author/--license`; an
//!   invalid name fails the run instead of re-asking.

use std::collections::HashSet;

use svcgen_core::{
    application::ConfigPrompter,
    domain::{ServiceConfig, ServiceName},
    error::SvcgenResult,
};
use tracing::debug;

/// Fixed answers from the command line.
#[derive(Debug, Clone)]
pub struct PresetPrompter {
    name: String,
    author: String,
    license: String,
}

impl PresetPrompter {
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            license: license.into(),
        }
    }
}

impl ConfigPrompter for PresetPrompter {
    fn prompt(&self, existing: &HashSet<String>) -> SvcgenResult<Option<ServiceConfig>> {
        let name = ServiceName::parse_unique(self.name.as_str(), existing)?;
        debug!(service = %name, "Using answers from command line");
        Ok(Some(ServiceConfig::new(
            name,
            self.author.as_str(),
            self.license.as_str(),
        )))
    }
}

#[cfg(feature = "interactive")]
pub use interactive::DialoguerPrompter;

#[cfg(feature = "interactive")]
mod interactive {
    use std::collections::HashSet;
    use std::io;

    use dialoguer::{
        Input,
        theme::{ColorfulTheme, SimpleTheme, Theme},
    };
    use svcgen_core::{
        application::{ApplicationError, ConfigPrompter},
        domain::{NameValidator, ServiceConfig, ServiceName},
        error::SvcgenResult,
    };

    /// Asks three questions on the terminal.
    pub struct DialoguerPrompter {
        theme: Box<dyn Theme>,
    }

    impl DialoguerPrompter {
        pub fn new(color: bool) -> Self {
            let theme: Box<dyn Theme> = if color {
                Box::new(ColorfulTheme::default())
            } else {
                Box::new(SimpleTheme)
            };
            Self { theme }
        }

        fn ask(
            &self,
            prompt: &str,
            existing: Option<&HashSet<String>>,
        ) -> Result<String, dialoguer::Error> {
            let input = Input::<String>::with_theme(self.theme.as_ref()).with_prompt(prompt);
            match existing {
                Some(existing) => input
                    .validate_with(|name: &String| -> Result<(), &'static str> {
                        NameValidator::validate(name, existing)
                            .into_result()
                            .map_err(|violation| violation.message())
                    })
                    .interact_text(),
                None => input.allow_empty(true).interact_text(),
            }
        }
    }

    impl ConfigPrompter for DialoguerPrompter {
        fn prompt(&self, existing: &HashSet<String>) -> SvcgenResult<Option<ServiceConfig>> {
            let answers = self.ask("Service name", Some(existing)).and_then(|name| {
                let author = self.ask("Author name", None)?;
                let license = self.ask("License type", None)?;
                Ok((name, author, license))
            });

            match answers {
                Ok((name, author, license)) => {
                    let name = ServiceName::parse_unique(name, existing)?;
                    Ok(Some(ServiceConfig::new(name, author, license)))
                }
                Err(e) => aborted_or_failed(e),
            }
        }
    }

    /// Ctrl-C or a closed stdin is the user declining, not a failure.
    fn aborted_or_failed(err: dialoguer::Error) -> SvcgenResult<Option<ServiceConfig>> {
        match err {
            dialoguer::Error::IO(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
                ) =>
            {
                Ok(None)
            }
            other => Err(ApplicationError::Prompt {
                reason: other.to_string(),
            }
            .into()),
        }
    }

}
