//! Template rendering.

use std::path::Path;

use minijinja::{context, Environment};
use thiserror::Error;
use tracing::debug;

use crate::config::TemplatesConfig;
use crate::views::view::EMBEDDED;
use crate::views::{Page, View, ViewContext};

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("failed to register template: {0}")]
    Register(#[source] minijinja::Error),

    #[error("template '{template}' for {view:?} could not be loaded: {source}")]
    Missing {
        view: View,
        template: &'static str,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to render {view:?}: {source}")]
    Render {
        view: View,
        #[source]
        source: minijinja::Error,
    },
}

/// Renders [`Page`]s to HTML.
///
/// Immutable after construction; shared between requests behind an `Arc`.
#[derive(Debug)]
pub struct ViewEngine {
    env: Environment<'static>,
}

impl ViewEngine {
    /// Engine over the templates compiled into the binary.
    pub fn embedded() -> Result<Self, ViewError> {
        let mut env = Environment::new();
        for &(name, source) in EMBEDDED {
            env.add_template(name, source).map_err(ViewError::Register)?;
        }
        Ok(Self { env })
    }

    /// Engine that loads templates from `dir` on first use.
    pub fn from_directory(dir: &Path) -> Self {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(dir.to_path_buf()));
        Self { env }
    }

    pub fn from_config(config: &TemplatesConfig) -> Result<Self, ViewError> {
        let engine = match &config.directory {
            Some(dir) => {
                debug!(directory = %dir.display(), "Loading templates from directory");
                Self::from_directory(dir)
            }
            None => Self::embedded()?,
        };
        engine.check()?;
        Ok(engine)
    }

    /// Load every view's template so a broken template directory fails at
    /// startup instead of on the first request.
    pub fn check(&self) -> Result<(), ViewError> {
        for view in View::ALL {
            self.env
                .get_template(view.template_name())
                .map_err(|source| ViewError::Missing {
                    view,
                    template: view.template_name(),
                    source,
                })?;
        }
        Ok(())
    }

    pub fn render(&self, page: &Page) -> Result<String, ViewError> {
        let view = page.view;
        let template = self
            .env
            .get_template(view.template_name())
            .map_err(|source| ViewError::Missing {
                view,
                template: view.template_name(),
                source,
            })?;

        let rendered = match &page.context {
            ViewContext::Empty => template.render(context! {}),
            ViewContext::Auth(ctx) => template.render(ctx),
            ViewContext::Error(ctx) => template.render(ctx),
        };
        rendered.map_err(|source| ViewError::Render { view, source })
    }
}
