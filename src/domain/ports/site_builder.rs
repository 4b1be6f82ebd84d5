//! Site Builder port - the "generate" step that may run before a deploy

use crate::application::deploy::DeployOptions;

/// Produces the public output directory
pub trait SiteBuilder {
    /// Build the site. Invocation options are passed through untouched.
    fn generate(&self, options: &DeployOptions) -> anyhow::Result<()>;
}

impl<T: SiteBuilder + ?Sized> SiteBuilder for &T {
    fn generate(&self, options: &DeployOptions) -> anyhow::Result<()> {
        (**self).generate(options)
    }
}
