//! Exec deployer: runs user-supplied commands from the project root.

use tracing::info;

use crate::domain::ports::{DeployContext, Deployer, Invocation};
use crate::domain::value_objects::{split_line, TargetOptions};

/// Options: `command` (one line) and/or `commands` (a list), run in order.
///
/// Each line is split on whitespace with no shell quoting, so
/// `git commit -m "x y"` passes `"x` and `y"` as two arguments. Put commands
/// that need quoting in a script and run the script.
pub struct ExecDeployer;

impl Deployer for ExecDeployer {
    fn deploy(&self, ctx: &DeployContext<'_>, options: &TargetOptions) -> anyhow::Result<()> {
        let mut lines = options.get_str("command")?.into_iter().collect::<Vec<_>>();
        lines.extend(options.get_string_list("commands")?);

        let invocations: Vec<Invocation> = lines
            .iter()
            .filter_map(|line| Invocation::from_argv(&split_line(line), ctx.root))
            .collect();
        if invocations.is_empty() {
            anyhow::bail!("deployer 'exec' needs a 'command' or 'commands' option");
        }

        for invocation in &invocations {
            info!(deployer = "exec", command = %invocation.display(), "Running");
            ctx.runner.run(invocation)?;
        }
        Ok(())
    }
}
