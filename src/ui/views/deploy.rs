use sitedeploy::application::{DeployReport, TargetStatus};
use sitedeploy::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub const DOCS_URL: &str = "https://hexo.io/";

/// Guidance printed when the config has no deploy section.
pub fn render_not_configured(available: &[String], supports_color: bool) -> String {
    let names = available
        .iter()
        .map(|name| ColoredText::accent(name.as_str()).render(supports_color))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You should configure deployment settings in _config.yml first!\n\n\
         Available deployer plugins:\n  {}\n\n\
         For more help, you can check the online docs: {}\n",
        names,
        ColoredText::plain(DOCS_URL).underline().render(supports_color)
    )
}

pub fn render_deploy_summary(
    report: &DeployReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if report.is_success() {
        ColoredText::success("Deploy complete").bold()
    } else {
        ColoredText::warning("Deploy finished with missing deployers").bold()
    };

    let mut out = format!(
        "{} {}\n",
        Icon::Deploy.colored(supports_color, supports_unicode),
        title.render(supports_color)
    );

    for outcome in &report.outcomes {
        let kind = outcome.kind.as_deref().unwrap_or("(no type)");
        let (icon, note) = match outcome.status {
            TargetStatus::Deployed => (Icon::Success, ""),
            TargetStatus::NotFound => (Icon::Error, " not found"),
            TargetStatus::Skipped => (Icon::Skipped, " skipped"),
        };
        out.push_str(&format!(
            "  {} #{} {}{}\n",
            icon.colored(supports_color, supports_unicode),
            outcome.index,
            kind,
            ColoredText::dim(note).render(supports_color)
        ));
    }

    out.push_str(&format!(
        "  {}\n",
        ColoredText::dim(format!(
            "{} deployed, {} not found, {} skipped",
            report.deployed().len(),
            report.not_found().len(),
            report.skipped_count()
        ))
        .render(supports_color)
    ));
    out
}

pub fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning(warning.to_string()).render(supports_color)
    )
}
