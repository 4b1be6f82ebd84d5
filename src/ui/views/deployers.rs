use crate::ui::primitives::text::ColoredText;

/// One registered deployer type per line.
pub fn render_deployers(names: &[String], supports_color: bool) -> String {
    let mut out = format!(
        "{}\n",
        ColoredText::info("Available deployer plugins:")
            .bold()
            .render(supports_color)
    );
    for name in names {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::accent(name.as_str()).render(supports_color)
        ));
    }
    out
}
