//! `sitedeploy deployers` - list registered deployer types

use anyhow::Result;
use sitedeploy::infrastructure::builtin_registry;

use crate::ui::context::UiContext;
use crate::ui::views::deployers::render_deployers;

pub fn cmd_deployers(ui: &UiContext) -> Result<()> {
    let names = builtin_registry().names();
    if ui.json {
        println!("{}", serde_json::json!({ "deployers": names }));
    } else {
        print!("{}", render_deployers(&names, ui.color));
    }
    Ok(())
}
