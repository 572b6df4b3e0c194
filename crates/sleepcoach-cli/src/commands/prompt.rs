use anyhow::Result;
use sleepcoach_config::PromptConfig;
use sleepcoach_core::{build_prompt, PromptText};

use crate::cli::RequestArgs;

/// Print the branch, resolved hour, and prompt text
pub fn execute(policy: &PromptConfig, args: RequestArgs) -> Result<()> {
    let prompt = build_prompt(&args.to_request(), policy)?;
    print!("{}", render(&prompt));
    Ok(())
}

pub(crate) fn render(prompt: &PromptText) -> String {
    let hour = match prompt.resolved() {
        Some(resolved) => format!("{} (from {:?})", resolved.hour, resolved.source),
        None => "unknown".to_string(),
    };
    format!(
        "branch: {}\nhour:   {}\n\n{}\n",
        prompt.branch(),
        hour,
        prompt.as_str()
    )
}
