use std::path::Path;

use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;

pub async fn handle(name: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (user, mut view) = super::load_for_edit(ctx, flags, name).await?;
    let current = view.draft().unwrap_or_default().to_string();

    let file = tempfile::Builder::new()
        .prefix(&format!("lookout-{name}-"))
        .suffix(".yml")
        .tempfile()
        .context("failed to create a temporary file for editing")?;
    tokio::fs::write(file.path(), &current)
        .await
        .context("failed to write the configuration for editing")?;

    let editor = resolve_editor(&ctx.config.general.editor);
    run_editor(&editor, file.path()).await?;

    let edited = tokio::fs::read_to_string(file.path())
        .await
        .context("failed to read the edited configuration")?;

    view.edit(edited);
    if !view.is_dirty() {
        eprintln!("No changes to {name}.");
        return super::show_view(&user, &view, flags);
    }

    super::save_and_show(ctx, flags, &user, view).await
}

/// Editor command: `general.editor`, then `$VISUAL`, then `$EDITOR`, then `vi`.
fn resolve_editor(configured: &str) -> String {
    let from_env = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

    Some(configured.to_string())
        .filter(|v| !v.trim().is_empty())
        .or_else(|| from_env("VISUAL"))
        .or_else(|| from_env("EDITOR"))
        .unwrap_or_else(|| "vi".to_string())
}

async fn run_editor(editor: &str, path: &Path) -> anyhow::Result<()> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().context("editor command is empty")?;

    let status = tokio::process::Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .await
        .with_context(|| format!("failed to launch editor '{editor}'"))?;

    if !status.success() {
        anyhow::bail!("editor '{editor}' exited with {status}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_editor_wins() {
        assert_eq!(resolve_editor("code --wait"), "code --wait");
    }

    #[test]
    fn blank_configured_editor_falls_through() {
        assert!(!resolve_editor("  ").trim().is_empty());
    }
}
