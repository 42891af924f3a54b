//! Scaffold phase: generate, relocate, and stamp template files.

use crate::app::AppContext;
use crate::domain::{AppError, AppName};
use crate::ports::{AppGenerator, ProjectStore};
use crate::scaffold;

/// Run the scaffold phase over the collected names, in order.
///
/// Per-app failures are reported and never abort the run; every name in the
/// list is processed. Template files are written whenever the app directory
/// exists under `apps/`, so re-runs against already-relocated apps refresh
/// the templates even though generation and relocation fail.
pub fn execute<G, S>(ctx: &AppContext<G, S>, names: &[AppName]) -> Result<(), AppError>
where
    G: AppGenerator,
    S: ProjectStore,
{
    if names.is_empty() {
        return Ok(());
    }

    ctx.store().create_dir_all(&ctx.layout().apps_dir())?;

    for name in names {
        if let Err(err) = ctx.generator().generate(name, ctx.layout().root()) {
            println!("⚠️  Generation failed for '{}': {}", name, err);
        }

        let generated = ctx.layout().generated_dir(name);
        let app_dir = ctx.layout().app_dir(name);

        if ctx.store().exists(&generated) {
            if let Err(err) = ctx.store().move_dir(&generated, &app_dir) {
                println!("⚠️  Could not move '{}' into apps/: {}", name, err);
            }
        }

        if !ctx.store().exists(&app_dir) {
            println!("⚠️  No app directory at apps/{}/, skipping templates", name);
            continue;
        }

        let mut written = Vec::new();
        for file in scaffold::app_files() {
            match ctx.store().write(&app_dir.join(file.name), file.content) {
                Ok(()) => written.push(file.name),
                Err(err) => println!("⚠️  Could not write apps/{}/{}: {}", name, file.name, err),
            }
        }

        if !written.is_empty() {
            println!("✅ Created {} in apps/{}/", written.join(" and "), name);
        }
    }

    Ok(())
}
