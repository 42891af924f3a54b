//! Register phase: patch generated app configs, then the settings file.
//!
//! Phase A rewrites `apps/<name>/apps.py` so the config `name` becomes the
//! namespaced `apps.<name>`. Phase B registers each app in the shared
//! settings module. Phase A completes over the whole list before Phase B
//! starts, and per-app failures never abort either pass.

use crate::app::AppContext;
use crate::domain::settings::{INSTALLED_APPS_ANCHOR, RegisterOutcome, register_app, rewrite_app_config};
use crate::domain::{AppError, AppName, SETTINGS_FILE};
use crate::ports::{AppGenerator, ProjectStore};

pub fn execute<G, S>(ctx: &AppContext<G, S>, names: &[AppName]) -> Result<(), AppError>
where
    G: AppGenerator,
    S: ProjectStore,
{
    patch_app_configs(ctx, names);
    register_in_settings(ctx, names);
    Ok(())
}

fn patch_app_configs<G, S>(ctx: &AppContext<G, S>, names: &[AppName])
where
    G: AppGenerator,
    S: ProjectStore,
{
    for name in names {
        let path = ctx.layout().app_config_file(name);
        if !ctx.store().exists(&path) {
            println!("⚠️  apps/{}/apps.py not found, skipping", name);
            continue;
        }

        let source = match ctx.store().read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                println!("⚠️  Could not read apps/{}/apps.py: {}", name, err);
                continue;
            }
        };

        let (rewritten, changed) = rewrite_app_config(&source, name);
        if !changed {
            println!("⚠️  No name line to patch in apps/{}/apps.py", name);
            continue;
        }

        match ctx.store().write(&path, &rewritten) {
            Ok(()) => println!("✅ Set name = '{}' in apps/{}/apps.py", name.module_path(), name),
            Err(err) => println!("⚠️  Could not write apps/{}/apps.py: {}", name, err),
        }
    }
}

fn register_in_settings<G, S>(ctx: &AppContext<G, S>, names: &[AppName])
where
    G: AppGenerator,
    S: ProjectStore,
{
    let path = ctx.layout().settings_file();
    for name in names {
        let settings = match ctx.store().read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                println!("⚠️  Could not read {}: {}", SETTINGS_FILE, err);
                continue;
            }
        };

        match register_app(&settings, name) {
            (updated, RegisterOutcome::Inserted) => match ctx.store().write(&path, &updated) {
                Ok(()) => println!("✅ Registered '{}' in {}", name.module_path(), SETTINGS_FILE),
                Err(err) => println!("⚠️  Could not write {}: {}", SETTINGS_FILE, err),
            },
            (_, RegisterOutcome::AlreadyPresent) => {
                println!("✅ '{}' already present in {}", name.module_path(), SETTINGS_FILE);
            }
            (_, RegisterOutcome::AnchorMissing) => {
                println!(
                    "⚠️  Anchor '{}' not found in {}, skipping '{}'",
                    INSTALLED_APPS_ANCHOR,
                    SETTINGS_FILE,
                    name.module_path()
                );
            }
        }
    }
}
