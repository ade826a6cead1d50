//! Model Loader - Library Root
//!
//! Desktop host for the model picker UI:
//! - Host configuration and interpreter resolution
//! - The `list_models` bridge to the Python cache scanner
//! - Main window creation and lifecycle

pub mod bin_resolver;
pub mod commands;
pub mod config;
pub mod scanner;
pub mod window;

use config::HostConfig;
use scanner::ModelScanner;
use tauri::{Manager, RunEvent};

/// Initialize and run the Tauri application
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let app = tauri::Builder::default()
        // Must come first so a second launch hands off before anything else starts.
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            window::focus_main_window(app);
        }))
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .setup(|app| {
            // Resolved once; every scan reuses the same invocation.
            let config = HostConfig::from_env();
            let scanner = ModelScanner::from_config(&config);

            log::info!("[main] Repo root: {}", config.project_root.display());
            log::info!("[main] Python executable: {}", scanner.program.display());
            if !config.project_root.join("backend").is_dir() {
                log::warn!(
                    "[main] No backend package under {}; set {} to the project checkout",
                    config.project_root.display(),
                    config::ROOT_ENV
                );
            }
            if let Some(url) = &app.config().build.dev_url {
                log::info!("[main] UI dev server: {}", url);
            }

            app.manage(scanner);

            window::create_main_window(app.handle())?;

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![commands::list_models])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|_app_handle, event| match event {
        // `code: None` means the last window closed rather than an explicit exit.
        RunEvent::ExitRequested { code: None, api, .. }
            if !window::exit_when_windows_closed(std::env::consts::OS) =>
        {
            api.prevent_exit();
        }
        #[cfg(target_os = "macos")]
        RunEvent::Reopen {
            has_visible_windows: false,
            ..
        } => window::focus_main_window(_app_handle),
        _ => {}
    });
}
