//! Model Loader - Application Entry Point
//!
//! Delegates to `model_loader_lib`, where the Tauri setup and lifecycle
//! management live.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    model_loader_lib::run()
}
