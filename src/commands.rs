use crate::scanner::ModelScanner;
use serde_json::Value;
use tauri::{AppHandle, Manager, Runtime};

/// Lists the models found in the local Hugging Face cache.
///
/// Invoked from the window as `list_models`. Never fails: a scan that cannot
/// run or produces unreadable output is logged and reported as an empty list.
#[tauri::command]
pub async fn list_models<R: Runtime>(app: AppHandle<R>) -> Vec<Value> {
    // Clone out of managed state so nothing borrowed lives across the await.
    let scanner = app.state::<ModelScanner>().inner().clone();
    scanner.scan_or_empty().await
}
