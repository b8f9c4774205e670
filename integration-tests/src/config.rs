use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SheetConfig {
    pub sheet_id: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

pub fn load_config() -> Result<SheetConfig, String> {
    let mut path = std::env::current_dir().map_err(|e| e.to_string())?;
    path.push("sheet.json");
    read_config(&path)
}

fn read_config(path: &PathBuf) -> Result<SheetConfig, String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read sheet.json: {e}"))?;
    serde_json::from_str(&contents).map_err(|e| format!("Invalid sheet.json: {e}"))
}
