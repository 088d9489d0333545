//! Game library discovery and launching

use std::path::{Path, PathBuf};

/// File extensions treated as launchable games
const GAME_EXTENSIONS: &[&str] = &["bin", "cue", "iso", "chd", "pbp", "img", "exe", "sh"];

/// A game found in the library directory
#[derive(Debug, Clone, PartialEq)]
pub struct GameEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Whether a path looks like a launchable game file
pub fn is_game_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            GAME_EXTENSIONS.iter().any(|known| *known == ext)
        })
        .unwrap_or(false)
}

/// Discover games in a directory, sorted by name (native only)
#[cfg(not(target_arch = "wasm32"))]
pub fn discover_games(dir: &Path) -> Vec<GameEntry> {
    let mut games = Vec::new();

    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_file() && is_game_file(&path) {
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| "unnamed".to_string());
                games.push(GameEntry { name, path });
            }
        }
    }

    games.sort_by(|a, b| a.name.cmp(&b.name));
    games
}

/// WASM can't enumerate directories; the library starts empty
#[cfg(target_arch = "wasm32")]
pub fn discover_games(_dir: &Path) -> Vec<GameEntry> {
    Vec::new()
}

/// Split a launch command template into argv, substituting `{path}` with the
/// game path. A template without the placeholder gets the path appended.
pub fn launch_command_line(template: &str, path: &Path) -> Vec<String> {
    let path_str = path.to_string_lossy().to_string();
    let mut args: Vec<String> = template.split_whitespace().map(String::from).collect();

    let mut substituted = false;
    for arg in &mut args {
        if arg.contains("{path}") {
            *arg = arg.replace("{path}", &path_str);
            substituted = true;
        }
    }
    if !substituted {
        args.push(path_str);
    }
    args
}

/// Spawn the configured emulator for a game (native only)
#[cfg(not(target_arch = "wasm32"))]
pub fn launch_game(entry: &GameEntry, template: &str) -> std::io::Result<()> {
    let args = launch_command_line(template, &entry.path);
    if args.is_empty() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "empty launch command",
        ));
    }
    std::process::Command::new(&args[0]).args(&args[1..]).spawn()?;
    Ok(())
}

/// Launching external processes is not available in the browser
#[cfg(target_arch = "wasm32")]
pub fn launch_game(_entry: &GameEntry, _template: &str) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "launching is not available in the browser",
    ))
}
