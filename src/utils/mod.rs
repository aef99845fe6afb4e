use dirs::home_dir;
use std::{
    env, fs,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    sync::Once,
};

const DEFAULT_DIR_NAME: &str = ".flow_ynab";
const STATE_FILE: &str = "state.json";
const TMP_SUFFIX: &str = "tmp";

/// Returns the plugin's data directory, defaulting to `~/.flow_ynab`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FLOW_YNAB_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the state file tracking the active budget.
pub fn state_file() -> PathBuf {
    app_data_dir().join(STATE_FILE)
}

pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

/// Writes `data` to a sibling temp file, then renames it over `path`.
pub fn write_atomic(path: &Path, data: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(data.as_bytes())?;
        file.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => String::from(TMP_SUFFIX),
    };
    tmp.set_extension(ext);
    tmp
}

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("flow_ynab=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
