//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    CollationSettings,
    ConfigError,
};

/// Name of the settings file looked up in a configuration directory.
pub const CONFIG_FILE_NAME: &str = ".title-collation.json";

/// ディレクトリから設定を読み込む
///
/// `.title-collation.json` ファイルを探して読み込む
///
/// # Arguments
/// * `config_dir` - 設定ファイルを探すディレクトリ
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub(super) fn load_from_dir(config_dir: &Path) -> Result<Option<CollationSettings>, ConfigError> {
    let config_path = config_dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: CollationSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
