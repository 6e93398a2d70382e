use crate::commands::{CmdMessage, CmdResult, ShelfPaths};
use crate::config::ShelfConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &ShelfPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ShelfConfig::load(&paths.home)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            return Ok(result);
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&paths.home)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(&key)?
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use tempfile::tempdir;

    fn paths(home: &std::path::Path) -> ShelfPaths {
        ShelfPaths {
            home: home.to_path_buf(),
            data_file: home.join("library_data.json"),
        }
    }

    #[test]
    fn show_all_returns_defaults() {
        let dir = tempdir().unwrap();
        let result = run(&paths(dir.path()), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(ShelfConfig::default()));
    }

    #[test]
    fn set_persists() {
        let dir = tempdir().unwrap();
        let p = paths(dir.path());
        run(
            &p,
            ConfigAction::Set("data-file".into(), "mine.json".into()),
        )
        .unwrap();

        let result = run(&p, ConfigAction::ShowKey("data-file".into())).unwrap();
        assert_eq!(result.messages[0].content, "data-file = mine.json");
    }

    #[test]
    fn unknown_key_errors() {
        let dir = tempdir().unwrap();
        let err = run(&paths(dir.path()), ConfigAction::ShowKey("nope".into())).unwrap_err();
        assert!(matches!(err, ShelfError::Config(_)));
    }
}
