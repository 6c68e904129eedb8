//! Writes the configuration file.
//!
//! Values not given on the command line keep what is already configured
//! (or the defaults on first use).

use crate::{
    libs::{
        config::{Config, StorageBackend, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

/// Interval settings accepted by `init` and `start`.
#[derive(Debug, Args, Default, Clone)]
pub struct SettingsArgs {
    #[arg(long, help = "Pomodoro length in minutes")]
    pub pomodoro: Option<i64>,

    #[arg(long, help = "Short break length in minutes")]
    pub short_break: Option<i64>,

    #[arg(long, help = "Long break length in minutes")]
    pub long_break: Option<i64>,

    #[arg(long, value_enum, help = "Where interval history is stored")]
    pub storage: Option<StorageBackend>,
}

impl SettingsArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(pomodoro) = self.pomodoro {
            config.pomodoro = pomodoro;
        }
        if let Some(short_break) = self.short_break {
            config.short_break = short_break;
        }
        if let Some(long_break) = self.long_break {
            config.long_break = long_break;
        }
        if let Some(storage) = self.storage {
            config.storage = storage;
        }
    }
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[command(flatten)]
    settings: SettingsArgs,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let mut config = Config::read()?;
    init_args.settings.apply(&mut config);
    config.save()?;

    msg_success!(Message::ConfigSaved);
    let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
    msg_info!(Message::ConfigPath(path.display().to_string()));
    Ok(())
}
