use std::path::Path;

use crate::{app_config::AppConfig, args::InitArgs, profile::Profile};

pub fn init_cmd(config: &AppConfig, profile_path: &Path, args: InitArgs) -> anyhow::Result<()> {
    let profile = Profile {
        db_path: args.db_path.or_else(|| Some(config.db_path.clone())),
        remote_url: args.remote_url,
    };

    profile.save(profile_path)?;
    println!("Profile '{}' written to {}", config.profile_name, profile_path.display());

    Ok(())
}
