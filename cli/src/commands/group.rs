use std::path::Path;

use crate::{args::GroupCommand, db::LocalDb};

pub fn group_cmd(db_path: &Path, subcommand: GroupCommand) -> Result<(), anyhow::Error> {
    let db = LocalDb::open(db_path)?;

    match subcommand {
        GroupCommand::Add { name } => {
            let group = db.create_group(&name.join(" "))?;
            println!("Group added successfully ({})", group.id);
        }
        GroupCommand::List => {
            for group in db.list_groups()? {
                println!("{}\t{}", group.id, group.name);
            }
        }
        GroupCommand::Assign {
            group,
            recipe,
            remove,
        } => {
            db.assign_group(group, recipe, !remove)?;
            if remove {
                println!("Recipe {} removed from group {}", recipe, group);
            } else {
                println!("Recipe {} added to group {}", recipe, group);
            }
        }
    }

    Ok(())
}
