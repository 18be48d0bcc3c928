use std::path::Path;

use larder_core::{active_quick_filters, project, LabelLookups, SessionStore};

use crate::{
    app_config::AppConfig,
    args::FiltersCommand,
    db::LocalDb,
    formatters::{ListingHeader, RecipeFormatter},
};

pub fn filters_cmd(config: &AppConfig, subcommand: FiltersCommand) -> Result<(), anyhow::Error> {
    let db = LocalDb::open(Path::new(&config.db_path))?;
    let mut session = db.session(config.session_name());

    match subcommand {
        FiltersCommand::Show { output } => {
            let snapshot = session.load()?.unwrap_or_default();
            let labels = LabelLookups::with_groups(&db.list_groups()?);

            let chips = project(&snapshot.spec, &labels);
            let quick_filters = active_quick_filters(&snapshot.spec);
            let header = ListingHeader {
                chips: &chips,
                quick_filters: &quick_filters,
                sort: (snapshot.sort_by, snapshot.direction),
                total: 0,
            };

            RecipeFormatter::new(output)
                .print_saved(&snapshot.spec.search_term, &header, snapshot.panel_open)
                .map_err(|e| anyhow::anyhow!("Error while formatting filters: {}", e))?;
        }
        FiltersCommand::Clear => {
            session.clear()?;
            println!("Saved filters cleared");
        }
    }

    Ok(())
}
