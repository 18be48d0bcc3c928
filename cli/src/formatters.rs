use std::io::{IsTerminal, Write};

use larder_core::{ActiveFilterChip, Direction, QuickFilter, RecipeCard, SortKey};
use serde_json::json;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::args::OutputFormat;

/// Everything a listing prints besides the recipes themselves
pub struct ListingHeader<'a> {
    pub chips: &'a [ActiveFilterChip],
    pub quick_filters: &'a [QuickFilter],
    pub sort: (SortKey, Direction),
    pub total: usize,
}

pub struct RecipeFormatter {
    output: OutputFormat,
    stdout: StandardStream,
}

impl RecipeFormatter {
    pub fn new(output: OutputFormat) -> Self {
        let choice = if std::io::stdout().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };

        Self {
            output,
            stdout: StandardStream::stdout(choice),
        }
    }

    pub fn print_recipes(
        &mut self,
        recipes: &[RecipeCard],
        header: &ListingHeader<'_>,
    ) -> std::io::Result<()> {
        match self.output {
            OutputFormat::Json => {
                let value = json!({
                    "recipes": recipes,
                    "chips": header.chips,
                    "quickFilters": header.quick_filters,
                    "sortBy": header.sort.0,
                    "direction": header.sort.1,
                    "total": header.total,
                });
                writeln!(self.stdout, "{}", serde_json::to_string_pretty(&value)?)?;
            }
            OutputFormat::Plain => {
                for recipe in recipes {
                    writeln!(self.stdout, "{}\t{}", recipe.id, recipe.name)?;
                }
            }
            OutputFormat::Pretty => {
                self.print_chips(header.chips, header.quick_filters)?;
                self.set_color(Some(Color::White), false)?;
                writeln!(
                    self.stdout,
                    "{} of {} recipes, sorted by {} {}",
                    recipes.len(),
                    header.total,
                    header.sort.0,
                    header.sort.1
                )?;
                self.stdout.reset()?;

                for recipe in recipes {
                    self.print_recipe(recipe)?;
                }
            }
        }

        Ok(())
    }

    fn print_recipe(&mut self, recipe: &RecipeCard) -> std::io::Result<()> {
        self.set_color(Some(Color::Cyan), false)?;
        write!(self.stdout, "#{:<4} ", recipe.id)?;
        self.set_color(None, true)?;
        write!(self.stdout, "{}", recipe.name)?;
        self.stdout.reset()?;

        let details: Vec<String> = [
            recipe.category.clone(),
            recipe.meal_type.clone(),
            recipe.dietary_preference.clone(),
            recipe.total_time.map(|t| format!("{}m", t)),
        ]
        .into_iter()
        .flatten()
        .collect();

        if !details.is_empty() {
            write!(self.stdout, "  ({})", details.join(" · "))?;
        }
        if recipe.is_favorite {
            self.set_color(Some(Color::Yellow), false)?;
            write!(self.stdout, " ★")?;
            self.stdout.reset()?;
        }
        writeln!(self.stdout)
    }

    pub fn print_chips(
        &mut self,
        chips: &[ActiveFilterChip],
        quick_filters: &[QuickFilter],
    ) -> std::io::Result<()> {
        if chips.is_empty() {
            return Ok(());
        }

        write!(self.stdout, "Filters:")?;
        self.set_color(Some(Color::Green), false)?;
        for chip in chips {
            write!(self.stdout, " [{}]", chip.label)?;
        }
        self.stdout.reset()?;
        writeln!(self.stdout)?;

        if !quick_filters.is_empty() {
            let ids: Vec<&str> = quick_filters.iter().map(|q| q.id()).collect();
            writeln!(self.stdout, "Quick filters: {}", ids.join(", "))?;
        }

        Ok(())
    }

    /// Saved filter state, as shown by `filters show`
    pub fn print_saved(
        &mut self,
        search_term: &str,
        header: &ListingHeader<'_>,
        panel_open: bool,
    ) -> std::io::Result<()> {
        if let OutputFormat::Json = self.output {
            let value = json!({
                "searchTerm": search_term,
                "chips": header.chips,
                "quickFilters": header.quick_filters,
                "sortBy": header.sort.0,
                "direction": header.sort.1,
                "panelOpen": panel_open,
            });
            writeln!(self.stdout, "{}", serde_json::to_string_pretty(&value)?)?;
            return Ok(());
        }

        if !search_term.trim().is_empty() {
            writeln!(self.stdout, "Search: {}", search_term)?;
        }
        if header.chips.is_empty() {
            writeln!(self.stdout, "No filters")?;
        } else {
            self.print_chips(header.chips, header.quick_filters)?;
        }
        writeln!(self.stdout, "Sort: {} {}", header.sort.0, header.sort.1)
    }

    fn set_color(&mut self, color: Option<Color>, bold: bool) -> std::io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(color).set_bold(bold))
    }
}
