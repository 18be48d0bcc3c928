use aide::axum::ApiRouter;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json,
};
use axum_extra::extract::Query;
use chrono::Utc;
use larder_core::{
    session::SNAPSHOT_KEY, Direction, FilterIntent, FilterStore, LabelLookups, MemorySession,
    QuickFilter, SortKey,
};
use tower_sessions::Session;
use tracing::debug;

use crate::{
    errors::RestResult,
    model::{
        browse::{BrowseQuery, BrowseView},
        recipe::RecipeDto,
    },
    state::AppState,
};

type BrowseStore = FilterStore<MemorySession>;

pub fn browse_routes() -> ApiRouter<AppState> {
    ApiRouter::new()
        .route("/browse", get(browse))
        .route("/browse/intent", post(browse_intent))
        .route("/browse/state", delete(clear_state))
}

/// Consume the session's saved filter state, overlay the query and list the
/// result. The state is saved again only with `keep=true`.
async fn browse(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<BrowseQuery>,
) -> RestResult<Json<BrowseView>> {
    let keep = query.keep;
    let saved = session.get::<String>(SNAPSHOT_KEY).await?;
    let (view, saved) = browse_with(&state, saved, keep, |store| overlay_query(store, query))?;
    write_back(&session, saved).await?;

    Ok(Json(view))
}

async fn browse_intent(
    State(state): State<AppState>,
    session: Session,
    Json(intent): Json<FilterIntent>,
) -> RestResult<Json<BrowseView>> {
    debug!(?intent, "Applying filter intent");

    let saved = session.get::<String>(SNAPSHOT_KEY).await?;
    let (view, saved) = browse_with(&state, saved, true, |store| {
        store.apply_intent(intent);
        Ok(())
    })?;
    write_back(&session, saved).await?;

    Ok(Json(view))
}

async fn clear_state(session: Session) -> RestResult<StatusCode> {
    session.remove::<String>(SNAPSHOT_KEY).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Query values only ever add constraints; removal goes through intents
fn overlay_query(store: &mut BrowseStore, query: BrowseQuery) -> RestResult<()> {
    if let Some(enabled) = query.favorites_only {
        store.set_favorites_only(enabled);
    }
    if let Some(term) = query.search {
        store.set_search_term(term);
    }
    for value in query.category {
        store.set_category(value, true);
    }
    for value in query.meal_type {
        store.set_meal_type(value, true);
    }
    for value in query.diet {
        store.set_dietary(value, true);
    }
    for id in query.group {
        store.set_group(id, true);
    }
    if query.max_time.is_some() {
        store.set_max_cook_time(query.max_time);
    }
    if query.new_days.is_some() {
        store.set_new_days(query.new_days);
    }
    for id in query.quick {
        let quick: QuickFilter = id.parse()?;
        if !store.active_quick_filters().contains(&quick) {
            store.toggle_quick_filter(quick);
        }
    }

    let (current_key, current_direction) = store.sort();
    let sort_by = match query.sort_by {
        Some(key) => key.parse::<SortKey>()?,
        None => current_key,
    };
    let direction = match query.direction {
        Some(direction) => direction.parse::<Direction>()?,
        None => current_direction,
    };
    store.set_sort(sort_by, direction);

    Ok(())
}

/// Run `update` against the restored store and build the view.
///
/// Returns the view and the raw snapshot to write into the session, which is
/// `None` unless `persist` is set.
fn browse_with<F>(
    state: &AppState,
    saved: Option<String>,
    persist: bool,
    update: F,
) -> RestResult<(BrowseView, Option<String>)>
where
    F: FnOnce(&mut BrowseStore) -> RestResult<()>,
{
    let mut memory = MemorySession::new();
    if let Some(raw) = saved {
        memory.set_raw(raw);
    }

    let mut store = FilterStore::restore(memory);
    update(&mut store)?;
    if persist {
        store.persist()?;
    }

    let (recipes, groups) = {
        let conn = state.conn()?;
        (
            larder_core::list_recipes(&conn)?,
            larder_core::list_groups(&conn)?,
        )
    };

    let labels = LabelLookups::with_groups(&groups);
    let results = store.apply(&recipes, Utc::now());
    let (sort_by, direction) = store.sort();

    let view = BrowseView {
        recipes: results.into_iter().map(RecipeDto::from).collect(),
        total: recipes.len(),
        spec: store.spec().clone(),
        chips: store.chips(&labels),
        quick_filters: store.active_quick_filters(),
        sort_by,
        direction,
        panel_open: store.panel_open(),
        url_query: store.url_query(),
    };

    let raw = store.session().raw().map(str::to_string);
    Ok((view, raw))
}

async fn write_back(session: &Session, saved: Option<String>) -> RestResult<()> {
    match saved {
        Some(raw) => session.insert(SNAPSHOT_KEY, raw).await?,
        None => {
            session.remove::<String>(SNAPSHOT_KEY).await?;
        }
    }
    Ok(())
}
