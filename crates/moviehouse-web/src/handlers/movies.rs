//! Movie handlers - the CRUD workflow.
//!
//! Every path ends in one of three views: the list page, a form page,
//! or the error page. Failures the workflow expects (missing movie,
//! invalid input) render the error template with a message embedding
//! the offending identifier; only infrastructure failures escape as
//! `HttpError`.

use axum::extract::{Form, Query, State};
use axum::response::Html;
use serde_json::json;

use moviehouse_core::{MovieDraft, MovieUpdate};

use crate::dto::{IdQuery, NewMovieForm, UpdateMovieForm};
use crate::error::HttpError;
use crate::state::AppState;
use crate::views::{
    EDIT_MOVIE_FORM_TEMPLATE, ERROR_TEMPLATE, LIST_TEMPLATE, NEW_MOVIE_FORM_TEMPLATE,
};

/// Render the list page: all movies in store order, all comments most
/// recent first.
async fn render_list(state: &AppState) -> Result<Html<String>, HttpError> {
    let movies = state.repos.movies.list().await?;

    // Reverse so most recent comments appear first; the store keeps
    // insertion order.
    let mut comments = state.repos.comments.list().await?;
    comments.reverse();

    let args = json!({
        "movies": movies,
        "comments": comments,
    });
    let html = state.renderer.render(LIST_TEMPLATE, &args)?;
    Ok(Html(html))
}

/// Render the error page with the given message.
fn render_error(state: &AppState, message: &str) -> Result<Html<String>, HttpError> {
    let args = json!({ "errorMessage": message });
    let html = state.renderer.render(ERROR_TEMPLATE, &args)?;
    Ok(Html(html))
}

/// List all movies and comments.
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    render_list(&state).await
}

/// Delete a movie by id, then show the list.
///
/// An absent or malformed id routes to the error view; the repository's
/// not-found result is what distinguishes "deleted" from "was never
/// there".
pub async fn remove(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Html<String>, HttpError> {
    let message = format!(
        "there was a problem trying to delete Movie with ID = {}",
        query.id
    );

    let Ok(id) = query.id.trim().parse::<i64>() else {
        return render_error(&state, &message);
    };

    match state.repos.movies.delete(id).await {
        Ok(()) => render_list(&state).await,
        Err(err) if err.is_not_found() => {
            tracing::debug!(id, "delete of missing movie");
            render_error(&state, &message)
        }
        Err(err) => Err(err.into()),
    }
}

/// Show the empty new-movie form.
pub async fn new_form(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    let html = state.renderer.render(NEW_MOVIE_FORM_TEMPLATE, &json!({}))?;
    Ok(Html(html))
}

/// Create a movie from the submitted form, then show the list.
///
/// Created movies always start with zero vote accumulators; the store
/// assigns the id.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<NewMovieForm>,
) -> Result<Html<String>, HttpError> {
    let draft = MovieDraft::from(form);
    let movie = match draft.parse() {
        Ok(movie) => movie,
        Err(err) => return render_error(&state, &err.to_string()),
    };

    match state.repos.movies.insert(&movie).await {
        Ok(created) => {
            tracing::info!(id = created.id, title = %created.title, "movie created");
            render_list(&state).await
        }
        Err(err) => {
            tracing::warn!(error = %err, title = %movie.title, "movie create failed");
            render_error(
                &state,
                &format!("there was a problem trying to create Movie '{}'", movie.title),
            )
        }
    }
}

/// Show the edit form pre-populated with the movie for the given id.
pub async fn edit(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Html<String>, HttpError> {
    let message = format!(
        "there was a problem trying to edit Movie with ID = {}",
        query.id
    );

    let Ok(id) = query.id.trim().parse::<i64>() else {
        return render_error(&state, &message);
    };

    match state.repos.movies.get_by_id(id).await {
        Ok(movie) => {
            let html = state
                .renderer
                .render(EDIT_MOVIE_FORM_TEMPLATE, &json!({ "movie": movie }))?;
            Ok(Html(html))
        }
        Err(err) if err.is_not_found() => render_error(&state, &message),
        Err(err) => Err(err.into()),
    }
}

/// Apply an update from the submitted form, then show the list.
///
/// Carries all six fields, id included - this is an update of an
/// existing record, never a create. The wording of the failure message
/// is distinct from the delete path.
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateMovieForm>,
) -> Result<Html<String>, HttpError> {
    let raw_id = form.id.clone();
    let fields = MovieUpdate::from(form);
    let movie = match fields.parse() {
        Ok(movie) => movie,
        Err(err) => return render_error(&state, &err.to_string()),
    };

    match state.repos.movies.update(&movie).await {
        Ok(()) => render_list(&state).await,
        Err(err) if err.is_not_found() => render_error(
            &state,
            &format!("there was a problem trying to EDIT Movie with ID = {raw_id}"),
        ),
        Err(err) => Err(err.into()),
    }
}
