use axum::extract::{Path, Query, State};
use std::sync::Arc;

use crate::api::{DataResponse, ListParams, ListResponse};
use crate::app::AppState;
use crate::domain::{BlogListParams, BlogPost};
use crate::error::{ApiError, ApiResult};
use crate::store::{Criteria, SortKey};

/// List published posts, newest first, optionally scoped to a category
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(list): Query<ListParams>,
    Query(params): Query<BlogListParams>,
) -> ApiResult<ListResponse<BlogPost>> {
    let mut criteria = Criteria::new().eq("published", true);
    if let Some(category) = params.category {
        criteria = criteria.eq("category", category.as_str());
    }

    let sort = list
        .sort_key()?
        .unwrap_or_else(|| SortKey::descending("created_date"));

    let data = state
        .catalog
        .blog_posts
        .filter(&criteria, Some(&sort), Some(list.limit_or(50)));

    Ok(ListResponse::new(data))
}

/// The most recent featured post, if any
pub async fn featured_post(
    State(state): State<Arc<AppState>>,
) -> ApiResult<DataResponse<BlogPost>> {
    state
        .catalog
        .blog_posts
        .filter(
            &Criteria::new().eq("published", true).eq("featured", true),
            Some(&SortKey::descending("created_date")),
            Some(1),
        )
        .into_iter()
        .next()
        .map(DataResponse::new)
        .ok_or_else(|| ApiError::NotFound("No featured post".to_string()))
}

/// Get a post by ID
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
) -> ApiResult<DataResponse<BlogPost>> {
    state
        .catalog
        .blog_posts
        .get(&post_id)
        .cloned()
        .map(DataResponse::new)
        .ok_or_else(|| ApiError::NotFound(format!("Post {post_id} not found")))
}

/// Published posts from the same category, newest first, excluding the
/// post itself
pub async fn related_posts(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
) -> ApiResult<ListResponse<BlogPost>> {
    let post = state
        .catalog
        .blog_posts
        .get(&post_id)
        .ok_or_else(|| ApiError::NotFound(format!("Post {post_id} not found")))?;

    let mut related: Vec<BlogPost> = state
        .catalog
        .blog_posts
        .filter(
            &Criteria::new()
                .eq("published", true)
                .eq("category", post.category.as_str()),
            Some(&SortKey::descending("created_date")),
            None,
        )
        .into_iter()
        .filter(|candidate| candidate.id != post_id)
        .collect();
    related.truncate(3);

    Ok(ListResponse::new(related))
}
