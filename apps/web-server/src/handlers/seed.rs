//! Demo-data bootstrap endpoint.

use actix_web::{HttpResponse, web};

use quill_infra::seed::{self, SeedOutcome};

use crate::error::AppResult;
use crate::flash::{self, Notice};
use crate::state::AppState;

/// GET /_seed_sample_data
pub async fn seed_sample_data(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let outcome = seed::seed_sample_data(
        state.users.as_ref(),
        state.posts.as_ref(),
        state.comments.as_ref(),
    )
    .await?;

    let notice = match outcome {
        SeedOutcome::Skipped => Notice::info("Database already has data, skipping seed."),
        SeedOutcome::Seeded => Notice::success("Sample data created"),
    };

    Ok(flash::see_other("/", notice))
}
