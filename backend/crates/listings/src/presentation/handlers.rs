//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use std::sync::Arc;
use uuid::Uuid;

use auth::presentation::middleware::Identity;
use kernel::id::{ListingId, UserId};

use crate::application::{
    CreateListingInput, CreateListingUseCase, GetListingUseCase, SearchListingsUseCase,
    UpdateListingInput, UpdateListingUseCase,
};
use crate::domain::filter::ListingFilter;
use crate::domain::repository::ListingRepository;
use crate::error::ListingResult;
use crate::presentation::dto::{
    CreateListingRequest, ListingDetailResponse, ListingResponse, ListingSummaryResponse,
    SearchQuery, UpdateListingRequest,
};

/// Shared state for listing handlers
#[derive(Clone)]
pub struct ListingAppState<R>
where
    R: ListingRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Search
// ============================================================================

/// GET /api/listings
pub async fn search<R>(
    State(state): State<ListingAppState<R>>,
    Query(query): Query<SearchQuery>,
) -> ListingResult<Json<Vec<ListingSummaryResponse>>>
where
    R: ListingRepository + Clone + Send + Sync + 'static,
{
    let filter = ListingFilter::from_params(query.city, query.min_price, query.property_type);

    let use_case = SearchListingsUseCase::new(state.repo.clone());
    let summaries = use_case.execute(filter).await?;

    Ok(Json(
        summaries
            .into_iter()
            .map(ListingSummaryResponse::from)
            .collect(),
    ))
}

// ============================================================================
// Detail
// ============================================================================

/// GET /api/listings/{id}
pub async fn get_by_id<R>(
    State(state): State<ListingAppState<R>>,
    Path(id): Path<Uuid>,
) -> ListingResult<Json<ListingDetailResponse>>
where
    R: ListingRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetListingUseCase::new(state.repo.clone());
    let detail = use_case.execute(ListingId::from_uuid(id)).await?;

    Ok(Json(ListingDetailResponse::from(detail)))
}

// ============================================================================
// Create
// ============================================================================

/// POST /api/listings
pub async fn create<R>(
    State(state): State<ListingAppState<R>>,
    Identity(claims): Identity,
    Json(req): Json<CreateListingRequest>,
) -> ListingResult<Json<ListingResponse>>
where
    R: ListingRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateListingUseCase::new(state.repo.clone());

    let input = CreateListingInput {
        owner_user_id: UserId::from_uuid(claims.sub),
        address: req.address,
        city: req.city,
        price: req.price,
        bedrooms: req.number_of_bedrooms,
        bathrooms: req.number_of_bathrooms,
        land_size: req.land_size,
        property_type: req.property_type,
        photo_urls: req.photos.into_iter().map(|p| p.url).collect(),
    };

    let output = use_case.execute(input).await?;

    Ok(Json(ListingResponse::from(output.listing)))
}

// ============================================================================
// Update
// ============================================================================

/// PUT /api/listings/{id}
pub async fn update<R>(
    State(state): State<ListingAppState<R>>,
    Identity(claims): Identity,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateListingRequest>,
) -> ListingResult<Json<ListingResponse>>
where
    R: ListingRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateListingUseCase::new(state.repo.clone());

    let input = UpdateListingInput {
        caller_user_id: UserId::from_uuid(claims.sub),
        listing_id: ListingId::from_uuid(id),
        patch: req.into_patch(),
    };

    let updated = use_case.execute(input).await?;

    Ok(Json(ListingResponse::from(updated)))
}
