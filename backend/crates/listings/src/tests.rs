//! Unit tests for listings crate

#[cfg(test)]
mod support {
    use std::sync::Mutex;

    use crate::domain::entity::listing::{
        Listing, ListingDetail, ListingPatch, ListingSummary, OwnerContact, PhotoRef,
    };
    use crate::domain::filter::ListingFilter;
    use crate::domain::repository::ListingRepository;
    use crate::domain::value_object::property_type::PropertyType;
    use crate::error::{ListingError, ListingResult};
    use kernel::id::{ListingId, PhotoId, UserId};

    /// In-memory listing store that records the arguments it was called
    /// with, so tests can assert on what reached the gateway.
    #[derive(Default)]
    pub struct InMemoryListingRepository {
        pub listings: Mutex<Vec<Listing>>,
        pub photos: Mutex<Vec<PhotoRef>>,
        pub last_filter: Mutex<Option<ListingFilter>>,
        pub last_patch: Mutex<Option<ListingPatch>>,
    }

    impl InMemoryListingRepository {
        pub fn with_listings(listings: Vec<Listing>) -> Self {
            Self {
                listings: Mutex::new(listings),
                ..Default::default()
            }
        }
    }

    pub fn sample_listing(owner: UserId, city: &str, price: i64) -> Listing {
        Listing::new(
            owner,
            "2345 William Str".to_string(),
            city.to_string(),
            price,
            3,
            2.5,
            444.0,
            PropertyType::Residential,
        )
    }

    impl ListingRepository for InMemoryListingRepository {
        async fn find_summaries(
            &self,
            filter: &ListingFilter,
        ) -> ListingResult<Vec<ListingSummary>> {
            *self.last_filter.lock().unwrap() = Some(filter.clone());

            let photos = self.photos.lock().unwrap();
            let summaries = self
                .listings
                .lock()
                .unwrap()
                .iter()
                .filter(|l| filter.matches(l))
                .map(|l| ListingSummary {
                    listing_id: l.listing_id,
                    address: l.address.clone(),
                    city: l.city.clone(),
                    price: l.price,
                    bedrooms: l.bedrooms,
                    bathrooms: l.bathrooms,
                    land_size: l.land_size,
                    property_type: l.property_type,
                    cover_photo_url: photos
                        .iter()
                        .filter(|p| p.listing_id == l.listing_id)
                        .min_by_key(|p| p.position)
                        .map(|p| p.url.clone()),
                })
                .collect();

            Ok(summaries)
        }

        async fn find_by_id(&self, listing_id: &ListingId) -> ListingResult<Option<Listing>> {
            Ok(self
                .listings
                .lock()
                .unwrap()
                .iter()
                .find(|l| l.listing_id == *listing_id)
                .cloned())
        }

        async fn find_detail_by_id(
            &self,
            listing_id: &ListingId,
        ) -> ListingResult<Option<ListingDetail>> {
            let Some(listing) = self.find_by_id(listing_id).await? else {
                return Ok(None);
            };

            let mut photos: Vec<PhotoRef> = self
                .photos
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.listing_id == *listing_id)
                .cloned()
                .collect();
            photos.sort_by_key(|p| p.position);

            Ok(Some(ListingDetail {
                listing,
                photos,
                owner: OwnerContact {
                    name: "brian".to_string(),
                    email: "muma@gmail.com".to_string(),
                    phone: "4641653".to_string(),
                },
            }))
        }

        async fn create(&self, listing: &Listing) -> ListingResult<()> {
            self.listings.lock().unwrap().push(listing.clone());
            Ok(())
        }

        async fn update(
            &self,
            listing_id: &ListingId,
            patch: &ListingPatch,
        ) -> ListingResult<Listing> {
            *self.last_patch.lock().unwrap() = Some(patch.clone());

            let mut listings = self.listings.lock().unwrap();
            let listing = listings
                .iter_mut()
                .find(|l| l.listing_id == *listing_id)
                .ok_or(ListingError::NotFound)?;

            patch.apply_to(listing);
            Ok(listing.clone())
        }

        async fn create_photos(
            &self,
            listing_id: &ListingId,
            urls: &[String],
        ) -> ListingResult<Vec<PhotoRef>> {
            let created: Vec<PhotoRef> = urls
                .iter()
                .enumerate()
                .map(|(i, url)| PhotoRef {
                    photo_id: PhotoId::new(),
                    listing_id: *listing_id,
                    url: url.clone(),
                    position: i as i32,
                })
                .collect();

            self.photos.lock().unwrap().extend(created.clone());
            Ok(created)
        }
    }
}

#[cfg(test)]
mod filter_tests {
    use crate::domain::filter::ListingFilter;
    use crate::domain::value_object::property_type::PropertyType;
    use kernel::id::UserId;

    use super::support::sample_listing;

    #[test]
    fn test_filter_from_params_parses_min_price() {
        let filter = ListingFilter::from_params(
            Some("Buea".to_string()),
            Some("1500".to_string()),
            None,
        );

        assert_eq!(filter.city.as_deref(), Some("Buea"));
        assert_eq!(filter.min_price, Some(1500));
        assert_eq!(filter.property_type, None);
    }

    #[test]
    fn test_filter_ignores_unparseable_min_price() {
        let filter = ListingFilter::from_params(None, Some("cheap".to_string()), None);
        assert_eq!(filter.min_price, None);
    }

    #[test]
    fn test_filter_ignores_empty_city_and_bad_property_type() {
        let filter = ListingFilter::from_params(
            Some("  ".to_string()),
            None,
            Some("castle".to_string()),
        );

        assert!(filter.is_match_all());
    }

    #[test]
    fn test_filter_parses_property_type() {
        let filter = ListingFilter::from_params(None, None, Some("condo".to_string()));
        assert_eq!(filter.property_type, Some(PropertyType::Condo));
    }

    #[test]
    fn test_filter_matches() {
        let owner = UserId::new();
        let listing = sample_listing(owner, "Buea", 10_000_000);

        let match_all = ListingFilter::default();
        assert!(match_all.matches(&listing));

        let by_city = ListingFilter {
            city: Some("Buea".to_string()),
            ..Default::default()
        };
        assert!(by_city.matches(&listing));

        let wrong_city = ListingFilter {
            city: Some("Toronto".to_string()),
            ..Default::default()
        };
        assert!(!wrong_city.matches(&listing));

        let min_price_met = ListingFilter {
            min_price: Some(10_000_000),
            ..Default::default()
        };
        assert!(min_price_met.matches(&listing));

        let min_price_above = ListingFilter {
            min_price: Some(10_000_001),
            ..Default::default()
        };
        assert!(!min_price_above.matches(&listing));

        let wrong_type = ListingFilter {
            property_type: Some(PropertyType::Condo),
            ..Default::default()
        };
        assert!(!wrong_type.matches(&listing));
    }
}

#[cfg(test)]
mod search_tests {
    use std::sync::Arc;

    use super::support::{InMemoryListingRepository, sample_listing};
    use crate::application::SearchListingsUseCase;
    use crate::domain::filter::ListingFilter;
    use crate::domain::repository::ListingRepository;
    use crate::error::ListingError;
    use kernel::id::UserId;

    #[tokio::test]
    async fn test_search_passes_filter_to_store() {
        let owner = UserId::new();
        let repo = Arc::new(InMemoryListingRepository::with_listings(vec![
            sample_listing(owner, "Buea", 2000),
        ]));

        let filter = ListingFilter::from_params(
            Some("Buea".to_string()),
            Some("1500".to_string()),
            None,
        );

        SearchListingsUseCase::new(repo.clone())
            .execute(filter.clone())
            .await
            .unwrap();

        let seen = repo.last_filter.lock().unwrap().clone().unwrap();
        assert_eq!(seen, filter);
        assert_eq!(seen.city.as_deref(), Some("Buea"));
        assert_eq!(seen.min_price, Some(1500));
    }

    #[tokio::test]
    async fn test_search_with_zero_rows_is_not_found() {
        let repo = Arc::new(InMemoryListingRepository::default());

        let result = SearchListingsUseCase::new(repo)
            .execute(ListingFilter::default())
            .await;

        assert!(matches!(result, Err(ListingError::EmptySearch)));
    }

    #[tokio::test]
    async fn test_search_summary_carries_thumbnail() {
        let owner = UserId::new();
        let listing = sample_listing(owner, "Toronto", 1_500_000);
        let listing_id = listing.listing_id;

        let repo = Arc::new(InMemoryListingRepository::with_listings(vec![listing]));
        repo.create_photos(&listing_id, &["src1".to_string(), "src2".to_string()])
            .await
            .unwrap();

        let summaries = SearchListingsUseCase::new(repo)
            .execute(ListingFilter::default())
            .await
            .unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].cover_photo_url.as_deref(), Some("src1"));
    }
}

#[cfg(test)]
mod get_listing_tests {
    use std::sync::Arc;

    use super::support::{InMemoryListingRepository, sample_listing};
    use crate::application::GetListingUseCase;
    use crate::domain::repository::ListingRepository;
    use crate::error::ListingError;
    use kernel::id::{ListingId, UserId};

    #[tokio::test]
    async fn test_get_by_id_absent_is_not_found() {
        let repo = Arc::new(InMemoryListingRepository::default());

        let result = GetListingUseCase::new(repo).execute(ListingId::new()).await;

        assert!(matches!(result, Err(ListingError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_by_id_returns_photos_in_order_and_owner_contact() {
        let owner = UserId::new();
        let listing = sample_listing(owner, "Buea", 250_000);
        let listing_id = listing.listing_id;

        let repo = Arc::new(InMemoryListingRepository::with_listings(vec![listing]));
        repo.create_photos(
            &listing_id,
            &[
                "https://example.com/image1.jpg".to_string(),
                "https://example.com/image2.jpg".to_string(),
                "https://example.com/image3.jpg".to_string(),
            ],
        )
        .await
        .unwrap();

        let detail = GetListingUseCase::new(repo).execute(listing_id).await.unwrap();

        let urls: Vec<&str> = detail.photos.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://example.com/image1.jpg",
                "https://example.com/image2.jpg",
                "https://example.com/image3.jpg",
            ]
        );
        assert_eq!(detail.owner.name, "brian");
        assert_eq!(detail.owner.email, "muma@gmail.com");
        assert_eq!(detail.owner.phone, "4641653");
    }
}

#[cfg(test)]
mod create_listing_tests {
    use std::sync::Arc;

    use super::support::InMemoryListingRepository;
    use crate::application::{CreateListingInput, CreateListingUseCase};
    use crate::domain::value_object::property_type::PropertyType;
    use kernel::id::UserId;

    fn input(owner: UserId, photo_urls: Vec<String>) -> CreateListingInput {
        CreateListingInput {
            owner_user_id: owner,
            address: "molyko".to_string(),
            city: "Buea".to_string(),
            price: 10_000_000,
            bedrooms: 9,
            bathrooms: 6.0,
            land_size: 444.0,
            property_type: PropertyType::Residential,
            photo_urls,
        }
    }

    #[tokio::test]
    async fn test_create_binds_listing_to_caller() {
        let owner = UserId::new();
        let repo = Arc::new(InMemoryListingRepository::default());

        let output = CreateListingUseCase::new(repo.clone())
            .execute(input(owner, vec![]))
            .await
            .unwrap();

        assert_eq!(output.listing.owner_user_id, owner);
        assert_eq!(repo.listings.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_binds_photos_to_new_listing_id() {
        let owner = UserId::new();
        let repo = Arc::new(InMemoryListingRepository::default());

        let output = CreateListingUseCase::new(repo.clone())
            .execute(input(owner, vec!["src1".to_string(), "src2".to_string()]))
            .await
            .unwrap();

        assert_eq!(output.photos.len(), 2);
        for photo in &output.photos {
            assert_eq!(photo.listing_id, output.listing.listing_id);
        }
        assert_eq!(output.photos[0].position, 0);
        assert_eq!(output.photos[1].position, 1);
        assert_eq!(output.photos[0].url, "src1");
    }

    #[tokio::test]
    async fn test_create_without_photos_is_valid() {
        let owner = UserId::new();
        let repo = Arc::new(InMemoryListingRepository::default());

        let output = CreateListingUseCase::new(repo)
            .execute(input(owner, vec![]))
            .await
            .unwrap();

        assert!(output.photos.is_empty());
    }
}

#[cfg(test)]
mod update_listing_tests {
    use std::sync::Arc;

    use super::support::{InMemoryListingRepository, sample_listing};
    use crate::application::{UpdateListingInput, UpdateListingUseCase};
    use crate::domain::entity::listing::ListingPatch;
    use crate::error::ListingError;
    use kernel::id::{ListingId, UserId};

    #[tokio::test]
    async fn test_update_absent_listing_is_not_found() {
        let repo = Arc::new(InMemoryListingRepository::default());

        let result = UpdateListingUseCase::new(repo)
            .execute(UpdateListingInput {
                caller_user_id: UserId::new(),
                listing_id: ListingId::new(),
                patch: ListingPatch::default(),
            })
            .await;

        assert!(matches!(result, Err(ListingError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_by_non_owner_is_unauthorized() {
        let owner = UserId::new();
        let listing = sample_listing(owner, "Buea", 250_000);
        let listing_id = listing.listing_id;

        let repo = Arc::new(InMemoryListingRepository::with_listings(vec![listing]));

        let result = UpdateListingUseCase::new(repo.clone())
            .execute(UpdateListingInput {
                caller_user_id: UserId::new(),
                listing_id,
                patch: ListingPatch {
                    city: Some("Toronto".to_string()),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result, Err(ListingError::NotOwner)));

        // Nothing reached the store's update path
        assert!(repo.last_patch.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_by_owner_applies_only_present_fields() {
        let owner = UserId::new();
        let listing = sample_listing(owner, "Buea", 250_000);
        let listing_id = listing.listing_id;
        let original_price = listing.price;

        let repo = Arc::new(InMemoryListingRepository::with_listings(vec![listing]));

        let updated = UpdateListingUseCase::new(repo.clone())
            .execute(UpdateListingInput {
                caller_user_id: owner,
                listing_id,
                patch: ListingPatch {
                    address: Some("123 Main St".to_string()),
                    city: Some("buea".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.address, "123 Main St");
        assert_eq!(updated.city, "buea");

        // Unspecified fields stay untouched
        assert_eq!(updated.price, original_price);
        assert_eq!(updated.bedrooms, 3);

        // The store received only the supplied fields
        let patch = repo.last_patch.lock().unwrap().clone().unwrap();
        assert!(patch.address.is_some());
        assert!(patch.city.is_some());
        assert!(patch.price.is_none());
        assert!(patch.bedrooms.is_none());
        assert!(patch.property_type.is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_owner_binding() {
        let owner = UserId::new();
        let listing = sample_listing(owner, "Buea", 250_000);
        let listing_id = listing.listing_id;

        let repo = Arc::new(InMemoryListingRepository::with_listings(vec![listing]));

        let updated = UpdateListingUseCase::new(repo)
            .execute(UpdateListingInput {
                caller_user_id: owner,
                listing_id,
                patch: ListingPatch {
                    price: Some(300_000),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.owner_user_id, owner);
        assert_eq!(updated.price, 300_000);
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_search_query_deserialization() {
        let json = r#"{"city":"Buea","minPrice":"1500"}"#;
        let query: SearchQuery = serde_json::from_str(json).unwrap();

        assert_eq!(query.city.as_deref(), Some("Buea"));
        assert_eq!(query.min_price.as_deref(), Some("1500"));
        assert!(query.property_type.is_none());
    }

    #[test]
    fn test_create_request_deserialization() {
        let json = r#"{
            "address": "molyko",
            "city": "Buea",
            "price": 10000000,
            "numberOfBedrooms": 9,
            "numberOfBathrooms": 6,
            "landSize": 444,
            "propertyType": "residential",
            "photos": [{"url": "src1"}]
        }"#;
        let req: CreateListingRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.address, "molyko");
        assert_eq!(req.number_of_bedrooms, 9);
        assert_eq!(req.photos.len(), 1);
        assert_eq!(req.photos[0].url, "src1");
    }

    #[test]
    fn test_create_request_photos_default_empty() {
        let json = r#"{
            "address": "molyko",
            "city": "Buea",
            "price": 10000000,
            "numberOfBedrooms": 9,
            "numberOfBathrooms": 6,
            "landSize": 444,
            "propertyType": "residential"
        }"#;
        let req: CreateListingRequest = serde_json::from_str(json).unwrap();
        assert!(req.photos.is_empty());
    }

    #[test]
    fn test_update_request_preserves_field_presence() {
        let json = r#"{"address": "123 Main St", "city": "buea"}"#;
        let req: UpdateListingRequest = serde_json::from_str(json).unwrap();
        let patch = req.into_patch();

        assert_eq!(patch.address.as_deref(), Some("123 Main St"));
        assert_eq!(patch.city.as_deref(), Some("buea"));
        assert!(patch.price.is_none());
        assert!(patch.bedrooms.is_none());
        assert!(patch.bathrooms.is_none());
        assert!(patch.land_size.is_none());
        assert!(patch.property_type.is_none());
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_empty_update_request_is_empty_patch() {
        let req: UpdateListingRequest = serde_json::from_str("{}").unwrap();
        assert!(req.into_patch().is_empty());
    }

    #[test]
    fn test_summary_response_serialization() {
        let json = serde_json::to_string(&ListingSummaryResponse {
            id: uuid::Uuid::nil(),
            address: "2345 William Str".to_string(),
            city: "Toronto".to_string(),
            price: 1_500_000,
            number_of_bedrooms: 3,
            number_of_bathrooms: 2.5,
            land_size: 444.0,
            property_type: crate::domain::value_object::property_type::PropertyType::Residential,
            cover_photo_url: Some("src1".to_string()),
        })
        .unwrap();

        assert!(json.contains("numberOfBedrooms"));
        assert!(json.contains("numberOfBathrooms"));
        assert!(json.contains("coverPhotoUrl"));
        assert!(json.contains("landSize"));
    }
}

#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use crate::error::ListingError;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(ListingError, StatusCode)> = vec![
            (ListingError::NotFound, StatusCode::NOT_FOUND),
            (ListingError::EmptySearch, StatusCode::NOT_FOUND),
            (ListingError::NotOwner, StatusCode::UNAUTHORIZED),
            (ListingError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (
                ListingError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_ownership_rejection_message() {
        assert_eq!(ListingError::NotOwner.to_string(), "Unauthorized");
    }
}
