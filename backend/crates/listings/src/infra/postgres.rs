//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::listing::{
    Listing, ListingDetail, ListingPatch, ListingSummary, OwnerContact, PhotoRef,
};
use crate::domain::filter::ListingFilter;
use crate::domain::repository::ListingRepository;
use crate::domain::value_object::property_type::PropertyType;
use crate::error::{ListingError, ListingResult};
use kernel::id::{ListingId, PhotoId, UserId};

/// PostgreSQL-backed listing repository
#[derive(Clone)]
pub struct PgListingRepository {
    pool: PgPool,
}

impl PgListingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_photos(&self, listing_id: &ListingId) -> ListingResult<Vec<PhotoRef>> {
        let rows = sqlx::query_as::<_, PhotoRow>(
            r#"
            SELECT photo_id, listing_id, url, position
            FROM listing_photos
            WHERE listing_id = $1
            ORDER BY position ASC
            "#,
        )
        .bind(listing_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PhotoRow::into_photo).collect())
    }

    async fn find_owner_contact(&self, owner_user_id: &UserId) -> ListingResult<Option<OwnerContact>> {
        let row = sqlx::query_as::<_, OwnerRow>(
            r#"
            SELECT name, email, phone
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(owner_user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| OwnerContact {
            name: r.name,
            email: r.email,
            phone: r.phone,
        }))
    }
}

impl ListingRepository for PgListingRepository {
    async fn find_summaries(&self, filter: &ListingFilter) -> ListingResult<Vec<ListingSummary>> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT
                l.listing_id,
                l.address,
                l.city,
                l.price,
                l.bedrooms,
                l.bathrooms,
                l.land_size,
                l.property_type,
                (
                    SELECT p.url FROM listing_photos p
                    WHERE p.listing_id = l.listing_id
                    ORDER BY p.position ASC
                    LIMIT 1
                ) AS cover_photo_url
            FROM listings l
            WHERE ($1::text IS NULL OR l.city = $1)
              AND ($2::bigint IS NULL OR l.price >= $2)
              AND ($3::smallint IS NULL OR l.property_type = $3)
            ORDER BY l.created_at DESC
            "#,
        )
        .bind(filter.city.as_deref())
        .bind(filter.min_price)
        .bind(filter.property_type.map(|p| p.id()))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SummaryRow::into_summary).collect())
    }

    async fn find_by_id(&self, listing_id: &ListingId) -> ListingResult<Option<Listing>> {
        let row = sqlx::query_as::<_, ListingRow>(
            r#"
            SELECT
                listing_id,
                address,
                city,
                price,
                bedrooms,
                bathrooms,
                land_size,
                property_type,
                owner_user_id,
                created_at,
                updated_at
            FROM listings
            WHERE listing_id = $1
            "#,
        )
        .bind(listing_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ListingRow::into_listing))
    }

    async fn find_detail_by_id(
        &self,
        listing_id: &ListingId,
    ) -> ListingResult<Option<ListingDetail>> {
        let Some(listing) = self.find_by_id(listing_id).await? else {
            return Ok(None);
        };

        let photos = self.find_photos(listing_id).await?;

        let owner = self
            .find_owner_contact(&listing.owner_user_id)
            .await?
            .ok_or_else(|| {
                ListingError::Internal(format!(
                    "Listing {} has no owner record",
                    listing.listing_id
                ))
            })?;

        Ok(Some(ListingDetail {
            listing,
            photos,
            owner,
        }))
    }

    async fn create(&self, listing: &Listing) -> ListingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO listings (
                listing_id,
                address,
                city,
                price,
                bedrooms,
                bathrooms,
                land_size,
                property_type,
                owner_user_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(listing.listing_id.as_uuid())
        .bind(&listing.address)
        .bind(&listing.city)
        .bind(listing.price)
        .bind(listing.bedrooms)
        .bind(listing.bathrooms)
        .bind(listing.land_size)
        .bind(listing.property_type.id())
        .bind(listing.owner_user_id.as_uuid())
        .bind(listing.created_at)
        .bind(listing.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(
        &self,
        listing_id: &ListingId,
        patch: &ListingPatch,
    ) -> ListingResult<Listing> {
        // COALESCE keeps the stored value for absent fields
        let row = sqlx::query_as::<_, ListingRow>(
            r#"
            UPDATE listings SET
                address = COALESCE($2, address),
                city = COALESCE($3, city),
                price = COALESCE($4, price),
                bedrooms = COALESCE($5, bedrooms),
                bathrooms = COALESCE($6, bathrooms),
                land_size = COALESCE($7, land_size),
                property_type = COALESCE($8, property_type),
                updated_at = $9
            WHERE listing_id = $1
            RETURNING
                listing_id,
                address,
                city,
                price,
                bedrooms,
                bathrooms,
                land_size,
                property_type,
                owner_user_id,
                created_at,
                updated_at
            "#,
        )
        .bind(listing_id.as_uuid())
        .bind(patch.address.as_deref())
        .bind(patch.city.as_deref())
        .bind(patch.price)
        .bind(patch.bedrooms)
        .bind(patch.bathrooms)
        .bind(patch.land_size)
        .bind(patch.property_type.map(|p| p.id()))
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ListingRow::into_listing)
            .ok_or(ListingError::NotFound)
    }

    async fn create_photos(
        &self,
        listing_id: &ListingId,
        urls: &[String],
    ) -> ListingResult<Vec<PhotoRef>> {
        if urls.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now();
        let photos: Vec<PhotoRef> = urls
            .iter()
            .enumerate()
            .map(|(i, url)| PhotoRef {
                photo_id: PhotoId::new(),
                listing_id: *listing_id,
                url: url.clone(),
                position: i as i32,
            })
            .collect();

        let photo_ids: Vec<Uuid> = photos.iter().map(|p| p.photo_id.into_uuid()).collect();
        let listing_ids: Vec<Uuid> = photos.iter().map(|p| p.listing_id.into_uuid()).collect();
        let photo_urls: Vec<String> = photos.iter().map(|p| p.url.clone()).collect();
        let positions: Vec<i32> = photos.iter().map(|p| p.position).collect();

        // One statement for the whole batch
        sqlx::query(
            r#"
            INSERT INTO listing_photos (photo_id, listing_id, url, position, created_at)
            SELECT photo_id, listing_id, url, position, $5
            FROM UNNEST($1::uuid[], $2::uuid[], $3::text[], $4::int4[])
                AS t(photo_id, listing_id, url, position)
            "#,
        )
        .bind(&photo_ids)
        .bind(&listing_ids)
        .bind(&photo_urls)
        .bind(&positions)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(photos)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ListingRow {
    listing_id: Uuid,
    address: String,
    city: String,
    price: i64,
    bedrooms: i32,
    bathrooms: f64,
    land_size: f64,
    property_type: i16,
    owner_user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ListingRow {
    fn into_listing(self) -> Listing {
        Listing {
            listing_id: ListingId::from_uuid(self.listing_id),
            address: self.address,
            city: self.city,
            price: self.price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            land_size: self.land_size,
            property_type: PropertyType::from_id(self.property_type),
            owner_user_id: UserId::from_uuid(self.owner_user_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    listing_id: Uuid,
    address: String,
    city: String,
    price: i64,
    bedrooms: i32,
    bathrooms: f64,
    land_size: f64,
    property_type: i16,
    cover_photo_url: Option<String>,
}

impl SummaryRow {
    fn into_summary(self) -> ListingSummary {
        ListingSummary {
            listing_id: ListingId::from_uuid(self.listing_id),
            address: self.address,
            city: self.city,
            price: self.price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            land_size: self.land_size,
            property_type: PropertyType::from_id(self.property_type),
            cover_photo_url: self.cover_photo_url,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PhotoRow {
    photo_id: Uuid,
    listing_id: Uuid,
    url: String,
    position: i32,
}

impl PhotoRow {
    fn into_photo(self) -> PhotoRef {
        PhotoRef {
            photo_id: PhotoId::from_uuid(self.photo_id),
            listing_id: ListingId::from_uuid(self.listing_id),
            url: self.url,
            position: self.position,
        }
    }
}

#[derive(sqlx::FromRow)]
struct OwnerRow {
    name: String,
    email: String,
    phone: String,
}
