// ABOUTME: Domain records and request payloads for projects, reviews, and site settings
// ABOUTME: Partial-update payloads convert to explicit sparse UpdateDocuments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

//! Domain records stored as loosely-typed documents, plus the request
//! payloads that create and update them. Partial updates never pass
//! `Option`s around: they convert to an explicit [`UpdateDocument`] mapping
//! field name to new value, with absent fields excluded, which the store
//! applies atomically.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::store::UpdateDocument;

/// Well-known id of the singleton site settings document
pub const SITE_SETTINGS_ID: &str = "site_settings";

fn serialize_into<T: Serialize>(
    update: &mut UpdateDocument,
    field: &str,
    value: &T,
) -> AppResult<()> {
    let value = serde_json::to_value(value)
        .map_err(|e| AppError::internal(format!("serializing field {field}: {e}")))?;
    update.insert(field.to_owned(), value);
    Ok(())
}

// ============================================================================
// Projects
// ============================================================================

/// A portfolio project record as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Record id (UUID string)
    pub id: String,
    /// Display title
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Bare base64 of the project video
    pub video_data: String,
    /// Thumbnail data URI, or empty when none was uploaded
    #[serde(default)]
    pub thumbnail: String,
    /// Display category
    #[serde(default)]
    pub category: String,
    /// Creation instant
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Build a new record with a fresh id and the current time
    #[must_use]
    pub fn new(
        title: String,
        description: String,
        category: String,
        video_data: String,
        thumbnail: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            video_data,
            thumbnail,
            category,
            created_at: Utc::now(),
        }
    }
}

/// Metadata fields accepted when updating a project. The video and
/// thumbnail payloads are fixed at creation.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectUpdate {
    /// New title
    pub title: String,
    /// New description
    #[serde(default)]
    pub description: String,
    /// New category
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "Project".into()
}

impl ProjectUpdate {
    /// Convert to a sparse update for the store
    ///
    /// # Errors
    ///
    /// Returns an internal error if field serialization fails.
    pub fn into_update(self) -> AppResult<UpdateDocument> {
        let mut update = UpdateDocument::new();
        serialize_into(&mut update, "title", &self.title)?;
        serialize_into(&mut update, "description", &self.description)?;
        serialize_into(&mut update, "category", &self.category)?;
        Ok(update)
    }
}

/// Project shape returned by list/create endpoints; omits the video payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    /// Record id
    pub id: String,
    /// Display title
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Thumbnail data URI, or empty
    #[serde(default)]
    pub thumbnail: String,
    /// Display category
    #[serde(default)]
    pub category: String,
    /// Creation instant, RFC3339
    pub created_at: String,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            thumbnail: project.thumbnail.clone(),
            category: project.category.clone(),
            created_at: project.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Reviews
// ============================================================================

/// A client review record as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Record id (UUID string)
    pub id: String,
    /// Client display name
    pub client_name: String,
    /// Review body
    pub review_text: String,
    /// Star rating, 1 through 5
    pub star_rating: u8,
    /// Creation instant
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a review
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewCreate {
    /// Client display name
    pub client_name: String,
    /// Review body
    pub review_text: String,
    /// Star rating, 1 through 5
    pub star_rating: u8,
}

fn check_star_rating(star_rating: u8) -> AppResult<()> {
    if !(1..=5).contains(&star_rating) {
        return Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            "Star rating must be between 1 and 5",
        ));
    }
    Ok(())
}

impl ReviewCreate {
    /// Validate and convert into a stored record
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::ValueOutOfRange`] when the rating is outside
    /// 1..=5.
    pub fn into_review(self) -> AppResult<Review> {
        check_star_rating(self.star_rating)?;
        Ok(Review {
            id: Uuid::new_v4().to_string(),
            client_name: self.client_name,
            review_text: self.review_text,
            star_rating: self.star_rating,
            created_at: Utc::now(),
        })
    }
}

/// Partial update for a review; absent fields stay untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewUpdate {
    /// New client name
    pub client_name: Option<String>,
    /// New review body
    pub review_text: Option<String>,
    /// New star rating, 1 through 5
    pub star_rating: Option<u8>,
}

impl ReviewUpdate {
    /// Validate and convert to a sparse update for the store
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::ValueOutOfRange`] for a bad rating, or
    /// [`ErrorCode::InvalidInput`] when every field is absent.
    pub fn into_update(self) -> AppResult<UpdateDocument> {
        if let Some(star_rating) = self.star_rating {
            check_star_rating(star_rating)?;
        }

        let mut update = UpdateDocument::new();
        if let Some(client_name) = &self.client_name {
            serialize_into(&mut update, "client_name", client_name)?;
        }
        if let Some(review_text) = &self.review_text {
            serialize_into(&mut update, "review_text", review_text)?;
        }
        if let Some(star_rating) = &self.star_rating {
            serialize_into(&mut update, "star_rating", star_rating)?;
        }

        if update.is_empty() {
            return Err(AppError::invalid_input("No data to update"));
        }
        Ok(update)
    }
}

/// Review shape returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    /// Record id
    pub id: String,
    /// Client display name
    pub client_name: String,
    /// Review body
    pub review_text: String,
    /// Star rating
    pub star_rating: u8,
    /// Creation instant, RFC3339
    pub created_at: String,
}

impl From<&Review> for ReviewResponse {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.clone(),
            client_name: review.client_name.clone(),
            review_text: review.review_text.clone(),
            star_rating: review.star_rating,
            created_at: review.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Site settings
// ============================================================================

/// One entry in the services list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEntry {
    /// Icon name rendered by the client
    pub icon: String,
    /// Service title
    pub title: String,
    /// Service description
    pub description: String,
}

/// The singleton site settings document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Always [`SITE_SETTINGS_ID`]
    pub id: String,
    /// Logo data URI, or empty when none was uploaded
    #[serde(default)]
    pub logo: String,
    /// Hero headline
    pub hero_title: String,
    /// Hero tagline
    pub hero_tagline: String,
    /// About section heading
    pub about_title: String,
    /// First about paragraph
    #[serde(default)]
    pub about_text_1: String,
    /// Second about paragraph
    #[serde(default)]
    pub about_text_2: String,
    /// Services list
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
    /// Stat tiles (loose objects: label/value/icon)
    #[serde(default)]
    pub stats: Vec<Value>,
    /// Instagram profile URL
    pub instagram_url: String,
    /// Contact email shown on the site
    pub contact_email: String,
}

impl Default for SiteSettings {
    // Served whenever the store has no settings document yet.
    fn default() -> Self {
        let service = |icon: &str, title: &str, description: &str| ServiceEntry {
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
        };

        Self {
            id: SITE_SETTINGS_ID.into(),
            logo: String::new(),
            hero_title: "Rexora Media".into(),
            hero_tagline: "Visuals built to perform".into(),
            about_title: "About Us".into(),
            about_text_1: "Rexora Media is a creative visual studio specializing in high-end \
                           video production, photo editing, and brand storytelling."
                .into(),
            about_text_2: "We craft visuals that don't just look good—they perform. Every frame \
                           is engineered to captivate, convert, and leave a lasting impression."
                .into(),
            services: vec![
                service(
                    "Video",
                    "Video Editing",
                    "Cinematic storytelling that captures attention and drives results",
                ),
                service(
                    "Image",
                    "Photo Editing",
                    "Professional retouching and enhancement for stunning visuals",
                ),
                service(
                    "Zap",
                    "Reels & Short-Form Content",
                    "Viral-ready content optimized for social media platforms",
                ),
                service(
                    "Play",
                    "Brand Visuals",
                    "Cohesive visual identity that elevates your brand presence",
                ),
                service(
                    "Sparkles",
                    "Animation",
                    "Dynamic animated content that brings your vision to life",
                ),
                service(
                    "Film",
                    "Motion Graphics",
                    "Eye-catching motion design for modern digital experiences",
                ),
                service(
                    "Wand2",
                    "VFX (Visual Effects)",
                    "Professional visual effects that transform ordinary footage into \
                     extraordinary content",
                ),
            ],
            stats: vec![
                serde_json::json!({"label": "Projects Delivered", "value": "500+", "icon": "🎬"}),
                serde_json::json!({"label": "Happy Clients", "value": "200+", "icon": "⭐"}),
                serde_json::json!({"label": "Years of Excellence", "value": "5+", "icon": "🏆"}),
            ],
            instagram_url: "https://instagram.com/rexoramedia".into(),
            contact_email: "rexoramedia10@gmail.com".into(),
        }
    }
}

/// Partial update for site settings; absent fields stay untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteSettingsUpdate {
    /// New logo data URI
    pub logo: Option<String>,
    /// New hero headline
    pub hero_title: Option<String>,
    /// New hero tagline
    pub hero_tagline: Option<String>,
    /// New about heading
    pub about_title: Option<String>,
    /// New first about paragraph
    pub about_text_1: Option<String>,
    /// New second about paragraph
    pub about_text_2: Option<String>,
    /// New services list
    pub services: Option<Vec<ServiceEntry>>,
    /// New stat tiles
    pub stats: Option<Vec<Value>>,
    /// New Instagram URL
    pub instagram_url: Option<String>,
    /// New contact email
    pub contact_email: Option<String>,
}

impl SiteSettingsUpdate {
    /// Convert to a sparse update for the store
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::InvalidInput`] when every field is absent.
    pub fn into_update(self) -> AppResult<UpdateDocument> {
        let mut update = UpdateDocument::new();
        if let Some(logo) = &self.logo {
            serialize_into(&mut update, "logo", logo)?;
        }
        if let Some(hero_title) = &self.hero_title {
            serialize_into(&mut update, "hero_title", hero_title)?;
        }
        if let Some(hero_tagline) = &self.hero_tagline {
            serialize_into(&mut update, "hero_tagline", hero_tagline)?;
        }
        if let Some(about_title) = &self.about_title {
            serialize_into(&mut update, "about_title", about_title)?;
        }
        if let Some(about_text_1) = &self.about_text_1 {
            serialize_into(&mut update, "about_text_1", about_text_1)?;
        }
        if let Some(about_text_2) = &self.about_text_2 {
            serialize_into(&mut update, "about_text_2", about_text_2)?;
        }
        if let Some(services) = &self.services {
            serialize_into(&mut update, "services", services)?;
        }
        if let Some(stats) = &self.stats {
            serialize_into(&mut update, "stats", stats)?;
        }
        if let Some(instagram_url) = &self.instagram_url {
            serialize_into(&mut update, "instagram_url", instagram_url)?;
        }
        if let Some(contact_email) = &self.contact_email {
            serialize_into(&mut update, "contact_email", contact_email)?;
        }

        if update.is_empty() {
            return Err(AppError::invalid_input("No data to update"));
        }
        Ok(update)
    }
}
