use crate::models::profile::{ProfileFieldError, SocialMedia, StoreProfile};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

fn is_valid_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some(),
        Err(_) => false,
    }
}

struct FieldCheck<'a> {
    field: &'static str,
    value: &'a str,
    errors: &'a mut Vec<ProfileFieldError>,
    failed: bool,
}

impl<'a> FieldCheck<'a> {
    fn new(field: &'static str, value: &'a str, errors: &'a mut Vec<ProfileFieldError>) -> Self {
        Self {
            field,
            value,
            errors,
            failed: false,
        }
    }

    fn rule(mut self, ok: impl FnOnce(&str) -> bool, message: &str) -> Self {
        if !self.failed && !ok(self.value) {
            self.errors.push(ProfileFieldError {
                field: self.field.to_string(),
                message: message.to_string(),
            });
            self.failed = true;
        }
        self
    }

    fn min(self, len: usize, message: &str) -> Self {
        self.rule(|v| v.chars().count() >= len, message)
    }

    fn max(self, len: usize, message: &str) -> Self {
        self.rule(|v| v.chars().count() <= len, message)
    }
}

/// Checks a submitted store profile field by field, reporting the first
/// failing rule of each field. On success the trimmed profile is returned.
pub fn validate_store_profile(profile: &StoreProfile) -> Result<StoreProfile, Vec<ProfileFieldError>> {
    let trimmed = StoreProfile {
        name: profile.name.trim().to_string(),
        description: profile.description.trim().to_string(),
        url: profile.url.trim().to_string(),
        email: profile.email.trim().to_string(),
        phone: profile.phone.trim().to_string(),
        location: profile.location.trim().to_string(),
        founded: profile.founded.trim().to_string(),
        category: profile.category.trim().to_string(),
        social_media: SocialMedia {
            facebook: profile.social_media.facebook.trim().to_string(),
            twitter: profile.social_media.twitter.trim().to_string(),
            instagram: profile.social_media.instagram.trim().to_string(),
            linkedin: profile.social_media.linkedin.trim().to_string(),
        },
    };

    let mut errors = Vec::new();

    FieldCheck::new("name", &trimmed.name, &mut errors)
        .min(1, "Store name is required")
        .max(100, "Name must be less than 100 characters");
    FieldCheck::new("description", &trimmed.description, &mut errors)
        .min(10, "Description must be at least 10 characters")
        .max(500, "Description must be less than 500 characters");
    FieldCheck::new("url", &trimmed.url, &mut errors)
        .rule(is_valid_url, "Must be a valid URL")
        .max(255, "URL must be less than 255 characters");
    FieldCheck::new("email", &trimmed.email, &mut errors)
        .rule(|v| email_pattern().is_match(v), "Must be a valid email")
        .max(255, "Email must be less than 255 characters");
    FieldCheck::new("phone", &trimmed.phone, &mut errors)
        .min(1, "Phone number is required")
        .max(20, "Phone number must be less than 20 characters");
    FieldCheck::new("location", &trimmed.location, &mut errors)
        .min(1, "Location is required")
        .max(100, "Location must be less than 100 characters");
    FieldCheck::new("founded", &trimmed.founded, &mut errors)
        .min(4, "Founded year is required")
        .max(4, "Must be a valid year");
    FieldCheck::new("category", &trimmed.category, &mut errors)
        .min(1, "Category is required")
        .max(100, "Category must be less than 100 characters");

    let social = &trimmed.social_media;
    for (field, value) in [
        ("facebook", &social.facebook),
        ("twitter", &social.twitter),
        ("instagram", &social.instagram),
        ("linkedin", &social.linkedin),
    ] {
        FieldCheck::new(field, value, &mut errors)
            .rule(|v| v.is_empty() || is_valid_url(v), "Must be a valid URL");
    }

    if errors.is_empty() {
        Ok(trimmed)
    } else {
        Err(errors)
    }
}
