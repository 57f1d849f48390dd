// src/domain/size.rs

/// Cosmetic grouping by volume in yards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl SizeCategory {
    pub fn from_size(size: i64) -> Self {
        if size <= 4 {
            SizeCategory::Small
        } else if size <= 8 {
            SizeCategory::Medium
        } else if size <= 12 {
            SizeCategory::Large
        } else {
            SizeCategory::ExtraLarge
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeCategory::Small => "Small",
            SizeCategory::Medium => "Medium",
            SizeCategory::Large => "Large",
            SizeCategory::ExtraLarge => "Extra Large",
        }
    }

    /// Short line on the card.
    pub fn suitable_for(self) -> &'static str {
        match self {
            SizeCategory::Small => "Garden clearance, DIY",
            SizeCategory::Medium => "Home renovation",
            SizeCategory::Large => "Construction work",
            SizeCategory::ExtraLarge => "Major projects",
        }
    }

    /// Longer line in the selection summary, follows "Perfect for".
    pub fn perfect_for(self) -> &'static str {
        match self {
            SizeCategory::Small => "garden clearance and small DIY projects",
            SizeCategory::Medium => "home renovation and medium projects",
            SizeCategory::Large => "construction work and large projects",
            SizeCategory::ExtraLarge => "major commercial projects",
        }
    }

    /// CSS modifier used by the badge.
    pub fn css_class(self) -> &'static str {
        match self {
            SizeCategory::Small => "size-small",
            SizeCategory::Medium => "size-medium",
            SizeCategory::Large => "size-large",
            SizeCategory::ExtraLarge => "size-xl",
        }
    }
}

/// `<base>/<size>-yarder-skip.jpg`
pub fn image_url(base: &str, size: i64) -> String {
    format!("{}/{size}-yarder-skip.jpg", base.trim_end_matches('/'))
}
