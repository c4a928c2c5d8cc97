use std::fmt;

/// Placeholder used when an animal has no usable name
pub const DEFAULT_NAME: &str = "Unnamed";
/// Placeholder used when an animal has no usable classification
pub const DEFAULT_CATEGORY: &str = "Unclassified";
/// Placeholder used when an animal has no usable sound
pub const DEFAULT_SOUND: &str = "Undefined Sound";

/// Profile of an animal: name, classification and characteristic sound.
///
/// Every field is normalized on the way in — surrounding whitespace is
/// trimmed, and absent or blank input falls back to a fixed placeholder —
/// so the internal state is never observably blank and no operation can
/// fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalProfile {
    /// Display name of the animal
    name: String,
    /// Classification, e.g. "Mammal" or "Reptile"
    category: String,
    /// Characteristic sound, e.g. "Bark"
    sound: String,
}

/// Trim the input, falling back to the default when absent or blank
fn normalize(value: Option<&str>, default: &str) -> String {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map_or_else(|| default.to_string(), ToString::to_string)
}

impl AnimalProfile {
    /// Create a profile; any absent or blank field takes its placeholder
    #[must_use]
    pub fn new(name: Option<&str>, category: Option<&str>, sound: Option<&str>) -> Self {
        Self {
            name: normalize(name, DEFAULT_NAME),
            category: normalize(category, DEFAULT_CATEGORY),
            sound: normalize(sound, DEFAULT_SOUND),
        }
    }

    /// Replace the characteristic sound, applying the same
    /// normalize-or-default rule. Always succeeds.
    pub fn set_sound(&mut self, sound: Option<&str>) {
        self.sound = normalize(sound, DEFAULT_SOUND);
    }

    /// Name accessor; never blank
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classification accessor; never blank
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Sound accessor; never blank
    #[must_use]
    pub fn sound(&self) -> &str {
        &self.sound
    }

    /// One line of the animal making its characteristic sound
    #[must_use]
    pub fn emit_sound(&self) -> String {
        format!("{} says: {}!", self.name, self.sound)
    }

    /// One line of the animal being fed
    #[must_use]
    pub fn feed(&self) -> String {
        format!("{} is eating.", self.name)
    }

    /// One line of the animal sleeping
    #[must_use]
    pub fn sleep(&self) -> String {
        format!("{} is sleeping... zzz", self.name)
    }

    /// Multi-line summary of all three fields
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "=== Animal Profile ===\nName: {}\nCategory: {}\nSound: {}",
            self.name, self.category, self.sound
        )
    }
}

// Compact one-line representation for logs
impl fmt::Display for AnimalProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] - {}", self.name, self.category, self.sound)
    }
}
