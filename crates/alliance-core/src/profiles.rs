use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Brand,
    Organization,
}

impl std::fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileKind::Brand => write!(f, "brand"),
            ProfileKind::Organization => write!(f, "organization"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandAudience {
    /// Age bracket such as `25-34`.
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub region: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationAudience {
    /// Audience size bracket such as `100k-500k`.
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub audience: Option<BrandAudience>,
    #[serde(default)]
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub org_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub audience: Option<OrganizationAudience>,
    #[serde(default)]
    pub partnership_types: Vec<String>,
}

/// A brand or partner organization, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Profile {
    Brand(BrandProfile),
    Organization(OrganizationProfile),
}

impl Profile {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Profile::Brand(b) => &b.id,
            Profile::Organization(o) => &o.id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Profile::Brand(b) => &b.name,
            Profile::Organization(o) => &o.name,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Profile::Brand(b) => &b.description,
            Profile::Organization(o) => &o.description,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ProfileKind {
        match self {
            Profile::Brand(_) => ProfileKind::Brand,
            Profile::Organization(_) => ProfileKind::Organization,
        }
    }

    /// Industry for brands, organization type for organizations.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Profile::Brand(b) => &b.industry,
            Profile::Organization(o) => &o.org_type,
        }
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Profile::Brand(b) => &b.values,
            Profile::Organization(o) => &o.values,
        }
    }

    /// Audience region, or `None` when the profile carries no audience block.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        match self {
            Profile::Brand(b) => b.audience.as_ref().map(|a| a.region.as_str()),
            Profile::Organization(o) => o.audience.as_ref().map(|a| a.region.as_str()),
        }
    }

    /// Partnership goals. Organizations declare none.
    #[must_use]
    pub fn goals(&self) -> &[String] {
        match self {
            Profile::Brand(b) => &b.goals,
            Profile::Organization(_) => &[],
        }
    }

    /// Offered partnership types. Brands declare none.
    #[must_use]
    pub fn partnership_types(&self) -> &[String] {
        match self {
            Profile::Brand(_) => &[],
            Profile::Organization(o) => &o.partnership_types,
        }
    }
}

/// An in-memory profile collection, read-only once loaded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfilesFile {
    pub profiles: Vec<Profile>,
}

/// Either `profiles: [...]` or a bare list, as exported by older tooling.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProfilesDocument {
    Wrapped { profiles: Vec<Profile> },
    Bare(Vec<Profile>),
}

impl ProfilesFile {
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id() == id)
    }

    pub fn by_kind(&self, kind: ProfileKind) -> impl Iterator<Item = &Profile> {
        self.profiles.iter().filter(move |p| p.kind() == kind)
    }
}

/// Load and validate a profile collection from a YAML or JSON file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_profiles(path: &Path) -> Result<ProfilesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProfilesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let profiles_file = parse_profiles(&content)?;
    tracing::debug!(
        path = %path.display(),
        count = profiles_file.profiles.len(),
        "loaded profiles"
    );
    Ok(profiles_file)
}

/// Parse and validate a profile collection from YAML or JSON text.
///
/// # Errors
///
/// Returns `ConfigError` if the text cannot be parsed or fails validation.
pub fn parse_profiles(content: &str) -> Result<ProfilesFile, ConfigError> {
    let profiles = match serde_yaml::from_str::<ProfilesDocument>(content)? {
        ProfilesDocument::Wrapped { profiles } | ProfilesDocument::Bare(profiles) => profiles,
    };
    let profiles_file = ProfilesFile { profiles };
    validate_profiles(&profiles_file)?;
    Ok(profiles_file)
}

fn validate_profiles(profiles_file: &ProfilesFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for profile in &profiles_file.profiles {
        if profile.id().trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "profile '{}' has an empty id",
                profile.name()
            )));
        }

        if profile.name().trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "profile '{}' has an empty name",
                profile.id()
            )));
        }

        if !seen_ids.insert(profile.id()) {
            return Err(ConfigError::Validation(format!(
                "duplicate profile id: '{}'",
                profile.id()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "profiles_test.rs"]
mod tests;
