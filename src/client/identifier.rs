use crate::error::StacError;

/// Group and artifact name parsed from a dotted full name
///
/// `com.example.services.auth` splits at the last dot into group
/// `com.example.services` and name `auth`. A name without dots has an
/// empty group. The artifact name is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactIdentifier {
    pub group: String,
    pub name: String,
}

impl ArtifactIdentifier {
    /// # Errors
    /// * `StacError::InvalidArgument` - nothing follows the last dot, or `full_name` is empty
    pub fn parse(full_name: &str) -> Result<Self, StacError> {
        let (group, name) = full_name.rsplit_once('.').unwrap_or(("", full_name));
        if name.is_empty() {
            return Err(StacError::InvalidArgument(format!(
                "Artifact name missing in '{}'",
                full_name
            )));
        }

        Ok(Self {
            group: group.to_string(),
            name: name.to_string(),
        })
    }
}
