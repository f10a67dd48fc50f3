//! Download URL generation per repository layout

/// Builds the download URL of one version of an artifact
///
/// Implementations are specific to a repository layout (Maven, npm, ...).
pub trait ArtifactUrlGenerator: Send + Sync {
    fn get_url(
        &self,
        group: &str,
        artifact: &str,
        packaging: &str,
        version: &str,
        descriptor: Option<&str>,
    ) -> String;
}

/// URL generator for Maven layout repositories
///
/// `{base}/{repo}/{group/as/path}/{artifact}/{version}/{artifact}-{version}[-{descriptor}].{packaging}`
pub struct MavenArtifactUrlGenerator {
    base_url: String,
    repo: String,
}

impl MavenArtifactUrlGenerator {
    pub fn new(base_url: &str, repo: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            repo: repo.to_string(),
        }
    }
}

impl ArtifactUrlGenerator for MavenArtifactUrlGenerator {
    fn get_url(
        &self,
        group: &str,
        artifact: &str,
        packaging: &str,
        version: &str,
        descriptor: Option<&str>,
    ) -> String {
        let file_name = match descriptor {
            Some(descriptor) => format!("{artifact}-{version}-{descriptor}.{packaging}"),
            None => format!("{artifact}-{version}.{packaging}"),
        };

        let group_path = group.replace('.', "/");
        let mut segments = vec![self.base_url.as_str(), self.repo.as_str()];
        if !group_path.is_empty() {
            segments.push(&group_path);
        }
        segments.extend([artifact, version, file_name.as_str()]);

        segments.join("/")
    }
}
