//! Notebook ID extraction
//!
//! `notebook download` accepts either a full Colab URL or a bare ID. For
//! URLs the ID is the path segment following `drive`; anything that does
//! not start with the Colab prefix is taken as a bare ID verbatim.

use url::Url;

use super::error::ColabError;

/// Canonical Colab URL prefix
pub const COLAB_URL_PREFIX: &str = "https://colab.research.google.com/";

/// Extract the notebook ID from a Colab URL or bare identifier.
///
/// Inputs starting with the Colab prefix are parsed as URLs and must carry
/// a `drive` path segment followed by the ID; otherwise `MalformedUrl`.
/// Other inputs are returned unchanged, unvalidated.
pub fn extract_notebook_id(url_or_id: &str) -> Result<String, ColabError> {
    if !url_or_id.starts_with(COLAB_URL_PREFIX) {
        return Ok(url_or_id.to_string());
    }

    let url =
        Url::parse(url_or_id).map_err(|_| ColabError::MalformedUrl(url_or_id.to_string()))?;

    let mut segments = url
        .path_segments()
        .ok_or_else(|| ColabError::MalformedUrl(url_or_id.to_string()))?;

    segments
        .find(|segment| *segment == "drive")
        .and_then(|_| segments.next())
        .filter(|id| !id.is_empty())
        .map(|id| id.to_string())
        .ok_or_else(|| ColabError::MalformedUrl(url_or_id.to_string()))
}

/// Default output filename for a downloaded notebook
pub fn default_output_name(notebook_id: &str) -> String {
    format!("colab_notebook_{notebook_id}.ipynb")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_id_from_drive_url() {
        let id =
            extract_notebook_id("https://colab.research.google.com/drive/1A2B3C").unwrap();
        assert_eq!(id, "1A2B3C");
    }

    #[test]
    fn test_ignores_segments_past_the_id() {
        let id = extract_notebook_id(
            "https://colab.research.google.com/drive/1A2B3C/view",
        )
        .unwrap();
        assert_eq!(id, "1A2B3C");
    }

    #[test]
    fn test_bare_id_passes_through() {
        assert_eq!(extract_notebook_id("1A2B3C").unwrap(), "1A2B3C");
    }

    #[test]
    fn test_non_colab_url_is_treated_as_bare_id() {
        // No prefix match means no URL parsing at all
        let id = extract_notebook_id("https://example.com/drive/1A2B3C").unwrap();
        assert_eq!(id, "https://example.com/drive/1A2B3C");
    }

    #[test]
    fn test_url_without_trailing_id_is_malformed() {
        let err =
            extract_notebook_id("https://colab.research.google.com/drive").unwrap_err();
        assert!(matches!(err, ColabError::MalformedUrl(_)));

        let err =
            extract_notebook_id("https://colab.research.google.com/drive/").unwrap_err();
        assert!(matches!(err, ColabError::MalformedUrl(_)));
    }

    #[test]
    fn test_url_without_drive_segment_is_malformed() {
        let err = extract_notebook_id(
            "https://colab.research.google.com/notebook#fileId=upload",
        )
        .unwrap_err();
        assert!(matches!(err, ColabError::MalformedUrl(_)));
    }

    #[test]
    fn test_default_output_name() {
        assert_eq!(
            default_output_name("1A2B3C"),
            "colab_notebook_1A2B3C.ipynb"
        );
    }
}
