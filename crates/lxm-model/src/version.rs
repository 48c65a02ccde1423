//! Schema version inspection and the external-validator seam.
//!
//! The merge engines assume well-formed input and never validate schemas
//! themselves; callers run these checks before or after a merge.

use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{ModelError, ModelResult};
use crate::names;

/// The lexicon schema version this build reads and writes.
pub const SUPPORTED_VERSION: &str = "0.13";

/// External schema validation collaborator.
///
/// `None` means the document is clean; `Some` carries the validator's
/// diagnostic message.
pub trait Validate {
    fn validate(&self, path: &Path) -> Option<String>;
}

/// Read the declared version from a document's root element.
///
/// Only the root start tag is inspected; comments before it are skipped and
/// the rest of the file is never read. A missing or version-less root is a
/// typed format error, not an I/O error.
pub fn document_version(path: &Path) -> ModelResult<String> {
    let text = std::fs::read_to_string(path)?;
    let mut reader = Reader::from_str(&text);
    loop {
        match reader.read_event()? {
            Event::Start(start) | Event::Empty(start) => {
                if start.name().as_ref() != names::ROOT.as_bytes() {
                    return Err(ModelError::UnexpectedRoot {
                        expected: names::ROOT.to_string(),
                        found: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
                    });
                }
                for attribute in start.attributes() {
                    let attribute = attribute?;
                    if attribute.key.as_ref() == names::ATTR_VERSION.as_bytes() {
                        return Ok(attribute.unescape_value()?.into_owned());
                    }
                }
                return Err(ModelError::MissingVersion {
                    path: path.to_path_buf(),
                });
            }
            Event::Eof => {
                return Err(ModelError::MissingVersion {
                    path: path.to_path_buf(),
                })
            }
            _ => {}
        }
    }
}

/// Check a document's declared version against [`SUPPORTED_VERSION`].
pub fn check_version(path: &Path) -> ModelResult<()> {
    let found = document_version(path)?;
    if found != SUPPORTED_VERSION {
        return Err(ModelError::VersionMismatch {
            path: path.to_path_buf(),
            expected: SUPPORTED_VERSION.to_string(),
            found: found.clone(),
            detail: format!("declared version {found} is not readable by this build"),
        });
    }
    Ok(())
}

/// Run the version check, then the external validator.
pub fn check_document(path: &Path, validator: &dyn Validate) -> ModelResult<()> {
    check_version(path)?;
    if let Some(message) = validator.validate(path) {
        return Err(ModelError::InvalidDocument {
            path: path.to_path_buf(),
            message,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    struct AlwaysClean;
    impl Validate for AlwaysClean {
        fn validate(&self, _path: &Path) -> Option<String> {
            None
        }
    }

    struct AlwaysDirty;
    impl Validate for AlwaysDirty {
        fn validate(&self, _path: &Path) -> Option<String> {
            Some("element out of place".to_string())
        }
    }

    #[test]
    fn reads_version_from_root() {
        let file = write_temp("<!-- produced externally --><lift version='0.13'><entry id='a'/></lift>");
        assert_eq!(document_version(file.path()).unwrap(), "0.13");
    }

    #[test]
    fn missing_version_is_a_format_error() {
        let file = write_temp("<lift><entry id='a'/></lift>");
        assert!(matches!(
            document_version(file.path()),
            Err(ModelError::MissingVersion { .. })
        ));
    }

    #[test]
    fn mismatch_names_both_versions_and_the_path() {
        let file = write_temp("<lift version='0.10'/>");
        let err = check_version(file.path()).unwrap_err();
        match err {
            ModelError::VersionMismatch { expected, found, path, .. } => {
                assert_eq!(expected, "0.13");
                assert_eq!(found, "0.10");
                assert_eq!(path, file.path());
            }
            other => panic!("expected VersionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn validator_diagnostic_becomes_typed_error() {
        let file = write_temp("<lift version='0.13'/>");
        assert!(check_document(file.path(), &AlwaysClean).is_ok());
        let err = check_document(file.path(), &AlwaysDirty).unwrap_err();
        assert!(matches!(err, ModelError::InvalidDocument { .. }));
    }
}
