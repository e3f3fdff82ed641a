//! Document I/O for page rearrangement

use std::path::Path;

use lopdf::Document;

use crate::types::Result;

/// Load a PDF document from raw bytes.
pub fn load_pdf_bytes(bytes: &[u8]) -> Result<Document> {
    Ok(Document::load_mem(bytes)?)
}

/// Serialize the document back to raw bytes.
pub fn pdf_to_bytes(doc: &mut Document) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

/// Load a PDF document from disk.
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || load_pdf_bytes(&bytes)).await??;
    Ok(doc)
}

/// Save the document to disk.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || pdf_to_bytes(&mut doc)).await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rearrange::tests::test_document;

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages.pdf");

        save_pdf(test_document(3), &path).await.unwrap();
        let loaded = load_pdf(&path).await.unwrap();
        assert_eq!(loaded.get_pages().len(), 3);
    }

    #[test]
    fn test_load_pdf_bytes_rejects_garbage() {
        let err = load_pdf_bytes(b"not a pdf").unwrap_err();
        assert!(matches!(err, crate::RearrangeError::Pdf(_)));
    }
}
