use std::io::Write;

use serde_json::json;
use serde_json::Value;
use tempfile::NamedTempFile;

/// Creates a temporary file with the given extension. Files are sparse, so
/// oversized fixtures cost nothing on disk.
pub fn document_fixture(suffix: &str, size: u64) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("lexchat-")
        .suffix(suffix)
        .tempfile()
        .unwrap();

    if size == 0 {
        return file;
    }

    file.write_all(b"%PDF-1.4\n").unwrap();
    file.as_file().set_len(size).unwrap();

    return file;
}

pub fn chat_response_fixture() -> Value {
    return json!({
        "success": true,
        "response": "Section 138 of the Negotiable Instruments Act makes the dishonour of a cheque for insufficiency of funds a criminal offence.",
        "sources": [
            "Negotiable Instruments Act, 1881 - Section 138",
            "Uploaded document: notice.pdf"
        ],
        "confidence": 0.87,
        "processing_time": 1.42
    });
}

pub fn upload_response_fixture() -> Value {
    return json!({
        "success": true,
        "document_id": "doc_4f1c9a",
        "filename": "notice.pdf",
        "text_length": 18234,
        "message": "Document processed and indexed successfully"
    });
}
