use std::path::Path;

use anyhow::Result;
use test_utils::document_fixture;

use super::mime_for_path;
use super::prepare;
use super::validate;
use super::UploadRejection;
use super::MAX_UPLOAD_BYTES;

#[test]
fn it_resolves_mime_types_from_extensions() {
    assert_eq!(mime_for_path(Path::new("notice.pdf")), "application/pdf");
    assert_eq!(mime_for_path(Path::new("scan.JPG")), "image/jpeg");
    assert_eq!(mime_for_path(Path::new("scan.tiff")), "image/tiff");
    assert_eq!(mime_for_path(Path::new("scan.bmp")), "image/bmp");
    assert_eq!(
        mime_for_path(Path::new("contract.docx")),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
}

#[test]
fn it_accepts_allowed_types_within_limit() {
    assert!(validate("application/pdf", 1024).is_ok());
    assert!(validate("image/png", MAX_UPLOAD_BYTES).is_ok());
    assert!(validate("image/jpg", 0).is_ok());
}

#[test]
fn it_rejects_disallowed_types() {
    let res = validate("text/plain", 10);
    assert_eq!(
        res,
        Err(UploadRejection::UnsupportedType {
            mime: "text/plain".to_string()
        })
    );
}

#[test]
fn it_rejects_oversized_files() {
    let res = validate("application/pdf", MAX_UPLOAD_BYTES + 1);
    assert!(matches!(res, Err(UploadRejection::TooLarge { .. })));

    let err = validate("application/pdf", 60 * 1024 * 1024).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"File is too large (60 MB). The maximum size is 50 MB.");
}

#[tokio::test]
async fn it_prepares_valid_files() -> Result<()> {
    let file = document_fixture(".pdf", 2048);
    let req = prepare(&file.path().to_string_lossy()).await?;

    assert_eq!(req.mime, "application/pdf");
    assert_eq!(req.size, 2048);
    assert!(req.file_name.ends_with(".pdf"));
    assert_eq!(req.path, file.path());
    return Ok(());
}

#[tokio::test]
async fn it_refuses_oversized_files_before_upload() {
    let file = document_fixture(".pdf", 60 * 1024 * 1024);
    let res = prepare(&file.path().to_string_lossy()).await;

    assert_eq!(
        res,
        Err(UploadRejection::TooLarge {
            size: 60 * 1024 * 1024
        })
    );
}

#[tokio::test]
async fn it_refuses_missing_files() {
    let res = prepare("./does-not-exist/notice.pdf").await;
    assert!(matches!(res, Err(UploadRejection::Unreadable { .. })));
}

#[tokio::test]
async fn it_refuses_unsupported_files() {
    let file = document_fixture(".txt", 10);
    let res = prepare(&file.path().to_string_lossy()).await;
    assert!(matches!(res, Err(UploadRejection::UnsupportedType { .. })));
}
