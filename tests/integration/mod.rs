// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture helper for building real PDF files in a temporary directory.
pub struct PdfFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl PdfFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a PDF with one page per entry in `pages`; an empty entry
    /// produces a page with no text operations.
    pub fn create_pdf(&self, name: &str, pages: &[&str]) -> PathBuf {
        let path = self.root_path.join(name);
        let mut doc = Document::with_version("1.5");

        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page_text in pages {
            let mut operations = vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 750.into()]),
            ];
            if !page_text.is_empty() {
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(*page_text)],
                ));
            }
            operations.push(Operation::new("ET", vec![]));

            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("Failed to encode page content"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();
        doc.save(&path).expect("Failed to save fixture PDF");
        path
    }
}
