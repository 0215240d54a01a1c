use docs_harvest::combine::combine_texts;
use tempfile::TempDir;

#[test]
fn test_combine_extracted_tree() {
    let dir = TempDir::new().unwrap();
    let pages = dir.path().join("pages");
    std::fs::create_dir_all(pages.join("x.com/docs")).unwrap();
    std::fs::write(pages.join("x.com/docs.txt"), "Home").unwrap();
    std::fs::write(pages.join("x.com/docs/guide.txt"), "Guide\nSteps").unwrap();
    std::fs::write(pages.join("x.com/docs/readme.md"), "ignored").unwrap();

    let output = dir.path().join("out/all.txt");
    let count = combine_texts(&pages, &output).unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "# Source: x.com/docs/guide.txt\nGuide\nSteps\n\n# Source: x.com/docs.txt\nHome\n\n"
    );
}
