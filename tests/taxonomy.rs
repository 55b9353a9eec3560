use std::io::Write;

use relevance_assistant::data::taxonomy::{Taxonomy, DEFAULT_ROOT_CATEGORY};

const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<categories>
  <category>
    <id>cat00000</id>
    <name>Best Buy</name>
    <path>
      <category><id>cat00000</id><name>Best Buy</name></category>
    </path>
  </category>
  <category>
    <id>abcat0100000</id>
    <name>TV &amp; Home Theater</name>
    <path>
      <category><id>cat00000</id><name>Best Buy</name></category>
      <category><id>abcat0100000</id><name>TV &amp; Home Theater</name></category>
    </path>
  </category>
  <category>
    <id>abcat0101000</id>
    <name>TVs</name>
    <path>
      <category><id>cat00000</id><name>Best Buy</name></category>
      <category><id>abcat0100000</id><name>TV &amp; Home Theater</name></category>
      <category><id>abcat0101000</id><name>TVs</name></category>
    </path>
  </category>
</categories>
"#;

#[test]
fn parses_leaf_and_parent_from_paths() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("categories.xml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(SAMPLE_XML.as_bytes()).unwrap();

    let taxonomy = Taxonomy::from_xml_file(&path, DEFAULT_ROOT_CATEGORY).unwrap();

    assert_eq!(taxonomy.len(), 2);
    assert!(!taxonomy.contains("cat00000"));
    assert_eq!(taxonomy.parent("abcat0100000"), Some("cat00000"));
    assert_eq!(taxonomy.parent("abcat0101000"), Some("abcat0100000"));
}
