use relevance_assistant::data::{
    labels::{format_label, strip_label, write_training_file},
    queries::LabeledQuery,
    taxonomy::Taxonomy,
};

fn row(category: &str, query: &str) -> LabeledQuery {
    LabeledQuery {
        category: category.to_string(),
        query: query.to_string(),
    }
}

#[test]
fn label_prefix_round_trips() {
    let label = format_label("abcat0101001");
    assert_eq!(label, "__label__abcat0101001");
    assert_eq!(strip_label(&label), "abcat0101001");
    assert_eq!(strip_label("bare"), "bare");
}

#[test]
fn training_file_is_unquoted_label_space_query() {
    let taxonomy = Taxonomy::from_edges([("abcat1", "cat00000"), ("abcat2", "cat00000")]);
    let rows = vec![
        row("abcat1", "ipad 2"),
        row("abcat2", "hp touchpad"),
        row("unknown_cat", "dropped row"),
    ];
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labeled_query_data.txt");

    let written = write_training_file(&path, &rows, &taxonomy).unwrap();
    assert_eq!(written, 2);

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec!["__label__abcat1 ipad 2", "__label__abcat2 hp touchpad"]
    );
}
