use crate::schema::FieldSchema;
use crate::schema::FieldSchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::test::definition_node;
use crate::test::parse_document;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn accessor_names<'a>(schema: &'a FieldSchema<'_>) -> Vec<&'a str> {
    schema.accessor_names().collect()
}

fn build_all(document: &crate::ast::Document) -> Result<Vec<FieldSchema<'_>>> {
    (0..document.definitions.len())
        .map(|idx| FieldSchemaBuilder::from_ast(definition_node(document, idx)).build())
        .collect()
}

#[test]
fn merge_unions_fields_in_left_biased_order() -> Result<()> {
    let document = parse_document(r#"
        fragment foo on Person {
            name
            company
        }

        fragment bar on Person {
            name
            login
        }
    "#);
    let schemas = build_all(&document)?;

    let merged = schemas[0].merge(&schemas[1])?;
    assert_eq!(accessor_names(&merged), vec!["name", "company", "login"]);

    let reversed = schemas[1].merge(&schemas[0])?;
    assert_eq!(accessor_names(&reversed), vec!["name", "login", "company"]);

    Ok(())
}

#[test]
fn merge_recurses_into_shared_nested_fields() -> Result<()> {
    let document = parse_document(r#"
        fragment query1 on Query {
            viewer {
                name
                company
            }
        }

        fragment query2 on Query {
            viewer {
                name
                login
            }
        }
    "#);
    let schemas = build_all(&document)?;

    let merged = schemas[0].merge(&schemas[1])?;

    assert_eq!(accessor_names(&merged), vec!["viewer"]);
    let viewer_schema = merged.field("viewer").unwrap().nested_schema().unwrap();
    assert_eq!(accessor_names(viewer_schema), vec!["name", "company", "login"]);
    assert_eq!(viewer_schema.name(), "query1.viewer");

    Ok(())
}

#[test]
fn merge_recurses_through_several_levels() -> Result<()> {
    let document = parse_document(r#"
        fragment A on Query { viewer { repositories { nodes { name } } } }
        fragment B on Query { viewer { login repositories { totalCount nodes { owner { login } } } } }
    "#);
    let schemas = build_all(&document)?;

    let merged = schemas[0].merge(&schemas[1])?;

    let viewer_schema = merged.field("viewer").unwrap().nested_schema().unwrap();
    assert_eq!(accessor_names(viewer_schema), vec!["repositories", "login"]);
    let repositories_schema =
        viewer_schema.field("repositories").unwrap().nested_schema().unwrap();
    assert_eq!(accessor_names(repositories_schema), vec!["nodes", "total_count"]);
    let nodes_schema = repositories_schema.field("nodes").unwrap().nested_schema().unwrap();
    assert_eq!(accessor_names(nodes_schema), vec!["name", "owner"]);

    Ok(())
}

#[test]
fn nested_schema_on_one_side_is_kept() -> Result<()> {
    let document = parse_document(r#"
        fragment A on Query { viewer }
        fragment B on Query { viewer { login } }
    "#);
    let schemas = build_all(&document)?;

    let left = schemas[0].merge(&schemas[1])?;
    let right = schemas[1].merge(&schemas[0])?;

    for merged in [&left, &right] {
        let viewer_schema = merged.field("viewer").unwrap().nested_schema().unwrap();
        assert_eq!(accessor_names(viewer_schema), vec!["login"]);
    }

    Ok(())
}

#[test]
fn merge_leaves_operands_untouched() -> Result<()> {
    let document = parse_document(r#"
        fragment A on Query { viewer { name } }
        fragment B on Query { viewer { login } version }
    "#);
    let schemas = build_all(&document)?;
    let left_before = schemas[0].clone();
    let right_before = schemas[1].clone();

    let merged = schemas[0].merge(&schemas[1])?;

    assert_eq!(schemas[0], left_before);
    assert_eq!(schemas[1], right_before);
    assert_ne!(merged, schemas[0]);

    Ok(())
}

#[test]
fn merged_schema_keeps_left_name_and_source_node() -> Result<()> {
    let document = parse_document(r#"
        fragment A on Query { name }
        fragment B on Query { login }
    "#);
    let schemas = build_all(&document)?;

    let merged = schemas[0].merge(&schemas[1])?;

    assert_eq!(merged.name(), "A");
    assert_eq!(merged.source_node(), schemas[0].source_node());

    Ok(())
}

#[test]
fn merge_with_empty_schema_is_identity() -> Result<()> {
    let document = parse_document(r#"
        fragment A on Query { name viewer { login } }
        fragment B on Query { ...A }
    "#);
    let schemas = build_all(&document)?;

    assert_eq!(schemas[0].merge(&schemas[1])?, schemas[0]);
    assert_eq!(schemas[1].merge(&schemas[0])?, schemas[0]);

    Ok(())
}

#[test]
fn merge_is_associative() -> Result<()> {
    let document = parse_document(r#"
        fragment A on Query { a viewer { x } }
        fragment B on Query { b viewer { y } a }
        fragment C on Query { viewer { z x } c }
    "#);
    let schemas = build_all(&document)?;

    let left_first = schemas[0].merge(&schemas[1])?.merge(&schemas[2])?;
    let right_first = schemas[0].merge(&schemas[1].merge(&schemas[2])?)?;

    assert_eq!(left_first, right_first);
    assert_eq!(accessor_names(&left_first), vec!["a", "viewer", "b", "c"]);

    Ok(())
}

#[test]
fn merge_rejects_conflicting_accessor_names() -> Result<()> {
    let document = parse_document(r#"
        fragment A on Query { firstName }
        fragment B on Query { first_name }
    "#);
    let schemas = build_all(&document)?;

    let result = schemas[0].merge(&schemas[1]);

    assert!(matches!(
        result,
        Err(SchemaBuildError::ConflictingAccessorName { ref accessor_name, .. })
            if accessor_name == "first_name"
    ));

    Ok(())
}
