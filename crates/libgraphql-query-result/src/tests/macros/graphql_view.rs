use crate as libgraphql_query_result;
use crate::ResultView;
use crate::ViewError;
use crate::macros::graphql_view;
use serde_json::json;

graphql_view! {
    struct PersonFragment = r#"
        fragment PersonFragment on Person {
            fullName
            company
            verified
        }
    "#;
}

graphql_view! {
    /// A repository with its owner and issues.
    struct RepositoryQuery = r#"
        query RepositoryQuery {
            repository {
                nameWithOwner
                owner {
                    login
                }
                issues(first: 10) {
                    title
                }
                issues(first: 10) {
                    number
                }
                labels {
                    name
                }
            }
        }
    "#;
}

graphql_view! {
    pub(crate) struct ShipsQuery = r#"
        query {
            rebels {
                ships(first: 2) {
                    edges {
                        cursor
                        node {
                            name
                        }
                    }
                }
            }
        }
    "#;
}

graphql_view! {
    struct KeywordQuery = r#"
        query {
            type
            self
            node {
                match
            }
        }
    "#
}

#[test]
fn reads_scalars_through_accessors() {
    let data = json!({
        "fullName": "Joshua Peek",
        "company": null,
        "verified": false,
    });

    let person = PersonFragment::new(&data);

    assert_eq!(person.full_name().as_str(), Some("Joshua Peek"));
    assert!(person.company().is_null());
    assert_eq!(person.verified().as_bool(), Some(false));
    assert!(person.has_full_name());
    assert!(!person.has_company());
    assert!(!person.has_verified());
}

#[test]
fn keeps_runtime_checked_access() -> Result<(), ViewError> {
    let data = json!({ "fullName": "Joshua Peek" });

    let person = PersonFragment::new(&data);

    assert_eq!(person.get("full_name")?.as_str(), Some("Joshua Peek"));
    assert!(person.has("full_name")?);
    assert!(person.supports("company"));
    assert!(!person.supports("name"));
    assert_eq!(person.type_name(), "PersonFragment");
    assert_eq!(person.data(), &data);
    assert_eq!(
        person.get("name").unwrap_err().to_string(),
        "Undefined field `name` for PersonFragment { fullName: \"Joshua Peek\" }",
    );

    Ok(())
}

#[test]
fn schema_is_built_once() {
    let schema = PersonFragment::schema();

    assert!(std::ptr::eq(schema, PersonFragment::schema()));
    assert_eq!(schema.name(), "PersonFragment");
    assert_eq!(
        schema.accessor_names().collect::<Vec<_>>(),
        vec!["full_name", "company", "verified"],
    );
}

#[test]
fn displays_like_its_view() {
    let data = json!({ "fullName": "Joshua Peek" });

    let person = PersonFragment::new(&data);

    assert_eq!(person.to_string(), "PersonFragment { fullName: \"Joshua Peek\" }");
}

mod nested {
    use super::*;

    fn repository_data() -> serde_json::Value {
        json!({
            "repository": {
                "nameWithOwner": "github/graphql-client",
                "owner": { "login": "github" },
                "issues": [
                    { "title": "Bug", "number": 1 },
                    { "title": "Feature", "number": 2 },
                ],
                "labels": [[{ "name": "bug" }], [{ "name": "docs" }, null]],
            },
        })
    }

    #[test]
    fn reads_through_nested_structs() {
        let data = repository_data();

        let query = RepositoryQuery::new(&data);
        let repository = query.repository().object().unwrap();
        let owner = repository.owner().object().unwrap();

        assert_eq!(
            repository.name_with_owner().as_str(),
            Some("github/graphql-client"),
        );
        assert_eq!(owner.login().as_str(), Some("github"));
        assert_eq!(owner.type_name(), "RepositoryQuery.repository.owner");
    }

    #[test]
    fn merged_selections_read_as_one_field() {
        let data = repository_data();

        let query = RepositoryQuery::new(&data);
        let repository = query.repository().object().unwrap();
        let issues: Vec<(&str, i64)> =
            repository.issues()
                .objects()
                .map(|issue| (
                    issue.title().as_str().unwrap(),
                    issue.number().as_i64().unwrap(),
                ))
                .collect();

        assert_eq!(issues, vec![("Bug", 1), ("Feature", 2)]);
    }

    #[test]
    fn lists_of_lists_flatten_into_objects() {
        let data = repository_data();

        let query = RepositoryQuery::new(&data);
        let repository = query.repository().object().unwrap();
        let labels: Vec<&str> =
            repository.labels()
                .objects()
                .filter_map(|label| label.name().as_str())
                .collect();

        assert_eq!(labels, vec!["bug", "docs"]);
        assert_eq!(repository.labels().value().as_list().map(<[_]>::len), Some(2));
    }

    #[test]
    fn null_and_missing_nested_values() {
        let data = json!({ "repository": { "owner": null } });

        let query = RepositoryQuery::new(&data);
        let repository = query.repository().object().unwrap();

        assert!(repository.owner().is_null());
        assert!(repository.owner().object().is_none());
        assert!(repository.issues().is_absent());
        assert_eq!(repository.issues().objects().count(), 0);
        assert!(!repository.has_owner());
    }

    #[test]
    fn repeated_reads_share_child_views() {
        let data = repository_data();

        let query = RepositoryQuery::new(&data);
        let first = query.repository().object().unwrap();
        let second = query.repository().object().unwrap();

        assert!(std::ptr::eq(first.as_view(), second.as_view()));
    }
}

mod connections {
    use super::*;

    #[test]
    fn nodes_are_typed() {
        let data = json!({
            "rebels": {
                "ships": {
                    "edges": [
                        { "cursor": "1", "node": { "name": "X-Wing" } },
                        { "cursor": "2", "node": { "name": "Y-Wing" } },
                    ],
                },
            },
        });

        let query = ShipsQuery::new(&data);
        let ships = query.rebels().object().unwrap().ships().object().unwrap();
        let names: Vec<&str> =
            ships.nodes()
                .filter_map(|ship| ship.object())
                .filter_map(|ship| ship.name().as_str())
                .collect();

        assert_eq!(names, vec!["X-Wing", "Y-Wing"]);
        assert_eq!(ships.nodes().count(), 2);
    }

    #[test]
    fn missing_edges_yield_no_nodes() {
        let data = json!({ "rebels": { "ships": {} } });

        let query = ShipsQuery::new(&data);
        let ships = query.rebels().object().unwrap().ships().object().unwrap();

        assert_eq!(ships.nodes().count(), 0);
    }
}

#[test]
fn keyword_fields_use_escaped_accessors() {
    let data = json!({
        "type": "Starship",
        "self": "ship:1",
        "node": { "match": true },
    });

    let query = KeywordQuery::new(&data);

    assert_eq!(query.r#type().as_str(), Some("Starship"));
    assert_eq!(query.self_().as_str(), Some("ship:1"));
    assert_eq!(
        query.node().object().unwrap().r#match().as_bool(),
        Some(true),
    );
    assert!(query.has_type());
}
