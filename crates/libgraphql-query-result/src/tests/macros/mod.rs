mod graphql_view;
