mod field_schema_merge_tests;
