pub mod field_schema;
pub mod prelude;
pub mod validation_engine;
pub mod validation_rules;
