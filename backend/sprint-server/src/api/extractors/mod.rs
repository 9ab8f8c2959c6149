pub mod sprint_json;
