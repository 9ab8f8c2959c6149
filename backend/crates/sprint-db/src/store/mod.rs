pub mod sprint_store;
