pub mod sprint;
pub mod sprint_dto;
pub mod sprint_status;
pub mod timestamp;
