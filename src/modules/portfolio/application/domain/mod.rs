pub mod entities;
pub mod section_body;
