mod submit_contact_message;

pub use submit_contact_message::*;
