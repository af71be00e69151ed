pub mod email;
pub mod password;
pub mod projection;
pub mod slug;
